//! Implementation of the `ftl check` command.

use std::collections::HashSet;
use std::fs::read_to_string;
use std::path::PathBuf;

use ftl::parse_resource;
use serde::Serialize;

use crate::output::FtlDiagnostic;

/// Maximum number of errors to display per file before truncating.
const MAX_ERRORS_PER_FILE: usize = 10;

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Files to check (.ftl)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Check against a source resource for message coverage
    #[arg(long)]
    pub strict: Option<PathBuf>,
}

/// JSON output for check results.
#[derive(Serialize)]
pub struct CheckResult {
    pub files: Vec<FileResult>,
    pub total_errors: usize,
}

/// JSON output for a single file's check result.
#[derive(Serialize)]
pub struct FileResult {
    pub path: String,
    pub status: FileStatus,
    pub errors: Vec<ErrorInfo>,
}

/// Status of a file check.
#[derive(Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileStatus {
    Ok,
    Error,
    NotFound,
}

/// JSON output for a single error.
#[derive(Serialize)]
pub struct ErrorInfo {
    pub line: usize,
    pub column: usize,
    pub message: String,
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> miette::Result<i32> {
    // If --strict mode, parse the source resource first to get message ids
    let source_ids = if let Some(source_path) = &args.strict {
        let content = read_to_string(source_path).map_err(|e| {
            miette::miette!("Cannot read source file {}: {}", source_path.display(), e)
        })?;
        let (entries, errors) = parse_resource(&content);
        if let Some(first) = errors.first() {
            return Err(miette::miette!("Source file parse error: {}", first));
        }
        Some(
            entries
                .into_iter()
                .map(|(id, _)| id)
                .collect::<HashSet<String>>(),
        )
    } else {
        None
    };

    let mut total_errors = 0;
    let mut results = Vec::new();

    for path in &args.files {
        let (file_result, errors) = check_file(path, source_ids.as_ref(), args.json);
        total_errors += errors;
        results.push(file_result);
    }

    if args.json {
        let output = CheckResult {
            files: results,
            total_errors,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&output).expect("JSON serialization should not fail")
        );
    } else if total_errors == 0 && args.files.len() > 1 {
        println!("Checked {} files, no errors", args.files.len());
    }

    Ok(if total_errors > 0 {
        exitcode::DATAERR
    } else {
        exitcode::OK
    })
}

/// Check a single file and return results.
fn check_file(
    path: &PathBuf,
    source_ids: Option<&HashSet<String>>,
    json_mode: bool,
) -> (FileResult, usize) {
    let content = match read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            if !json_mode {
                eprintln!("{}: cannot read file: {}", path.display(), e);
            }
            return (
                FileResult {
                    path: path.display().to_string(),
                    status: FileStatus::NotFound,
                    errors: vec![ErrorInfo {
                        line: 0,
                        column: 0,
                        message: format!("cannot read file: {}", e),
                    }],
                },
                1,
            );
        }
    };

    let (entries, parse_errors) = parse_resource(&content);

    let mut errors: Vec<ErrorInfo> = Vec::new();
    for err in &parse_errors {
        if !json_mode && errors.len() < MAX_ERRORS_PER_FILE {
            let diagnostic = FtlDiagnostic::from_parse_error(path, &content, err);
            eprintln!("{:?}", miette::Report::new(diagnostic));
        }
        let (line, column) = err.position();
        errors.push(ErrorInfo {
            line,
            column,
            message: err.to_string(),
        });
    }

    // Check for missing messages if --strict mode
    if let Some(source_ids) = source_ids {
        let target_ids: HashSet<&str> = entries.iter().map(|(id, _)| id.as_str()).collect();
        let mut missing: Vec<&String> = source_ids
            .iter()
            .filter(|id| !target_ids.contains(id.as_str()))
            .collect();
        missing.sort();

        if !missing.is_empty() && !json_mode {
            eprintln!(
                "{}: missing {} messages from source:",
                path.display(),
                missing.len()
            );
            for (i, id) in missing.iter().enumerate() {
                if i < MAX_ERRORS_PER_FILE {
                    eprintln!("  - {}", id);
                }
            }
            if missing.len() > MAX_ERRORS_PER_FILE {
                eprintln!("  ... and {} more", missing.len() - MAX_ERRORS_PER_FILE);
            }
        }
        for id in missing {
            errors.push(ErrorInfo {
                line: 0,
                column: 0,
                message: format!("missing message: {}", id),
            });
        }
    }

    if errors.is_empty() {
        if !json_mode {
            println!("{}: OK", path.display());
        }
        (
            FileResult {
                path: path.display().to_string(),
                status: FileStatus::Ok,
                errors: vec![],
            },
            0,
        )
    } else {
        let count = errors.len();
        (
            FileResult {
                path: path.display().to_string(),
                status: FileStatus::Error,
                errors,
            },
            count,
        )
    }
}
