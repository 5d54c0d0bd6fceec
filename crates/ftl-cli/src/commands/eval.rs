//! Implementation of the `ftl eval` command.

use std::collections::HashMap;
use std::fs::read_to_string;
use std::path::PathBuf;

use ftl::{MessageContext, Value};
use serde::Serialize;

/// Arguments for the eval command.
#[derive(Debug, clap::Args)]
pub struct EvalArgs {
    /// Resource file with message definitions (.ftl)
    #[arg(long, required = true)]
    pub resource: PathBuf,

    /// Message id to format; use `id.attr` for an attribute
    #[arg(long, required = true)]
    pub message: String,

    /// BCP-47 locale tag for plural rules and formatting
    #[arg(long, default_value = "en-US")]
    pub locale: String,

    /// Disable bidi isolation of interpolated values
    #[arg(long)]
    pub no_isolating: bool,

    /// Arguments in name=value format (repeatable)
    #[arg(short = 'a', long = "arg", value_parser = parse_key_val)]
    pub args: Vec<(String, String)>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for eval results.
#[derive(Serialize)]
pub struct EvalResult {
    pub result: String,
    pub errors: Vec<String>,
}

/// Parse a key=value argument string.
fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let pos = s
        .find('=')
        .ok_or_else(|| format!("invalid argument format '{}': expected name=value", s))?;
    Ok((s[..pos].to_string(), s[pos + 1..].to_string()))
}

/// Run the eval command.
pub fn run_eval(args: EvalArgs) -> miette::Result<i32> {
    let content = read_to_string(&args.resource).map_err(|e| {
        miette::miette!("Cannot read resource file {}: {}", args.resource.display(), e)
    })?;

    let mut ctx = MessageContext::builder()
        .locale(args.locale)
        .use_isolating(!args.no_isolating)
        .build();

    let install_errors = ctx.add_messages(&content);
    for err in &install_errors {
        eprintln!("warning: {}", err);
    }

    // Convert arguments: integers and floats become numbers, everything
    // else stays a string.
    let params: HashMap<String, Value> = args
        .args
        .into_iter()
        .map(|(k, v)| {
            let value = if let Ok(n) = v.parse::<i64>() {
                Value::from(n)
            } else if let Ok(f) = v.parse::<f64>() {
                Value::from(f)
            } else {
                Value::from(v)
            };
            (k, value)
        })
        .collect();

    let mut errors = Vec::new();
    let result = ctx.format(&args.message, Some(&params), &mut errors);

    let Some(result) = result else {
        if args.json {
            let output = serde_json::json!({
                "error": format!("message '{}' has no value", args.message)
            });
            eprintln!(
                "{}",
                serde_json::to_string_pretty(&output).expect("JSON serialization should not fail")
            );
        } else {
            eprintln!("Error: message '{}' has no value", args.message);
        }
        return Ok(exitcode::DATAERR);
    };

    if args.json {
        let output = EvalResult {
            result,
            errors: errors.iter().map(ToString::to_string).collect(),
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&output).expect("JSON serialization should not fail")
        );
    } else {
        println!("{}", result);
        for err in &errors {
            eprintln!("warning: {}", err);
        }
    }

    Ok(exitcode::OK)
}
