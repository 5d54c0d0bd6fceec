//! Output helpers for the CLI.

mod diagnostic;

pub use diagnostic::FtlDiagnostic;
