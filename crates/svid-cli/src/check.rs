//! # Check Command
//!
//! Validates one number, prints the report, and records failed checks to the
//! audit log. This is the composition root: it opens the log sink, hands it
//! to the validator, and drops it when the run ends.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use svid_core::{TracingLog, ValidationLog, Validator};

use crate::file_log::{FileLog, DEFAULT_LOG_FILE};
use crate::report::{render_json, render_text};

/// Printed when no number is given.
pub const USAGE: &str = "Argument saknas!\nAnvändning: svid <nummer> ";

/// Arguments for validating a single number.
#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    /// The number to validate: YYMMDDXXXK, YYMMDD-XXXK, YYYYMMDDXXXK or YYYYMMDD-XXXK.
    #[arg(value_name = "NUMBER")]
    pub number: Option<String>,

    /// Append failed checks to this file.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,

    /// Do not write an audit log file.
    #[arg(long, conflicts_with = "log_file")]
    pub no_log_file: bool,

    /// Print the result as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Open the audit sink for this run.
///
/// Falls back to tracing output when the file is disabled or cannot be
/// opened; a missing audit file never stops validation.
pub fn open_log(args: &CheckArgs) -> Box<dyn ValidationLog> {
    if args.no_log_file {
        return Box::new(TracingLog);
    }
    match FileLog::open(&args.log_file) {
        Ok(log) => Box::new(log),
        Err(e) => {
            eprintln!("Kunde inte skapa loggfilen.");
            tracing::warn!(path = %args.log_file.display(), error = %e, "audit log unavailable");
            Box::new(TracingLog)
        }
    }
}

/// Execute the check.
///
/// Returns exit code 0 whenever a verdict was printed, including `Invalid`
/// and format errors. Only operational failures surface as `Err`.
pub fn run_check(args: &CheckArgs) -> Result<u8> {
    let Some(number) = args.number.as_deref() else {
        println!("{USAGE}");
        return Ok(0);
    };

    let validator = Validator::new(open_log(args));
    let outcome = validator.classify(number);

    match &outcome {
        Ok(c) => tracing::info!(input = number, kind = %c.kind, "validated"),
        Err(e) => tracing::info!(input = number, error = %e, "rejected by format check"),
    }

    if args.json {
        let json = render_json(number, &outcome).context("failed to serialize report")?;
        println!("{json}");
    } else {
        print!("{}", render_text(number, &outcome));
    }

    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(number: Option<&str>, log_file: PathBuf) -> CheckArgs {
        CheckArgs {
            number: number.map(str::to_string),
            log_file,
            no_log_file: false,
            json: false,
        }
    }

    #[test]
    fn missing_number_prints_usage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("validation.log");
        assert_eq!(run_check(&args(None, path.clone())).unwrap(), 0);
        // No validation ran, so no log was opened.
        assert!(!path.exists());
    }

    #[test]
    fn failed_checks_reach_the_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("validation.log");

        assert_eq!(run_check(&args(Some("8507099806"), path.clone())).unwrap(), 0);

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].ends_with("invalid check digit for personal identity number: 8507099806"));
        assert!(lines[2].ends_with("middle digit pair is less than 20 for organization number: 8507099806"));
    }

    #[test]
    fn valid_number_leaves_log_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("validation.log");

        assert_eq!(run_check(&args(Some("850709-9805"), path.clone())).unwrap(), 0);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn format_error_exits_zero() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("validation.log");

        let mut a = args(Some("85-07"), path.clone());
        a.json = true;
        assert_eq!(run_check(&a).unwrap(), 0);
        assert_eq!(std::fs::read_to_string(&path).unwrap().lines().count(), 1);
    }

    #[test]
    fn unopenable_log_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("validation.log");
        assert_eq!(run_check(&args(Some("5560360793"), path.clone())).unwrap(), 0);
        assert!(!path.exists());
    }

    #[test]
    fn disabled_log_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("validation.log");
        let mut a = args(Some("8507099806"), path.clone());
        a.no_log_file = true;
        assert_eq!(run_check(&a).unwrap(), 0);
        assert!(!path.exists());
    }
}
