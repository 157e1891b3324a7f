//! # Audit Log File
//!
//! Append-only file sink for failed checks. One line per record:
//!
//! ```text
//! 2026-10-19T08:15:02Z INFO invalid check digit for personal identity number: 8507099806
//! ```
//!
//! The file is opened once by the composition root and shared behind a
//! mutex, so concurrent validations never interleave partial lines.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, SecondsFormat, Utc};
use parking_lot::Mutex;

use svid_core::ValidationLog;

/// Default audit log location, relative to the working directory.
pub const DEFAULT_LOG_FILE: &str = "validation.log";

/// A [`ValidationLog`] that appends to a file.
#[derive(Debug)]
pub struct FileLog {
    path: PathBuf,
    file: Mutex<File>,
}

impl FileLog {
    /// Open `path` for appending, creating it if needed.
    pub fn open(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        tracing::debug!(path = %path.display(), "opened audit log");
        Ok(Self {
            path,
            file: Mutex::new(file),
        })
    }

    /// Where records are written.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ValidationLog for FileLog {
    fn record(&self, message: &str) {
        let line = format_line(Utc::now(), message);
        let mut file = self.file.lock();
        let written = file.write_all(line.as_bytes());
        if let Err(e) = written.and_then(|()| file.flush()) {
            tracing::warn!(path = %self.path.display(), error = %e, "failed to write audit log");
        }
    }
}

/// Render one audit line, newline included.
pub fn format_line(at: DateTime<Utc>, message: &str) -> String {
    format!(
        "{} INFO {message}\n",
        at.to_rfc3339_opts(SecondsFormat::Secs, true)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn line_format() {
        let at = Utc.with_ymd_and_hms(2026, 10, 19, 8, 15, 2).unwrap();
        assert_eq!(
            format_line(at, "invalid date for coordination number: 8507099805"),
            "2026-10-19T08:15:02Z INFO invalid date for coordination number: 8507099805\n"
        );
    }

    #[test]
    fn appends_across_opens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("validation.log");

        FileLog::open(&path).unwrap().record("first");
        let log = FileLog::open(&path).unwrap();
        log.record("second");
        assert_eq!(log.path(), path.as_path());

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with(" INFO first"));
        assert!(lines[1].ends_with(" INFO second"));
    }

    #[test]
    fn open_fails_for_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(FileLog::open(dir.path().join("missing").join("validation.log")).is_err());
    }
}
