//! Append-only line logs with file locking.
//!
//! Every record is one line. Writers take an exclusive `fs2` lock and emit
//! the whole line with a single `write_all`, so records from concurrent
//! writers never interleave. Readers take a shared lock.

use fs2::FileExt;
use soulnote_core::error::SoulnoteError;
use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write as IoWrite};
use std::path::{Path, PathBuf};

/// Errors that can occur while accessing an append log.
#[derive(Debug)]
pub enum AppendLogError {
    /// File I/O error.
    IoError(std::io::Error),
    /// File locking error.
    LockError(String),
}

impl std::fmt::Display for AppendLogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppendLogError::IoError(e) => write!(f, "I/O error: {}", e),
            AppendLogError::LockError(e) => write!(f, "Lock error: {}", e),
        }
    }
}

impl std::error::Error for AppendLogError {}

impl From<std::io::Error> for AppendLogError {
    fn from(e: std::io::Error) -> Self {
        AppendLogError::IoError(e)
    }
}

impl From<AppendLogError> for SoulnoteError {
    fn from(e: AppendLogError) -> Self {
        match e {
            AppendLogError::IoError(e) => SoulnoteError::from(e),
            AppendLogError::LockError(message) => SoulnoteError::lock(message),
        }
    }
}

/// A handle to one append-only log file.
#[derive(Debug, Clone)]
pub struct AppendLog {
    path: PathBuf,
}

impl AppendLog {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends `line` plus a trailing newline as one write.
    ///
    /// The parent directory and the file are created when missing.
    ///
    /// # Errors
    ///
    /// Fails if `line` contains a newline, or on I/O and lock failures.
    pub fn append_line(&self, line: &str) -> Result<(), AppendLogError> {
        if line.contains('\n') {
            return Err(AppendLogError::IoError(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "log record must not contain a raw newline",
            )));
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut record = String::with_capacity(line.len() + 1);
        record.push_str(line);
        record.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.lock_exclusive()
            .map_err(|e| AppendLogError::LockError(format!("Failed to acquire lock: {}", e)))?;

        let written = file.write_all(record.as_bytes()).and_then(|_| file.flush());
        let _ = FileExt::unlock(&file);
        written?;

        Ok(())
    }

    /// Reads every line, oldest first.
    ///
    /// A missing file reads as an empty log. Lines that are not valid UTF-8
    /// are skipped.
    pub fn read_lines(&self) -> Result<Vec<String>, AppendLogError> {
        let Some(file) = self.open_for_read()? else {
            return Ok(Vec::new());
        };
        file.lock_shared()
            .map_err(|e| AppendLogError::LockError(format!("Failed to acquire lock: {}", e)))?;

        let mut lines = Vec::new();
        let mut reader = BufReader::new(&file);
        let mut buffer = Vec::new();
        let result = loop {
            buffer.clear();
            match reader.read_until(b'\n', &mut buffer) {
                Ok(0) => break Ok(()),
                Ok(_) => match std::str::from_utf8(&buffer) {
                    Ok(line) => {
                        let line = line.trim_end_matches('\n').trim_end_matches('\r');
                        lines.push(line.to_string());
                    }
                    Err(e) => {
                        tracing::debug!(path = %self.path.display(), error = %e, "Skipping line that is not UTF-8");
                    }
                },
                Err(e) => break Err(e),
            }
        };

        let _ = FileExt::unlock(&file);
        result?;
        Ok(lines)
    }

    /// Returns true if the file exists and holds at least one byte.
    pub fn is_non_empty(&self) -> Result<bool, AppendLogError> {
        match fs::metadata(&self.path) {
            Ok(metadata) => Ok(metadata.len() > 0),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    fn open_for_read(&self) -> Result<Option<File>, AppendLogError> {
        match File::open(&self.path) {
            Ok(file) => Ok(Some(file)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tempfile::TempDir;

    #[test]
    fn test_append_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let log = AppendLog::new(temp_dir.path().join("nested").join("log.txt"));

        log.append_line("first").unwrap();
        log.append_line("second").unwrap();

        assert_eq!(log.read_lines().unwrap(), vec!["first", "second"]);
        assert!(log.is_non_empty().unwrap());
    }

    #[test]
    fn test_missing_file_reads_empty() {
        let temp_dir = TempDir::new().unwrap();
        let log = AppendLog::new(temp_dir.path().join("missing.txt"));

        assert!(log.read_lines().unwrap().is_empty());
        assert!(!log.is_non_empty().unwrap());
    }

    #[test]
    fn test_invalid_utf8_lines_are_skipped() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("log.txt");
        fs::write(&path, b"good\nbad \xff\xfe bytes\r\nalso good\r\n").unwrap();

        let log = AppendLog::new(path.clone());
        assert_eq!(log.read_lines().unwrap(), vec!["good", "also good"]);
    }

    #[test]
    fn test_raw_newline_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let log = AppendLog::new(temp_dir.path().join("log.txt"));

        assert!(log.append_line("two\nlines").is_err());
        assert!(!log.path().exists());
    }

    #[test]
    fn test_concurrent_appends_do_not_interleave() {
        let temp_dir = TempDir::new().unwrap();
        let log = Arc::new(AppendLog::new(temp_dir.path().join("log.txt")));

        let handles: Vec<_> = (0..8)
            .map(|worker| {
                let log = log.clone();
                std::thread::spawn(move || {
                    let line = format!("{}:{}", worker, "x".repeat(4096));
                    for _ in 0..25 {
                        log.append_line(&line).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let lines = log.read_lines().unwrap();
        assert_eq!(lines.len(), 200);
        for line in lines {
            let (_, body) = line.split_once(':').unwrap();
            assert_eq!(body.len(), 4096);
        }
    }
}
