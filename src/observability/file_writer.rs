//! Rotating file writer with size-based rotation and backup retention.
//!
//! Before each write the current file's size is checked; past the limit it is
//! renamed to `<name>.<unix_millis>` and a fresh file is started. Only the
//! newest backups are kept.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Maximum file size before rotation (5 MB).
pub const DEFAULT_MAX_BYTES: u64 = 5 * 1024 * 1024;

/// Number of backup files to retain after rotation.
pub const DEFAULT_MAX_BACKUPS: usize = 3;

/// Thread-safe rotating file writer.
///
/// The file is opened lazily on the first write.
pub struct FileWriter {
    file_path: PathBuf,
    max_bytes: u64,
    max_backups: usize,
    file: Mutex<Option<File>>,
}

impl FileWriter {
    #[must_use]
    pub const fn new(file_path: PathBuf) -> Self {
        Self::with_limits(file_path, DEFAULT_MAX_BYTES, DEFAULT_MAX_BACKUPS)
    }

    #[must_use]
    pub const fn with_limits(file_path: PathBuf, max_bytes: u64, max_backups: usize) -> Self {
        Self {
            file_path,
            max_bytes,
            max_backups,
            file: Mutex::new(None),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Appends `bytes`, rotating first if the file has outgrown the limit.
    ///
    /// # Errors
    ///
    /// Fails on filesystem errors or if the internal mutex is poisoned.
    pub fn write_bytes(&self, bytes: &[u8]) -> io::Result<()> {
        let mut guard = self
            .file
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("Mutex poisoned: {e}")))?;

        self.check_and_rotate(&mut guard)?;

        if guard.is_none() {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.file_path)?;
            *guard = Some(file);
        }

        let file = guard
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "No file available"))?;

        file.write_all(bytes)?;
        file.flush()
    }

    fn check_and_rotate(&self, file: &mut Option<File>) -> io::Result<()> {
        if let Ok(metadata) = fs::metadata(&self.file_path) {
            if metadata.len() > self.max_bytes {
                *file = None;
                self.rotate_files()?;
            }
        }
        Ok(())
    }

    fn rotate_files(&self) -> io::Result<()> {
        let file_name = self.file_name()?;
        let stamp = chrono::Utc::now().timestamp_millis();
        let backup_path = self.file_path.with_file_name(format!("{file_name}.{stamp}"));

        if self.file_path.exists() {
            fs::rename(&self.file_path, &backup_path)?;
        }

        self.cleanup_old_backups()
    }

    /// Deletes backups beyond the retention limit, oldest first.
    ///
    /// Individual deletion failures are ignored.
    fn cleanup_old_backups(&self) -> io::Result<()> {
        let parent_dir = self
            .file_path
            .parent()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "No parent directory"))?;
        let prefix = format!("{}.", self.file_name()?);

        let mut backups: Vec<PathBuf> = fs::read_dir(parent_dir)?
            .filter_map(std::result::Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with(&prefix))
            })
            .collect();

        // Millisecond suffixes sort newest last.
        backups.sort();
        let excess = backups.len().saturating_sub(self.max_backups);
        for old_backup in backups.iter().take(excess) {
            let _ = fs::remove_file(old_backup);
        }

        Ok(())
    }

    fn file_name(&self) -> io::Result<String> {
        self.file_path
            .file_name()
            .and_then(|s| s.to_str())
            .map(String::from)
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "Invalid file name"))
    }
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter")
            .field("file_path", &self.file_path)
            .field("max_bytes", &self.max_bytes)
            .field("max_backups", &self.max_backups)
            .finish_non_exhaustive()
    }
}

/// `io::Write` handle handed to the tracing formatter, one per event.
#[derive(Debug, Clone)]
pub struct LogWriter {
    inner: Arc<FileWriter>,
}

impl LogWriter {
    #[must_use]
    pub const fn new(inner: Arc<FileWriter>) -> Self {
        Self { inner }
    }
}

impl Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write_bytes(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backups_in(dir: &Path, name: &str) -> Vec<PathBuf> {
        let prefix = format!("{name}.");
        fs::read_dir(dir)
            .unwrap()
            .filter_map(std::result::Result::ok)
            .map(|e| e.path())
            .filter(|p| {
                p.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.starts_with(&prefix))
            })
            .collect()
    }

    #[test]
    fn appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");
        let writer = FileWriter::new(path.clone());

        writer.write_bytes(b"one\n").unwrap();
        writer.write_bytes(b"two\n").unwrap();

        assert_eq!(fs::read_to_string(path).unwrap(), "one\ntwo\n");
    }

    #[test]
    fn rotates_and_bounds_backups() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");
        let writer = FileWriter::with_limits(path.clone(), 10, 2);

        for n in 0..6 {
            writer
                .write_bytes(format!("line number {n} padding\n").as_bytes())
                .unwrap();
            std::thread::sleep(std::time::Duration::from_millis(2));
        }

        let backups = backups_in(dir.path(), "app.log");
        assert!(!backups.is_empty());
        assert!(backups.len() <= 2);
        assert_eq!(
            fs::read_to_string(path).unwrap(),
            "line number 5 padding\n"
        );
    }

    #[test]
    fn log_writer_reports_full_length() {
        let dir = tempfile::tempdir().unwrap();
        let shared = Arc::new(FileWriter::new(dir.path().join("w.log")));
        let mut writer = LogWriter::new(Arc::clone(&shared));

        assert_eq!(writer.write(b"abc").unwrap(), 3);
        assert_eq!(fs::read_to_string(shared.path()).unwrap(), "abc");
    }
}
