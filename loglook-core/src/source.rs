use anyhow::{Context, Result, anyhow};
use memmap2::MmapOptions;
use std::{
    fs::File,
    path::{Path, PathBuf},
    sync::RwLock,
};

/// Trait for reading log entries out of a source.
///
/// Implement this trait to define where log lines come from. The contract is
/// deliberately small:
///
/// - `read_all` returns every line of the source in order, in one shot. Any
///   I/O failure aborts the whole read; there are no partial results and no
///   retries.
/// - `close` releases whatever the source holds. It must be safe to call
///   more than once, and it must not run concurrently with an in-flight
///   `read_all`.
///
/// Sources are `Send + Sync` so a single source can be shared across threads
/// under the same read/close exclusion contract.
pub trait LogSource: Send + Sync {
    /// read the whole source into memory as ordered lines
    fn read_all(&self) -> Result<Vec<String>>;

    /// release the underlying handle (idempotent)
    fn close(&self) -> Result<()>;
}

/// file-backed log source
///
/// The handle sits behind a reader/writer lock: `read_all` holds the read
/// side for the whole scan and `close` takes the write side, so a close can
/// never land mid-read.
pub struct FileSource {
    path: PathBuf,
    handle: RwLock<Option<File>>,
}

impl FileSource {
    /// open `path` read-only
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path)
            .with_context(|| format!("failed to open log file {}", path.display()))?;
        log::debug!("FileSource: opened {}", path.display());

        Ok(Self {
            path,
            handle: RwLock::new(Some(file)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LogSource for FileSource {
    fn read_all(&self) -> Result<Vec<String>> {
        let guard = self
            .handle
            .read()
            .map_err(|_| anyhow!("log file lock poisoned"))?;
        let Some(file) = guard.as_ref() else {
            return Err(anyhow!("log source already closed: {}", self.path.display()));
        };

        let len = file
            .metadata()
            .with_context(|| format!("failed to stat {}", self.path.display()))?
            .len();
        if len == 0 {
            return Ok(Vec::new());
        }

        // mapping the handle keeps the scan independent of any file cursor,
        // so concurrent scans under the read lock stay safe
        let mmap = unsafe { MmapOptions::new().len(len as usize).map(file) }
            .with_context(|| format!("failed to read {}", self.path.display()))?;

        let text = String::from_utf8_lossy(&mmap);
        let lines: Vec<String> = text.lines().map(str::to_string).collect();
        log::debug!(
            "FileSource: read {} lines from {}",
            lines.len(),
            self.path.display()
        );

        Ok(lines)
    }

    fn close(&self) -> Result<()> {
        let mut guard = self
            .handle
            .write()
            .map_err(|_| anyhow!("log file lock poisoned"))?;
        if guard.take().is_some() {
            log::debug!("FileSource: closed {}", self.path.display());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_log(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_read_all_preserves_order() {
        let file = temp_log("first\nsecond\nthird\n");
        let source = FileSource::open(file.path()).unwrap();
        let lines = source.read_all().unwrap();
        assert_eq!(lines, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_read_all_keeps_blank_lines() {
        let file = temp_log("first\n\nthird\n");
        let source = FileSource::open(file.path()).unwrap();
        let lines = source.read_all().unwrap();
        assert_eq!(lines, vec!["first", "", "third"]);
    }

    #[test]
    fn test_read_all_empty_file() {
        let file = temp_log("");
        let source = FileSource::open(file.path()).unwrap();
        let lines = source.read_all().unwrap();
        assert_eq!(lines.len(), 0);
    }

    #[test]
    fn test_read_all_is_repeatable() {
        let file = temp_log("only line\n");
        let source = FileSource::open(file.path()).unwrap();
        let first = source.read_all().unwrap();
        let second = source.read_all().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_read_all_without_trailing_newline() {
        let file = temp_log("first\nlast");
        let source = FileSource::open(file.path()).unwrap();
        let lines = source.read_all().unwrap();
        assert_eq!(lines, vec!["first", "last"]);
    }

    #[test]
    fn test_open_missing_path_fails() {
        let result = FileSource::open("/nonexistent/path/to/example.log");
        assert!(result.is_err());
    }

    #[test]
    fn test_read_after_close_fails() {
        let file = temp_log("line\n");
        let source = FileSource::open(file.path()).unwrap();
        source.close().unwrap();
        assert!(source.read_all().is_err());
    }

    #[test]
    fn test_close_twice_is_fine() {
        let file = temp_log("line\n");
        let source = FileSource::open(file.path()).unwrap();
        source.close().unwrap();
        source.close().unwrap();
    }
}
