//! Atomic JSON file operations.
//!
//! Provides a thin layer for safe concurrent access to small JSON state files
//! shared between short-lived hook processes.

use serde::{Serialize, de::DeserializeOwned};
use std::fs::{self, File, OpenOptions};
use std::io::Write as IoWrite;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use thiserror::Error;

/// How long `update` waits for another writer before giving up.
pub const LOCK_TIMEOUT: Duration = Duration::from_secs(5);

const LOCK_POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Errors that can occur during atomic JSON operations.
#[derive(Debug, Error)]
pub enum AtomicJsonError {
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// File locking error.
    #[error("Lock error: {0}")]
    Lock(String),
}

impl From<AtomicJsonError> for rolegate_core::RoleGateError {
    fn from(err: AtomicJsonError) -> Self {
        match err {
            AtomicJsonError::Io(e) => e.into(),
            AtomicJsonError::Json(e) => e.into(),
            AtomicJsonError::Lock(message) => Self::lock(message),
        }
    }
}

/// A handle to a JSON file that is replaced atomically on every write.
///
/// Provides:
/// - **Atomicity**: Updates are all-or-nothing via tmp file + atomic rename
/// - **Isolation**: `update` holds an exclusive lock across read-modify-write
/// - **Durability**: Explicit fsync before rename
///
/// Plain `load` calls take no lock; the rename guarantees readers see either
/// the old or the new file, never a partial one.
pub struct AtomicJsonFile<T> {
    path: PathBuf,
    _phantom: PhantomData<T>,
}

impl<T> AtomicJsonFile<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Creates a new atomic JSON file handle.
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _phantom: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the JSON file and deserializes it.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(T))`: Successfully loaded and deserialized
    /// - `Ok(None)`: File doesn't exist or is empty
    /// - `Err`: Failed to read or parse the file
    pub fn load(&self) -> Result<Option<T>, AtomicJsonError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;

        if content.trim().is_empty() {
            return Ok(None);
        }

        let data: T = serde_json::from_str(&content)?;
        Ok(Some(data))
    }

    /// Saves data to the JSON file atomically.
    ///
    /// Output is pretty-printed with two-space indentation and non-ASCII
    /// characters written as-is.
    pub fn save(&self, data: &T) -> Result<(), AtomicJsonError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let json_string = serde_json::to_string_pretty(data)?;

        // Write to temporary file in the same directory
        let tmp_path = self.temp_path()?;
        let mut tmp_file = File::create(&tmp_path)?;
        tmp_file.write_all(json_string.as_bytes())?;

        tmp_file.sync_all()?;
        drop(tmp_file);

        fs::rename(&tmp_path, &self.path)?;

        Ok(())
    }

    /// Performs a locked read-modify-write.
    ///
    /// Waits at most [`LOCK_TIMEOUT`] for a concurrent writer.
    /// The update function receives the current data, or `default_value` if
    /// the file is missing, empty, unreadable or malformed. A file that cannot
    /// be loaded is logged and overwritten rather than treated as fatal.
    pub fn update<F>(&self, default_value: T, f: F) -> Result<(), AtomicJsonError>
    where
        F: FnOnce(&mut T),
    {
        let _lock = FileLock::acquire(&self.path, LOCK_TIMEOUT)?;

        let mut data = match self.load() {
            Ok(Some(data)) => data,
            Ok(None) => default_value,
            Err(e) => {
                tracing::warn!(
                    "[Storage] Replacing unreadable state file {}: {}",
                    self.path.display(),
                    e
                );
                default_value
            }
        };

        f(&mut data);

        self.save(&data)
    }

    /// Gets a temporary file path for atomic writes.
    fn temp_path(&self) -> Result<PathBuf, AtomicJsonError> {
        let file_name = self.path.file_name().ok_or_else(|| {
            AtomicJsonError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Path has no file name",
            ))
        })?;

        let tmp_name = format!(".{}.tmp", file_name.to_string_lossy());
        Ok(self.path.with_file_name(tmp_name))
    }
}

/// An exclusive advisory lock held for as long as the guard lives.
///
/// The lock file itself is never removed, so every process contends on the
/// same inode.
struct FileLock {
    file: File,
}

impl FileLock {
    /// Locks `<path>.lock`, polling until `timeout` elapses.
    fn acquire(path: &Path, timeout: Duration) -> Result<Self, AtomicJsonError> {
        let lock_path = path.with_extension("lock");
        if lock_path == path {
            return Err(AtomicJsonError::Lock(format!(
                "{} cannot serve as its own lock file",
                path.display()
            )));
        }

        if let Some(parent) = lock_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)?;

        let deadline = Instant::now() + timeout;
        loop {
            match fs2::FileExt::try_lock_exclusive(&file) {
                Ok(()) => return Ok(FileLock { file }),
                Err(e) if e.kind() == fs2::lock_contended_error().kind() => {
                    if Instant::now() >= deadline {
                        return Err(AtomicJsonError::Lock(format!(
                            "Timed out after {:?} waiting for {}",
                            timeout,
                            lock_path.display()
                        )));
                    }
                    std::thread::sleep(LOCK_POLL_INTERVAL);
                }
                Err(e) => {
                    return Err(AtomicJsonError::Lock(format!(
                        "Failed to lock {}: {}",
                        lock_path.display(),
                        e
                    )));
                }
            }
        }
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        let _ = fs2::FileExt::unlock(&self.file);
    }
}
