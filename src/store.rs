//! Durable Cart Store

use std::{fs, io, path::PathBuf};

use rustc_hash::FxHashMap;
use thiserror::Error;

/// Errors at the durable store boundary.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying I/O failure reading or writing a stored value.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// String-keyed blob persistence for serialized carts.
///
/// Values are opaque to the store. Writes are last-writer-wins: a second
/// session writing after a first simply overwrites, with no merge-on-conflict
/// and no concurrency token.
pub trait DurableStore {
    /// Reads the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` if the underlying storage fails.
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Stores `value` under `key`, overwriting any previous value.
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` if the underlying storage fails.
    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Removes the value stored under `key`. No-op when absent.
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` if the underlying storage fails.
    fn clear(&mut self, key: &str) -> Result<(), StoreError>;
}

/// In-memory store for tests and demos.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: FxHashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl DurableStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());

        Ok(())
    }

    fn clear(&mut self, key: &str) -> Result<(), StoreError> {
        self.values.remove(key);

        Ok(())
    }
}

/// One-file-per-key store under a base directory.
///
/// The crate-native counterpart of the storefront's browser-local storage:
/// values survive across sessions and processes that share the directory.
#[derive(Debug)]
pub struct FileStore {
    base_path: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at `base_path`. The directory is created on
    /// first write.
    #[must_use]
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.base_path.join(format!("{key}.json"))
    }
}

impl DurableStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.key_path(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        fs::create_dir_all(&self.base_path)?;
        fs::write(self.key_path(key), value)?;

        Ok(())
    }

    fn clear(&mut self, key: &str) -> Result<(), StoreError> {
        match fs::remove_file(self.key_path(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn memory_store_read_missing_key_returns_none() -> TestResult {
        let store = MemoryStore::new();

        assert_eq!(store.read("cart")?, None);

        Ok(())
    }

    #[test]
    fn memory_store_write_then_read_round_trips() -> TestResult {
        let mut store = MemoryStore::new();

        store.write("cart", "[]")?;

        assert_eq!(store.read("cart")?.as_deref(), Some("[]"));

        Ok(())
    }

    #[test]
    fn memory_store_write_overwrites_previous_value() -> TestResult {
        let mut store = MemoryStore::new();

        store.write("cart", "first")?;
        store.write("cart", "second")?;

        assert_eq!(store.read("cart")?.as_deref(), Some("second"));

        Ok(())
    }

    #[test]
    fn memory_store_clear_removes_value_and_is_idempotent() -> TestResult {
        let mut store = MemoryStore::new();

        store.write("cart", "[]")?;
        store.clear("cart")?;
        store.clear("cart")?;

        assert_eq!(store.read("cart")?, None);

        Ok(())
    }

    #[test]
    fn file_store_round_trips_through_the_filesystem() -> TestResult {
        let dir = tempfile::tempdir()?;
        let mut store = FileStore::new(dir.path());

        assert_eq!(store.read("cart")?, None);

        store.write("cart", "[1,2]")?;

        assert_eq!(store.read("cart")?.as_deref(), Some("[1,2]"));

        store.clear("cart")?;

        assert_eq!(store.read("cart")?, None);

        Ok(())
    }

    #[test]
    fn file_store_keys_do_not_collide() -> TestResult {
        let dir = tempfile::tempdir()?;
        let mut store = FileStore::new(dir.path());

        store.write("user-a", "a")?;
        store.write("user-b", "b")?;

        assert_eq!(store.read("user-a")?.as_deref(), Some("a"));
        assert_eq!(store.read("user-b")?.as_deref(), Some("b"));

        Ok(())
    }

    #[test]
    fn file_store_clear_missing_key_is_a_noop() -> TestResult {
        let dir = tempfile::tempdir()?;
        let mut store = FileStore::new(dir.path());

        store.clear("never-written")?;

        Ok(())
    }
}
