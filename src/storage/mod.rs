//! Local key-value storage.
//!
//! The persisted session lives under a single string key, the way a browser
//! keeps it in local storage. [`FileStorage`] keeps one file per key in the
//! data directory; [`MemoryStorage`] backs tests and throwaway runs.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::error::Result;

/// Synchronous string storage keyed by name.
pub trait KeyValueStorage {
    /// Read a key. A missing key is `Ok(None)`, not an error.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Write a key, replacing any previous value.
    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;

    /// Erase a key. Erasing a missing key succeeds.
    fn remove_item(&mut self, key: &str) -> Result<()>;
}

/// Get the default data directory.
pub fn default_data_dir() -> std::path::PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("turtleshop")
}
