use crate::errors::CoreError;

/// Abstraction over a string key-value store (browser local storage,
/// a JSON file, an in-memory map).
///
/// The harvester only ever uses one key, to hold the selection.
pub trait KeyValueStore: Send + Sync {
    /// Human-readable name of this store (for logs/errors).
    fn name(&self) -> &str;

    /// Read a value. `Ok(None)` when the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>, CoreError>;

    /// Write a value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> Result<(), CoreError>;

    /// Delete a key. Returns whether it existed.
    fn remove(&self, key: &str) -> Result<bool, CoreError>;
}
