use crate::errors::CoreError;
use crate::models::selection::SelectionSet;

use super::traits::KeyValueStore;

/// Reads and writes the selection set as a JSON array under one key.
pub struct SelectionStorage;

impl SelectionStorage {
    /// Serialize a selection to its stored form, e.g. `["BTC","ETH"]`.
    pub fn to_json(selection: &SelectionSet) -> Result<String, CoreError> {
        serde_json::to_string(selection)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize selection: {e}")))
    }

    /// Parse a stored selection. Anything other than an array of strings is
    /// reported as `PersistenceCorrupt`.
    pub fn from_json(json: &str) -> Result<SelectionSet, CoreError> {
        serde_json::from_str(json).map_err(|e| CoreError::PersistenceCorrupt(e.to_string()))
    }

    /// Load the selection stored under `key`. `Ok(None)` if nothing was stored.
    pub fn load(store: &dyn KeyValueStore, key: &str) -> Result<Option<SelectionSet>, CoreError> {
        match store.get(key)? {
            Some(json) => Self::from_json(&json).map(Some),
            None => Ok(None),
        }
    }

    /// Load the selection, degrading to an empty set on any failure.
    /// Failures are logged, never returned.
    #[must_use]
    pub fn load_or_empty(store: &dyn KeyValueStore, key: &str) -> SelectionSet {
        match Self::load(store, key) {
            Ok(Some(selection)) => {
                tracing::debug!(store = store.name(), key, count = selection.len(), "restored selection");
                selection
            }
            Ok(None) => SelectionSet::new(),
            Err(e) => {
                tracing::warn!(store = store.name(), key, error = %e, "discarding unreadable selection");
                SelectionSet::new()
            }
        }
    }

    /// Write the full selection under `key`.
    pub fn save(store: &dyn KeyValueStore, key: &str, selection: &SelectionSet) -> Result<(), CoreError> {
        let json = Self::to_json(selection)?;
        store.set(key, &json)
    }
}
