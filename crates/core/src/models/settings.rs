use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Storage key the selection is persisted under.
pub const DEFAULT_SELECTION_KEY: &str = "taxHarvestingSelections";

/// Rows shown before the user asks to view all.
pub const DEFAULT_PREVIEW_ROWS: usize = 5;

/// Runtime configuration for the harvester and its HTTP data source.
///
/// Every field has a default, so a partial JSON document is enough.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Base URL of the portfolio API (no trailing slash needed)
    pub api_base_url: String,

    /// Key under which the selection is stored
    pub selection_key: String,

    /// Table rows shown in preview mode
    pub preview_rows: usize,

    /// HTTP request timeout
    pub request_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8080/api".to_string(),
            selection_key: DEFAULT_SELECTION_KEY.to_string(),
            preview_rows: DEFAULT_PREVIEW_ROWS,
            request_timeout_secs: 30,
        }
    }
}

impl Settings {
    /// Parse settings from JSON, filling missing fields with defaults,
    /// and validate the result.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let settings: Settings = serde_json::from_str(json)
            .map_err(|e| CoreError::InvalidSettings(format!("Failed to parse settings: {e}")))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if self.preview_rows == 0 {
            return Err(CoreError::InvalidSettings(
                "preview_rows must be at least 1".into(),
            ));
        }
        if self.request_timeout_secs == 0 {
            return Err(CoreError::InvalidSettings(
                "request_timeout_secs must be at least 1".into(),
            ));
        }
        if self.selection_key.trim().is_empty() {
            return Err(CoreError::InvalidSettings(
                "selection_key must not be empty".into(),
            ));
        }
        if !(self.api_base_url.starts_with("http://") || self.api_base_url.starts_with("https://")) {
            return Err(CoreError::InvalidSettings(format!(
                "api_base_url '{}' must start with http:// or https://",
                self.api_base_url
            )));
        }
        Ok(())
    }
}
