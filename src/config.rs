use serde::{Deserialize, Serialize};

use crate::command::MAX_HISTORY;
use crate::error::ConfigError;

/// Settings applied to each editor session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)] // missing keys fall back to the defaults below
pub struct EditorConfig {
    /// Maximum number of undo snapshots kept per session
    pub max_history: usize,
    /// Attach a handler that logs every editor event at debug level
    pub log_events: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            max_history: MAX_HISTORY,
            log_events: true,
        }
    }
}

impl EditorConfig {
    /// Parses and validates a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_history == 0 {
            return Err(ConfigError::InvalidHistoryLimit(self.max_history));
        }
        Ok(())
    }
}
