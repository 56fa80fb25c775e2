//! Console timing and start policy, loaded from YAML.
//!
//! ```yaml
//! cadence_ms: 1000
//! batch_completion_ms: 10000
//! start_policy: reset
//! tick_ms: 250
//! ```
//!
//! Every key is optional. A missing file yields the defaults.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::console::StartPolicy;

/// Errors from loading or validating the config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("{field} must be greater than zero")]
    InvalidDuration { field: &'static str },
}

/// Timing knobs shared by every page console.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Interval between paced steps.
    pub cadence_ms: u64,
    /// Delay before a batch run reports completion.
    pub batch_completion_ms: u64,
    /// Whether `start()` clears the log first.
    pub start_policy: StartPolicy,
    /// Redraw tick for the terminal front end.
    pub tick_ms: u64,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            cadence_ms: 1000,
            batch_completion_ms: 10_000,
            start_policy: StartPolicy::Reset,
            tick_ms: 250,
        }
    }
}

impl ConsoleConfig {
    /// Parse and validate a YAML document.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes to unit, not to an empty map.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a file. A missing file is not an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(yaml) => Self::from_yaml(&yaml),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Io {
                path: path.display().to_string(),
                source,
            }),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("cadence_ms", self.cadence_ms),
            ("batch_completion_ms", self.batch_completion_ms),
            ("tick_ms", self.tick_ms),
        ];
        for (field, value) in fields {
            if value == 0 {
                return Err(ConfigError::InvalidDuration { field });
            }
        }
        Ok(())
    }

    pub fn cadence(&self) -> Duration {
        Duration::from_millis(self.cadence_ms)
    }

    pub fn batch_completion(&self) -> Duration {
        Duration::from_millis(self.batch_completion_ms)
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}
