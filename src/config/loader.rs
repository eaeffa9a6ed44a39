//! Configuration loading functionality.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::calendar::CalendarEmitter;
use crate::error::{EngineError, EngineResult};

use super::types::CalendarConfig;

/// Loads and provides access to calendar configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// └── calendar.yaml   # Calendar metadata and output naming
/// ```
///
/// # Example
///
/// ```no_run
/// use shift_calendar::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// let emitter = loader.emitter();
/// # Ok::<(), shift_calendar::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: CalendarConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ConfigNotFound`] if `calendar.yaml` is missing
    /// and [`EngineError::ConfigParseError`] if it is not valid.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let calendar_path = path.as_ref().join("calendar.yaml");
        let config = Self::load_yaml::<CalendarConfig>(&calendar_path)?;
        debug!(path = %calendar_path.display(), "Loaded calendar configuration");
        Ok(Self { config })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: CalendarConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &CalendarConfig {
        &self.config
    }

    /// Builds an emitter from the calendar section.
    pub fn emitter(&self) -> CalendarEmitter {
        CalendarEmitter::from_config(&self.config)
    }

    /// Suffix appended to employee names for calendar files.
    pub fn file_suffix(&self) -> &str {
        &self.config.output.file_suffix
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::from_config(CalendarConfig::default())
    }
}
