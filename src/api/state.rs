//! Application state for the shift calendar API.

use std::sync::Arc;

use crate::calendar::CalendarEmitter;
use crate::config::ConfigLoader;

/// Shared application state.
///
/// Holds the loaded configuration and the emitter built from it; both are
/// immutable for the lifetime of the router.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
    emitter: Arc<CalendarEmitter>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        let emitter = config.emitter();
        Self {
            config: Arc::new(config),
            emitter: Arc::new(emitter),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the calendar emitter.
    pub fn emitter(&self) -> &CalendarEmitter {
        &self.emitter
    }
}
