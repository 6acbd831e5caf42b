use crate::config::Config;
use std::sync::Arc;

/// Process-wide application state. Built once at startup and handed to the
/// router; no handler mutates it and nothing outlives a request besides it.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}
