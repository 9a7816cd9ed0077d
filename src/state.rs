use std::sync::Arc;

use crate::config::Config;
use crate::service::DirectoryService;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Directory service backed by the configured gateway
    pub directory: Arc<DirectoryService>,
    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Create new application state
    pub fn new(directory: DirectoryService, config: Config) -> Self {
        Self {
            directory: Arc::new(directory),
            config: Arc::new(config),
        }
    }
}
