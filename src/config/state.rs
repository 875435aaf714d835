// Application state module
// Read-only state shared by every connection

use std::path::PathBuf;

use super::types::Config;

/// Application state
pub struct AppState {
    pub config: Config,
    /// Directory served as static content
    pub root: PathBuf,
    // Cached so the request path never re-reads the logging section
    pub access_log: bool,
}

impl AppState {
    pub fn new(config: &Config, root: PathBuf) -> Self {
        Self {
            config: config.clone(),
            root,
            access_log: config.logging.access_log,
        }
    }
}
