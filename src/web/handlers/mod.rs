//! Request handlers for the appdock web surface.

pub mod serve;
pub mod upload;

pub use serve::{pass_through, serve_asset, serve_entry};
pub use upload::upload_app;

use crate::config::StorageConfig;
use crate::store::{AppStore, TempStore};
use crate::Result;

/// Shared state for request handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Applications root on disk.
    pub store: AppStore,
    /// Holding area for inbound uploads.
    pub staging: TempStore,
    /// Whether uploads reconstruct the directory portion of `filePath`.
    pub preserve_paths: bool,
}

impl AppState {
    /// Create a new application state.
    pub fn new(store: AppStore, staging: TempStore, preserve_paths: bool) -> Self {
        Self {
            store,
            staging,
            preserve_paths,
        }
    }

    /// Create application state from storage configuration.
    pub fn from_config(config: &StorageConfig) -> Result<Self> {
        Ok(Self::new(
            AppStore::new(&config.apps_dir),
            TempStore::new(&config.temp_dir)?,
            config.preserve_paths,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_from_config_creates_holding_area() {
        let temp_dir = TempDir::new().unwrap();
        let config = StorageConfig {
            apps_dir: temp_dir.path().join("apps").to_string_lossy().into_owned(),
            temp_dir: temp_dir.path().join("uploads").to_string_lossy().into_owned(),
            preserve_paths: true,
        };

        let state = AppState::from_config(&config).unwrap();

        assert!(state.staging.temp_root().is_dir());
        // The applications root only appears once the first upload lands.
        assert!(!state.store.apps_root().exists());
        assert!(state.preserve_paths);
    }
}
