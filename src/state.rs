//! Application state
//!
//! Immutable after startup: the server configuration and the catalog over
//! the configured store directory. Requests share it through an `Arc`.

use std::path::Path;

use crate::config::ServerConfig;
use crate::index::{FsDirectory, VideoCatalog};

#[derive(Debug)]
pub struct AppState {
    pub config: ServerConfig,
    pub catalog: VideoCatalog<FsDirectory>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        let catalog = VideoCatalog::new(FsDirectory::new(config.store_dir.clone()));
        Self { config, catalog }
    }

    /// Configured store directory, if set
    pub fn store_dir(&self) -> Option<&Path> {
        self.catalog.source().path()
    }
}
