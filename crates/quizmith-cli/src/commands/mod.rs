//! CLI subcommand implementations.

pub mod add;
pub mod delete;
pub mod export;
pub mod import;
pub mod init;
pub mod list;
pub mod report;
pub mod results;
pub mod show;
pub mod stats;
pub mod take;
pub mod validate;

use std::path::Path;

use anyhow::{Context, Result};

use quizmith_store::json::JsonFileStore;
use quizmith_store::AppStore;

use crate::config::QuizmithConfig;

/// Open the application store over the configured data directory.
pub(crate) fn open_store(config: &QuizmithConfig) -> Result<AppStore> {
    tracing::debug!(data_dir = %config.data_dir.display(), "opening store");
    let backend = JsonFileStore::open(&config.data_dir).with_context(|| {
        format!("failed to open data directory {}", config.data_dir.display())
    })?;
    AppStore::open(Box::new(backend)).context("failed to load stored data")
}

/// First eight characters of an id, for compact table display.
pub(crate) fn short_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}

/// Read a file into a string with a path-naming error.
pub(crate) fn read_to_string(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}
