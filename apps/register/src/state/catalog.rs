//! # Catalog Loading
//!
//! Locates and reads the product catalog the page-rendering side exports.
//!
//! ## Platform-Specific Default Paths
//! - **macOS**: `~/Library/Application Support/com.tally.pos/catalog.json`
//! - **Windows**: `%APPDATA%\tally\pos\data\catalog.json`
//! - **Linux**: `~/.local/share/pos/catalog.json`
//!
//! `TALLY_CATALOG_PATH` overrides the default.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tally_core::Catalog;
use tracing::debug;

use super::ConfigState;
use crate::error::AppError;

/// File name of the catalog inside the data directory.
pub const CATALOG_FILE: &str = "catalog.json";

/// Determines where the catalog lives.
pub fn resolve_catalog_path(config: &ConfigState) -> Result<PathBuf, AppError> {
    if let Some(path) = &config.catalog_path {
        return Ok(path.clone());
    }

    let proj_dirs = ProjectDirs::from("com", "tally", "pos").ok_or(AppError::NoDataDir)?;
    Ok(proj_dirs.data_dir().join(CATALOG_FILE))
}

/// Reads and validates the catalog file.
pub fn load_catalog(path: &Path) -> Result<Catalog, AppError> {
    debug!(?path, "Reading catalog");
    let json = std::fs::read_to_string(path)?;

    Catalog::from_json(&json).map_err(|source| AppError::Catalog {
        path: path.display().to_string(),
        source,
    })
}
