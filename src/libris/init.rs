use crate::api::{LibrisApi, LibrisPaths};
use crate::config::LibrisConfig;
use crate::error::{LibrisError, Result};
use crate::store::fs::FileKvStore;
use directories::ProjectDirs;
use std::path::PathBuf;

/// Overrides the data directory (tests, portable installs).
pub const DATA_DIR_ENV: &str = "LIBRIS_DATA";

pub struct LibrisContext {
    pub api: LibrisApi<FileKvStore>,
    pub config: LibrisConfig,
}

/// `$LIBRIS_DATA` when set and non-empty, otherwise the platform data dir.
pub fn data_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|d| !d.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "libris", "libris")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| LibrisError::Config("Could not determine data dir".to_string()))
}

pub fn initialize() -> Result<LibrisContext> {
    initialize_at(data_dir()?)
}

pub fn initialize_at(data_dir: PathBuf) -> Result<LibrisContext> {
    let config = LibrisConfig::load(&data_dir)?;
    let store = FileKvStore::new(data_dir.clone());
    let api = LibrisApi::new(store, LibrisPaths::new(data_dir))?.with_config(&config);
    Ok(LibrisContext { api, config })
}
