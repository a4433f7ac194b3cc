use directories::ProjectDirs;
use tt_core::store::{FileBackend, MemoryBackend};
use tt_core::{ProgressStore, StoreError};
use std::path::PathBuf;

const APP_NAME: &str = "times_quiz";
const ORG_NAME: &str = "practice";
/// Overrides the platform data directory.
pub const DATA_DIR_ENV: &str = "TIMES_QUIZ_DATA_DIR";

fn get_data_dir() -> Result<PathBuf, StoreError> {
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|d| !d.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", ORG_NAME, APP_NAME)
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or(StoreError::NoDataDir)
}

/// Opens the on-disk store, or an in-memory one if no data directory exists.
pub fn open_store() -> ProgressStore {
    match get_data_dir() {
        Ok(dir) => {
            let backend = FileBackend::new(dir);
            log::info!("Using data directory {}", backend.dir().display());
            ProgressStore::open(backend)
        }
        Err(e) => {
            log::warn!("{e}; progress will not be saved between runs");
            ProgressStore::open(MemoryBackend::new())
        }
    }
}
