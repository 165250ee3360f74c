use crate::api::ShelfApi;
use crate::config::ShelfConfig;
use crate::error::{Result, ShelfError};
use crate::page::ShelfPage;
use crate::store::fs_storage::FsStorage;
use directories::ProjectDirs;
use log::debug;
use std::path::{Path, PathBuf};

/// Environment variable overriding the data directory.
pub const HOME_ENV: &str = "SHELF_HOME";

pub struct ShelfContext {
    pub page: ShelfPage<FsStorage>,
    pub config: ShelfConfig,
}

/// Picks the data directory: explicit path, then `SHELF_HOME`, then the
/// platform data directory.
pub fn resolve_data_dir(explicit: Option<&Path>, env_home: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir.to_path_buf());
    }
    if let Some(dir) = env_home.filter(|d| !d.as_os_str().is_empty()) {
        return Ok(dir);
    }
    ProjectDirs::from("com", "shelf", "shelf")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| ShelfError::Config("Could not determine data directory".to_string()))
}

/// Loads config from `data_dir` and builds a page over file storage there.
/// The page is not rendered yet; call [`ShelfPage::on_ready`].
pub fn initialize(data_dir: PathBuf) -> Result<ShelfContext> {
    let config = ShelfConfig::load(&data_dir)?;
    debug!(
        "data_dir={} slot_key={} on_corrupt={}",
        data_dir.display(),
        config.slot_key,
        config.on_corrupt
    );

    let storage = FsStorage::new(data_dir);
    let api = ShelfApi::from_config(storage, &config);

    Ok(ShelfContext {
        page: ShelfPage::new(api),
        config,
    })
}
