use std::path::{Path, PathBuf};

use crate::config::StorageConfig;

pub const SITODO_DIR: &str = ".sitodo";
pub const CONFIG_FILE: &str = ".sitodo/config.yaml";
pub const DEFAULT_DB_FILE: &str = ".sitodo/sitodo.db";

pub fn sitodo_dir(root: &Path) -> PathBuf {
    root.join(SITODO_DIR)
}

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

/// Database location for `storage`. Relative paths resolve against `root`.
pub fn store_path(root: &Path, storage: &StorageConfig) -> PathBuf {
    if storage.path.is_absolute() {
        storage.path.clone()
    } else {
        root.join(&storage.path)
    }
}
