//! `~/.kicks/` config store paths.

use std::path::{Path, PathBuf};

/// Directory name of the config store under `$HOME`.
pub const STORE_DIR: &str = ".kicks";

/// File name of the user configuration inside the store.
pub const CONFIG_FILE: &str = "config.yml";

/// `~/.kicks/`
pub fn store_dir(home: &Path) -> PathBuf {
    home.join(STORE_DIR)
}

/// `~/.kicks/config.yml`
pub fn config_file(home: &Path) -> PathBuf {
    store_dir(home).join(CONFIG_FILE)
}

/// `~/.kicks/<project>/`, or the store root without a project override.
pub fn project_dir(home: &Path, project: Option<&str>) -> PathBuf {
    match project {
        Some(name) => store_dir(home).join(name),
        None => store_dir(home),
    }
}
