//! Persistent per-user configuration store.

use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

use crate::domain::store_paths;
use crate::domain::{AppError, Config};

/// Template written on first run. The workspace root default is active;
/// the local checkout overrides are left commented out as examples.
const DEFAULT_CONFIG: &str = "\
# kicks configuration
#
# Root directory under which application workspaces are generated.
kicks_home: ~/kicks

# Local checkouts used with the --local-* flags.
# kicks_core_path: ~/src/kicks_core
# kicks_ui_path: ~/src/kicks_ui
";

#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    kicks_home: Option<String>,
    kicks_core_path: Option<String>,
    kicks_ui_path: Option<String>,
}

/// Loads and bootstraps the `~/.kicks/` config store.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    home: PathBuf,
}

impl ConfigStore {
    pub fn new(home: PathBuf) -> Self {
        Self { home }
    }

    /// Create the store directory and default config file when absent.
    ///
    /// Idempotent: an existing config file is never overwritten.
    pub fn ensure_exists(&self) -> Result<(), AppError> {
        fs::create_dir_all(store_paths::store_dir(&self.home))?;

        let file = store_paths::config_file(&self.home);
        if !file.exists() {
            fs::write(&file, DEFAULT_CONFIG)?;
            println!("✅ Wrote default configuration to {}", file.display());
        }
        Ok(())
    }

    /// Parse the config file, failing when `kicks_home` is unset.
    ///
    /// Unknown keys are tolerated; `~` in path values is expanded.
    pub fn load(&self) -> Result<Config, AppError> {
        let file = store_paths::config_file(&self.home);
        let content = fs::read_to_string(&file)?;

        let raw: RawConfig = serde_yaml::from_str(&content)
            .map_err(|source| AppError::YamlParse { path: file.display().to_string(), source })?;

        let kicks_home = raw.kicks_home.as_deref().map(expand).ok_or_else(|| {
            AppError::Configuration {
                key: "kicks_home".to_string(),
                path: file.display().to_string(),
            }
        })?;

        Ok(Config {
            kicks_home,
            kicks_core_path: raw.kicks_core_path.as_deref().map(expand),
            kicks_ui_path: raw.kicks_ui_path.as_deref().map(expand),
            source: file,
        })
    }
}

fn expand(value: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(value).into_owned())
}
