use std::path::{Path, PathBuf};

use crate::domain::Dependency;

/// User configuration loaded from `~/.kicks/config.yml`.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root directory under which workspaces are generated.
    pub kicks_home: PathBuf,
    /// Local checkout of the `kicks_core` gem, when configured.
    pub kicks_core_path: Option<PathBuf>,
    /// Local checkout of the `kicks_ui` gem, when configured.
    pub kicks_ui_path: Option<PathBuf>,
    /// File this configuration was loaded from.
    pub source: PathBuf,
}

impl Config {
    /// Configured local checkout for `dependency`.
    pub fn local_override(&self, dependency: Dependency) -> Option<&Path> {
        match dependency {
            Dependency::Core => self.kicks_core_path.as_deref(),
            Dependency::Ui => self.kicks_ui_path.as_deref(),
        }
    }

    /// Workspace directory for the named application.
    pub fn workspace_path(&self, app_name: &str) -> PathBuf {
        self.kicks_home.join(app_name)
    }
}
