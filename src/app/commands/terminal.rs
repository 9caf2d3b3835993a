//! Terminal actions that end the invocation without running the pipeline.

use std::path::{Path, PathBuf};

use crate::domain::store_paths;
use crate::domain::{AppError, Config};

/// Environment variable naming the operator's editor.
pub const EDITOR_ENV: &str = "EDITOR";

/// An interactive command the outermost caller executes as the invocation's
/// final action, instead of an in-process side effect buried in parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorLaunch {
    /// Editor binary resolved from `$EDITOR`.
    pub program: String,
    /// Argument handed to the editor.
    pub target: String,
    /// Working directory for the editor process.
    pub cwd: PathBuf,
}

/// Resolve the open-workspace action (`-o APP_NAME`).
pub fn open_workspace(config: &Config, app_name: &str) -> Result<EditorLaunch, AppError> {
    let workspace_dir = config.workspace_path(app_name);
    if !workspace_dir.exists() {
        return Err(AppError::MissingFile {
            label: format!("Workspace {}", app_name),
            path: workspace_dir.display().to_string(),
        });
    }

    Ok(EditorLaunch { program: editor()?, target: ".".to_string(), cwd: workspace_dir })
}

/// Resolve the edit-config action (`-e`).
pub fn edit_config(home: &Path) -> Result<EditorLaunch, AppError> {
    let file = store_paths::config_file(home);
    Ok(EditorLaunch {
        program: editor()?,
        target: file.display().to_string(),
        cwd: home.to_path_buf(),
    })
}

fn editor() -> Result<String, AppError> {
    std::env::var(EDITOR_ENV).map_err(|_| AppError::Environment(EDITOR_ENV.to_string()))
}
