//! Tenant safety validation for generated workspaces.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::domain::{AppError, workspace};

#[derive(Debug, Deserialize)]
struct TenantConfig {
    server: ServerSection,
}

#[derive(Debug, Deserialize)]
struct ServerSection {
    url: String,
}

/// Check that the copied workspace config points at a disposable tenant.
///
/// Must run after the project configs are copied in and before any step
/// that mutates remote state.
pub fn validate(workspace_dir: &Path) -> Result<(), AppError> {
    let path = workspace::tenant_config(workspace_dir);
    if !path.exists() {
        return Err(AppError::MissingFile {
            label: "Workspace tenant config".to_string(),
            path: path.display().to_string(),
        });
    }

    let content = fs::read_to_string(&path)?;
    let parsed: TenantConfig = serde_yaml::from_str(&content)
        .map_err(|source| AppError::YamlParse { path: path.display().to_string(), source })?;

    if !parsed.server.url.contains(workspace::SAFETY_MARKER) {
        return Err(AppError::SafetyValidation(parsed.server.url));
    }

    Ok(())
}
