//! Layout of a generated application workspace.

use std::path::{Path, PathBuf};

/// Dependency manifest at the workspace root.
pub const MANIFEST_FILE: &str = "Gemfile";

/// Tenant configuration consumed by the generated application.
pub const TENANT_CONFIG_FILE: &str = "kicks.yml";

/// Credentials consumed by the generated application.
pub const SECRETS_CONFIG_FILE: &str = "secrets.yml";

/// Config files copied from the config store into every workspace.
pub const PROJECT_CONFIG_FILES: [&str; 2] = [TENANT_CONFIG_FILE, SECRETS_CONFIG_FILE];

/// Asset pipeline gems appended when a local checkout is in use.
pub const ASSET_PIPELINE_GEMS: [&str; 3] = ["sass-rails", "uglifier", "coffee-rails"];

/// Marker every development tenant URL must carry.
pub const SAFETY_MARKER: &str = "kickme";

/// `<workspace>/Gemfile`
pub fn manifest(workspace: &Path) -> PathBuf {
    workspace.join(MANIFEST_FILE)
}

/// `<workspace>/config/`
pub fn config_dir(workspace: &Path) -> PathBuf {
    workspace.join("config")
}

/// `<workspace>/config/kicks.yml`
pub fn tenant_config(workspace: &Path) -> PathBuf {
    config_dir(workspace).join(TENANT_CONFIG_FILE)
}

/// `<workspace>/config/.gitignore`
pub fn ignore_rules(workspace: &Path) -> PathBuf {
    config_dir(workspace).join(".gitignore")
}

/// `<workspace>/config/initializers/local_engines.rb`
pub fn local_engines_initializer(workspace: &Path) -> PathBuf {
    config_dir(workspace).join("initializers").join("local_engines.rb")
}
