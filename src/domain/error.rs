use std::io;

use thiserror::Error;

/// Library-wide error type for kicks operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Required configuration key is unset.
    #[error("Configuration key '{key}' not set in {path}")]
    Configuration { key: String, path: String },

    /// Expected file or directory is absent.
    #[error("{label} not found: {path}")]
    MissingFile { label: String, path: String },

    /// Required environment variable is unset.
    #[error("Environment variable {0} is not set")]
    Environment(String),

    /// Invocation is missing a required argument.
    #[error("{0}")]
    Usage(String),

    /// Copied workspace config points at a tenant without the safety marker.
    #[error(
        "Tenant URL '{0}' does not contain 'kickme'. Point server.url in config/kicks.yml at a disposable kickme tenant and re-run."
    )]
    SafetyValidation(String),

    /// External command failed to start or exited nonzero.
    #[error("Command '{command}' failed: {details}")]
    ExternalCommand { command: String, details: String, status: i32 },

    /// Confirmation prompt answered with neither yes nor no.
    #[error("Unrecognized answer '{0}'")]
    UnrecognizedInput(String),

    /// YAML parse failure.
    #[error("Failed to parse {path}: {source}")]
    YamlParse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
}

impl AppError {
    /// Process exit status reported for this error.
    ///
    /// External-command failures propagate the command's own status; every
    /// other handled error exits 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::ExternalCommand { status, .. } => *status,
            _ => 1,
        }
    }
}
