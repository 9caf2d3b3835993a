use std::path::Path;

use crate::domain::AppError;

/// Port for invoking external commands.
///
/// Takes a program name and an argument list — never a shell string — so
/// app and project names cannot be interpreted by a shell.
pub trait CommandRunner {
    /// Run `program` with `args` in `cwd`, blocking until it exits.
    ///
    /// Output streams to the operator; `quiet` silences the child's stdout
    /// without touching stderr. A nonzero exit surfaces as
    /// [`AppError::ExternalCommand`] carrying the child's status.
    fn run(&self, program: &str, args: &[&str], cwd: &Path, quiet: bool) -> Result<(), AppError>;
}
