use std::path::Path;
use std::process::{Command, Stdio};

use crate::domain::AppError;
use crate::ports::CommandRunner;

/// Runs external commands as child processes with inherited streams.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessCommandRunner;

impl CommandRunner for ProcessCommandRunner {
    fn run(&self, program: &str, args: &[&str], cwd: &Path, quiet: bool) -> Result<(), AppError> {
        let rendered = format!("{} {}", program, args.join(" "));

        let mut command = Command::new(program);
        command.args(args).current_dir(cwd);
        if quiet {
            command.stdout(Stdio::null());
        }

        let status = command.status().map_err(|source| AppError::ExternalCommand {
            command: rendered.clone(),
            details: source.to_string(),
            status: 1,
        })?;

        if !status.success() {
            let code = status.code().unwrap_or(1);
            return Err(AppError::ExternalCommand {
                command: rendered,
                details: format!("exit status {}", code),
                status: code,
            });
        }

        Ok(())
    }
}
