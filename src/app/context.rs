use std::path::{Path, PathBuf};

use crate::domain::{Config, Options};
use crate::ports::{CommandRunner, Prompt};

/// Application context for one invocation.
///
/// Built once after option and config resolution and passed by reference
/// into every command; there is no ambient global state.
pub struct AppContext<R: CommandRunner, P: Prompt> {
    home: PathBuf,
    options: Options,
    config: Config,
    runner: R,
    prompt: P,
}

impl<R: CommandRunner, P: Prompt> AppContext<R, P> {
    /// Create a new application context.
    pub fn new(home: PathBuf, options: Options, config: Config, runner: R, prompt: P) -> Self {
        Self { home, options, config, runner, prompt }
    }

    /// The operator's home directory.
    pub fn home(&self) -> &Path {
        &self.home
    }

    /// Resolved invocation options.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Loaded user configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// External command port.
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Operator prompt port.
    pub fn prompt(&self) -> &P {
        &self.prompt
    }
}
