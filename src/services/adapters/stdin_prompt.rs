use std::io::{self, Write};

use crate::domain::AppError;
use crate::ports::Prompt;

/// Reads prompt answers from the operator's terminal.
///
/// End of input counts as an empty answer, so piped invocations fall
/// through to the prompt's default.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinPrompt;

impl Prompt for StdinPrompt {
    fn ask(&self, message: &str) -> Result<String, AppError> {
        print!("{message}");
        io::stdout().flush()?;

        let mut answer = String::new();
        io::stdin().read_line(&mut answer)?;
        Ok(answer)
    }
}
