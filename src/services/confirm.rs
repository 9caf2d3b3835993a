//! Confirmation gate guarding destructive pipeline steps.

use crate::domain::AppError;
use crate::ports::Prompt;

/// Operator decision at a confirmation gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Proceed with the guarded action.
    Confirmed,
    /// Stop the run. An explicit decline is a normal outcome, not an error.
    Declined,
}

/// Yes/no prompt with a yes default, bypassed by the force flag.
pub struct ConfirmationGate<'a, P: Prompt> {
    prompt: &'a P,
    force: bool,
}

impl<'a, P: Prompt> ConfirmationGate<'a, P> {
    pub fn new(prompt: &'a P, force: bool) -> Self {
        Self { prompt, force }
    }

    /// Ask the operator to confirm `label`.
    ///
    /// Empty input defaults to yes; `n`/`no` declines with a cancellation
    /// notice; anything else is an unrecognized-input error.
    pub fn confirm(&self, label: &str) -> Result<Decision, AppError> {
        if self.force {
            return Ok(Decision::Confirmed);
        }

        let answer = self.prompt.ask(&format!("{label} [Y/n]: "))?;
        match answer.trim().to_lowercase().as_str() {
            "" | "y" | "yes" => Ok(Decision::Confirmed),
            "n" | "no" => {
                println!("Cancelled.");
                Ok(Decision::Declined)
            }
            other => Err(AppError::UnrecognizedInput(other.to_string())),
        }
    }
}
