use crate::domain::AppError;

/// Port for interactive operator prompts.
pub trait Prompt {
    /// Display `message` and block on one line of operator input.
    fn ask(&self, message: &str) -> Result<String, AppError>;
}
