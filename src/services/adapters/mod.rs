mod process_runner;
mod stdin_prompt;

pub use process_runner::ProcessCommandRunner;
pub use stdin_prompt::StdinPrompt;
