mod adapters;
mod config_store;
mod confirm;
pub mod source_resolver;
pub mod tenant_safety;

pub use adapters::{ProcessCommandRunner, StdinPrompt};
pub use config_store::ConfigStore;
pub use confirm::{ConfirmationGate, Decision};
