pub mod config;
pub mod dependency;
pub mod error;
pub mod options;
pub mod store_paths;
pub mod workspace;

pub use config::Config;
pub use dependency::{Dependency, SourceBinding};
pub use error::AppError;
pub use options::Options;
