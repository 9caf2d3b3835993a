//! kicks: provision scaffolded application workspaces wired to a disposable
//! platform tenant.
//!
//! The library drives an external build pipeline (`rails`, `bundle`, `tar`)
//! through a fixed sequence of steps with confirmation gates at destructive
//! points, resolving per-user configuration from `~/.kicks/` and optionally
//! substituting local checkouts for the platform gems.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

pub use app::AppContext;
pub use app::commands::generate::GenerateOutcome;
pub use domain::AppError;
