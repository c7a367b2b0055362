// Public API
pub mod cli;
pub mod commands;
pub mod ui;

// Core domain types
mod activation;
mod config;
mod error;
mod lifecycle;
mod platform;
mod prompt;
mod registry;
mod session;
mod util;

// Re-export main types
pub use activation::{resolve, ActivationTarget};
pub use config::Config;
pub use error::VenvError;
pub use lifecycle::{is_affirmative, remove, RemoveOutcome};
pub use platform::Platform;
pub use registry::{env_dir, EnvironmentEntry, Registry, Selection, Snapshot};
pub use session::Session;
