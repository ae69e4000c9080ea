//! Teny - Malagasy writing assistant
//!
//! Orchestrates an editing surface against a remote language service:
//! debounced autocomplete, sequential spelling checks and one-shot text
//! actions, following the Elm Architecture pattern.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod messages;
pub mod model;
pub mod prompt;
pub mod runtime;
pub mod service;
pub mod tracing;
pub mod update;
pub mod util;
pub mod view;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::AssistConfig;
pub use messages::Msg;
pub use model::AppModel;
