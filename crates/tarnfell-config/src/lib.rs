//! Configuration system for the Tarnfell map tooling.
//!
//! Settings persist to disk as RON files, support CLI overrides via clap,
//! and deserialize forward/backward compatibly: unknown fields are ignored
//! and missing sections fall back to defaults.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{Config, DebugConfig, OutputConfig};
pub use error::ConfigError;
