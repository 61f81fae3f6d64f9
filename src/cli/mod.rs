//! Command-line front end for the move advisor
//!
//! Subcommands live in [`commands`]; shared printing helpers in [`output`].

use std::path::Path;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::EngineConfig;

pub mod commands;
pub mod output;

/// Install a `tracing` subscriber on stderr, filtered by `RUST_LOG`
/// (default `warn`). Safe to call more than once.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Load the engine configuration from `path`, or the defaults when absent
pub fn load_config(path: Option<&Path>) -> Result<EngineConfig> {
    match path {
        Some(path) => EngineConfig::from_json_file(path)
            .with_context(|| format!("loading engine config from {}", path.display())),
        None => Ok(EngineConfig::default()),
    }
}
