//! # msg-react-cli
//!
//! Standalone runner for the `msg_react` action: argument parsing, env config and wiring of
//! the SQLite store, the env model registry and the NapCat gateway.

pub mod cli;

pub use cli::{build_plugin, database_url, log_file, plugin_config_path, Cli, Commands};
