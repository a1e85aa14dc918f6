/// The current version of tool-preview, sourced from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod commands;
pub mod config;
pub mod error;
pub mod preview;
pub mod spinner;
pub mod types;
