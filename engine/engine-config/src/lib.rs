//! Centralized configuration loading from config.toml.
//!
//! This crate provides configuration structs and loading logic shared
//! across the Rust components (the player binary and benchmarks).
//!
//! # Configuration Priority
//!
//! Settings are loaded with the following priority (highest to lowest):
//! 1. Environment variables (`MCTTT_<SECTION>_<KEY>`)
//! 2. config.toml file
//! 3. Built-in defaults (config.defaults.toml)
//!
//! # Environment Variable Override Pattern
//!
//! ```text
//! MCTTT_<SECTION>_<KEY>=value
//!
//! Examples:
//!     MCTTT_COMMON_LOG_LEVEL=debug
//!     MCTTT_SEARCH_NUM_TRIALS=1000
//!     MCTTT_SEARCH_WORKERS=4
//!     MCTTT_GAME_DIMENSION=4
//! ```

mod defaults;
mod loader;
mod structs;

pub use defaults::*;
pub use loader::{apply_env_overrides, load_config, load_from_path, CONFIG_SEARCH_PATHS};
pub use structs::*;

#[cfg(test)]
mod tests;
