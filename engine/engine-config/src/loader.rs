//! Configuration loading logic.
//!
//! Handles loading config from files and applying environment variable overrides.

use crate::CentralConfig;
use std::path::Path;
use tracing::{debug, info, warn};

/// Standard locations to search for config.toml
pub const CONFIG_SEARCH_PATHS: &[&str] = &[
    "config.toml",    // Current directory
    "../config.toml", // Parent directory (when running from subdirectory)
];

/// Load the central configuration from config.toml.
///
/// Searches for config.toml in the following order:
/// 1. Path specified by MCTTT_CONFIG environment variable
/// 2. Current directory (config.toml)
/// 3. Parent directory (../config.toml)
///
/// After loading, environment variable overrides are applied.
pub fn load_config() -> CentralConfig {
    // Check for explicit config path
    if let Ok(path) = std::env::var("MCTTT_CONFIG") {
        let path = Path::new(&path);
        if path.exists() {
            info!("Loading config from MCTTT_CONFIG: {}", path.display());
            return load_from_path(path);
        }
        warn!(
            "MCTTT_CONFIG={} not found, searching defaults",
            path.display()
        );
    }

    // Search default locations
    for path_str in CONFIG_SEARCH_PATHS {
        let path = Path::new(path_str);
        if path.exists() {
            info!("Loading config from {}", path.display());
            return load_from_path(path);
        }
    }

    // Fall back to defaults
    debug!("No config.toml found, using built-in defaults");
    apply_env_overrides(CentralConfig::default())
}

/// Load configuration from a specific path.
pub fn load_from_path(path: &Path) -> CentralConfig {
    match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(config) => apply_env_overrides(config),
            Err(e) => {
                warn!("Failed to parse {}: {}, using defaults", path.display(), e);
                apply_env_overrides(CentralConfig::default())
            }
        },
        Err(e) => {
            warn!("Failed to read {}: {}, using defaults", path.display(), e);
            apply_env_overrides(CentralConfig::default())
        }
    }
}

/// Macro to reduce env override boilerplate
macro_rules! env_override {
    // String field
    ($config:expr, $section:ident . $field:ident, $key:expr) => {
        if let Ok(v) = std::env::var($key) {
            $config.$section.$field = v;
        }
    };
    // Parseable field (u32, f64, bool, etc.)
    ($config:expr, $section:ident . $field:ident, $key:expr, parse) => {
        match std::env::var($key) {
            Ok(v) => match v.parse() {
                Ok(parsed) => $config.$section.$field = parsed,
                Err(_) => warn!("Ignoring {}={}: not a valid value", $key, v),
            },
            Err(_) => {}
        }
    };
}

/// Apply environment variable overrides to a configuration.
///
/// Environment variables follow the pattern: MCTTT_<SECTION>_<KEY>
pub fn apply_env_overrides(mut config: CentralConfig) -> CentralConfig {
    // Common
    env_override!(config, common.log_level, "MCTTT_COMMON_LOG_LEVEL");
    env_override!(config, common.seed, "MCTTT_COMMON_SEED", parse);

    // Search
    env_override!(
        config,
        search.num_trials,
        "MCTTT_SEARCH_NUM_TRIALS",
        parse
    );
    env_override!(
        config,
        search.score_current,
        "MCTTT_SEARCH_SCORE_CURRENT",
        parse
    );
    env_override!(
        config,
        search.score_other,
        "MCTTT_SEARCH_SCORE_OTHER",
        parse
    );
    env_override!(config, search.workers, "MCTTT_SEARCH_WORKERS", parse);
    env_override!(config, search.tie_break, "MCTTT_SEARCH_TIE_BREAK");

    // Game
    env_override!(config, game.dimension, "MCTTT_GAME_DIMENSION", parse);
    env_override!(config, game.reverse, "MCTTT_GAME_REVERSE", parse);
    env_override!(config, game.machine, "MCTTT_GAME_MACHINE");
    env_override!(config, game.opponent, "MCTTT_GAME_OPPONENT");
    env_override!(config, game.games, "MCTTT_GAME_GAMES", parse);

    config
}
