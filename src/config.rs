//! Configuration Module
//!
//! Handles loading and managing REPL configuration from environment variables.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Log filter used when `RUST_LOG` is unset. Command failures log below this
/// level; stderr is not CRLF-translated while the terminal is raw.
pub const DEFAULT_LOG_FILTER: &str = "pokedex_cli=warn";

/// Runtime configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Cache reap interval in milliseconds
    pub cache_interval_ms: u64,
    /// Directory holding the saved pokedex
    pub data_dir: PathBuf,
    /// PokeAPI base URL, without trailing slash
    pub api_url: String,
    /// Probability in [0, 1] that a thrown ball catches the pokemon
    pub catch_rate: f64,
    /// Delay between the suspense dots printed while catching, in milliseconds
    pub catch_tick_ms: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_INTERVAL_MS` - Cache reap interval (default: 5000)
    /// - `DATA_DIR` - Save directory (default: `data`)
    /// - `POKEAPI_URL` - API base URL (default: `https://pokeapi.co/api/v2`)
    /// - `CATCH_RATE` - Catch probability (default: 0.5)
    /// - `CATCH_TICK_MS` - Catch animation tick (default: 1000)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            cache_interval_ms: env::var("CACHE_INTERVAL_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|ms| *ms > 0)
                .unwrap_or(defaults.cache_interval_ms),
            data_dir: env::var("DATA_DIR")
                .ok()
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            api_url: env::var("POKEAPI_URL")
                .ok()
                .map(|v| v.trim_end_matches('/').to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.api_url),
            catch_rate: env::var("CATCH_RATE")
                .ok()
                .and_then(|v| parse_catch_rate(&v))
                .unwrap_or(defaults.catch_rate),
            catch_tick_ms: env::var("CATCH_TICK_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.catch_tick_ms),
        }
    }

    /// Reap interval as a Duration.
    pub fn cache_interval(&self) -> Duration {
        Duration::from_millis(self.cache_interval_ms)
    }

    /// Catch animation tick as a Duration.
    pub fn catch_tick(&self) -> Duration {
        Duration::from_millis(self.catch_tick_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_interval_ms: 5000,
            data_dir: PathBuf::from("data"),
            api_url: "https://pokeapi.co/api/v2".to_string(),
            catch_rate: 0.5,
            catch_tick_ms: 1000,
        }
    }
}

/// Parses a catch probability, clamped to `[0, 1]`. NaN and infinities are rejected.
fn parse_catch_rate(value: &str) -> Option<f64> {
    value
        .parse::<f64>()
        .ok()
        .filter(|rate| rate.is_finite())
        .map(|rate| rate.clamp(0.0, 1.0))
}
