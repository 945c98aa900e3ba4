//! # Runtime Configuration Module
//!
//! Environment variable-based configuration for synthesis runs.
//!
//! ## Environment Variables
//!
//! ### `RESTGEN_WORKERS`
//!
//! Number of threads interfaces are spread over. Output order does not depend
//! on it. Accepts decimal values; `0`, garbage or unset means `1`
//! (sequential).
//!
//! ### `RESTGEN_FAIL_ON_DIAGNOSTICS`
//!
//! When `true` (the default) the CLI exits non-zero if any instantiation
//! failed. Accepts `true`/`false`/`1`/`0`.
//!
//! ## Usage
//!
//! ```rust
//! use restgen::runtime_config::RuntimeConfig;
//!
//! let config = RuntimeConfig::from_env();
//! assert!(config.workers >= 1);
//! ```

use std::env;

/// Runtime configuration loaded from environment variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Synthesis worker threads (default: 1)
    pub workers: usize,
    /// Exit non-zero when diagnostics exist (default: true)
    pub fail_on_diagnostics: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        RuntimeConfig {
            workers: 1,
            fail_on_diagnostics: true,
        }
    }
}

impl RuntimeConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`RuntimeConfig::from_env`] with an explicit variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = RuntimeConfig::default();
        let workers = lookup("RESTGEN_WORKERS")
            .and_then(|v| v.trim().parse::<usize>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(defaults.workers);
        let fail_on_diagnostics = lookup("RESTGEN_FAIL_ON_DIAGNOSTICS")
            .and_then(|v| parse_bool(&v))
            .unwrap_or(defaults.fail_on_diagnostics);
        RuntimeConfig {
            workers,
            fail_on_diagnostics,
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
