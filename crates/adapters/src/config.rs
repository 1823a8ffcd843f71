//! Adapter configuration

use std::time::Duration;

use thiserror::Error;
use utilbelt_common::EnvPort;

use crate::clock::ProcessEnv;

pub const DEFAULT_LOG_FILTER: &str = "utilbelt=debug";
pub const DEFAULT_DEBOUNCE_MS: u64 = 250;
pub const DEFAULT_ENV_KEYS: &str = "HOME,PATH";

/// Error loading configuration from the environment
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A variable that must be a number could not be parsed
    #[error("{key} must be a non-negative integer, got '{value}'")]
    InvalidNumber { key: &'static str, value: String },
}

/// Configuration loaded from environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdapterConfig {
    /// Default `tracing` filter when `RUST_LOG` is not set
    pub log_filter: String,
    /// Debounce window for the demo debouncer
    pub debounce_wait: Duration,
    /// Environment variables shown by the env printer
    pub env_keys: Vec<String>,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            debounce_wait: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
            env_keys: split_keys(DEFAULT_ENV_KEYS),
        }
    }
}

impl AdapterConfig {
    /// Load configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_port(&ProcessEnv)
    }

    /// Load configuration through an [`EnvPort`]
    pub fn from_env_port(env: &dyn EnvPort) -> Result<Self, ConfigError> {
        let debounce_ms = match env.var("UTILBELT_DEBOUNCE_MS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidNumber {
                    key: "UTILBELT_DEBOUNCE_MS",
                    value: raw.clone(),
                })?,
            None => DEFAULT_DEBOUNCE_MS,
        };

        Ok(Self {
            log_filter: env
                .var("UTILBELT_LOG_FILTER")
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            debounce_wait: Duration::from_millis(debounce_ms),
            env_keys: split_keys(
                &env.var("UTILBELT_ENV_KEYS")
                    .unwrap_or_else(|| DEFAULT_ENV_KEYS.to_string()),
            ),
        })
    }
}

fn split_keys(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
