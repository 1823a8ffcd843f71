//! Clock and environment implementations.

use std::time::Instant;

use chrono::{DateTime, Utc};
use utilbelt_common::{ClockPort, EnvPort};

/// System clock - uses real time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl ClockPort for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn instant_now(&self) -> Instant {
        Instant::now()
    }
}

/// Process environment - reads real environment variables.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl ProcessEnv {
    pub fn new() -> Self {
        Self
    }
}

impl EnvPort for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Collects `key -> value` pairs for the given keys, in the order given.
///
/// Unset variables are reported as `"Not Set"`.
pub fn env_snapshot<K: AsRef<str>>(env: &dyn EnvPort, keys: &[K]) -> Vec<(String, String)> {
    keys.iter()
        .map(|key| {
            let key = key.as_ref();
            let value = env.var(key).unwrap_or_else(|| NOT_SET.to_string());
            (key.to_string(), value)
        })
        .collect()
}

/// Placeholder for variables missing from the environment.
pub const NOT_SET: &str = "Not Set";
