//! Port traits for capabilities injected into the pure helpers.
//!
//! Helpers that need randomness, time, environment access or somewhere to
//! write take one of these traits as a parameter instead of reaching for
//! process-wide state. Production implementations live in
//! `utilbelt-adapters`; tests use [`FixedRandomPort`], the in-memory
//! [`OutputSink`] impls below, or the `mockall` mocks generated under the
//! `testing` feature.
//!
//! # Example
//!
//! ```
//! use utilbelt_common::ports::{FixedRandomPort, RandomPort};
//!
//! fn roll(rng: &dyn RandomPort, sides: i32) -> i32 {
//!     rng.random_range(1, sides)
//! }
//!
//! assert_eq!(roll(&FixedRandomPort::constant(4), 6), 4);
//! ```

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use chrono::{DateTime, Utc};

/// Random number generation abstraction.
///
/// # Implementations
///
/// - `ThreadRngAdapter` in utilbelt-adapters (production, uses `rand::thread_rng()`)
/// - `MockRandomPort` via mockall (testing)
/// - [`FixedRandomPort`] for deterministic testing (returns fixed values)
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait RandomPort: Send + Sync {
    /// Generate a random i32 in range [min, max] (inclusive on both ends).
    ///
    /// Implementations swap reversed bounds instead of panicking.
    fn random_range(&self, min: i32, max: i32) -> i32;

    /// Generate a random index in range [0, len)
    ///
    /// Callers must not pass `len == 0`.
    fn random_index(&self, len: usize) -> usize;
}

/// Fixed random port for deterministic testing.
///
/// Returns values from a provided sequence, cycling if needed.
/// Thread-safe via atomic operations.
#[derive(Debug)]
pub struct FixedRandomPort {
    values: Vec<i32>,
    index: AtomicUsize,
}

impl Clone for FixedRandomPort {
    fn clone(&self) -> Self {
        Self {
            values: self.values.clone(),
            index: AtomicUsize::new(self.index.load(Ordering::SeqCst)),
        }
    }
}

impl FixedRandomPort {
    /// Create a new FixedRandomPort with the given sequence of values.
    ///
    /// An empty sequence behaves like `constant(0)`.
    pub fn new(values: Vec<i32>) -> Self {
        let values = if values.is_empty() { vec![0] } else { values };
        Self {
            values,
            index: AtomicUsize::new(0),
        }
    }

    /// Create a FixedRandomPort that always returns the same value.
    pub fn constant(value: i32) -> Self {
        Self::new(vec![value])
    }

    fn next_value(&self) -> i32 {
        let idx = self.index.fetch_add(1, Ordering::SeqCst);
        self.values[idx % self.values.len()]
    }
}

impl RandomPort for FixedRandomPort {
    fn random_range(&self, min: i32, max: i32) -> i32 {
        let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
        self.next_value().clamp(lo, hi)
    }

    fn random_index(&self, len: usize) -> usize {
        let value = usize::try_from(self.next_value()).unwrap_or(0);
        value.min(len.saturating_sub(1))
    }
}

/// Time operations abstraction.
///
/// All helpers that need the current time should take this port rather than
/// calling `Utc::now()` or `Instant::now()` directly.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait ClockPort: Send + Sync {
    /// Get current time as DateTime<Utc>
    fn now(&self) -> DateTime<Utc>;

    /// Get monotonic instant for duration measurements
    fn instant_now(&self) -> Instant;
}

/// Read access to environment variables.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait EnvPort: Send + Sync {
    /// Value of `key`, or `None` if unset or not valid unicode.
    fn var(&self, key: &str) -> Option<String>;
}

/// Severity of a console message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogLevel {
    /// Plain data dump
    Log,
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Log => "log",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        };
        f.write_str(s)
    }
}

/// Leveled console sink.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait ConsolePort: Send + Sync {
    /// Emit one message at the given level.
    fn emit(&self, level: LogLevel, message: &str);
}

/// Line-oriented destination for rendered output.
///
/// Implementations must not fail loudly: a sink that cannot write drops the
/// line.
pub trait OutputSink {
    /// Write one line. `line` never contains the trailing newline.
    fn write_line(&mut self, line: &str);
}

impl OutputSink for String {
    fn write_line(&mut self, line: &str) {
        self.push_str(line);
        self.push('\n');
    }
}

impl OutputSink for Vec<String> {
    fn write_line(&mut self, line: &str) {
        self.push(line.to_string());
    }
}

impl<S: OutputSink + ?Sized> OutputSink for &mut S {
    fn write_line(&mut self, line: &str) {
        (**self).write_line(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_random_port_constant() {
        let rng = FixedRandomPort::constant(10);
        assert_eq!(rng.random_range(1, 20), 10);
        assert_eq!(rng.random_range(1, 20), 10);
        assert_eq!(rng.random_range(1, 6), 6); // Clamped to max
        assert_eq!(rng.random_range(15, 20), 15); // Clamped to min
    }

    #[test]
    fn test_fixed_random_port_sequence() {
        let rng = FixedRandomPort::new(vec![1, 5, 10, 20]);
        assert_eq!(rng.random_range(1, 20), 1);
        assert_eq!(rng.random_range(1, 20), 5);
        assert_eq!(rng.random_range(1, 20), 10);
        assert_eq!(rng.random_range(1, 20), 20);
        // Cycles back
        assert_eq!(rng.random_range(1, 20), 1);
    }

    #[test]
    fn test_fixed_random_port_index_is_clamped() {
        let rng = FixedRandomPort::new(vec![-4, 2, 99]);
        assert_eq!(rng.random_index(5), 0);
        assert_eq!(rng.random_index(5), 2);
        assert_eq!(rng.random_index(5), 4);
    }

    #[test]
    fn test_fixed_random_port_empty_values() {
        let rng = FixedRandomPort::new(Vec::new());
        assert_eq!(rng.random_range(-5, 5), 0);
    }

    #[test]
    fn test_fixed_random_port_reversed_bounds() {
        let rng = FixedRandomPort::new(vec![10, -10, 3]);
        assert_eq!(rng.random_range(6, 1), 6);
        assert_eq!(rng.random_range(6, 1), 1);
        assert_eq!(rng.random_range(6, 1), 3);
    }

    #[test]
    fn test_string_sink_appends_newlines() {
        let mut out = String::new();
        out.write_line("a");
        out.write_line("b");
        assert_eq!(out, "a\nb\n");
    }

    #[test]
    fn test_vec_sink_collects_lines() {
        fn write_through<S: OutputSink>(mut sink: S, line: &str) {
            sink.write_line(line);
        }

        let mut out: Vec<String> = Vec::new();
        write_through(&mut out, "first");
        out.write_line("second");
        assert_eq!(out, vec!["first".to_string(), "second".to_string()]);
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(LogLevel::Warn.to_string(), "warn");
        assert_eq!(LogLevel::Log.to_string(), "log");
    }
}
