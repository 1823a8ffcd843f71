//! Debug-level logging helpers.
//!
//! All events go to the `utilbelt::debug` target at `DEBUG` level, so they
//! can be switched on independently with e.g. `RUST_LOG=utilbelt::debug=debug`.
//! Each helper also returns what it logged, which keeps them usable (and
//! testable) without a subscriber installed.

use std::backtrace::Backtrace;
use std::fmt::Debug;
use std::sync::Arc;
use std::time::{Duration, Instant};

use utilbelt_common::{ClockPort, EnvPort};

use crate::clock::env_snapshot;

pub const DEFAULT_DEBUG_TITLE: &str = "Debug Log";
pub const DEFAULT_TIMER_TITLE: &str = "Execution Time";
pub const DEFAULT_BACKTRACE_TITLE: &str = "Function Call Backtrace";

/// Logs a pretty `{:#?}` dump of `data` under `title`.
pub fn debug_log<T: Debug + ?Sized>(data: &T, title: Option<&str>) -> String {
    let message = format!("{}:\n{:#?}", title.unwrap_or(DEFAULT_DEBUG_TITLE), data);
    tracing::debug!(target: "utilbelt::debug", "{}", message);
    message
}

/// Measures elapsed time against an injected clock.
pub struct Stopwatch {
    clock: Arc<dyn ClockPort>,
    started: Instant,
}

impl Stopwatch {
    pub fn start(clock: Arc<dyn ClockPort>) -> Self {
        let started = clock.instant_now();
        Self { clock, started }
    }

    pub fn elapsed(&self) -> Duration {
        self.clock
            .instant_now()
            .saturating_duration_since(self.started)
    }
}

impl std::fmt::Debug for Stopwatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stopwatch")
            .field("started", &self.started)
            .finish_non_exhaustive()
    }
}

/// Logs the time since `stopwatch` started, in seconds, and returns it.
pub fn debug_execution_time(stopwatch: &Stopwatch, title: Option<&str>) -> Duration {
    let elapsed = stopwatch.elapsed();
    tracing::debug!(
        target: "utilbelt::debug",
        "{}: {:.6} seconds",
        title.unwrap_or(DEFAULT_TIMER_TITLE),
        elapsed.as_secs_f64()
    );
    elapsed
}

/// Logs the given environment variables, `Not Set` for missing ones.
pub fn debug_env_variables<K: AsRef<str>>(env: &dyn EnvPort, keys: &[K]) -> Vec<(String, String)> {
    let snapshot = env_snapshot(env, keys);
    tracing::debug!(target: "utilbelt::debug", "Environment Variables:\n{:#?}", snapshot);
    snapshot
}

/// Logs a backtrace of the current call stack.
///
/// Frames are only resolved when `RUST_BACKTRACE`/`RUST_LIB_BACKTRACE`
/// enables capture; otherwise the backtrace reads "disabled backtrace".
pub fn debug_backtrace_log(title: Option<&str>) -> String {
    let message = format!(
        "{}:\n{}",
        title.unwrap_or(DEFAULT_BACKTRACE_TITLE),
        Backtrace::capture()
    );
    tracing::debug!(target: "utilbelt::debug", "{}", message);
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::capture_logs;
    use utilbelt_common::ports::{MockClockPort, MockEnvPort};

    #[derive(Debug)]
    #[allow(dead_code)]
    struct Order {
        id: u32,
        items: Vec<&'static str>,
    }

    #[test]
    fn test_debug_log_pretty_dump() {
        let order = Order {
            id: 7,
            items: vec!["tea"],
        };
        let logs = capture_logs(|| {
            let message = debug_log(&order, Some("Order"));
            assert!(message.starts_with("Order:\nOrder {\n    id: 7,"));
        });
        assert!(logs.contains("DEBUG utilbelt::debug: Order:"));
        assert!(logs.contains("\"tea\""));
    }

    #[test]
    fn test_debug_log_default_title() {
        assert!(debug_log(&1, None).starts_with("Debug Log:\n1"));
    }

    #[test]
    fn test_execution_time_uses_clock() {
        let base = Instant::now();
        let mut clock = MockClockPort::new();
        let mut seq = mockall::Sequence::new();
        clock
            .expect_instant_now()
            .times(1)
            .in_sequence(&mut seq)
            .return_const(base);
        clock
            .expect_instant_now()
            .times(1)
            .in_sequence(&mut seq)
            .return_const(base + Duration::from_millis(1500));

        let stopwatch = Stopwatch::start(Arc::new(clock));
        let logs = capture_logs(|| {
            let elapsed = debug_execution_time(&stopwatch, Some("Import"));
            assert_eq!(elapsed, Duration::from_millis(1500));
        });
        assert!(logs.contains("Import: 1.500000 seconds"));
    }

    #[test]
    fn test_stopwatch_never_negative() {
        let base = Instant::now() + Duration::from_secs(10);
        let mut clock = MockClockPort::new();
        let mut seq = mockall::Sequence::new();
        clock
            .expect_instant_now()
            .times(1)
            .in_sequence(&mut seq)
            .return_const(base);
        clock
            .expect_instant_now()
            .times(1)
            .in_sequence(&mut seq)
            .return_const(base - Duration::from_secs(1));

        let stopwatch = Stopwatch::start(Arc::new(clock));
        assert_eq!(stopwatch.elapsed(), Duration::ZERO);
    }

    #[test]
    fn test_env_variables_logged_and_returned() {
        let mut env = MockEnvPort::new();
        env.expect_var().returning(|key| {
            if key == "DB_HOST" {
                Some("localhost".to_string())
            } else {
                None
            }
        });

        let logs = capture_logs(|| {
            let snapshot = debug_env_variables(&env, &["DB_HOST", "DB_PASS"]);
            assert_eq!(snapshot[0].1, "localhost");
            assert_eq!(snapshot[1].1, "Not Set");
        });
        assert!(logs.contains("Environment Variables:"));
        assert!(logs.contains("Not Set"));
    }

    #[test]
    fn test_backtrace_log_has_title() {
        let message = debug_backtrace_log(None);
        assert!(message.starts_with("Function Call Backtrace:\n"));
        assert!(debug_backtrace_log(Some("Trace")).starts_with("Trace:\n"));
    }
}
