//! Leveled console logging.
//!
//! [`Console`] formats messages the same way regardless of where they end
//! up; the [`ConsolePort`] decides the destination. [`TracingConsole`] is
//! the production port and forwards everything to `tracing`.

use std::fmt::Debug;

use utilbelt_common::{ConsolePort, LogLevel};

/// Title used by [`Console::log_data`] when none is given.
pub const DEFAULT_LOG_TITLE: &str = "Log";

/// Formats and emits leveled console messages through a [`ConsolePort`].
#[derive(Debug, Clone)]
pub struct Console<P: ConsolePort> {
    port: P,
}

impl<P: ConsolePort> Console<P> {
    pub fn new(port: P) -> Self {
        Self { port }
    }

    /// Logs `data` under `title` (default `"Log"`).
    pub fn log_data<T: Debug + ?Sized>(&self, data: &T, title: Option<&str>) {
        let title = title.unwrap_or(DEFAULT_LOG_TITLE);
        self.port.emit(LogLevel::Log, &format!("{}: {:?}", title, data));
    }

    pub fn log_warning(&self, message: &str) {
        self.port
            .emit(LogLevel::Warn, &format!("Warning: {}", message));
    }

    pub fn log_error(&self, message: &str) {
        self.port.emit(LogLevel::Error, &format!("Error: {}", message));
    }

    pub fn log_info(&self, message: &str) {
        self.port.emit(LogLevel::Info, &format!("Info: {}", message));
    }
}

/// Console port that forwards to `tracing` events.
///
/// Plain data dumps go out at `debug`; the other levels map one-to-one.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingConsole;

impl ConsolePort for TracingConsole {
    fn emit(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Log => tracing::debug!(target: "utilbelt::console", "{}", message),
            LogLevel::Info => tracing::info!(target: "utilbelt::console", "{}", message),
            LogLevel::Warn => tracing::warn!(target: "utilbelt::console", "{}", message),
            LogLevel::Error => tracing::error!(target: "utilbelt::console", "{}", message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::capture_logs;
    use utilbelt_common::ports::MockConsolePort;

    fn expect_message(level: LogLevel, message: &'static str) -> MockConsolePort {
        let mut port = MockConsolePort::new();
        port.expect_emit()
            .withf(move |l, m| *l == level && m.to_string() == message)
            .times(1)
            .return_const(());
        port
    }

    #[test]
    fn test_log_data_default_title() {
        let console = Console::new(expect_message(LogLevel::Log, "Log: [1, 2]"));
        console.log_data(&vec![1, 2], None);
    }

    #[test]
    fn test_log_data_custom_title() {
        let console = Console::new(expect_message(LogLevel::Log, "Users: \"ada\""));
        console.log_data("ada", Some("Users"));
    }

    #[test]
    fn test_log_warning_prefix() {
        let console = Console::new(expect_message(LogLevel::Warn, "Warning: disk low"));
        console.log_warning("disk low");
    }

    #[test]
    fn test_log_error_prefix() {
        let console = Console::new(expect_message(LogLevel::Error, "Error: boom"));
        console.log_error("boom");
    }

    #[test]
    fn test_log_info_prefix() {
        let console = Console::new(expect_message(LogLevel::Info, "Info: ready"));
        console.log_info("ready");
    }

    #[test]
    fn test_tracing_console_levels() {
        let logs = capture_logs(|| {
            let console = Console::new(TracingConsole);
            console.log_data(&42, Some("Answer"));
            console.log_info("started");
            console.log_warning("slow");
            console.log_error("failed");
        });

        assert!(logs.contains("DEBUG utilbelt::console: Answer: 42"));
        assert!(logs.contains("INFO utilbelt::console: Info: started"));
        assert!(logs.contains("WARN utilbelt::console: Warning: slow"));
        assert!(logs.contains("ERROR utilbelt::console: Error: failed"));
    }
}
