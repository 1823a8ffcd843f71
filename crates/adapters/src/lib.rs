//! Adapters for utilbelt.
//!
//! Production implementations of the ports declared in `utilbelt-common`,
//! plus the helpers that need them: the console logger, the pretty printer,
//! debug logging and the debouncer. Configuration and `tracing` setup for
//! binaries live here too.

pub mod clock;
pub mod config;
pub mod debounce;
pub mod debug;
pub mod logging;
pub mod print;
pub mod random_adapter;
pub mod sink;
pub mod telemetry;

#[cfg(test)]
pub(crate) mod test_support;

pub use clock::{env_snapshot, ProcessEnv, SystemClock, NOT_SET};
pub use config::{AdapterConfig, ConfigError};
pub use debounce::Debouncer;
pub use debug::{
    debug_backtrace_log, debug_env_variables, debug_execution_time, debug_log, Stopwatch,
};
pub use logging::{Console, TracingConsole};
pub use print::{AlertKind, Measured, Printer};
pub use random_adapter::ThreadRngAdapter;
pub use sink::{stdout, StdoutSink, WriterSink};
pub use telemetry::init_tracing;
