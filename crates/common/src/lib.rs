//! Common helper functions for utilbelt.
//!
//! This crate provides pure helpers: set-like operations over sequences,
//! pattern-based validators, date formatting and emptiness checks. Anything
//! that touches the outside world (randomness, clocks, environment, console,
//! output streams) is expressed as a port trait in [`ports`] and injected by
//! the caller.
//!
//! # Design Principles
//!
//! - **Pure functions only** - no side effects, no I/O
//! - **Inputs are never mutated** - every operation returns a fresh value
//! - **Failure is silent and local** - predicates return `false`, never panic
//! - **No ambient globals** - randomness and time come in through ports

pub mod collections;
pub mod datetime;
pub mod empty;
pub mod general;
pub mod ports;
pub mod validation;

// Re-export commonly used functions at crate root for convenience
pub use collections::{
    dedup, dedup_by_eq, difference, difference_hashed, intersect, intersect_hashed, shuffle,
};
pub use datetime::{format_date, format_date_with};
pub use empty::{is_empty, IsEmpty};
pub use general::random_int;
pub use ports::{ClockPort, ConsolePort, EnvPort, FixedRandomPort, LogLevel, OutputSink, RandomPort};
pub use validation::{
    is_positive_integer, is_positive_integer_value, is_valid_email, is_valid_password,
    is_valid_url, WholeNumber,
};
