//! utilbelt - demo entry point.
//!
//! Loads configuration, installs logging and runs every helper once against
//! the production adapters, printing the results to stdout.

use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;
use serde_json::json;

use utilbelt_adapters::{
    debug_env_variables, debug_execution_time, debug_log, init_tracing, stdout, AdapterConfig,
    AlertKind, Console, Debouncer, Printer, ProcessEnv, Stopwatch, SystemClock, ThreadRngAdapter,
    TracingConsole,
};
use utilbelt_common::{
    dedup, difference, format_date, format_date_with, intersect, is_empty, is_positive_integer,
    is_valid_email, is_valid_password, is_valid_url, random_int, shuffle, ClockPort,
};

#[derive(Debug, Serialize)]
struct Check {
    input: &'static str,
    email: bool,
    url: bool,
    password: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AdapterConfig::from_env().context("Failed to load configuration")?;
    init_tracing(&config.log_filter);

    tracing::info!("Starting utilbelt");
    tracing::info!("  Debounce window: {:?}", config.debounce_wait);

    let clock: Arc<dyn ClockPort> = Arc::new(SystemClock);
    let stopwatch = Stopwatch::start(Arc::clone(&clock));
    let rng = ThreadRngAdapter::new();
    let mut printer = Printer::new(stdout());

    // Sequences
    let a = [1, 2, 2, 3, 1, 5];
    let b = [2, 3, 4];
    printer.key_value_list(
        [
            ("dedup", format!("{:?}", dedup(&a))),
            ("intersect", format!("{:?}", intersect(&a, &b))),
            ("difference", format!("{:?}", difference(&a, &b))),
            ("shuffle", format!("{:?}", shuffle(&a, &rng))),
            ("random_int(1, 6)", random_int(&rng, 1, 6).to_string()),
        ],
        Some("Sequences"),
    );

    // Validation
    let checks: Vec<Check> = ["a@b.co", "https://example.com/docs", "Abcdefg1", "nope"]
        .into_iter()
        .map(|input| Check {
            input,
            email: is_valid_email(input),
            url: is_valid_url(input),
            password: is_valid_password(input),
        })
        .collect();
    printer.table(&checks, Some("Validation"));
    printer.key_value_list(
        [(5, is_positive_integer(5)), (0, is_positive_integer(0)), (-3, is_positive_integer(-3))],
        Some("Positive integers"),
    );

    // General
    let today = clock.now();
    printer.json_pretty(
        &json!({
            "today": format_date(&today),
            "iso": format_date_with(&today, "YYYY-MM-DD"),
            "empty_object_is_empty": is_empty(&json!({})),
            "blank_string_is_empty": is_empty(" "),
        }),
        Some("General"),
    );
    printer.pre(&checks[0], Some("First check"));
    printer.list(&config.env_keys, Some("Watched variables"));
    printer.debug_measured(&dedup(&a), Some("Deduplicated"));
    printer.alert("all helpers ran", AlertKind::Success);
    printer.alert("demo output only", AlertKind::from("notice"));
    printer.env(&ProcessEnv, &config.env_keys);
    printer.separator(Some("Logging"));

    let console = Console::new(TracingConsole);
    console.log_data(&b, Some("Second sequence"));
    console.log_info("console helpers ready");
    console.log_warning("this is only a demo");
    debug_log(&checks, Some("Validation results"));
    debug_env_variables(&ProcessEnv, &config.env_keys);

    // Debounce: a burst of calls fires once with the last value
    let debouncer = Debouncer::new(config.debounce_wait, |value: u32| {
        tracing::info!(value, at = %Utc::now(), "Debounced call fired");
    });
    for value in 1..=5 {
        debouncer.call(value);
    }
    tokio::time::sleep(config.debounce_wait * 2).await;

    debug_execution_time(&stopwatch, None);
    printer.separator_with_message("Done");
    Ok(())
}
