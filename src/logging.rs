use tracing_subscriber::{fmt, EnvFilter};

/// Initialise the tracing subscriber for the CLI.
///
/// Reads the filter from `RUST_LOG` (e.g. `RUST_LOG=pizza_oven_rs=debug`).
/// Defaults to `warn` so regular output stays readable. Logs go to stderr.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .init();
}

/// Initialise logging for tests at debug level. Safe to call repeatedly.
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
