use std::io;
use tracing_subscriber::{fmt, EnvFilter};

fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Initialize the tracing subscriber with compact human-readable output.
/// Respects `RUST_LOG`; falls back to info for the app and the HTTP stack.
/// Writes to stdout so logs stay visible where stderr is hidden.
pub fn init_logging_default() {
    let _ = fmt()
        .with_env_filter(env_filter("info,tower_http=info,axum=info"))
        .with_target(false)
        .compact()
        .with_writer(|| io::stdout())
        .try_init();
}

/// Initialize the tracing subscriber with JSON output for container
/// environments that ship stdout to a log collector. Respects `RUST_LOG`.
pub fn init_logging_json() {
    let _ = fmt()
        .with_env_filter(env_filter("info"))
        .with_target(false)
        .json()
        .with_writer(|| io::stdout())
        .try_init();
}
