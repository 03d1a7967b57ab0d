use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize structured JSON logging on stdout. Call once at startup.
///
/// `RUST_LOG` selects levels; when it is unset or invalid, `default_filter`
/// is used instead (e.g. `"info,sqlx=warn"`).
///
/// Safe to call multiple times; later calls are ignored.
pub fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json())
        .try_init();
}
