use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Build the filter from `RUST_LOG`, falling back to `level` for our crates.
pub fn env_filter(level: &str) -> EnvFilter {
    let default_filter =
        format!("aceest_server={level},aceest_core={level},tower_http={level}");
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter))
}

/// Initialize logging to stdout.
///
/// The log level can be controlled via the `level` parameter or the
/// `RUST_LOG` environment variable.
pub fn init_logging(level: &str) {
    tracing_subscriber::registry()
        .with(env_filter(level))
        .with(fmt::layer().with_target(true).with_thread_ids(false))
        .init();

    tracing::info!("ACEest server logging initialized (level={level})");
}
