use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter from `RUST_LOG`, falling back to `default_filter`
///
/// `.env` must already be loaded for a `RUST_LOG` set there to apply.
pub fn env_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
}

/// Install the global subscriber: [`env_filter`] and plain-text output on
/// stdout
///
/// Calling it twice leaves the first subscriber in place and logs a warning
/// through it.
pub fn init_subscriber(default_filter: &str) {
    let result = tracing_subscriber::registry()
        .with(env_filter(default_filter))
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .try_init();

    if let Err(e) = result {
        tracing::warn!("Tracing subscriber already installed: {}", e);
    }
}
