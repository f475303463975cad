use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::AppConfig;

/// Initialize tracing for hosts that want the default subscriber setup.
///
/// Respects `RUST_LOG` when set, otherwise falls back to the configured
/// log level for this crate. Call at most once per process.
pub fn init_tracing(config: &AppConfig) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(format!("salesdash={}", config.log_level))
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
