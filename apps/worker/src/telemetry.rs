//! Tracing setup for hosts embedding the worker

use resonance_shared_config::CommonConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global tracing subscriber
///
/// `RUST_LOG` wins when set; otherwise the configured log level applies.
/// Calling this more than once is harmless, later calls leave the existing
/// subscriber in place.
pub fn init_tracing(config: &CommonConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    if let Err(e) = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
    {
        tracing::debug!(error = %e, "Tracing subscriber already installed");
    }
}
