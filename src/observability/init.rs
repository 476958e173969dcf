//! Tracing initialization and subscriber setup.

use crate::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Level used when neither `RUST_LOG` nor the config sets one.
const DEFAULT_LEVEL: &str = "warn";

/// Chooses the filter directive from `RUST_LOG`, then config, then the default.
///
/// # Examples
///
/// ```rust
/// use bloodref::observability::filter_directive;
/// use bloodref::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// assert_eq!(filter_directive(&config, None), "debug");
/// assert_eq!(filter_directive(&config, Some("bloodref=trace")), "bloodref=trace");
/// assert_eq!(filter_directive(&Config::default(), None), "warn");
/// ```
#[must_use]
pub fn filter_directive(config: &Config, rust_log: Option<&str>) -> String {
    rust_log
        .filter(|v| !v.trim().is_empty())
        .map(str::to_string)
        .or_else(|| config.trace_level.clone())
        .unwrap_or_else(|| DEFAULT_LEVEL.to_string())
}

/// Initializes the global tracing subscriber.
///
/// Installs a registry with an [`EnvFilter`] and a compact `fmt` layer writing to
/// stderr. An invalid directive falls back to the default level.
///
/// # Initialization Behavior
///
/// Idempotent: only the first call installs a subscriber, later calls are no-ops.
pub fn init_tracing(config: &Config) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let directive = filter_directive(config, rust_log.as_deref());

    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let subscriber = tracing_subscriber::registry().with(filter).with(fmt_layer);

    if subscriber.try_init().is_ok() {
        tracing::debug!(directive = %directive, "tracing initialized");
    }
}
