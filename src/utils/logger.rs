use std::sync::Once;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

static INIT: Once = Once::new();

/// Initializes the global tracing subscriber
///
/// Filtering follows `RUST_LOG` when set and defaults to `info`
/// otherwise. Safe to call repeatedly; only the first call installs the
/// subscriber, which makes it usable from tests.
pub fn setup_logger() {
    INIT.call_once(|| {
        tracing_subscriber::registry()
            .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
            .with(tracing_subscriber::fmt::layer())
            .init();
    });
}
