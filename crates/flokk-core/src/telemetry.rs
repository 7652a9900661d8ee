//! Tracing setup for binaries embedding flokk-core.

use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialise the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `level`; `json` switches to
/// newline-delimited JSON output for log aggregation. Only the first call
/// in a process takes effect, so library consumers and tests may call this
/// freely.
pub fn init_tracing(json: bool, level: Level) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));
    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry
            .with(fmt::layer().json().with_target(false))
            .try_init()
            .ok();
    } else {
        registry.with(fmt::layer().compact()).try_init().ok();
    }
}
