//! Tracing setup shared by the server and client binaries.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter for the server: crate at debug plus request traces.
pub const SERVER_FILTER: &str = "lead_tracker=debug,tower_http=debug";

/// Default filter for the client tools, which print their results to stdout.
pub const CLIENT_FILTER: &str = "lead_tracker=info";

/// Installs a global `fmt` subscriber. `RUST_LOG` overrides `default_filter`.
///
/// Log lines go to stderr so client output on stdout stays machine-readable.
pub fn init_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
