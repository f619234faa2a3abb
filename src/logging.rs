//! Logging for the demo host.
//!
//! The host writes one JSON object per line to stdout. The interesting
//! events are the plugin's `Documentation routes registered` line at
//! startup, asset-bundle and redirect details at `debug`, and one
//! `tower_http` request span per call through the `TraceLayer`.

use tracing_subscriber::{
    fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Filter used when `RUST_LOG` is unset: plugin and request logs at `info`.
pub const DEFAULT_FILTER: &str = "swagger_docs=info,tower_http=info";

/// Install the JSON subscriber.
///
/// `RUST_LOG` replaces [`DEFAULT_FILTER`] entirely, e.g.
/// `RUST_LOG=swagger_docs=debug` to see which static files miss.
pub fn init() {
    let from_env = std::env::var_os(EnvFilter::DEFAULT_ENV).is_some();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .flatten_event(true)
                .with_current_span(true)
                .with_span_events(FmtSpan::CLOSE)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    tracing::debug!(from_env, "Logging initialized");
}

/// Plain-text output captured by the test harness, with plugin debug events.
#[cfg(test)]
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("swagger_docs=debug")
        .try_init();
}
