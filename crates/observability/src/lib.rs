//! Logging for the quality engine.
//!
//! The engine never logs on its own. Pair [`init`] with a [`TracingObserver`]
//! handed to `QualityEngine::simulate` (or `update_quality_observed`) to get
//! one JSON line per item update at `debug` and a day summary at `info`.

use tracing_subscriber::EnvFilter;

pub mod observer;

pub use observer::{DaySummary, TracingObserver};

/// Filter used when `RUST_LOG` is unset: day summaries from this workspace only.
pub const DEFAULT_FILTER: &str = "shelflife_inventory=info,shelflife_observability=info";

/// Install the JSON subscriber for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .try_init();
}
