//! Tracing setup for hosts and tests that want to see selection decisions.
//!
//! Selection logs a `debug` event per pass and a `trace` event per tick; both
//! are silent unless a subscriber is installed. Hosts with their own
//! subscriber should ignore this module.

/// Default filter: pass summaries from this crate, warnings from everything else.
pub const DEFAULT_TRACING_FILTER: &str = "warn,tick_sieve=debug";

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG`, or by
/// [`DEFAULT_TRACING_FILTER`] when `RUST_LOG` is unset.
///
/// Returns `false` when the `telemetry` feature is disabled or a global
/// subscriber is already set.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_filter(DEFAULT_TRACING_FILTER)
}

/// Like [`init_default_tracing`], with a caller-chosen fallback filter.
#[must_use]
pub fn init_tracing_with_filter(fallback_filter: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback_filter));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_filter;
        false
    }
}
