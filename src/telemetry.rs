//! Opt-in tracing setup for binaries and tests that render plots.
//!
//! The library itself only emits `tracing` events. Hosts that already run a
//! subscriber never need this module.

/// Default filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info";

/// Installs a compact subscriber filtered by `RUST_LOG`, falling back to `info`.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_fallback(DEFAULT_FILTER)
}

/// Installs a compact subscriber filtered by `RUST_LOG`, falling back to
/// `fallback_filter` (for example `signal_drawer=trace`).
///
/// Returns `false` when the `telemetry` feature is disabled or a global
/// subscriber was already set.
#[must_use]
pub fn init_tracing_with_fallback(fallback_filter: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(fallback_filter));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
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
