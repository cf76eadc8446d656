//! Opt-in `tracing` setup for hosts that do not install their own subscriber.
//!
//! The gauge engine only emits events through `tracing` macros; nothing is
//! printed unless a subscriber is installed, either here or by the host.

/// Filter applied when `RUST_LOG` is unset: gauge events at `info`, others at `warn`.
pub const DEFAULT_TRACING_DIRECTIVES: &str = "warn,gauge_rs=info";

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG`, falling back to
/// [`DEFAULT_TRACING_DIRECTIVES`].
///
/// Returns `false` when the `telemetry` feature is disabled or a global
/// subscriber is already set.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_directives(DEFAULT_TRACING_DIRECTIVES)
}

/// Same as [`init_default_tracing`] with caller-supplied fallback directives,
/// e.g. `"gauge_rs=trace"` to see every layout pass and frame build.
#[must_use]
pub fn init_tracing_with_directives(fallback_directives: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback_directives));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_directives;
        false
    }
}
