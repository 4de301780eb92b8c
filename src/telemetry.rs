//! Opt-in tracing setup for hosts that do not bring their own subscriber.
//!
//! The pipeline emits structured `tracing` events (remap summaries, clip and
//! split counters). Nothing is initialized implicitly; call
//! [`init_default_tracing`] or install a custom subscriber before remapping.

/// Installs a compact stderr subscriber honoring `RUST_LOG`, defaulting to
/// the `info` level. Compiled to a no-op without the `telemetry` feature.
///
/// Returns `false` when the feature is disabled or a global subscriber is
/// already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
