//! Optional diagnostics.
//!
//! With the `tracing` feature enabled the interpolators report kernel and
//! coefficient rebuilds at `debug` level and rejected configurations at
//! `warn` level.  Without it the logging macros expand to nothing but still
//! type-check their format arguments.

use crate::errors::Result;

/// Install a global `tracing` subscriber honouring `RUST_LOG`.
///
/// Falls back to `info` when `RUST_LOG` is unset.
#[cfg(feature = "tracing")]
pub fn init_tracing() -> Result<()> {
    init_filter(
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
    )
}

/// Install a global subscriber at a fixed level (`"warn"`, `"debug"`, ...).
///
/// A no-op returning `Ok(())` when the `tracing` feature is disabled.
pub fn init_with_level(level: &str) -> Result<()> {
    #[cfg(feature = "tracing")]
    {
        let filter = tracing_subscriber::EnvFilter::try_new(level)
            .map_err(|e| crate::errors::Error::InvalidArgument(e.to_string()))?;
        init_filter(filter)
    }
    #[cfg(not(feature = "tracing"))]
    {
        let _ = level;
        Ok(())
    }
}

#[cfg(feature = "tracing")]
fn init_filter(filter: tracing_subscriber::EnvFilter) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| crate::errors::Error::Runtime(e.to_string()))
}

#[doc(hidden)]
pub mod __private {
    #[cfg(feature = "tracing")]
    pub use tracing;
}

/// Emit a `warn`-level event (no-op without the `tracing` feature).
#[cfg(feature = "tracing")]
#[macro_export]
macro_rules! trace_warn {
    ($($arg:tt)*) => {
        $crate::logging::__private::tracing::warn!($($arg)*)
    };
}

/// Emit a `warn`-level event (no-op without the `tracing` feature).
#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! trace_warn {
    ($($arg:tt)*) => {{
        let _ = ::core::format_args!($($arg)*);
    }};
}

/// Emit a `debug`-level event (no-op without the `tracing` feature).
#[cfg(feature = "tracing")]
#[macro_export]
macro_rules! trace_debug {
    ($($arg:tt)*) => {
        $crate::logging::__private::tracing::debug!($($arg)*)
    };
}

/// Emit a `debug`-level event (no-op without the `tracing` feature).
#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! trace_debug {
    ($($arg:tt)*) => {{
        let _ = ::core::format_args!($($arg)*);
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn macros_accept_format_arguments() {
        let n = 4;
        crate::trace_debug!("rebuilt kernel with {n} intervals");
        crate::trace_warn!("rejected {} samples", 17);
    }

    #[cfg(not(feature = "tracing"))]
    #[test]
    fn init_without_feature_is_noop() {
        assert!(init_with_level("debug").is_ok());
    }
}
