//! Error types for svinterp.
//!
//! Every configuration failure, numeric instability, and unbound query is
//! reported through the single `thiserror`-derived [`Error`] enum. Failed
//! preconditions are usually raised with the [`ensure!`](crate::ensure) macro.

use thiserror::Error;

/// The top-level error type used throughout svinterp.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// General runtime error.
    #[error("{0}")]
    Runtime(String),

    /// Precondition violated (malformed input or configuration).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Checked element access past the end of a container.
    #[error("index ({index}) out of range [0, {size})")]
    IndexOutOfRange {
        /// The index that was out of range.
        index: usize,
        /// The size of the container.
        size: usize,
    },

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A query was issued before the required data or source was set.
    #[error("not configured: {0}")]
    NotConfigured(String),

    /// A zero pivot (or equivalent breakdown) was met during a solve.
    #[error("numerical instability: {0}")]
    NumericalInstability(String),
}

/// Shorthand `Result` type used throughout svinterp.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use svi_core::{ensure, errors::Error};
/// fn positive(x: f64) -> svi_core::errors::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(positive(-1.0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}
