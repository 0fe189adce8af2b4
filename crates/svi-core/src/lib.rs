//! # svi-core
//!
//! Core types, traits, and error definitions for svinterp.
//!
//! This crate provides the foundational building blocks shared by the
//! interpolation crates – type aliases, the [`Sample`] trait for interpolable
//! values, the error hierarchy, and optional `tracing` diagnostics.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

/// Subscriber setup and the `trace_warn!` / `trace_debug!` macros.
pub mod logging;

/// Numeric sample types.
pub mod sample;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used for positions, weights, and accumulation.
pub type Real = f64;

/// Stand-in for a zero interval width in divisions.
pub const NEGLIGIBLE: Real = 1.0e-101;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use sample::Sample;
