//! # ao-core
//!
//! Core types and error definitions for ameropt.
//!
//! This crate provides the foundational building blocks shared across all
//! other crates in the workspace – scalar type aliases, the error enum, and
//! the `ensure!` / `fail!` macros.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the library.
pub type Real = f64;

/// Alias used for array sizes / indices.
pub type Size = usize;

/// A continuously-compounded rate expressed as a decimal (e.g. 0.05 = 5 %).
pub type Rate = Real;

/// A discount factor in [0, 1].
pub type DiscountFactor = Real;

/// A price or value.
pub type Price = Real;

/// A volatility level expressed as a decimal.
pub type Volatility = Real;

/// A time measurement in years.
pub type Time = Real;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
