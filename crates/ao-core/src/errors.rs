//! Error types for ameropt.
//!
//! A single `thiserror`-derived enum covers contract construction failures
//! and pricer misuse. Conditions the pricers recover from locally (unstable
//! explicit steps, underdetermined regressions, degenerate theta) are not
//! errors and never reach this type.

use thiserror::Error;

/// The top-level error type used throughout ameropt.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// General runtime error.
    #[error("{0}")]
    Runtime(String),

    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Option kind name is neither call nor put.
    #[error("option type must be either 'call' or 'put', got '{0}'")]
    InvalidOptionType(String),

    /// Exercise style name is neither american nor european.
    #[error("exercise style must be either 'american' or 'european', got '{0}'")]
    InvalidExerciseType(String),

    /// A contract field that must be non-negative is negative.
    #[error("{name} must be non-negative, got {value}")]
    NegativeParameter {
        /// Field name.
        name: &'static str,
        /// Offending value.
        value: f64,
    },

    /// Time to maturity is exactly zero.
    #[error("time to maturity must be greater than 0")]
    ZeroMaturity,

    /// A contract field is NaN or infinite.
    #[error("{name} must be finite, got {value}")]
    NonFinite {
        /// Field name.
        name: &'static str,
        /// Offending value.
        value: f64,
    },

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// Whether this error was raised while constructing an option contract.
    pub fn is_construction_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidOptionType(_)
                | Error::InvalidExerciseType(_)
                | Error::NegativeParameter { .. }
                | Error::ZeroMaturity
                | Error::NonFinite { .. }
        )
    }
}

/// Shorthand `Result` type used throughout ameropt.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use ao_core::{ensure, errors::Error};
/// fn positive(x: f64) -> ao_core::errors::Result<f64> {
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

/// Returns `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use ao_core::{fail, errors::Error};
/// fn always_err() -> ao_core::errors::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}
