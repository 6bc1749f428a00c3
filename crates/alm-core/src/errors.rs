//! Error types for the almanac workspace.
//!
//! The navigation and holiday layers never surface errors to their callers;
//! they absorb failed date arithmetic as "retain previous state" or "omit
//! this occurrence".  The `Result` type here therefore only crosses the
//! boundary between `alm-time` and the layers built on top of it.

use thiserror::Error;

/// The top-level error type used throughout the almanac workspace.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// General runtime error.
    #[error("{0}")]
    Runtime(String),

    /// A constructor or setter was given an out-of-range argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Date construction or arithmetic could not produce a valid result.
    #[error("date error: {0}")]
    Date(String),
}

/// Shorthand `Result` type used throughout the almanac workspace.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Validate an argument, returning `Err(Error::InvalidArgument(...))` if
/// `$cond` is false.
///
/// # Example
/// ```
/// use alm_core::ensure;
/// fn day_count(n: u8) -> alm_core::Result<u8> {
///     ensure!((1..=9).contains(&n), "day count {n} out of range [1, 9]");
///     Ok(n)
/// }
/// assert!(day_count(3).is_ok());
/// assert!(day_count(10).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidArgument(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use alm_core::fail;
/// fn always_err() -> alm_core::Result<()> {
///     fail!("unsupported operation");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}
