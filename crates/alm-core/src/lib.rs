//! # alm-core
//!
//! Shared error types for the almanac workspace.
//!
//! Every fallible operation in the workspace bottoms out in date
//! construction or date arithmetic, so the error surface is deliberately
//! small: one enum, one `Result` alias, and the `ensure!` / `fail!`
//! validation macros.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

pub use errors::{Error, Result};
