//! Error types for rapor-core.
//!
//! [`RaporError`] is the single error type returned by every clustering
//! operation. It separates the failure classes the calling HTTP layer needs
//! to tell apart:
//!
//! - [`RaporError::Validation`]: bad request parameters (k, max_k, algorithm, period)
//! - [`RaporError::InsufficientData`]: not enough students for the requested k
//! - [`RaporError::Computation`]: numeric failure inside the algorithm
//! - [`RaporError::Persistence`]: a collaborator (grade store / result store) failed
//! - [`RaporError::Config`]: configuration could not be loaded or is invalid
//!
//! # Policy
//!
//! - `thiserror` for the error type
//! - Never panic in library code; return `Result`
//! - No automatic retries anywhere in the pipeline
//!
//! # Examples
//!
//! ```rust
//! use rapor_core::error::{RaporError, RaporResult};
//!
//! fn check_k(k: usize) -> RaporResult<usize> {
//!     if k == 0 {
//!         return Err(RaporError::validation("k must be >= 1"));
//!     }
//!     Ok(k)
//! }
//!
//! assert!(matches!(check_k(0), Err(RaporError::Validation(_))));
//! ```

mod unified;


pub use unified::{RaporError, RaporResult};
