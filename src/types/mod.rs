//! Error types and rule storage.
//!
//! Failures move through three shapes:
//!
//! - [`RuleError`] - what a rule yields; a leaf message, an aggregate, or a caller error
//! - [`MultiError`] - the ordered aggregate built by [`assert_all`](crate::assert_all)
//! - [`ValidationError`] - the sentinel-marked wrapper returned by [`validate`](crate::validate)
//!
//! # Examples
//!
//! ```
//! use rule_rail::{assert_all, assert_that, validate, RuleError};
//!
//! let err = validate(&assert_all![
//!     assert_that(2 + 2 == 4, "sum ok"),
//!     assert_that(3 + 3 == 7, "bad sum"),
//! ])
//! .unwrap_err();
//!
//! println!("{:#}", err);
//! // Output:
//! // validation error: multiple errors:
//! //   - bad sum
//! match err.rule_error() {
//!     RuleError::Multiple(multi) => assert_eq!(multi.len(), 1),
//!     other => panic!("unexpected {other:?}"),
//! }
//! ```
use smallvec::SmallVec;

pub mod lazy_message;
pub mod multi_error;
pub mod report_format;
pub mod rule_error;
pub mod validation_error;

pub use lazy_message::*;
pub use multi_error::*;
pub use report_format::*;
pub use rule_error::*;
pub use validation_error::*;

/// SmallVec-backed collection used for accumulating failures.
///
/// Uses inline storage for up to 2 elements to avoid heap allocations
/// when only a couple of sub-rules fail.
pub type ErrorVec<E> = SmallVec<[E; 2]>;

/// SmallVec-backed storage for the children of a combinator.
///
/// Most rule lists are short; up to 4 children stay inline.
pub type RuleVec<R> = SmallVec<[R; 4]>;

/// Outcome of checking a single rule.
pub type RuleResult = Result<(), RuleError>;

/// Outcome of [`validate`](crate::validate).
pub type ValidationResult = Result<(), ValidationError>;
