//! Declarative validation rules that compose and evaluate into a single error.
//!
//! A rule is a deferred check. Build a tree of rules with the constructors,
//! then run it once with [`validate`]; any failure comes back as a
//! [`ValidationError`] carrying the [`ErrorKind::Invalid`] sentinel.
//!
//! # Examples
//!
//! ## Single Predicate
//!
//! ```
//! use rule_rail::{assert_that, validate, traits::ErrorChainExt};
//!
//! let err = validate(&assert_that(2 + 2 == 5, "two plus two should equal four")).unwrap_err();
//!
//! assert_eq!(err.to_string(), "validation error: two plus two should equal four");
//! assert!(err.is_validation_failure());
//! ```
//!
//! ## First Failure vs. All Failures
//!
//! ```
//! use rule_rail::{assert_all, assert_any, assert_that, validate};
//!
//! let first = validate(&assert_any![
//!     assert_that(false, "must be false"),
//!     assert_that(false, "not reached"),
//! ])
//! .unwrap_err();
//! assert_eq!(first.to_string(), "validation error: must be false");
//!
//! let all = validate(&assert_all![
//!     assert_that(true, "must be true"),
//!     assert_that(false, "must be false"),
//! ])
//! .unwrap_err();
//! assert_eq!(all.to_string(), "validation error: multiple errors:\nmust be false");
//! ```
//!
//! ## Conditional Rules
//!
//! ```
//! use rule_rail::{assert_if, assert_that, validate};
//!
//! let has_discount = false;
//! let code = "";
//!
//! assert!(validate(&assert_if(has_discount, assert_that(!code.is_empty(), "code required"))).is_ok());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Rule-building macros
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Rule constructors, combinators and the evaluator
pub mod rules;
/// Core traits: `Rule`, `MessageSource`, `ErrorChainExt`
pub mod traits;
/// Error types and aliases
pub mod types;

pub use rules::*;
pub use types::{
    ErrorKind, ErrorVec, LazyMessage, MultiError, ReportFormat, RuleError, RuleResult, RuleVec,
    ValidationError, ValidationReport, ValidationResult,
};

#[doc(hidden)]
pub mod __private {
    pub use alloc::format;
}
