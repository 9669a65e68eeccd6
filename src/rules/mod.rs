//! Rule constructors, combinators and the evaluator.
//!
//! Building a rule tree runs nothing. [`validate`] checks the tree once and
//! wraps any failure in a [`ValidationError`](crate::ValidationError).
//!
//! | Constructor | Semantics |
//! |-------------|-----------|
//! | [`assert_that`] | passes iff the test is true |
//! | [`assert_if`] / [`assert_if_with`] | runs the inner rule only when the guard holds |
//! | [`assert_any`] | stops at the first failure and returns it unchanged |
//! | [`assert_all`] | runs every rule, reports all failures in order |
//!
//! # Examples
//!
//! ```
//! use rule_rail::{assert_all, assert_if, assert_that, validate};
//!
//! let name = "";
//! let age = 17;
//! let invited = false;
//!
//! let err = validate(&assert_all![
//!     assert_that(!name.is_empty(), "name is required"),
//!     assert_that!(age >= 18, "age must be at least 18, got {}", age),
//!     assert_if(invited, assert_that(false, "invitation code is required")),
//! ])
//! .unwrap_err();
//!
//! assert_eq!(err.messages(), vec!["name is required", "age must be at least 18, got 17"]);
//! ```
pub mod all;
pub mod any;
pub mod conditional;
pub mod evaluate;
pub mod predicate;

pub use self::all::*;
pub use self::any::*;
pub use self::conditional::*;
pub use self::evaluate::*;
pub use self::predicate::*;
