//! Core traits for building and inspecting rules.
//!
//! - [`Rule`]: a deferred check, implemented by closures and every combinator
//! - [`MessageSource`]: produces a predicate's failure text on demand
//! - [`ErrorChainExt`]: finds the validation sentinel anywhere in an error chain
//!
//! # Examples
//!
//! ```
//! use rule_rail::traits::{ErrorChainExt, Rule};
//! use rule_rail::{assert_that, validate};
//!
//! let rule = assert_that(1 > 2, "one is not greater than two");
//! assert!(rule.check().is_err());
//! assert!(validate(&rule).unwrap_err().is_validation_failure());
//! ```

pub mod error_chain;
pub mod message_source;
pub mod rule;

pub use error_chain::ErrorChainExt;
pub use message_source::MessageSource;
pub use rule::{BoxedRule, Rule};
