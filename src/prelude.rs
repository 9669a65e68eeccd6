//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use rule_rail::prelude::*;
//!
//! fn check_port(port: u32) -> ValidationResult {
//!     validate(&assert_all![
//!         assert_that!(port > 0, "port must be positive, got {}", port),
//!         assert_that!(port <= 65535, "port {} is out of range", port),
//!     ])
//! }
//!
//! assert!(check_port(8080).is_ok());
//! assert!(check_port(70000).unwrap_err().is_validation_failure());
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`assert_that!`], [`assert_any!`], [`assert_all!`]
//! - **Constructors**: [`assert_that`], [`assert_if`], [`assert_if_with`], [`assert_any`], [`assert_all`], [`validate`]
//! - **Types**: [`ValidationError`], [`RuleError`], [`ErrorKind`], [`RuleResult`], [`ValidationResult`]
//! - **Traits**: [`Rule`], [`ErrorChainExt`]

// Macros and constructors share names; each `use` brings in both.
pub use crate::{assert_all, assert_any, assert_if, assert_if_with, assert_that, validate};

pub use crate::types::{ErrorKind, RuleError, RuleResult, ValidationError, ValidationResult};

pub use crate::traits::{ErrorChainExt, Rule};
