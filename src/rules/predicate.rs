use crate::traits::{MessageSource, Rule};
use crate::types::{RuleError, RuleResult};

/// Leaf rule built from a boolean test and a message.
///
/// Created by [`assert_that`] or the [`assert_that!`](crate::assert_that!) macro.
#[must_use = "rules do nothing until checked"]
#[derive(Debug, Clone, Copy)]
pub struct That<M> {
    passed: bool,
    message: M,
}

impl<M> That<M> {
    /// Returns the test outcome captured at construction.
    #[inline]
    pub fn passed(&self) -> bool {
        self.passed
    }
}

impl<M> Rule for That<M>
where
    M: MessageSource,
{
    #[inline]
    fn check(&self) -> RuleResult {
        if self.passed {
            return Ok(());
        }
        Err(RuleError::Unmet(self.message.render()))
    }
}

/// Creates a rule that fails with `message` unless `test` is true.
///
/// The message is only rendered when the rule fails. Plain strings pass
/// through unchanged, so `"100%"` stays `"100%"`. For format arguments use
/// [`assert_that!`](crate::assert_that!) or a [`LazyMessage`](crate::LazyMessage).
///
/// # Examples
///
/// ```
/// use rule_rail::{assert_that, traits::Rule};
///
/// assert!(assert_that(2 + 2 == 4, "two plus two should equal four").check().is_ok());
///
/// let err = assert_that(2 + 2 == 5, "coverage must be 100%").check().unwrap_err();
/// assert_eq!(err.to_string(), "coverage must be 100%");
/// ```
#[inline]
pub fn assert_that<M>(test: bool, message: M) -> That<M>
where
    M: MessageSource,
{
    That { passed: test, message }
}
