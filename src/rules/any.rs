use crate::traits::Rule;
use crate::types::{RuleResult, RuleVec};

/// First-failure combinator.
///
/// Checks children in order and stops at the first failure, returning that
/// child's error unchanged. Later children are not run.
#[must_use = "rules do nothing until checked"]
#[derive(Debug, Clone)]
pub struct Any<R> {
    rules: RuleVec<R>,
}

impl<R> Any<R> {
    #[inline]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<R> Rule for Any<R>
where
    R: Rule,
{
    fn check(&self) -> RuleResult {
        for (_index, rule) in self.rules.iter().enumerate() {
            if let Err(error) = rule.check() {
                #[cfg(feature = "tracing")]
                tracing::trace!(index = _index, total = self.rules.len(), "first-failure rule stopped");
                return Err(error);
            }
        }
        Ok(())
    }
}

/// Creates a rule that fails with the first failing child's error.
///
/// An empty list, or one where every child passes, yields a passing rule.
/// All children must share a type; [`assert_any!`](crate::assert_any!)
/// boxes heterogeneous rules.
///
/// # Examples
///
/// ```
/// use rule_rail::{assert_any, assert_that, traits::Rule, That};
///
/// let none: Vec<That<&str>> = Vec::new();
/// assert!(assert_any(none).check().is_ok());
///
/// let err = assert_any([
///     assert_that(2 + 2 == 5, "two plus two should not equal five"),
///     assert_that(false, "never reached"),
/// ])
/// .check()
/// .unwrap_err();
/// assert_eq!(err.to_string(), "two plus two should not equal five");
/// ```
#[inline]
pub fn assert_any<I>(rules: I) -> Any<I::Item>
where
    I: IntoIterator,
    I::Item: Rule,
{
    Any { rules: rules.into_iter().collect() }
}
