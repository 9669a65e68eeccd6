use crate::traits::Rule;
use crate::types::{ErrorVec, MultiError, RuleError, RuleResult, RuleVec};

/// Accumulate-all combinator.
///
/// Checks every child exactly once, in order, whatever the earlier outcomes,
/// and reports all failures together as a [`MultiError`].
#[must_use = "rules do nothing until checked"]
#[derive(Debug, Clone)]
pub struct All<R> {
    rules: RuleVec<R>,
}

impl<R> All<R> {
    #[inline]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<R> Rule for All<R>
where
    R: Rule,
{
    fn check(&self) -> RuleResult {
        let failures: ErrorVec<RuleError> =
            self.rules.iter().filter_map(|rule| rule.check().err()).collect();

        if failures.is_empty() {
            return Ok(());
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(failed = failures.len(), total = self.rules.len(), "accumulate-all rule failed");

        Err(RuleError::multiple(MultiError::from(failures)))
    }
}

/// Creates a rule that checks every child and fails if any of them failed.
///
/// The error is a [`RuleError::Multiple`] listing each failure in input
/// order, even when only one child failed.
///
/// # Examples
///
/// ```
/// use rule_rail::{assert_all, assert_that, traits::Rule};
///
/// let err = assert_all([
///     assert_that(2 + 2 == 5, "two plus two should not equal five"),
///     assert_that(3 + 3 == 6, "three plus three should equal six"),
///     assert_that(1 + 1 == 3, "one plus one should not equal three"),
/// ])
/// .check()
/// .unwrap_err();
///
/// assert_eq!(
///     err.to_string(),
///     "multiple errors:\ntwo plus two should not equal five\none plus one should not equal three"
/// );
/// ```
#[inline]
pub fn assert_all<I>(rules: I) -> All<I::Item>
where
    I: IntoIterator,
    I::Item: Rule,
{
    All { rules: rules.into_iter().collect() }
}
