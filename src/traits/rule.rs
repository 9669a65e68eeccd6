//! The [`Rule`] abstraction: a deferred, repeatable check.
use alloc::boxed::Box;
use core::fmt;

use crate::types::RuleResult;

/// A deferred, zero-argument check yielding `Ok(())` or a [`RuleError`](crate::RuleError).
///
/// Building a rule never runs it; [`check`](Self::check) may be called any
/// number of times. Closures returning [`RuleResult`] are rules, so one-off
/// checks need no dedicated type.
///
/// # Examples
///
/// ```
/// use rule_rail::{traits::Rule, RuleError, RuleResult};
///
/// let port = 8080u32;
/// let in_range = move || -> RuleResult {
///     if port <= u16::MAX as u32 {
///         Ok(())
///     } else {
///         Err(RuleError::unmet("port out of range"))
///     }
/// };
///
/// assert!(in_range.check().is_ok());
/// assert!(in_range.check().is_ok());
/// ```
pub trait Rule {
    /// Runs the check.
    fn check(&self) -> RuleResult;

    /// Erases the concrete type so rules of different types can share a list.
    ///
    /// The box keeps any borrows the rule holds, so rules reading from a
    /// `&T` can be mixed as long as the list does not outlive it.
    #[inline]
    fn boxed<'a>(self) -> BoxedRule<'a>
    where
        Self: Sized + Send + Sync + 'a,
    {
        BoxedRule(Box::new(self))
    }
}

impl<F> Rule for F
where
    F: Fn() -> RuleResult,
{
    #[inline]
    fn check(&self) -> RuleResult {
        self()
    }
}

/// Owned, type-erased [`Rule`].
///
/// Produced by [`Rule::boxed`] and by the list macros
/// ([`assert_any!`](crate::assert_any!), [`assert_all!`](crate::assert_all!)).
/// The lifetime bounds whatever the erased rule borrows; rules owning all
/// their data are `BoxedRule<'static>`.
pub struct BoxedRule<'a>(Box<dyn Rule + Send + Sync + 'a>);

impl<'a> BoxedRule<'a> {
    #[inline]
    pub fn new<R>(rule: R) -> Self
    where
        R: Rule + Send + Sync + 'a,
    {
        Self(Box::new(rule))
    }
}

impl Rule for BoxedRule<'_> {
    #[inline]
    fn check(&self) -> RuleResult {
        self.0.check()
    }

    #[inline]
    fn boxed<'a>(self) -> BoxedRule<'a>
    where
        Self: Sized + Send + Sync + 'a,
    {
        BoxedRule(self.0)
    }
}

impl fmt::Debug for BoxedRule<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoxedRule").finish_non_exhaustive()
    }
}
