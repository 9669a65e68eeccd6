use crate::traits::Rule;
use crate::types::RuleResult;

/// Runs the inner rule only when the guard holds.
///
/// Created by [`assert_if`].
#[must_use = "rules do nothing until checked"]
#[derive(Debug, Clone, Copy)]
pub struct If<R> {
    guard: bool,
    rule: R,
}

impl<R> Rule for If<R>
where
    R: Rule,
{
    #[inline]
    fn check(&self) -> RuleResult {
        if self.guard {
            self.rule.check()
        } else {
            Ok(())
        }
    }
}

/// Creates a rule that checks `rule` only if `guard` is true.
///
/// A false guard yields a rule that always passes; `rule` is never run.
///
/// # Examples
///
/// ```
/// use rule_rail::{assert_if, assert_that, traits::Rule};
///
/// let skipped = assert_if(false, assert_that(false, "this will never run"));
/// assert!(skipped.check().is_ok());
///
/// let applied = assert_if(true, assert_that(false, "this will run"));
/// assert!(applied.check().is_err());
/// ```
#[inline]
pub fn assert_if<R>(guard: bool, rule: R) -> If<R>
where
    R: Rule,
{
    If { guard, rule }
}

/// Like [`If`], with a guard computed when the rule is checked.
///
/// Created by [`assert_if_with`].
#[must_use = "rules do nothing until checked"]
#[derive(Debug, Clone, Copy)]
pub struct IfWith<G, R> {
    guard: G,
    rule: R,
}

impl<G, R> Rule for IfWith<G, R>
where
    G: Fn() -> bool,
    R: Rule,
{
    #[inline]
    fn check(&self) -> RuleResult {
        if (self.guard)() {
            self.rule.check()
        } else {
            Ok(())
        }
    }
}

/// Creates a rule whose guard is evaluated once per check, right before
/// deciding whether to run `rule`.
///
/// # Examples
///
/// ```
/// use std::sync::atomic::{AtomicBool, Ordering};
/// use std::sync::Arc;
///
/// use rule_rail::{assert_if_with, assert_that, traits::Rule};
///
/// let strict = Arc::new(AtomicBool::new(false));
/// let flag = Arc::clone(&strict);
/// let rule = assert_if_with(move || flag.load(Ordering::SeqCst), assert_that(false, "strict mode"));
///
/// assert!(rule.check().is_ok());
/// strict.store(true, Ordering::SeqCst);
/// assert!(rule.check().is_err());
/// ```
#[inline]
pub fn assert_if_with<G, R>(guard: G, rule: R) -> IfWith<G, R>
where
    G: Fn() -> bool,
    R: Rule,
{
    IfWith { guard, rule }
}
