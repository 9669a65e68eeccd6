use crate::traits::Rule;
use crate::types::{ValidationError, ValidationResult};

/// Checks `rule` once and marks any failure as a validation error.
///
/// Apply this at the top of a rule tree only. Combinators return raw
/// [`RuleError`](crate::RuleError)s; `validate` is the single place the
/// [`ErrorKind::Invalid`](crate::ErrorKind::Invalid) sentinel is added.
///
/// # Examples
///
/// ```
/// use rule_rail::{assert_all, assert_any, assert_if, assert_that, traits::ErrorChainExt, validate};
///
/// let err = validate(&assert_all![
///     assert_that(2 + 2 == 4, "sum ok"),
///     assert_that(3 + 3 == 7, "bad sum"),
/// ])
/// .unwrap_err();
/// assert!(err.to_string().contains("bad sum"));
/// assert!(err.is_validation_failure());
///
/// assert!(validate(&assert_if(false, assert_that(false, "never"))).is_ok());
/// assert!(validate(&assert_any![assert_that(true, "x"), assert_that(true, "y")]).is_ok());
/// ```
pub fn validate<R>(rule: &R) -> ValidationResult
where
    R: Rule + ?Sized,
{
    rule.check().map_err(|source| {
        let error = ValidationError::new(source);
        #[cfg(feature = "tracing")]
        tracing::debug!(failures = error.rule_error().count(), error = %error, "validation failed");
        error
    })
}
