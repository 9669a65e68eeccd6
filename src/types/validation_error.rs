//! The error returned by [`validate`](crate::validate).
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt::{self, Display};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::report_format::ReportFormatter;
use crate::types::RuleError;

/// Category marker carried by every [`ValidationError`].
///
/// `ErrorKind::Invalid` is the single shared sentinel: any error surfaced by
/// [`validate`](crate::validate) carries it, and
/// [`ErrorChainExt`](crate::traits::ErrorChainExt) finds it anywhere in a
/// chain.
#[non_exhaustive]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Invalid,
}

impl ErrorKind {
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Invalid => "validation error",
        }
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rule failure marked with the validation sentinel.
///
/// Displays as `validation error: ` followed by the underlying failure. The
/// original [`RuleError`] stays reachable through [`source`](core::error::Error::source),
/// [`rule_error`](Self::rule_error) and [`into_inner`](Self::into_inner).
///
/// # Examples
///
/// ```
/// use rule_rail::{assert_that, validate, ErrorKind, RuleError};
///
/// let err = validate(&assert_that(2 + 2 == 5, "two plus two is four")).unwrap_err();
///
/// assert_eq!(err.kind(), ErrorKind::Invalid);
/// assert_eq!(err.to_string(), "validation error: two plus two is four");
/// assert!(matches!(err.into_inner(), RuleError::Unmet(_)));
/// ```
#[must_use]
#[derive(Debug)]
pub struct ValidationError {
    kind: ErrorKind,
    source: RuleError,
}

impl ValidationError {
    #[inline]
    pub(crate) fn new(source: RuleError) -> Self {
        Self { kind: ErrorKind::Invalid, source }
    }

    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the failure the rule tree produced.
    #[inline]
    pub fn rule_error(&self) -> &RuleError {
        &self.source
    }

    /// Consumes the wrapper, returning the unwrapped failure.
    #[inline]
    pub fn into_inner(self) -> RuleError {
        self.source
    }

    /// Leaf messages of every failing predicate, in evaluation order.
    ///
    /// # Examples
    ///
    /// ```
    /// use rule_rail::{assert_all, assert_that, validate};
    ///
    /// let err = validate(&assert_all![
    ///     assert_that(false, "first"),
    ///     assert_that(true, "skipped"),
    ///     assert_that(false, "second"),
    /// ])
    /// .unwrap_err();
    ///
    /// assert_eq!(err.messages(), vec!["first", "second"]);
    /// ```
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.source.leaf_messages()
    }

    /// Renders the error, laying out aggregates with `formatter`.
    #[must_use]
    pub fn format_with<F>(&self, formatter: &F) -> String
    where
        F: ReportFormatter + ?Sized,
    {
        let mut out = String::from(self.kind.as_str());
        out.push_str(": ");
        match self.source.as_multiple() {
            Some(multi) => out.push_str(&formatter.format_multi(multi)),
            None => out.push_str(&self.source.to_string()),
        }
        out
    }

    /// Builds a flat, serializable summary of the failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use rule_rail::{assert_that, validate, ErrorKind};
    ///
    /// let report = validate(&assert_that(false, "missing id")).unwrap_err().report();
    /// assert_eq!(report.kind, ErrorKind::Invalid);
    /// assert_eq!(report.failures, vec!["missing id"]);
    /// ```
    pub fn report(&self) -> ValidationReport {
        ValidationReport { kind: self.kind, message: self.to_string(), failures: self.messages() }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.kind)?;
        Display::fmt(&self.source, f)
    }
}

impl core::error::Error for ValidationError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Flat summary of a [`ValidationError`], suitable for logs and API payloads.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub kind: ErrorKind,
    pub message: String,
    pub failures: Vec<String>,
}
