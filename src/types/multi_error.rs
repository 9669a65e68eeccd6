use alloc::string::String;
use core::fmt::{self, Display};

use crate::types::report_format::{ReportFormat, ReportFormatter};
use crate::types::{ErrorVec, RuleError};

/// Ordered collection of the failures an accumulate-all rule observed.
///
/// Errors keep the order in which their rules were supplied. Displaying the
/// aggregate prints [`MultiError::HEADER`] followed by one failure per line;
/// the alternate form (`{:#}`) renders an indented bullet list instead.
///
/// # Examples
///
/// ```
/// use rule_rail::{MultiError, RuleError};
///
/// let multi = MultiError::new([RuleError::unmet("too short"), RuleError::unmet("no digit")]);
/// assert_eq!(multi.len(), 2);
/// assert_eq!(multi.to_string(), "multiple errors:\ntoo short\nno digit");
/// assert_eq!(format!("{:#}", multi), "multiple errors:\n  - too short\n  - no digit");
/// ```
#[derive(Debug, Default)]
pub struct MultiError {
    errors: ErrorVec<RuleError>,
}

impl MultiError {
    /// Introductory line of every aggregate report.
    pub const HEADER: &'static str = "multiple errors:";

    /// Collects errors into an aggregate, preserving iteration order.
    #[inline]
    pub fn new<I>(errors: I) -> Self
    where
        I: IntoIterator<Item = RuleError>,
    {
        Self { errors: errors.into_iter().collect() }
    }

    /// Appends a failure.
    #[inline]
    pub fn push(&mut self, error: RuleError) {
        self.errors.push(error);
    }

    /// Returns the failures as a slice.
    #[inline]
    pub fn errors(&self) -> &[RuleError] {
        &self.errors
    }

    /// Returns an iterator over the failures.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, RuleError> {
        self.errors.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Consumes the aggregate and returns the underlying storage.
    #[inline]
    pub fn into_errors(self) -> ErrorVec<RuleError> {
        self.errors
    }

    /// Renders the aggregate with a custom formatter.
    ///
    /// # Examples
    ///
    /// ```
    /// use rule_rail::{MultiError, ReportFormat, RuleError};
    ///
    /// let multi = MultiError::new([RuleError::unmet("a"), RuleError::unmet("b")]);
    /// let compact = ReportFormat { separator: " | ".into(), ..ReportFormat::default() };
    /// assert_eq!(multi.format_with(&compact), "multiple errors: | a | b");
    /// ```
    #[must_use]
    pub fn format_with<F>(&self, formatter: &F) -> String
    where
        F: ReportFormatter + ?Sized,
    {
        formatter.format_multi(self)
    }
}

impl Display for MultiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = if f.alternate() {
            self.format_with(&ReportFormat::pretty())
        } else {
            self.format_with(&ReportFormat::default())
        };
        f.write_str(&rendered)
    }
}

impl core::error::Error for MultiError {}

impl From<ErrorVec<RuleError>> for MultiError {
    #[inline]
    fn from(errors: ErrorVec<RuleError>) -> Self {
        Self { errors }
    }
}

impl FromIterator<RuleError> for MultiError {
    fn from_iter<I: IntoIterator<Item = RuleError>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl Extend<RuleError> for MultiError {
    fn extend<I: IntoIterator<Item = RuleError>>(&mut self, iter: I) {
        self.errors.extend(iter);
    }
}

impl IntoIterator for MultiError {
    type Item = RuleError;
    type IntoIter = smallvec::IntoIter<[RuleError; 2]>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a MultiError {
    type Item = &'a RuleError;
    type IntoIter = core::slice::Iter<'a, RuleError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}
