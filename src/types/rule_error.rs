//! Raw failures produced by rules before evaluation wraps them.
use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt::{self, Display};

use crate::types::MultiError;

/// The failure a [`Rule`](crate::traits::Rule) yields when its condition does not hold.
///
/// Combinators pass these through untouched; only [`validate`](crate::validate)
/// wraps one into a [`ValidationError`](crate::ValidationError).
///
/// # Examples
///
/// ```
/// use rule_rail::{assert_that, traits::Rule, RuleError};
///
/// let err = assert_that(false, "name is required").check().unwrap_err();
/// assert!(matches!(err, RuleError::Unmet(_)));
/// assert_eq!(err.to_string(), "name is required");
/// ```
#[derive(Debug)]
pub enum RuleError {
    /// A predicate's test was false.
    Unmet(Cow<'static, str>),
    /// One or more sub-rules of an accumulate-all rule failed.
    Multiple(Box<MultiError>),
    /// An error produced by a hand-written rule.
    Other(Box<dyn core::error::Error + Send + Sync + 'static>),
}

impl RuleError {
    /// Creates a leaf failure from a message.
    #[inline]
    pub fn unmet<S>(message: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        Self::Unmet(message.into())
    }

    /// Creates an aggregate failure.
    #[inline]
    pub fn multiple(errors: MultiError) -> Self {
        Self::Multiple(Box::new(errors))
    }

    /// Wraps an arbitrary error so a custom rule can report it.
    ///
    /// # Examples
    ///
    /// ```
    /// use rule_rail::RuleError;
    ///
    /// let parse = "abc".parse::<u8>().unwrap_err();
    /// let err = RuleError::other(parse);
    /// assert_eq!(err.to_string(), "invalid digit found in string");
    /// ```
    #[inline]
    pub fn other<E>(error: E) -> Self
    where
        E: core::error::Error + Send + Sync + 'static,
    {
        Self::Other(Box::new(error))
    }

    /// Returns the aggregate, if this is one.
    #[inline]
    pub fn as_multiple(&self) -> Option<&MultiError> {
        match self {
            Self::Multiple(multi) => Some(&**multi),
            _ => None,
        }
    }

    /// Returns `true` for aggregate failures.
    #[inline]
    pub fn is_multiple(&self) -> bool {
        matches!(self, Self::Multiple(_))
    }

    /// Number of leaf failures, descending through nested aggregates.
    ///
    /// # Examples
    ///
    /// ```
    /// use rule_rail::{assert_all, assert_that, traits::Rule};
    ///
    /// let rule = assert_all![
    ///     assert_that(false, "a"),
    ///     assert_all![assert_that(false, "b"), assert_that(false, "c")],
    /// ];
    /// assert_eq!(rule.check().unwrap_err().count(), 3);
    /// ```
    pub fn count(&self) -> usize {
        match self {
            Self::Multiple(multi) => multi.iter().map(RuleError::count).sum(),
            _ => 1,
        }
    }

    /// Flattens the failure tree into its leaf messages, in evaluation order.
    pub fn leaf_messages(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(self.count());
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves(&self, out: &mut Vec<String>) {
        match self {
            Self::Unmet(message) => out.push(message.to_string()),
            Self::Multiple(multi) => multi.iter().for_each(|err| err.collect_leaves(out)),
            Self::Other(error) => out.push(error.to_string()),
        }
    }
}

impl Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unmet(message) => f.write_str(message),
            Self::Multiple(multi) => Display::fmt(multi, f),
            Self::Other(error) => Display::fmt(error, f),
        }
    }
}

impl core::error::Error for RuleError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Other(error) => Some(&**error),
            _ => None,
        }
    }
}

impl From<MultiError> for RuleError {
    #[inline]
    fn from(errors: MultiError) -> Self {
        Self::multiple(errors)
    }
}

impl From<&'static str> for RuleError {
    #[inline]
    fn from(message: &'static str) -> Self {
        Self::unmet(message)
    }
}

impl From<String> for RuleError {
    #[inline]
    fn from(message: String) -> Self {
        Self::unmet(message)
    }
}
