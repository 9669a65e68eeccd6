//! Deferred message rendering for predicate rules.
//!
//! A [`LazyMessage`] holds a closure that produces the failure text. The rule
//! captures its format arguments when it is built, and the string is only
//! produced when the rule actually fails.
//!
//! # Examples
//!
//! ```
//! use rule_rail::{assert_that, validate, LazyMessage};
//!
//! let limit = 10;
//! let rule = assert_that(12 <= limit, LazyMessage::new(move || format!("must not exceed {}", limit)));
//!
//! let err = validate(&rule).unwrap_err();
//! assert_eq!(err.to_string(), "validation error: must not exceed 10");
//! ```
use alloc::borrow::Cow;
use alloc::string::String;
use core::fmt;

use crate::traits::MessageSource;

/// A message whose text is generated on demand.
///
/// The generator is `Fn`, not `FnOnce`: a rule can be checked any number of
/// times and renders a fresh message on each failure.
///
/// # Type Parameters
///
/// * `F` - A closure type that implements `Fn() -> String`.
#[repr(transparent)]
#[derive(Clone, Copy)]
pub struct LazyMessage<F> {
    generator: F,
}

impl<F> LazyMessage<F> {
    /// Wraps a generator closure.
    ///
    /// # Examples
    ///
    /// ```
    /// use rule_rail::{traits::MessageSource, LazyMessage};
    ///
    /// let msg = LazyMessage::new(|| format!("id {}", 7));
    /// assert_eq!(msg.render(), "id 7");
    /// ```
    #[inline]
    pub fn new(generator: F) -> Self {
        Self { generator }
    }
}

impl<F> MessageSource for LazyMessage<F>
where
    F: Fn() -> String,
{
    #[inline]
    fn render(&self) -> Cow<'static, str> {
        Cow::Owned((self.generator)())
    }
}

impl<F> fmt::Debug for LazyMessage<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyMessage").finish_non_exhaustive()
    }
}
