//! Trait for values that can produce a predicate's failure message.
//!
//! # Implementations
//!
//! - `&'static str` and `Cow<'static, str>` - rendered without allocating when borrowed
//! - `String` - cloned on each failure
//! - [`LazyMessage`](crate::LazyMessage) - generated by a closure on each failure
//!
//! # Examples
//!
//! ```
//! use rule_rail::{traits::MessageSource, LazyMessage};
//!
//! assert_eq!("static".render(), "static");
//! assert_eq!(String::from("owned").render(), "owned");
//! assert_eq!(LazyMessage::new(|| format!("{}%", 50)).render(), "50%");
//! ```
use alloc::borrow::Cow;
use alloc::string::String;

/// Produces the text of a failed predicate.
///
/// `render` takes `&self` because a rule may fail many times; each failure
/// renders the message anew.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as a rule message",
    label = "this type does not implement `MessageSource`",
    note = "pass a string, or wrap a closure in `LazyMessage::new`"
)]
pub trait MessageSource {
    fn render(&self) -> Cow<'static, str>;
}

impl MessageSource for &'static str {
    #[inline]
    fn render(&self) -> Cow<'static, str> {
        Cow::Borrowed(self)
    }
}

impl MessageSource for String {
    #[inline]
    fn render(&self) -> Cow<'static, str> {
        Cow::Owned(self.clone())
    }
}

impl MessageSource for Cow<'static, str> {
    #[inline]
    fn render(&self) -> Cow<'static, str> {
        self.clone()
    }
}
