//! Ergonomic macros for building rules.
//!
//! - [`macro@crate::assert_that`] - Evaluates format arguments now and formats the
//!   message only if the rule fails.
//! - [`macro@crate::assert_any`] - Boxes rules of different types into a
//!   first-failure rule.
//! - [`macro@crate::assert_all`] - Boxes rules of different types into an
//!   accumulate-all rule.
//!
//! # Examples
//!
//! ```
//! use rule_rail::{assert_all, assert_any, assert_if, assert_that, validate};
//!
//! let password = "hunter2";
//! let rule = assert_all![
//!     assert_that!(password.len() >= 8, "password has {} characters, need 8", password.len()),
//!     assert_any![
//!         assert_that(password.chars().any(|c| c.is_ascii_digit()), "needs a digit"),
//!         assert_if(password.is_empty(), assert_that(false, "empty")),
//!     ],
//! ];
//!
//! let err = validate(&rule).unwrap_err();
//! assert_eq!(err.messages(), vec!["password has 7 characters, need 8"]);
//! ```

/// Creates a predicate rule with a formatted message.
///
/// Accepts a format string literal and `format!`-style arguments after the
/// test expression. Each argument expression is evaluated exactly once, when
/// the rule is built, and its value is moved into the rule; the string is only
/// formatted when the rule fails. Later changes to whatever an argument read
/// from do not show up in the message. A message without arguments goes
/// through the same path, so `assert_that!(ok, "100%")` renders `100%`.
///
/// Positional (`{}`), named (`name = value`) and inline (`{name}`) arguments
/// are supported, up to 16 explicit arguments per message. Arguments are taken
/// by value, as in a `let` binding: pass `&user.name` to keep a borrow instead
/// of moving the field.
///
/// # Examples
///
/// ```
/// use rule_rail::{assert_that, traits::Rule};
///
/// let retries = 7;
/// let rule = assert_that!(retries <= 5, "retries must be at most {}, got {}", 5, retries);
/// assert_eq!(rule.check().unwrap_err().to_string(), "retries must be at most 5, got 7");
///
/// let mut attempts = vec![1, 2, 3];
/// let rule = assert_that!(attempts.len() < 3, "{count} attempts", count = attempts.len());
/// attempts.clear();
/// assert_eq!(rule.check().unwrap_err().to_string(), "3 attempts");
/// ```
#[macro_export]
macro_rules! assert_that {
    (@capture ($test:expr, $fmt:literal) [$($bind:ident = $value:expr;)*] [$($out:tt)*] [$($pool:ident)*] $(,)?) => {{
        let passed: bool = $test;
        $(let $bind = $value;)*
        $crate::assert_that(
            passed,
            $crate::LazyMessage::new(move || $crate::__private::format!($fmt, $($out)*)),
        )
    }};
    (@capture $head:tt $bind:tt $out:tt [] $($rest:tt)+) => {
        ::core::compile_error!("assert_that! supports at most 16 format arguments")
    };
    (@capture $head:tt [$($bind:tt)*] [$($out:tt)*] [$next:ident $($pool:ident)*] $name:ident = $value:expr $(, $($rest:tt)*)?) => {
        $crate::assert_that!(
            @capture $head [$($bind)* $next = $value;] [$($out)* $name = $next,] [$($pool)*] $($($rest)*)?
        )
    };
    (@capture $head:tt [$($bind:tt)*] [$($out:tt)*] [$next:ident $($pool:ident)*] $value:expr $(, $($rest:tt)*)?) => {
        $crate::assert_that!(
            @capture $head [$($bind)* $next = $value;] [$($out)* $next,] [$($pool)*] $($($rest)*)?
        )
    };
    ($test:expr, $fmt:literal $(,)?) => {
        $crate::assert_that(
            $test,
            $crate::LazyMessage::new(move || $crate::__private::format!($fmt)),
        )
    };
    ($test:expr, $fmt:literal, $($args:tt)+) => {
        $crate::assert_that!(
            @capture ($test, $fmt) [] []
            [arg0 arg1 arg2 arg3 arg4 arg5 arg6 arg7 arg8 arg9 arg10 arg11 arg12 arg13 arg14 arg15]
            $($args)+
        )
    };
}

/// Creates a first-failure rule from rules of any type.
///
/// Each rule is boxed into a [`BoxedRule`](crate::traits::BoxedRule), so
/// closures and combinators can be mixed.
///
/// # Examples
///
/// ```
/// use rule_rail::{assert_any, assert_that, traits::Rule, RuleResult};
///
/// let rule = assert_any![
///     assert_that(true, "ok"),
///     || -> RuleResult { Err("custom check failed".into()) },
/// ];
/// assert_eq!(rule.check().unwrap_err().to_string(), "custom check failed");
///
/// assert!(assert_any![].check().is_ok());
/// ```
#[macro_export]
macro_rules! assert_any {
    () => {
        $crate::assert_any(::core::iter::empty::<$crate::traits::BoxedRule<'_>>())
    };
    ($($rule:expr),+ $(,)?) => {
        $crate::assert_any([$($crate::traits::Rule::boxed($rule)),+])
    };
}

/// Creates an accumulate-all rule from rules of any type.
///
/// # Examples
///
/// ```
/// use rule_rail::{assert_all, assert_if, assert_that, traits::Rule};
///
/// let rule = assert_all![
///     assert_that(false, "first"),
///     assert_if(true, assert_that(false, "second")),
/// ];
/// assert_eq!(rule.check().unwrap_err().to_string(), "multiple errors:\nfirst\nsecond");
/// ```
#[macro_export]
macro_rules! assert_all {
    () => {
        $crate::assert_all(::core::iter::empty::<$crate::traits::BoxedRule<'_>>())
    };
    ($($rule:expr),+ $(,)?) => {
        $crate::assert_all([$($crate::traits::Rule::boxed($rule)),+])
    };
}
