//! Sentinel lookup across error chains.
//!
//! [`ErrorChainExt`] answers "is this error, or anything it wraps, a
//! validation failure?". The walk follows [`source`](core::error::Error::source)
//! links and also descends into every child of a [`MultiError`] and into the
//! boxed error of [`RuleError::Other`], so the sentinel is found however deep
//! it sits.
//!
//! # Examples
//!
//! ```
//! use rule_rail::{assert_that, validate, traits::ErrorChainExt, ErrorKind, RuleError};
//!
//! let err = validate(&assert_that(false, "must hold")).unwrap_err();
//! assert!(err.is_validation_failure());
//! assert!(err.has_kind(ErrorKind::Invalid));
//!
//! let wrapped = RuleError::other(err);
//! assert!(wrapped.is_validation_failure());
//! assert!(!RuleError::unmet("plain").is_validation_failure());
//! ```
use crate::types::{ErrorKind, MultiError, RuleError, ValidationError};

type DynError = dyn core::error::Error + 'static;

/// Chain inspection for the validation sentinel.
pub trait ErrorChainExt {
    /// Returns the first [`ValidationError`] of the given kind found in the chain.
    fn find_kind(&self, kind: ErrorKind) -> Option<&ValidationError>;

    /// Returns `true` if the chain contains a [`ValidationError`] of `kind`.
    #[inline]
    fn has_kind(&self, kind: ErrorKind) -> bool {
        self.find_kind(kind).is_some()
    }

    /// Returns `true` if the chain contains an [`ErrorKind::Invalid`] failure.
    #[inline]
    fn is_validation_failure(&self) -> bool {
        self.has_kind(ErrorKind::Invalid)
    }
}

impl ErrorChainExt for DynError {
    fn find_kind(&self, kind: ErrorKind) -> Option<&ValidationError> {
        find_in_chain(self, kind)
    }
}

impl ErrorChainExt for dyn core::error::Error + Send + Sync + 'static {
    fn find_kind(&self, kind: ErrorKind) -> Option<&ValidationError> {
        find_in_chain(self, kind)
    }
}

impl<E> ErrorChainExt for E
where
    E: core::error::Error + 'static,
{
    fn find_kind(&self, kind: ErrorKind) -> Option<&ValidationError> {
        find_in_chain(self, kind)
    }
}

fn find_in_chain(error: &DynError, kind: ErrorKind) -> Option<&ValidationError> {
    let mut current = Some(error);
    while let Some(err) = current {
        if let Some(validation) = err.downcast_ref::<ValidationError>() {
            if validation.kind() == kind {
                return Some(validation);
            }
        }
        if let Some(found) = find_in_children(err, kind) {
            return Some(found);
        }
        current = err.source();
    }
    None
}

fn find_in_children(error: &DynError, kind: ErrorKind) -> Option<&ValidationError> {
    let multi = match error.downcast_ref::<RuleError>() {
        Some(RuleError::Multiple(multi)) => &**multi,
        Some(_) => return None,
        None => error.downcast_ref::<MultiError>()?,
    };
    multi.iter().find_map(|child| find_in_chain(child, kind))
}
