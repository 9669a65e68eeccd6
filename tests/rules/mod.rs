use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use rule_rail::{RuleError, RuleResult};

mod conditional;
mod predicate;
#[cfg(feature = "tracing")]
mod tracing_tests;

/// Rule that counts its invocations and returns a fixed outcome.
pub fn counting(
    calls: &Arc<AtomicUsize>,
    outcome: Result<(), &'static str>,
) -> impl Fn() -> RuleResult + Send + Sync + 'static {
    let calls = Arc::clone(calls);
    move || {
        calls.fetch_add(1, Ordering::SeqCst);
        outcome.map_err(RuleError::unmet)
    }
}

pub fn counter() -> Arc<AtomicUsize> {
    Arc::new(AtomicUsize::new(0))
}

pub fn calls(counter: &Arc<AtomicUsize>) -> usize {
    counter.load(Ordering::SeqCst)
}
