use std::borrow::Cow;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use rule_rail::traits::Rule;
use rule_rail::{assert_that, RuleError};

struct Probe(Arc<AtomicUsize>);

impl fmt::Display for Probe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fetch_add(1, Ordering::SeqCst);
        f.write_str("probe")
    }
}

#[test]
fn passes_only_when_test_is_true() {
    assert!(assert_that(2 + 2 == 4, "two plus two should equal four").check().is_ok());

    let err = assert_that(2 + 2 == 5, "two plus two should not equal five").check().unwrap_err();
    assert!(matches!(err, RuleError::Unmet(_)));
    assert_eq!(err.to_string(), "two plus two should not equal five");
}

#[test]
fn literal_percent_renders_unchanged() {
    let plain = assert_that(false, "coverage must be 100%").check().unwrap_err();
    assert_eq!(plain.to_string(), "coverage must be 100%");

    let via_macro = assert_that!(false, "coverage must be 100%").check().unwrap_err();
    assert_eq!(via_macro.to_string(), "coverage must be 100%");
}

#[test]
fn macro_captures_arguments_and_formats_on_failure_only() {
    let formatted = Arc::new(AtomicUsize::new(0));

    let quiet = Probe(Arc::clone(&formatted));
    let passing = assert_that!(true, "value: {}", quiet);
    assert!(passing.check().is_ok());
    assert_eq!(formatted.load(Ordering::SeqCst), 0);

    let loud = Probe(Arc::clone(&formatted));
    let failing = assert_that!(false, "value: {}", loud);
    assert_eq!(formatted.load(Ordering::SeqCst), 0);

    assert_eq!(failing.check().unwrap_err().to_string(), "value: probe");
    assert_eq!(failing.check().unwrap_err().to_string(), "value: probe");
    assert_eq!(formatted.load(Ordering::SeqCst), 2);
}

#[test]
fn macro_arguments_are_read_when_the_rule_is_built() {
    let current = AtomicUsize::new(1);
    let source = &current;
    let rule = assert_that!(false, "n={}", source.load(Ordering::SeqCst));
    current.store(2, Ordering::SeqCst);

    assert_eq!(rule.check().unwrap_err().to_string(), "n=1");
}

#[test]
fn macro_arguments_are_evaluated_exactly_once() {
    let hits = AtomicUsize::new(0);
    let rule = assert_that!(false, "hit {} of {total}", hits.fetch_add(1, Ordering::SeqCst), total = 1);
    assert_eq!(hits.load(Ordering::SeqCst), 1);

    assert_eq!(rule.check().unwrap_err().to_string(), "hit 0 of 1");
    assert_eq!(rule.check().unwrap_err().to_string(), "hit 0 of 1");
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[test]
fn macro_evaluates_the_test_before_the_arguments() {
    let order = AtomicUsize::new(0);
    let rule = assert_that!(
        order.fetch_add(1, Ordering::SeqCst) == 0,
        "position {}",
        order.fetch_add(1, Ordering::SeqCst)
    );

    assert!(rule.passed());
    assert_eq!(order.load(Ordering::SeqCst), 2);
}

#[test]
fn owned_and_cow_messages_are_supported() {
    let owned = assert_that(false, format!("limit is {}", 3)).check().unwrap_err();
    assert_eq!(owned.to_string(), "limit is 3");

    let cow: Cow<'static, str> = Cow::Borrowed("borrowed");
    assert_eq!(assert_that(false, cow).check().unwrap_err().to_string(), "borrowed");
}

#[test]
fn repeated_checks_yield_the_same_outcome() {
    let rule = assert_that(false, "stable");
    let first = rule.check().unwrap_err().to_string();
    let second = rule.check().unwrap_err().to_string();
    assert_eq!(first, second);
    assert!(!rule.passed());
}
