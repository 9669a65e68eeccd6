use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use rule_rail::traits::Rule;
use rule_rail::{assert_if, assert_if_with, assert_that};

use super::{calls, counter, counting};

#[test]
fn false_guard_never_runs_inner_rule() {
    let inner = counter();
    let rule = assert_if(false, counting(&inner, Err("this will never run")));

    assert!(rule.check().is_ok());
    assert!(rule.check().is_ok());
    assert_eq!(calls(&inner), 0);
}

#[test]
fn true_guard_runs_inner_rule_once_and_mirrors_it() {
    let failing = counter();
    let err = assert_if(true, counting(&failing, Err("this will run"))).check().unwrap_err();
    assert_eq!(err.to_string(), "this will run");
    assert_eq!(calls(&failing), 1);

    let passing = counter();
    assert!(assert_if(true, counting(&passing, Ok(()))).check().is_ok());
    assert_eq!(calls(&passing), 1);
}

#[test]
fn dynamic_guard_is_evaluated_on_every_check() {
    let guard_calls = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&guard_calls);
    let rule = assert_if_with(
        move || seen.fetch_add(1, Ordering::SeqCst) % 2 == 1,
        assert_that(false, "odd invocation"),
    );

    assert!(rule.check().is_ok());
    assert!(rule.check().is_err());
    assert!(rule.check().is_ok());
    assert_eq!(guard_calls.load(Ordering::SeqCst), 3);
}
