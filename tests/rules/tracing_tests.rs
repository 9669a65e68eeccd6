//! Diagnostics emitted with the `tracing` feature.

use std::fmt;
use std::sync::{Arc, Mutex};

use rule_rail::{assert_all, assert_any, assert_that, validate};
use tracing::field::{Field, Visit};
use tracing::span::{Attributes, Id, Record};
use tracing::subscriber::Interest;
use tracing::{Event, Level, Metadata, Subscriber};

/// Records the level and message of every event.
#[derive(Clone, Default)]
struct Recorder {
    events: Arc<Mutex<Vec<(Level, String)>>>,
}

impl Recorder {
    fn events(&self) -> Vec<(Level, String)> {
        self.events.lock().unwrap().clone()
    }

    fn messages(&self) -> Vec<String> {
        self.events().into_iter().map(|(_, message)| message).collect()
    }
}

struct MessageVisitor(String);

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.0 = format!("{value:?}");
        }
    }
}

impl Subscriber for Recorder {
    fn register_callsite(&self, _: &'static Metadata<'static>) -> Interest {
        Interest::sometimes()
    }

    fn enabled(&self, _: &Metadata<'_>) -> bool {
        true
    }

    fn new_span(&self, _: &Attributes<'_>) -> Id {
        Id::from_u64(1)
    }

    fn record(&self, _: &Id, _: &Record<'_>) {}

    fn record_follows_from(&self, _: &Id, _: &Id) {}

    fn event(&self, event: &Event<'_>) {
        let mut visitor = MessageVisitor(String::new());
        event.record(&mut visitor);
        self.events.lock().unwrap().push((*event.metadata().level(), visitor.0));
    }

    fn enter(&self, _: &Id) {}

    fn exit(&self, _: &Id) {}
}

fn recorded<T>(f: impl FnOnce() -> T) -> (T, Recorder) {
    let recorder = Recorder::default();
    let out = tracing::subscriber::with_default(recorder.clone(), f);
    (out, recorder)
}

#[test]
fn passing_validation_is_silent() {
    let (result, recorder) = recorded(|| validate(&assert_all![assert_that(true, "ok")]));

    assert!(result.is_ok());
    assert!(recorder.events().is_empty());
}

#[test]
fn validate_emits_debug_event_on_failure() {
    let (result, recorder) = recorded(|| validate(&assert_that(false, "broken")));

    assert!(result.is_err());
    assert_eq!(recorder.events(), vec![(Level::DEBUG, "validation failed".to_string())]);
}

#[test]
fn any_traces_the_short_circuit() {
    let (result, recorder) = recorded(|| {
        validate(&assert_any![assert_that(true, "first"), assert_that(false, "second")])
    });

    assert_eq!(result.unwrap_err().messages(), vec!["second"]);
    assert_eq!(recorder.messages(), vec!["first-failure rule stopped", "validation failed"]);
    assert_eq!(recorder.events()[0].0, Level::TRACE);
}

#[test]
fn all_traces_the_failure_count() {
    let (result, recorder) = recorded(|| {
        validate(&assert_all![assert_that(false, "a"), assert_that(false, "b")])
    });

    assert_eq!(result.unwrap_err().messages(), vec!["a", "b"]);
    assert_eq!(recorder.messages(), vec!["accumulate-all rule failed", "validation failed"]);
    assert_eq!(recorder.events()[0].0, Level::TRACE);
}
