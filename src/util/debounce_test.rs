use std::cell::RefCell;
use std::rc::Rc;

use super::*;

fn recorder() -> (Rc<RefCell<Vec<&'static str>>>, impl Fn(&'static str) -> Box<dyn FnOnce()>) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = log.clone();
    let make = move |label: &'static str| -> Box<dyn FnOnce()> {
        let sink = sink.clone();
        Box::new(move || sink.borrow_mut().push(label))
    };
    (log, make)
}

#[test]
fn only_latest_call_runs() {
    let debouncer = Debouncer::new(300);
    let (log, make) = recorder();

    debouncer.call(make("a"));
    debouncer.call(make("b"));
    debouncer.call(make("c"));
    assert!(debouncer.is_pending());

    assert!(debouncer.fire_pending());
    assert_eq!(*log.borrow(), vec!["c"]);
    assert!(!debouncer.is_pending());
}

#[test]
fn fire_without_pending_is_noop() {
    let debouncer = Debouncer::new(300);
    assert!(!debouncer.fire_pending());
}

#[test]
fn cancel_discards_pending_call() {
    let debouncer = Debouncer::new(300);
    let (log, make) = recorder();

    debouncer.call(make("a"));
    debouncer.cancel();

    assert!(!debouncer.is_pending());
    assert!(!debouncer.fire_pending());
    assert!(log.borrow().is_empty());
}

#[test]
fn calls_after_fire_are_scheduled_again() {
    let debouncer = Debouncer::new(300);
    let (log, make) = recorder();

    debouncer.call(make("a"));
    debouncer.fire_pending();
    debouncer.call(make("b"));
    debouncer.fire_pending();

    assert_eq!(*log.borrow(), vec!["a", "b"]);
}

#[test]
fn keeps_configured_delay() {
    assert_eq!(Debouncer::new(250).delay_ms(), 250);
}
