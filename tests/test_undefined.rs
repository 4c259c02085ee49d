//! Identity tests for the process-wide `undefined` singleton.

extern crate ferric;

use std::thread;

use ferric::runtime::ds::undefined::Undefined;
use ferric::runtime::ds::value::JsValue;

#[test]
fn test_undefined_is_a_shared_singleton() {
    let a = Undefined::instance();
    let b = Undefined::instance();
    assert!(std::ptr::eq(a, b));
}

#[test]
fn test_undefined_instance_is_the_same_across_threads() {
    let local = Undefined::instance() as *const Undefined as usize;
    let handles: Vec<_> = (0..8)
        .map(|_| thread::spawn(|| Undefined::instance() as *const Undefined as usize))
        .collect();
    for handle in handles {
        let seen = handle.join().expect("worker thread should not panic");
        assert_eq!(seen, local);
    }
}

#[test]
fn test_undefined_displays_as_undefined() {
    assert_eq!(Undefined::instance().to_string(), "undefined");
    assert_eq!(JsValue::Undefined.to_string(), "undefined");
}
