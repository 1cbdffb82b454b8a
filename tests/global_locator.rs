//! Integration tests for the process-wide locator and its free functions.
//!
//! NOTE: All tests use #[serial] because they share the global locator.
//! Each one starts from `global::reset()`.

use serial_test::serial;
use service_locator::{global, LocatorApi, LocatorError};
use std::sync::Arc;

#[test]
#[serial]
fn test_register_and_resolve_integer() {
    global::reset();

    global::register(42i32);

    let value: Arc<i32> = global::resolve().unwrap();
    assert_eq!(*value, 42);
}

#[test]
#[serial]
fn test_register_and_resolve_strings() {
    global::reset();

    global::register("Hello, World!".to_string());
    global::register("some static string 123");

    let owned: Arc<String> = global::resolve().unwrap();
    let borrowed: Arc<&str> = global::resolve().unwrap();

    assert_eq!(&**owned, "Hello, World!");
    assert_eq!(*borrowed, "some static string 123");
}

#[test]
#[serial]
fn test_resolve_cloned_string() {
    global::reset();

    global::register("some cloned value 123".to_string());

    let value: String = global::resolve_cloned().unwrap();
    assert_eq!(value, "some cloned value 123");
}

#[test]
#[serial]
fn test_unregistered_type_resolves_to_none() {
    global::reset();

    assert!(global::resolve::<f64>().is_none());
    assert!(global::resolve_cloned::<bool>().is_none());
    assert_eq!(
        global::try_resolve::<f64>().unwrap_err(),
        LocatorError::NotRegistered { type_name: "f64" }
    );
}

#[test]
#[serial]
fn test_overwrite_same_type() {
    global::reset();

    global::register(100u32);
    global::register(200u32);

    let value: Arc<u32> = global::resolve().unwrap();
    assert_eq!(*value, 200);
    assert_eq!(global::len(), 1);
}

#[test]
#[serial]
fn test_distinct_types_do_not_interfere() {
    global::reset();

    #[derive(Debug, PartialEq)]
    struct Port(u16);
    #[derive(Debug, PartialEq)]
    struct Host(String);

    global::register(Port(8080));
    global::register(Host("localhost".to_string()));

    assert_eq!(*global::resolve::<Port>().unwrap(), Port(8080));
    assert_eq!(
        *global::resolve::<Host>().unwrap(),
        Host("localhost".to_string())
    );
}

#[test]
#[serial]
fn test_contains_check() {
    global::reset();

    global::register(999i64);

    assert!(global::contains::<i64>());
    assert!(!global::contains::<i8>());
}

#[test]
#[serial]
fn test_register_arc_keeps_identity() {
    global::reset();

    let value = Arc::new(777u16);
    global::register_arc(value.clone());

    let resolved: Arc<u16> = global::resolve().unwrap();
    assert!(Arc::ptr_eq(&value, &resolved));
}

#[test]
#[serial]
fn test_reset_clears_everything() {
    global::reset();

    global::register(1u8);
    global::register(true);
    assert_eq!(global::len(), 2);

    global::reset();

    assert!(global::is_empty());
    assert!(global::resolve::<u8>().is_none());
    assert!(global::resolve::<bool>().is_none());
}

#[test]
#[serial]
fn test_reset_on_empty_locator() {
    global::reset();
    global::reset();

    assert!(global::is_empty());
}

#[test]
#[serial]
fn test_handle_and_free_functions_agree() {
    global::reset();

    global::GLOBAL.register('x');
    assert_eq!(global::resolve_cloned::<char>(), Some('x'));

    global::register('y');
    assert_eq!(global::GLOBAL.resolve_cloned::<char>(), Some('y'));
}
