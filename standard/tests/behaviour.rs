//! Public API behaviour tests.
//!
//! Exercises the crate-root re-exports the way a downstream caller would,
//! covering the documented defaulting, matching and projection contracts.

use std::thread;

use serde_json::json;
use standard::test_support::{app_store, re, strings, value};
use standard::{
    Mapping, Tag, Value, all_of, check, contains, define, derive, derive_from, get, is_email,
    is_unempty_object, is_unempty_string, one_of, type_of,
};

#[test]
fn every_value_has_exactly_one_tag() {
    let values = [
        value(json!(1)),
        value(json!("s")),
        value(json!([1])),
        value(json!({})),
        value(json!(null)),
        Value::Undefined,
        re("/x/"),
    ];
    for v in &values {
        let matching = Tag::ALL.iter().filter(|tag| **tag == type_of(v)).count();
        assert_eq!(matching, 1);
    }
    assert_eq!(type_of(&value(json!(42))), Tag::Number);
    assert_eq!(type_of(&value(json!([1, 2]))), Tag::Array);
}

#[test]
fn defaulting_cascade() {
    assert_eq!(define(Value::Null, Value::from("x")), Value::from("x"));
    assert_eq!(define(Value::from("x"), Value::Null), Value::from("x"));
    assert_eq!(define(Value::Null, Value::Null), value(json!([])));

    assert_eq!(
        check(Value::Null, Some("string"), Value::from("hello")),
        Value::from("hello")
    );
    assert_eq!(
        check(value(json!({"foo": "bar"})), Some("object"), Value::Undefined),
        value(json!({"foo": "bar"}))
    );
    assert_eq!(check(Value::Null, None, Value::Undefined), value(json!([])));
    assert_eq!(
        check(Value::from("str"), Some("number"), Value::Undefined),
        Value::Null
    );
}

#[test]
fn string_and_object_predicates() {
    assert!(!is_unempty_string(&Value::from("")));
    assert!(is_unempty_string(&Value::from("foo")));
    assert!(!is_email(&Value::from("AkhileshNS")));
    assert!(is_email(&Value::from("nsakhilesh02@gmail.com")));
    assert!(!is_unempty_object(&value(json!({}))));
    assert!(is_unempty_object(&value(json!({"foo": "bar"}))));
}

#[test]
fn containment_and_matching() {
    assert!(contains(&Value::from("hello"), &Value::from("HELL")));
    assert!(contains(&strings(&["foo", "bar"]), &Value::from("FOO")));
    assert!(!contains(&strings(&["hello"]), &Value::from("HELL")));

    assert!(one_of(&Value::from("hello"), &strings(&["hello", "world"])));
    assert!(!all_of(&Value::from("hello"), &strings(&["hello", "world"])));
    assert!(all_of(
        &Value::from("hello world"),
        &Value::Array(vec![re("/world/i"), re("/hell/i")])
    ));
}

#[test]
fn indexing_with_fallback() {
    let items = value(json!([1, 2, 3]));
    assert_eq!(get(&items, &Value::from(3), Value::Undefined), Value::Null);
    assert_eq!(get(&items, &Value::from(3), Value::from(-1)), Value::from(-1));
    assert_eq!(get(&items, &Value::from(-1), Value::Undefined), Value::from(3));
}

#[test]
fn projection_contracts() {
    let projected = derive(Mapping::new().with("trigger", "appStore")).project(&app_store());
    assert_eq!(projected, value(json!({"trigger": "fire"})));

    let projected = derive(Mapping::new().with("x", "a.b")).project(&value(json!({"a": {"b": 5}})));
    assert_eq!(projected, value(json!({"x": 5})));

    let projected = derive(Mapping::new().with("x", "missing")).project(&value(json!({})));
    assert_eq!(projected, Value::Null);
}

#[test]
fn projection_leaves_store_untouched() {
    let store = app_store();
    let mapping = Mapping::new().with("trigger", "appStore").with("n", "appStore.count");
    let projected = derive_from(&mapping, &store);
    assert_eq!(projected, value(json!({"trigger": "fire", "n": 3})));
    assert_eq!(store, app_store());
}

#[test]
fn values_are_shareable_across_threads() {
    let store = app_store();
    let projector = derive(Mapping::new().with("trigger", "appStore"));
    thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| projector.project(&store)))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().expect("join"), value(json!({"trigger": "fire"})));
        }
    });
}
