// valo-data - Collection integration tests
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Integration tests for String, Array, and Object operations.
//!
//! Strings are sequences of Unicode code points, not UTF-8 bytes or
//! UTF-16 units, so the supplementary-plane cases here are the ones
//! that catch granularity mistakes.

use valo_data::{Error, Value};

fn numbers(ns: impl IntoIterator<Item = f64>) -> Value {
    Value::array(ns.into_iter().map(Value::number))
}

fn interval(from: f64, upto: f64) -> Value {
    Value::object([
        ("from".to_string(), Value::number(from)),
        ("upto".to_string(), Value::number(upto)),
    ])
}

// =============================================================================
// String Operations (code-point granularity)
// =============================================================================
// "A𝑨B𝑩C𝑪" interleaves ASCII with supplementary-plane letters; its
// length is 6 code points even though it is 15 UTF-8 bytes.

const MIXED: &str = "A\u{1D468}B\u{1D469}C\u{1D46A}";

#[test]
fn test_string_length_counts_code_points() {
    assert_eq!(Value::string(MIXED).length().unwrap(), Value::number(6.0));
    assert_eq!(Value::empty_string().length().unwrap(), Value::number(0.0));
}

#[test]
fn test_string_value_yields_code_points() {
    let s = Value::string(MIXED);
    assert_eq!(
        s.value(&Value::number(0.0)).unwrap(),
        Value::number('A' as u32 as f64)
    );
    assert_eq!(
        s.value(&Value::number(1.0)).unwrap(),
        Value::number(0x1D468 as f64)
    );
    assert_eq!(
        s.value(&Value::number(5.0)).unwrap(),
        Value::number(0x1D46A as f64)
    );
}

#[test]
fn test_string_value_is_bounds_checked() {
    let s = Value::string(MIXED);
    assert!(s.value(&Value::number(6.0)).is_err());
    assert!(s.value(&Value::number(-1.0)).is_err());
    assert!(s.value(&Value::number(0.5)).is_err());
}

#[test]
fn test_string_skip_and_take() {
    let s = Value::string(MIXED);
    assert_eq!(
        s.skip(&Value::number(2.0)).unwrap(),
        Value::string("B\u{1D469}C\u{1D46A}")
    );
    assert_eq!(
        s.take(&Value::number(2.0)).unwrap(),
        Value::string("A\u{1D468}")
    );
    assert_eq!(s.skip(&Value::number(0.0)).unwrap(), s);
    assert_eq!(s.take(&Value::number(6.0)).unwrap(), s);
}

#[test]
fn test_skip_past_the_end_is_empty_but_take_fails() {
    let s = Value::string("abc");
    assert_eq!(s.skip(&Value::number(99.0)).unwrap(), Value::empty_string());
    assert_eq!(
        s.take(&Value::number(4.0)).unwrap_err(),
        Error::IndexOutOfBounds {
            index: 4.0,
            length: 3
        }
    );
}

#[test]
fn test_string_extract() {
    let s = Value::string(MIXED);
    assert_eq!(
        s.extract(&interval(1.0, 4.0)).unwrap(),
        Value::string("\u{1D468}B\u{1D469}")
    );
    assert_eq!(
        s.extract(&interval(3.0, 3.0)).unwrap(),
        Value::empty_string()
    );
    assert!(s.extract(&interval(4.0, 2.0)).is_err());
    assert!(s.extract(&interval(0.0, 7.0)).is_err());
}

#[test]
fn test_string_concatenate_and_append() {
    let joined = Value::string("foo").concatenate(&Value::string("bar")).unwrap();
    assert_eq!(joined, Value::string("foobar"));
    let appended = Value::string("A").append(&Value::number(0x1D468 as f64)).unwrap();
    assert_eq!(appended, Value::string("A\u{1D468}"));
    assert!(Value::string("A").append(&Value::number(0xD800 as f64)).is_err());
}

#[test]
fn test_string_array_round_trip() {
    let s = Value::string(MIXED);
    let codes = s.as_array().unwrap();
    assert_eq!(codes.length().unwrap(), Value::number(6.0));
    assert_eq!(codes.as_string().unwrap(), s);
}

#[test]
fn test_bind_builds_a_binding() {
    let binding = Value::string("foo").bind(&Value::number(42.0)).unwrap();
    assert_eq!(
        binding.value(&Value::string("foo")).unwrap(),
        Value::number(42.0)
    );
    assert_eq!(binding.names().unwrap(), Value::array([Value::string("foo")]));
    // Any value may be bound, including Void
    let void_binding = Value::string("v").bind(&Value::Void).unwrap();
    assert_eq!(void_binding.value(&Value::string("v")).unwrap(), Value::Void);
}

// =============================================================================
// Array Operations
// =============================================================================

#[test]
fn test_array_length_and_value() {
    let a = numbers([10.0, 20.0, 30.0]);
    assert_eq!(a.length().unwrap(), Value::number(3.0));
    assert_eq!(a.value(&Value::number(1.0)).unwrap(), Value::number(20.0));
    assert!(a.value(&Value::number(3.0)).is_err());
}

#[test]
fn test_array_skip_take_extract() {
    let a = numbers([1.0, 2.0, 3.0, 4.0]);
    assert_eq!(a.skip(&Value::number(2.0)).unwrap(), numbers([3.0, 4.0]));
    assert_eq!(a.skip(&Value::number(9.0)).unwrap(), Value::empty_array());
    assert_eq!(a.take(&Value::number(2.0)).unwrap(), numbers([1.0, 2.0]));
    assert!(a.take(&Value::number(5.0)).is_err());
    assert_eq!(
        a.extract(&interval(1.0, 3.0)).unwrap(),
        numbers([2.0, 3.0])
    );
}

#[test]
fn test_array_concatenate_preserves_order() {
    let joined = numbers([1.0, 2.0]).concatenate(&numbers([3.0])).unwrap();
    assert_eq!(joined, numbers([1.0, 2.0, 3.0]));
}

#[test]
fn test_array_append_accepts_any_value() {
    let a = Value::empty_array()
        .append(&Value::Unit)
        .unwrap()
        .append(&Value::empty_object())
        .unwrap();
    assert_eq!(a, Value::array([Value::Unit, Value::empty_object()]));
}

#[test]
fn test_slices_reassemble() {
    let a = numbers([1.0, 2.0, 3.0, 4.0, 5.0]);
    let k = Value::number(2.0);
    let reassembled = a.take(&k).unwrap().concatenate(&a.skip(&k).unwrap()).unwrap();
    assert_eq!(reassembled, a);
}

#[test]
fn test_sequence_operations_reject_wrong_types() {
    assert_eq!(
        Value::number(1.0).length().unwrap_err(),
        Error::type_mismatch("String or Array", "Number")
    );
    assert!(Value::string("a").concatenate(&numbers([1.0])).is_err());
    assert!(numbers([1.0]).concatenate(&Value::string("a")).is_err());
}

// =============================================================================
// Object Operations
// =============================================================================

fn sample() -> Value {
    Value::object([
        ("a".to_string(), Value::number(1.0)),
        ("b".to_string(), Value::number(2.0)),
        ("c".to_string(), Value::number(3.0)),
    ])
}

#[test]
fn test_has_property_and_value() {
    let obj = sample();
    assert_eq!(
        obj.has_property(&Value::string("a")).unwrap(),
        Value::Bool(true)
    );
    assert_eq!(
        obj.has_property(&Value::string("z")).unwrap(),
        Value::Bool(false)
    );
    assert_eq!(obj.value(&Value::string("b")).unwrap(), Value::number(2.0));
    assert_eq!(
        obj.value(&Value::string("z")).unwrap_err(),
        Error::MissingProperty("z".to_string())
    );
}

#[test]
fn test_names_reflect_insertion_order() {
    assert_eq!(
        sample().names().unwrap(),
        Value::array([
            Value::string("a"),
            Value::string("b"),
            Value::string("c")
        ])
    );
}

#[test]
fn test_object_extract_projects_named_keys() {
    let projected = sample()
        .extract(&Value::array([Value::string("c"), Value::string("a")]))
        .unwrap();
    assert_eq!(
        projected.names().unwrap(),
        Value::array([Value::string("c"), Value::string("a")])
    );
    assert_eq!(
        sample()
            .extract(&Value::array([Value::string("z")]))
            .unwrap_err(),
        Error::MissingProperty("z".to_string())
    );
}

#[test]
fn test_object_concatenate_is_right_biased() {
    let base = sample();
    let update = Value::object([
        ("b".to_string(), Value::number(20.0)),
        ("d".to_string(), Value::number(4.0)),
    ]);
    let merged = base.concatenate(&update).unwrap();
    // Shadowed keys take the right value but keep their left position
    assert_eq!(merged.value(&Value::string("b")).unwrap(), Value::number(20.0));
    assert_eq!(
        merged.names().unwrap(),
        Value::array([
            Value::string("a"),
            Value::string("b"),
            Value::string("c"),
            Value::string("d"),
        ])
    );
    // The operands are unchanged
    assert_eq!(base.value(&Value::string("b")).unwrap(), Value::number(2.0));
}

#[test]
fn test_shadowing_via_bind_and_concatenate() {
    let context = sample();
    let shadowed = context
        .concatenate(&Value::string("a").bind(&Value::number(100.0)).unwrap())
        .unwrap();
    assert_eq!(
        shadowed.value(&Value::string("a")).unwrap(),
        Value::number(100.0)
    );
}
