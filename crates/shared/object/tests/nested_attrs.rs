use std::sync::Arc;
use xacc_object::{
    AttrError, Attributes, Object, Value, del_nested_attr, get_nested_attr, has_nested_attr,
    set_nested_attr,
};

fn data() -> Arc<Object> {
    let c = Object::new("Data").with("c", "data");
    let b = Object::new("Data").with("b", c);
    Object::new("Data").with("a", b).shared()
}

#[test]
fn get_reads_the_leaf() {
    let data = data();
    let got = get_nested_attr(data.as_ref(), ["a", "b", "c"], None).unwrap();
    assert_eq!(got, Value::from("data"));
}

#[test]
fn get_returns_nested_objects_by_identity() {
    let data = data();
    let a = get_nested_attr(data.as_ref(), ["a"], None).unwrap();
    assert_eq!(a, data.attr("a").unwrap());
}

#[test]
fn set_then_get_round_trips() {
    let data = data();
    set_nested_attr(data.as_ref(), ["a", "b", "d"], Value::from("data")).unwrap();
    assert_eq!(get_nested_attr(data.as_ref(), ["a", "b", "d"], None).unwrap(), Value::from("data"));
}

#[test]
fn set_requires_an_existing_prefix() {
    let data = data();
    let err = set_nested_attr(data.as_ref(), ["a", "x", "d"], Value::Int(1)).unwrap_err();
    assert!(err.is_missing());
}

#[test]
fn delete_removes_the_leaf() {
    let data = data();
    set_nested_attr(data.as_ref(), ["a", "b", "e"], Value::from("data")).unwrap();
    del_nested_attr(data.as_ref(), ["a", "b", "e"]).unwrap();

    let err = get_nested_attr(data.as_ref(), ["a", "b", "e"], None).unwrap_err();
    assert!(matches!(err, AttrError::MissingAttribute { .. }));
}

#[test]
fn delete_of_a_missing_leaf_fails() {
    let data = data();
    let err = del_nested_attr(data.as_ref(), ["a", "b", "nope"]).unwrap_err();
    assert!(err.is_missing());
}

#[test]
fn has_reports_existence() {
    let data = data();
    assert!(has_nested_attr(data.as_ref(), ["a", "b", "c"]).unwrap());
    assert!(!has_nested_attr(data.as_ref(), ["a", "b", "z"]).unwrap());
    assert!(!has_nested_attr(data.as_ref(), ["z", "b", "c"]).unwrap());
}

#[test]
fn empty_and_string_paths_are_invalid() {
    let data = data();
    let empty: Vec<&str> = Vec::new();
    assert!(matches!(
        get_nested_attr(data.as_ref(), empty, None),
        Err(AttrError::InvalidPath { .. })
    ));
    assert!(matches!(
        get_nested_attr(data.as_ref(), "abc", None),
        Err(AttrError::InvalidPath { .. })
    ));
    assert!(matches!(
        set_nested_attr(data.as_ref(), "abc", Value::None),
        Err(AttrError::InvalidPath { .. })
    ));
    assert!(matches!(del_nested_attr(data.as_ref(), "abc"), Err(AttrError::InvalidPath { .. })));
}

#[test]
fn invalid_paths_win_even_with_a_default() {
    let data = data();
    let err = get_nested_attr(data.as_ref(), "a", Some(Value::Int(0))).unwrap_err();
    assert!(matches!(err, AttrError::InvalidPath { .. }));
}

#[test]
fn default_is_returned_for_a_missing_leaf() {
    let data = data();
    let got = get_nested_attr(data.as_ref(), ["a", "b", "zz"], Some(Value::Int(-1))).unwrap();
    assert_eq!(got, Value::Int(-1));
}

#[test]
fn owned_string_sequences_are_accepted() {
    let data = data();
    let names: Vec<String> = "a.b.c".split('.').map(str::to_owned).collect();
    assert!(has_nested_attr(data.as_ref(), names).unwrap());
}
