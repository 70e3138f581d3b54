use pathquill::document::parser::parse_json;
use pathquill::document::value::Value;
use pathquill::path::{AttributePath, Path, PathError};

#[test]
fn test_parse_and_display_roundtrip() {
    let path = AttributePath::new("user.address.street");
    assert_eq!(path.to_array(), vec!["user", "address", "street"]);
    assert_eq!(path.to_string(), "user.address.street");
    assert_eq!(AttributePath::new(path.to_string()).to_array(), path.to_array());
}

#[test]
fn test_empty_path() {
    let path = AttributePath::new("");
    assert!(path.is_empty());
    assert_eq!(path.length(), 0);
    assert_eq!(path.to_string(), "");
    assert_eq!(path.get_last_attribute(), "");
    assert_eq!(path, AttributePath::default());
}

#[test]
fn test_to_string_with_custom_separator() {
    let path = AttributePath::new("a.b.c");
    assert_eq!(path.to_string_with("/"), "a/b/c");
}

#[test]
fn test_get_last_attribute() {
    assert_eq!(AttributePath::new("a.b.c").get_last_attribute(), "c");
}

#[test]
fn test_to_array_is_a_copy() {
    let path = AttributePath::new("a.b");
    let mut segments = path.to_array();
    segments.push("c".to_string());
    assert_eq!(path.length(), 2);
}

#[test]
fn test_concat_does_not_mutate_receiver() {
    let base = AttributePath::new("user");
    let street = base.concat("address.street");
    let name = base.concat(vec!["name"]);

    assert_eq!(base.to_string(), "user");
    assert_eq!(street.to_string(), "user.address.street");
    assert_eq!(name.to_string(), "user.name");
}

#[test]
fn test_concat_accepts_another_path() {
    let base = AttributePath::new("a");
    let tail = AttributePath::new("b.c");
    assert_eq!(base.concat(&tail).to_string(), "a.b.c");
}

#[test]
fn test_concat_empty_string_adds_nothing() {
    let base = AttributePath::new("a.b");
    assert_eq!(base.concat(""), base);
}

#[test]
fn test_append_mutates_and_returns_receiver() {
    let mut path = AttributePath::new("a");
    let returned: *const AttributePath = path.append("b").append(["c", "d"]);
    assert!(std::ptr::eq(returned, &path));
    assert_eq!(path.to_string(), "a.b.c.d");
}

#[test]
fn test_back_scenario() {
    let path = AttributePath::new("user.address.street");
    assert_eq!(path.back(2).unwrap().to_string(), "user");
    assert_eq!(path.to_string(), "user.address.street");
}

#[test]
fn test_back_past_length_is_empty() {
    let path = AttributePath::new("a.b");
    assert!(path.back(2).unwrap().is_empty());
    assert!(path.back(10).unwrap().is_empty());
}

#[test]
fn test_back_zero_is_equal_copy() {
    let path = AttributePath::new("a.b");
    let mut copy = path.back(0).unwrap();
    assert_eq!(copy, path);

    copy.append("c");
    assert_eq!(path.to_string(), "a.b");
}

#[test]
fn test_drop_mutates() {
    let mut path = AttributePath::new("a.b.c");
    path.drop(1).unwrap().append("z");
    assert_eq!(path.to_string(), "a.b.z");
}

#[test]
fn test_negative_back_fails_with_class_name() {
    let path = AttributePath::new("a.b");
    let err = path.back(-1).unwrap_err();
    assert_eq!(err.to_string(), "AttributePath->back( -1 ): invalid parameter -1.");
    assert!(matches!(err, PathError::InvalidParameter { parameter: -1, .. }));
}

#[test]
fn test_negative_drop_fails_and_keeps_path() {
    let mut path = AttributePath::new("a.b");
    let err = path.drop(-1).unwrap_err();
    assert_eq!(err.to_string(), "AttributePath->drop( -1 ): invalid parameter -1.");
    assert_eq!(path.to_string(), "a.b");
}

#[test]
fn test_equals_normalizes_other() {
    let path = AttributePath::new("a.b");
    assert!(path.equals("a.b"));
    assert!(path.equals(vec!["a", "b"]));
    assert!(path.equals(&AttributePath::new("a.b")));
    assert!(!path.equals("a.b.c"));
}

#[test]
fn test_begins_with() {
    assert!(!AttributePath::new("").begins_with("x"));
    assert!(AttributePath::new("x.y").begins_with(""));
    assert!(!AttributePath::new("x.y").begins_with("x.y.z"));
    assert!(AttributePath::new("x.y").begins_with("x"));
    assert!(AttributePath::new("x.y").begins_with("x.y"));
    assert!(!AttributePath::new("x.y").begins_with("y"));
}

#[test]
fn test_root_in_common_with() {
    let a = AttributePath::new("user.address.street");
    let b = AttributePath::new("user.address.number");

    assert_eq!(a.root_in_common_with(&b).to_string(), "user.address");
    assert_eq!(a.root_in_common_with(&b), b.root_in_common_with(&a));
    assert!(a.root_in_common_with("name").is_empty());
    assert!(a.root_in_common_with("").is_empty());
    assert!(AttributePath::default().root_in_common_with(&a).is_empty());
}

#[test]
fn test_difference_with() {
    let path = AttributePath::new("user.address.street");

    assert_eq!(path.difference_with("user").to_string(), "address.street");
    assert!(path.difference_with("user.address.street").is_empty());
    assert!(path.difference_with("user.address.street.name").is_empty());
    assert_eq!(path.difference_with("name"), path);
    assert!(AttributePath::default().difference_with("a").is_empty());
}

#[test]
fn test_get_value_from() {
    let root = parse_json(r#"{"name": "Lisa", "address": {"street": "Evergreen 742"}}"#).unwrap();
    let street = AttributePath::new("address.street").get_value_from(&root).unwrap();
    assert_eq!(street.as_str(), Some("Evergreen 742"));
}

#[test]
fn test_get_value_from_missing() {
    let root = parse_json(r#"{"name": "Lisa", "address": {"street": "Evergreen 742"}}"#).unwrap();
    let err = AttributePath::new("address.number")
        .get_value_from(&root)
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "The nested attribute \"address.number\" was not found."
    );
    assert_eq!(err.missing_path().to_string(), "address.number");
    assert_eq!(err.full_path().to_string(), "address.number");
    assert_eq!(err.object(), &root);
}

#[test]
fn test_set_value_to_then_get() {
    let mut root = parse_json(r#"{"items": [{"qty": 1}, {"qty": 2}]}"#).unwrap();
    let path = AttributePath::new("items.[1].qty");

    path.set_value_to(&mut root, 5).unwrap();
    assert_eq!(path.get_value_from(&root).unwrap(), &Value::from(5));
}

#[test]
fn test_set_value_to_missing_leaf_fails() {
    let mut root = parse_json(r#"{"a": {}}"#).unwrap();
    let err = AttributePath::new("a.b").set_value_to(&mut root, 1).unwrap_err();
    assert_eq!(err.missing_path().to_string(), "a.b");
    assert!(root.as_map().unwrap()["a"].as_map().unwrap().is_empty());
}

#[test]
fn test_create_value_in() {
    let mut root = Value::map();
    let path = AttributePath::new("a.b.c");
    path.create_value_in(&mut root, "deep").unwrap();
    assert_eq!(path.get_value_from(&root).unwrap().as_str(), Some("deep"));
}
