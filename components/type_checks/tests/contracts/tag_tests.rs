//! Contract tests for tag inspection and its serialized form

use core_types::{JsObject, TypedArrayKind, Value};
use type_checks::{object_to_string, tag_of, Category, Tag};

#[test]
fn contract_nullish_tags() {
    assert_eq!(object_to_string(&Value::Null), "[object Null]");
    assert_eq!(object_to_string(&Value::Undefined), "[object Undefined]");
}

#[test]
fn contract_tags_are_stable_under_property_tampering() {
    let map = JsObject::map();
    map.set("toString", Value::from("[object Set]"));
    map.set("constructor", Value::object());
    assert_eq!(tag_of(&Value::from(map)), Tag::Map);
}

#[test]
fn contract_tag_serializes_as_text() {
    let json = serde_json::to_string(&Tag::TypedArray(TypedArrayKind::Uint8Clamped)).unwrap();
    assert_eq!(json, "\"[object Uint8ClampedArray]\"");

    let tags: Vec<Tag> = serde_json::from_str(r#"["[object Map Iterator]", "[object NodeList]"]"#).unwrap();
    assert_eq!(tags, vec![Tag::MapIterator, Tag::Host("NodeList".to_string())]);

    assert!(serde_json::from_str::<Tag>("\"Map\"").is_err());
}

#[test]
fn contract_category_serializes_snake_case() {
    let json = serde_json::to_string(&Tag::DataView.category()).unwrap();
    assert_eq!(json, "\"structured_data\"");
    assert_eq!(Tag::Error.category(), Category::Error);
}
