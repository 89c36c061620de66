//! Contract tests for to_sequence and normalize_to_sequence

use core_types::{HostCollection, JsObject, JsResult, ObjectKind, Value};
use std::cell::RefCell;
use std::rc::Rc;
use type_checks::*;

/// A minimal live node list: reads always see the current children.
#[derive(Debug, Default)]
struct NodeList {
    children: RefCell<Vec<Value>>,
}

impl HostCollection for NodeList {
    fn class_name(&self) -> &str {
        "NodeList"
    }

    fn length(&self) -> usize {
        self.children.borrow().len()
    }

    fn item(&self, index: usize) -> JsResult<Value> {
        Ok(self.children.borrow().get(index).cloned().unwrap_or(Value::Null))
    }
}

fn len(array: &Value) -> usize {
    match &*array.as_object().unwrap().kind() {
        ObjectKind::Array(elements) => elements.len(),
        _ => panic!("expected an array"),
    }
}

fn at(array: &Value, index: usize) -> Value {
    match &*array.as_object().unwrap().kind() {
        ObjectKind::Array(elements) => elements[index].clone(),
        _ => panic!("expected an array"),
    }
}

#[test]
fn contract_nullish_yields_empty() {
    assert_eq!(len(&to_sequence(&Value::Null).unwrap()), 0);
    assert_eq!(len(&to_sequence(&Value::Undefined).unwrap()), 0);
}

#[test]
fn contract_node_list_to_array() {
    let list = Rc::new(NodeList::default());
    list.children
        .borrow_mut()
        .extend([Value::object(), Value::object(), Value::object()]);
    let source = Value::from(JsObject::host(list.clone()));

    let arr = to_sequence(&source).unwrap();

    assert_eq!(len(&arr), 3);
    assert_eq!(at(&arr, 0), list.item(0).unwrap());
    assert!(is_array(&arr));
    assert!(!is_array(&source));
}

#[test]
fn contract_snapshot_ignores_later_mutation() {
    let list = Rc::new(NodeList::default());
    list.children.borrow_mut().push(Value::object());
    let arr = to_sequence(&Value::from(JsObject::host(list.clone()))).unwrap();

    list.children.borrow_mut().clear();

    assert_eq!(len(&arr), 1);
    assert_eq!(list.length(), 0);
}

#[test]
fn contract_empty_sources() {
    assert_eq!(len(&to_sequence(&Value::array(vec![])).unwrap()), 0);
    let empty_list = Value::from(JsObject::host(Rc::new(NodeList::default())));
    assert_eq!(len(&to_sequence(&empty_list).unwrap()), 0);
}

#[test]
fn contract_normalize_is_identity_on_arrays() {
    let arr = Value::array(vec![Value::Smi(1), Value::Smi(2)]);
    let normalized = normalize_to_sequence(arr.clone());
    assert_eq!(normalized, arr);
    assert_eq!(normalize_to_sequence(normalized.clone()), arr);
}

#[test]
fn contract_normalize_wraps_single_values() {
    for value in [Value::Null, Value::Smi(1), Value::object()] {
        let wrapped = normalize_to_sequence(value.clone());
        assert!(is_array(&wrapped));
        assert_eq!(len(&wrapped), 1);
        assert_eq!(at(&wrapped, 0), value);
    }
}
