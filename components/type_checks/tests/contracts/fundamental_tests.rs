//! Contract tests for plain objects, numbers and functions

use core_types::{FunctionKind, JsObject, Symbol, Value};
use type_checks::*;

#[test]
fn contract_is_object() {
    assert!(is_object(&Value::object()));
    assert!(is_object(&Value::from(JsObject::wrap(&Value::Undefined))));
    assert!(!is_object(&Value::Smi(3)));
    assert!(!is_object(&Value::from("2")));
    assert!(!is_object(&Value::array(vec![])));
}

#[test]
fn contract_is_finite_number() {
    assert!(is_finite_number(&Value::Smi(3)));
    assert!(is_finite_number(&Value::Double(3.2)));
    assert!(is_finite_number(&Value::number(123e-3)));
    assert!(!is_finite_number(&Value::from("2")));
    assert!(!is_finite_number(&Value::Double(f64::NAN)));
    assert!(!is_finite_number(&Value::Double(f64::INFINITY)));
    assert!(!is_finite_number(&Value::Double(f64::NEG_INFINITY)));
    assert!(!is_finite_number(&Value::Null));
}

#[test]
fn contract_is_primitive() {
    for value in [
        Value::Undefined,
        Value::Null,
        Value::Boolean(true),
        Value::Smi(0),
        Value::from("s"),
        Value::from(Symbol::new(None)),
        Value::bigint(3),
    ] {
        assert!(is_primitive(&value), "{:?}", value);
    }
    assert!(!is_primitive(&Value::object()));
    assert!(!is_primitive(&Value::from(JsObject::function(FunctionKind::Normal))));
    assert!(!is_primitive(&Value::from(JsObject::wrap(&Value::Smi(1)))));
}

#[test]
fn contract_function_predicates_reject_objects() {
    let plain = Value::object();
    assert!(!is_ordinary_function(&plain));
    assert!(!is_generator_function(&plain));
    assert!(!is_async_function(&plain));
}

#[test]
fn contract_async_function() {
    let f = Value::from(JsObject::function(FunctionKind::Async));
    assert!(is_async_function(&f));
    assert!(!is_ordinary_function(&f));
    assert!(!is_promise(&f));
}

#[test]
fn contract_date_regexp_error() {
    assert!(is_date(&Value::from(JsObject::date(0.0))));
    assert!(is_reg_exp(&Value::from(JsObject::regexp(".*", ""))));
    assert!(is_native_error(&Value::from(JsObject::error(
        core_types::ErrorKind::TypeError,
        "bad"
    ))));
}
