//! Unit tests for the Value enum

use core_types::{FunctionKind, JsObject, Symbol, Value};
use num_bigint::BigInt;

#[cfg(test)]
mod value_is_truthy_tests {
    use super::*;

    #[test]
    fn test_nullish_is_falsy() {
        assert!(!Value::Undefined.is_truthy());
        assert!(!Value::Null.is_truthy());
    }

    #[test]
    fn test_numbers() {
        assert!(!Value::Smi(0).is_truthy());
        assert!(!Value::Double(-0.0).is_truthy());
        assert!(!Value::Double(f64::NAN).is_truthy());
        assert!(Value::Smi(i32::MIN).is_truthy());
        assert!(Value::Double(f64::INFINITY).is_truthy());
    }

    #[test]
    fn test_strings_and_bigints() {
        assert!(!Value::from("").is_truthy());
        assert!(Value::from("0").is_truthy());
        assert!(!Value::BigInt(BigInt::from(0)).is_truthy());
        assert!(Value::bigint(-1).is_truthy());
    }

    #[test]
    fn test_objects_are_truthy() {
        // Even a boxed `false` is truthy
        assert!(Value::from(JsObject::wrap(&Value::Boolean(false))).is_truthy());
        assert!(Value::array(vec![]).is_truthy());
        assert!(Value::from(Symbol::new(None)).is_truthy());
    }
}

#[cfg(test)]
mod value_type_of_tests {
    use super::*;

    #[test]
    fn test_primitive_type_of() {
        assert_eq!(Value::Undefined.type_of(), "undefined");
        assert_eq!(Value::Null.type_of(), "object");
        assert_eq!(Value::Boolean(false).type_of(), "boolean");
        assert_eq!(Value::Smi(1).type_of(), "number");
        assert_eq!(Value::Double(f64::NAN).type_of(), "number");
        assert_eq!(Value::from("2").type_of(), "string");
        assert_eq!(Value::from(Symbol::new(Some("s"))).type_of(), "symbol");
        assert_eq!(Value::bigint(2).type_of(), "bigint");
    }

    #[test]
    fn test_every_function_kind_is_function() {
        for kind in [
            FunctionKind::Normal,
            FunctionKind::Generator,
            FunctionKind::Async,
            FunctionKind::AsyncGenerator,
        ] {
            assert_eq!(Value::from(JsObject::function(kind)).type_of(), "function");
        }
    }

    #[test]
    fn test_non_callable_objects() {
        assert_eq!(Value::object().type_of(), "object");
        assert_eq!(Value::from(JsObject::generator()).type_of(), "object");
        assert_eq!(Value::from(JsObject::regexp("a", "g")).type_of(), "object");
    }
}

#[cfg(test)]
mod value_conversion_tests {
    use super::*;

    #[test]
    fn test_from_impls() {
        assert!(matches!(Value::from(true), Value::Boolean(true)));
        assert!(matches!(Value::from(5), Value::Smi(5)));
        assert!(matches!(Value::from(0.5), Value::Double(_)));
        assert!(matches!(Value::from(String::from("s")), Value::String(_)));
    }

    #[test]
    fn test_as_number() {
        assert_eq!(Value::Smi(3).as_number(), Some(3.0));
        assert_eq!(Value::Double(2.5).as_number(), Some(2.5));
        assert_eq!(Value::from("3").as_number(), None);
    }

    #[test]
    fn test_as_object_and_nullish() {
        assert!(Value::object().as_object().is_some());
        assert!(Value::Smi(0).as_object().is_none());
        assert!(Value::Null.is_nullish());
        assert!(!Value::Boolean(false).is_nullish());
    }
}
