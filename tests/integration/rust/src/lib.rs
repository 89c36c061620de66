//! Integration test suite for the value classifier
//!
//! This crate provides shared fixtures: one sample value per built-in kind,
//! and a table of every atomic predicate with the tag it recognizes.

use core_types::{
    ErrorKind, FunctionKind, HostCollection, JsObject, JsResult, ObjectKind, PromiseState, Symbol,
    TypedArrayKind, Value,
};
use std::rc::Rc;
use type_checks::*;

/// Re-export components for test convenience
pub mod components {
    pub use core_types;
    pub use type_checks;
}

/// Install a test subscriber honouring `RUST_LOG`. Safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A fixed list of host nodes, reported as a `NodeList`.
#[derive(Debug)]
pub struct StaticNodeList(pub Vec<Value>);

impl HostCollection for StaticNodeList {
    fn class_name(&self) -> &str {
        "NodeList"
    }

    fn length(&self) -> usize {
        self.0.len()
    }

    fn item(&self, index: usize) -> JsResult<Value> {
        Ok(self.0.get(index).cloned().unwrap_or(Value::Null))
    }
}

/// A named sample value and the tag it must classify as.
pub struct Sample {
    /// Short description used in assertion messages
    pub name: &'static str,
    /// The value itself
    pub value: Value,
    /// Expected classification
    pub tag: Tag,
}

fn sample(name: &'static str, value: impl Into<Value>, tag: Tag) -> Sample {
    Sample {
        name,
        value: value.into(),
        tag,
    }
}

/// One value of every kind the classifier knows about.
pub fn samples() -> JsResult<Vec<Sample>> {
    let buffer = JsObject::array_buffer(16)?;
    let map = JsObject::map();
    let set = JsObject::set_collection();

    let mut all = vec![
        sample("undefined", Value::Undefined, Tag::Undefined),
        sample("null", Value::Null, Tag::Null),
        sample("true", true, Tag::Boolean),
        sample("smi", 7, Tag::Number),
        sample("nan", f64::NAN, Tag::Number),
        sample("string", "text", Tag::String),
        sample("symbol", Symbol::new(Some("s")), Tag::Symbol),
        sample("bigint", Value::bigint(5), Tag::BigInt),
        sample("object", JsObject::ordinary(), Tag::Object),
        sample("array", JsObject::array(vec![Value::Smi(1)]), Tag::Array),
        sample("arguments", JsObject::arguments(vec![Value::Smi(1)]), Tag::Arguments),
        sample("function", JsObject::function(FunctionKind::Normal), Tag::Function),
        sample("generator function", JsObject::function(FunctionKind::Generator), Tag::GeneratorFunction),
        sample("async function", JsObject::function(FunctionKind::Async), Tag::AsyncFunction),
        sample(
            "async generator function",
            JsObject::function(FunctionKind::AsyncGenerator),
            Tag::AsyncGeneratorFunction,
        ),
        sample("error", JsObject::error(ErrorKind::Error, "e"), Tag::Error),
        sample("type error", JsObject::error(ErrorKind::TypeError, "e"), Tag::Error),
        sample("boxed boolean", JsObject::wrap(&Value::Boolean(false)), Tag::Boolean),
        sample("boxed number", JsObject::wrap(&Value::Smi(0)), Tag::Number),
        sample("boxed string", JsObject::wrap(&Value::from("")), Tag::String),
        sample("boxed symbol", JsObject::wrap(&Value::from(Symbol::new(None))), Tag::Symbol),
        sample("boxed bigint", JsObject::wrap(&Value::bigint(0)), Tag::BigInt),
        sample("date", JsObject::date(0.0), Tag::Date),
        sample("regexp", JsObject::regexp("a", ""), Tag::RegExp),
        sample("map iterator", JsObject::map_iterator(&map)?, Tag::MapIterator),
        sample("set iterator", JsObject::set_iterator(&set)?, Tag::SetIterator),
        sample("map", map, Tag::Map),
        sample("set", set, Tag::Set),
        sample("weak map", JsObject::weak_map(), Tag::WeakMap),
        sample("weak set", JsObject::weak_set(), Tag::WeakSet),
        sample("data view", JsObject::data_view(&buffer, 0, None)?, Tag::DataView),
        sample("array buffer", buffer, Tag::ArrayBuffer),
        sample("shared array buffer", JsObject::shared_array_buffer(8)?, Tag::SharedArrayBuffer),
        sample("promise", JsObject::promise(PromiseState::Pending), Tag::Promise),
        sample("generator", JsObject::generator(), Tag::Generator),
        sample("async generator", JsObject::with_kind(ObjectKind::AsyncGenerator), Tag::AsyncGenerator),
        sample("module", JsObject::module_namespace(Vec::new()), Tag::Module),
        sample(
            "node list",
            JsObject::host(Rc::new(StaticNodeList(vec![Value::object()]))),
            Tag::Host("NodeList".to_string()),
        ),
    ];
    for kind in TypedArrayKind::ALL {
        all.push(sample(kind.name(), JsObject::typed_array(kind, 1)?, Tag::TypedArray(kind)));
    }
    Ok(all)
}

/// An atomic predicate and the single tag it accepts.
pub type AtomicPredicate = (&'static str, fn(&Value) -> bool, Tag);

/// Every atomic predicate that is decided by a single tag.
pub fn atomic_predicates() -> Vec<AtomicPredicate> {
    let base: [AtomicPredicate; 21] = [
        ("is_object", is_object, Tag::Object),
        ("is_array", is_array, Tag::Array),
        ("is_arguments_object", is_arguments_object, Tag::Arguments),
        ("is_ordinary_function", is_ordinary_function, Tag::Function),
        ("is_generator_function", is_generator_function, Tag::GeneratorFunction),
        ("is_async_function", is_async_function, Tag::AsyncFunction),
        ("is_native_error", is_native_error, Tag::Error),
        ("is_date", is_date, Tag::Date),
        ("is_reg_exp", is_reg_exp, Tag::RegExp),
        ("is_map", is_map, Tag::Map),
        ("is_set", is_set, Tag::Set),
        ("is_weak_map", is_weak_map, Tag::WeakMap),
        ("is_weak_set", is_weak_set, Tag::WeakSet),
        ("is_map_iterator", is_map_iterator, Tag::MapIterator),
        ("is_set_iterator", is_set_iterator, Tag::SetIterator),
        ("is_array_buffer", is_array_buffer, Tag::ArrayBuffer),
        ("is_shared_array_buffer", is_shared_array_buffer, Tag::SharedArrayBuffer),
        ("is_data_view", is_data_view, Tag::DataView),
        ("is_promise", is_promise, Tag::Promise),
        ("is_generator_object", is_generator_object, Tag::Generator),
        ("is_module_namespace_object", is_module_namespace_object, Tag::Module),
    ];
    let mut all = base.to_vec();
    let typed: [(&'static str, fn(&Value) -> bool, TypedArrayKind); 12] = [
        ("is_int8_array", is_int8_array, TypedArrayKind::Int8),
        ("is_uint8_array", is_uint8_array, TypedArrayKind::Uint8),
        ("is_uint8_clamped_array", is_uint8_clamped_array, TypedArrayKind::Uint8Clamped),
        ("is_int16_array", is_int16_array, TypedArrayKind::Int16),
        ("is_uint16_array", is_uint16_array, TypedArrayKind::Uint16),
        ("is_int32_array", is_int32_array, TypedArrayKind::Int32),
        ("is_uint32_array", is_uint32_array, TypedArrayKind::Uint32),
        ("is_float16_array", is_float16_array, TypedArrayKind::Float16),
        ("is_float32_array", is_float32_array, TypedArrayKind::Float32),
        ("is_float64_array", is_float64_array, TypedArrayKind::Float64),
        ("is_big_int64_array", is_big_int64_array, TypedArrayKind::BigInt64),
        ("is_big_uint64_array", is_big_uint64_array, TypedArrayKind::BigUint64),
    ];
    all.extend(typed.into_iter().map(|(name, f, kind)| (name, f, Tag::TypedArray(kind))));
    all
}

/// Wrapper predicates. These accept their tag only on objects, never on
/// the bare primitive that shares it.
pub fn wrapper_predicates() -> Vec<AtomicPredicate> {
    let all: [AtomicPredicate; 5] = [
        ("is_boolean_object", is_boolean_object, Tag::Boolean),
        ("is_number_object", is_number_object, Tag::Number),
        ("is_string_object", is_string_object, Tag::String),
        ("is_symbol_object", is_symbol_object, Tag::Symbol),
        ("is_big_int_object", is_big_int_object, Tag::BigInt),
    ];
    all.to_vec()
}
