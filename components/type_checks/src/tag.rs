//! Classification tags, the `Object.prototype.toString` view of a value.
//!
//! A tag is computed from the value's primitive type or from the internal
//! kind of the object it references. Own properties (including a
//! user-defined `toString`) never take part, so a tag cannot be forged from
//! script.

use core_types::{FunctionKind, ObjectKind, TypedArrayKind, Value};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The built-in kind of a value, as reported by `Object.prototype.toString`.
///
/// Serializes as its `[object X]` string.
///
/// # Examples
///
/// ```
/// use type_checks::{tag_of, Tag};
/// use core_types::{JsObject, TypedArrayKind, Value};
///
/// assert_eq!(tag_of(&Value::Null), Tag::Null);
/// assert_eq!(tag_of(&Value::from(JsObject::map())).to_string(), "[object Map]");
///
/// let bytes = Value::from(JsObject::typed_array(TypedArrayKind::Uint8, 4).unwrap());
/// assert_eq!(tag_of(&bytes), Tag::TypedArray(TypedArrayKind::Uint8));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Tag {
    /// `[object Undefined]`
    Undefined,
    /// `[object Null]`
    Null,
    /// `[object Boolean]`, bare or boxed
    Boolean,
    /// `[object Number]`, bare or boxed
    Number,
    /// `[object String]`, bare or boxed
    String,
    /// `[object Symbol]`, bare or boxed
    Symbol,
    /// `[object BigInt]`, bare or boxed
    BigInt,
    /// `[object Object]`
    Object,
    /// `[object Array]`
    Array,
    /// `[object Arguments]`
    Arguments,
    /// `[object Function]`
    Function,
    /// `[object GeneratorFunction]`
    GeneratorFunction,
    /// `[object AsyncFunction]`
    AsyncFunction,
    /// `[object AsyncGeneratorFunction]`
    AsyncGeneratorFunction,
    /// `[object Error]`, shared by every native error type
    Error,
    /// `[object Date]`
    Date,
    /// `[object RegExp]`
    RegExp,
    /// `[object Map]`
    Map,
    /// `[object Set]`
    Set,
    /// `[object WeakMap]`
    WeakMap,
    /// `[object WeakSet]`
    WeakSet,
    /// `[object Map Iterator]`
    MapIterator,
    /// `[object Set Iterator]`
    SetIterator,
    /// `[object ArrayBuffer]`
    ArrayBuffer,
    /// `[object SharedArrayBuffer]`
    SharedArrayBuffer,
    /// `[object DataView]`
    DataView,
    /// `[object <Kind>Array]`
    TypedArray(TypedArrayKind),
    /// `[object Promise]`
    Promise,
    /// `[object Generator]`
    Generator,
    /// `[object AsyncGenerator]`
    AsyncGenerator,
    /// `[object Module]`
    Module,
    /// Embedder collection, tagged with its class name. [`tag_of`] never
    /// produces an empty or built-in name here.
    Host(String),
}

/// Grouping of tags by the part of the language that defines them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// `undefined` and `null`
    ValueProperty,
    /// Objects, functions, booleans and symbols
    Fundamental,
    /// Native errors
    Error,
    /// Numbers, BigInts and dates
    NumbersAndDates,
    /// Strings and regular expressions
    TextProcessing,
    /// Arrays and typed arrays
    IndexedCollection,
    /// Maps, sets, their weak forms and iterators
    KeyedCollection,
    /// Raw buffers and DataViews
    StructuredData,
    /// Promises, generators and async functions
    ControlAbstraction,
    /// Arguments, module namespaces and host objects
    Other,
}

/// Error returned when parsing a tag string fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TagParseError {
    /// Text is not of the form `[object X]`
    #[error("malformed tag {0:?}, expected \"[object <Kind>]\"")]
    Malformed(String),
    /// `[object ]` with nothing inside
    #[error("tag has an empty class name")]
    EmptyClass,
}

impl Tag {
    /// The class name between `[object ` and `]`.
    pub fn class_name(&self) -> &str {
        match self {
            Tag::Undefined => "Undefined",
            Tag::Null => "Null",
            Tag::Boolean => "Boolean",
            Tag::Number => "Number",
            Tag::String => "String",
            Tag::Symbol => "Symbol",
            Tag::BigInt => "BigInt",
            Tag::Object => "Object",
            Tag::Array => "Array",
            Tag::Arguments => "Arguments",
            Tag::Function => "Function",
            Tag::GeneratorFunction => "GeneratorFunction",
            Tag::AsyncFunction => "AsyncFunction",
            Tag::AsyncGeneratorFunction => "AsyncGeneratorFunction",
            Tag::Error => "Error",
            Tag::Date => "Date",
            Tag::RegExp => "RegExp",
            Tag::Map => "Map",
            Tag::Set => "Set",
            Tag::WeakMap => "WeakMap",
            Tag::WeakSet => "WeakSet",
            Tag::MapIterator => "Map Iterator",
            Tag::SetIterator => "Set Iterator",
            Tag::ArrayBuffer => "ArrayBuffer",
            Tag::SharedArrayBuffer => "SharedArrayBuffer",
            Tag::DataView => "DataView",
            Tag::TypedArray(kind) => kind.name(),
            Tag::Promise => "Promise",
            Tag::Generator => "Generator",
            Tag::AsyncGenerator => "AsyncGenerator",
            Tag::Module => "Module",
            Tag::Host(name) => name.as_str(),
        }
    }

    /// The category this tag belongs to.
    pub fn category(&self) -> Category {
        match self {
            Tag::Undefined | Tag::Null => Category::ValueProperty,
            Tag::Object | Tag::Function | Tag::Boolean | Tag::Symbol => Category::Fundamental,
            Tag::Error => Category::Error,
            Tag::Number | Tag::BigInt | Tag::Date => Category::NumbersAndDates,
            Tag::String | Tag::RegExp => Category::TextProcessing,
            Tag::Array | Tag::TypedArray(_) => Category::IndexedCollection,
            Tag::Map
            | Tag::Set
            | Tag::WeakMap
            | Tag::WeakSet
            | Tag::MapIterator
            | Tag::SetIterator => Category::KeyedCollection,
            Tag::ArrayBuffer | Tag::SharedArrayBuffer | Tag::DataView => Category::StructuredData,
            Tag::GeneratorFunction
            | Tag::AsyncFunction
            | Tag::AsyncGeneratorFunction
            | Tag::Promise
            | Tag::Generator
            | Tag::AsyncGenerator => Category::ControlAbstraction,
            Tag::Arguments | Tag::Module | Tag::Host(_) => Category::Other,
        }
    }

    fn from_class_name(name: &str) -> Tag {
        match name {
            "Undefined" => Tag::Undefined,
            "Null" => Tag::Null,
            "Boolean" => Tag::Boolean,
            "Number" => Tag::Number,
            "String" => Tag::String,
            "Symbol" => Tag::Symbol,
            "BigInt" => Tag::BigInt,
            "Object" => Tag::Object,
            "Array" => Tag::Array,
            "Arguments" => Tag::Arguments,
            "Function" => Tag::Function,
            "GeneratorFunction" => Tag::GeneratorFunction,
            "AsyncFunction" => Tag::AsyncFunction,
            "AsyncGeneratorFunction" => Tag::AsyncGeneratorFunction,
            "Error" => Tag::Error,
            "Date" => Tag::Date,
            "RegExp" => Tag::RegExp,
            "Map" => Tag::Map,
            "Set" => Tag::Set,
            "WeakMap" => Tag::WeakMap,
            "WeakSet" => Tag::WeakSet,
            "Map Iterator" => Tag::MapIterator,
            "Set Iterator" => Tag::SetIterator,
            "ArrayBuffer" => Tag::ArrayBuffer,
            "SharedArrayBuffer" => Tag::SharedArrayBuffer,
            "DataView" => Tag::DataView,
            "Promise" => Tag::Promise,
            "Generator" => Tag::Generator,
            "AsyncGenerator" => Tag::AsyncGenerator,
            "Module" => Tag::Module,
            other => match TypedArrayKind::from_name(other) {
                Some(kind) => Tag::TypedArray(kind),
                None => Tag::Host(other.to_string()),
            },
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[object {}]", self.class_name())
    }
}

/// Parses `[object X]`. Unknown class names become [`Tag::Host`].
impl FromStr for Tag {
    type Err = TagParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s
            .strip_prefix("[object ")
            .and_then(|rest| rest.strip_suffix(']'))
            .ok_or_else(|| TagParseError::Malformed(s.to_string()))?;
        if name.is_empty() {
            return Err(TagParseError::EmptyClass);
        }
        Ok(Tag::from_class_name(name))
    }
}

impl From<Tag> for String {
    fn from(tag: Tag) -> Self {
        tag.to_string()
    }
}

impl TryFrom<String> for Tag {
    type Error = TagParseError;

    fn try_from(s: String) -> Result<Self, TagParseError> {
        s.parse()
    }
}

/// Compute the classification tag of any value. Never fails.
pub fn tag_of(value: &Value) -> Tag {
    let obj = match value {
        Value::Undefined => return Tag::Undefined,
        Value::Null => return Tag::Null,
        Value::Boolean(_) => return Tag::Boolean,
        Value::Smi(_) | Value::Double(_) => return Tag::Number,
        Value::String(_) => return Tag::String,
        Value::Symbol(_) => return Tag::Symbol,
        Value::BigInt(_) => return Tag::BigInt,
        Value::Object(obj) => obj,
    };
    let kind = obj.kind();
    match &*kind {
        ObjectKind::Ordinary => Tag::Object,
        ObjectKind::Array(_) => Tag::Array,
        ObjectKind::Arguments(_) => Tag::Arguments,
        ObjectKind::Function(FunctionKind::Normal) => Tag::Function,
        ObjectKind::Function(FunctionKind::Generator) => Tag::GeneratorFunction,
        ObjectKind::Function(FunctionKind::Async) => Tag::AsyncFunction,
        ObjectKind::Function(FunctionKind::AsyncGenerator) => Tag::AsyncGeneratorFunction,
        ObjectKind::Error(_) => Tag::Error,
        ObjectKind::Boolean(_) => Tag::Boolean,
        ObjectKind::Number(_) => Tag::Number,
        ObjectKind::String(_) => Tag::String,
        ObjectKind::Symbol(_) => Tag::Symbol,
        ObjectKind::BigInt(_) => Tag::BigInt,
        ObjectKind::Date(_) => Tag::Date,
        ObjectKind::RegExp { .. } => Tag::RegExp,
        ObjectKind::Map(_) => Tag::Map,
        ObjectKind::Set(_) => Tag::Set,
        ObjectKind::WeakMap => Tag::WeakMap,
        ObjectKind::WeakSet => Tag::WeakSet,
        ObjectKind::MapIterator(_) => Tag::MapIterator,
        ObjectKind::SetIterator(_) => Tag::SetIterator,
        ObjectKind::ArrayBuffer(_) => Tag::ArrayBuffer,
        ObjectKind::SharedArrayBuffer(_) => Tag::SharedArrayBuffer,
        ObjectKind::DataView(_) => Tag::DataView,
        ObjectKind::TypedArray(kind, _) => Tag::TypedArray(*kind),
        ObjectKind::Promise(_) => Tag::Promise,
        ObjectKind::Generator => Tag::Generator,
        ObjectKind::AsyncGenerator => Tag::AsyncGenerator,
        ObjectKind::ModuleNamespace => Tag::Module,
        ObjectKind::Host(host) => host_tag(host.class_name()),
    }
}

/// A host class name that is empty or names a built-in would print as a tag
/// it does not have, so it falls back to `Object`.
fn host_tag(name: &str) -> Tag {
    if !name.is_empty() {
        if let Tag::Host(name) = Tag::from_class_name(name) {
            return Tag::Host(name);
        }
    }
    tracing::debug!(class_name = name, "host class name shadows a built-in tag");
    Tag::Object
}

/// `Object.prototype.toString.call(value)`: the tag as `[object X]` text.
///
/// # Examples
///
/// ```
/// use type_checks::object_to_string;
/// use core_types::Value;
///
/// assert_eq!(object_to_string(&Value::Undefined), "[object Undefined]");
/// assert_eq!(object_to_string(&Value::Smi(1)), "[object Number]");
/// assert_eq!(object_to_string(&Value::array(vec![])), "[object Array]");
/// ```
pub fn object_to_string(value: &Value) -> String {
    tag_of(value).to_string()
}
