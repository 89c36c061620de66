//! JavaScript value representation.
//!
//! This module provides the core `Value` enum that represents all possible
//! JavaScript values. Primitives are stored inline, objects are shared
//! references to heap data (see [`JsObject`]).

use crate::object::JsObject;
use num_bigint::BigInt;
use num_traits::Zero;
use std::fmt;
use std::rc::Rc;

/// A JavaScript symbol.
///
/// Every call to [`Symbol::new`] creates a distinct symbol; clones share
/// identity.
#[derive(Clone)]
pub struct Symbol(Rc<Option<String>>);

impl Symbol {
    /// Create a new unique symbol with an optional description
    pub fn new(description: Option<&str>) -> Self {
        Symbol(Rc::new(description.map(str::to_string)))
    }

    /// The description given at creation
    pub fn description(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.description().unwrap_or(""))
    }
}

/// Represents any JavaScript value.
///
/// Numbers use two variants: small integers that fit in 32 bits (`Smi`) and
/// IEEE 754 doubles. Both report `"number"` from [`Value::type_of`].
///
/// # Examples
///
/// ```
/// use core_types::Value;
///
/// let undefined = Value::Undefined;
/// let number = Value::Smi(42);
/// let float = Value::Double(3.14);
///
/// assert!(!undefined.is_truthy());
/// assert!(number.is_truthy());
/// assert_eq!(float.type_of(), "number");
/// ```
#[derive(Clone)]
pub enum Value {
    /// JavaScript undefined value
    Undefined,
    /// JavaScript null value
    Null,
    /// JavaScript boolean (true or false)
    Boolean(bool),
    /// Small integer (fits in 32 bits)
    Smi(i32),
    /// IEEE 754 double-precision floating point
    Double(f64),
    /// JavaScript string value
    String(String),
    /// JavaScript symbol
    Symbol(Symbol),
    /// JavaScript BigInt (arbitrary precision integer)
    BigInt(BigInt),
    /// Reference to a heap object
    Object(JsObject),
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "Undefined"),
            Value::Null => write!(f, "Null"),
            Value::Boolean(b) => f.debug_tuple("Boolean").field(b).finish(),
            Value::Smi(n) => f.debug_tuple("Smi").field(n).finish(),
            Value::Double(n) => f.debug_tuple("Double").field(n).finish(),
            Value::String(s) => f.debug_tuple("String").field(s).finish(),
            Value::Symbol(s) => s.fmt(f),
            Value::BigInt(n) => f.debug_tuple("BigInt").field(n).finish(),
            Value::Object(o) => o.fmt(f),
        }
    }
}

/// Strict equality (`===`): objects and symbols compare by identity.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.strict_equals(other)
    }
}

impl Value {
    /// Create a number, using the `Smi` form when the value is a small
    /// integer other than `-0`.
    pub fn number(n: f64) -> Self {
        let is_smi = n.fract() == 0.0
            && n >= i32::MIN as f64
            && n <= i32::MAX as f64
            && !(n == 0.0 && n.is_sign_negative());
        if is_smi {
            Value::Smi(n as i32)
        } else {
            Value::Double(n)
        }
    }

    /// Create a BigInt value
    pub fn bigint(n: impl Into<BigInt>) -> Self {
        Value::BigInt(n.into())
    }

    /// Create an empty ordinary object
    pub fn object() -> Self {
        Value::Object(JsObject::ordinary())
    }

    /// Create an array holding `elements`
    pub fn array(elements: Vec<Value>) -> Self {
        Value::Object(JsObject::array(elements))
    }

    /// Returns the numeric value if this is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Smi(n) => Some(*n as f64),
            Value::Double(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the object reference if this is an object.
    pub fn as_object(&self) -> Option<&JsObject> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    /// True for `undefined` and `null`.
    pub fn is_nullish(&self) -> bool {
        matches!(self, Value::Undefined | Value::Null)
    }

    /// Returns whether this value is truthy in JavaScript semantics.
    ///
    /// The falsy values are `undefined`, `null`, `false`, `0`, `-0`, `NaN`,
    /// `""` and `0n`. Every object is truthy.
    ///
    /// # Examples
    ///
    /// ```
    /// use core_types::Value;
    ///
    /// assert!(!Value::Undefined.is_truthy());
    /// assert!(!Value::Double(f64::NAN).is_truthy());
    /// assert!(!Value::bigint(0).is_truthy());
    ///
    /// assert!(Value::Smi(42).is_truthy());
    /// assert!(Value::object().is_truthy());
    /// ```
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Undefined => false,
            Value::Null => false,
            Value::Boolean(b) => *b,
            Value::Smi(n) => *n != 0,
            Value::Double(n) => !n.is_nan() && *n != 0.0,
            Value::String(s) => !s.is_empty(),
            Value::Symbol(_) => true,
            Value::BigInt(n) => !n.is_zero(),
            Value::Object(_) => true, // All objects are truthy
        }
    }

    /// Returns the JavaScript typeof result for this value.
    ///
    /// - undefined → "undefined"
    /// - null → "object" (historical quirk)
    /// - callable object → "function"
    /// - any other object → "object"
    ///
    /// # Examples
    ///
    /// ```
    /// use core_types::{FunctionKind, JsObject, Value};
    ///
    /// assert_eq!(Value::Null.type_of(), "object");
    /// assert_eq!(Value::Boolean(true).type_of(), "boolean");
    /// assert_eq!(Value::Smi(42).type_of(), "number");
    /// assert_eq!(Value::from(JsObject::function(FunctionKind::Async)).type_of(), "function");
    /// ```
    pub fn type_of(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "object", // JavaScript quirk
            Value::Boolean(_) => "boolean",
            Value::Smi(_) | Value::Double(_) => "number",
            Value::String(_) => "string",
            Value::Symbol(_) => "symbol",
            Value::BigInt(_) => "bigint",
            Value::Object(o) if o.is_callable() => "function",
            Value::Object(_) => "object",
        }
    }

    /// Strict equality (`===`).
    ///
    /// Numbers compare numerically across the `Smi` and `Double` forms, so
    /// `NaN` is unequal to itself. Objects and symbols compare by identity.
    pub fn strict_equals(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) => true,
            (Value::Null, Value::Null) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::BigInt(a), Value::BigInt(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a.ptr_eq(b),
            (a, b) => match (a.as_number(), b.as_number()) {
                (Some(x), Some(y)) => x == y,
                _ => false,
            },
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Smi(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Symbol> for Value {
    fn from(s: Symbol) -> Self {
        Value::Symbol(s)
    }
}

impl From<BigInt> for Value {
    fn from(n: BigInt) -> Self {
        Value::BigInt(n)
    }
}

impl From<JsObject> for Value {
    fn from(o: JsObject) -> Self {
        Value::Object(o)
    }
}
