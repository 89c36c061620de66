//! Heap objects and their internal kinds.
//!
//! Every object carries an [`ObjectKind`] fixed at creation. The kind plays
//! the role of the internal slots of the language specification: it decides
//! what built-in an object is, independently of any own properties script
//! code may add.

use crate::buffer::{ArrayBuffer, BufferView, TypedArrayKind};
use crate::error::{ErrorKind, JsError, JsResult};
use crate::value::{Symbol, Value};
use num_bigint::BigInt;
use std::cell::{Ref, RefCell, RefMut};
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// Function flavours distinguished by their internal kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FunctionKind {
    /// Ordinary functions, arrows, methods and classes
    Normal,
    /// `function*`
    Generator,
    /// `async function`
    Async,
    /// `async function*`
    AsyncGenerator,
}

/// Settlement state of a promise.
#[derive(Debug, Clone)]
pub enum PromiseState {
    /// Not yet settled
    Pending,
    /// Resolved with a value
    Fulfilled(Value),
    /// Rejected with a reason
    Rejected(Value),
}

/// A live indexed collection owned by the embedder, such as a DOM `NodeList`.
///
/// Reads go to the embedder on every access, so the collection may change
/// between calls.
pub trait HostCollection: fmt::Debug {
    /// Class name reported in the object's tag (e.g. `"NodeList"`)
    fn class_name(&self) -> &str;

    /// Current number of items
    fn length(&self) -> usize;

    /// Read the item at `index`
    ///
    /// # Errors
    ///
    /// Whatever the embedder raises when the item cannot be read.
    fn item(&self, index: usize) -> JsResult<Value>;
}

/// Internal kind of an object.
#[derive(Debug, Clone)]
pub enum ObjectKind {
    /// Plain object
    Ordinary,
    /// Array exotic object
    Array(Vec<Value>),
    /// Arguments object of a function invocation
    Arguments(Vec<Value>),
    /// Callable object
    Function(FunctionKind),
    /// Error instance
    Error(ErrorKind),
    /// `new Boolean(..)`
    Boolean(bool),
    /// `new Number(..)`
    Number(f64),
    /// `new String(..)`
    String(String),
    /// `Object(symbol)`
    Symbol(Symbol),
    /// `Object(bigint)`
    BigInt(BigInt),
    /// Date holding its time value
    Date(f64),
    /// Regular expression
    RegExp {
        /// Pattern source
        source: String,
        /// Flag characters
        flags: String,
    },
    /// Map with entries in insertion order
    Map(Vec<(Value, Value)>),
    /// Set with values in insertion order
    Set(Vec<Value>),
    /// WeakMap
    WeakMap,
    /// WeakSet
    WeakSet,
    /// Iterator over a Map
    MapIterator(JsObject),
    /// Iterator over a Set
    SetIterator(JsObject),
    /// ArrayBuffer
    ArrayBuffer(ArrayBuffer),
    /// SharedArrayBuffer
    SharedArrayBuffer(ArrayBuffer),
    /// DataView over a buffer
    DataView(BufferView),
    /// Typed array over a buffer
    TypedArray(TypedArrayKind, BufferView),
    /// Promise
    Promise(PromiseState),
    /// Generator object returned by calling a generator function
    Generator,
    /// Async generator object
    AsyncGenerator,
    /// Module namespace object
    ModuleNamespace,
    /// Embedder-provided collection
    Host(Rc<dyn HostCollection>),
}

impl ObjectKind {
    fn name(&self) -> &str {
        match self {
            ObjectKind::Ordinary => "Object",
            ObjectKind::Array(_) => "Array",
            ObjectKind::Arguments(_) => "Arguments",
            ObjectKind::Function(_) => "Function",
            ObjectKind::Error(kind) => kind.name(),
            ObjectKind::Boolean(_) => "Boolean",
            ObjectKind::Number(_) => "Number",
            ObjectKind::String(_) => "String",
            ObjectKind::Symbol(_) => "Symbol",
            ObjectKind::BigInt(_) => "BigInt",
            ObjectKind::Date(_) => "Date",
            ObjectKind::RegExp { .. } => "RegExp",
            ObjectKind::Map(_) => "Map",
            ObjectKind::Set(_) => "Set",
            ObjectKind::WeakMap => "WeakMap",
            ObjectKind::WeakSet => "WeakSet",
            ObjectKind::MapIterator(_) => "Map Iterator",
            ObjectKind::SetIterator(_) => "Set Iterator",
            ObjectKind::ArrayBuffer(_) => "ArrayBuffer",
            ObjectKind::SharedArrayBuffer(_) => "SharedArrayBuffer",
            ObjectKind::DataView(_) => "DataView",
            ObjectKind::TypedArray(kind, _) => kind.name(),
            ObjectKind::Promise(_) => "Promise",
            ObjectKind::Generator => "Generator",
            ObjectKind::AsyncGenerator => "AsyncGenerator",
            ObjectKind::ModuleNamespace => "Module",
            ObjectKind::Host(host) => host.class_name(),
        }
    }
}

/// Internal object data
#[derive(Debug, Clone)]
pub struct ObjectData {
    /// Internal kind
    pub kind: ObjectKind,
    /// Own string-keyed properties
    pub properties: HashMap<String, Value>,
}

/// Shared reference to a heap object.
///
/// Cloning the handle does not copy the object; equality is identity.
///
/// # Examples
///
/// ```
/// use core_types::{JsObject, Value};
///
/// let obj = JsObject::ordinary();
/// obj.set("answer", Value::Smi(42));
///
/// let alias = obj.clone();
/// assert!(alias.ptr_eq(&obj));
/// assert_eq!(alias.get("answer"), Some(Value::Smi(42)));
/// ```
#[derive(Clone)]
pub struct JsObject(Rc<RefCell<ObjectData>>);

impl JsObject {
    /// Create an object of the given kind with no own properties
    pub fn with_kind(kind: ObjectKind) -> Self {
        JsObject(Rc::new(RefCell::new(ObjectData {
            kind,
            properties: HashMap::new(),
        })))
    }

    /// `{}`
    pub fn ordinary() -> Self {
        Self::with_kind(ObjectKind::Ordinary)
    }

    /// Array holding `elements`
    pub fn array(elements: Vec<Value>) -> Self {
        Self::with_kind(ObjectKind::Array(elements))
    }

    /// Arguments object for a call with `args`
    pub fn arguments(args: Vec<Value>) -> Self {
        let length = Value::number(args.len() as f64);
        let obj = Self::with_kind(ObjectKind::Arguments(args));
        obj.set("length", length);
        obj
    }

    /// Function object of the given flavour
    pub fn function(kind: FunctionKind) -> Self {
        Self::with_kind(ObjectKind::Function(kind))
    }

    /// Error instance with a `message` property
    pub fn error(kind: ErrorKind, message: &str) -> Self {
        let obj = Self::with_kind(ObjectKind::Error(kind));
        obj.set("message", Value::from(message));
        obj
    }

    /// Date with the given time value (milliseconds since the epoch)
    pub fn date(time: f64) -> Self {
        Self::with_kind(ObjectKind::Date(time))
    }

    /// Regular expression
    pub fn regexp(source: &str, flags: &str) -> Self {
        Self::with_kind(ObjectKind::RegExp {
            source: source.to_string(),
            flags: flags.to_string(),
        })
    }

    /// Empty Map
    pub fn map() -> Self {
        Self::with_kind(ObjectKind::Map(Vec::new()))
    }

    /// Empty Set
    pub fn set_collection() -> Self {
        Self::with_kind(ObjectKind::Set(Vec::new()))
    }

    /// Empty WeakMap
    pub fn weak_map() -> Self {
        Self::with_kind(ObjectKind::WeakMap)
    }

    /// Empty WeakSet
    pub fn weak_set() -> Self {
        Self::with_kind(ObjectKind::WeakSet)
    }

    /// `map.entries()`
    ///
    /// # Errors
    ///
    /// TypeError when `map` is not a Map.
    pub fn map_iterator(map: &JsObject) -> JsResult<Self> {
        if !matches!(*map.kind(), ObjectKind::Map(_)) {
            return Err(JsError::type_error("Method Map.prototype.entries called on incompatible receiver"));
        }
        Ok(Self::with_kind(ObjectKind::MapIterator(map.clone())))
    }

    /// `set.values()`
    ///
    /// # Errors
    ///
    /// TypeError when `set` is not a Set.
    pub fn set_iterator(set: &JsObject) -> JsResult<Self> {
        if !matches!(*set.kind(), ObjectKind::Set(_)) {
            return Err(JsError::type_error("Method Set.prototype.values called on incompatible receiver"));
        }
        Ok(Self::with_kind(ObjectKind::SetIterator(set.clone())))
    }

    /// `new ArrayBuffer(byte_length)`
    pub fn array_buffer(byte_length: usize) -> JsResult<Self> {
        Ok(Self::with_kind(ObjectKind::ArrayBuffer(ArrayBuffer::new(byte_length)?)))
    }

    /// `new SharedArrayBuffer(byte_length)`
    pub fn shared_array_buffer(byte_length: usize) -> JsResult<Self> {
        Ok(Self::with_kind(ObjectKind::SharedArrayBuffer(ArrayBuffer::new(byte_length)?)))
    }

    /// `new DataView(buffer, byte_offset, byte_length)`
    ///
    /// # Errors
    ///
    /// TypeError when `buffer` is not an ArrayBuffer or SharedArrayBuffer,
    /// RangeError when the view does not fit inside it.
    pub fn data_view(buffer: &JsObject, byte_offset: usize, byte_length: Option<usize>) -> JsResult<Self> {
        let storage = buffer.backing_store("DataView")?;
        let view = BufferView::new(storage, byte_offset, byte_length)?;
        Ok(Self::with_kind(ObjectKind::DataView(view)))
    }

    /// `new <Kind>Array(length)` over a fresh buffer
    pub fn typed_array(kind: TypedArrayKind, length: usize) -> JsResult<Self> {
        let byte_length = length
            .checked_mul(kind.bytes_per_element())
            .ok_or_else(|| JsError::range_error(format!("Invalid typed array length: {}", length)))?;
        let view = BufferView::new(ArrayBuffer::new(byte_length)?, 0, None)?;
        Ok(Self::with_kind(ObjectKind::TypedArray(kind, view)))
    }

    /// `new <Kind>Array(buffer, byte_offset, length)`
    ///
    /// # Errors
    ///
    /// TypeError when `buffer` is not an ArrayBuffer or SharedArrayBuffer.
    /// RangeError when the offset is misaligned, or the elements do not fit.
    pub fn typed_array_from_buffer(
        kind: TypedArrayKind,
        buffer: &JsObject,
        byte_offset: usize,
        length: Option<usize>,
    ) -> JsResult<Self> {
        let storage = buffer.backing_store(kind.name())?;
        let size = kind.bytes_per_element();
        if byte_offset % size != 0 {
            tracing::debug!(kind = kind.name(), byte_offset, "misaligned typed array offset");
            return Err(JsError::range_error(format!(
                "start offset of {} should be a multiple of {}",
                kind.name(),
                size
            )));
        }
        let byte_length = match length {
            Some(len) => Some(
                len.checked_mul(size)
                    .ok_or_else(|| JsError::range_error(format!("Invalid typed array length: {}", len)))?,
            ),
            None => {
                let rest = storage.byte_length().saturating_sub(byte_offset);
                if rest % size != 0 {
                    tracing::debug!(kind = kind.name(), rest, "typed array byte length not a multiple");
                    return Err(JsError::range_error(format!(
                        "byte length of {} should be a multiple of {}",
                        kind.name(),
                        size
                    )));
                }
                None
            }
        };
        let view = BufferView::new(storage, byte_offset, byte_length)?;
        Ok(Self::with_kind(ObjectKind::TypedArray(kind, view)))
    }

    /// Promise in the given state
    pub fn promise(state: PromiseState) -> Self {
        Self::with_kind(ObjectKind::Promise(state))
    }

    /// Generator object
    pub fn generator() -> Self {
        Self::with_kind(ObjectKind::Generator)
    }

    /// Module namespace object exposing `exports`
    pub fn module_namespace<I>(exports: I) -> Self
    where
        I: IntoIterator<Item = (String, Value)>,
    {
        let obj = Self::with_kind(ObjectKind::ModuleNamespace);
        obj.0.borrow_mut().properties.extend(exports);
        obj
    }

    /// Wrap an embedder collection
    pub fn host(collection: Rc<dyn HostCollection>) -> Self {
        Self::with_kind(ObjectKind::Host(collection))
    }

    /// The `Object(value)` conversion.
    ///
    /// Objects come back as the same reference, primitives are boxed in a
    /// fresh wrapper, and `undefined`/`null` produce a fresh empty object.
    pub fn wrap(value: &Value) -> Self {
        let kind = match value {
            Value::Object(o) => return o.clone(),
            Value::Undefined | Value::Null => ObjectKind::Ordinary,
            Value::Boolean(b) => ObjectKind::Boolean(*b),
            Value::Smi(n) => ObjectKind::Number(*n as f64),
            Value::Double(n) => ObjectKind::Number(*n),
            Value::String(s) => ObjectKind::String(s.clone()),
            Value::Symbol(s) => ObjectKind::Symbol(s.clone()),
            Value::BigInt(n) => ObjectKind::BigInt(n.clone()),
        };
        Self::with_kind(kind)
    }

    /// Borrow the internal kind
    pub fn kind(&self) -> Ref<'_, ObjectKind> {
        Ref::map(self.0.borrow(), |data| &data.kind)
    }

    /// Mutably borrow the internal kind, e.g. to push onto an array
    pub fn kind_mut(&self) -> RefMut<'_, ObjectKind> {
        RefMut::map(self.0.borrow_mut(), |data| &mut data.kind)
    }

    /// Whether the object has a `[[Call]]` slot
    pub fn is_callable(&self) -> bool {
        matches!(*self.kind(), ObjectKind::Function(_))
    }

    /// Read an own property
    pub fn get(&self, key: &str) -> Option<Value> {
        self.0.borrow().properties.get(key).cloned()
    }

    /// Write an own property
    pub fn set(&self, key: &str, value: Value) {
        self.0.borrow_mut().properties.insert(key.to_string(), value);
    }

    /// Snapshot of the own string-keyed properties, in no particular order
    pub fn own_properties(&self) -> Vec<(String, Value)> {
        self.0
            .borrow()
            .properties
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// Identity comparison
    pub fn ptr_eq(&self, other: &JsObject) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    fn backing_store(&self, constructor: &str) -> JsResult<ArrayBuffer> {
        match &*self.kind() {
            ObjectKind::ArrayBuffer(buffer) | ObjectKind::SharedArrayBuffer(buffer) => Ok(buffer.clone()),
            _ => Err(JsError::type_error(format!(
                "First argument to {} constructor must be an ArrayBuffer",
                constructor
            ))),
        }
    }
}

impl fmt::Debug for JsObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.try_borrow() {
            Ok(data) => write!(f, "JsObject({})", data.kind.name()),
            Err(_) => write!(f, "JsObject(<borrowed>)"),
        }
    }
}
