//! Core JavaScript value types and error handling.
//!
//! This crate provides the value model of the runtime: primitive values,
//! heap objects with their internal kind, binary buffers, and the error
//! type used when constructing values fails.
//!
//! # Overview
//!
//! - [`Value`] - Any JavaScript value
//! - [`JsObject`] - Shared reference to a heap object
//! - [`ObjectKind`] - Internal slots of an object, which fix its built-in kind
//! - [`ArrayBuffer`], [`BufferView`], [`TypedArrayKind`] - Binary data
//! - [`HostCollection`] - Live indexed collections provided by an embedder
//! - [`JsError`] - JavaScript errors raised by value construction
//!
//! # Examples
//!
//! ```
//! use core_types::{JsObject, Value};
//!
//! let num = Value::Smi(42);
//! assert!(num.is_truthy());
//! assert_eq!(num.type_of(), "number");
//!
//! let list = Value::array(vec![Value::from(1), Value::from("two")]);
//! assert_eq!(list.type_of(), "object");
//!
//! let buffer = JsObject::array_buffer(8).unwrap();
//! assert_eq!(Value::from(buffer).type_of(), "object");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod buffer;
mod error;
mod object;
mod value;

pub use buffer::{ArrayBuffer, BufferView, TypedArrayKind};
pub use error::{ErrorKind, JsError, JsResult};
pub use object::{FunctionKind, HostCollection, JsObject, ObjectData, ObjectKind, PromiseState};
pub use value::{Symbol, Value};
