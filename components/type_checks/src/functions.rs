//! Functions and control abstractions: generators and promises.

use crate::gates::{function_tagged, object_tagged};
use crate::tag::Tag;
use core_types::Value;

/// A plain function. Generator and async functions do not count.
pub fn is_ordinary_function(value: &Value) -> bool {
    function_tagged(value, Tag::Function)
}

/// `function*`
pub fn is_generator_function(value: &Value) -> bool {
    function_tagged(value, Tag::GeneratorFunction)
}

/// `async function`
pub fn is_async_function(value: &Value) -> bool {
    function_tagged(value, Tag::AsyncFunction)
}

/// The object returned by calling a generator function
pub fn is_generator_object(value: &Value) -> bool {
    object_tagged(value, Tag::Generator)
}

/// `Promise`
pub fn is_promise(value: &Value) -> bool {
    object_tagged(value, Tag::Promise)
}
