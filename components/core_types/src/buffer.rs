//! Binary data: ArrayBuffer storage, views over it, and typed-array kinds.
//!
//! Typed arrays and DataViews are both [`BufferView`]s; the typed-array
//! element kind lives beside the view in the owning object's kind.

use crate::error::{JsError, JsResult};
use crate::value::Value;
use num_bigint::BigInt;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Largest byte length an ArrayBuffer may be allocated with.
pub const MAX_BYTE_LENGTH: usize = 2_147_483_647;

/// ArrayBuffer - a fixed-length raw binary data buffer
///
/// Clones share the same bytes, so a view created over a buffer observes
/// later writes through any other view.
#[derive(Clone)]
pub struct ArrayBuffer {
    data: Rc<RefCell<Vec<u8>>>,
}

impl ArrayBuffer {
    /// Create a new zero-filled ArrayBuffer with the given byte length
    pub fn new(byte_length: usize) -> JsResult<Self> {
        if byte_length > MAX_BYTE_LENGTH {
            tracing::debug!(byte_length, "array buffer allocation rejected");
            return Err(JsError::range_error("Invalid array buffer length"));
        }
        Ok(ArrayBuffer {
            data: Rc::new(RefCell::new(vec![0u8; byte_length])),
        })
    }

    /// Get the byte length of the buffer
    pub fn byte_length(&self) -> usize {
        self.data.borrow().len()
    }

    /// Copy `bytes` into the buffer at `offset`.
    pub fn write(&self, offset: usize, bytes: &[u8]) -> JsResult<()> {
        let mut data = self.data.borrow_mut();
        let end = offset
            .checked_add(bytes.len())
            .filter(|end| *end <= data.len())
            .ok_or_else(|| JsError::range_error("Offset is outside the bounds of the buffer"))?;
        data[offset..end].copy_from_slice(bytes);
        Ok(())
    }

    /// Whether both handles refer to the same storage
    pub fn ptr_eq(&self, other: &ArrayBuffer) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }

    fn read(&self, offset: usize, len: usize) -> Vec<u8> {
        let data = self.data.borrow();
        let start = offset.min(data.len());
        let end = offset.saturating_add(len).min(data.len());
        data[start..end].to_vec()
    }
}

impl fmt::Debug for ArrayBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayBuffer")
            .field("byte_length", &self.byte_length())
            .finish()
    }
}

/// A window onto part of an [`ArrayBuffer`].
#[derive(Debug, Clone)]
pub struct BufferView {
    buffer: ArrayBuffer,
    byte_offset: usize,
    byte_length: usize,
}

impl BufferView {
    /// Create a view, checking that it lies inside the buffer.
    ///
    /// When `byte_length` is `None` the view extends to the end of the buffer.
    pub fn new(buffer: ArrayBuffer, byte_offset: usize, byte_length: Option<usize>) -> JsResult<Self> {
        let available = buffer.byte_length();
        if byte_offset > available {
            tracing::debug!(byte_offset, available, "view offset out of bounds");
            return Err(JsError::range_error(format!(
                "Start offset {} is outside the bounds of the buffer",
                byte_offset
            )));
        }
        let byte_length = match byte_length {
            Some(len) if byte_offset.checked_add(len).map_or(true, |end| end > available) => {
                tracing::debug!(byte_offset, len, available, "view length out of bounds");
                return Err(JsError::range_error(format!("Invalid view length {}", len)));
            }
            Some(len) => len,
            None => available - byte_offset,
        };
        Ok(BufferView {
            buffer,
            byte_offset,
            byte_length,
        })
    }

    /// The viewed buffer
    pub fn buffer(&self) -> &ArrayBuffer {
        &self.buffer
    }

    /// Offset of the first viewed byte
    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }

    /// Number of viewed bytes
    pub fn byte_length(&self) -> usize {
        self.byte_length
    }

    /// Snapshot of the viewed bytes
    pub fn bytes(&self) -> Vec<u8> {
        self.buffer.read(self.byte_offset, self.byte_length)
    }

    /// Decode the viewed bytes as consecutive elements of `kind`.
    pub fn elements(&self, kind: TypedArrayKind) -> Vec<Value> {
        self.bytes()
            .chunks_exact(kind.bytes_per_element())
            .map(|chunk| kind.decode(chunk))
            .collect()
    }
}

/// TypedArray element kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypedArrayKind {
    /// 8-bit signed integer
    Int8,
    /// 8-bit unsigned integer
    Uint8,
    /// 8-bit unsigned integer (clamped)
    Uint8Clamped,
    /// 16-bit signed integer
    Int16,
    /// 16-bit unsigned integer
    Uint16,
    /// 32-bit signed integer
    Int32,
    /// 32-bit unsigned integer
    Uint32,
    /// 16-bit floating point
    Float16,
    /// 32-bit floating point
    Float32,
    /// 64-bit floating point
    Float64,
    /// 64-bit signed BigInt
    BigInt64,
    /// 64-bit unsigned BigInt
    BigUint64,
}

impl TypedArrayKind {
    /// Every element kind, in constructor-table order.
    pub const ALL: [TypedArrayKind; 12] = [
        TypedArrayKind::Int8,
        TypedArrayKind::Uint8,
        TypedArrayKind::Uint8Clamped,
        TypedArrayKind::Int16,
        TypedArrayKind::Uint16,
        TypedArrayKind::Int32,
        TypedArrayKind::Uint32,
        TypedArrayKind::Float16,
        TypedArrayKind::Float32,
        TypedArrayKind::Float64,
        TypedArrayKind::BigInt64,
        TypedArrayKind::BigUint64,
    ];

    /// Get the byte size of each element for this kind
    pub fn bytes_per_element(&self) -> usize {
        match self {
            TypedArrayKind::Int8 | TypedArrayKind::Uint8 | TypedArrayKind::Uint8Clamped => 1,
            TypedArrayKind::Int16 | TypedArrayKind::Uint16 | TypedArrayKind::Float16 => 2,
            TypedArrayKind::Int32 | TypedArrayKind::Uint32 | TypedArrayKind::Float32 => 4,
            TypedArrayKind::Float64
            | TypedArrayKind::BigInt64
            | TypedArrayKind::BigUint64 => 8,
        }
    }

    /// Get the constructor name of this TypedArray kind
    pub fn name(&self) -> &'static str {
        match self {
            TypedArrayKind::Int8 => "Int8Array",
            TypedArrayKind::Uint8 => "Uint8Array",
            TypedArrayKind::Uint8Clamped => "Uint8ClampedArray",
            TypedArrayKind::Int16 => "Int16Array",
            TypedArrayKind::Uint16 => "Uint16Array",
            TypedArrayKind::Int32 => "Int32Array",
            TypedArrayKind::Uint32 => "Uint32Array",
            TypedArrayKind::Float16 => "Float16Array",
            TypedArrayKind::Float32 => "Float32Array",
            TypedArrayKind::Float64 => "Float64Array",
            TypedArrayKind::BigInt64 => "BigInt64Array",
            TypedArrayKind::BigUint64 => "BigUint64Array",
        }
    }

    /// Look up a kind by its constructor name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Decode one little-endian element.
    ///
    /// `bytes` must hold at least [`bytes_per_element`](Self::bytes_per_element) bytes.
    pub fn decode(&self, bytes: &[u8]) -> Value {
        match self {
            TypedArrayKind::Int8 => Value::Smi(i8::from_le_bytes(le(bytes)) as i32),
            TypedArrayKind::Uint8 | TypedArrayKind::Uint8Clamped => Value::Smi(bytes[0] as i32),
            TypedArrayKind::Int16 => Value::Smi(i16::from_le_bytes(le(bytes)) as i32),
            TypedArrayKind::Uint16 => Value::Smi(u16::from_le_bytes(le(bytes)) as i32),
            TypedArrayKind::Int32 => Value::Smi(i32::from_le_bytes(le(bytes))),
            TypedArrayKind::Uint32 => Value::number(u32::from_le_bytes(le(bytes)) as f64),
            TypedArrayKind::Float16 => Value::number(half::f16::from_le_bytes(le(bytes)).to_f64()),
            TypedArrayKind::Float32 => Value::number(f32::from_le_bytes(le(bytes)) as f64),
            TypedArrayKind::Float64 => Value::number(f64::from_le_bytes(le(bytes))),
            TypedArrayKind::BigInt64 => Value::BigInt(BigInt::from(i64::from_le_bytes(le(bytes)))),
            TypedArrayKind::BigUint64 => Value::BigInt(BigInt::from(u64::from_le_bytes(le(bytes)))),
        }
    }
}

fn le<const N: usize>(bytes: &[u8]) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(&bytes[..N]);
    out
}
