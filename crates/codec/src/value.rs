//! Logical values carried by record fields
//!
//! ## Value model
//!
//! - One variant per primitive: `Bool`, `U8`..`U64`, `I8`..`I64`, `F32`, `F64`
//! - `Text`: UTF-8 string produced by a text container
//! - `Seq`: list produced by a list container
//! - `Record`: nested record
//! - `Optional`: a value that may be absent
//!
//! A value never records how it is encoded; the field's codec decides that.
//!
//! ## Equality and ordering
//!
//! `PartialEq`/`PartialOrd` go through the comparator's value routine:
//! integers compare numerically across widths, floats follow IEEE-754
//! (`NaN != NaN`), and an absent optional sorts before any present value.

use crate::compare::compare_values;
use crate::record::Record;
use std::cmp::Ordering;
use std::fmt;

/// Primitive wire types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    /// One byte, `0` or `1`
    Bool,
    /// Unsigned 8-bit integer
    U8,
    /// Unsigned 16-bit integer
    U16,
    /// Unsigned 32-bit integer
    U32,
    /// Unsigned 64-bit integer
    U64,
    /// Signed 8-bit integer
    I8,
    /// Signed 16-bit integer
    I16,
    /// Signed 32-bit integer
    I32,
    /// Signed 64-bit integer
    I64,
    /// IEEE-754 single precision
    F32,
    /// IEEE-754 double precision
    F64,
}

impl Primitive {
    /// Encoded width in bytes
    pub const fn width(self) -> usize {
        match self {
            Primitive::Bool | Primitive::U8 | Primitive::I8 => 1,
            Primitive::U16 | Primitive::I16 => 2,
            Primitive::U32 | Primitive::I32 | Primitive::F32 => 4,
            Primitive::U64 | Primitive::I64 | Primitive::F64 => 8,
        }
    }

    /// True for the integer types (not `Bool`, not floats)
    pub const fn is_integer(self) -> bool {
        !matches!(self, Primitive::Bool | Primitive::F32 | Primitive::F64)
    }

    /// True for `F32` and `F64`
    pub const fn is_float(self) -> bool {
        matches!(self, Primitive::F32 | Primitive::F64)
    }

    /// Type name as used in codec descriptions
    pub const fn name(self) -> &'static str {
        match self {
            Primitive::Bool => "bool",
            Primitive::U8 => "u8",
            Primitive::U16 => "u16",
            Primitive::U32 => "u32",
            Primitive::U64 => "u64",
            Primitive::I8 => "i8",
            Primitive::I16 => "i16",
            Primitive::I32 => "i32",
            Primitive::I64 => "i64",
            Primitive::F32 => "f32",
            Primitive::F64 => "f64",
        }
    }

    /// Zero value of this type
    pub fn default_value(self) -> Value {
        match self {
            Primitive::Bool => Value::Bool(false),
            Primitive::U8 => Value::U8(0),
            Primitive::U16 => Value::U16(0),
            Primitive::U32 => Value::U32(0),
            Primitive::U64 => Value::U64(0),
            Primitive::I8 => Value::I8(0),
            Primitive::I16 => Value::I16(0),
            Primitive::I32 => Value::I32(0),
            Primitive::I64 => Value::I64(0),
            Primitive::F32 => Value::F32(0.0),
            Primitive::F64 => Value::F64(0.0),
        }
    }

    /// Convert an element count to a value of this type
    ///
    /// Returns `None` for non-integer types or when the count does not fit.
    pub fn count_value(self, count: usize) -> Option<Value> {
        let value = match self {
            Primitive::U8 => Value::U8(u8::try_from(count).ok()?),
            Primitive::U16 => Value::U16(u16::try_from(count).ok()?),
            Primitive::U32 => Value::U32(u32::try_from(count).ok()?),
            Primitive::U64 => Value::U64(u64::try_from(count).ok()?),
            Primitive::I8 => Value::I8(i8::try_from(count).ok()?),
            Primitive::I16 => Value::I16(i16::try_from(count).ok()?),
            Primitive::I32 => Value::I32(i32::try_from(count).ok()?),
            Primitive::I64 => Value::I64(i64::try_from(count).ok()?),
            Primitive::Bool | Primitive::F32 | Primitive::F64 => return None,
        };
        Some(value)
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Runtime value of a field
#[derive(Debug, Clone)]
pub enum Value {
    /// Boolean
    Bool(bool),
    /// Unsigned 8-bit integer
    U8(u8),
    /// Unsigned 16-bit integer
    U16(u16),
    /// Unsigned 32-bit integer
    U32(u32),
    /// Unsigned 64-bit integer
    U64(u64),
    /// Signed 8-bit integer
    I8(i8),
    /// Signed 16-bit integer
    I16(i16),
    /// Signed 32-bit integer
    I32(i32),
    /// Signed 64-bit integer
    I64(i64),
    /// Single precision float
    F32(f32),
    /// Double precision float
    F64(f64),
    /// UTF-8 text
    Text(String),
    /// Ordered list of values
    Seq(Vec<Value>),
    /// Nested record
    Record(Record),
    /// Value that may be absent
    Optional(Option<Box<Value>>),
}

impl Value {
    /// Primitive type of this value, if it is a primitive
    pub fn primitive(&self) -> Option<Primitive> {
        let p = match self {
            Value::Bool(_) => Primitive::Bool,
            Value::U8(_) => Primitive::U8,
            Value::U16(_) => Primitive::U16,
            Value::U32(_) => Primitive::U32,
            Value::U64(_) => Primitive::U64,
            Value::I8(_) => Primitive::I8,
            Value::I16(_) => Primitive::I16,
            Value::I32(_) => Primitive::I32,
            Value::I64(_) => Primitive::I64,
            Value::F32(_) => Primitive::F32,
            Value::F64(_) => Primitive::F64,
            _ => return None,
        };
        Some(p)
    }

    /// Get the kind name as a string
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Text(_) => "text",
            Value::Seq(_) => "seq",
            Value::Record(_) => "record",
            Value::Optional(_) => "optional",
            _ => self.primitive().map(Primitive::name).unwrap_or("unknown"),
        }
    }

    /// Presence check
    ///
    /// Only an absent optional is not present; every other value is.
    pub fn is_present(&self) -> bool {
        !matches!(self, Value::Optional(None))
    }

    /// Build an absent optional
    pub fn absent() -> Self {
        Value::Optional(None)
    }

    /// Build a present optional
    pub fn some(value: Value) -> Self {
        Value::Optional(Some(Box::new(value)))
    }

    /// Build a list of `u8` values from bytes
    pub fn bytes(bytes: &[u8]) -> Self {
        Value::Seq(bytes.iter().copied().map(Value::U8).collect())
    }

    /// Integer value widened to `i128`
    pub fn as_i128(&self) -> Option<i128> {
        match *self {
            Value::U8(v) => Some(v.into()),
            Value::U16(v) => Some(v.into()),
            Value::U32(v) => Some(v.into()),
            Value::U64(v) => Some(v.into()),
            Value::I8(v) => Some(v.into()),
            Value::I16(v) => Some(v.into()),
            Value::I32(v) => Some(v.into()),
            Value::I64(v) => Some(v.into()),
            _ => None,
        }
    }

    /// Numeric value as `f64`
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Value::F32(v) => Some(v.into()),
            Value::F64(v) => Some(v),
            _ => self.as_i128().map(|v| v as f64),
        }
    }

    /// Get as text if this is a Text value
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get as a slice if this is a Seq value
    pub fn as_seq(&self) -> Option<&[Value]> {
        match self {
            Value::Seq(items) => Some(items),
            _ => None,
        }
    }

    /// Get as a record if this is a Record value
    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Value::Record(r) => Some(r),
            _ => None,
        }
    }

    /// Get as a mutable record if this is a Record value
    pub fn as_record_mut(&mut self) -> Option<&mut Record> {
        match self {
            Value::Record(r) => Some(r),
            _ => None,
        }
    }

    /// Reverse the bytes of a primitive's in-memory representation
    ///
    /// Floats are reversed through their bit pattern. Non-primitive values
    /// are returned unchanged.
    pub fn swap_bytes(&self) -> Value {
        match *self {
            Value::U16(v) => Value::U16(v.swap_bytes()),
            Value::U32(v) => Value::U32(v.swap_bytes()),
            Value::U64(v) => Value::U64(v.swap_bytes()),
            Value::I16(v) => Value::I16(v.swap_bytes()),
            Value::I32(v) => Value::I32(v.swap_bytes()),
            Value::I64(v) => Value::I64(v.swap_bytes()),
            Value::F32(v) => Value::F32(f32::from_bits(v.to_bits().swap_bytes())),
            Value::F64(v) => Value::F64(f64::from_bits(v.to_bits().swap_bytes())),
            // single-byte values and non-primitives
            _ => self.clone(),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        compare_values(self, other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        compare_values(self, other)
    }
}

macro_rules! impl_from_primitive {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::$variant(v)
                }
            }
        )*
    };
}

impl_from_primitive! {
    bool => Bool,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    f32 => F32,
    f64 => F64,
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Seq(items)
    }
}

impl From<Record> for Value {
    fn from(r: Record) -> Self {
        Value::Record(r)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        Value::Optional(v.map(|v| Box::new(v.into())))
    }
}
