//! Field codecs
//!
//! A [`Codec`] describes how one field's value goes on the wire. Codecs are a
//! closed set of variants that nest by value:
//!
//! - `Plain`: a primitive in host representation
//! - `Endian`: byte-order mutator over an inner codec
//! - `LengthPrefixed`: count-prefixed container
//! - `Terminated`: sentinel-terminated container
//! - `Optional`: presence byte plus the inner value
//! - `Record`: nested record
//!
//! Nesting `A<B<T>>` applies A outermost on write and B's inverse first on
//! read, so encode and decode are mirror-image compositions.
//!
//! # Example
//!
//! ```
//! use fieldwire_codec::Codec;
//! use fieldwire_core::ByteOrder;
//!
//! // u32 count, big-endian on the wire, followed by u8 elements
//! let codec = Codec::length_prefixed(Codec::big(Codec::u32()), Codec::u8());
//! assert!(codec.validate().is_ok());
//! assert_eq!(codec.to_string(), "prefixed<big<u32>, u8>");
//!
//! // endian over a list is rejected
//! assert!(Codec::endian(ByteOrder::Little, codec).validate().is_err());
//! ```

use crate::engine;
use crate::error::{CodecError, CodecResult};
use crate::mutator::{endian, length_prefixed, optional, terminated, Collect};
use crate::primitive::{read_primitive, write_primitive};
use crate::record::Record;
use crate::schema::RecordSchema;
use crate::value::{Primitive, Value};
use fieldwire_core::{ByteOrder, CodecConfig, DefinitionError, DefinitionResult};
use std::fmt;
use std::io::{Read, Write};
use std::sync::Arc;

/// Wire encoding of one field
#[derive(Debug, Clone)]
pub enum Codec {
    /// Primitive in host representation
    Plain(Primitive),

    /// Byte-order mutator
    Endian {
        /// Wire byte order
        order: ByteOrder,
        /// Wrapped codec; must resolve to a primitive
        inner: Box<Codec>,
    },

    /// Length-prefixed container
    LengthPrefixed {
        /// Codec for the element count; must resolve to an integer
        size: Box<Codec>,
        /// Codec for each element
        element: Box<Codec>,
        /// Whether elements collect into a list or UTF-8 text
        collect: Collect,
    },

    /// Sentinel-terminated container
    Terminated {
        /// Codec for each element; must resolve to a primitive
        element: Box<Codec>,
        /// Value that ends the sequence; never part of the decoded value
        sentinel: Value,
        /// Whether elements collect into a list or UTF-8 text
        collect: Collect,
    },

    /// Presence byte followed by the inner value when present
    Optional(Box<Codec>),

    /// Nested record
    Record(Arc<RecordSchema>),
}

impl Codec {
    /// Plain primitive
    pub fn plain(primitive: Primitive) -> Self {
        Codec::Plain(primitive)
    }

    /// Plain `bool`
    pub fn bool() -> Self {
        Codec::Plain(Primitive::Bool)
    }

    /// Plain `u8`
    pub fn u8() -> Self {
        Codec::Plain(Primitive::U8)
    }

    /// Plain `u16`
    pub fn u16() -> Self {
        Codec::Plain(Primitive::U16)
    }

    /// Plain `u32`
    pub fn u32() -> Self {
        Codec::Plain(Primitive::U32)
    }

    /// Plain `u64`
    pub fn u64() -> Self {
        Codec::Plain(Primitive::U64)
    }

    /// Plain `i8`
    pub fn i8() -> Self {
        Codec::Plain(Primitive::I8)
    }

    /// Plain `i16`
    pub fn i16() -> Self {
        Codec::Plain(Primitive::I16)
    }

    /// Plain `i32`
    pub fn i32() -> Self {
        Codec::Plain(Primitive::I32)
    }

    /// Plain `i64`
    pub fn i64() -> Self {
        Codec::Plain(Primitive::I64)
    }

    /// Plain `f32`
    pub fn f32() -> Self {
        Codec::Plain(Primitive::F32)
    }

    /// Plain `f64`
    pub fn f64() -> Self {
        Codec::Plain(Primitive::F64)
    }

    /// Byte-order mutator over `inner`
    pub fn endian(order: ByteOrder, inner: Codec) -> Self {
        Codec::Endian {
            order,
            inner: Box::new(inner),
        }
    }

    /// Little-endian mutator over `inner`
    pub fn little(inner: Codec) -> Self {
        Codec::endian(ByteOrder::Little, inner)
    }

    /// Big-endian mutator over `inner`
    pub fn big(inner: Codec) -> Self {
        Codec::endian(ByteOrder::Big, inner)
    }

    /// Length-prefixed list of `element`
    pub fn length_prefixed(size: Codec, element: Codec) -> Self {
        Codec::LengthPrefixed {
            size: Box::new(size),
            element: Box::new(element),
            collect: Collect::List,
        }
    }

    /// Sentinel-terminated list of `element`
    pub fn terminated(element: Codec, sentinel: impl Into<Value>) -> Self {
        Codec::Terminated {
            element: Box::new(element),
            sentinel: sentinel.into(),
            collect: Collect::List,
        }
    }

    /// Length-prefixed UTF-8 text
    pub fn string(size: Codec) -> Self {
        Codec::LengthPrefixed {
            size: Box::new(size),
            element: Box::new(Codec::u8()),
            collect: Collect::Text,
        }
    }

    /// NUL-terminated UTF-8 text
    pub fn null_string() -> Self {
        Codec::Terminated {
            element: Box::new(Codec::u8()),
            sentinel: Value::U8(0),
            collect: Collect::Text,
        }
    }

    /// Length-prefixed wide text: one little-endian `u32` per character
    pub fn wstring(size: Codec) -> Self {
        Codec::LengthPrefixed {
            size: Box::new(size),
            element: Box::new(Codec::little(Codec::u32())),
            collect: Collect::WideText,
        }
    }

    /// Wide text ended by a zero little-endian `u32`
    pub fn null_wstring() -> Self {
        Codec::Terminated {
            element: Box::new(Codec::little(Codec::u32())),
            sentinel: Value::U32(0),
            collect: Collect::WideText,
        }
    }

    /// Optional value
    pub fn optional(inner: Codec) -> Self {
        Codec::Optional(Box::new(inner))
    }

    /// Nested record
    pub fn record(schema: Arc<RecordSchema>) -> Self {
        Codec::Record(schema)
    }

    /// Primitive this codec resolves to, looking through endian mutators
    pub fn scalar(&self) -> Option<Primitive> {
        match self {
            Codec::Plain(p) => Some(*p),
            Codec::Endian { inner, .. } => inner.scalar(),
            _ => None,
        }
    }

    /// Check the definition-time rules for this codec and everything it wraps
    pub fn validate(&self) -> DefinitionResult<()> {
        match self {
            Codec::Plain(_) | Codec::Record(_) => Ok(()),
            Codec::Endian { inner, .. } => {
                inner.validate()?;
                if inner.scalar().is_none() {
                    return Err(DefinitionError::InvalidMutator(format!(
                        "endian mutator requires a primitive, found {}",
                        inner
                    )));
                }
                Ok(())
            }
            Codec::LengthPrefixed {
                size,
                element,
                collect,
            } => {
                size.validate()?;
                element.validate()?;
                match size.scalar() {
                    Some(p) if p.is_integer() => {}
                    _ => {
                        return Err(DefinitionError::InvalidMutator(format!(
                            "container size must be an integer, found {}",
                            size
                        )))
                    }
                }
                collect.validate_element(element)
            }
            Codec::Terminated {
                element,
                sentinel,
                collect,
            } => {
                element.validate()?;
                let primitive = element.scalar().ok_or_else(|| {
                    DefinitionError::InvalidMutator(format!(
                        "terminated container requires a primitive element, found {}",
                        element
                    ))
                })?;
                if sentinel.primitive() != Some(primitive) {
                    return Err(DefinitionError::InvalidSentinel(format!(
                        "sentinel {:?} is not a {}",
                        sentinel, primitive
                    )));
                }
                if sentinel.as_f64().map_or(false, f64::is_nan) {
                    return Err(DefinitionError::InvalidSentinel(
                        "sentinel never compares equal to itself".to_string(),
                    ));
                }
                collect.validate_element(element)
            }
            Codec::Optional(inner) => inner.validate(),
        }
    }

    /// Default value for a freshly created record
    pub fn default_value(&self) -> Value {
        match self {
            Codec::Plain(p) => p.default_value(),
            Codec::Endian { inner, .. } => inner.default_value(),
            Codec::LengthPrefixed { collect, .. } | Codec::Terminated { collect, .. } => {
                collect.empty()
            }
            Codec::Optional(_) => Value::absent(),
            Codec::Record(schema) => Value::Record(Record::new(schema.clone())),
        }
    }

    /// Check that `value` has the logical type this codec carries
    pub fn check(&self, value: &Value) -> CodecResult<()> {
        let ok = match (self, value) {
            (Codec::Plain(p), v) => v.primitive() == Some(*p),
            (Codec::Endian { inner, .. }, v) => return inner.check(v),
            (
                Codec::LengthPrefixed {
                    element, collect, ..
                }
                | Codec::Terminated {
                    element, collect, ..
                },
                v,
            ) => match (collect, v) {
                (Collect::List, Value::Seq(items)) => {
                    for item in items {
                        element.check(item)?;
                    }
                    true
                }
                (Collect::Text | Collect::WideText, Value::Text(_)) => true,
                _ => false,
            },
            (Codec::Optional(_), Value::Optional(None)) => true,
            (Codec::Optional(inner), Value::Optional(Some(v))) => return inner.check(v),
            (Codec::Record(schema), Value::Record(r)) => Arc::ptr_eq(schema, r.schema()),
            _ => false,
        };

        if ok {
            Ok(())
        } else {
            Err(self.mismatch(value))
        }
    }

    pub(crate) fn mismatch(&self, value: &Value) -> CodecError {
        CodecError::TypeMismatch {
            expected: self.to_string(),
            found: value.kind_name(),
        }
    }

    /// Encode `value` to `writer`
    pub fn write<W: Write + ?Sized>(
        &self,
        value: &Value,
        writer: &mut W,
        config: &CodecConfig,
    ) -> CodecResult<()> {
        match self {
            Codec::Plain(p) => write_primitive(*p, value, &config.host, writer),
            Codec::Endian { order, inner } => endian::write(*order, inner, value, writer, config),
            Codec::LengthPrefixed {
                size,
                element,
                collect,
            } => length_prefixed::write(size, element, *collect, value, writer, config),
            Codec::Terminated {
                element,
                sentinel,
                collect,
            } => terminated::write(element, sentinel, *collect, value, writer, config),
            Codec::Optional(inner) => optional::write(inner, value, writer, config),
            Codec::Record(schema) => match value {
                Value::Record(r) if Arc::ptr_eq(schema, r.schema()) => {
                    engine::write_record(r, writer, config)
                }
                other => Err(self.mismatch(other)),
            },
        }
    }

    /// Decode a value from `reader`
    pub fn read<R: Read + ?Sized>(
        &self,
        reader: &mut R,
        config: &CodecConfig,
    ) -> CodecResult<Value> {
        match self {
            Codec::Plain(p) => read_primitive(*p, &config.host, reader),
            Codec::Endian { order, inner } => endian::read(*order, inner, reader, config),
            Codec::LengthPrefixed {
                size,
                element,
                collect,
            } => length_prefixed::read(size, element, *collect, reader, config),
            Codec::Terminated {
                element,
                sentinel,
                collect,
            } => terminated::read(element, sentinel, *collect, reader, config),
            Codec::Optional(inner) => optional::read(inner, reader, config),
            Codec::Record(schema) => {
                let mut record = Record::new(schema.clone());
                engine::read_record(reader, &mut record, config)?;
                Ok(Value::Record(record))
            }
        }
    }
}

impl fmt::Display for Codec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Codec::Plain(p) => write!(f, "{}", p),
            Codec::Endian { order, inner } => write!(f, "{}<{}>", order, inner),
            Codec::LengthPrefixed {
                size,
                element,
                collect,
            } => match collect {
                Collect::List => write!(f, "prefixed<{}, {}>", size, element),
                Collect::Text => write!(f, "string<{}>", size),
                Collect::WideText => write!(f, "wstring<{}>", size),
            },
            Codec::Terminated {
                element,
                sentinel,
                collect,
            } => match collect {
                Collect::List => write!(f, "terminated<{}, {:?}>", element, sentinel),
                Collect::Text => write!(f, "terminated_string<{}, {:?}>", element, sentinel),
                Collect::WideText => write!(f, "terminated_wstring<{}, {:?}>", element, sentinel),
            },
            Codec::Optional(inner) => write!(f, "optional<{}>", inner),
            Codec::Record(schema) => write!(f, "record {}", schema.name()),
        }
    }
}
