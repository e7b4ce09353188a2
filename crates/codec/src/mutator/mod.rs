//! Mutators
//!
//! A mutator intercepts the encode/decode of an inner codec without changing
//! the logical type the field carries:
//!
//! - [`endian`]: reverses a primitive's bytes when the wire order differs
//!   from the host order
//! - [`length_prefixed`]: count followed by the elements
//! - [`terminated`]: elements followed by a sentinel
//! - [`optional`]: presence byte followed by the value
//!
//! Any inner failure short-circuits the mutator and propagates unchanged.

pub mod endian;
pub mod length_prefixed;
pub mod optional;
pub mod terminated;

use crate::codec::Codec;
use crate::error::{CodecError, CodecResult};
use crate::value::{Primitive, Value};
use fieldwire_core::{DefinitionError, DefinitionResult};

/// Upper bound on capacity reserved up front for a decoded container
pub(crate) const PREALLOC_LIMIT: usize = 4096;

/// What a container collects its elements into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collect {
    /// `Value::Seq`
    List,
    /// `Value::Text`; elements must be `u8` and form valid UTF-8
    Text,
    /// `Value::Text`; elements must be `u32`, one Unicode scalar each
    WideText,
}

impl Collect {
    /// Empty container value
    pub fn empty(self) -> Value {
        match self {
            Collect::List => Value::Seq(Vec::new()),
            Collect::Text | Collect::WideText => Value::Text(String::new()),
        }
    }

    pub(crate) fn validate_element(self, element: &Codec) -> DefinitionResult<()> {
        let required = match self {
            Collect::List => return Ok(()),
            Collect::Text => Primitive::U8,
            Collect::WideText => Primitive::U32,
        };
        if element.scalar() != Some(required) {
            return Err(DefinitionError::InvalidMutator(format!(
                "text container requires {} elements, found {}",
                required, element
            )));
        }
        Ok(())
    }

    /// Build the container value from decoded elements
    pub(crate) fn finish(self, items: Vec<Value>) -> CodecResult<Value> {
        match self {
            Collect::List => Ok(Value::Seq(items)),
            Collect::Text => {
                let bytes = items
                    .into_iter()
                    .map(|v| match v {
                        Value::U8(b) => Ok(b),
                        other => Err(CodecError::TypeMismatch {
                            expected: "u8".to_string(),
                            found: other.kind_name(),
                        }),
                    })
                    .collect::<CodecResult<Vec<u8>>>()?;
                String::from_utf8(bytes)
                    .map(Value::Text)
                    .map_err(|_| CodecError::InvalidUtf8)
            }
            Collect::WideText => items
                .into_iter()
                .map(|v| match v {
                    Value::U32(c) => char::from_u32(c).ok_or(CodecError::InvalidCodePoint(c)),
                    other => Err(CodecError::TypeMismatch {
                        expected: "u32".to_string(),
                        found: other.kind_name(),
                    }),
                })
                .collect::<CodecResult<String>>()
                .map(Value::Text),
        }
    }
}

/// Borrowed view of a container value's elements
pub(crate) enum Elements<'a> {
    List(&'a [Value]),
    Bytes(&'a [u8]),
    Chars(&'a str),
}

impl<'a> Elements<'a> {
    /// View `value` as the elements of a `collect` container
    pub(crate) fn of(collect: Collect, codec: &Codec, value: &'a Value) -> CodecResult<Self> {
        match (collect, value) {
            (Collect::List, Value::Seq(items)) => Ok(Elements::List(items)),
            (Collect::Text, Value::Text(s)) => Ok(Elements::Bytes(s.as_bytes())),
            (Collect::WideText, Value::Text(s)) => Ok(Elements::Chars(s)),
            (_, other) => Err(codec.mismatch(other)),
        }
    }

    pub(crate) fn len(&self) -> usize {
        match self {
            Elements::List(items) => items.len(),
            Elements::Bytes(bytes) => bytes.len(),
            Elements::Chars(text) => text.chars().count(),
        }
    }

    /// Call `f` on each element in order, stopping at the first error
    pub(crate) fn try_for_each<F>(&self, mut f: F) -> CodecResult<()>
    where
        F: FnMut(&Value) -> CodecResult<()>,
    {
        match self {
            Elements::List(items) => items.iter().try_for_each(f),
            Elements::Bytes(bytes) => bytes.iter().try_for_each(|b| f(&Value::U8(*b))),
            Elements::Chars(text) => text.chars().try_for_each(|c| f(&Value::U32(c.into()))),
        }
    }
}
