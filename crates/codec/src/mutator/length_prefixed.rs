//! Length-prefixed container
//!
//! Wire format: `[count: size codec][element]*count`. The size codec is an
//! ordinary codec and may carry its own mutators.

use super::{Collect, Elements, PREALLOC_LIMIT};
use crate::codec::Codec;
use crate::error::{CodecError, CodecResult};
use crate::value::Value;
use fieldwire_core::CodecConfig;
use std::io::{Read, Write};

pub(crate) fn write<W: Write + ?Sized>(
    size: &Codec,
    element: &Codec,
    collect: Collect,
    value: &Value,
    writer: &mut W,
    config: &CodecConfig,
) -> CodecResult<()> {
    let elements = Elements::of(collect, element, value)?;
    let count = elements.len();

    // Validated schemas always resolve the size codec to an integer
    let count_value = size
        .scalar()
        .and_then(|p| p.count_value(count))
        .ok_or_else(|| CodecError::SizeOverflow {
            count,
            size: size.to_string(),
        })?;

    size.write(&count_value, writer, config)?;
    elements.try_for_each(|item| element.write(item, writer, config))
}

pub(crate) fn read<R: Read + ?Sized>(
    size: &Codec,
    element: &Codec,
    collect: Collect,
    reader: &mut R,
    config: &CodecConfig,
) -> CodecResult<Value> {
    let count = decode_count(&size.read(reader, config)?, config.limits.max_sequence_len)?;

    let mut items = Vec::with_capacity(count.min(PREALLOC_LIMIT));
    for _ in 0..count {
        items.push(element.read(reader, config)?);
    }
    collect.finish(items)
}

/// Interpret a decoded size value as an element count no larger than `max`
fn decode_count(value: &Value, max: usize) -> CodecResult<usize> {
    let raw = value.as_i128().ok_or_else(|| CodecError::TypeMismatch {
        expected: "integer size".to_string(),
        found: value.kind_name(),
    })?;
    if raw < 0 {
        // sizes are at most 64 bits wide
        return Err(CodecError::NegativeSize(raw as i64));
    }
    match usize::try_from(raw) {
        Ok(count) if count <= max => Ok(count),
        // a count beyond usize saturates in the report
        length => Err(CodecError::SequenceTooLong {
            length: length.unwrap_or(usize::MAX),
            max,
        }),
    }
}
