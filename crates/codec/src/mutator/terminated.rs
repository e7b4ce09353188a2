//! Sentinel-terminated container
//!
//! Wire format: `[element]* [sentinel]`. The sentinel is compared against
//! decoded (logical) element values, so it works through endian mutators.

use super::{Collect, Elements};
use crate::codec::Codec;
use crate::error::{CodecError, CodecResult};
use crate::value::Value;
use fieldwire_core::CodecConfig;
use std::io::{Read, Write};

pub(crate) fn write<W: Write + ?Sized>(
    element: &Codec,
    sentinel: &Value,
    collect: Collect,
    value: &Value,
    writer: &mut W,
    config: &CodecConfig,
) -> CodecResult<()> {
    let elements = Elements::of(collect, element, value)?;

    // An embedded sentinel would end the sequence early on read
    elements.try_for_each(|item| {
        if item == sentinel {
            Err(CodecError::SentinelInSequence)
        } else {
            Ok(())
        }
    })?;

    elements.try_for_each(|item| element.write(item, writer, config))?;
    element.write(sentinel, writer, config)
}

pub(crate) fn read<R: Read + ?Sized>(
    element: &Codec,
    sentinel: &Value,
    collect: Collect,
    reader: &mut R,
    config: &CodecConfig,
) -> CodecResult<Value> {
    let mut items = Vec::new();
    loop {
        let item = match element.read(reader, config) {
            Ok(item) => item,
            Err(CodecError::InsufficientData) => return Err(CodecError::UnterminatedSequence),
            Err(e) => return Err(e),
        };
        if item == *sentinel {
            break;
        }
        items.push(item);
        config.limits.check_sequence_len(items.len())?;
    }
    collect.finish(items)
}
