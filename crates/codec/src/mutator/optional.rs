//! Optional values
//!
//! Wire format: `[presence: u8]` then the inner value when presence is `1`.

use crate::codec::Codec;
use crate::error::{CodecError, CodecResult};
use crate::value::Value;
use byteorder::{ReadBytesExt, WriteBytesExt};
use fieldwire_core::CodecConfig;
use std::io::{Read, Write};

const ABSENT: u8 = 0;
const PRESENT: u8 = 1;

pub(crate) fn write<W: Write + ?Sized>(
    inner: &Codec,
    value: &Value,
    writer: &mut W,
    config: &CodecConfig,
) -> CodecResult<()> {
    match value {
        Value::Optional(None) => {
            writer.write_u8(ABSENT)?;
            Ok(())
        }
        Value::Optional(Some(v)) => {
            inner.check(v)?;
            writer.write_u8(PRESENT)?;
            inner.write(v, writer, config)
        }
        other => Err(CodecError::TypeMismatch {
            expected: format!("optional<{}>", inner),
            found: other.kind_name(),
        }),
    }
}

pub(crate) fn read<R: Read + ?Sized>(
    inner: &Codec,
    reader: &mut R,
    config: &CodecConfig,
) -> CodecResult<Value> {
    match reader.read_u8()? {
        ABSENT => Ok(Value::absent()),
        PRESENT => Ok(Value::some(inner.read(reader, config)?)),
        other => Err(CodecError::InvalidPresence(other)),
    }
}
