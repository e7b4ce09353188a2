//! Plain primitive transfer
//!
//! A plain primitive is emitted as its in-memory representation: integers
//! (and `bool`) in the host integer order, floats in the host float word
//! order. The fixed-width transfers go through `byteorder`.

use crate::error::{CodecError, CodecResult};
use crate::value::{Primitive, Value};
use byteorder::{BigEndian, LittleEndian, ReadBytesExt, WriteBytesExt};
use fieldwire_core::{ByteOrder, HostOrder};
use std::io::{Read, Write};

/// Host order that applies to a primitive
pub(crate) fn host_order_for(primitive: Primitive, host: &HostOrder) -> ByteOrder {
    if primitive.is_float() {
        host.float
    } else {
        host.integer
    }
}

/// Write a primitive value in host representation
pub(crate) fn write_primitive<W: Write + ?Sized>(
    primitive: Primitive,
    value: &Value,
    host: &HostOrder,
    writer: &mut W,
) -> CodecResult<()> {
    if value.primitive() != Some(primitive) {
        return Err(CodecError::TypeMismatch {
            expected: primitive.name().to_string(),
            found: value.kind_name(),
        });
    }

    match host_order_for(primitive, host) {
        ByteOrder::Big => put::<BigEndian, W>(value, writer)?,
        ByteOrder::Little => put::<LittleEndian, W>(value, writer)?,
    }
    Ok(())
}

/// Read a primitive value in host representation
pub(crate) fn read_primitive<R: Read + ?Sized>(
    primitive: Primitive,
    host: &HostOrder,
    reader: &mut R,
) -> CodecResult<Value> {
    let value = match host_order_for(primitive, host) {
        ByteOrder::Big => take::<BigEndian, R>(primitive, reader)?,
        ByteOrder::Little => take::<LittleEndian, R>(primitive, reader)?,
    };
    Ok(value)
}

fn put<B: byteorder::ByteOrder, W: Write + ?Sized>(
    value: &Value,
    writer: &mut W,
) -> std::io::Result<()> {
    match *value {
        Value::Bool(v) => writer.write_u8(u8::from(v)),
        Value::U8(v) => writer.write_u8(v),
        Value::I8(v) => writer.write_i8(v),
        Value::U16(v) => writer.write_u16::<B>(v),
        Value::I16(v) => writer.write_i16::<B>(v),
        Value::U32(v) => writer.write_u32::<B>(v),
        Value::I32(v) => writer.write_i32::<B>(v),
        Value::U64(v) => writer.write_u64::<B>(v),
        Value::I64(v) => writer.write_i64::<B>(v),
        Value::F32(v) => writer.write_f32::<B>(v),
        Value::F64(v) => writer.write_f64::<B>(v),
        // checked by the caller
        Value::Text(_) | Value::Seq(_) | Value::Record(_) | Value::Optional(_) => Ok(()),
    }
}

fn take<B: byteorder::ByteOrder, R: Read + ?Sized>(
    primitive: Primitive,
    reader: &mut R,
) -> std::io::Result<Value> {
    let value = match primitive {
        Primitive::Bool => Value::Bool(reader.read_u8()? != 0),
        Primitive::U8 => Value::U8(reader.read_u8()?),
        Primitive::I8 => Value::I8(reader.read_i8()?),
        Primitive::U16 => Value::U16(reader.read_u16::<B>()?),
        Primitive::I16 => Value::I16(reader.read_i16::<B>()?),
        Primitive::U32 => Value::U32(reader.read_u32::<B>()?),
        Primitive::I32 => Value::I32(reader.read_i32::<B>()?),
        Primitive::U64 => Value::U64(reader.read_u64::<B>()?),
        Primitive::I64 => Value::I64(reader.read_i64::<B>()?),
        Primitive::F32 => Value::F32(reader.read_f32::<B>()?),
        Primitive::F64 => Value::F64(reader.read_f64::<B>()?),
    };
    Ok(value)
}
