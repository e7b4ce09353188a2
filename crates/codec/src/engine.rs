//! Record read/write engine
//!
//! `write` walks a record's fields in declaration order and hands each value
//! to its codec; `read` is the mirror. The first failing field aborts the
//! call and is named in the returned error.
//!
//! Neither direction is transactional. Bytes already emitted before a write
//! failure stay in the stream, and fields decoded before a read failure stay
//! populated. A record whose read failed should be discarded.
//!
//! # Example
//!
//! ```
//! use fieldwire_codec::{engine, Codec, Record, RecordSchema};
//! use std::io::Cursor;
//!
//! let schema = RecordSchema::builder("Ping")
//!     .field("seq", Codec::big(Codec::u16()))
//!     .field("payload", Codec::string(Codec::u8()))
//!     .build()
//!     .unwrap();
//!
//! let ping = Record::new(schema.clone())
//!     .with("seq", 7u16)
//!     .unwrap()
//!     .with("payload", "hi")
//!     .unwrap();
//!
//! let mut buf = Vec::new();
//! engine::write(&ping, &mut buf).unwrap();
//! assert_eq!(buf, [0, 7, 2, b'h', b'i']);
//!
//! let mut back = Record::new(schema);
//! engine::read(&mut Cursor::new(buf), &mut back).unwrap();
//! assert_eq!(back, ping);
//! ```

use crate::error::{CodecError, CodecResult};
use crate::record::Record;
use crate::schema::RecordSchema;
use fieldwire_core::CodecConfig;
use std::io::{Cursor, Read, Write};
use std::sync::Arc;
use tracing::{debug, trace};

/// Write a record with the default configuration
pub fn write<W: Write + ?Sized>(record: &Record, writer: &mut W) -> CodecResult<()> {
    write_with(&CodecConfig::default(), record, writer)
}

/// Write a record with an explicit configuration
pub fn write_with<W: Write + ?Sized>(
    config: &CodecConfig,
    record: &Record,
    writer: &mut W,
) -> CodecResult<()> {
    write_record(record, writer, config)
}

/// Read into a record with the default configuration
pub fn read<R: Read + ?Sized>(reader: &mut R, record: &mut Record) -> CodecResult<()> {
    read_with(&CodecConfig::default(), reader, record)
}

/// Read into a record with an explicit configuration
pub fn read_with<R: Read + ?Sized>(
    config: &CodecConfig,
    reader: &mut R,
    record: &mut Record,
) -> CodecResult<()> {
    read_record(reader, record, config)
}

/// Encode a record into a fresh buffer
pub fn to_bytes(record: &Record) -> CodecResult<Vec<u8>> {
    to_bytes_with(&CodecConfig::default(), record)
}

/// Encode a record into a fresh buffer with an explicit configuration
pub fn to_bytes_with(config: &CodecConfig, record: &Record) -> CodecResult<Vec<u8>> {
    let mut buf = Vec::new();
    write_record(record, &mut buf, config)?;
    Ok(buf)
}

/// Decode a record of `schema` from a complete buffer
///
/// Fails with [`CodecError::TrailingBytes`] if the record does not consume
/// the whole buffer.
pub fn from_bytes(schema: &Arc<RecordSchema>, bytes: &[u8]) -> CodecResult<Record> {
    from_bytes_with(&CodecConfig::default(), schema, bytes)
}

/// Decode a record of `schema` from a complete buffer with an explicit configuration
pub fn from_bytes_with(
    config: &CodecConfig,
    schema: &Arc<RecordSchema>,
    bytes: &[u8],
) -> CodecResult<Record> {
    let mut cursor = Cursor::new(bytes);
    let mut record = Record::new(schema.clone());
    read_record(&mut cursor, &mut record, config)?;

    let consumed = cursor.position() as usize;
    if consumed < bytes.len() {
        return Err(CodecError::TrailingBytes(bytes.len() - consumed));
    }
    Ok(record)
}

pub(crate) fn write_record<W: Write + ?Sized>(
    record: &Record,
    writer: &mut W,
    config: &CodecConfig,
) -> CodecResult<()> {
    let schema = record.schema();
    for field in record.fields() {
        trace!(schema = %schema.name(), field = %field.id(), "write field");
        if let Err(e) = field.codec().write(field.get(), writer, config) {
            debug!(schema = %schema.name(), field = %field.id(), error = %e, "field write failed");
            return Err(CodecError::in_field(field.id().clone(), e));
        }
    }
    Ok(())
}

pub(crate) fn read_record<R: Read + ?Sized>(
    reader: &mut R,
    record: &mut Record,
    config: &CodecConfig,
) -> CodecResult<()> {
    let schema = record.schema().clone();
    for (index, spec) in schema.fields().iter().enumerate() {
        trace!(schema = %schema.name(), field = %spec.id(), "read field");
        match spec.codec().read(reader, config) {
            Ok(value) => record.put(index, value),
            Err(e) => {
                debug!(
                    schema = %schema.name(),
                    field = %spec.id(),
                    error = %e,
                    "field read failed"
                );
                return Err(CodecError::in_field(spec.id().clone(), e));
            }
        }
    }
    Ok(())
}
