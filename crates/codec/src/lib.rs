//! Record codecs for fieldwire
//!
//! This crate turns a declared record shape into a reversible binary
//! protocol:
//! - Codec: per-field wire encoding, built from primitives and mutators
//! - RecordSchema: ordered, named fields with an optional promoted base
//! - Record: a value of a schema
//! - engine: `read`/`write` of whole records over `std::io` streams
//! - compare: field-wise ordering across records of different schemas

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod codec;
pub mod compare;
pub mod engine;
pub mod error;
pub mod mutator;
mod primitive;
pub mod record;
pub mod schema;
pub mod value;

pub use codec::Codec;
pub use compare::{
    compare, compare_values, equal, greater, greater_or_equal, less, less_or_equal, not_equal,
    Visible,
};
pub use engine::{
    from_bytes, from_bytes_with, read, read_with, to_bytes, to_bytes_with, write, write_with,
};
pub use error::{CodecError, CodecResult};
pub use mutator::Collect;
pub use record::{FieldRef, Record};
pub use schema::{FieldSpec, RecordSchema, RecordSchemaBuilder};
pub use value::{Primitive, Value};

pub use fieldwire_core::{ByteOrder, CodecConfig, DefinitionError, HostOrder, Identifier, Limits};
