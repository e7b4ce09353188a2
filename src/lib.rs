//! fieldwire - declarative binary records with composable field mutators
//!
//! A record is declared as an ordered list of named fields, each with a
//! codec. Codecs are primitives optionally wrapped by mutators (byte order,
//! length-prefixed and sentinel-terminated containers, optionals). From that
//! declaration alone fieldwire reads and writes the record over any
//! `std::io` stream and compares records field by field.
//!
//! # Quick Start
//!
//! ```
//! use fieldwire::{engine, less, Codec, Record, RecordSchema};
//!
//! let schema = RecordSchema::builder("Point")
//!     .field("x", Codec::little(Codec::i32()))
//!     .field("y", Codec::little(Codec::i32()))
//!     .build()
//!     .unwrap();
//!
//! let a = Record::new(schema.clone()).with("x", 1).unwrap();
//! let b = Record::new(schema.clone()).with("x", 2).unwrap();
//! assert!(less(&a, &b));
//!
//! let bytes = engine::to_bytes(&b).unwrap();
//! assert_eq!(bytes, [2, 0, 0, 0, 0, 0, 0, 0]);
//! assert_eq!(engine::from_bytes(&schema, &bytes).unwrap(), b);
//! ```
//!
//! # Architecture
//!
//! - `fieldwire-core`: identifiers, byte-order facts, limits and definition errors
//! - `fieldwire-codec`: codecs, schemas, records, the read/write engine and
//!   the comparator
//!
//! This crate only re-exports the two.

pub use fieldwire_codec::*;
pub use fieldwire_core::{
    ConfigError, DefinitionResult, IntoIdentifier, LimitError, DEFAULT_MAX_NAME_LENGTH,
};
