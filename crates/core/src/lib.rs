//! Core types for fieldwire
//!
//! This crate defines the foundational types shared by the codec crate:
//! - Identifier: validated, interned field name token
//! - ByteOrder / HostOrder: wire orders and the host's integer/float facts
//! - Limits / CodecConfig: name and sequence limits plus per-call config
//! - DefinitionError: schema-definition failures

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod byte_order;
pub mod error;
pub mod identifier;
pub mod limits;

pub use byte_order::{ByteOrder, HostOrder};
pub use error::{DefinitionError, DefinitionResult};
pub use identifier::{Identifier, IntoIdentifier, DEFAULT_MAX_NAME_LENGTH};
pub use limits::{CodecConfig, ConfigError, LimitError, Limits};
