//! Definition-time error types
//!
//! Errors raised while declaring identifiers and building record schemas.
//! These never reach a running read/write call: a schema that exists has
//! already passed every check listed here. Per-call failures live in the
//! codec crate's `CodecError`.
//!
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use crate::identifier::Identifier;
use thiserror::Error;

/// Result type alias for schema definition
pub type DefinitionResult<T> = std::result::Result<T, DefinitionError>;

/// Schema definition errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DefinitionError {
    /// Identifier source string is empty
    #[error("field name cannot be empty")]
    EmptyName,

    /// Identifier source string exceeds the configured maximum
    #[error("field name too long: {length} chars (max {max})")]
    NameTooLong {
        /// Actual length in characters
        length: usize,
        /// Configured maximum
        max: usize,
    },

    /// Two fields in one record share an identifier
    #[error("duplicate field: {0}")]
    DuplicateField(Identifier),

    /// Declared base does not name one of the record's own fields
    #[error("unknown base field: {0}")]
    UnknownBase(Identifier),

    /// Declared base field does not hold a nested record
    #[error("base field is not a record: {0}")]
    BaseNotRecord(Identifier),

    /// A mutator wraps a codec it cannot apply to
    #[error("invalid mutator: {0}")]
    InvalidMutator(String),

    /// A terminated container's sentinel does not fit its element codec
    #[error("invalid sentinel: {0}")]
    InvalidSentinel(String),
}
