//! Per-call error types
//!
//! Every read, write and record mutation returns a `CodecResult`. Failures
//! are local to the call: nothing here is retried, and bytes already written
//! or fields already populated are not rolled back.

use fieldwire_core::{Identifier, LimitError};
use std::io;
use thiserror::Error;

/// Result type alias for codec operations
pub type CodecResult<T> = std::result::Result<T, CodecError>;

/// Codec errors
#[derive(Debug, Error)]
pub enum CodecError {
    /// Underlying stream failed (anything other than running out of data)
    #[error("I/O error: {0}")]
    Io(io::Error),

    /// A read needed more bytes than the stream had left
    #[error("insufficient data")]
    InsufficientData,

    /// Stream ended before a terminated container's sentinel
    #[error("unterminated sequence: stream ended before sentinel")]
    UnterminatedSequence,

    /// Value does not match the codec it was handed to
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        /// Codec description
        expected: String,
        /// Kind of the value actually supplied
        found: &'static str,
    },

    /// Element count does not fit the container's size type
    #[error("size overflow: {count} elements do not fit {size}")]
    SizeOverflow {
        /// Element count
        count: usize,
        /// Size codec description
        size: String,
    },

    /// Decoded container size is negative
    #[error("negative container size: {0}")]
    NegativeSize(i64),

    /// Decoded container size exceeds the configured limit
    #[error("sequence too long: {length} elements (max {max})")]
    SequenceTooLong {
        /// Decoded length
        length: usize,
        /// Configured maximum
        max: usize,
    },

    /// A terminated container holds an element equal to its sentinel
    #[error("sequence contains its own sentinel")]
    SentinelInSequence,

    /// Optional presence byte was neither 0 nor 1
    #[error("invalid presence byte: {0:#04x}")]
    InvalidPresence(u8),

    /// Text container decoded to invalid UTF-8
    #[error("invalid UTF-8 in text container")]
    InvalidUtf8,

    /// Wide text container decoded a value that is not a Unicode scalar
    #[error("invalid code point in wide text: {0:#x}")]
    InvalidCodePoint(u32),

    /// `from_bytes` finished with input left over
    #[error("{0} trailing bytes after record")]
    TrailingBytes(usize),

    /// No field with this name is visible in the record
    #[error("unknown field: {0}")]
    UnknownField(String),

    /// Failure inside a named field
    #[error("field {field}: {source}")]
    Field {
        /// Field that failed
        field: Identifier,
        /// Underlying failure
        #[source]
        source: Box<CodecError>,
    },
}

impl CodecError {
    /// Wrap an error with the field it occurred in
    pub fn in_field(field: Identifier, source: CodecError) -> Self {
        CodecError::Field {
            field,
            source: Box::new(source),
        }
    }

    /// The innermost error, looking through `Field` wrappers
    pub fn root(&self) -> &CodecError {
        match self {
            CodecError::Field { source, .. } => source.root(),
            other => other,
        }
    }

    /// Field path from the outermost record to the failure
    pub fn field_path(&self) -> Vec<&Identifier> {
        let mut path = Vec::new();
        let mut current = self;
        while let CodecError::Field { field, source } = current {
            path.push(field);
            current = source;
        }
        path
    }

    /// True when the stream ran out of bytes (including unterminated sequences)
    pub fn is_insufficient_data(&self) -> bool {
        matches!(
            self.root(),
            CodecError::InsufficientData | CodecError::UnterminatedSequence
        )
    }
}

impl From<io::Error> for CodecError {
    fn from(e: io::Error) -> Self {
        match e.kind() {
            io::ErrorKind::UnexpectedEof => CodecError::InsufficientData,
            _ => CodecError::Io(e),
        }
    }
}

impl From<LimitError> for CodecError {
    fn from(e: LimitError) -> Self {
        match e {
            LimitError::SequenceTooLong { length, max } => {
                CodecError::SequenceTooLong { length, max }
            }
        }
    }
}
