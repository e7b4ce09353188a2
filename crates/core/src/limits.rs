//! Size limits and codec configuration
//!
//! [`Limits`] bounds what a schema may declare (name length) and what a read
//! may allocate (sequence length). [`CodecConfig`] bundles the limits with
//! the host byte-order facts consumed by the read/write engine.
//!
//! Both types deserialize with `#[serde(default)]`, so a partial config
//! document fills the remaining fields from the defaults.

use crate::byte_order::HostOrder;
use crate::identifier::DEFAULT_MAX_NAME_LENGTH;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Size limits for names and decoded sequences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Maximum field name length in characters (default: 100)
    pub max_name_length: usize,

    /// Maximum element count a length-prefixed read will accept (default: 16M)
    pub max_sequence_len: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_name_length: DEFAULT_MAX_NAME_LENGTH,
            max_sequence_len: 16 * 1024 * 1024,
        }
    }
}

impl Limits {
    /// Create limits with small values for testing
    pub fn with_small_limits() -> Self {
        Limits {
            max_name_length: 16,
            max_sequence_len: 100,
        }
    }

    /// Validate the limits themselves
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_name_length == 0 {
            return Err(ConfigError::ZeroLimit("max_name_length"));
        }
        Ok(())
    }

    /// Check a decoded sequence length against `max_sequence_len`
    pub fn check_sequence_len(&self, length: usize) -> Result<(), LimitError> {
        if length > self.max_sequence_len {
            return Err(LimitError::SequenceTooLong {
                length,
                max: self.max_sequence_len,
            });
        }
        Ok(())
    }
}

/// Limit violation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LimitError {
    /// Decoded sequence length exceeds the configured maximum
    #[error("sequence too long: {length} elements (max {max})")]
    SequenceTooLong {
        /// Decoded length
        length: usize,
        /// Configured maximum
        max: usize,
    },
}

/// Configuration for one read or write call
///
/// # Example
///
/// ```
/// use fieldwire_core::{ByteOrder, CodecConfig, HostOrder};
///
/// let config = CodecConfig::default()
///     .with_host(HostOrder::uniform(ByteOrder::Big))
///     .with_max_sequence_len(1024);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Host byte-order facts
    pub host: HostOrder,
    /// Size limits
    pub limits: Limits,
}

impl CodecConfig {
    /// Config for the compilation target with default limits
    pub fn native() -> Self {
        CodecConfig::default()
    }

    /// Set host byte-order facts
    pub fn with_host(mut self, host: HostOrder) -> Self {
        self.host = host;
        self
    }

    /// Set limits
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Set the maximum decoded sequence length
    pub fn with_max_sequence_len(mut self, max: usize) -> Self {
        self.limits.max_sequence_len = max;
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.limits.validate()
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A limit that must be positive was zero
    #[error("Invalid limit: {0} must be greater than zero")]
    ZeroLimit(&'static str),
}
