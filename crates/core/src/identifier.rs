//! Field identifiers
//!
//! Every field in a record schema is named by an [`Identifier`]. Two fields
//! with equal identifiers are the same field as far as lookup and comparison
//! are concerned.
//!
//! ## Registration
//!
//! Identifiers are produced by an explicit registration step
//! ([`Identifier::new`] or [`Identifier::with_limits`]) that validates the
//! source string once. After that the token is an interned `Arc<str>`:
//! cloning is a reference count bump and equality/ordering follow the name.
//!
//! ## Validation
//!
//! Names must:
//! - Be non-empty
//! - Be at most `Limits::max_name_length` characters (default 100)

use crate::error::{DefinitionError, DefinitionResult};
use crate::limits::Limits;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

/// Default maximum length of a field name, in characters
pub const DEFAULT_MAX_NAME_LENGTH: usize = 100;

/// Opaque, totally ordered token naming a field
///
/// ## Examples
///
/// ```
/// use fieldwire_core::Identifier;
///
/// let a = Identifier::new("Field 1").unwrap();
/// let b = Identifier::new("Field 1").unwrap();
/// assert_eq!(a, b);
/// assert!(Identifier::new("").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Identifier(Arc<str>);

impl Identifier {
    /// Register a name using the default limits
    ///
    /// # Errors
    ///
    /// Returns `DefinitionError` if the name is empty or too long.
    pub fn new(name: impl AsRef<str>) -> DefinitionResult<Self> {
        Self::with_limits(name, &Limits::default())
    }

    /// Register a name against explicit limits
    pub fn with_limits(name: impl AsRef<str>, limits: &Limits) -> DefinitionResult<Self> {
        let name = name.as_ref();
        Self::validate(name, limits.max_name_length)?;
        Ok(Identifier(Arc::from(name)))
    }

    /// Validate a name against a maximum length
    pub fn validate(name: &str, max: usize) -> DefinitionResult<()> {
        if name.is_empty() {
            return Err(DefinitionError::EmptyName);
        }

        // Length is counted in characters, not bytes
        let length = name.chars().count();
        if length > max {
            return Err(DefinitionError::NameTooLong { length, max });
        }

        Ok(())
    }

    /// Get the name as a string slice
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Identifier {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Identifier({:?})", &*self.0)
    }
}

impl TryFrom<&str> for Identifier {
    type Error = DefinitionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Identifier::new(value)
    }
}

impl TryFrom<String> for Identifier {
    type Error = DefinitionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Identifier::new(value)
    }
}

/// Conversion into a validated [`Identifier`]
///
/// Lets schema builders accept either an already registered identifier or a
/// raw name that is registered against the builder's limits.
pub trait IntoIdentifier {
    /// Produce the identifier, validating raw names against `limits`
    fn into_identifier(self, limits: &Limits) -> DefinitionResult<Identifier>;
}

impl IntoIdentifier for Identifier {
    fn into_identifier(self, limits: &Limits) -> DefinitionResult<Identifier> {
        Identifier::validate(&self.0, limits.max_name_length)?;
        Ok(self)
    }
}

impl IntoIdentifier for &Identifier {
    fn into_identifier(self, limits: &Limits) -> DefinitionResult<Identifier> {
        self.clone().into_identifier(limits)
    }
}

impl IntoIdentifier for &str {
    fn into_identifier(self, limits: &Limits) -> DefinitionResult<Identifier> {
        Identifier::with_limits(self, limits)
    }
}

impl IntoIdentifier for String {
    fn into_identifier(self, limits: &Limits) -> DefinitionResult<Identifier> {
        Identifier::with_limits(self, limits)
    }
}

impl Serialize for Identifier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Identifier {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Identifier::new(name).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Tests
// ============================================================================
