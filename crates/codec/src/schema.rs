//! Record schemas
//!
//! A [`RecordSchema`] is the declarative description of one record type: an
//! ordered list of fields, each an (Identifier, Codec) pair, plus an optional
//! base field. Schemas are built once, validated once, and shared as
//! `Arc<RecordSchema>` by every record of that type.
//!
//! ## Definition-time checks
//!
//! `RecordSchemaBuilder::build` rejects:
//! - names that are empty or exceed the builder's `Limits::max_name_length`
//! - duplicate identifiers
//! - codecs whose mutators do not fit what they wrap
//! - a base that is not one of the record's own fields, or not a record
//!
//! ## Base promotion
//!
//! A schema may designate one of its own record-valued fields as its base.
//! Names the schema does not declare itself are then looked up in the base
//! field's record. The base is resolved to a field index at build time, and a
//! schema can only embed schemas that already exist, so base chains are
//! always finite.
//!
//! ## Visible names
//!
//! Own fields in declaration order, then the base's visible names that no own
//! field shadows.
//!
//! # Example
//!
//! ```
//! use fieldwire_codec::{Codec, RecordSchema};
//!
//! let header = RecordSchema::builder("Header")
//!     .field("version", Codec::u8())
//!     .field("flags", Codec::little(Codec::u16()))
//!     .build()
//!     .unwrap();
//!
//! let packet = RecordSchema::builder("Packet")
//!     .field("header", Codec::record(header))
//!     .field("payload", Codec::length_prefixed(Codec::u8(), Codec::u8()))
//!     .base("header")
//!     .build()
//!     .unwrap();
//!
//! let names: Vec<&str> = packet.visible_names().iter().map(|n| n.as_str()).collect();
//! assert_eq!(names, ["header", "payload", "version", "flags"]);
//! ```

use crate::codec::Codec;
use fieldwire_core::{DefinitionError, DefinitionResult, Identifier, IntoIdentifier, Limits};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use std::sync::Arc;
use tracing::debug;

/// One declared field: identifier plus codec
#[derive(Debug, Clone)]
pub struct FieldSpec {
    id: Identifier,
    codec: Codec,
}

impl FieldSpec {
    /// Pair an identifier with a codec
    pub fn new(id: Identifier, codec: Codec) -> Self {
        FieldSpec { id, codec }
    }

    /// Field identifier
    pub fn id(&self) -> &Identifier {
        &self.id
    }

    /// Field codec
    pub fn codec(&self) -> &Codec {
        &self.codec
    }
}

/// Immutable description of a record type
#[derive(Debug)]
pub struct RecordSchema {
    name: String,
    fields: Vec<FieldSpec>,
    index: FxHashMap<Identifier, usize>,
    base: Option<usize>,
    visible: SmallVec<[Identifier; 8]>,
}

impl RecordSchema {
    /// Start declaring a record type
    pub fn builder(name: impl Into<String>) -> RecordSchemaBuilder {
        RecordSchemaBuilder::new(name)
    }

    /// Record type name (diagnostics only; not part of the wire format)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Own fields in declaration order
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Number of own fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True if the record declares no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Position of an own field
    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Own field by name (no base promotion)
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.position(name).map(|i| &self.fields[i])
    }

    /// Position of the base field, if any
    pub fn base_position(&self) -> Option<usize> {
        self.base
    }

    /// Base field, if any
    pub fn base(&self) -> Option<&FieldSpec> {
        self.base.map(|i| &self.fields[i])
    }

    /// Schema of the base field's record, if any
    pub fn base_schema(&self) -> Option<&Arc<RecordSchema>> {
        match self.base()?.codec() {
            Codec::Record(schema) => Some(schema),
            _ => None,
        }
    }

    /// Field by name, following base promotion
    pub fn resolve(&self, name: &str) -> Option<&FieldSpec> {
        self.field(name)
            .or_else(|| self.base_schema().and_then(|base| base.resolve(name)))
    }

    /// Identifiers visible to lookup and comparison
    pub fn visible_names(&self) -> &[Identifier] {
        &self.visible
    }

    /// True if `name` is visible, directly or through the base
    pub fn is_visible(&self, name: &str) -> bool {
        self.resolve(name).is_some()
    }
}

/// Register a name without a length bound
///
/// Length is checked in `build` against the builder's final limits.
fn register(name: impl IntoIdentifier) -> DefinitionResult<Identifier> {
    let unbounded = Limits {
        max_name_length: usize::MAX,
        ..Limits::default()
    };
    name.into_identifier(&unbounded)
}

/// Builder for [`RecordSchema`]
///
/// Errors are deferred: the first one encountered is returned by `build`.
#[derive(Debug)]
pub struct RecordSchemaBuilder {
    name: String,
    limits: Limits,
    fields: Vec<FieldSpec>,
    base: Option<Identifier>,
    error: Option<DefinitionError>,
}

impl RecordSchemaBuilder {
    /// Create a builder with default limits
    pub fn new(name: impl Into<String>) -> Self {
        RecordSchemaBuilder {
            name: name.into(),
            limits: Limits::default(),
            fields: Vec::new(),
            base: None,
            error: None,
        }
    }

    /// Use explicit limits for name validation
    ///
    /// Applies to every field, including ones declared before this call.
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Declare the next field
    pub fn field(mut self, name: impl IntoIdentifier, codec: Codec) -> Self {
        match register(name) {
            Ok(id) => self.fields.push(FieldSpec::new(id, codec)),
            Err(e) => self.fail(e),
        }
        self
    }

    /// Designate one of this record's fields as its base
    pub fn base(mut self, name: impl IntoIdentifier) -> Self {
        match register(name) {
            Ok(id) => self.base = Some(id),
            Err(e) => self.fail(e),
        }
        self
    }

    fn fail(&mut self, error: DefinitionError) {
        if self.error.is_none() {
            self.error = Some(error);
        }
    }

    /// Validate and freeze the schema
    pub fn build(self) -> DefinitionResult<Arc<RecordSchema>> {
        if let Some(e) = self.error {
            return Err(e);
        }

        let mut index = FxHashMap::default();
        for (i, field) in self.fields.iter().enumerate() {
            Identifier::validate(field.id.as_str(), self.limits.max_name_length)?;
            if index.insert(field.id.clone(), i).is_some() {
                return Err(DefinitionError::DuplicateField(field.id.clone()));
            }
            field.codec.validate()?;
        }

        let base = match &self.base {
            None => None,
            Some(id) => {
                let pos = *index
                    .get(id)
                    .ok_or_else(|| DefinitionError::UnknownBase(id.clone()))?;
                if !matches!(self.fields[pos].codec, Codec::Record(_)) {
                    return Err(DefinitionError::BaseNotRecord(id.clone()));
                }
                Some(pos)
            }
        };

        let mut visible: SmallVec<[Identifier; 8]> =
            self.fields.iter().map(|f| f.id.clone()).collect();
        if let Some(pos) = base {
            if let Codec::Record(base_schema) = &self.fields[pos].codec {
                visible.extend(
                    base_schema
                        .visible_names()
                        .iter()
                        .filter(|name| !index.contains_key(*name))
                        .cloned(),
                );
            }
        }

        debug!(
            schema = %self.name,
            fields = self.fields.len(),
            visible = visible.len(),
            base = ?self.base,
            "built record schema"
        );

        Ok(Arc::new(RecordSchema {
            name: self.name,
            fields: self.fields,
            index,
            base,
            visible,
        }))
    }
}
