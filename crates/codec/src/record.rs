//! Record values
//!
//! A [`Record`] owns one value per field of its schema, in declaration
//! order, and an `Arc` to the schema. Records are plain values: clone them,
//! move them, compare them. Lookups go to the record's own fields first and
//! then through base promotion.

use crate::compare::{compare, Visible};
use crate::error::{CodecError, CodecResult};
use crate::schema::{FieldSpec, RecordSchema};
use crate::value::Value;
use fieldwire_core::Identifier;
use std::cmp::Ordering;
use std::sync::Arc;

/// Instance of a record schema
#[derive(Debug, Clone)]
pub struct Record {
    schema: Arc<RecordSchema>,
    values: Vec<Value>,
}

/// Borrowed view of one field: its declaration and current value
#[derive(Debug, Clone, Copy)]
pub struct FieldRef<'a> {
    spec: &'a FieldSpec,
    value: &'a Value,
}

impl<'a> FieldRef<'a> {
    /// Field identifier
    pub fn id(&self) -> &'a Identifier {
        self.spec.id()
    }

    /// Field declaration
    pub fn spec(&self) -> &'a FieldSpec {
        self.spec
    }

    /// Field codec
    pub fn codec(&self) -> &'a crate::codec::Codec {
        self.spec.codec()
    }

    /// Current value
    pub fn get(&self) -> &'a Value {
        self.value
    }
}

impl Record {
    /// Create a record with every field at its codec's default value
    pub fn new(schema: Arc<RecordSchema>) -> Self {
        let values = schema
            .fields()
            .iter()
            .map(|f| f.codec().default_value())
            .collect();
        Record { schema, values }
    }

    /// Schema this record instantiates
    pub fn schema(&self) -> &Arc<RecordSchema> {
        &self.schema
    }

    /// Own fields with their values, in declaration order
    pub fn fields(&self) -> impl Iterator<Item = FieldRef<'_>> + '_ {
        self.schema
            .fields()
            .iter()
            .zip(self.values.iter())
            .map(|(spec, value)| FieldRef { spec, value })
    }

    /// Value of a visible field
    pub fn get<Q: AsRef<str> + ?Sized>(&self, name: &Q) -> Option<&Value> {
        let name = name.as_ref();
        if let Some(i) = self.schema.position(name) {
            return Some(&self.values[i]);
        }
        let base = self.schema.base_position()?;
        self.values[base].as_record()?.get(name)
    }

    /// Mutable value of a visible field
    ///
    /// Writing a value of the wrong type through this reference is not
    /// caught until the next `write`; prefer [`Record::set`].
    ///
    /// The base field itself is not handed out: a non-record in its place
    /// would hide every promoted name. Replace it with [`Record::set`], or
    /// reach its fields by their promoted names.
    pub fn get_mut<Q: AsRef<str> + ?Sized>(&mut self, name: &Q) -> Option<&mut Value> {
        let name = name.as_ref();
        let base = self.schema.base_position();
        if let Some(i) = self.schema.position(name) {
            if base == Some(i) {
                return None;
            }
            return Some(&mut self.values[i]);
        }
        let base = base?;
        self.values[base].as_record_mut()?.get_mut(name)
    }

    /// Replace the value of a visible field, checking it against the codec
    pub fn set<Q: AsRef<str> + ?Sized>(
        &mut self,
        name: &Q,
        value: impl Into<Value>,
    ) -> CodecResult<()> {
        let name = name.as_ref();
        let value = value.into();
        if let Some(i) = self.schema.position(name) {
            self.schema.fields()[i].codec().check(&value)?;
            self.values[i] = value;
            return Ok(());
        }

        let base = self
            .schema
            .base_position()
            .ok_or_else(|| CodecError::UnknownField(name.to_string()))?;
        match self.values[base].as_record_mut() {
            Some(record) => record.set(name, value),
            None => Err(CodecError::UnknownField(name.to_string())),
        }
    }

    /// Chaining form of [`Record::set`]
    pub fn with<Q: AsRef<str> + ?Sized>(
        mut self,
        name: &Q,
        value: impl Into<Value>,
    ) -> CodecResult<Self> {
        self.set(name, value)?;
        Ok(self)
    }

    /// Own field values in declaration order
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Store a decoded value for the field at `index`
    pub(crate) fn put(&mut self, index: usize, value: Value) {
        self.values[index] = value;
    }
}

impl Visible for Record {
    fn visible_names(&self) -> &[Identifier] {
        self.schema.visible_names()
    }

    fn lookup(&self, name: &Identifier) -> Option<&Value> {
        self.get(name)
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        compare(self, other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Record {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        compare(self, other)
    }
}
