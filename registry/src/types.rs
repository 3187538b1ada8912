//! Descriptor types.

use docshape_core::{FieldForm, FieldSpec, FieldValue, Tags, ValueType};
use std::collections::HashMap;
use std::fmt;

/// A declared field awaiting classification.
#[derive(Debug, Clone)]
pub struct PendingField {
    /// Type that declares (or embeds) the field.
    pub owner: &'static str,
    /// Declared field name.
    pub name: &'static str,
    pub tags: Tags,
    /// Declared without a name of its own (embeddable).
    pub anonymous: bool,
    pub form: FieldForm,
}

impl PendingField {
    pub(crate) fn from_spec<S: 'static>(owner: &'static str, spec: &FieldSpec<S>) -> Self {
        Self {
            owner,
            name: spec.name(),
            tags: spec.tags().clone(),
            anonymous: spec.is_anonymous(),
            form: spec.form(),
        }
    }

    /// True for anonymous struct or optional-struct fields.
    pub fn is_embeddable(&self) -> bool {
        self.anonymous && self.form.is_struct()
    }
}

/// Classifier verdict for one field.
#[derive(Debug, Clone)]
pub struct FieldOptions<M> {
    /// Logical name to register the field under.
    pub name: String,
    pub meta: M,
    /// Leave the field out of the descriptor.
    pub skip: bool,
    /// Merge the field's own fields into the parent instead.
    pub embed: bool,
}

impl<M> FieldOptions<M> {
    pub fn new(name: impl Into<String>, meta: M) -> Self {
        Self {
            name: name.into(),
            meta,
            skip: false,
            embed: false,
        }
    }

    pub fn skip(mut self, skip: bool) -> Self {
        self.skip = skip;
        self
    }

    pub fn embed(mut self, embed: bool) -> Self {
        self.embed = embed;
        self
    }
}

/// One registered field of `S` with metadata of type `M`.
pub struct FieldDescriptor<S, M> {
    spec: FieldSpec<S>,
    meta: M,
}

impl<S: 'static, M> FieldDescriptor<S, M> {
    pub(crate) fn new(spec: FieldSpec<S>, meta: M) -> Self {
        Self { spec, meta }
    }

    /// Declared field name.
    pub fn declared_name(&self) -> &'static str {
        self.spec.name()
    }

    pub fn meta(&self) -> &M {
        &self.meta
    }

    pub fn value_type(&self) -> ValueType {
        self.spec.value_type()
    }

    pub fn read<'a>(&self, owner: &'a S) -> Option<&'a dyn FieldValue> {
        self.spec.read(owner)
    }

    pub fn write<'a>(&self, owner: &'a mut S) -> &'a mut dyn FieldValue {
        self.spec.write(owner)
    }
}

impl<S, M: fmt::Debug> fmt::Debug for FieldDescriptor<S, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("spec", &self.spec)
            .field("meta", &self.meta)
            .finish()
    }
}

/// Computed mapping from logical field name to field descriptor.
///
/// Iteration follows first registration order. When two fields register the
/// same name, the later one replaces the earlier in its slot.
pub struct Descriptor<S, M> {
    type_label: &'static str,
    fields: Vec<(String, FieldDescriptor<S, M>)>,
    index: HashMap<String, usize>,
}

impl<S: 'static, M> Descriptor<S, M> {
    pub(crate) fn new(type_label: &'static str) -> Self {
        Self {
            type_label,
            fields: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub(crate) fn insert(&mut self, name: String, field: FieldDescriptor<S, M>) {
        match self.index.get(&name) {
            Some(&slot) => self.fields[slot].1 = field,
            None => {
                self.index.insert(name.clone(), self.fields.len());
                self.fields.push((name, field));
            }
        }
    }

    /// Type this descriptor was computed for.
    pub fn type_label(&self) -> &'static str {
        self.type_label
    }

    /// Get a field by logical name.
    pub fn get(&self, name: &str) -> Option<&FieldDescriptor<S, M>> {
        self.index.get(name).map(|&slot| &self.fields[slot].1)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Fields with their logical names.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldDescriptor<S, M>)> {
        self.fields.iter().map(|(name, field)| (name.as_str(), field))
    }

    /// Logical field names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<S, M: fmt::Debug> fmt::Debug for Descriptor<S, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Descriptor")
            .field("type_label", &self.type_label)
            .field("fields", &self.fields)
            .finish()
    }
}
