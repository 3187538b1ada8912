//! Order schemas - which aliases a caller may order by, and their storage
//! names.

use std::any::TypeId;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, PoisonError, RwLock};

use docshape_core::{Shape, WireMeta, WIRE_TAG};
use docshape_registry::{DescriptorComputer, FieldOptions, PendingField, ShapeResult};
use tracing::debug;

use crate::error::{QueryError, QueryResult};
use crate::order::{OrderField, OrderFields};

/// Tag key holding the order alias of a field; `-` excludes the field.
pub const ORDER_TAG: &str = "order";

/// Maps user-facing order aliases to storage field names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderSchema {
    alias_to_field: HashMap<String, String>,
}

impl OrderSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`add_field`](Self::add_field).
    pub fn with_field(mut self, alias: impl Into<String>, storage: impl Into<String>) -> Self {
        self.add_field(alias, storage);
        self
    }

    /// Allow ordering by `alias`, stored as `storage`. An empty storage name
    /// means the alias itself.
    pub fn add_field(&mut self, alias: impl Into<String>, storage: impl Into<String>) {
        let alias = alias.into();
        let mut storage = storage.into();
        if storage.is_empty() {
            storage = alias.clone();
        }
        self.alias_to_field.insert(alias, storage);
    }

    pub fn storage_name(&self, alias: &str) -> Option<&str> {
        self.alias_to_field.get(alias).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.alias_to_field.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alias_to_field.is_empty()
    }

    /// Check that every alias is known and used once.
    pub fn validate(&self, fields: &OrderFields) -> QueryResult<()> {
        let mut used = HashSet::new();
        for field in fields {
            if !used.insert(field.name.as_str()) {
                return Err(QueryError::field_twice(&field.name));
            }
            if !self.alias_to_field.contains_key(&field.name) {
                return Err(QueryError::invalid_order_fields(&field.name));
            }
        }
        Ok(())
    }

    /// Translate aliases to storage names.
    ///
    /// Unknown aliases and repeats of an alias are dropped; callers wanting
    /// them reported run [`validate`](Self::validate) first.
    pub fn process(&self, fields: &OrderFields) -> OrderFields {
        let mut used = HashSet::new();
        fields
            .iter()
            .filter(|field| used.insert(field.name.as_str()))
            .filter_map(|field| {
                self.storage_name(&field.name).map(|storage| OrderField {
                    name: storage.to_string(),
                    descending: field.descending,
                })
            })
            .collect()
    }
}

/// Builds [`OrderSchema`]s from shapes.
///
/// Aliases come from the `order` tag, falling back to the declared name.
/// Storage names are wire names. Wire-skipped fields and fields tagged
/// `order = "-"` are not orderable. Schemas are cached per type.
#[derive(Debug)]
pub struct OrderSchemaFactory {
    computer: DescriptorComputer<String>,
    schemas: RwLock<HashMap<TypeId, Arc<OrderSchema>>>,
}

impl OrderSchemaFactory {
    pub fn new() -> Self {
        Self::with_wire_tag(WIRE_TAG)
    }

    /// Read storage names from `wire_tag` instead of `wire`.
    pub fn with_wire_tag(wire_tag: impl Into<String>) -> Self {
        let wire_tag = wire_tag.into();
        Self {
            computer: DescriptorComputer::new(move |field| classify(&wire_tag, field)),
            schemas: RwLock::new(HashMap::new()),
        }
    }

    pub fn schema_for<S: Shape>(&self) -> QueryResult<Arc<OrderSchema>> {
        let key = TypeId::of::<S>();
        if let Some(schema) = self
            .schemas
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
        {
            return Ok(Arc::clone(schema));
        }

        let descriptor = self.computer.compute::<S>()?;
        let mut schema = OrderSchema::new();
        for (alias, field) in descriptor.iter() {
            schema.add_field(alias, field.meta().as_str());
        }

        debug!(
            type_name = S::type_label(),
            fields = schema.len(),
            "computed order schema"
        );

        let mut schemas = self.schemas.write().unwrap_or_else(PoisonError::into_inner);
        Ok(Arc::clone(schemas.entry(key).or_insert_with(|| Arc::new(schema))))
    }
}

impl Default for OrderSchemaFactory {
    fn default() -> Self {
        Self::new()
    }
}

fn classify(wire_tag: &str, field: &PendingField) -> ShapeResult<FieldOptions<String>> {
    let wire = WireMeta::parse(field.tags.get(wire_tag), field.name);
    let alias = field.tags.get(ORDER_TAG).unwrap_or("");
    let embed = field.is_embeddable() && !wire.explicit && !wire.skip;
    let name = if alias.is_empty() { field.name } else { alias };

    Ok(FieldOptions::new(name, wire.wire_name)
        .skip(wire.skip || alias == "-")
        .embed(embed))
}
