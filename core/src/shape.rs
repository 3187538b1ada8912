//! Struct shapes.
//!
//! A `Shape` lists a struct's fields in declaration order. Each `FieldSpec`
//! carries the declared name, tags and a getter/setter pair bound once when
//! the spec is built, so no per-call introspection is needed. Anonymous
//! struct-typed fields also carry their own field list, lifted into the
//! parent's accessors, so descriptor computation can embed them.

use std::fmt;
use std::sync::Arc;

use crate::{FieldValue, Tags, ValueType};

/// Reads a field. `None` when the path crosses an empty optional struct.
pub type Getter<S> =
    Arc<dyn for<'a> Fn(&'a S) -> Option<&'a dyn FieldValue> + Send + Sync>;

/// Writes a field, materializing empty optional structs on the way.
pub type Setter<S> =
    Arc<dyn for<'a> Fn(&'a mut S) -> &'a mut (dyn FieldValue + 'static) + Send + Sync>;

type Nested<S> = Arc<dyn Fn() -> Vec<FieldSpec<S>> + Send + Sync>;

fn getter<S, F>(f: F) -> Getter<S>
where
    F: for<'a> Fn(&'a S) -> Option<&'a dyn FieldValue> + Send + Sync + 'static,
{
    Arc::new(f)
}

fn setter<S, F>(f: F) -> Setter<S>
where
    F: for<'a> Fn(&'a mut S) -> &'a mut (dyn FieldValue + 'static) + Send + Sync + 'static,
{
    Arc::new(f)
}

/// A struct whose fields can be described.
pub trait Shape: Send + Sync + Sized + 'static {
    /// Fields in declaration order.
    fn fields() -> Vec<FieldSpec<Self>>;

    /// Type name used in diagnostics.
    fn type_label() -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Declared form of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldForm {
    /// Any value field.
    Value,
    /// A struct with its own shape.
    Struct,
    /// An optional struct with its own shape.
    OptionalStruct,
}

impl FieldForm {
    pub fn is_struct(&self) -> bool {
        matches!(self, FieldForm::Struct | FieldForm::OptionalStruct)
    }
}

/// Declaration of one field of `S`.
pub struct FieldSpec<S> {
    name: &'static str,
    tags: Tags,
    anonymous: bool,
    form: FieldForm,
    value_type: ValueType,
    get: Getter<S>,
    set: Setter<S>,
    nested: Option<Nested<S>>,
}

impl<S: 'static> FieldSpec<S> {
    /// A value field.
    pub fn value<T: FieldValue>(
        name: &'static str,
        get: fn(&S) -> &T,
        set: fn(&mut S) -> &mut T,
    ) -> Self {
        Self {
            name,
            tags: Tags::new(),
            anonymous: false,
            form: FieldForm::Value,
            value_type: ValueType::of::<T>(),
            get: getter(move |s: &S| Some(get(s) as &dyn FieldValue)),
            set: setter(move |s: &mut S| set(s) as &mut dyn FieldValue),
            nested: None,
        }
    }

    /// An anonymous struct field whose fields may be embedded into `S`.
    pub fn embedded<E: Shape + FieldValue>(
        name: &'static str,
        get: fn(&S) -> &E,
        set: fn(&mut S) -> &mut E,
    ) -> Self {
        Self {
            name,
            tags: Tags::new(),
            anonymous: true,
            form: FieldForm::Struct,
            value_type: ValueType::of::<E>(),
            get: getter(move |s: &S| Some(get(s) as &dyn FieldValue)),
            set: setter(move |s: &mut S| set(s) as &mut dyn FieldValue),
            nested: Some(Arc::new(move || {
                E::fields()
                    .into_iter()
                    .map(|field| field.lift(get, set))
                    .collect()
            })),
        }
    }

    /// An anonymous optional struct field whose fields may be embedded into
    /// `S`. Embedded reads through `None` yield nothing; embedded writes
    /// first set the struct to `E::default()`.
    pub fn embedded_optional<E: Shape + FieldValue + Clone + Default>(
        name: &'static str,
        get: fn(&S) -> &Option<E>,
        set: fn(&mut S) -> &mut Option<E>,
    ) -> Self {
        Self {
            name,
            tags: Tags::new(),
            anonymous: true,
            form: FieldForm::OptionalStruct,
            value_type: ValueType::of::<Option<E>>(),
            get: getter(move |s: &S| Some(get(s) as &dyn FieldValue)),
            set: setter(move |s: &mut S| set(s) as &mut dyn FieldValue),
            nested: Some(Arc::new(move || {
                E::fields()
                    .into_iter()
                    .map(|field| field.lift_optional(get, set))
                    .collect()
            })),
        }
    }

    /// Attach a tag.
    pub fn tag(mut self, key: &'static str, value: &'static str) -> Self {
        self.tags.insert(key, value);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn tags(&self) -> &Tags {
        &self.tags
    }

    pub fn is_anonymous(&self) -> bool {
        self.anonymous
    }

    pub fn form(&self) -> FieldForm {
        self.form
    }

    /// Static type of the field's value.
    pub fn value_type(&self) -> ValueType {
        self.value_type
    }

    /// Fields of an anonymous struct field, already bound to `S`.
    pub fn nested(&self) -> Option<Vec<FieldSpec<S>>> {
        self.nested.as_ref().map(|nested| nested())
    }

    pub fn read<'a>(&self, owner: &'a S) -> Option<&'a dyn FieldValue> {
        (self.get)(owner)
    }

    pub fn write<'a>(&self, owner: &'a mut S) -> &'a mut dyn FieldValue {
        (self.set)(owner)
    }

    /// Rebinds this field of `S` to a parent `P` holding `S` inline.
    fn lift<P: 'static>(self, get: fn(&P) -> &S, set: fn(&mut P) -> &mut S) -> FieldSpec<P> {
        let inner_get = self.get;
        let inner_set = self.set;
        FieldSpec {
            name: self.name,
            tags: self.tags,
            anonymous: self.anonymous,
            form: self.form,
            value_type: self.value_type,
            get: getter(move |p: &P| inner_get(get(p))),
            set: setter(move |p: &mut P| inner_set(set(p))),
            nested: self.nested.map(|nested| -> Nested<P> {
                Arc::new(move || {
                    nested()
                        .into_iter()
                        .map(|field| field.lift(get, set))
                        .collect()
                })
            }),
        }
    }

    /// Rebinds this field of `S` to a parent `P` holding `Option<S>`.
    fn lift_optional<P: 'static>(
        self,
        get: fn(&P) -> &Option<S>,
        set: fn(&mut P) -> &mut Option<S>,
    ) -> FieldSpec<P>
    where
        S: Default,
    {
        let inner_get = self.get;
        let inner_set = self.set;
        FieldSpec {
            name: self.name,
            tags: self.tags,
            anonymous: self.anonymous,
            form: self.form,
            value_type: self.value_type,
            get: getter(move |p: &P| get(p).as_ref().and_then(|s| inner_get(s))),
            set: setter(move |p: &mut P| inner_set(set(p).get_or_insert_with(S::default))),
            nested: self.nested.map(|nested| -> Nested<P> {
                Arc::new(move || {
                    nested()
                        .into_iter()
                        .map(|field| field.lift_optional(get, set))
                        .collect()
                })
            }),
        }
    }
}

impl<S> Clone for FieldSpec<S> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            tags: self.tags.clone(),
            anonymous: self.anonymous,
            form: self.form,
            value_type: self.value_type,
            get: Arc::clone(&self.get),
            set: Arc::clone(&self.set),
            nested: self.nested.clone(),
        }
    }
}

impl<S> fmt::Debug for FieldSpec<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldSpec")
            .field("name", &self.name)
            .field("tags", &self.tags)
            .field("anonymous", &self.anonymous)
            .field("form", &self.form)
            .field("value_type", &self.value_type)
            .finish_non_exhaustive()
    }
}

/// Implements [`Shape`] for a struct by listing its fields.
///
/// ```ignore
/// shape!(Data {
///     number [wire = "num"],
///     text,
///     embed base,
///     embed_opt extra [mutation = ""],
/// });
/// ```
///
/// `embed` declares an anonymous struct field, `embed_opt` an anonymous
/// `Option` of a struct. Bracketed `key = "value"` pairs become tags.
#[macro_export]
macro_rules! shape {
    (@field $fields:ident;) => {};
    (@field $fields:ident; embed $field:ident $([$($key:ident = $val:literal),* $(,)?])? $(, $($rest:tt)*)?) => {
        $fields.push(
            $crate::FieldSpec::<Self>::embedded(
                stringify!($field),
                |s| &s.$field,
                |s| &mut s.$field,
            )
            $($(.tag(stringify!($key), $val))*)?
        );
        $crate::shape!(@field $fields; $($($rest)*)?);
    };
    (@field $fields:ident; embed_opt $field:ident $([$($key:ident = $val:literal),* $(,)?])? $(, $($rest:tt)*)?) => {
        $fields.push(
            $crate::FieldSpec::<Self>::embedded_optional(
                stringify!($field),
                |s| &s.$field,
                |s| &mut s.$field,
            )
            $($(.tag(stringify!($key), $val))*)?
        );
        $crate::shape!(@field $fields; $($($rest)*)?);
    };
    (@field $fields:ident; $field:ident $([$($key:ident = $val:literal),* $(,)?])? $(, $($rest:tt)*)?) => {
        $fields.push(
            $crate::FieldSpec::<Self>::value(
                stringify!($field),
                |s| &s.$field,
                |s| &mut s.$field,
            )
            $($(.tag(stringify!($key), $val))*)?
        );
        $crate::shape!(@field $fields; $($($rest)*)?);
    };
    ($ty:ty { $($body:tt)* }) => {
        impl $crate::Shape for $ty {
            fn fields() -> ::std::vec::Vec<$crate::FieldSpec<Self>> {
                #[allow(unused_mut)]
                let mut fields = ::std::vec::Vec::new();
                $crate::shape!(@field fields; $($body)*);
                fields
            }
        }
    };
}
