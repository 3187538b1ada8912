//! Field values.
//!
//! A `FieldValue` is whatever a struct field holds, seen through the small
//! capability set the mapping engine needs: type identity, zero checks,
//! same-type assignment, numeric access, sequence access and wire rendering.
//! Implementations exist for the scalar primitives, `String`, `Vec<T>`,
//! fixed arrays and `Option<T>`; user types opt in with [`field_value!`].

use std::any::{type_name, Any, TypeId};
use std::fmt;

/// Value as it travels to the document store.
pub type WireValue = serde_json::Value;

/// Underlying numeric kind of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberKind {
    Signed,
    Unsigned,
    Float,
}

impl fmt::Display for NumberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberKind::Signed => write!(f, "signed integer"),
            NumberKind::Unsigned => write!(f, "unsigned integer"),
            NumberKind::Float => write!(f, "float"),
        }
    }
}

/// A numeric field value widened to its kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Signed(i64),
    Unsigned(u64),
    Float(f64),
}

impl Number {
    /// Returns the numeric kind.
    pub fn kind(&self) -> NumberKind {
        match self {
            Number::Signed(_) => NumberKind::Signed,
            Number::Unsigned(_) => NumberKind::Unsigned,
            Number::Float(_) => NumberKind::Float,
        }
    }

    /// Adds two numbers of the same kind.
    ///
    /// Returns `None` when the kinds differ or integer addition overflows.
    pub fn checked_add(self, other: Number) -> Option<Number> {
        match (self, other) {
            (Number::Signed(a), Number::Signed(b)) => a.checked_add(b).map(Number::Signed),
            (Number::Unsigned(a), Number::Unsigned(b)) => a.checked_add(b).map(Number::Unsigned),
            (Number::Float(a), Number::Float(b)) => Some(Number::Float(a + b)),
            _ => None,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Signed(v) => write!(f, "{}", v),
            Number::Unsigned(v) => write!(f, "{}", v),
            Number::Float(v) => write!(f, "{}", v),
        }
    }
}

/// Borrowed view over the elements of a sequence or fixed array.
pub struct Elements<'a> {
    element_type: TypeId,
    element_label: &'static str,
    items: Vec<&'a dyn FieldValue>,
}

impl<'a> Elements<'a> {
    pub fn of<T: FieldValue>(items: impl IntoIterator<Item = &'a T>) -> Self {
        Self {
            element_type: TypeId::of::<T>(),
            element_label: type_name::<T>(),
            items: items
                .into_iter()
                .map(|item| item as &dyn FieldValue)
                .collect(),
        }
    }

    pub fn element_type(&self) -> TypeId {
        self.element_type
    }

    pub fn element_label(&self) -> &'static str {
        self.element_label
    }

    pub fn items(&self) -> &[&'a dyn FieldValue] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Element type of a growable sequence type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementType {
    pub id: TypeId,
    pub label: &'static str,
}

impl ElementType {
    pub fn of<T: 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            label: type_name::<T>(),
        }
    }
}

/// What a field's type is, known without a value at hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueType {
    pub label: &'static str,
    /// Set for types that accept appended elements.
    pub element: Option<ElementType>,
}

impl ValueType {
    pub fn of<T: FieldValue>() -> Self {
        Self {
            label: type_name::<T>(),
            element: T::sequence_element(),
        }
    }
}

/// A growable sequence that accepts elements of one type.
pub trait SequenceValue {
    /// Type of the elements held.
    fn element_type(&self) -> TypeId;

    /// Human readable element type name.
    fn element_label(&self) -> &'static str;

    /// Appends a clone of `item`. Returns false if `item` is not an element.
    fn append(&mut self, item: &dyn FieldValue) -> bool;
}

/// Capability set of a single struct field value.
pub trait FieldValue: Any + Send + Sync + fmt::Debug {
    fn as_any(&self) -> &dyn Any;

    /// Human readable type name, used in diagnostics.
    fn type_label(&self) -> &'static str {
        type_name::<Self>()
    }

    /// Returns true if this is the zero (empty) value of its type.
    fn is_zero(&self) -> bool;

    /// Overwrites `self` with a clone of `value` if both have the same type.
    fn assign_from(&mut self, value: &dyn FieldValue) -> bool;

    /// Renders the value for the document store.
    fn to_wire(&self) -> Result<WireValue, serde_json::Error>;

    /// Reads the value as a number, if it is one.
    fn number(&self) -> Option<Number> {
        None
    }

    /// Writes a number back. Returns false on kind mismatch or if the number
    /// does not fit the field's type.
    fn store_number(&mut self, _number: Number) -> bool {
        false
    }

    /// Element view for sequences and fixed arrays.
    fn elements(&self) -> Option<Elements<'_>> {
        None
    }

    /// Growable sequence access.
    fn sequence_mut(&mut self) -> Option<&mut dyn SequenceValue> {
        None
    }

    /// Element type of [`FieldValue::sequence_mut`] for this type.
    fn sequence_element() -> Option<ElementType>
    where
        Self: Sized,
    {
        None
    }
}

impl<'a> dyn FieldValue + 'a {
    /// Type identity of the concrete value.
    pub fn value_type(&self) -> TypeId {
        Any::type_id(self.as_any())
    }

    pub fn is<T: Any>(&self) -> bool {
        self.as_any().is::<T>()
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }
}

macro_rules! value_basics {
    () => {
        fn as_any(&self) -> &dyn Any {
            self
        }

        fn assign_from(&mut self, value: &dyn FieldValue) -> bool {
            match value.as_any().downcast_ref::<Self>() {
                Some(v) => {
                    *self = v.clone();
                    true
                }
                None => false,
            }
        }
    };
}

macro_rules! signed_value {
    ($($ty:ty),* $(,)?) => {$(
        impl FieldValue for $ty {
            value_basics!();

            fn is_zero(&self) -> bool {
                *self == 0
            }

            fn to_wire(&self) -> Result<WireValue, serde_json::Error> {
                serde_json::to_value(self)
            }

            fn number(&self) -> Option<Number> {
                Some(Number::Signed(*self as i64))
            }

            fn store_number(&mut self, number: Number) -> bool {
                match number {
                    Number::Signed(v) => match <$ty>::try_from(v) {
                        Ok(v) => {
                            *self = v;
                            true
                        }
                        Err(_) => false,
                    },
                    _ => false,
                }
            }
        }
    )*};
}

macro_rules! unsigned_value {
    ($($ty:ty),* $(,)?) => {$(
        impl FieldValue for $ty {
            value_basics!();

            fn is_zero(&self) -> bool {
                *self == 0
            }

            fn to_wire(&self) -> Result<WireValue, serde_json::Error> {
                serde_json::to_value(self)
            }

            fn number(&self) -> Option<Number> {
                Some(Number::Unsigned(*self as u64))
            }

            fn store_number(&mut self, number: Number) -> bool {
                match number {
                    Number::Unsigned(v) => match <$ty>::try_from(v) {
                        Ok(v) => {
                            *self = v;
                            true
                        }
                        Err(_) => false,
                    },
                    _ => false,
                }
            }
        }
    )*};
}

macro_rules! float_value {
    ($($ty:ty),* $(,)?) => {$(
        impl FieldValue for $ty {
            value_basics!();

            fn is_zero(&self) -> bool {
                *self == 0.0
            }

            fn to_wire(&self) -> Result<WireValue, serde_json::Error> {
                serde_json::to_value(self)
            }

            fn number(&self) -> Option<Number> {
                Some(Number::Float(*self as f64))
            }

            fn store_number(&mut self, number: Number) -> bool {
                match number {
                    Number::Float(v) => {
                        *self = v as $ty;
                        true
                    }
                    _ => false,
                }
            }
        }
    )*};
}

macro_rules! plain_value {
    ($($ty:ty),* $(,)?) => {$(
        impl FieldValue for $ty {
            value_basics!();

            fn is_zero(&self) -> bool {
                *self == <$ty>::default()
            }

            fn to_wire(&self) -> Result<WireValue, serde_json::Error> {
                serde_json::to_value(self)
            }
        }
    )*};
}

signed_value!(i8, i16, i32, i64, isize);
unsigned_value!(u8, u16, u32, u64, usize);
float_value!(f32, f64);
plain_value!(bool, char, String);

impl<T> FieldValue for Vec<T>
where
    T: FieldValue + Clone,
{
    value_basics!();

    fn is_zero(&self) -> bool {
        self.is_empty()
    }

    fn to_wire(&self) -> Result<WireValue, serde_json::Error> {
        self.iter()
            .map(|item| item.to_wire())
            .collect::<Result<Vec<_>, _>>()
            .map(WireValue::Array)
    }

    fn elements(&self) -> Option<Elements<'_>> {
        Some(Elements::of(self.iter()))
    }

    fn sequence_mut(&mut self) -> Option<&mut dyn SequenceValue> {
        Some(self)
    }

    fn sequence_element() -> Option<ElementType> {
        Some(ElementType::of::<T>())
    }
}

impl<T> SequenceValue for Vec<T>
where
    T: FieldValue + Clone,
{
    fn element_type(&self) -> TypeId {
        TypeId::of::<T>()
    }

    fn element_label(&self) -> &'static str {
        type_name::<T>()
    }

    fn append(&mut self, item: &dyn FieldValue) -> bool {
        match item.downcast_ref::<T>() {
            Some(item) => {
                self.push(item.clone());
                true
            }
            None => false,
        }
    }
}

impl<T, const N: usize> FieldValue for [T; N]
where
    T: FieldValue + Clone,
{
    value_basics!();

    fn is_zero(&self) -> bool {
        self.iter().all(|item| item.is_zero())
    }

    fn to_wire(&self) -> Result<WireValue, serde_json::Error> {
        self.iter()
            .map(|item| item.to_wire())
            .collect::<Result<Vec<_>, _>>()
            .map(WireValue::Array)
    }

    fn elements(&self) -> Option<Elements<'_>> {
        Some(Elements::of(self.iter()))
    }
}

impl<T> FieldValue for Option<T>
where
    T: FieldValue + Clone,
{
    value_basics!();

    fn is_zero(&self) -> bool {
        self.is_none()
    }

    fn to_wire(&self) -> Result<WireValue, serde_json::Error> {
        match self {
            Some(value) => value.to_wire(),
            None => Ok(WireValue::Null),
        }
    }
}

/// Implements [`FieldValue`] for a user type.
///
/// The type must be `Clone + PartialEq + Default + Debug + Serialize + Send +
/// Sync + 'static`. Its zero value is `Default::default()`.
#[macro_export]
macro_rules! field_value {
    ($($ty:ty),+ $(,)?) => {$(
        impl $crate::FieldValue for $ty {
            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }

            fn is_zero(&self) -> bool {
                *self == <$ty as ::std::default::Default>::default()
            }

            fn assign_from(&mut self, value: &dyn $crate::FieldValue) -> bool {
                match value.as_any().downcast_ref::<$ty>() {
                    Some(v) => {
                        *self = ::std::clone::Clone::clone(v);
                        true
                    }
                    None => false,
                }
            }

            fn to_wire(
                &self,
            ) -> ::std::result::Result<$crate::WireValue, $crate::__private::serde_json::Error> {
                $crate::__private::serde_json::to_value(self)
            }
        }
    )+};
}
