mod compare;
mod tag;


use crate::{
    number::Number,
    types::{Decimal, Int},
};
use serde::{Deserialize, Serialize};
use std::slice;

// re-exports
pub use compare::canonical_cmp;
pub use tag::ValueTag;

///
/// Value
///
/// Dynamic input accepted by the engine.
///
/// Array       → fixed-size sequence (sized outputs are derived from arrays).
/// List        → growable sequence.
/// Map         → keyed mapping; entries keep the caller's iteration order.
/// Null        → absent input; never classifiable.
///

#[derive(Clone, Debug, Deserialize, Serialize)]
pub enum Value {
    Array(Vec<Self>),
    Bool(bool),
    List(Vec<Self>),
    Map(Vec<(Self, Self)>),
    Null,
    Number(Number),
    Text(String),
}

impl Value {
    ///
    /// CONSTRUCTION
    ///

    /// Build a `Value::Array` from owned items.
    pub fn array<T, I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Self>,
    {
        Self::Array(items.into_iter().map(Into::into).collect())
    }

    /// Build a `Value::List` from owned items.
    pub fn list<T, I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Self>,
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    /// Build a `Value::Map` from owned entries, preserving their order.
    pub fn map<K, V, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Self>,
        V: Into<Self>,
    {
        Self::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Positional key for index `i`; Int32 while it fits, Int64 beyond.
    #[must_use]
    pub fn index(i: usize) -> Self {
        match i32::try_from(i) {
            Ok(n) => Self::Number(Number::Int32(n)),
            Err(_) => Self::Number(Number::Int64(i64::try_from(i).unwrap_or(i64::MAX))),
        }
    }

    ///
    /// TYPES
    ///

    #[must_use]
    pub const fn tag(&self) -> ValueTag {
        tag::canonical_tag(self)
    }

    /// Stable label used in diagnostics.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.tag().label()
    }

    #[must_use]
    pub const fn as_number(&self) -> Option<&Number> {
        match self {
            Self::Number(n) => Some(n),
            _ => None,
        }
    }

    /// Element count of a container; `None` for scalars.
    #[must_use]
    pub const fn len(&self) -> Option<usize> {
        match self {
            Self::Array(items) | Self::List(items) => Some(items.len()),
            Self::Map(entries) => Some(entries.len()),
            _ => None,
        }
    }

    /// Iterate the members of a container: sequence items, or mapping values.
    #[must_use]
    pub fn members(&self) -> Option<Members<'_>> {
        match self {
            Self::Array(items) | Self::List(items) => Some(Members::Items(items.iter())),
            Self::Map(entries) => Some(Members::Entries(entries.iter())),
            _ => None,
        }
    }

    /// First member of a container, if any.
    #[must_use]
    pub fn first_member(&self) -> Option<&Self> {
        self.members().and_then(|mut members| members.next())
    }
}

///
/// Members
///
/// Borrowing iterator over container members in iteration order.
///

#[derive(Clone, Debug)]
pub enum Members<'a> {
    Items(slice::Iter<'a, Value>),
    Entries(slice::Iter<'a, (Value, Value)>),
}

impl<'a> Iterator for Members<'a> {
    type Item = &'a Value;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Items(iter) => iter.next(),
            Self::Entries(iter) => iter.next().map(|(_, v)| v),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::Items(iter) => iter.size_hint(),
            Self::Entries(iter) => iter.size_hint(),
        }
    }
}

impl ExactSizeIterator for Members<'_> {}

///
/// CONVERSIONS
///

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        Self::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

macro_rules! impl_value_from_numeric {
    ( $( $type:ty ),* $(,)? ) => {
        $(
            impl From<$type> for Value {
                fn from(n: $type) -> Self {
                    Self::Number(Number::from(n))
                }
            }
        )*
    };
}

impl_value_from_numeric!(Decimal, Int, f64, f32, i64, i32, i16, i8);
