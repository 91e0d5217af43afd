//! Module: shape
//! Responsibility: classify a dynamic input into one closed shape variant.
//! Does not own: element validation beyond the first inspected member.
//! Boundary: runs once per call before any reduction starts.

#[cfg(test)]
mod tests;

use crate::value::Value;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

///
/// ShapeError
///
/// Input, group, element, or key-source structure the engine cannot traverse.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ShapeError {
    #[error("unsupported input: {label} (expected Number, Array, List, or Map)")]
    UnsupportedInput { label: &'static str },

    #[error("unsupported member at index {index}: {label} (expected Number, Array, List, or Map)")]
    UnsupportedMember { index: usize, label: &'static str },

    #[error("unsupported element at group {group} index {index}: {label} (expected Number)")]
    UnsupportedElement {
        group: usize,
        index: usize,
        label: &'static str,
    },

    #[error("unsupported group at index {index}: {label} (expected Array, List, or Map)")]
    UnsupportedGroup { index: usize, label: &'static str },

    #[error("{shape} input is not supported by this operation")]
    UnsupportedShape { shape: Shape },

    #[error("unsupported key source: {label} (expected Array, List, or Map)")]
    UnsupportedKeys { label: &'static str },

    #[error("{label} input must not be empty")]
    EmptyInput { label: &'static str },

    #[error("group at index {index} must not be empty")]
    EmptyGroup { index: usize },
}

impl ShapeError {
    /// True for the empty-container failures.
    #[must_use]
    pub const fn is_empty_input(&self) -> bool {
        matches!(self, Self::EmptyInput { .. } | Self::EmptyGroup { .. })
    }
}

///
/// Container
///
/// Runtime container form. `Array` is the fixed-size sequence sub-form.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
pub enum Container {
    Array,
    List,
    Map,
}

impl Container {
    #[must_use]
    pub const fn of(value: &Value) -> Option<Self> {
        match value {
            Value::Array(_) => Some(Self::Array),
            Value::List(_) => Some(Self::List),
            Value::Map(_) => Some(Self::Map),
            _ => None,
        }
    }
}

///
/// Shape
///
/// Closed classification of an input's nesting, resolved once per call.
/// `Nested` covers all nine depth-2 combinations of (outer, inner).
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
pub enum Shape {
    #[display("Scalar")]
    Scalar,

    #[display("{_0}")]
    Flat(Container),

    #[display("{outer}Of{inner}")]
    Nested { outer: Container, inner: Container },
}

impl Shape {
    /// Number of nesting levels above the numeric leaves.
    #[must_use]
    pub const fn depth(self) -> usize {
        match self {
            Self::Scalar => 0,
            Self::Flat(_) => 1,
            Self::Nested { .. } => 2,
        }
    }

    #[must_use]
    pub const fn is_nested(self) -> bool {
        matches!(self, Self::Nested { .. })
    }

    /// Outer container form, if any.
    #[must_use]
    pub const fn outer(self) -> Option<Container> {
        match self {
            Self::Scalar => None,
            Self::Flat(outer) | Self::Nested { outer, .. } => Some(outer),
        }
    }
}

/// Classify `value` by its outer container and, for nested input, its first member.
///
/// Only the first member is inspected; the remaining members are validated
/// lazily by the reduction that walks them.
pub fn classify(value: &Value) -> Result<Shape, ShapeError> {
    if matches!(value, Value::Number(_)) {
        return Ok(Shape::Scalar);
    }

    let Some(outer) = Container::of(value) else {
        return Err(ShapeError::UnsupportedInput {
            label: value.label(),
        });
    };

    let Some(first) = value.first_member() else {
        return Err(ShapeError::EmptyInput {
            label: value.label(),
        });
    };

    if matches!(first, Value::Number(_)) {
        return Ok(Shape::Flat(outer));
    }

    let Some(inner) = Container::of(first) else {
        return Err(ShapeError::UnsupportedMember {
            index: 0,
            label: first.label(),
        });
    };

    if first.len() == Some(0) {
        return Err(ShapeError::EmptyGroup { index: 0 });
    }

    Ok(Shape::Nested { outer, inner })
}
