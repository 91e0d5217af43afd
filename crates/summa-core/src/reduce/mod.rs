//! Module: reduce
//! Responsibility: left-fold numeric members into sums, one per group.
//! Does not own: kind resolution (see `number::resolve_add`) or output shaping.
//! Boundary: consumes inputs already accepted by `shape::classify`.


use crate::{
    number::{AdditionPolicy, ArithmeticError, Number, resolve_add},
    shape::{Shape, ShapeError},
    value::Value,
};
use thiserror::Error as ThisError;

///
/// ReduceError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ReduceError {
    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
}

///
/// Reduction
///
/// Per-group sums plus the sizes the sizing policy needs.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Reduction {
    pub sums: Vec<Number>,
    pub group_sizes: Vec<usize>,
}

impl Reduction {
    /// Number of groups reduced; always the outer container's member count.
    #[must_use]
    pub const fn group_count(&self) -> usize {
        self.sums.len()
    }

    /// Total numeric elements folded across all groups.
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.group_sizes.iter().sum()
    }
}

/// Fold one group left to right, seeded by its first element.
///
/// `group_index` is reported in diagnostics only.
pub fn reduce(
    group: &Value,
    group_index: usize,
    policy: AdditionPolicy,
) -> Result<Number, ReduceError> {
    let Some(mut members) = group.members() else {
        return Err(ShapeError::UnsupportedGroup {
            index: group_index,
            label: group.label(),
        }
        .into());
    };

    let Some(first) = members.next() else {
        return Err(ShapeError::EmptyGroup { index: group_index }.into());
    };
    let mut sum = element(first, group_index, 0)?.clone();

    for (offset, member) in members.enumerate() {
        let next = element(member, group_index, offset + 1)?;
        sum = resolve_add(&sum, next, policy)?;
    }

    Ok(sum)
}

/// Reduce every group of a nested input, in outer iteration order.
pub fn reduce_all(outer: &Value, policy: AdditionPolicy) -> Result<Reduction, ReduceError> {
    let Some(groups) = outer.members() else {
        return Err(ShapeError::UnsupportedInput {
            label: outer.label(),
        }
        .into());
    };

    let mut sums = Vec::with_capacity(groups.len());
    let mut group_sizes = Vec::with_capacity(groups.len());

    for (index, group) in groups.enumerate() {
        sums.push(reduce(group, index, policy)?);
        group_sizes.push(group.len().unwrap_or_default());
    }

    Ok(Reduction { sums, group_sizes })
}

/// Reduce a scalar or flat input to one number.
///
/// Nested input is rejected: a depth-2 reduction needs an output container.
pub fn reduce_value(
    value: &Value,
    shape: Shape,
    policy: AdditionPolicy,
) -> Result<Number, ReduceError> {
    match (shape, value) {
        (Shape::Scalar, Value::Number(n)) => Ok(n.clone()),
        (Shape::Flat(_), _) => reduce(value, 0, policy),
        _ => Err(ShapeError::UnsupportedShape { shape }.into()),
    }
}

// Require a numeric member; anything else is a heterogeneous input.
fn element(value: &Value, group: usize, index: usize) -> Result<&Number, ShapeError> {
    value
        .as_number()
        .ok_or_else(|| ShapeError::UnsupportedElement {
            group,
            index,
            label: value.label(),
        })
}
