use crate::number::Number;
use std::{
    cmp::Ordering,
    hash::{Hash, Hasher},
};

/// Total canonical comparator for numbers.
///
/// Ordering rules:
/// 1. Kind tag
/// 2. Kind-native comparison (floats use IEEE total ordering)
///
/// Mixed-kind comparisons are tag-only and must remain deterministic.
#[must_use]
pub fn canonical_cmp(left: &Number, right: &Number) -> Ordering {
    let tag = left.kind().to_u8().cmp(&right.kind().to_u8());
    if tag != Ordering::Equal {
        return tag;
    }

    match (left, right) {
        (Number::Decimal(a), Number::Decimal(b)) => a.cmp(b),
        (Number::IntBig(a), Number::IntBig(b)) => a.cmp(b),
        (Number::Float64(a), Number::Float64(b)) => a.total_cmp(b),
        (Number::Float32(a), Number::Float32(b)) => a.total_cmp(b),
        (Number::Int64(a), Number::Int64(b)) => a.cmp(b),
        (Number::Int32(a), Number::Int32(b)) => a.cmp(b),
        (Number::Int16(a), Number::Int16(b)) => a.cmp(b),
        (Number::Int8(a), Number::Int8(b)) => a.cmp(b),
        _ => Ordering::Equal,
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        canonical_cmp(self, other) == Ordering::Equal
    }
}

impl Eq for Number {}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Number {
    fn cmp(&self, other: &Self) -> Ordering {
        canonical_cmp(self, other)
    }
}

impl Hash for Number {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u8(self.kind().to_u8());
        match self {
            Self::Decimal(v) => v.normalize().hash(state),
            Self::IntBig(v) => v.hash(state),
            Self::Float64(v) => state.write_u64(v.to_bits()),
            Self::Float32(v) => state.write_u32(v.to_bits()),
            Self::Int64(v) => v.hash(state),
            Self::Int32(v) => v.hash(state),
            Self::Int16(v) => v.hash(state),
            Self::Int8(v) => v.hash(state),
        }
    }
}
