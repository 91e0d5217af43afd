use crate::{number, value::Value};
use std::{
    cmp::Ordering,
    hash::{Hash, Hasher},
};

/// Total canonical comparator used for ordered output keys.
///
/// Ordering rules:
/// 1. Canonical variant tag
/// 2. Variant-specific comparison for same-tagged values
///
/// Mixed-variant comparisons are tag-only and must remain deterministic.
#[must_use]
pub fn canonical_cmp(left: &Value, right: &Value) -> Ordering {
    let tag = left.tag().to_u8().cmp(&right.tag().to_u8());
    if tag != Ordering::Equal {
        return tag;
    }

    canonical_cmp_same_tag(left, right)
}

fn canonical_cmp_same_tag(left: &Value, right: &Value) -> Ordering {
    match (left, right) {
        (Value::Array(a), Value::Array(b)) | (Value::List(a), Value::List(b)) => {
            canonical_cmp_value_list(a, b)
        }
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        (Value::Map(a), Value::Map(b)) => canonical_cmp_value_map(a, b),
        (Value::Number(a), Value::Number(b)) => number::canonical_cmp(a, b),
        (Value::Text(a), Value::Text(b)) => a.cmp(b),
        _ => Ordering::Equal,
    }
}

fn canonical_cmp_value_list(left: &[Value], right: &[Value]) -> Ordering {
    for (l, r) in left.iter().zip(right.iter()) {
        let cmp = canonical_cmp(l, r);
        if cmp != Ordering::Equal {
            return cmp;
        }
    }

    left.len().cmp(&right.len())
}

fn canonical_cmp_value_map(left: &[(Value, Value)], right: &[(Value, Value)]) -> Ordering {
    for ((left_key, left_value), (right_key, right_value)) in left.iter().zip(right.iter()) {
        let key_cmp = canonical_cmp(left_key, right_key);
        if key_cmp != Ordering::Equal {
            return key_cmp;
        }

        let value_cmp = canonical_cmp(left_value, right_value);
        if value_cmp != Ordering::Equal {
            return value_cmp;
        }
    }

    left.len().cmp(&right.len())
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        canonical_cmp(self, other) == Ordering::Equal
    }
}

impl Eq for Value {}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        canonical_cmp(self, other)
    }
}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u8(self.tag().to_u8());
        match self {
            Self::Array(items) | Self::List(items) => items.hash(state),
            Self::Bool(b) => b.hash(state),
            Self::Map(entries) => entries.hash(state),
            Self::Null => {}
            Self::Number(n) => n.hash(state),
            Self::Text(s) => s.hash(state),
        }
    }
}
