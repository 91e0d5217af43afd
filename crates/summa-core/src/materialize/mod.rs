//! Module: materialize
//! Responsibility: write per-group sums into a requested output container.
//! Does not own: reduction, or choosing the slot count (see `sizing`).
//! Boundary: consumes the sums of a completed reduction; never returns partial output.

mod keys;


use crate::{
    container::{
        ConstructionError, MappingContainer, MappingKind, SequenceContainer, SequenceKind,
    },
    number::{Number, NumericKind},
    value::Value,
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap, LinkedList, VecDeque};
use thiserror::Error as ThisError;

// re-exports
pub use keys::{KeyError, KeySource, assign_keys, check_size};

///
/// MaterializeError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum MaterializeError {
    #[error(transparent)]
    Key(#[from] KeyError),

    #[error(transparent)]
    Construction(#[from] ConstructionError),
}

///
/// OutputSpec
///
/// Requested result shape for one call.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum OutputSpec {
    /// Single sum of a scalar or flat input.
    #[default]
    Scalar,

    Sequence(SequenceKind),

    Mapping { kind: MappingKind, keys: KeySource },
}

impl OutputSpec {
    #[must_use]
    pub const fn sequence(kind: SequenceKind) -> Self {
        Self::Sequence(kind)
    }

    #[must_use]
    pub const fn mapping(kind: MappingKind, keys: KeySource) -> Self {
        Self::Mapping { kind, keys }
    }
}

///
/// Output
///
/// Materialized result of a dynamic call, one variant per built-in container.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Output {
    Scalar(Number),
    Array(Vec<Number>),
    List(Vec<Number>),
    Deque(VecDeque<Number>),
    Linked(LinkedList<Number>),
    SortedSet(BTreeSet<Number>),
    InsertionMap(Vec<(Value, Number)>),
    SortedMap(BTreeMap<Value, Number>),
    HashedMap(HashMap<Value, Number>),
}

impl Output {
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Scalar(_) => "Scalar",
            Self::Array(_) => "Array",
            Self::List(_) => "List",
            Self::Deque(_) => "Deque",
            Self::Linked(_) => "Linked",
            Self::SortedSet(_) => "SortedSet",
            Self::InsertionMap(_) => "InsertionMap",
            Self::SortedMap(_) => "SortedMap",
            Self::HashedMap(_) => "HashedMap",
        }
    }

    /// Number of values held; padded array slots count.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Scalar(_) => 1,
            Self::Array(v) | Self::List(v) => v.len(),
            Self::Deque(v) => v.len(),
            Self::Linked(v) => v.len(),
            Self::SortedSet(v) => v.len(),
            Self::InsertionMap(v) => v.len(),
            Self::SortedMap(v) => v.len(),
            Self::HashedMap(v) => v.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub const fn as_scalar(&self) -> Option<&Number> {
        match self {
            Self::Scalar(n) => Some(n),
            _ => None,
        }
    }

    /// Look up a mapping output's value by key.
    #[must_use]
    pub fn get(&self, key: &Value) -> Option<&Number> {
        match self {
            Self::InsertionMap(entries) => entries.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            Self::SortedMap(map) => map.get(key),
            Self::HashedMap(map) => map.get(key),
            _ => None,
        }
    }
}

///
/// ARRAY
///

/// Fixed-size output: `slots` entries pre-filled with the zero of the first
/// sum's kind, then `sums[i]` written at position `i`.
///
/// `slots` never truncates; at least one slot exists per sum.
#[must_use]
pub fn materialize_array(sums: Vec<Number>, slots: usize) -> Vec<Number> {
    let zero = sums
        .first()
        .map_or_else(|| NumericKind::default().zero(), Number::zero_of);

    let mut array = vec![zero; slots.max(sums.len())];
    for (slot, sum) in array.iter_mut().zip(sums) {
        *slot = sum;
    }

    array
}

///
/// SEQUENCE
///

/// Append every sum, in order, to a container built by `factory`.
///
/// `capacity` is passed through as the reservation hint.
pub fn materialize_sequence<C, F>(
    sums: Vec<Number>,
    capacity: usize,
    factory: F,
) -> Result<C, ConstructionError>
where
    C: SequenceContainer,
    F: FnOnce(usize) -> Result<C, ConstructionError>,
{
    let mut container = factory(capacity)?;
    for sum in sums {
        container.append(sum);
    }

    Ok(container)
}

/// Build one of the built-in sequence outputs.
pub fn materialize_sequence_kind(
    kind: SequenceKind,
    sums: Vec<Number>,
    slots: usize,
    capacity: usize,
) -> Result<Output, ConstructionError> {
    let output = match kind {
        SequenceKind::Array => Output::Array(materialize_array(sums, slots)),
        SequenceKind::List => Output::List(materialize_sequence(
            sums,
            capacity,
            <Vec<Number> as SequenceContainer>::construct,
        )?),
        SequenceKind::Deque => {
            Output::Deque(materialize_sequence(sums, capacity, VecDeque::construct)?)
        }
        SequenceKind::Linked => {
            Output::Linked(materialize_sequence(sums, capacity, LinkedList::construct)?)
        }
        SequenceKind::SortedSet => {
            Output::SortedSet(materialize_sequence(sums, capacity, BTreeSet::construct)?)
        }
    };

    Ok(output)
}

///
/// MAPPING
///

/// Write `(key, sum)` pairs into a container built by `factory`.
///
/// Keys are checked against the sum count before the container is built.
pub fn materialize_mapping<K, I, M, F>(
    keys: I,
    sums: Vec<Number>,
    factory: F,
) -> Result<M, MaterializeError>
where
    I: IntoIterator<Item = K>,
    I::IntoIter: ExactSizeIterator,
    M: MappingContainer<K>,
    F: FnOnce(usize) -> Result<M, ConstructionError>,
{
    let entries = assign_keys(keys, sums)?;
    let mut container = factory(entries.len())?;
    for (key, sum) in entries {
        container.put(key, sum);
    }

    Ok(container)
}

/// Build one of the built-in mapping outputs from a dynamic key source.
pub fn materialize_mapping_kind(
    kind: MappingKind,
    keys: KeySource,
    sums: Vec<Number>,
) -> Result<Output, MaterializeError> {
    let keys = keys.into_keys(sums.len())?;

    let output = match kind {
        MappingKind::Insertion => Output::InsertionMap(materialize_mapping(
            keys,
            sums,
            <Vec<(Value, Number)> as MappingContainer<Value>>::construct,
        )?),
        MappingKind::Sorted => {
            Output::SortedMap(materialize_mapping(keys, sums, BTreeMap::construct)?)
        }
        MappingKind::Hashed => {
            Output::HashedMap(materialize_mapping(keys, sums, HashMap::construct)?)
        }
    };

    Ok(output)
}
