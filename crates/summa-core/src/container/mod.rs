//! Module: container
//! Responsibility: construct empty output containers by type or by descriptor.
//! Does not own: what gets written into them (see `materialize`).
//! Boundary: the only place output containers are instantiated.


use crate::number::Number;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::{
    collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque},
    hash::Hash,
    str::FromStr,
};
use thiserror::Error as ThisError;

///
/// ConstructionError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ConstructionError {
    #[error("unknown {family} container descriptor: '{name}'")]
    UnknownDescriptor { family: &'static str, name: String },

    #[error("{container} container could not be constructed: {reason}")]
    Rejected { container: String, reason: String },
}

impl ConstructionError {
    pub fn rejected(container: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Rejected {
            container: container.into(),
            reason: reason.into(),
        }
    }
}

///
/// SequenceContainer
///
/// Output container that collects per-group sums in write order.
/// `capacity` is a reservation hint; occupancy is decided by the writer.
///

pub trait SequenceContainer: Sized {
    fn construct(capacity: usize) -> Result<Self, ConstructionError>;

    fn append(&mut self, value: Number);
}

impl SequenceContainer for Vec<Number> {
    fn construct(capacity: usize) -> Result<Self, ConstructionError> {
        Ok(Self::with_capacity(capacity))
    }

    fn append(&mut self, value: Number) {
        self.push(value);
    }
}

impl SequenceContainer for VecDeque<Number> {
    fn construct(capacity: usize) -> Result<Self, ConstructionError> {
        Ok(Self::with_capacity(capacity))
    }

    fn append(&mut self, value: Number) {
        self.push_back(value);
    }
}

impl SequenceContainer for LinkedList<Number> {
    fn construct(_: usize) -> Result<Self, ConstructionError> {
        Ok(Self::new())
    }

    fn append(&mut self, value: Number) {
        self.push_back(value);
    }
}

// set containers collapse equal sums
impl SequenceContainer for BTreeSet<Number> {
    fn construct(_: usize) -> Result<Self, ConstructionError> {
        Ok(Self::new())
    }

    fn append(&mut self, value: Number) {
        self.insert(value);
    }
}

impl SequenceContainer for HashSet<Number> {
    fn construct(capacity: usize) -> Result<Self, ConstructionError> {
        Ok(Self::with_capacity(capacity))
    }

    fn append(&mut self, value: Number) {
        self.insert(value);
    }
}

///
/// MappingContainer
///
/// Keyed output container. `put` replaces the value of an existing key.
///

pub trait MappingContainer<K>: Sized {
    fn construct(capacity: usize) -> Result<Self, ConstructionError>;

    fn put(&mut self, key: K, value: Number);
}

impl<K: Ord> MappingContainer<K> for BTreeMap<K, Number> {
    fn construct(_: usize) -> Result<Self, ConstructionError> {
        Ok(Self::new())
    }

    fn put(&mut self, key: K, value: Number) {
        self.insert(key, value);
    }
}

impl<K: Eq + Hash> MappingContainer<K> for HashMap<K, Number> {
    fn construct(capacity: usize) -> Result<Self, ConstructionError> {
        Ok(Self::with_capacity(capacity))
    }

    fn put(&mut self, key: K, value: Number) {
        self.insert(key, value);
    }
}

// insertion-ordered entries; a repeated key keeps its first position
impl<K: PartialEq> MappingContainer<K> for Vec<(K, Number)> {
    fn construct(capacity: usize) -> Result<Self, ConstructionError> {
        Ok(Self::with_capacity(capacity))
    }

    fn put(&mut self, key: K, value: Number) {
        match self.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => *slot = value,
            None => self.push((key, value)),
        }
    }
}

///
/// SequenceKind
///
/// Descriptor registry for built-in sequence outputs.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SequenceKind {
    /// Fixed-size slots sized by the sizing policy.
    #[display("array")]
    Array,

    #[default]
    #[display("list")]
    List,

    #[display("deque")]
    Deque,

    #[display("linked")]
    Linked,

    #[display("sorted-set")]
    SortedSet,
}

impl SequenceKind {
    pub const ALL: [Self; 5] = [
        Self::Array,
        Self::List,
        Self::Deque,
        Self::Linked,
        Self::SortedSet,
    ];
}

impl FromStr for SequenceKind {
    type Err = ConstructionError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.to_string() == name)
            .ok_or_else(|| ConstructionError::UnknownDescriptor {
                family: "sequence",
                name: name.to_string(),
            })
    }
}

///
/// MappingKind
///
/// Descriptor registry for built-in mapping outputs.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MappingKind {
    /// Entries in write order.
    #[default]
    #[display("insertion")]
    Insertion,

    /// Entries in canonical key order.
    #[display("sorted")]
    Sorted,

    #[display("hashed")]
    Hashed,
}

impl MappingKind {
    pub const ALL: [Self; 3] = [Self::Insertion, Self::Sorted, Self::Hashed];
}

impl FromStr for MappingKind {
    type Err = ConstructionError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.to_string() == name)
            .ok_or_else(|| ConstructionError::UnknownDescriptor {
                family: "mapping",
                name: name.to_string(),
            })
    }
}
