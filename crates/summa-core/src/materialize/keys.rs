use crate::{number::Number, shape::ShapeError, value::Value};
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

///
/// KeyError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum KeyError {
    #[error("key source has {keys} keys but {groups} groups need keys")]
    SizeMismatch { keys: usize, groups: usize },
}

///
/// KeySource
///
/// Where the keys of a mapping output come from.
///
/// Positional  → 0-based group index.
/// Sequence    → the supplied keys, in order.
/// Mapping     → the keys of the supplied entries, in entry order.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum KeySource {
    #[default]
    Positional,
    Sequence(Vec<Value>),
    Mapping(Vec<(Value, Value)>),
}

impl KeySource {
    /// Interpret an optional dynamic key argument.
    ///
    /// Absent and `Null` mean positional keys; a `Map` contributes its keys.
    pub fn from_value(keys: Option<&Value>) -> Result<Self, ShapeError> {
        match keys {
            None | Some(Value::Null) => Ok(Self::Positional),
            Some(Value::Array(items) | Value::List(items)) => Ok(Self::Sequence(items.clone())),
            Some(Value::Map(entries)) => Ok(Self::Mapping(entries.clone())),
            Some(other) => Err(ShapeError::UnsupportedKeys {
                label: other.label(),
            }),
        }
    }

    /// Resolve the keys for `groups` sums, checking the supplied count first.
    pub fn into_keys(self, groups: usize) -> Result<Vec<Value>, KeyError> {
        match self {
            Self::Positional => Ok((0..groups).map(Value::index).collect()),
            Self::Sequence(keys) => {
                check_size(keys.len(), groups)?;
                Ok(keys)
            }
            Self::Mapping(entries) => {
                check_size(entries.len(), groups)?;
                Ok(entries.into_iter().map(|(key, _)| key).collect())
            }
        }
    }
}

/// Fail unless at least one key exists per group.
pub const fn check_size(keys: usize, groups: usize) -> Result<(), KeyError> {
    if keys < groups {
        return Err(KeyError::SizeMismatch { keys, groups });
    }

    Ok(())
}

/// Pair `sums[i]` with the `i`-th key, for every sum.
///
/// The key cursor advances on every entry; surplus keys are ignored.
pub fn assign_keys<K, I>(keys: I, sums: Vec<Number>) -> Result<Vec<(K, Number)>, KeyError>
where
    I: IntoIterator<Item = K>,
    I::IntoIter: ExactSizeIterator,
{
    let keys = keys.into_iter();
    check_size(keys.len(), sums.len())?;

    Ok(keys.zip(sums).collect())
}
