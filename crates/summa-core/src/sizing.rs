//! Output sizing for grouped reductions.

use derive_more::Display;
use serde::{Deserialize, Serialize};

///
/// SizingPolicy
///
/// `Padded` sizes fixed outputs to `max(outer_count, largest group)` for
/// parity with legacy callers; slots beyond `outer_count` hold the zero of
/// the sum kind. `Exact` sizes them to `outer_count`.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Display, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SizingPolicy {
    #[default]
    Padded,
    Exact,
}

impl SizingPolicy {
    /// Slot count for a fixed output under this policy.
    #[must_use]
    pub fn slots(self, outer_count: usize, group_sizes: &[usize]) -> usize {
        match self {
            Self::Padded => capacity(outer_count, group_sizes),
            Self::Exact => outer_count,
        }
    }
}

/// Backing capacity for `outer_count` groups: the larger of the group count
/// and the largest group size (0 when there are no groups).
#[must_use]
pub fn capacity(outer_count: usize, group_sizes: &[usize]) -> usize {
    let inner_max = group_sizes.iter().copied().max().unwrap_or_default();

    if outer_count > inner_max {
        outer_count
    } else {
        inner_max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_takes_larger_of_outer_and_inner() {
        assert_eq!(capacity(2, &[3, 2]), 3);
        assert_eq!(capacity(4, &[1, 2, 1, 1]), 4);
        assert_eq!(capacity(2, &[2, 2]), 2);
    }

    #[test]
    fn capacity_of_no_groups_is_outer_count() {
        assert_eq!(capacity(0, &[]), 0);
        assert_eq!(capacity(3, &[]), 3);
    }

    #[test]
    fn exact_policy_ignores_group_sizes() {
        assert_eq!(SizingPolicy::Exact.slots(2, &[7, 1]), 2);
        assert_eq!(SizingPolicy::Padded.slots(2, &[7, 1]), 7);
    }
}
