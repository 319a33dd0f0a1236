// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The three values the enumeration talks about: indexes, groups, and pairs.
//!
//! An index is a position in ℕ. A group is a diagonal of ℕ×ℕ, numbered by the sum
//! of a pair's components. Group `g` holds exactly `g + 1` consecutive indexes, so
//! the groups tile ℕ end to end:
//!
//! ```text
//! group │ 0     │ 1           │ 2                 │ 3
//! index │ 0     │ 1     2     │ 3     4     5     │ 6     7   ...
//! pair  │ (0,0) │ (0,1) (1,0) │ (0,2) (1,1) (2,0) │ (0,3) (1,2) ...
//! ```
//!
//! # Invariants
//!
//! - **Pair**: `first + second == group`, so `first ≤ group` and `second ≤ group`.
//! - **GroupInterval**: `min_index ≤ max_index` and `max_index - min_index == group`.
//!   Construction fails for groups whose last index doesn't fit in a `u64`.

use std::fmt;
use std::iter::FusedIterator;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::pairing::pairing_inverse;
use crate::triangular::{try_max_index_from_group, try_min_index_from_group};
use crate::verify::contracts::check_group_interval;

/// A position in the linear enumeration of ℕ.
pub type Index = u64;

/// A diagonal of the ℕ×ℕ enumeration: the sum of a pair's components.
pub type Group = u64;

/// An ordered pair of naturals, the image of an index under [`pairing`](crate::pairing).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pair {
    pub first: u64,
    pub second: u64,
}

impl Pair {
    pub const fn new(first: u64, second: u64) -> Self {
        Self { first, second }
    }

    /// The diagonal this pair sits on.
    ///
    /// Returns `None` if `first + second` overflows, which no pair produced by
    /// [`pairing`](crate::pairing) can do.
    pub const fn group(&self) -> Option<Group> {
        self.first.checked_add(self.second)
    }

    /// Linear index of this pair. Same as [`pairing_inverse`].
    ///
    /// # Panics
    /// Panics if the index does not fit in a `u64`.
    pub fn index(&self) -> Index {
        pairing_inverse(self.first, self.second)
    }
}

impl From<(u64, u64)> for Pair {
    fn from((first, second): (u64, u64)) -> Self {
        Self { first, second }
    }
}

impl From<Pair> for (u64, u64) {
    fn from(pair: Pair) -> Self {
        (pair.first, pair.second)
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.first, self.second)
    }
}

/// The closed index range `[min_index, max_index]` belonging to one group.
///
/// The bounds are checked once at construction, so `contains`, `len`, and the
/// iterators never have to think about overflow. Deserialization goes through
/// the same check: the stored bounds must be the ones [`GroupInterval::new`]
/// computes for the group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGroupInterval")]
pub struct GroupInterval {
    group: Group,
    min_index: Index,
    max_index: Index,
}

impl GroupInterval {
    /// Build the interval for `group`.
    ///
    /// Fails with [`DomainError::GroupOverflow`] past
    /// [`MAX_GROUP`](crate::MAX_GROUP).
    pub fn new(group: Group) -> Result<Self, DomainError> {
        let min_index = try_min_index_from_group(group)?;
        let max_index = try_max_index_from_group(group)?;
        check_group_interval(group, min_index, max_index);
        Ok(Self {
            group,
            min_index,
            max_index,
        })
    }

    pub fn group(&self) -> Group {
        self.group
    }

    pub fn min_index(&self) -> Index {
        self.min_index
    }

    pub fn max_index(&self) -> Index {
        self.max_index
    }

    /// Number of indexes in the group, always `group + 1`.
    pub fn len(&self) -> u64 {
        self.group + 1
    }

    /// Never true; every group has at least one index.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, index: Index) -> bool {
        (self.min_index..=self.max_index).contains(&index)
    }

    pub fn indices(&self) -> RangeInclusive<Index> {
        self.min_index..=self.max_index
    }

    /// The group's pairs in enumeration order: `(0, g), (1, g-1), ..., (g, 0)`.
    pub fn pairs(&self) -> GroupPairs {
        GroupPairs {
            group: self.group,
            next: Some(0),
        }
    }
}

/// Unchecked wire form of [`GroupInterval`].
#[derive(Deserialize)]
struct RawGroupInterval {
    group: Group,
    min_index: Index,
    max_index: Index,
}

impl TryFrom<RawGroupInterval> for GroupInterval {
    type Error = DomainError;

    fn try_from(raw: RawGroupInterval) -> Result<Self, DomainError> {
        let interval = Self::new(raw.group)?;
        if interval.min_index != raw.min_index || interval.max_index != raw.max_index {
            return Err(DomainError::InconsistentInterval {
                group: raw.group,
                min_index: raw.min_index,
                max_index: raw.max_index,
            });
        }
        Ok(interval)
    }
}

/// Iterator over one diagonal, from `(0, g)` to `(g, 0)`.
#[derive(Debug, Clone)]
pub struct GroupPairs {
    group: Group,
    next: Option<u64>,
}

impl Iterator for GroupPairs {
    type Item = Pair;

    fn next(&mut self) -> Option<Pair> {
        let first = self.next?;
        self.next = (first < self.group).then_some(first + 1);
        Some(Pair::new(first, self.group - first))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.next {
            Some(first) => {
                let remaining = usize::try_from(self.group - first + 1).ok();
                (remaining.unwrap_or(usize::MAX), remaining)
            }
            None => (0, Some(0)),
        }
    }
}

impl FusedIterator for GroupPairs {}
