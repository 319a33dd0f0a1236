// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The pairing bijection ℕ → ℕ×ℕ and its inverse.
//!
//! Forward: find the index's group, then its offset inside the group. The offset
//! is the first component and the rest of the group sum is the second:
//!
//! ```text
//! pairing(7):  group_from_index(7) = 3, min_index(3) = 6
//!              first = 7 - 6 = 1, second = 3 - 1 = 2      → (1,2)
//! ```
//!
//! Inverse: the group is `first + second`, and the index is the group's first
//! index plus `first`. No square root, no floats. This direction is the ground
//! truth the forward direction is checked against.
//!
//! Within a group the enumeration sweeps the anti-diagonal: `first` climbs
//! `0..=g` while `second` falls `g..=0`.

use std::iter::FusedIterator;

use crate::error::DomainError;
use crate::resolver::group_from_index;
use crate::triangular::{checked_min_index_from_group, min_index_from_group};
use crate::types::{Index, Pair};
use crate::verify::contracts::{check_pair_in_group, check_pair_order};

/// Map an index to its pair. Total over `u64`.
///
/// ```
/// use natpair::{pairing, Pair};
///
/// assert_eq!(pairing(0), Pair::new(0, 0));
/// assert_eq!(pairing(1), Pair::new(0, 1));
/// assert_eq!(pairing(2), Pair::new(1, 0));
/// assert_eq!(pairing(9), Pair::new(3, 0));
/// ```
pub fn pairing(index: Index) -> Pair {
    let group = group_from_index(index);
    // group ≤ LAST_GROUP, whose first index is representable
    let first = index - min_index_from_group(group);
    let pair = Pair::new(first, group - first);

    check_pair_in_group(pair, group);
    pair
}

/// Map a pair back to its index, or a domain error if the index exceeds `u64`.
pub fn try_pairing_inverse(first: u64, second: u64) -> Result<Index, DomainError> {
    let overflow = || DomainError::PairOverflow { first, second };
    let group = first.checked_add(second).ok_or_else(overflow)?;
    let start = checked_min_index_from_group(group).ok_or_else(overflow)?;
    start.checked_add(first).ok_or_else(overflow)
}

/// Map a pair back to its index.
///
/// ```
/// use natpair::pairing_inverse;
///
/// assert_eq!(pairing_inverse(0, 0), 0);
/// assert_eq!(pairing_inverse(1, 2), 7);
/// assert_eq!(pairing_inverse(3, 0), 9);
/// ```
///
/// # Panics
/// Panics if the pair's index does not fit in a `u64`.
pub fn pairing_inverse(first: u64, second: u64) -> Index {
    match try_pairing_inverse(first, second) {
        Ok(index) => index,
        Err(err) => panic!("{err}"),
    }
}

/// `pairing_inverse ∘ pairing`. Identity on ℕ.
pub fn identity_index(index: Index) -> Index {
    let pair = pairing(index);
    pairing_inverse(pair.first, pair.second)
}

/// `pairing ∘ pairing_inverse`. Identity on ℕ×ℕ.
///
/// # Panics
/// Panics if the pair's index does not fit in a `u64`.
pub fn identity_pair(pair: Pair) -> Pair {
    pairing(pairing_inverse(pair.first, pair.second))
}

// ============================================================================
// ENUMERATION
// ============================================================================

/// Walks the enumeration in index order, yielding `(index, pairing(index))`.
///
/// Only the starting index goes through the resolver. Every later pair follows
/// from the previous one: `(a, 0)` is followed by `(0, a+1)`, anything else by
/// `(a+1, b-1)`. Ends after `u64::MAX`.
#[derive(Debug, Clone)]
pub struct Pairs {
    next: Option<(Index, Pair)>,
}

impl Pairs {
    /// Start at index 0.
    pub fn new() -> Self {
        Self::starting_at(0)
    }

    pub fn starting_at(index: Index) -> Self {
        Self {
            next: Some((index, pairing(index))),
        }
    }
}

impl Default for Pairs {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Pairs {
    type Item = (Index, Pair);

    fn next(&mut self) -> Option<Self::Item> {
        let (index, pair) = self.next?;

        self.next = index.checked_add(1).map(|successor| {
            let next_pair = if pair.second == 0 {
                Pair::new(0, pair.first + 1)
            } else {
                Pair::new(pair.first + 1, pair.second - 1)
            };
            (successor, next_pair)
        });

        check_pair_order(pair, index);
        Some((index, pair))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.next {
            Some((index, _)) => {
                let remaining = usize::try_from(u64::MAX - index)
                    .ok()
                    .and_then(|n| n.checked_add(1));
                (remaining.unwrap_or(usize::MAX), remaining)
            }
            None => (0, Some(0)),
        }
    }
}

impl FusedIterator for Pairs {}
