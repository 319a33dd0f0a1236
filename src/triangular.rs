// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Group boundaries as triangular numbers.
//!
//! Group `g` starts right after groups `0..g`, which together hold
//! `1 + 2 + ... + g = T(g)` indexes. So:
//!
//! ```text
//! min_index(g) = g(g+1)/2          (the triangular number T(g))
//! max_index(g) = g(g+3)/2          (= min_index(g) + g)
//! ```
//!
//! One of `g` and `g+1` is even, so the division is exact. The products are
//! formed in `u128` and only narrowed back to `u64` after dividing, which is what
//! lets the boundaries run all the way up to the top of the `u64` range.
//!
//! # Limits
//!
//! | Constant     | Value           | Meaning                                  |
//! |--------------|-----------------|------------------------------------------|
//! | `MAX_GROUP`  | `6_074_000_998` | Last group whose whole interval fits     |
//! | `LAST_GROUP` | `6_074_000_999` | Group containing `u64::MAX` (partial)    |
//!
//! `min_index_from_group` accepts groups up to `LAST_GROUP`,
//! `max_index_from_group` up to `MAX_GROUP`. Beyond that they panic; the `try_`
//! forms return [`DomainError::GroupOverflow`] instead.

use crate::error::DomainError;
use crate::types::{Group, Index};

/// Last group whose entire index interval is representable in `u64`.
pub const MAX_GROUP: Group = 6_074_000_998;

/// The group containing `u64::MAX`. Its first index fits, its last does not.
pub const LAST_GROUP: Group = MAX_GROUP + 1;

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

const _: () = {
    const M: u128 = MAX_GROUP as u128;
    const MAX: u128 = u64::MAX as u128;

    // max_index(MAX_GROUP) fits
    assert!(M * (M + 3) / 2 <= MAX);
    // max_index(LAST_GROUP) does not
    assert!((M + 1) * (M + 4) / 2 > MAX);
    // min_index(LAST_GROUP) fits, and is the last group start that does
    assert!((M + 1) * (M + 2) / 2 <= MAX);
    assert!((M + 2) * (M + 3) / 2 > MAX);
};

#[inline]
const fn triangular_wide(group: Group) -> u128 {
    let g = group as u128;
    g * (g + 1) / 2
}

/// First index of `group`: `group * (group + 1) / 2`.
///
/// Returns `None` past [`LAST_GROUP`].
#[inline]
pub const fn checked_min_index_from_group(group: Group) -> Option<Index> {
    if group > LAST_GROUP {
        return None;
    }
    Some(triangular_wide(group) as Index)
}

/// Last index of `group`: `group * (group + 3) / 2`.
///
/// Returns `None` past [`MAX_GROUP`].
#[inline]
pub const fn checked_max_index_from_group(group: Group) -> Option<Index> {
    if group > MAX_GROUP {
        return None;
    }
    Some((triangular_wide(group) + group as u128) as Index)
}

/// First index of `group`, or a domain error past [`LAST_GROUP`].
pub fn try_min_index_from_group(group: Group) -> Result<Index, DomainError> {
    checked_min_index_from_group(group).ok_or(DomainError::GroupOverflow {
        group,
        limit: LAST_GROUP,
    })
}

/// Last index of `group`, or a domain error past [`MAX_GROUP`].
pub fn try_max_index_from_group(group: Group) -> Result<Index, DomainError> {
    checked_max_index_from_group(group).ok_or(DomainError::GroupOverflow {
        group,
        limit: MAX_GROUP,
    })
}

/// First index of `group`, the triangular number `T(group)`.
///
/// ```
/// use natpair::min_index_from_group;
///
/// assert_eq!(min_index_from_group(0), 0);
/// assert_eq!(min_index_from_group(3), 6);
/// ```
///
/// # Panics
/// Panics if `group > LAST_GROUP`.
pub fn min_index_from_group(group: Group) -> Index {
    match try_min_index_from_group(group) {
        Ok(index) => index,
        Err(err) => panic!("{err}"),
    }
}

/// Last index of `group`, `min_index_from_group(group) + group`.
///
/// ```
/// use natpair::max_index_from_group;
///
/// assert_eq!(max_index_from_group(0), 0);
/// assert_eq!(max_index_from_group(3), 9);
/// ```
///
/// # Panics
/// Panics if `group > MAX_GROUP`.
pub fn max_index_from_group(group: Group) -> Index {
    match try_max_index_from_group(group) {
        Ok(index) => index,
        Err(err) => panic!("{err}"),
    }
}

/// True iff `min_index(group) ≤ index ≤ max_index(group)`.
///
/// Defined for every `u64` pair of arguments. For `LAST_GROUP` the upper bound
/// lies past `u64::MAX`, so every index at or after its start is inside. Groups
/// past `LAST_GROUP` start beyond the `u64` range and contain nothing.
pub fn index_in_group_interval(index: Index, group: Group) -> bool {
    let index = u128::from(index);
    let min = triangular_wide(group);
    index >= min && index <= min + u128::from(group)
}
