// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the pairing arithmetic.
//!
//! Debug-mode assertions that the core calls on its own results. They are:
//!
//! 1. **Zero-cost in release builds** (`debug_assert!` only)
//! 2. **Local**: each one checks a single result against the triangular formula,
//!    never by calling back into the resolver
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function       | Property                                         |
//! |-------------------------|--------------------------------------------------|
//! | `check_group_interval`  | `min ≤ max`, `max - min == group`                |
//! | `check_index_in_group`  | `min_index(g) ≤ i ≤ max_index(g)`                |
//! | `check_pair_in_group`   | `first + second == group`                        |
//! | `check_pair_order`      | `first == i - min_index(g)` (anti-diagonal order)|

use crate::triangular::{checked_min_index_from_group, index_in_group_interval};
use crate::types::{Group, Index, Pair};

// ============================================================================
// GROUP CONTRACTS
// ============================================================================

/// Check that `[min_index, max_index]` is a well-formed interval for `group`.
///
/// # Panics (debug builds only)
/// Panics if the interval is empty or its width is not `group`.
#[inline]
pub fn check_group_interval(group: Group, min_index: Index, max_index: Index) {
    debug_assert!(
        min_index <= max_index,
        "Contract violation: GroupInterval - min_index {} > max_index {} for group {}",
        min_index,
        max_index,
        group
    );
    debug_assert_eq!(
        max_index.wrapping_sub(min_index),
        group,
        "Contract violation: GroupInterval - group {} spans [{}, {}]",
        group,
        min_index,
        max_index
    );
}

/// Check that `index` falls inside the interval of `group`.
///
/// # Panics (debug builds only)
/// Panics if the resolver picked the wrong group.
#[inline]
pub fn check_index_in_group(index: Index, group: Group) {
    debug_assert!(
        index_in_group_interval(index, group),
        "Contract violation: GroupResolver - index {} is not in group {}",
        index,
        group
    );
}

// ============================================================================
// PAIR CONTRACTS
// ============================================================================

/// Check that `pair` lies on the diagonal `group`.
///
/// # Panics (debug builds only)
/// Panics if `first + second != group`.
#[inline]
pub fn check_pair_in_group(pair: Pair, group: Group) {
    debug_assert_eq!(
        pair.group(),
        Some(group),
        "Contract violation: Pair - {} does not sum to group {}",
        pair,
        group
    );
}

/// Check that `pair` sits at `index`, i.e. `first` is the offset of `index`
/// from the start of the pair's group.
///
/// Takes the index rather than a precomputed offset so that callers pay for
/// the group lookup only in debug builds.
///
/// # Panics (debug builds only)
/// Panics if the sweep order within the group is wrong.
#[inline]
pub fn check_pair_order(pair: Pair, index: Index) {
    debug_assert_eq!(
        pair.group()
            .and_then(checked_min_index_from_group)
            .and_then(|start| index.checked_sub(start)),
        Some(pair.first),
        "Contract violation: Pair - {} should not be at index {}",
        pair,
        index
    );
}
