// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Finding the group an index belongs to.
//!
//! `min_index(g) ≤ i` is the quadratic `g² + g - 2i ≤ 0`, whose positive root is
//! `(√(8i+1) - 1) / 2`. The group of `i` is the floor of that root. Written in
//! integers: `g` is the largest value with `(2g+1)² ≤ 8i+1`, which is exactly
//! `(isqrt(8i+1) - 1) / 2`.
//!
//! # Two resolvers
//!
//! [`group_from_index`] is the one everything uses. It takes an exact integer
//! square root, so there is no rounding anywhere and it is correct for every
//! `u64`.
//!
//! The floating-point resolver is kept next to it as a diagnostic. It computes a
//! lower candidate from the root above and an upper candidate from the matching
//! bound on `max_index`, then averages the two (ties to even) when float error
//! pulls them apart near a group boundary. In `f64` that works for small indexes
//! and drifts once `8i+9` passes 2⁵³. [`estimate_candidates`] returns both
//! candidates alongside the exact answer so the drift can be measured (see
//! `verify::audit_estimates`).

use serde::Serialize;

use crate::types::{Group, Index};
use crate::verify::contracts::check_index_in_group;

// ============================================================================
// EXACT RESOLVER
// ============================================================================

/// Integer square root: the largest `r` with `r² ≤ n`.
///
/// Seeded from an `f64` estimate, then corrected with exact integer comparisons.
/// The float is only a starting point; the loops guarantee the result.
pub fn isqrt(n: u128) -> u128 {
    refine_root(n, (n as f64).sqrt() as u128)
}

/// Walk `root` down, then up, until `root² ≤ n < (root+1)²`.
#[inline]
fn refine_root(n: u128, mut root: u128) -> u128 {
    while root.checked_mul(root).map_or(true, |square| square > n) {
        root -= 1;
    }
    while (root + 1)
        .checked_mul(root + 1)
        .is_some_and(|square| square <= n)
    {
        root += 1;
    }
    root
}

/// The unique group `g` with `min_index(g) ≤ index ≤ max_index(g)`.
///
/// ```
/// use natpair::group_from_index;
///
/// assert_eq!(group_from_index(9), 3);
/// assert_eq!(group_from_index(10), 4);
/// ```
pub fn group_from_index(index: Index) -> Group {
    let discriminant = 8 * u128::from(index) + 1;
    // isqrt(8i+1) ≥ 1 and fits in 34 bits, so the narrowing is lossless
    let group = ((isqrt(discriminant) - 1) / 2) as Group;

    check_index_in_group(index, group);
    group
}

// ============================================================================
// FLOATING-POINT CANDIDATES (diagnostic)
// ============================================================================

/// Lower group candidate: `floor((√(8i+1) - 1) / 2)` in `f64`.
pub fn min_group_from_index(index: Index) -> Group {
    let root = (8.0 * index as f64 + 1.0).sqrt();
    ((root - 1.0) / 2.0).floor() as Group
}

/// Upper group candidate: `ceil((√(8i+9) - 3) / 2)` in `f64`.
pub fn max_group_from_index(index: Index) -> Group {
    let root = (8.0 * index as f64 + 9.0).sqrt();
    ((root - 3.0) / 2.0).ceil() as Group
}

/// The floating-point group estimate: the mean of both candidates, ties to even.
///
/// Agrees with [`group_from_index`] whenever the candidates do. Don't use it for
/// anything but comparison.
pub fn estimate_group_from_index(index: Index) -> Group {
    round_mean(min_group_from_index(index), max_group_from_index(index))
}

fn round_mean(lower: Group, upper: Group) -> Group {
    let sum = u128::from(lower) + u128::from(upper);
    let half = sum / 2;
    let rounded = if sum % 2 == 1 && half % 2 == 1 {
        half + 1
    } else {
        half
    };
    rounded as Group
}

/// Both float candidates for one index, with the averaged estimate and the exact group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GroupEstimate {
    pub index: Index,
    pub lower: Group,
    pub upper: Group,
    pub estimate: Group,
    pub exact: Group,
}

impl GroupEstimate {
    /// True when the float heuristic landed on the right group.
    pub fn is_exact(&self) -> bool {
        self.estimate == self.exact
    }

    /// True when no averaging was needed.
    pub fn candidates_agree(&self) -> bool {
        self.lower == self.upper
    }
}

/// Run both resolvers on `index`.
pub fn estimate_candidates(index: Index) -> GroupEstimate {
    let lower = min_group_from_index(index);
    let upper = max_group_from_index(index);
    GroupEstimate {
        index,
        lower,
        upper,
        estimate: round_mean(lower, upper),
        exact: group_from_index(index),
    }
}
