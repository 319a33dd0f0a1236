// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for the natpair integer core.
//!
//! This standalone crate extracts the overflow-sensitive arithmetic and proves
//! it for every input in range using Kani. The float seed of the square root
//! is left out: the refinement loop is proven to recover from any seed close
//! to the true root, which is all the seed has to provide.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **Tiling**: `max_index(g) + 1 == min_index(g + 1)` for every `g ≤ MAX_GROUP`
//! 2. **Limits**: the checked boundaries return `None` exactly past their limit
//! 3. **Refinement**: `refine_root` lands on the exact root from a nearby seed
//! 4. **Resolver algebra**: `(isqrt(8i+1) - 1) / 2` is the group of `i`
//! 5. **Inverse**: `checked_pairing_inverse` never panics, and lands in the group

/// Last group whose entire index interval is representable in `u64`.
pub const MAX_GROUP: u64 = 6_074_000_998;

/// The group containing `u64::MAX`.
pub const LAST_GROUP: u64 = MAX_GROUP + 1;

// ============================================================================
// GROUP BOUNDARIES (copied from src/triangular.rs)
// ============================================================================

const fn triangular_wide(group: u64) -> u128 {
    let g = group as u128;
    g * (g + 1) / 2
}

pub const fn checked_min_index_from_group(group: u64) -> Option<u64> {
    if group > LAST_GROUP {
        return None;
    }
    Some(triangular_wide(group) as u64)
}

pub const fn checked_max_index_from_group(group: u64) -> Option<u64> {
    if group > MAX_GROUP {
        return None;
    }
    Some((triangular_wide(group) + group as u128) as u64)
}

// ============================================================================
// ROOT REFINEMENT (copied from src/resolver.rs)
// ============================================================================

pub fn refine_root(n: u128, mut root: u128) -> u128 {
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

// ============================================================================
// INVERSE (copied from src/pairing.rs)
// ============================================================================

pub fn checked_pairing_inverse(first: u64, second: u64) -> Option<u64> {
    let group = first.checked_add(second)?;
    let start = checked_min_index_from_group(group)?;
    start.checked_add(first)
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    /// Consecutive groups tile the index line with no gap and no overlap.
    #[kani::proof]
    fn verify_groups_tile() {
        let group: u64 = kani::any_where(|&g| g <= MAX_GROUP);

        let min = checked_min_index_from_group(group);
        let max = checked_max_index_from_group(group);
        let next_min = checked_min_index_from_group(group + 1);

        kani::assert(min.is_some(), "min_index must fit up to MAX_GROUP");
        kani::assert(max.is_some(), "max_index must fit up to MAX_GROUP");
        kani::assert(next_min.is_some(), "min_index must fit up to LAST_GROUP");

        if let (Some(min), Some(max), Some(next_min)) = (min, max, next_min) {
            kani::assert(min <= max, "groups are non-empty");
            kani::assert(max - min == group, "group g holds g + 1 indexes");
            kani::assert(max + 1 == next_min, "groups tile without gaps");
        }
    }

    /// The checked boundaries refuse exactly the groups that would wrap.
    #[kani::proof]
    fn verify_boundary_limits() {
        let group: u64 = kani::any();
        let wide_min = triangular_wide(group);
        let wide_max = wide_min + u128::from(group);

        let fits_min = wide_min <= u128::from(u64::MAX);
        let fits_max = wide_max <= u128::from(u64::MAX);
        kani::assert(
            checked_min_index_from_group(group).is_some() == fits_min,
            "min_index is Some iff it fits",
        );
        kani::assert(
            checked_max_index_from_group(group).is_some() == fits_max,
            "max_index is Some iff it fits",
        );
    }

    /// From any seed within two of the root, refinement finds the root.
    #[kani::proof]
    #[kani::unwind(4)]
    fn verify_refine_root() {
        let root: u128 = kani::any_where(|&r| r <= 1u128 << 34);
        let offset: u128 = kani::any_where(|&o| o <= 2 * root);
        // root² ≤ n < (root+1)²
        let n = root * root + offset;

        let below: u128 = kani::any_where(|&d| d <= 2 && d <= root);
        let above: u128 = kani::any_where(|&d| d <= 2);

        kani::assert(refine_root(n, root - below) == root, "seed below root");
        kani::assert(refine_root(n, root + above) == root, "seed above root");
    }

    /// For every index, `(2g+1)² ≤ 8i+1 < (2g+3)²` where g is its group.
    ///
    /// This is what makes `(isqrt(8i+1) - 1) / 2` the group.
    #[kani::proof]
    fn verify_resolver_algebra() {
        let group: u64 = kani::any_where(|&g| g <= LAST_GROUP);
        let offset: u64 = kani::any_where(|&o| o <= group);
        let index = triangular_wide(group) + u128::from(offset);
        kani::assume(index <= u128::from(u64::MAX));

        let g = u128::from(group);
        let discriminant = 8 * index + 1;
        kani::assert((2 * g + 1) * (2 * g + 1) <= discriminant, "root is at least 2g+1");
        kani::assert(discriminant < (2 * g + 3) * (2 * g + 3), "root is below 2g+3");
    }

    /// The inverse never panics and, when it succeeds, lands in the pair's group.
    #[kani::proof]
    fn verify_inverse_in_group() {
        let first: u64 = kani::any();
        let second: u64 = kani::any();

        if let Some(index) = checked_pairing_inverse(first, second) {
            let group = first + second;
            let min = checked_min_index_from_group(group);
            kani::assert(min.is_some(), "successful inverse has a group start");
            if let Some(min) = min {
                kani::assert(index - min == first, "offset in group is the first component");
            }
        }
    }

    /// Every pair on a fully representable diagonal has an index.
    #[kani::proof]
    fn verify_inverse_total_below_max_group() {
        let group: u64 = kani::any_where(|&g| g <= MAX_GROUP);
        let first: u64 = kani::any_where(|&f| f <= group);

        kani::assert(
            checked_pairing_inverse(first, group - first).is_some(),
            "pairs up to MAX_GROUP always have an index",
        );
    }
}
