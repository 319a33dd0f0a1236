//! Differential testing: compare the crate against the oracles.
//!
//! If they disagree, the oracle is right.

use super::oracles::{
    oracle_group, oracle_max_index, oracle_min_index, oracle_pairing, oracle_pairing_inverse_walk,
};
use super::{index_strategy, pair_strategy};
use natpair::{
    group_from_index, max_index_from_group, min_index_from_group, pairing, try_pairing_inverse,
};
use proptest::prelude::*;

// =============================================================================
// GROUP BOUNDARIES: closed form vs summation
// =============================================================================

#[test]
fn diff_boundaries_small_groups() {
    for group in 0..3_000 {
        assert_eq!(min_index_from_group(group), oracle_min_index(group), "group {}", group);
        assert_eq!(max_index_from_group(group), oracle_max_index(group), "group {}", group);
    }
}

// =============================================================================
// RESOLVER: integer square root vs bisection
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2000))]

    /// Differential test: group_from_index matches bisection.
    #[test]
    fn diff_group(index in index_strategy()) {
        prop_assert_eq!(
            group_from_index(index),
            oracle_group(index),
            "group_from_index differs from oracle for index {}",
            index
        );
    }

    /// Differential test: pairing matches the bisection oracle.
    #[test]
    fn diff_pairing(index in index_strategy()) {
        let pair = pairing(index);
        prop_assert_eq!((pair.first, pair.second), oracle_pairing(index));
    }

    /// Differential test: the inverse agrees with the oracle's forward map.
    #[test]
    fn diff_inverse_via_oracle(pair in pair_strategy()) {
        let index = try_pairing_inverse(pair.first, pair.second);
        prop_assert!(index.is_ok(), "pair {} should have an index", pair);
        if let Ok(index) = index {
            prop_assert_eq!(oracle_pairing(index), (pair.first, pair.second));
        }
    }

    /// Differential test: the inverse matches walking the diagonals.
    #[test]
    fn diff_inverse_walk(first in 0u64..2_000, second in 0u64..2_000) {
        prop_assert_eq!(
            try_pairing_inverse(first, second),
            Ok(oracle_pairing_inverse_walk(first, second))
        );
    }
}
