//! The defining properties of the bijection, checked on random inputs.
//!
//! If any of these fail, pairing is not a bijection.

use super::{index_strategy, pair_strategy};
use natpair::{
    group_from_index, identity_index, identity_pair, index_in_group_interval,
    max_index_from_group, min_index_from_group, pairing, pairing_inverse, GroupInterval,
    MAX_GROUP,
};
use proptest::prelude::*;

// ============================================================================
// PARTITION
// ============================================================================

proptest! {
    /// Groups tile ℕ: each one starts right after the previous one ends.
    #[test]
    fn prop_groups_tile(group in 0..MAX_GROUP) {
        let max = max_index_from_group(group);
        let next_min = min_index_from_group(group + 1);
        prop_assert!(min_index_from_group(group) <= max);
        prop_assert_eq!(max + 1, next_min, "gap between group {} and {}", group, group + 1);
    }

    /// Group g holds exactly g + 1 indexes.
    #[test]
    fn prop_group_size(group in 0..=MAX_GROUP) {
        let interval = GroupInterval::new(group).unwrap();
        prop_assert_eq!(interval.len(), group + 1);
    }

    /// An index belongs to its own group and to no neighbour.
    #[test]
    fn prop_index_in_exactly_one_group(index in index_strategy()) {
        let group = group_from_index(index);
        prop_assert!(index_in_group_interval(index, group));
        if group > 0 {
            prop_assert!(!index_in_group_interval(index, group - 1));
        }
        prop_assert!(!index_in_group_interval(index, group + 1));
    }
}

// ============================================================================
// BIJECTION
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// pairing_inverse ∘ pairing = id on ℕ.
    #[test]
    fn prop_forward_identity(index in index_strategy()) {
        prop_assert_eq!(identity_index(index), index);
    }

    /// pairing ∘ pairing_inverse = id on ℕ×ℕ.
    #[test]
    fn prop_reverse_identity(pair in pair_strategy()) {
        prop_assert_eq!(identity_pair(pair), pair);
    }

    /// The components of pairing(i) sum to the group of i.
    #[test]
    fn prop_components_sum_to_group(index in index_strategy()) {
        let pair = pairing(index);
        prop_assert_eq!(pair.first + pair.second, group_from_index(index));
    }

    /// Within a group, the offset from the group start is the first component.
    #[test]
    fn prop_first_is_offset(index in index_strategy()) {
        let pair = pairing(index);
        let group = group_from_index(index);
        prop_assert_eq!(index - min_index_from_group(group), pair.first);
        prop_assert_eq!(pairing_inverse(pair.first, pair.second), index);
    }
}
