//! Index → group resolution, exact and floating-point.

use super::common::{assert_resolves, LAST_FULL_INDEX, LAST_GROUP_START};
use natpair::{
    estimate_candidates, estimate_group_from_index, group_from_index, isqrt,
    max_group_from_index, min_group_from_index, min_index_from_group, LAST_GROUP, MAX_GROUP,
};

#[test]
fn test_isqrt_matches_naive_root() {
    for n in 0u128..5_000 {
        let root = isqrt(n);
        assert!(root * root <= n, "isqrt({}) = {} is too big", n, root);
        assert!((root + 1) * (root + 1) > n, "isqrt({}) = {} is too small", n, root);
    }
}

#[test]
fn test_reference_groups() {
    let expected = [0, 1, 1, 2, 2, 2, 3, 3, 3, 3, 4];
    for (index, &group) in expected.iter().enumerate() {
        assert_eq!(group_from_index(index as u64), group, "group_from_index({})", index);
    }
}

#[test]
fn test_resolves_low_and_high() {
    assert_resolves(0..50_000);
    assert_resolves(u64::MAX - 50_000..=u64::MAX);
    assert_resolves(LAST_FULL_INDEX - 10..=LAST_GROUP_START + 10);
}

#[test]
fn test_resolves_across_limit() {
    assert_eq!(group_from_index(LAST_FULL_INDEX), MAX_GROUP);
    assert_eq!(group_from_index(LAST_GROUP_START), LAST_GROUP);
    assert_eq!(group_from_index(u64::MAX), LAST_GROUP);
}

#[test]
fn test_float_candidates_small_scenarios() {
    assert_eq!(min_group_from_index(7), 3);
    assert_eq!(max_group_from_index(7), 3);
    assert_eq!(estimate_group_from_index(10), 4);
}

/// Just below the start of group 10⁹ the float candidates cross and the
/// averaged estimate lands one group too high.
#[test]
fn test_float_estimate_misses_near_billionth_group() {
    let start = min_index_from_group(1_000_000_000);
    assert_eq!(start, 500_000_000_500_000_000);

    let estimate = estimate_candidates(start - 1);
    assert_eq!(estimate.exact, 999_999_999);
    assert_eq!(estimate.lower, 1_000_000_000);
    assert_eq!(estimate.upper, 999_999_999);
    assert_eq!(estimate.estimate, 1_000_000_000);
    assert!(!estimate.candidates_agree());
    assert!(!estimate.is_exact());

    // the exact resolver is not fooled
    assert_eq!(group_from_index(start - 1), 999_999_999);
    assert_eq!(group_from_index(start), 1_000_000_000);
}
