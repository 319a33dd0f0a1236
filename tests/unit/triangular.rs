//! Group boundaries: min/max index of a group and interval membership.

use super::common::{assert_group_well_formed, LAST_FULL_INDEX, LAST_GROUP_START};
use natpair::{
    checked_max_index_from_group, checked_min_index_from_group, index_in_group_interval,
    max_index_from_group, min_index_from_group, try_max_index_from_group,
    try_min_index_from_group, DomainError, GroupInterval, Pair, LAST_GROUP, MAX_GROUP,
};

#[test]
fn test_reference_boundaries() {
    let expected = [(0, 0, 0), (1, 1, 2), (2, 3, 5), (3, 6, 9), (4, 10, 14)];
    for (group, min, max) in expected {
        assert_eq!(min_index_from_group(group), min, "min_index_from_group({})", group);
        assert_eq!(max_index_from_group(group), max, "max_index_from_group({})", group);
    }
}

#[test]
fn test_groups_well_formed() {
    for group in 0..2_000 {
        assert_group_well_formed(group);
    }
    for group in MAX_GROUP - 2_000..=MAX_GROUP {
        assert_group_well_formed(group);
    }
}

#[test]
fn test_limits() {
    assert_eq!(max_index_from_group(MAX_GROUP), LAST_FULL_INDEX);
    assert_eq!(min_index_from_group(LAST_GROUP), LAST_GROUP_START);
    assert_eq!(checked_max_index_from_group(LAST_GROUP), None);
    assert_eq!(checked_min_index_from_group(LAST_GROUP + 1), None);
}

#[test]
fn test_checked_forms_are_const() {
    const THIRD: Option<u64> = checked_min_index_from_group(3);
    assert_eq!(THIRD, Some(6));
}

#[test]
fn test_overflow_errors_name_the_limit() {
    assert_eq!(
        try_max_index_from_group(LAST_GROUP),
        Err(DomainError::GroupOverflow {
            group: LAST_GROUP,
            limit: MAX_GROUP
        })
    );
    assert_eq!(
        try_min_index_from_group(u64::MAX),
        Err(DomainError::GroupOverflow {
            group: u64::MAX,
            limit: LAST_GROUP
        })
    );
}

#[test]
#[should_panic(expected = "does not fit in u64")]
fn test_max_index_panics_past_limit() {
    max_index_from_group(LAST_GROUP);
}

#[test]
fn test_membership_follows_boundaries() {
    assert!(index_in_group_interval(7, 3));
    assert!(!index_in_group_interval(10, 3));
    assert!(!index_in_group_interval(5, 3));
    assert!(index_in_group_interval(u64::MAX, LAST_GROUP));
    assert!(!index_in_group_interval(u64::MAX, MAX_GROUP));
    assert!(!index_in_group_interval(0, u64::MAX));
}

#[test]
fn test_interval_walks_its_diagonal() {
    let interval = GroupInterval::new(3).unwrap();
    assert_eq!(interval.len(), 4);
    assert_eq!(interval.indices(), 6..=9);
    let pairs: Vec<Pair> = interval.pairs().collect();
    assert_eq!(
        pairs,
        vec![
            Pair::new(0, 3),
            Pair::new(1, 2),
            Pair::new(2, 1),
            Pair::new(3, 0)
        ]
    );
}

#[test]
fn test_interval_rejects_last_group() {
    assert!(GroupInterval::new(MAX_GROUP).is_ok());
    assert!(GroupInterval::new(LAST_GROUP).is_err());
}
