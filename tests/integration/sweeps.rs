//! The five sweeps `natpair verify` runs, plus the float estimate audit.

use super::common::{LAST_FULL_INDEX, LAST_GROUP_START};
use natpair::{
    audit_estimates, min_index_from_group, verify_group_membership, verify_group_sums,
    verify_index_identity, verify_pair_identity, verify_partition, DomainError, InvariantError,
    LAST_GROUP, MAX_GROUP,
};

// ============================================================================
// REFERENCE CHECKS
// ============================================================================

#[test]
fn test_reference_checks_pass() {
    let reports = [
        verify_partition(0..10_000),
        verify_group_membership(0..10_000),
        verify_group_sums(0..10_000),
        verify_index_identity(0..10_000),
        verify_pair_identity(0..1_000, 0..1_000),
    ];
    for report in reports {
        let report = report.unwrap();
        assert!(report.checks > 0, "{} ran no checks", report.property);
    }
}

#[test]
fn test_pair_identity_counts_the_square() {
    let report = verify_pair_identity(0..300, 0..200).unwrap();
    assert_eq!(report.property, "pair identity");
    assert_eq!(report.checks, 60_000);
}

// ============================================================================
// TOP OF THE RANGE
// ============================================================================

#[test]
fn test_sweeps_across_the_limit() {
    let around = LAST_FULL_INDEX - 5_000..LAST_GROUP_START + 5_000;
    assert!(verify_group_membership(around.clone()).is_ok());
    assert!(verify_group_sums(around.clone()).is_ok());
    assert!(verify_index_identity(around).is_ok());
}

#[test]
fn test_partition_stops_at_last_group() {
    assert!(verify_partition(MAX_GROUP - 5_000..LAST_GROUP).is_ok());
    assert!(matches!(
        verify_partition(MAX_GROUP..LAST_GROUP + 1),
        Err(InvariantError::Domain(DomainError::GroupOverflow { group, .. })) if group == LAST_GROUP
    ));
}

#[test]
fn test_pair_identity_fails_on_unrepresentable_pair() {
    let err = verify_pair_identity(0..3, LAST_GROUP..LAST_GROUP + 2).unwrap_err();
    assert_eq!(
        err,
        InvariantError::Domain(DomainError::PairOverflow {
            first: 0,
            second: LAST_GROUP + 1
        })
    );
}

// ============================================================================
// FLOAT AUDIT
// ============================================================================

#[test]
fn test_audit_clean_below_a_million() {
    let audit = audit_estimates(0..1_000_000);
    assert_eq!(audit.checked, 1_000_000);
    assert_eq!(audit.mismatch_count, 0);
    assert!(audit.is_clean(), "{:?}", &audit.mismatches[..audit.mismatches.len().min(5)]);
}

#[test]
fn test_audit_finds_misestimates_near_billionth_group() {
    let start = min_index_from_group(1_000_000_000);
    let audit = audit_estimates(start - 1_000..start + 1_000);

    assert_eq!(audit.checked, 2_000);
    assert_eq!(audit.split_candidates, 65);
    assert_eq!(audit.mismatch_count, 32);
    assert_eq!(audit.mismatches.len(), 32);

    let first = audit.mismatches.first().unwrap();
    assert_eq!(first.index, start - 32);
    assert_eq!(first.estimate, first.exact + 1);
    assert_eq!(audit.mismatches.last().unwrap().index, start - 1);
}
