//! Inputs at and beyond the edges of the domain.

use super::common::TOP_PAIR;
use natpair::{
    natural, pairing, try_pairing_inverse, DomainError, GroupInterval, Quantity, LAST_GROUP,
    MAX_GROUP,
};

// ============================================================================
// NEGATIVE AND OVERSIZED INPUTS
// ============================================================================

#[test]
fn test_negative_inputs_are_rejected() {
    let err = natural(Quantity::Index, -3).unwrap_err();
    assert_eq!(
        err,
        DomainError::Negative {
            quantity: Quantity::Index,
            value: -3
        }
    );
    assert_eq!(err.to_string(), "index must be non-negative, got -3");

    let err = natural(Quantity::Second, -1).unwrap_err();
    assert_eq!(err.to_string(), "second component must be non-negative, got -1");
}

#[test]
fn test_oversized_inputs_are_rejected() {
    let too_big = i128::from(u64::MAX) + 1;
    assert!(matches!(
        natural(Quantity::Group, too_big),
        Err(DomainError::OutOfRange {
            quantity: Quantity::Group,
            ..
        })
    ));
    assert_eq!(natural(Quantity::Group, i128::from(u64::MAX)), Ok(u64::MAX));
    assert_eq!(natural(Quantity::First, 0), Ok(0));
}

#[test]
fn test_signed_input_pipeline() {
    let index = natural(Quantity::Index, 7).unwrap();
    let pair = pairing(index);
    assert_eq!(try_pairing_inverse(pair.first, pair.second), Ok(7));
}

// ============================================================================
// OVERFLOW MESSAGES
// ============================================================================

#[test]
fn test_overflow_messages() {
    let err = GroupInterval::new(LAST_GROUP).unwrap_err();
    assert_eq!(
        err.to_string(),
        format!(
            "boundary index of group {} does not fit in u64 (limit is group {})",
            LAST_GROUP, MAX_GROUP
        )
    );

    let err = try_pairing_inverse(TOP_PAIR.first, TOP_PAIR.second + 1).unwrap_err();
    assert_eq!(err.to_string(), "pair (2746052115,3327948885) has no u64 index");
}

// ============================================================================
// SERIALIZATION
// ============================================================================

#[cfg(feature = "serde_json")]
#[test]
fn test_interval_serializes_with_bounds() {
    let interval = GroupInterval::new(3).unwrap();
    let json = serde_json::to_value(interval).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "group": 3, "min_index": 6, "max_index": 9 })
    );
}

#[cfg(feature = "serde_json")]
#[test]
fn test_estimate_serializes_all_candidates() {
    let json = serde_json::to_value(natpair::estimate_candidates(7)).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "index": 7, "lower": 3, "upper": 3, "estimate": 3, "exact": 3 })
    );
}
