//! Pairing and its inverse on known values.

use super::common::{walk, FIRST_PAIRS, TOP_PAIR};
use natpair::{
    pairing, pairing_inverse, try_pairing_inverse, DomainError, Pair, Pairs, LAST_GROUP, MAX_GROUP,
};

#[test]
fn test_first_pairs() {
    for (index, &pair) in FIRST_PAIRS.iter().enumerate() {
        assert_eq!(pairing(index as u64), Pair::from(pair), "pairing({})", index);
        assert_eq!(pairing_inverse(pair.0, pair.1), index as u64);
    }
}

#[test]
fn test_matches_walk() {
    for (index, pair) in walk(20_000).into_iter().enumerate() {
        assert_eq!(pairing(index as u64), pair, "pairing({})", index);
    }
}

#[test]
fn test_top_of_range() {
    assert_eq!(pairing(u64::MAX), TOP_PAIR);
    assert_eq!(pairing_inverse(TOP_PAIR.first, TOP_PAIR.second), u64::MAX);
    assert_eq!(pairing_inverse(0, MAX_GROUP), 18_446_744_064_889_498_501);
}

#[test]
fn test_inverse_overflow_is_an_error() {
    let past_top = try_pairing_inverse(TOP_PAIR.first + 1, TOP_PAIR.second);
    assert_eq!(
        past_top,
        Err(DomainError::PairOverflow {
            first: TOP_PAIR.first + 1,
            second: TOP_PAIR.second
        })
    );
    assert!(try_pairing_inverse(u64::MAX, 1).is_err());
    assert!(try_pairing_inverse(0, LAST_GROUP).is_ok());
    assert!(try_pairing_inverse(0, LAST_GROUP + 1).is_err());
}

#[test]
#[should_panic(expected = "has no u64 index")]
fn test_inverse_panics_on_overflow() {
    pairing_inverse(u64::MAX, 0);
}

#[test]
fn test_iterator_matches_pairing() {
    let start = 1_000_000_000_000;
    for (index, pair) in Pairs::starting_at(start).take(5_000) {
        assert_eq!(pair, pairing(index));
    }
}

#[test]
fn test_iterator_stops_after_last_index() {
    let tail: Vec<(u64, Pair)> = Pairs::starting_at(u64::MAX - 1).collect();
    assert_eq!(tail.len(), 2);
    assert_eq!(tail[1], (u64::MAX, TOP_PAIR));
}
