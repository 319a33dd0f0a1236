// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the inverse direction.
//!
//! Arbitrary pairs mostly overflow. The inverse must say so with an error, never
//! a panic or a wrapped index. When it succeeds, pairing must return the pair.

#![no_main]

use libfuzzer_sys::fuzz_target;
use natpair::{pairing, try_pairing_inverse, Pair};

fuzz_target!(|input: (u64, u64)| {
    let (first, second) = input;
    let group = u128::from(first) + u128::from(second);
    // None when the index does not even fit in u128
    let expected = group
        .checked_mul(group + 1)
        .map(|twice| twice / 2 + u128::from(first));

    match try_pairing_inverse(first, second) {
        Ok(index) => {
            assert_eq!(Some(u128::from(index)), expected, "wrong index for ({},{})", first, second);
            assert_eq!(pairing(index), Pair::new(first, second));
        }
        Err(_) => assert!(
            expected.map_or(true, |index| index > u128::from(u64::MAX)),
            "({},{}) rejected but its index {:?} fits",
            first,
            second,
            expected
        ),
    }
});
