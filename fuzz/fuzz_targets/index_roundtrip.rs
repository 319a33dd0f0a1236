// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the forward direction.
//!
//! Every `u64` is a valid index. pairing must not panic, the pair must sum to
//! the index's group, and the inverse must bring the index back.

#![no_main]

use libfuzzer_sys::fuzz_target;
use natpair::{group_from_index, index_in_group_interval, pairing, try_pairing_inverse};

fuzz_target!(|index: u64| {
    let group = group_from_index(index);
    assert!(
        index_in_group_interval(index, group),
        "index {} resolved to group {}",
        index,
        group
    );

    let pair = pairing(index);
    assert_eq!(pair.group(), Some(group), "pairing({}) = {}", index, pair);

    let back = try_pairing_inverse(pair.first, pair.second)
        .expect("pair produced by pairing must have an index");
    assert_eq!(back, index, "roundtrip failed for {}", index);
});
