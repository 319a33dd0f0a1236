// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for untrusted signed input.
//!
//! `natural` must accept exactly 0..=u64::MAX and reject the rest with an error.

#![no_main]

use libfuzzer_sys::fuzz_target;
use natpair::{natural, pairing, DomainError, Quantity};

fuzz_target!(|value: i128| {
    match natural(Quantity::Index, value) {
        Ok(index) => {
            assert_eq!(i128::from(index), value);
            let _ = pairing(index);
        }
        Err(DomainError::Negative { .. }) => assert!(value < 0),
        Err(DomainError::OutOfRange { .. }) => assert!(value > i128::from(u64::MAX)),
        Err(err) => panic!("unexpected error for {}: {}", value, err),
    }
});
