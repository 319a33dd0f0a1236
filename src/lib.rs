// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Exact diagonal pairing between ℕ and ℕ×ℕ.
//!
//! Lay ℕ×ℕ out on a grid and walk the anti-diagonals one at a time. Every pair
//! gets a position, every position gets a pair:
//!
//! ```text
//! index   0     1     2     3     4     5     6     7     8     9    10
//! pair  (0,0) (0,1) (1,0) (0,2) (1,1) (2,0) (0,3) (1,2) (2,1) (3,0) (0,4)
//! group   0     1     1     2     2     2     3     3     3     3     4
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────────┐
//! │ triangular   │────▶│  resolver    │────▶│    pairing       │
//! │ (min/max     │     │ (index →     │     │ (pairing,        │
//! │  index of g) │     │  group)      │     │  pairing_inverse)│
//! └──────────────┘     └──────────────┘     └──────────────────┘
//!        │                    │                      │
//!        ▼                    ▼                      ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │                          verify                              │
//! │  (debug contracts on every result, exhaustive sweeps that    │
//! │   report the first failing input)                            │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Encoding runs left to right (index → group → pair). Decoding skips the
//! resolver entirely: the group of a pair is just `first + second`.
//!
//! Everything is `u64` and exact. The group resolver takes an integer square
//! root, so no index is ever assigned to the wrong group by float rounding. The
//! float resolver survives as a diagnostic (`estimate_group_from_index`).
//!
//! # Usage
//!
//! ```
//! use natpair::{group_from_index, pairing, pairing_inverse, Pair};
//!
//! assert_eq!(pairing(7), Pair::new(1, 2));
//! assert_eq!(pairing_inverse(1, 2), 7);
//! assert_eq!(group_from_index(7), 3);
//! ```

mod error;
mod pairing;
mod resolver;
mod triangular;
mod types;
pub mod verify;

// Re-exports for public API
pub use error::{natural, DomainError, Quantity};
pub use pairing::{
    identity_index, identity_pair, pairing, pairing_inverse, try_pairing_inverse, Pairs,
};
pub use resolver::{
    estimate_candidates, estimate_group_from_index, group_from_index, isqrt,
    max_group_from_index, min_group_from_index, GroupEstimate,
};
pub use triangular::{
    checked_max_index_from_group, checked_min_index_from_group, index_in_group_interval,
    max_index_from_group, min_index_from_group, try_max_index_from_group,
    try_min_index_from_group, LAST_GROUP, MAX_GROUP,
};
pub use types::{Group, GroupInterval, GroupPairs, Index, Pair};
pub use verify::{
    audit_estimates, audit_estimates_sampled, verify_group_membership, verify_group_sums,
    verify_index_identity, verify_pair_identity, verify_partition, Audit, InvariantError,
    VerificationReport, AUDIT_SAMPLE,
};
