// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Domain errors: inputs the bijection is not defined for.
//!
//! Negative numbers can't reach the core at all, since everything is `u64`. They
//! get rejected where text or signed integers enter the crate, via [`natural`].
//! What remains inside the core is overflow: a group whose boundary doesn't fit in
//! a `u64`, or a pair whose index doesn't. Those come back as `Err` from the
//! `try_*` functions and as a panic carrying the same message from the plain ones.
//! Nothing is ever clamped or wrapped.

use std::fmt;

use thiserror::Error;

use crate::types::Group;

/// Which quantity a rejected value was meant to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    Index,
    Group,
    First,
    Second,
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Quantity::Index => "index",
            Quantity::Group => "group",
            Quantity::First => "first component",
            Quantity::Second => "second component",
        };
        f.write_str(name)
    }
}

/// Error type for inputs outside the domain of the pairing bijection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A quantity that must be a natural number was negative.
    #[error("{quantity} must be non-negative, got {value}")]
    Negative { quantity: Quantity, value: i128 },

    /// A quantity exceeded the `u64` domain.
    #[error("{quantity} {value} exceeds the u64 domain (max {max})", max = u64::MAX)]
    OutOfRange { quantity: Quantity, value: i128 },

    /// The requested boundary of `group` is not representable as a `u64` index.
    #[error("boundary index of group {group} does not fit in u64 (limit is group {limit})")]
    GroupOverflow { group: Group, limit: Group },

    /// Stored bounds that are not the bounds of their group.
    #[error("[{min_index}, {max_index}] is not the index interval of group {group}")]
    InconsistentInterval {
        group: Group,
        min_index: u64,
        max_index: u64,
    },

    /// The index of the pair `(first, second)` is not representable as a `u64`.
    #[error("pair ({first},{second}) has no u64 index")]
    PairOverflow { first: u64, second: u64 },
}

/// Convert a signed value into a natural number, rejecting negatives.
///
/// This is the single entry point for untrusted numeric input. It never clamps.
///
/// ```
/// use natpair::{natural, DomainError, Quantity};
///
/// assert_eq!(natural(Quantity::Index, 42), Ok(42));
/// assert!(matches!(
///     natural(Quantity::Group, -1),
///     Err(DomainError::Negative { quantity: Quantity::Group, value: -1 })
/// ));
/// ```
pub fn natural(quantity: Quantity, value: i128) -> Result<u64, DomainError> {
    if value < 0 {
        return Err(DomainError::Negative { quantity, value });
    }
    u64::try_from(value).map_err(|_| DomainError::OutOfRange { quantity, value })
}
