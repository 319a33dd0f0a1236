// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Exhaustive sweeps over index, group, and pair ranges.
//!
//! Property tests sample. These walk every input in a range and stop at the first
//! one that breaks a property, returning it as an [`InvariantError`] that names
//! the input and what came back. A passing sweep returns a
//! [`VerificationReport`] with the number of inputs checked.
//!
//! With the `parallel` feature the sweeps fan out over rayon. They still report
//! the *lowest* failing input (`find_map_first`), so results don't depend on
//! thread scheduling.

use std::fmt;
use std::ops::Range;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::error::DomainError;
use crate::pairing::{pairing, try_pairing_inverse};
use crate::resolver::{estimate_candidates, group_from_index, GroupEstimate};
use crate::triangular::{index_in_group_interval, try_max_index_from_group, try_min_index_from_group};
use crate::types::{Group, Index, Pair};

/// A broken property, with the input that broke it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantError {
    /// `min_index(group) > max_index(group)`.
    #[error("group {group} is empty: min_index {min_index} > max_index {max_index}")]
    EmptyGroup {
        group: Group,
        min_index: Index,
        max_index: Index,
    },

    /// `max_index(group) + 1 != min_index(group + 1)`.
    #[error(
        "groups {group} and {next_group} do not tile: \
         max_index {max_index}, next min_index {next_min_index}"
    )]
    PartitionGap {
        group: Group,
        next_group: Group,
        max_index: Index,
        next_min_index: Index,
    },

    /// The resolver returned a group that does not contain the index.
    #[error("index {index} resolved to group {group}, which does not contain it")]
    IndexOutsideGroup { index: Index, group: Group },

    /// `pairing_inverse(pairing(index)) != index`.
    #[error("pairing({index}) = {pair}, but pairing_inverse{pair} = {returned}")]
    IndexIdentity {
        index: Index,
        pair: Pair,
        returned: Index,
    },

    /// `pairing(pairing_inverse(pair)) != pair`.
    #[error("pairing_inverse{pair} = {index}, but pairing({index}) = {returned}")]
    PairIdentity {
        pair: Pair,
        index: Index,
        returned: Pair,
    },

    /// The components of `pairing(index)` don't sum to the index's group.
    #[error("pairing({index}) = {pair} does not sum to group {group}")]
    GroupSum {
        index: Index,
        pair: Pair,
        group: Group,
    },

    /// The sweep ran into an input outside the `u64` domain.
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Outcome of a passing sweep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerificationReport {
    /// Which property was checked.
    pub property: &'static str,
    /// Number of inputs checked.
    pub checks: u64,
}

impl fmt::Display for VerificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} checks passed", self.property, self.checks)
    }
}

/// Walk `inputs` and return the error for the lowest input that fails `check`.
fn first_failure<F>(inputs: Range<u64>, check: F) -> Option<InvariantError>
where
    F: Fn(u64) -> Result<(), InvariantError> + Send + Sync,
{
    #[cfg(feature = "parallel")]
    {
        inputs.into_par_iter().find_map_first(|input| check(input).err())
    }
    #[cfg(not(feature = "parallel"))]
    {
        inputs.find_map(|input| check(input).err())
    }
}

fn sweep<F>(
    property: &'static str,
    inputs: Range<u64>,
    checks: u64,
    check: F,
) -> Result<VerificationReport, InvariantError>
where
    F: Fn(u64) -> Result<(), InvariantError> + Send + Sync,
{
    debug!(property, start = inputs.start, end = inputs.end, "sweep started");

    if let Some(err) = first_failure(inputs, check) {
        debug!(property, %err, "sweep failed");
        return Err(err);
    }

    debug!(property, checks, "sweep passed");
    Ok(VerificationReport { property, checks })
}

fn range_len(range: &Range<u64>) -> u64 {
    range.end.saturating_sub(range.start)
}

// ============================================================================
// SWEEPS
// ============================================================================

/// Every group in `groups` is non-empty and ends right before the next one starts.
pub fn verify_partition(groups: Range<Group>) -> Result<VerificationReport, InvariantError> {
    let checks = range_len(&groups);
    sweep("partition", groups, checks, |group| {
        let min_index = try_min_index_from_group(group)?;
        let max_index = try_max_index_from_group(group)?;
        if min_index > max_index {
            return Err(InvariantError::EmptyGroup {
                group,
                min_index,
                max_index,
            });
        }

        let next_min_index = try_min_index_from_group(group + 1)?;
        if max_index.checked_add(1) != Some(next_min_index) {
            return Err(InvariantError::PartitionGap {
                group,
                next_group: group + 1,
                max_index,
                next_min_index,
            });
        }
        Ok(())
    })
}

/// Every index in `indexes` resolves to a group that contains it.
pub fn verify_group_membership(indexes: Range<Index>) -> Result<VerificationReport, InvariantError> {
    let checks = range_len(&indexes);
    sweep("group membership", indexes, checks, |index| {
        let group = group_from_index(index);
        if index_in_group_interval(index, group) {
            Ok(())
        } else {
            Err(InvariantError::IndexOutsideGroup { index, group })
        }
    })
}

/// `pairing_inverse(pairing(i)) == i` for every `i` in `indexes`.
pub fn verify_index_identity(indexes: Range<Index>) -> Result<VerificationReport, InvariantError> {
    let checks = range_len(&indexes);
    sweep("index identity", indexes, checks, |index| {
        let pair = pairing(index);
        let returned = try_pairing_inverse(pair.first, pair.second)?;
        if returned == index {
            Ok(())
        } else {
            Err(InvariantError::IndexIdentity {
                index,
                pair,
                returned,
            })
        }
    })
}

/// `pairing(pairing_inverse(a, b)) == (a, b)` for every `a` in `firsts`, `b` in `seconds`.
pub fn verify_pair_identity(
    firsts: Range<u64>,
    seconds: Range<u64>,
) -> Result<VerificationReport, InvariantError> {
    let checks = range_len(&firsts).saturating_mul(range_len(&seconds));
    sweep("pair identity", firsts, checks, |first| {
        for second in seconds.clone() {
            let pair = Pair::new(first, second);
            let index = try_pairing_inverse(first, second)?;
            let returned = pairing(index);
            if returned != pair {
                return Err(InvariantError::PairIdentity {
                    pair,
                    index,
                    returned,
                });
            }
        }
        Ok(())
    })
}

/// The components of `pairing(i)` sum to `group_from_index(i)`.
pub fn verify_group_sums(indexes: Range<Index>) -> Result<VerificationReport, InvariantError> {
    let checks = range_len(&indexes);
    sweep("group sums", indexes, checks, |index| {
        let pair = pairing(index);
        let group = group_from_index(index);
        if pair.group() == Some(group) {
            Ok(())
        } else {
            Err(InvariantError::GroupSum { index, pair, group })
        }
    })
}

// ============================================================================
// FLOAT ESTIMATE AUDIT
// ============================================================================

/// Mismatches kept in an [`Audit`] by [`audit_estimates`]. The rest are only counted.
pub const AUDIT_SAMPLE: usize = 1_000;

/// How the floating-point group estimate fared against the exact resolver.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Audit {
    /// Number of indexes audited.
    pub checked: u64,
    /// Indexes where the two float candidates disagreed and had to be averaged.
    pub split_candidates: u64,
    /// Number of indexes where the averaged estimate was wrong.
    pub mismatch_count: u64,
    /// The lowest misestimated indexes, in order, at most the sample size.
    pub mismatches: Vec<GroupEstimate>,
}

impl Audit {
    pub fn is_clean(&self) -> bool {
        self.mismatch_count == 0
    }
}

/// Running totals for one chunk of the audited range.
#[derive(Default)]
struct Tally {
    split: u64,
    count: u64,
    sample: Vec<GroupEstimate>,
}

impl Tally {
    fn record(mut self, estimate: GroupEstimate, limit: usize) -> Self {
        if !estimate.candidates_agree() {
            self.split += 1;
        }
        if !estimate.is_exact() {
            self.count += 1;
            if self.sample.len() < limit {
                self.sample.push(estimate);
            }
        }
        self
    }

    /// `later` must cover indexes above `self`'s.
    fn merge(mut self, later: Self, limit: usize) -> Self {
        self.split += later.split;
        self.count += later.count;
        let room = limit.saturating_sub(self.sample.len());
        self.sample.extend(later.sample.into_iter().take(room));
        self
    }
}

/// Compare the float estimate with the exact group for every index in `indexes`,
/// keeping the first [`AUDIT_SAMPLE`] mismatches.
pub fn audit_estimates(indexes: Range<Index>) -> Audit {
    audit_estimates_sampled(indexes, AUDIT_SAMPLE)
}

/// Like [`audit_estimates`], but keeps at most `sample` mismatches.
///
/// Every mismatch is counted in `mismatch_count` whatever the sample size, so
/// memory stays bounded on ranges where the estimate is off almost everywhere.
pub fn audit_estimates_sampled(indexes: Range<Index>, sample: usize) -> Audit {
    debug!(start = indexes.start, end = indexes.end, sample, "estimate audit started");
    let checked = range_len(&indexes);

    #[cfg(feature = "parallel")]
    let tally = indexes
        .into_par_iter()
        .map(estimate_candidates)
        .fold(Tally::default, |tally, estimate| tally.record(estimate, sample))
        .reduce(Tally::default, |a, b| a.merge(b, sample));
    #[cfg(not(feature = "parallel"))]
    let tally = indexes
        .map(estimate_candidates)
        .fold(Tally::default(), |tally, estimate| tally.record(estimate, sample));

    for estimate in &tally.sample {
        warn!(
            index = estimate.index,
            estimate = estimate.estimate,
            exact = estimate.exact,
            "float group estimate is off"
        );
    }
    if tally.count > tally.sample.len() as u64 {
        warn!(
            mismatches = tally.count,
            shown = tally.sample.len(),
            "more float group estimates are off than the sample holds"
        );
    }

    debug!(
        checked,
        split_candidates = tally.split,
        mismatches = tally.count,
        "estimate audit finished"
    );
    Audit {
        checked,
        split_candidates: tally.split,
        mismatch_count: tally.count,
        mismatches: tally.sample,
    }
}
