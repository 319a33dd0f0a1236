// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the natpair command-line interface.
//!
//! Four lookup commands (`pair`, `index`, `group`, `bounds`) and three that walk
//! ranges: `table` prints the enumeration, `verify` runs the identity sweeps, and
//! `audit` measures the float group estimate against the exact resolver.
//!
//! Numeric lookups are parsed as `i128` so that `-3` reaches the domain check
//! and gets a proper error instead of being mistaken for a flag.

pub mod display;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "natpair",
    about = "Exact diagonal pairing between ℕ and ℕ×ℕ",
    version
)]
pub struct Cli {
    /// Emit JSON instead of formatted text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Map an index to its pair
    Pair {
        #[arg(allow_negative_numbers = true)]
        index: i128,
    },

    /// Map a pair back to its index
    Index {
        #[arg(allow_negative_numbers = true)]
        first: i128,

        #[arg(allow_negative_numbers = true)]
        second: i128,
    },

    /// Show the group an index belongs to, with both float candidates
    Group {
        #[arg(allow_negative_numbers = true)]
        index: i128,
    },

    /// Show the first and last index of a group
    Bounds {
        #[arg(allow_negative_numbers = true)]
        group: i128,
    },

    /// Print group boundaries and the first pairs of the enumeration
    Table {
        /// Number of groups to list
        #[arg(long, default_value = "10")]
        groups: u64,

        /// Number of indexes to round-trip
        #[arg(long, default_value = "55")]
        indexes: u64,
    },

    /// Check that pairing and its inverse compose to the identity
    Verify {
        /// Check pairing_inverse(pairing(i)) == i for i in 0..N
        #[arg(long, default_value = "10000")]
        indexes: u64,

        /// Check pairing(pairing_inverse(a, b)) == (a, b) for a, b in 0..N
        #[arg(long, default_value = "1000")]
        pairs: u64,

        /// Check the group partition for groups 0..N
        #[arg(long, default_value = "10000")]
        groups: u64,
    },

    /// Compare the floating-point group estimate with the exact resolver
    Audit {
        /// First index to audit
        #[arg(long, default_value = "0")]
        start: u64,

        /// Number of indexes to audit
        #[arg(long, default_value = "1000000")]
        indexes: u64,

        /// Number of misestimated indexes to keep and list
        #[arg(long, default_value = "20")]
        sample: usize,
    },
}
