// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: runtime contracts and exhaustive sweeps.
//!
//! Two complementary approaches to catching bugs:
//!
//! 1. **Runtime contracts** that the core calls on its own results. They panic in
//!    debug builds when an invariant breaks and vanish in release.
//!
//! 2. **Sweeps** (`verify_*`) that walk whole ranges of inputs and return the first
//!    input that breaks a property, with what came back. These are what the
//!    `natpair verify` command and the integration tests run.
//!
//! Use both. The contracts catch a bad result the moment it is produced. The
//! sweeps catch it without needing a debug build, and tell you which input it was.

pub mod contracts;
mod report;

pub use report::*;
