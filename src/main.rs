// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use natpair::{
    audit_estimates_sampled, estimate_candidates, group_from_index, natural, pairing, try_pairing_inverse,
    verify_group_membership, verify_group_sums, verify_index_identity, verify_pair_identity,
    verify_partition, Group, GroupInterval, Index, InvariantError, Pair, Pairs, Quantity, VerificationReport,
};

mod cli;
use cli::display::{
    failed, group_badge, index_label, pair_label, passed, row, section_bot, section_mid,
    section_top,
};
use cli::{Cli, Commands};

fn main() {
    init_tracing();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr, filtered by `RUST_LOG` (default `warn`).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let json = cli.json;
    match cli.command {
        Commands::Pair { index } => run_pair(natural(Quantity::Index, index)?, json),
        Commands::Index { first, second } => run_index(
            natural(Quantity::First, first)?,
            natural(Quantity::Second, second)?,
            json,
        ),
        Commands::Group { index } => run_group(natural(Quantity::Index, index)?, json),
        Commands::Bounds { group } => run_bounds(natural(Quantity::Group, group)?, json),
        Commands::Table { groups, indexes } => run_table(groups, indexes, json),
        Commands::Verify {
            indexes,
            pairs,
            groups,
        } => run_verify(indexes, pairs, groups, json),
        Commands::Audit {
            start,
            indexes,
            sample,
        } => run_audit(start, indexes, sample, json),
    }
}

#[cfg(feature = "serde_json")]
fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let out = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    println!("{}", out);
    Ok(())
}

#[cfg(not(feature = "serde_json"))]
fn print_json<T: Serialize>(_value: &T) -> Result<()> {
    bail!("--json requires natpair to be built with the `serde_json` feature")
}

/// One step of the enumeration.
#[derive(Serialize)]
struct Entry {
    index: Index,
    group: Group,
    pair: Pair,
}

impl Entry {
    fn of(index: Index, pair: Pair) -> Self {
        Self {
            index,
            group: pair.first + pair.second,
            pair,
        }
    }
}

// ============================================================================
// LOOKUPS
// ============================================================================

fn run_pair(index: Index, json: bool) -> Result<()> {
    let entry = Entry::of(index, pairing(index));
    if json {
        return print_json(&entry);
    }
    println!(
        "s({}) = {}  {}",
        index_label(entry.index),
        pair_label(entry.pair),
        group_badge(entry.group)
    );
    Ok(())
}

fn run_index(first: u64, second: u64, json: bool) -> Result<()> {
    let index = try_pairing_inverse(first, second)?;
    let entry = Entry::of(index, Pair::new(first, second));
    if json {
        return print_json(&entry);
    }
    println!(
        "s_inv{} = {}  {}",
        pair_label(entry.pair),
        index_label(entry.index),
        group_badge(entry.group)
    );
    Ok(())
}

fn run_group(index: Index, json: bool) -> Result<()> {
    let estimate = estimate_candidates(index);
    if json {
        return print_json(&estimate);
    }
    println!("index {} has group {}", index_label(index), group_badge(estimate.exact));
    println!(
        "  float candidates: lower {} upper {} → estimate {}",
        estimate.lower, estimate.upper, estimate.estimate
    );
    if !estimate.is_exact() {
        println!("  {}", failed("float estimate is off by rounding"));
    }
    Ok(())
}

fn run_bounds(group: Group, json: bool) -> Result<()> {
    let interval = GroupInterval::new(group)?;
    if json {
        return print_json(&interval);
    }
    println!(
        "group {} has indexes minimum {} and maximum {}",
        group_badge(group),
        index_label(interval.min_index()),
        index_label(interval.max_index())
    );
    Ok(())
}

// ============================================================================
// TABLE
// ============================================================================

#[derive(Serialize)]
struct Table {
    groups: Vec<GroupInterval>,
    entries: Vec<Entry>,
}

fn run_table(groups: u64, indexes: u64, json: bool) -> Result<()> {
    let intervals = (0..groups)
        .map(GroupInterval::new)
        .collect::<Result<Vec<_>, _>>()?;
    let entries: Vec<Entry> = Pairs::new()
        .take(usize::try_from(indexes).context("too many indexes for this platform")?)
        .map(|(index, pair)| Entry::of(index, pair))
        .collect();

    if json {
        return print_json(&Table {
            groups: intervals,
            entries,
        });
    }

    section_top("GROUPS");
    for interval in &intervals {
        row(&format!(
            "{}  [{} ..= {}]",
            group_badge(interval.group()),
            index_label(interval.min_index()),
            index_label(interval.max_index())
        ));
        for index in interval.indices() {
            row(&format!(
                "    index {} has group {}",
                index_label(index),
                group_badge(group_from_index(index))
            ));
        }
    }

    section_mid("PAIRS");
    for entry in &entries {
        let back = try_pairing_inverse(entry.pair.first, entry.pair.second)?;
        row(&format!(
            "s({}) = {}    s_inv{} = {}",
            index_label(entry.index),
            pair_label(entry.pair),
            entry.pair,
            index_label(back)
        ));
    }
    section_bot();
    Ok(())
}

// ============================================================================
// SWEEPS
// ============================================================================

#[cfg(feature = "parallel")]
fn with_progress<T>(message: &'static str, f: impl FnOnce() -> T) -> T {
    use indicatif::{ProgressBar, ProgressStyle};
    use std::time::Duration;

    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg} [{elapsed}]") {
        pb.set_style(style);
    }
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(80));
    let out = f();
    pb.finish_and_clear();
    out
}

#[cfg(not(feature = "parallel"))]
fn with_progress<T>(_message: &'static str, f: impl FnOnce() -> T) -> T {
    f()
}

fn run_sweep(
    name: &'static str,
    json: bool,
    sweep: impl FnOnce() -> Result<VerificationReport, InvariantError>,
) -> Result<VerificationReport> {
    match with_progress(name, sweep) {
        Ok(report) => {
            if !json {
                println!("{}", passed(&report.to_string()));
            }
            Ok(report)
        }
        Err(err) => {
            if !json {
                println!("{}", failed(name));
            }
            bail!("{} check failed: {}", name, err)
        }
    }
}

fn run_verify(indexes: u64, pairs: u64, groups: u64, json: bool) -> Result<()> {
    let reports = vec![
        run_sweep("partition", json, || verify_partition(0..groups))?,
        run_sweep("group membership", json, || verify_group_membership(0..indexes))?,
        run_sweep("group sums", json, || verify_group_sums(0..indexes))?,
        run_sweep("index identity", json, || verify_index_identity(0..indexes))?,
        run_sweep("pair identity", json, || verify_pair_identity(0..pairs, 0..pairs))?,
    ];

    if json {
        return print_json(&reports);
    }
    Ok(())
}

fn run_audit(start: u64, indexes: u64, sample: usize, json: bool) -> Result<()> {
    let end = start.saturating_add(indexes);
    let audit = with_progress("auditing float estimates", || {
        audit_estimates_sampled(start..end, sample)
    });

    if json {
        return print_json(&audit);
    }

    println!(
        "audited {} indexes from {}: {} with split candidates, {} misestimated",
        audit.checked,
        start,
        audit.split_candidates,
        audit.mismatch_count
    );
    for estimate in &audit.mismatches {
        println!(
            "  {}",
            failed(&format!(
                "index {}: estimate {} (candidates {}..{}), exact {}",
                estimate.index, estimate.estimate, estimate.lower, estimate.upper, estimate.exact
            ))
        );
    }
    let unlisted = audit.mismatch_count - audit.mismatches.len() as u64;
    if unlisted > 0 {
        println!("  ... and {} more", unlisted);
    }
    if audit.is_clean() {
        println!("{}", passed("float estimate matches the exact resolver"));
    }
    Ok(())
}
