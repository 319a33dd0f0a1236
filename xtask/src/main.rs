//! Custom cargo commands for natpair.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests
//!   cargo xtask check     - Quick check (check + test + clippy)
//!   cargo xtask bench     - Run benchmarks
//!   cargo xtask fuzz      - Run every fuzz target for a short time
//!   cargo xtask kani      - Run Kani proofs

use anyhow::{bail, Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

const FUZZ_TARGETS: &[&str] = &["index_roundtrip", "pair_roundtrip", "signed_inputs"];

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("fuzz") => fuzz(env::args().nth(2).as_deref())?,
        Some("kani") => kani()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Run full verification suite (tests + clippy + proofs crate + limits)
  test      Run all Rust tests, with and without default features
  check     Quick check (cargo check + test + clippy)
  bench     Run benchmarks
  fuzz [S]  Run each fuzz target for S seconds (default 30, needs cargo-fuzz)
  kani      Run Kani proofs (needs cargo-kani)
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("natpair Verification Suite");
    println!("==========================================\n");

    println!("[1/5] Checking contract markers...");
    check_contract_markers()?;
    println!("✓ Contracts present\n");

    println!("[2/5] Running Rust tests...");
    test()?;
    println!("✓ All Rust tests passed\n");

    println!("[3/5] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("[4/5] Testing the proofs crate...");
    run_cargo_in(&project_root()?.join("kani-proofs"), &["test", "--quiet"])?;
    println!("✓ Proofs crate tests passed\n");

    println!("[5/5] Verifying group limits match the proofs crate...");
    verify_limits()?;
    println!("✓ Limits aligned\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test", "--quiet"])?;
    run_cargo(&["test", "--quiet", "--no-default-features"])
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check", "--all-targets"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

/// Run every fuzz target for a fixed time
fn fuzz(seconds: Option<&str>) -> Result<()> {
    let seconds: u64 = match seconds {
        Some(s) => s.parse().with_context(|| format!("invalid duration {:?}", s))?,
        None => 30,
    };
    let fuzz_dir = project_root()?.join("fuzz");
    let max_time = format!("-max_total_time={}", seconds);

    for target in FUZZ_TARGETS {
        println!("Fuzzing {} for {}s...", target, seconds);
        run_cargo_in(&fuzz_dir, &["+nightly", "fuzz", "run", target, "--", &max_time])?;
    }
    println!("\n✓ No fuzz target crashed");
    Ok(())
}

/// Run Kani proofs
fn kani() -> Result<()> {
    run_cargo_in(&project_root()?.join("kani-proofs"), &["kani"])
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    run_cargo_in(&project_root()?, args)
}

fn run_cargo_in(dir: &Path, args: &[&str]) -> Result<()> {
    let status = Command::new("cargo")
        .args(args)
        .current_dir(dir)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed in {}", args, dir.display());
    }

    Ok(())
}

/// Every contract in src/verify/contracts.rs must still be called from the core.
fn check_contract_markers() -> Result<()> {
    let root = project_root()?;
    let contracts = std::fs::read_to_string(root.join("src/verify/contracts.rs"))
        .context("Failed to read contracts.rs")?;

    let names: Vec<&str> = contracts
        .lines()
        .filter_map(|line| line.trim().strip_prefix("pub fn "))
        .filter_map(|rest| rest.split('(').next())
        .collect();

    if names.len() < 4 {
        bail!(
            "Expected at least 4 contracts, found {}. Someone may have removed a check!",
            names.len()
        );
    }

    let mut core = String::new();
    for file in ["src/types.rs", "src/resolver.rs", "src/pairing.rs"] {
        core.push_str(
            &std::fs::read_to_string(root.join(file))
                .with_context(|| format!("Failed to read {}", file))?,
        );
    }

    for name in names {
        if !core.contains(&format!("{}(", name)) {
            bail!("Contract {} is defined but never called", name);
        }
    }

    Ok(())
}

/// The proofs crate copies MAX_GROUP; the copy must not drift.
fn verify_limits() -> Result<()> {
    let root = project_root()?;

    let crate_src = std::fs::read_to_string(root.join("src/triangular.rs"))
        .context("Failed to read triangular.rs")?;
    let proofs_src = std::fs::read_to_string(root.join("kani-proofs/src/lib.rs"))
        .context("Failed to read kani-proofs/src/lib.rs")?;

    let ours = extract_const(&crate_src, "MAX_GROUP")
        .context("MAX_GROUP not found in src/triangular.rs")?;
    let theirs = extract_const(&proofs_src, "MAX_GROUP")
        .context("MAX_GROUP not found in kani-proofs/src/lib.rs")?;

    if ours != theirs {
        bail!("MAX_GROUP={} in src, but {} in kani-proofs", ours, theirs);
    }

    Ok(())
}

fn extract_const(content: &str, name: &str) -> Option<u64> {
    // Look for "pub const MAX_GROUP: Group = 6_074_000_998;"
    let prefix = format!("pub const {}:", name);
    content
        .lines()
        .map(str::trim)
        .find(|line| line.starts_with(&prefix))
        .and_then(|line| line.split('=').nth(1))
        .map(|value| value.trim().trim_end_matches(';').replace('_', ""))
        .and_then(|value| value.parse().ok())
}
