//! Custom cargo commands for the typeahead crate.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests
//!   cargo xtask check     - Quick check (check + test + clippy)
//!   cargo xtask fuzz      - Run each fuzz target for a short while
//!   cargo xtask bench     - Run benchmarks

use anyhow::{bail, Context, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Fuzz targets under fuzz/fuzz_targets
const FUZZ_TARGETS: &[&str] = &["grouped_insertion", "controller_events"];

/// Contract functions that must stay wired into the code they guard
const CONTRACTS: &[(&str, &str)] = &[
    ("check_ranges_consistent", "index/grouped.rs"),
    ("check_ranked_order", "scan.rs"),
    ("check_cursor_in_bounds", "controller/cursor.rs"),
];

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("fuzz") => fuzz(env::args().nth(2).as_deref())?,
        Some("bench") => bench()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Run full verification suite (markers + tests + clippy + fuzz smoke)
  test      Run all Rust tests
  check     Quick check (cargo check + test + clippy)
  fuzz      Run fuzz targets for 30s each (needs cargo-fuzz, nightly)
  bench     Run benchmarks
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("Typeahead Verification Suite");
    println!("==========================================\n");

    println!("[1/4] Checking invariant markers...");
    check_invariant_markers()?;
    println!("✓ Invariant markers present\n");

    println!("[2/4] Running Rust tests...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ All Rust tests passed\n");

    println!("[3/4] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("[4/4] Fuzz smoke run...");
    fuzz_all(10)?;
    println!("✓ Fuzz targets ran clean\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test"])
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

/// Run one fuzz target, or all of them
fn fuzz(target: Option<&str>) -> Result<()> {
    match target {
        Some(name) if FUZZ_TARGETS.contains(&name) => run_fuzz_target(name, 30),
        Some(name) => bail!("unknown fuzz target {} (known: {:?})", name, FUZZ_TARGETS),
        None => fuzz_all(30),
    }
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
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
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

fn fuzz_all(seconds: u32) -> Result<()> {
    for target in FUZZ_TARGETS {
        run_fuzz_target(target, seconds)?;
    }
    Ok(())
}

fn run_fuzz_target(target: &str, seconds: u32) -> Result<()> {
    println!("  fuzzing {} for {}s", target, seconds);
    let max_time = format!("-max_total_time={}", seconds);
    run_cargo_in(
        &project_root()?,
        &["+nightly", "fuzz", "run", target, "--", &max_time],
    )
}

/// Every contract must still be defined, documented and called from the
/// module it guards, next to an `INVARIANT:` marker.
fn check_invariant_markers() -> Result<()> {
    let src_dir = project_root()?.join("src");

    let contracts = fs::read_to_string(src_dir.join("contracts.rs"))
        .context("Failed to read contracts.rs")?;
    if !contracts.contains("INVARIANTS (DO NOT REMOVE THESE CHECKS)") {
        bail!("contracts.rs lost its invariant table");
    }

    for (function, caller) in CONTRACTS {
        if !contracts.contains(&format!("pub fn {}(", function)) {
            bail!("contracts.rs no longer defines {}", function);
        }
        let source = fs::read_to_string(src_dir.join(caller))
            .with_context(|| format!("Failed to read {}", caller))?;
        if !source.contains(&format!("{}(", function)) {
            bail!("{} no longer calls {}", caller, function);
        }
        if !source.contains("INVARIANT:") {
            bail!("{} has no INVARIANT marker. Someone may have removed safety comments!", caller);
        }
    }

    Ok(())
}
