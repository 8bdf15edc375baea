//! Custom cargo commands for the hymn catalog.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests
//!   cargo xtask check     - Quick check (check + test + clippy)
//!   cargo xtask bundle    - Check the sample catalog and rebuild its bundle

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bundle") => bundle()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Run full verification suite (tests + clippy + catalog checks)
  test      Run all Rust tests
  check     Quick check (cargo check + test + clippy)
  bundle    Check the sample catalog, then write dist/hymns.bundle.json
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("Hymn Catalog Verification Suite");
    println!("==========================================\n");

    println!("[1/5] Checking invariant markers...");
    check_invariant_markers()?;
    println!("✓ Invariant markers present\n");

    println!("[2/5] Running Rust tests...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ All Rust tests passed\n");

    println!("[3/5] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("[4/5] Validating sample records...");
    let records = sample_records()?;
    let mut args = vec!["run", "--quiet", "--", "validate"];
    args.extend(records.iter().map(String::as_str));
    run_cargo(&args)?;
    println!("✓ {} records valid\n", records.len());

    println!("[5/5] Checking sample catalog integrity...");
    run_cargo(&["run", "--quiet", "--", "check"])?;
    println!("✓ Index matches records\n");

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
    run_cargo(&["check"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Integrity check first; a bundle is only written from a consistent catalog.
fn bundle() -> Result<()> {
    run_cargo(&["run", "--quiet", "--", "check"])?;
    run_cargo(&[
        "run",
        "--quiet",
        "--",
        "bundle",
        "--output",
        "dist/hymns.bundle.json",
    ])
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
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

/// Record files of the sample catalog, relative to the project root.
fn sample_records() -> Result<Vec<String>> {
    let root = project_root()?;
    let mut records = Vec::new();
    for entry in std::fs::read_dir(root.join("data/hymns")).context("Failed to read data/hymns")? {
        let path = entry?.path();
        if path.extension().is_some_and(|ext| ext == "json") {
            let relative = path.strip_prefix(&root).unwrap_or(&path);
            records.push(relative.display().to_string());
        }
    }
    records.sort();
    if records.is_empty() {
        bail!("No hymn records under data/hymns");
    }
    Ok(records)
}

fn check_invariant_markers() -> Result<()> {
    let root = project_root()?;
    let src_dir = root.join("src");

    let output = Command::new("grep")
        .args(["-r", "INVARIANT:", "--include=*.rs"])
        .current_dir(&src_dir)
        .output()
        .context("Failed to run grep")?;

    let count = output.stdout.split(|&b| b == b'\n').filter(|l| !l.is_empty()).count();

    if count < 3 {
        bail!(
            "Expected at least 3 INVARIANT markers, found {}. Someone may have removed safety comments!",
            count
        );
    }

    Ok(())
}
