// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use tenzi::build::{generate, reindex, write_bundle, write_json};
use tenzi::verify::{check_integrity, check_lookups, check_metadata, validate};
use tenzi::{Catalog, CatalogPaths};

mod cli;
use cli::{display, Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("❌ {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so stdout stays clean for JSON and hymn text.
fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "debug",
        (false, _) => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("tenzi={}", default_level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Returns `Ok(false)` when a check ran to completion and found problems.
fn run(cli: Cli) -> Result<bool> {
    debug!(data_dir = %cli.data_dir.display(), "opening catalog");
    let catalog = Catalog::open(CatalogPaths::new(&cli.data_dir));

    match cli.command {
        Commands::Validate { files } => validate_files(&files),
        Commands::Check => run_check(&catalog),
        Commands::Bundle { output, pretty } => {
            let bundle = generate(&catalog).context("bundle generation failed")?;
            let summary = write_bundle(&bundle, &output, pretty)?;
            display::bundle_summary(&output.display().to_string(), &summary);
            Ok(true)
        }
        Commands::Reindex {
            output,
            index_version,
        } => {
            let version = match index_version {
                Some(v) => v,
                None => catalog
                    .index()
                    .map(|index| index.version.clone())
                    .context("no --index-version given and the current index is unreadable")?,
            };
            let index = reindex(&catalog, &version, chrono::Utc::now())?;
            match output {
                Some(path) => {
                    write_json(&index, &path, true)?;
                    println!("{} {} ({} hymns)", display::ok_mark(), path.display(), index.total_hymns);
                }
                None => println!("{}", serde_json::to_string_pretty(&index)?),
            }
            Ok(true)
        }
        Commands::Show { id } => {
            display::hymn(&catalog.hymn(id)?);
            Ok(true)
        }
        Commands::Category { name } => {
            display::hymn_list(&catalog.by_category(&name)?);
            Ok(true)
        }
        Commands::Tag { name } => {
            display::hymn_list(&catalog.by_tag(&name)?);
            Ok(true)
        }
        Commands::Search { term } => {
            display::hymn_list(&catalog.search_by_title(&term)?);
            Ok(true)
        }
        Commands::Categories => {
            display::counts(&catalog.categories()?);
            Ok(true)
        }
        Commands::Tags => {
            display::counts(&catalog.tags()?);
            Ok(true)
        }
    }
}

fn validate_files(files: &[impl AsRef<Path>]) -> Result<bool> {
    let mut all_valid = true;
    for file in files {
        let path = file.as_ref();
        let content =
            fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
        let record: serde_json::Value = serde_json::from_str(&content)
            .with_context(|| format!("Invalid JSON in {}", path.display()))?;

        let report = validate(&record);
        all_valid &= report.is_valid;
        display::validation(&path.display().to_string(), &report);
    }
    Ok(all_valid)
}

fn run_check(catalog: &Catalog) -> Result<bool> {
    let mut report = check_integrity(catalog).context("integrity check aborted")?;
    let metadata = check_metadata(catalog).context("metadata check aborted")?;
    report.issues.extend(metadata.issues);
    let lookup_errors = check_lookups(catalog.index()?);
    display::integrity(report.checked, &report.issues, &lookup_errors);
    Ok(report.is_ok() && lookup_errors.is_empty())
}
