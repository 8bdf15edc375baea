// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the tenzi command-line interface.
//!
//! Checking commands (`validate`, `check`), producing commands (`bundle`,
//! `reindex`) and lookups (`show`, `category`, `tag`, `search`, `categories`,
//! `tags`). All of them read the catalog under `--data-dir`.

pub mod display;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use tenzi::config::{DATA_DIR_ENV, DEFAULT_DATA_DIR};

#[derive(Parser)]
#[command(
    name = "tenzi",
    about = "Swahili hymn catalog: validation, integrity checks and offline bundles",
    version
)]
pub struct Cli {
    /// Catalog root containing index.json, schema.json and hymns/
    #[arg(long, global = true, env = DATA_DIR_ENV, default_value = DEFAULT_DATA_DIR)]
    pub data_dir: PathBuf,

    /// More log output (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Structurally validate hymn record files
    Validate {
        /// Record files to validate
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Cross-check every index entry against its record
    Check,

    /// Assemble the offline bundle
    Bundle {
        /// Output file for the bundle JSON
        #[arg(short, long)]
        output: PathBuf,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Regenerate the index from the record files
    Reindex {
        /// Write the index here instead of printing it
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Version string for the new index (defaults to the current index's)
        #[arg(long)]
        index_version: Option<String>,
    },

    /// Print one hymn
    Show {
        /// Hymn id
        id: u32,
    },

    /// List hymns in a category
    Category {
        /// Category name, e.g. "praise"
        name: String,
    },

    /// List hymns carrying a tag
    Tag {
        /// Tag name
        name: String,
    },

    /// Search titles and subtitles
    Search {
        /// Case-insensitive substring
        term: String,
    },

    /// List categories with hymn counts
    Categories,

    /// List tags with hymn counts
    Tags,
}
