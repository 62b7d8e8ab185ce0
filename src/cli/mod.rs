//! Command-line interface for dna-profiler.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **analyze**: Flag profiles of interest and report how each one matched
//! - **cleanup**: Flag, then remove every profile that is not of interest
//! - **remove**: Remove named profiles
//! - **show**: List profiles in level or name order
//! - **export**: Write the database as a JSON snapshot
//!
//! ## Usage
//!
//! ```text
//! # Flag and report
//! dna-profiler analyze input.txt
//!
//! # JSON output for scripting
//! dna-profiler analyze input.txt --format json
//!
//! # Keep only profiles of interest and save the result
//! dna-profiler cleanup input.txt --output remaining.json
//! ```

use std::path::Path;

use clap::{Parser, Subcommand};

use crate::catalog::store::ProfileStore;
use crate::parsing;

pub mod analyze;
pub mod cleanup;
pub mod export;
pub mod remove;
pub mod show;

#[derive(Parser)]
#[command(name = "dna-profiler")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Match STR profiles against two unknown DNA sequences")]
#[command(
    long_about = "dna-profiler loads a database of named STR profiles into a name-ordered tree and matches each profile against two unknown DNA sequences.\n\nA profile is of interest when at least half of its STRs (rounded up) occur, across both sequences combined, exactly as often as recorded."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Flag profiles of interest and report the matches
    Analyze(analyze::AnalyzeArgs),

    /// Remove every profile that is not of interest
    Cleanup(cleanup::CleanupArgs),

    /// Remove profiles by name
    Remove(remove::RemoveArgs),

    /// List the profiles in the database
    Show(show::ShowArgs),

    /// Write the database as a JSON snapshot
    Export(export::ExportArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Load a store from a text database or a `.json` snapshot
fn load_store(path: &Path) -> anyhow::Result<ProfileStore> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase);

    match ext.as_deref() {
        Some("json") => Ok(ProfileStore::load_from_file(path)?),
        _ => Ok(parsing::database::parse_database_file(path)?),
    }
}

fn status_label(of_interest: bool) -> &'static str {
    if of_interest {
        "of_interest"
    } else {
        "unmarked"
    }
}
