//! Cleanup command - flag profiles, then prune everything that is not of interest.

use std::path::PathBuf;

use clap::Args;

use crate::cli::{load_store, OutputFormat};
use crate::core::types::TraversalOrder;

#[derive(Args)]
pub struct CleanupArgs {
    /// Profile database (text format, or a .json snapshot)
    #[arg(required = true)]
    pub input: PathBuf,

    /// Write the pruned database to this JSON snapshot
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute cleanup subcommand
///
/// # Errors
///
/// Returns an error if the input cannot be loaded or the snapshot cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: CleanupArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let mut store = load_store(&args.input)?;
    let flagged = store.flag_profiles_of_interest();

    if verbose {
        eprintln!("{flagged} of {} profiles are of interest", store.len());
    }

    let removed = store.cleanup_tree();
    let remaining = store.names(TraversalOrder::Level);

    if let Some(output) = &args.output {
        store.write_to_file(output)?;
        if verbose {
            eprintln!("Wrote {} profiles to {}", store.len(), output.display());
        }
    }

    match format {
        OutputFormat::Text => {
            println!("Removed {} profiles:", removed.len());
            for name in &removed {
                println!("  {name}");
            }
            println!("\nRemaining {} profiles:", remaining.len());
            for name in &remaining {
                println!("  {name}");
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "removed": removed,
                "remaining": remaining,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("name\taction");
            for name in &removed {
                println!("{name}\tremoved");
            }
            for name in &remaining {
                println!("{name}\tkept");
            }
        }
    }

    Ok(())
}
