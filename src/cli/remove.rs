use std::path::PathBuf;

use clap::Args;
use tracing::warn;

use crate::cli::{load_store, OutputFormat};
use crate::core::types::TraversalOrder;

#[derive(Args)]
pub struct RemoveArgs {
    /// Profile database (text format, or a .json snapshot)
    #[arg(required = true)]
    pub input: PathBuf,

    /// Full name to remove, as "Last, First" (may be given multiple times)
    #[arg(short, long = "name", required = true, num_args = 1..)]
    pub names: Vec<String>,

    /// Write the resulting database to this JSON snapshot
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute remove subcommand
///
/// Names that are not in the database are skipped with a warning.
///
/// # Errors
///
/// Returns an error if the input cannot be loaded or the snapshot cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: RemoveArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let mut store = load_store(&args.input)?;

    let mut removed = Vec::new();
    for name in &args.names {
        if store.remove_by_name(name).is_some() {
            removed.push(name.clone());
        } else {
            warn!("No profile named '{name}'");
        }
    }

    if let Some(output) = &args.output {
        store.write_to_file(output)?;
        if verbose {
            eprintln!("Wrote {} profiles to {}", store.len(), output.display());
        }
    }

    let remaining = store.names(TraversalOrder::Level);
    match format {
        OutputFormat::Text => {
            println!("Removed {} of {} requested profiles", removed.len(), args.names.len());
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
            println!("name");
            for name in &remaining {
                println!("{name}");
            }
        }
    }

    Ok(())
}
