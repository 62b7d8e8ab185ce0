use std::path::PathBuf;

use clap::Args;

use crate::cli::{load_store, OutputFormat};

#[derive(Args)]
pub struct ExportArgs {
    /// Profile database (text format, or a .json snapshot)
    #[arg(required = true)]
    pub input: PathBuf,

    /// Output snapshot path
    #[arg(required = true)]
    pub output: PathBuf,

    /// Run the matching engine before exporting so flags are saved
    #[arg(long)]
    pub flag: bool,
}

/// Execute export subcommand
///
/// # Errors
///
/// Returns an error if the input cannot be loaded or the snapshot cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ExportArgs, _format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let mut store = load_store(&args.input)?;
    if args.flag {
        store.flag_profiles_of_interest();
    }

    store.write_to_file(&args.output)?;

    if verbose {
        eprintln!(
            "Exported {} profiles to {}",
            store.len(),
            args.output.display()
        );
    }
    Ok(())
}
