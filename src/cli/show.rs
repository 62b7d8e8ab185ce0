use std::path::PathBuf;

use clap::Args;

use crate::catalog::node::TreeNode;
use crate::cli::{load_store, status_label, OutputFormat};
use crate::core::str_record::StrRecord;
use crate::core::types::{InterestStatus, TraversalOrder};

#[derive(Args)]
pub struct ShowArgs {
    /// Profile database (text format, or a .json snapshot)
    #[arg(required = true)]
    pub input: PathBuf,

    /// Order to list profiles in
    #[arg(long, value_enum, default_value = "level")]
    pub order: TraversalOrder,

    /// Run the matching engine before listing
    #[arg(long)]
    pub flag: bool,
}

/// Execute show subcommand
///
/// # Errors
///
/// Returns an error if the input cannot be loaded.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ShowArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let mut store = load_store(&args.input)?;
    if args.flag {
        store.flag_profiles_of_interest();
    }

    if verbose {
        eprintln!("{} profiles, tree height {}", store.len(), store.height());
    }

    let nodes: Vec<&TreeNode> = match args.order {
        TraversalOrder::Level => store.level_order().collect(),
        TraversalOrder::In => store.in_order().collect(),
    };

    match format {
        OutputFormat::Text => {
            for node in &nodes {
                let strs: Vec<String> = node
                    .profile()
                    .strs()
                    .iter()
                    .map(StrRecord::to_string)
                    .collect();
                println!(
                    "{} [{}] {}",
                    node.name(),
                    InterestStatus::from_flag(node.profile().is_of_interest()),
                    strs.join(" ")
                );
            }
        }
        OutputFormat::Json => {
            let profiles: Vec<_> = nodes
                .iter()
                .map(|node| {
                    serde_json::json!({
                        "name": node.name(),
                        "status": InterestStatus::from_flag(node.profile().is_of_interest()),
                        "strs": node.profile().strs(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&profiles)?);
        }
        OutputFormat::Tsv => {
            println!("name\tstatus\tunit\toccurrences");
            for node in &nodes {
                let status = status_label(node.profile().is_of_interest());
                for record in node.profile().strs() {
                    println!(
                        "{}\t{status}\t{}\t{}",
                        node.name(),
                        record.unit(),
                        record.occurrences()
                    );
                }
            }
        }
    }

    Ok(())
}
