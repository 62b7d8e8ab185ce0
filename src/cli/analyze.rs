use std::collections::HashMap;
use std::path::PathBuf;

use clap::Args;

use crate::catalog::store::ProfileStore;
use crate::cli::{load_store, status_label, OutputFormat};
use crate::matching::ProfileEvaluation;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Profile database (text format, or a .json snapshot)
    #[arg(required = true)]
    pub input: PathBuf,
}

/// Execute analyze subcommand
///
/// # Errors
///
/// Returns an error if the input cannot be loaded.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: AnalyzeArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let mut store = load_store(&args.input)?;

    if verbose {
        eprintln!(
            "Loaded {} profiles (tree height {})",
            store.len(),
            store.height()
        );
    }

    store.flag_profiles_of_interest();
    let evaluations: HashMap<String, ProfileEvaluation> =
        store.evaluations().into_iter().collect();

    match format {
        OutputFormat::Text => print_text_results(&store, &evaluations, verbose),
        OutputFormat::Json => print_json_results(&store, &evaluations)?,
        OutputFormat::Tsv => print_tsv_results(&store, &evaluations),
    }

    Ok(())
}

fn print_text_results(
    store: &ProfileStore,
    evaluations: &HashMap<String, ProfileEvaluation>,
    verbose: bool,
) {
    let of_interest = store.names_by_interest(true);
    let unmarked = store.names_by_interest(false);

    println!("Profile Analysis");
    println!("{}", "=".repeat(60));
    println!(
        "\nUnknown sequences: {} bp, {} bp",
        store.unknowns().first().len(),
        store.unknowns().second().len()
    );
    println!(
        "Profiles: {} ({} of interest, {} unmarked)",
        store.len(),
        of_interest.len(),
        unmarked.len()
    );

    for (title, names) in [("Of interest", &of_interest), ("Unmarked", &unmarked)] {
        println!("\n{title}:");
        if names.is_empty() {
            println!("  (none)");
        }
        for name in names {
            let Some(evaluation) = evaluations.get(name) else {
                continue;
            };
            println!(
                "  {name}: {}/{} STRs corroborated ({} required)",
                evaluation.corroborated, evaluation.total, evaluation.required
            );
            if verbose {
                for m in &evaluation.strs {
                    let mark = if m.corroborates() { "+" } else { "-" };
                    println!(
                        "    {mark} {}: expected {}, found {} + {} = {}",
                        m.unit,
                        m.expected,
                        m.first,
                        m.second,
                        m.observed()
                    );
                }
            }
        }
    }
}

fn print_json_results(
    store: &ProfileStore,
    evaluations: &HashMap<String, ProfileEvaluation>,
) -> anyhow::Result<()> {
    let profiles: Vec<_> = store
        .level_order()
        .map(|node| {
            serde_json::json!({
                "name": node.name(),
                "of_interest": node.profile().is_of_interest(),
                "evaluation": evaluations.get(node.name()),
            })
        })
        .collect();

    let output = serde_json::json!({
        "unknowns": {
            "first": store.unknowns().first(),
            "second": store.unknowns().second(),
        },
        "profile_count": store.len(),
        "of_interest": store.names_by_interest(true),
        "unmarked": store.names_by_interest(false),
        "profiles": profiles,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_results(store: &ProfileStore, evaluations: &HashMap<String, ProfileEvaluation>) {
    println!("name\tstatus\tcorroborated\trequired\ttotal");
    for node in store.level_order() {
        if let Some(evaluation) = evaluations.get(node.name()) {
            println!(
                "{}\t{}\t{}\t{}\t{}",
                node.name(),
                status_label(node.profile().is_of_interest()),
                evaluation.corroborated,
                evaluation.required,
                evaluation.total
            );
        }
    }
}
