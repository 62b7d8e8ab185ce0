use clap::Parser;
use tracing_subscriber::EnvFilter;

use dna_profiler::cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("dna_profiler=debug,info")
    } else {
        EnvFilter::new("dna_profiler=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        cli::Commands::Analyze(args) => {
            cli::analyze::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Cleanup(args) => {
            cli::cleanup::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Remove(args) => {
            cli::remove::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Show(args) => {
            cli::show::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Export(args) => {
            cli::export::run(args, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
