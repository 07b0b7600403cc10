use clap::Parser;
use tracing_subscriber::EnvFilter;

mod aliases;
mod cli;
mod config;
mod core;
mod matching;
mod parsing;
mod utils;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("roster_check=debug,info")
    } else {
        EnvFilter::new("roster_check=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        cli::Commands::Reconcile(args) => {
            cli::reconcile::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Aliases(args) => {
            cli::aliases::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Lookup(args) => {
            cli::lookup::run(args, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
