use clap::Parser;
use tracing_subscriber::EnvFilter;

use kmer_solver::cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("kmer_solver=debug,info")
    } else {
        EnvFilter::new("kmer_solver=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    cli::run(cli.command, cli.format)
}
