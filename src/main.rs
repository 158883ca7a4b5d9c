use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::opt::Cli;

mod answer;
mod bank;
mod commands;
mod opt;
mod output;
mod quiz;
mod scrape;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    commands::run(cli)
}
