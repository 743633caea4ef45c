mod cli;
mod commands;
mod corpus;
mod responder;

use clap::Parser;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();
    let config = commands::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Query {
            corpus,
            query,
            top_k,
            json,
        } => commands::query::run(&corpus, &query, top_k, json, &config, cli.seed),
        Commands::Chat { corpus } => commands::chat::run(&corpus, &config, cli.seed),
        Commands::Stats { corpus } => commands::stats::run(&corpus, &config, cli.seed),
        Commands::Version => commands::version::run(),
    }
}
