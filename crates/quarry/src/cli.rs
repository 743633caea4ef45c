use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "quarry")]
#[command(version)]
#[command(about = "Hybrid BM25 + embedding retrieval over line-delimited corpora")]
pub struct Cli {
    /// JSON retrieval configuration (defaults apply when omitted)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Embedding table seed for reproducible runs
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank corpus documents against a query
    Query {
        /// Corpus file, one document per line
        corpus: PathBuf,

        /// Free-text query
        query: String,

        /// Number of results (overrides configured top_k)
        #[arg(short = 'k', long)]
        top_k: Option<usize>,

        /// Emit results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Answer questions interactively over a corpus
    Chat {
        /// Corpus file, one document per line
        corpus: PathBuf,
    },

    /// Print corpus statistics as JSON
    Stats {
        /// Corpus file, one document per line
        corpus: PathBuf,
    },

    /// Print version information
    Version,
}
