use clap::{Parser, Subcommand};

/// CLI arguments for citygeo
#[derive(Debug, Parser)]
#[command(
    name = "citygeo",
    version,
    about = "Resolve place names to cities with coordinates and timezones"
)]
pub struct CliArgs {
    /// Dataset to search offline (.json, .json.gz or .bin); defaults to the bundled one
    #[arg(short = 'd', long = "dataset", env = "CITYGEO_DATASET", global = true)]
    pub dataset: Option<String>,

    /// Autocomplete endpoint used by `online`
    #[arg(long = "endpoint", env = "CITYGEO_ENDPOINT", global = true)]
    pub endpoint: Option<String>,

    /// Give up on the provider after this many seconds
    #[arg(long = "timeout-secs", default_value_t = 10, global = true)]
    pub timeout_secs: u64,

    /// Log debug output to stderr
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Ranked offline search
    Search {
        /// Place name or country (case-insensitive substring)
        query: String,
        #[arg(short = 'l', long = "limit")]
        limit: Option<usize>,
    },

    /// Online autocomplete search
    Online {
        /// Place name, at least two characters
        query: String,
        #[arg(short = 'l', long = "limit")]
        limit: Option<usize>,
    },

    /// Show one city by id (e.g. `gb-london`)
    Show { id: String },

    /// List every city in the dataset, in stored order
    List,

    /// Show a summary of the dataset
    Stats,

    /// Convert a JSON dataset into a binary snapshot
    Build {
        #[arg(short = 'i', long = "input")]
        input: String,
        #[arg(short = 'o', long = "output")]
        output: String,
    },
}
