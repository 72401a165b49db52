//! Command line argument parsing for the wordtrie CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::Backend;

/// wordtrie - frequency-counting word dictionary
#[derive(Parser, Debug, Clone)]
#[command(name = "wordtrie")]
#[command(about = "Build a word dictionary from a word list and query it")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct WordTrieArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "WORDTRIE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Read the word list as "<word> <frequency>" lines
    #[arg(long)]
    pub frequencies: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl WordTrieArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Show dictionary statistics
    Stats(StatsArgs),

    /// Look up words
    Lookup(LookupArgs),

    /// Complete a prefix with its most frequent extension
    Complete(CompleteArgs),

    /// Find the closest stored word
    Fuzzy(FuzzyArgs),

    /// Tree distance between two stored words
    Distance(DistanceArgs),

    /// Write the dictionary as a frequency file
    Save(SaveArgs),
}

/// Arguments for dictionary statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Word list to load
    #[arg(value_name = "WORDLIST")]
    pub wordlist: PathBuf,

    /// Dictionary backend (defaults to the configured one)
    #[arg(short, long)]
    pub backend: Option<Backend>,
}

/// Arguments for word lookup
#[derive(Parser, Debug, Clone)]
pub struct LookupArgs {
    /// Word list to load
    #[arg(value_name = "WORDLIST")]
    pub wordlist: PathBuf,

    /// Words to look up
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,

    /// Dictionary backend (defaults to the configured one)
    #[arg(short, long)]
    pub backend: Option<Backend>,
}

/// Arguments for prefix completion
#[derive(Parser, Debug, Clone)]
pub struct CompleteArgs {
    /// Word list to load
    #[arg(value_name = "WORDLIST")]
    pub wordlist: PathBuf,

    /// Prefix to complete
    #[arg(value_name = "PREFIX")]
    pub prefix: String,
}

/// Arguments for fuzzy matching
#[derive(Parser, Debug, Clone)]
pub struct FuzzyArgs {
    /// Word list to load
    #[arg(value_name = "WORDLIST")]
    pub wordlist: PathBuf,

    /// Word to match
    #[arg(value_name = "TARGET")]
    pub target: String,

    /// Divergence budget (defaults to the configured one)
    #[arg(short = 'd', long)]
    pub max_divergence: Option<usize>,
}

/// Arguments for node distance
#[derive(Parser, Debug, Clone)]
pub struct DistanceArgs {
    /// Word list to load
    #[arg(value_name = "WORDLIST")]
    pub wordlist: PathBuf,

    /// First word
    #[arg(value_name = "FIRST")]
    pub first: String,

    /// Second word
    #[arg(value_name = "SECOND")]
    pub second: String,
}

/// Arguments for saving a frequency file
#[derive(Parser, Debug, Clone)]
pub struct SaveArgs {
    /// Word list to load
    #[arg(value_name = "WORDLIST")]
    pub wordlist: PathBuf,

    /// Output file
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Dictionary backend (defaults to the configured one)
    #[arg(short, long)]
    pub backend: Option<Backend>,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
