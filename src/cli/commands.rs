//! CLI commands and argument parsing

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Query the Magic: The Gathering collection API
#[derive(Parser, Debug)]
#[command(name = "mtg-query")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Client configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the API base URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Log each request URL and the decoded entities
    #[arg(long, global = true)]
    pub debug: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Query cards
    Cards(QueryArgs),

    /// Query sets
    Sets(QueryArgs),
}

/// Filters and retrieval mode shared by every collection
#[derive(Args, Debug)]
pub struct QueryArgs {
    /// Filter as KEY=VALUE (repeatable), e.g. --where colors=red
    #[arg(long = "where", value_name = "KEY=VALUE", value_parser = parse_key_val)]
    pub filters: Vec<(String, String)>,

    /// Column to sort by
    #[arg(long)]
    pub order_by: Option<String>,

    #[command(subcommand)]
    pub mode: RetrievalMode,
}

/// How many entities to retrieve
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetrievalMode {
    /// Every matching entity across all pages
    All,

    /// A single page
    Page {
        /// Page number (1-based)
        page: u32,

        /// Page size (defaults to the configured page size)
        #[arg(long)]
        size: Option<u32>,
    },

    /// A random sample
    Random {
        /// Number of entities to sample
        count: u32,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one entity per line)
    Json,
    /// Pretty-printed JSON
    Pretty,
}

/// Parse a `KEY=VALUE` pair; the value may itself contain `=`
fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{s}'"))?;
    if key.is_empty() {
        return Err(format!("empty key in '{s}'"));
    }
    Ok((key.to_string(), value.to_string()))
}
