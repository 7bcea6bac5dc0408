//! CLI module
//!
//! Command-line interface for querying the collection API.
//!
//! # Commands
//!
//! - `cards` - Query the card collection
//! - `sets` - Query the set collection
//!
//! Each takes `--where KEY=VALUE` filters, an optional `--order-by`, and a
//! retrieval mode: `all`, `page N [--size S]` or `random N`.

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat, QueryArgs, RetrievalMode};
pub use runner::Runner;
