//! # mtg-query
//!
//! A query client for the paginated, filterable collections of the
//! Magic: The Gathering API.
//!
//! ## Features
//!
//! - **Fluent Filters**: Chain `filter` and `order_by`, branch with `clone`
//! - **Full Enumeration**: Follows `Link: rel="next"` until the last page
//! - **Single Pages**: Default or custom page size, with the collection's
//!   total count from `Total-Count`
//! - **Random Samples**: Up to N randomly chosen entities in one request
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use mtg_query::{CardColumn, MtgClient, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = MtgClient::new()?;
//!
//!     // Every card with converted mana cost >= 16
//!     let cards = client.cards().filter(CardColumn::Cmc, "gte16").all().await?;
//!
//!     // Page 2 of white cards, five per page
//!     let page = client.cards().filter(CardColumn::Colors, "white").page_with_size(2, 5).await?;
//!     println!("{} white cards", page.total_count);
//!
//!     // Two random red rares
//!     let sample = client
//!         .cards()
//!         .filter(CardColumn::Rarity, "rare")
//!         .filter(CardColumn::Colors, "red")
//!         .random(2)
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  MtgClient::cards() / sets()  →  Query<R>                    │
//! │  filter() · order_by() · debug() · clone()                   │
//! │  all() · page() · page_with_size() · random()                │
//! └──────────────────────────────────────────────────────────────┘
//!                               │
//! ┌──────────────┬──────────────┴─────┬──────────────┬───────────┐
//! │   Filter     │    Pagination      │    HTTP      │  Decode   │
//! ├──────────────┼────────────────────┼──────────────┼───────────┤
//! │ Sorted pairs │ Link rel="next"    │ Transport    │ Envelope  │
//! │ Reserved keys│ Total-Count        │ Status check │ → Vec<T>  │
//! └──────────────┴────────────────────┴──────────────┴───────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)] // TODO: Document model fields before 1.0 release

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Client configuration
pub mod config;

/// Column names for filtering and sorting
pub mod columns;

/// Entity models and collections
pub mod models;

/// Filter set and reserved query keys
pub mod filter;

/// HTTP transport and status classification
pub mod http;

/// Response envelope decoding
pub mod decode;

/// Continuation links and total counts
pub mod pagination;

/// Query builder and pagination engine
pub mod query;

/// Client handle
pub mod client;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use client::MtgClient;
pub use columns::{CardColumn, SetColumn};
pub use config::ClientConfig;
pub use error::{Error, ErrorKind, Result};
pub use filter::FilterSet;
pub use models::{Card, Cards, Resource, Set, Sets};
pub use pagination::{CountSource, Page};
pub use query::{Mode, Query};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
