//! Pagination module
//!
//! Supports: Link header continuation, Total-Count reconciliation
//!
//! # Overview
//!
//! The collection API pages its results. Every response may carry a `Link`
//! header naming the next page and a `Total-Count` header with the size of
//! the whole matching collection. This module reads both; the query engine
//! decides what to do with them.

mod link_header;
mod types;

pub use link_header::{next_link, parse_link_header};
pub use types::{reconcile_total_count, CountSource, Page, TOTAL_COUNT};
