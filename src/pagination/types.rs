//! Pagination result types
//!
//! Defines the single-page result and the total count reconciliation.

use crate::error::{Error, Result};
use reqwest::header::HeaderMap;

/// Header carrying the size of the whole matching collection
pub const TOTAL_COUNT: &str = "total-count";

/// Where a page's total count came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountSource {
    /// The `Total-Count` header; authoritative for the whole collection
    Header,
    /// No header was sent, so the count is the length of this page only
    PageLength,
}

/// One page of entities plus the collection's total count
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// Entities in arrival order
    pub items: Vec<T>,
    /// Total number of matching entities across all pages
    pub total_count: usize,
    /// Origin of `total_count`
    pub count_source: CountSource,
}

impl<T> Page<T> {
    /// Check if `total_count` came from the server
    ///
    /// When it did not, it equals `items.len()` and the real total may be
    /// larger.
    pub fn is_count_exact(&self) -> bool {
        self.count_source == CountSource::Header
    }

    /// Number of entities on this page
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Drop the count and keep the entities
    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

/// Decide the total count for a page of `page_len` entities
///
/// A `Total-Count` header wins even if it disagrees with the page length.
/// Without one the page length is reported instead.
pub fn reconcile_total_count(headers: &HeaderMap, page_len: usize) -> Result<(usize, CountSource)> {
    let Some(value) = headers.get(TOTAL_COUNT) else {
        return Ok((page_len, CountSource::PageLength));
    };

    let raw = value
        .to_str()
        .map_err(|_| Error::invalid_header_integer("Total-Count", String::from_utf8_lossy(value.as_bytes())))?;

    // A collection size cannot be negative, so "-3" is as invalid as "abc"
    let total = raw
        .trim()
        .parse::<usize>()
        .map_err(|_| Error::invalid_header_integer("Total-Count", raw))?;

    Ok((total, CountSource::Header))
}
