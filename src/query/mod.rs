//! Query builder and pagination engine
//!
//! # Overview
//!
//! A `Query` accumulates filters through chained calls and is then run in
//! one of four retrieval modes:
//!
//! - `all` - follow `Link: rel="next"` until the server stops sending one
//! - `page` - one page at the configured default page size
//! - `page_with_size` - one page at a caller supplied size
//! - `random` - a random sample of up to `count` entities
//!
//! Builder methods consume and return the query, so branching one base
//! query into several variants is done with `clone`:
//!
//! ```rust,ignore
//! let rares = client.cards().filter(CardColumn::Rarity, "rare");
//! let red = rares.clone().filter(CardColumn::Colors, "red").all().await?;
//! let blue = rares.filter(CardColumn::Colors, "blue").all().await?;
//! ```
//!
//! Fetches are strictly sequential and every operation is all-or-nothing:
//! an error on any page discards what was already collected.

use crate::client::MtgClient;
use crate::decode::EnvelopeDecoder;
use crate::error::Result;
use crate::filter::{FilterSet, ORDER_BY, PAGE, PAGE_SIZE, RANDOM};
use crate::http::check_status;
use crate::models::Resource;
use crate::pagination::{next_link, reconcile_total_count, Page};
use reqwest::header::HeaderMap;
use std::marker::PhantomData;
use tracing::{debug, info};
use url::Url;

/// Retrieval mode of a query execution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Every page, following continuation links
    All,
    /// One page at the default page size
    Page(u32),
    /// One page at the given size
    PageSized { page: u32, size: u32 },
    /// A random sample of up to `count` entities
    Random(u32),
}

impl Mode {
    /// Reserved pairs this mode writes over the caller's filters
    fn reserved_params(self, default_page_size: u32) -> Vec<(&'static str, String)> {
        match self {
            Mode::All => Vec::new(),
            Mode::Page(page) => vec![
                (PAGE, page.to_string()),
                (PAGE_SIZE, default_page_size.to_string()),
            ],
            Mode::PageSized { page, size } => {
                vec![(PAGE, page.to_string()), (PAGE_SIZE, size.to_string())]
            }
            Mode::Random(count) => vec![(RANDOM, "true".to_string()), (PAGE_SIZE, count.to_string())],
        }
    }
}

/// A filter specification over one collection
pub struct Query<R: Resource> {
    client: MtgClient,
    filters: FilterSet,
    debug: bool,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource> Clone for Query<R> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            filters: self.filters.clone(),
            debug: self.debug,
            _resource: PhantomData,
        }
    }
}

impl<R: Resource> std::fmt::Debug for Query<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Query")
            .field("resource", &R::PATH)
            .field("filters", &self.filters)
            .field("debug", &self.debug)
            .finish_non_exhaustive()
    }
}

impl<R: Resource> Query<R> {
    pub(crate) fn new(client: MtgClient) -> Self {
        Self {
            client,
            filters: FilterSet::new(),
            debug: false,
            _resource: PhantomData,
        }
    }

    /// Filter `column` by `value`, replacing any previous value for it
    ///
    /// Values use the API's own syntax, e.g. `"red|green"` for either color,
    /// `"red,green"` for both, or `"gte16"` for numeric comparison.
    #[must_use]
    pub fn filter(mut self, column: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.filters.set(column.as_ref(), value);
        self
    }

    /// Sort results by `column`, replacing any previous sort column
    #[must_use]
    pub fn order_by(mut self, column: impl AsRef<str>) -> Self {
        self.filters.set(ORDER_BY, column.as_ref());
        self
    }

    /// Log each request URL and the decoded entities at INFO level on the
    /// `mtg_query::trace` target
    #[must_use]
    pub fn debug(mut self, enabled: bool) -> Self {
        self.debug = enabled;
        self
    }

    /// The accumulated filters
    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    pub fn is_debug(&self) -> bool {
        self.debug
    }

    /// URL of the first request issued for `mode`
    pub fn url_for(&self, mode: Mode) -> Result<Url> {
        let reserved = mode.reserved_params(self.client.config().default_page_size);
        let filters = self.filters.with_overrides(reserved);

        let mut url = self.client.config().endpoint(R::PATH)?;
        let query = filters.encode();
        if !query.is_empty() {
            url.set_query(Some(&query));
        }
        Ok(url)
    }

    /// Fetch every matching entity across all pages
    pub async fn all(&self) -> Result<Vec<R::Entity>> {
        let mut entities = Vec::new();
        let mut next = Some(self.url_for(Mode::All)?);
        let mut pages = 0usize;

        while let Some(url) = next.take() {
            let (batch, headers) = self.fetch(&url).await?;
            pages += 1;
            next = next_link(&headers, &url)?;
            entities.extend(batch);
        }

        debug!(
            "Fetched {} {} across {} page(s)",
            entities.len(),
            R::PATH,
            pages
        );
        Ok(entities)
    }

    /// Fetch page `page` at the configured default page size
    pub async fn page(&self, page: u32) -> Result<Page<R::Entity>> {
        self.fetch_page(Mode::Page(page)).await
    }

    /// Fetch page `page` holding up to `size` entities
    pub async fn page_with_size(&self, page: u32, size: u32) -> Result<Page<R::Entity>> {
        self.fetch_page(Mode::PageSized { page, size }).await
    }

    /// Fetch up to `count` randomly sampled entities
    pub async fn random(&self, count: u32) -> Result<Vec<R::Entity>> {
        let url = self.url_for(Mode::Random(count))?;
        let (entities, _) = self.fetch(&url).await?;
        Ok(entities)
    }

    async fn fetch_page(&self, mode: Mode) -> Result<Page<R::Entity>> {
        let url = self.url_for(mode)?;
        let (items, headers) = self.fetch(&url).await?;
        let (total_count, count_source) = reconcile_total_count(&headers, items.len())?;

        Ok(Page {
            items,
            total_count,
            count_source,
        })
    }

    /// One GET, status check and decode
    async fn fetch(&self, url: &Url) -> Result<(Vec<R::Entity>, HeaderMap)> {
        if self.debug {
            info!(target: "mtg_query::trace", "Request: {}", url);
        }

        let response = self.client.transport().get(url).await?;
        check_status(&response)?;

        let entities: Vec<R::Entity> = EnvelopeDecoder::new(R::ROOT_KEY).decode(&response.body)?;

        if self.debug {
            info!(target: "mtg_query::trace", "Decoded {}: {:?}", R::PATH, entities);
        }

        Ok((entities, response.headers))
    }
}
