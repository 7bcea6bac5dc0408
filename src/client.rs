//! Client handle
//!
//! `MtgClient` bundles the read-only configuration with the transport used
//! for every fetch. It is cheap to clone and can be shared across tasks;
//! queries built from it carry their own copy of the handle.

use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::{HttpTransport, Transport};
use crate::models::{Cards, Resource, Sets};
use crate::query::Query;
use std::sync::Arc;

/// Entry point for building queries
#[derive(Clone)]
pub struct MtgClient {
    config: Arc<ClientConfig>,
    transport: Arc<dyn Transport>,
}

impl MtgClient {
    /// Create a client for the public API with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a client backed by [`HttpTransport`]
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let transport = HttpTransport::new(&config)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Create a client with a custom transport
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            config: Arc::new(config),
            transport,
        }
    }

    /// Start an empty card query
    pub fn cards(&self) -> Query<Cards> {
        self.query()
    }

    /// Start an empty set query
    pub fn sets(&self) -> Query<Sets> {
        self.query()
    }

    /// Start an empty query against any collection
    pub fn query<R: Resource>(&self) -> Query<R> {
        Query::new(self.clone())
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub(crate) fn transport(&self) -> &dyn Transport {
        self.transport.as_ref()
    }
}

impl std::fmt::Debug for MtgClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MtgClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
