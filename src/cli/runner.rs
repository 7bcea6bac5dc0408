//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat, QueryArgs, RetrievalMode};
use crate::client::MtgClient;
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::models::Resource;
use crate::query::Query;
use serde::Serialize;
use std::io::Write;
use tracing::debug;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let client = MtgClient::with_config(self.load_config()?)?;
        debug!("Using API at {}", client.config().base_url);

        match &self.cli.command {
            Commands::Cards(args) => {
                let query = self.build_query(client.cards(), args);
                self.run_query(query, args.mode).await
            }
            Commands::Sets(args) => {
                let query = self.build_query(client.sets(), args);
                self.run_query(query, args.mode).await
            }
        }
    }

    /// Resolve configuration: file (or defaults), then environment, then flags
    pub fn load_config(&self) -> Result<ClientConfig> {
        let config = match &self.cli.config {
            Some(path) => ClientConfig::from_file(path)
                .map_err(|e| Error::config(format!("{}: {e}", path.display())))?,
            None => ClientConfig::default(),
        };
        let mut config = config.with_env_overrides()?;

        if let Some(base_url) = &self.cli.base_url {
            config.base_url.clone_from(base_url);
            config.validate()?;
        }
        Ok(config)
    }

    /// Apply the `--where` and `--order-by` arguments
    pub fn build_query<R: Resource>(&self, query: Query<R>, args: &QueryArgs) -> Query<R> {
        let query = args
            .filters
            .iter()
            .fold(query, |query, (key, value)| query.filter(key, value.clone()));

        let query = match &args.order_by {
            Some(column) => query.order_by(column),
            None => query,
        };
        query.debug(self.cli.debug)
    }

    async fn run_query<R: Resource>(&self, query: Query<R>, mode: RetrievalMode) -> Result<()> {
        match mode {
            RetrievalMode::All => {
                let entities = query.all().await?;
                self.print(&entities)?;
                eprintln!("{} {}", entities.len(), R::PATH);
            }
            RetrievalMode::Page { page, size } => {
                let result = match size {
                    Some(size) => query.page_with_size(page, size).await?,
                    None => query.page(page).await?,
                };
                self.print(&result.items)?;
                let marker = if result.is_count_exact() {
                    ""
                } else {
                    " (approximate)"
                };
                eprintln!(
                    "page {page}: {} of {}{marker} {}",
                    result.len(),
                    result.total_count,
                    R::PATH
                );
            }
            RetrievalMode::Random { count } => {
                let entities = query.random(count).await?;
                self.print(&entities)?;
            }
        }
        Ok(())
    }

    fn print<T: Serialize>(&self, entities: &[T]) -> Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        for entity in entities {
            let line = render(entity, self.cli.format)?;
            writeln!(out, "{line}")?;
        }
        Ok(())
    }
}

/// Render one entity in the requested format
fn render<T: Serialize>(entity: &T, format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string(entity),
        OutputFormat::Pretty => serde_json::to_string_pretty(entity),
    };
    rendered.map_err(|e| Error::decode(format!("Failed to serialize output: {e}")))
}
