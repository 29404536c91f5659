//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands};
use crate::decode::PageDecoder;
use crate::error::{Error, Result};
use crate::fetch::{FetchConfig, PaginatedFetcher};
use crate::filter::{AcceptAll, FieldAfterNow, FieldEquals, ItemFilter};
use crate::http::{HttpClient, HttpClientConfig, RateLimiterConfig, RequestConfig};
use crate::job::{
    load_job, FilterDefinition, JobDefinition, PaginationDefinition, SourceDefinition,
};
use crate::output::JsonWriter;
use crate::pagination::{CursorPaginator, PageNumberPaginator, PageTracker, Paginator};
use std::path::Path;
use std::time::Duration;
use tracing::info;

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
        match &self.cli.command {
            Commands::Fetch {
                output,
                max_pages,
                max_items,
            } => self.fetch(output.as_deref(), *max_pages, *max_items).await,
            Commands::Check => self.check().await,
            Commands::Validate => self.validate(),
        }
    }

    /// Load the job definition
    fn load_job(&self) -> Result<JobDefinition> {
        let path = self
            .cli
            .job
            .as_ref()
            .ok_or_else(|| Error::config("Job file not specified (use -j flag)"))?;
        load_job(path)
    }

    /// Run a fetch job to completion and write its output file
    ///
    /// The output file is only touched after the whole fetch succeeds.
    async fn fetch(
        &self,
        output: Option<&Path>,
        max_pages: Option<usize>,
        max_items: Option<usize>,
    ) -> Result<()> {
        let job = self.load_job()?;

        info!("Starting job '{}' against {}", job.name, job.source.endpoint);

        let config = FetchConfig::new()
            .with_inter_page_delay(Duration::from_millis(job.inter_page_delay_ms))
            .with_max_pages(max_pages.unwrap_or(job.max_pages))
            .with_max_items(max_items.unwrap_or(job.max_items));

        let fetcher = Self::build_fetcher(&job).with_config(config);
        let outcome = fetcher
            .fetch_all(&job.source.endpoint, &job.source.params)
            .await?;

        let path = output.unwrap_or(&job.output.path);
        let writer = JsonWriter::new(path).with_pretty(job.output.pretty);
        writer.write(&outcome.items).await?;

        info!(
            "Wrote {} items to '{}' ({} pages, {} skipped, {} ms)",
            outcome.items.len(),
            path.display(),
            outcome.stats.pages_fetched,
            outcome.stats.items_skipped,
            outcome.stats.duration_ms
        );

        Ok(())
    }

    /// Request the first page and report whether it decodes
    async fn check(&self) -> Result<()> {
        let job = self.load_job()?;

        info!("Checking source for job '{}'", job.name);

        let client = Self::build_http_client(&job.source);
        let paginator = Self::build_paginator(&job.pagination);
        let decoder = PageDecoder::with_path(&job.records_path);

        let mut req_config = RequestConfig::new();
        for (key, value) in &job.source.params {
            if !value.is_empty() {
                req_config = req_config.query(key, value);
            }
        }
        for (key, value) in paginator.initial_params(&PageTracker::new()) {
            req_config = req_config.query(key, value);
        }

        let response = client
            .get_with_config(&job.source.endpoint, req_config)
            .await?;
        let body_text = response
            .text()
            .await
            .map_err(|e| Error::decode(format!("Failed to read response body: {e}")))?;
        let records = decoder.decode(&body_text)?;

        info!(
            "Source reachable: first page decodes with {} items",
            records.len()
        );

        Ok(())
    }

    /// Validate the job definition
    fn validate(&self) -> Result<()> {
        let job = self.load_job()?;

        info!(
            "Job '{}' is valid: {} -> '{}'",
            job.name,
            job.source.endpoint,
            job.output.path.display()
        );

        Ok(())
    }

    /// Build the fetch driver for a job
    fn build_fetcher(job: &JobDefinition) -> PaginatedFetcher {
        let client = Self::build_http_client(&job.source);
        let paginator = Self::build_paginator(&job.pagination);

        PaginatedFetcher::new(client, paginator)
            .with_decoder(PageDecoder::with_path(&job.records_path))
            .with_filter(Self::build_filter(job.filter.as_ref()))
    }

    /// Build HTTP client from the source definition
    fn build_http_client(source: &SourceDefinition) -> HttpClient {
        let mut builder = HttpClientConfig::builder()
            .timeout(Duration::from_secs(source.timeout_secs))
            .max_retries(source.max_retries)
            .backoff(
                source.backoff,
                Duration::from_millis(100),
                Duration::from_secs(60),
            );

        if let Some(rps) = source.rate_limit_rps {
            builder = builder.rate_limit(RateLimiterConfig::per_second(rps));
        }

        if let Some(ua) = &source.user_agent {
            builder = builder.user_agent(ua);
        }

        HttpClient::with_config(builder.build())
    }

    /// Build paginator from definition
    fn build_paginator(def: &PaginationDefinition) -> Box<dyn Paginator> {
        match def {
            PaginationDefinition::PageNumber {
                page_param,
                start_page,
            } => Box::new(PageNumberPaginator::new(page_param, *start_page)),
            PaginationDefinition::Cursor {
                cursor_param,
                next_token_path,
                start_token,
            } => {
                let mut pag = CursorPaginator::new(cursor_param, next_token_path);
                if let Some(token) = start_token {
                    pag = pag.with_start_token(token);
                }
                Box::new(pag)
            }
        }
    }

    /// Build item filter from definition
    fn build_filter(def: Option<&FilterDefinition>) -> Box<dyn ItemFilter> {
        match def {
            None | Some(FilterDefinition::AcceptAll) => Box::new(AcceptAll),
            Some(FilterDefinition::FieldEquals { path, value }) => {
                Box::new(FieldEquals::new(path, value.clone()))
            }
            Some(FilterDefinition::FieldAfterNow { path }) => Box::new(FieldAfterNow::new(path)),
        }
    }
}
