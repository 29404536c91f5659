//! Fetch driver module
//!
//! Sequential page loop and item collection.
//!
//! # Overview
//!
//! The fetch module provides:
//! - `PaginatedFetcher` - Drives the page loop against a single endpoint
//! - `FetchConfig` - Pacing and limits for a run
//! - `FetchOutcome` - Kept items plus run statistics

mod types;

pub use types::{FetchConfig, FetchOutcome, FetchStats};

use crate::decode::PageDecoder;
use crate::error::Result;
use crate::filter::{AcceptAll, ItemFilter};
use crate::http::{HttpClient, RequestConfig};
use crate::pagination::{Advance, PageTracker, Paginator};
use std::collections::HashMap;
use std::time::Instant;
use tracing::{info, warn};

/// Sequential fetch driver for a paginated endpoint
///
/// Issues one request at a time, decodes each page, filters its items,
/// and follows the paginator until the endpoint reports exhaustion. The
/// terminal page marks the end of the feed and contributes no items.
pub struct PaginatedFetcher {
    /// HTTP client
    client: HttpClient,
    /// Page body decoder
    decoder: PageDecoder,
    /// Pagination strategy
    paginator: Box<dyn Paginator>,
    /// Item predicate
    filter: Box<dyn ItemFilter>,
    /// Fetch configuration
    config: FetchConfig,
}

impl PaginatedFetcher {
    /// Create a new fetcher with the default decoder and no filtering
    pub fn new(client: HttpClient, paginator: Box<dyn Paginator>) -> Self {
        Self {
            client,
            decoder: PageDecoder::new(),
            paginator,
            filter: Box::new(AcceptAll),
            config: FetchConfig::default(),
        }
    }

    /// Set the page decoder
    #[must_use]
    pub fn with_decoder(mut self, decoder: PageDecoder) -> Self {
        self.decoder = decoder;
        self
    }

    /// Set the item filter
    #[must_use]
    pub fn with_filter(mut self, filter: Box<dyn ItemFilter>) -> Self {
        self.filter = filter;
        self
    }

    /// Set fetch configuration
    #[must_use]
    pub fn with_config(mut self, config: FetchConfig) -> Self {
        self.config = config;
        self
    }

    /// Get the fetch configuration
    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// Fetch every page of `url` and return the kept items in order.
    ///
    /// `query_params` are sent on every request; pagination parameters
    /// are layered on top per page. Any transport or decode error aborts
    /// the run and discards items collected so far.
    pub async fn fetch_all(
        &self,
        url: &str,
        query_params: &HashMap<String, String>,
    ) -> Result<FetchOutcome> {
        let start = Instant::now();
        let mut items = Vec::new();
        let mut stats = FetchStats::new();

        let mut tracker = PageTracker::new();
        let mut page_params = self.paginator.initial_params(&tracker);

        loop {
            let mut req_config = RequestConfig::new();
            for (key, value) in query_params {
                if !value.is_empty() {
                    req_config = req_config.query(key, value);
                }
            }
            for (key, value) in &page_params {
                req_config = req_config.query(key, value);
            }

            let response = self.client.get_with_config(url, req_config).await?;
            let body_text = response.text().await.map_err(|e| {
                crate::error::Error::decode(format!("Failed to read response body: {e}"))
            })?;

            let body = self.decoder.decode_raw(&body_text)?;
            let records = self.decoder.extract(&body)?;
            let record_count = records.len();

            // The tracker still holds the position that selected this page
            stats.add_page();
            info!(
                "Page {} ({}): fetched {record_count} items",
                stats.pages_fetched,
                tracker.position()
            );

            match self.paginator.advance(&body, record_count, &mut tracker) {
                Advance::Exhausted => break,
                Advance::Next {
                    query_params: next_params,
                } => {
                    stats.add_seen(record_count);
                    for item in records {
                        match self.filter.matches(&item) {
                            Ok(true) => {
                                items.push(item);
                                stats.add_kept(1);
                            }
                            Ok(false) => stats.add_skipped(1),
                            Err(e) => {
                                warn!("Skipping item that could not be filtered: {e}");
                                stats.add_skipped(1);
                            }
                        }
                    }

                    if self.config.max_pages > 0 && stats.pages_fetched >= self.config.max_pages {
                        break;
                    }

                    if self.config.max_items > 0 && items.len() >= self.config.max_items {
                        // Correct the stats to reflect the truncated count
                        let dropped = items.len() - self.config.max_items;
                        items.truncate(self.config.max_items);
                        stats.items_kept -= dropped;
                        break;
                    }

                    page_params = next_params;

                    if !self.config.inter_page_delay.is_zero() {
                        tokio::time::sleep(self.config.inter_page_delay).await;
                    }
                }
            }
        }

        #[allow(clippy::cast_possible_truncation)]
        stats.set_duration(start.elapsed().as_millis() as u64);

        info!(
            "Fetch complete: kept {} of {} items in {} pages",
            stats.items_kept, stats.items_seen, stats.pages_fetched
        );

        Ok(FetchOutcome { items, stats })
    }
}
