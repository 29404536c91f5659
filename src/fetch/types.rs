//! Fetch driver types
//!
//! Configuration, statistics, and the result type for a fetch run.

use serde_json::Value;
use std::time::Duration;

/// Configuration for a fetch run
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Pause between consecutive page requests
    pub inter_page_delay: Duration,
    /// Maximum pages to fetch (0 = unlimited)
    pub max_pages: usize,
    /// Maximum items to keep (0 = unlimited)
    pub max_items: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            inter_page_delay: Duration::from_millis(1000),
            max_pages: 0,
            max_items: 0,
        }
    }
}

impl FetchConfig {
    /// Create a new fetch config
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pause between consecutive page requests
    #[must_use]
    pub fn with_inter_page_delay(mut self, delay: Duration) -> Self {
        self.inter_page_delay = delay;
        self
    }

    /// Set max pages
    #[must_use]
    pub fn with_max_pages(mut self, max: usize) -> Self {
        self.max_pages = max;
        self
    }

    /// Set max items
    #[must_use]
    pub fn with_max_items(mut self, max: usize) -> Self {
        self.max_items = max;
        self
    }
}

/// Statistics from a fetch run
#[derive(Debug, Clone, Default)]
pub struct FetchStats {
    /// Total pages retrieved, including the terminal page
    pub pages_fetched: usize,
    /// Items decoded from appended pages
    pub items_seen: usize,
    /// Items that passed the filter
    pub items_kept: usize,
    /// Items dropped by the filter or skipped after a filter error
    pub items_skipped: usize,
    /// Duration in milliseconds
    pub duration_ms: u64,
}

impl FetchStats {
    /// Create new stats
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a page
    pub fn add_page(&mut self) {
        self.pages_fetched += 1;
    }

    /// Add decoded items
    pub fn add_seen(&mut self, count: usize) {
        self.items_seen += count;
    }

    /// Add kept items
    pub fn add_kept(&mut self, count: usize) {
        self.items_kept += count;
    }

    /// Add skipped items
    pub fn add_skipped(&mut self, count: usize) {
        self.items_skipped += count;
    }

    /// Set duration
    pub fn set_duration(&mut self, ms: u64) {
        self.duration_ms = ms;
    }
}

/// Result of a completed fetch run
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    /// All kept items, in page order then item order within each page
    pub items: Vec<Value>,
    /// Run statistics
    pub stats: FetchStats,
}
