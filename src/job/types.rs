//! Job types
//!
//! Declarative fetch job definition types for YAML parsing.

use crate::types::BackoffType;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

// ============================================================================
// Job Definition
// ============================================================================

/// Top-level fetch job definition
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct JobDefinition {
    /// Job name
    pub name: String,
    /// Source endpoint configuration
    pub source: SourceDefinition,
    /// Pagination configuration
    pub pagination: PaginationDefinition,
    /// Path to the item list in each response body
    #[serde(default = "default_records_path")]
    pub records_path: String,
    /// Item predicate applied before items are kept
    #[serde(default)]
    pub filter: Option<FilterDefinition>,
    /// Pause between consecutive page requests, in milliseconds
    #[serde(default = "default_inter_page_delay_ms")]
    pub inter_page_delay_ms: u64,
    /// Maximum pages to fetch (0 = unlimited)
    #[serde(default)]
    pub max_pages: usize,
    /// Maximum items to keep (0 = unlimited)
    #[serde(default)]
    pub max_items: usize,
    /// Output file configuration
    #[serde(default)]
    pub output: OutputDefinition,
}

fn default_records_path() -> String {
    "releases".to_string()
}

fn default_inter_page_delay_ms() -> u64 {
    1000
}

// ============================================================================
// Source Definition
// ============================================================================

/// Source endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SourceDefinition {
    /// Endpoint URL
    pub endpoint: String,
    /// Static query parameters sent on every request
    #[serde(default)]
    pub params: HashMap<String, String>,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// Maximum retries per request (0 = retries disabled)
    #[serde(default)]
    pub max_retries: u32,
    /// Backoff strategy between retries
    #[serde(default)]
    pub backoff: BackoffType,
    /// Rate limit (requests per second)
    #[serde(default)]
    pub rate_limit_rps: Option<u32>,
    /// User agent
    #[serde(default)]
    pub user_agent: Option<String>,
}

fn default_timeout() -> u64 {
    30
}

// ============================================================================
// Pagination Definition
// ============================================================================

/// Pagination configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PaginationDefinition {
    /// Integer page parameter, terminated by the first empty page
    PageNumber {
        /// Query parameter name for the page number
        #[serde(default = "default_page_param")]
        page_param: String,
        /// First page number
        #[serde(default = "default_start_page")]
        start_page: u32,
    },
    /// Opaque token from each response body, terminated when absent
    Cursor {
        /// Query parameter name for the cursor
        #[serde(default = "default_cursor_param")]
        cursor_param: String,
        /// Path to the next token in the response body
        #[serde(default = "default_next_token_path")]
        next_token_path: String,
        /// Token for the first request, if resuming mid-collection
        #[serde(default)]
        start_token: Option<String>,
    },
}

fn default_page_param() -> String {
    "page".to_string()
}

fn default_start_page() -> u32 {
    1
}

fn default_cursor_param() -> String {
    "cursor".to_string()
}

fn default_next_token_path() -> String {
    "links.nextCursor".to_string()
}

// ============================================================================
// Filter Definition
// ============================================================================

/// Item predicate configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FilterDefinition {
    /// Keep every item
    AcceptAll,
    /// Keep items whose field equals a value
    FieldEquals {
        /// Path to the field
        path: String,
        /// Expected value
        value: serde_json::Value,
    },
    /// Keep items whose timestamp field lies in the future
    FieldAfterNow {
        /// Path to the timestamp field
        path: String,
    },
}

// ============================================================================
// Output Definition
// ============================================================================

/// Output file configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct OutputDefinition {
    /// Destination file path
    #[serde(default = "default_output_path")]
    pub path: PathBuf,
    /// Pretty-print the output array
    #[serde(default = "default_true")]
    pub pretty: bool,
}

impl Default for OutputDefinition {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            pretty: true,
        }
    }
}

fn default_output_path() -> PathBuf {
    PathBuf::from("releases.json")
}

fn default_true() -> bool {
    true
}
