//! Pagination types and traits
//!
//! Defines the core pagination abstractions shared by both strategies.

use serde_json::Value;
use std::collections::HashMap;

/// Outcome of classifying one decoded page
#[derive(Debug, Clone)]
pub enum Advance {
    /// The page carries data; append it and request the next page with
    /// these parameters
    Next {
        /// Query parameters to add/replace for the next request
        query_params: HashMap<String, String>,
    },
    /// The source is exhausted; this page is not appended
    Exhausted,
}

impl Advance {
    /// Create a continuation with query parameters
    pub fn with_params(params: HashMap<String, String>) -> Self {
        Self::Next {
            query_params: params,
        }
    }

    /// Create a continuation with a single parameter
    pub fn with_param(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut params = HashMap::new();
        params.insert(key.into(), value.into());
        Self::Next {
            query_params: params,
        }
    }

    /// Check if the source is exhausted
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted)
    }

    /// Check if this is a continuation
    pub fn is_next(&self) -> bool {
        matches!(self, Self::Next { .. })
    }
}

/// Tracks pagination state during one run
#[derive(Debug, Clone, Default)]
pub struct PageTracker {
    /// Current page number (page-number mode; 0 means not started)
    pub page: u32,
    /// Current cursor value
    pub cursor: Option<String>,
    /// Total items reported across pages, before filtering
    pub items_seen: u64,
    /// Is pagination complete?
    pub done: bool,
}

impl PageTracker {
    /// Create a new tracker
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark pagination as complete
    pub fn mark_done(&mut self) {
        self.done = true;
    }

    /// Set the cursor
    pub fn set_cursor(&mut self, cursor: String) {
        self.cursor = Some(cursor);
    }

    /// Add to the seen-item total
    pub fn add_seen(&mut self, count: u64) {
        self.items_seen += count;
    }

    /// A human-readable position label for logging (`start` until the
    /// first advance records one)
    pub fn position(&self) -> String {
        match (&self.cursor, self.page) {
            (Some(cursor), _) => format!("cursor={cursor}"),
            (None, 0) => "start".to_string(),
            (None, page) => format!("page={page}"),
        }
    }
}

/// Core trait for pagination strategies
pub trait Paginator: Send + Sync {
    /// Query parameters for the first request
    fn initial_params(&self, state: &PageTracker) -> HashMap<String, String>;

    /// Classify a decoded page: does it carry data, and what parameters
    /// select the page after it
    fn advance(&self, body: &Value, item_count: usize, state: &mut PageTracker) -> Advance;
}

/// Extract a string token from a response body at a dot-notation path
///
/// A leading `$.` prefix is accepted and stripped. Numbers and booleans are
/// converted to strings; objects, arrays, and null yield None.
pub fn extract_token(value: &Value, path: &str) -> Option<String> {
    let path = path.strip_prefix("$.").unwrap_or(path);
    let parts: Vec<&str> = path.split('.').collect();

    let mut current = value;
    for part in parts {
        match current {
            Value::Object(map) => {
                current = map.get(part)?;
            }
            _ => return None,
        }
    }

    match current {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
