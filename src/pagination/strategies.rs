//! Pagination strategy implementations
//!
//! Each strategy handles one of the two upstream pagination patterns.

use super::types::{extract_token, Advance, PageTracker, Paginator};
use crate::types::OptionStringExt;
use serde_json::Value;
use std::collections::HashMap;

// ============================================================================
// Page Number Pagination
// ============================================================================

/// Page number pagination
///
/// Increments an integer page parameter on every request.
/// Common patterns:
/// - `?page=2`
/// - `?page=2&limit=100`
///
/// The source is exhausted when a page reports zero items.
#[derive(Debug, Clone)]
pub struct PageNumberPaginator {
    /// Query parameter name for page number
    pub page_param: String,
    /// First page number (usually 0 or 1)
    pub start_page: u32,
}

impl PageNumberPaginator {
    /// Create a new page number paginator
    pub fn new(page_param: impl Into<String>, start_page: u32) -> Self {
        Self {
            page_param: page_param.into(),
            start_page,
        }
    }
}

impl Default for PageNumberPaginator {
    fn default() -> Self {
        Self::new("page", 1)
    }
}

impl Paginator for PageNumberPaginator {
    fn initial_params(&self, state: &PageTracker) -> HashMap<String, String> {
        let mut params = HashMap::new();
        let page = if state.page == 0 {
            self.start_page
        } else {
            state.page
        };
        params.insert(self.page_param.clone(), page.to_string());
        params
    }

    fn advance(&self, _body: &Value, item_count: usize, state: &mut PageTracker) -> Advance {
        if item_count == 0 {
            state.mark_done();
            return Advance::Exhausted;
        }

        state.add_seen(item_count as u64);

        // state.page == 0 means the first page was just fetched
        let current = if state.page == 0 {
            self.start_page
        } else {
            state.page
        };
        state.page = current + 1;

        Advance::with_param(&self.page_param, state.page.to_string())
    }
}

// ============================================================================
// Cursor Pagination
// ============================================================================

/// Cursor-based pagination
///
/// Sends the last-seen opaque token on every request after the first.
/// Common patterns:
/// - `?cursor=abc123`
/// - `?starting_after=obj_123`
///
/// The source is exhausted when the response carries no next token. A
/// request is never issued with an empty cursor parameter: an empty or
/// missing token means the parameter is omitted entirely.
#[derive(Debug, Clone)]
pub struct CursorPaginator {
    /// Query parameter name for the cursor
    pub cursor_param: String,
    /// Dot-notation path to the next token in the response body
    pub next_token_path: String,
    /// Token for the first request, if resuming mid-collection
    pub start_token: Option<String>,
}

impl CursorPaginator {
    /// Create a new cursor paginator
    pub fn new(cursor_param: impl Into<String>, next_token_path: impl Into<String>) -> Self {
        Self {
            cursor_param: cursor_param.into(),
            next_token_path: next_token_path.into(),
            start_token: None,
        }
    }

    /// Set the token for the first request (empty tokens are ignored)
    #[must_use]
    pub fn with_start_token(mut self, token: impl Into<String>) -> Self {
        self.start_token = token.into().none_if_empty();
        self
    }
}

impl Default for CursorPaginator {
    fn default() -> Self {
        Self::new("cursor", "links.nextCursor")
    }
}

impl Paginator for CursorPaginator {
    fn initial_params(&self, state: &PageTracker) -> HashMap<String, String> {
        let mut params = HashMap::new();
        let cursor = state
            .cursor
            .clone()
            .or_else(|| self.start_token.clone())
            .none_if_empty();
        if let Some(cursor) = cursor {
            params.insert(self.cursor_param.clone(), cursor);
        }
        params
    }

    fn advance(&self, body: &Value, item_count: usize, state: &mut PageTracker) -> Advance {
        match extract_token(body, &self.next_token_path).none_if_empty() {
            Some(token) => {
                state.add_seen(item_count as u64);
                state.page += 1;
                state.set_cursor(token.clone());
                Advance::with_param(&self.cursor_param, token)
            }
            None => {
                state.mark_done();
                Advance::Exhausted
            }
        }
    }
}
