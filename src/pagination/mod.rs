//! Pagination module
//!
//! Supports: Page Number, Cursor
//!
//! # Overview
//!
//! The pagination module provides a unified interface over the two upstream
//! pagination patterns. Each strategy derives the next page parameters from
//! a decoded response and reports when the source is exhausted.

mod strategies;
mod types;

pub use strategies::{CursorPaginator, PageNumberPaginator};
pub use types::{extract_token, Advance, PageTracker, Paginator};
