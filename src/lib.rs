// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::match_wildcard_for_single_variants)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # noticepull
//!
//! A minimal, Rust-native tool for paginated API ingestion. Point it at
//! a JSON endpoint, tell it how the endpoint paginates, and collect the
//! merged item set as one file.
//!
//! ## Features
//!
//! - **Two Pagination Modes**: page-number and cursor feeds behind one driver
//! - **Strict Decoding**: a page without its item list is an error, never an empty page
//! - **Item Filtering**: built-in predicates with per-item error isolation
//! - **Polite Fetching**: per-request timeout, opt-in retries and rate limiting, inter-page pacing
//! - **Atomic Output**: one JSON array, replaced via temp-file rename
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use noticepull::fetch::PaginatedFetcher;
//! use noticepull::http::HttpClient;
//! use noticepull::pagination::CursorPaginator;
//! use noticepull::Result;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let fetcher = PaginatedFetcher::new(
//!         HttpClient::new(),
//!         Box::new(CursorPaginator::default()),
//!     );
//!
//!     let outcome = fetcher
//!         .fetch_all("https://api.example.org/v1/releases", &std::collections::HashMap::new())
//!         .await?;
//!
//!     println!("fetched {} items", outcome.items.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        Fetch Job (YAML)                         │
//! │  source → pagination → records_path → filter → output           │
//! └─────────────────────────────────────────────────────────────────┘
//!                                │
//! ┌───────────┬─────────────────┴─────┬───────────────┬────────────┐
//! │   HTTP    │       Paginate        │    Filter     │   Output   │
//! ├───────────┼───────────────────────┼───────────────┼────────────┤
//! │ GET       │ Page Number           │ AcceptAll     │ JSON array │
//! │ Retry     │ Cursor                │ FieldEquals   │ Atomic     │
//! │ Rate Limit│                       │ FieldAfterNow │ rename     │
//! └───────────┴───────────────────────┴───────────────┴────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)] // TODO: Add docs before 1.0 release

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// HTTP client with retry and rate limiting
pub mod http;

/// Pagination strategies
pub mod pagination;

/// Page body decoding
pub mod decode;

/// Item predicates
pub mod filter;

/// Sequential fetch driver
pub mod fetch;

/// Output file writing
pub mod output;

/// YAML loader for job definitions
pub mod job;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use job::{load_job, load_job_from_str, JobDefinition};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
