//! Job definition module
//!
//! Parse fetch job definitions from YAML files.
//!
//! # Overview
//!
//! The job module provides:
//! - `JobDefinition` - Declarative fetch job specification
//! - `PaginationDefinition` / `FilterDefinition` - Strategy selection
//! - YAML parsing with validation

mod parser;
mod types;

pub use parser::{load_job, load_job_from_str};
pub use types::{
    FilterDefinition, JobDefinition, OutputDefinition, PaginationDefinition, SourceDefinition,
};
