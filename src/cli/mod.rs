//! CLI module
//!
//! Command-line interface for running fetch jobs.
//!
//! # Commands
//!
//! - `fetch` - Run a job to completion and write the output file
//! - `check` - Request the first page and report whether it decodes
//! - `validate` - Validate the job definition

mod commands;
mod runner;

pub use commands::{Cli, Commands};
pub use runner::Runner;
