//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Paginated API ingestion CLI
#[derive(Parser, Debug)]
#[command(name = "noticepull")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Job definition file (YAML)
    #[arg(short, long, global = true)]
    pub job: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch every page and write the merged output file
    Fetch {
        /// Output file path (overrides the job's output path)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Maximum pages to fetch (overrides the job's max_pages)
        #[arg(long)]
        max_pages: Option<usize>,

        /// Maximum items to keep (overrides the job's max_items)
        #[arg(long)]
        max_items: Option<usize>,
    },

    /// Request the first page and report whether it decodes
    Check,

    /// Validate the job definition
    Validate,
}
