//! Output module
//!
//! Writes the merged item set to disk.
//!
//! # Overview
//!
//! Results are written wholesale once a fetch completes: one JSON array
//! per run, replaced atomically so readers never observe a partial file.

mod writer;

pub use writer::JsonWriter;
