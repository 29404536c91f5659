//! JSON file writer
//!
//! Serializes the merged item set and replaces the destination file
//! atomically.

use crate::error::{Error, Result};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Writes the merged item set to a single JSON array file
///
/// The destination is replaced in one step: items are serialized to a
/// sibling temp file which is then renamed over the target. A fetch
/// that fails never disturbs an existing output file.
#[derive(Debug, Clone)]
pub struct JsonWriter {
    path: PathBuf,
    pretty: bool,
}

impl JsonWriter {
    /// Create a writer targeting `path`, pretty-printing by default
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            pretty: true,
        }
    }

    /// Enable or disable pretty-printing
    #[must_use]
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Get the destination path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serialize `items` as one JSON array and replace the destination
    pub async fn write(&self, items: &[Value]) -> Result<()> {
        let contents = if self.pretty {
            serde_json::to_string_pretty(items)
        } else {
            serde_json::to_string(items)
        }
        .map_err(|e| Error::output(format!("Failed to serialize items: {e}")))?;

        // Write to temp file first, then rename for atomicity
        let temp_path = self.path.with_extension("tmp");
        tokio::fs::write(&temp_path, &contents)
            .await
            .map_err(|e| Error::output(format!("Failed to write output file: {e}")))?;

        tokio::fs::rename(&temp_path, &self.path)
            .await
            .map_err(|e| Error::output(format!("Failed to rename output file: {e}")))?;

        Ok(())
    }
}
