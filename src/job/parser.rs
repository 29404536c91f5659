//! YAML parser for job definitions
//!
//! Parses and validates fetch job files.

use crate::error::{Error, Result};
use crate::job::types::{FilterDefinition, JobDefinition, PaginationDefinition};
use std::fs;
use std::path::Path;

/// Load a job definition from a YAML file
pub fn load_job(path: impl AsRef<Path>) -> Result<JobDefinition> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .map_err(|e| Error::config(format!("Failed to read job file '{}': {e}", path.display())))?;

    load_job_from_str(&content)
}

/// Load a job definition from a YAML string
pub fn load_job_from_str(yaml: &str) -> Result<JobDefinition> {
    let def: JobDefinition = serde_yaml::from_str(yaml)
        .map_err(|e| Error::config(format!("Failed to parse job YAML: {e}")))?;

    validate_job(&def)?;
    Ok(def)
}

/// Validate a job definition
fn validate_job(def: &JobDefinition) -> Result<()> {
    if def.name.is_empty() {
        return Err(Error::config("Job name cannot be empty"));
    }

    if def.source.endpoint.is_empty() {
        return Err(Error::config("Job endpoint cannot be empty"));
    }

    url::Url::parse(&def.source.endpoint).map_err(|e| {
        Error::invalid_value("source.endpoint", format!("not a valid URL: {e}"))
    })?;

    if def.records_path.is_empty() {
        return Err(Error::config("records_path cannot be empty"));
    }

    match &def.pagination {
        PaginationDefinition::PageNumber { page_param, .. } => {
            if page_param.is_empty() {
                return Err(Error::config("Pagination page_param cannot be empty"));
            }
        }
        PaginationDefinition::Cursor {
            cursor_param,
            next_token_path,
            ..
        } => {
            if cursor_param.is_empty() {
                return Err(Error::config("Pagination cursor_param cannot be empty"));
            }
            if next_token_path.is_empty() {
                return Err(Error::config("Pagination next_token_path cannot be empty"));
            }
        }
    }

    match &def.filter {
        Some(FilterDefinition::FieldEquals { path, .. })
        | Some(FilterDefinition::FieldAfterNow { path }) => {
            if path.is_empty() {
                return Err(Error::config("Filter path cannot be empty"));
            }
        }
        Some(FilterDefinition::AcceptAll) | None => {}
    }

    if def.output.path.as_os_str().is_empty() {
        return Err(Error::config("Output path cannot be empty"));
    }

    Ok(())
}
