//! Built-in item predicates
//!
//! Predicates run against each decoded item before it is appended to the
//! result set. A predicate error never aborts a fetch; the driver logs
//! the error and skips the item.

use crate::error::{Error, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde_json::Value;

/// Decides whether a decoded item is kept.
///
/// Implementations must be cheap and side-effect free; they are called
/// once per item on the hot path.
pub trait ItemFilter: Send + Sync {
    /// Returns `Ok(true)` to keep the item, `Ok(false)` to drop it.
    ///
    /// An `Err` means the item could not be evaluated at all (malformed
    /// shape, unparseable field). Callers treat that as a per-item skip.
    fn matches(&self, item: &Value) -> Result<bool>;
}

/// Predicate that keeps every item.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl ItemFilter for AcceptAll {
    fn matches(&self, _item: &Value) -> Result<bool> {
        Ok(true)
    }
}

/// Keeps items whose field at `path` equals an expected value.
///
/// A missing field is an ordinary non-match, not an error.
#[derive(Debug, Clone)]
pub struct FieldEquals {
    path: String,
    expected: Value,
}

impl FieldEquals {
    /// Create a predicate comparing the field at `path` against `expected`
    pub fn new(path: impl Into<String>, expected: impl Into<Value>) -> Self {
        Self {
            path: path.into(),
            expected: expected.into(),
        }
    }
}

impl ItemFilter for FieldEquals {
    fn matches(&self, item: &Value) -> Result<bool> {
        match lookup_field(item, &self.path)? {
            Some(value) => Ok(*value == self.expected),
            None => Ok(false),
        }
    }
}

/// Keeps items whose timestamp field at `path` lies in the future.
///
/// An absent or null field means the item carries no deadline and is
/// kept. Accepts RFC 3339 timestamps, naive `YYYY-MM-DDTHH:MM:SS`
/// timestamps (read as UTC), and bare `YYYY-MM-DD` dates (read as
/// midnight UTC).
#[derive(Debug, Clone)]
pub struct FieldAfterNow {
    path: String,
}

impl FieldAfterNow {
    /// Create a predicate on the timestamp field at `path`
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl ItemFilter for FieldAfterNow {
    fn matches(&self, item: &Value) -> Result<bool> {
        let raw = match lookup_field(item, &self.path)? {
            Some(Value::String(s)) => s,
            // No deadline means the item is still open
            None | Some(Value::Null) => return Ok(true),
            Some(other) => {
                return Err(Error::filter(format!(
                    "Field '{}' is {}, expected a timestamp string",
                    self.path,
                    value_kind(other)
                )));
            }
        };

        let timestamp = parse_timestamp(raw)?;
        Ok(timestamp > Utc::now())
    }
}

/// Walk a dot-separated path through nested objects.
///
/// Returns `Ok(None)` when a key is absent, and an error when the walk
/// runs into a non-object value before the path is exhausted.
fn lookup_field<'a>(item: &'a Value, path: &str) -> Result<Option<&'a Value>> {
    let path = path.strip_prefix("$.").unwrap_or(path);

    let mut current = item;
    for part in path.split('.') {
        match current {
            Value::Object(map) => match map.get(part) {
                Some(next) => current = next,
                None => return Ok(None),
            },
            other => {
                return Err(Error::filter(format!(
                    "Cannot look up '{part}' in {}",
                    value_kind(other)
                )));
            }
        }
    }

    Ok(Some(current))
}

/// Parse the timestamp formats seen in release feeds
fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(dt.and_utc());
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN).and_utc());
    }

    Err(Error::filter(format!("Unparseable timestamp: '{raw}'")))
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
