//! Severity vocabulary used to configure rules and filter evaluation.
//!
//! Ordering is `Info < Warning < Error`. A filter level admits every item at or above it.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SeverityError {
    #[error("unknown severity: {0} (expected {names})", names = Severity::all_names().join("|"))]
    Unknown(String),
}

impl Severity {
    /// Canonical names, highest level first.
    pub fn all_names() -> &'static [&'static str] {
        &["error", "warning", "info"]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }

    /// Canonicalize a free-form severity string.
    pub fn parse(raw: &str) -> Result<Severity, SeverityError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "info" | "informational" => Ok(Severity::Info),
            "warning" | "warn" => Ok(Severity::Warning),
            "error" | "err" => Ok(Severity::Error),
            _ => Err(SeverityError::Unknown(raw.to_string())),
        }
    }

    /// Whether a filter set at `self` admits an item at `item`.
    pub fn admits(self, item: Severity) -> bool {
        item >= self
    }
}

/// Inclusion predicate over a textual filter level.
///
/// A blank filter admits everything.
pub fn include(filter: &str, item: Severity) -> Result<bool, SeverityError> {
    if filter.trim().is_empty() {
        return Ok(true);
    }
    Ok(Severity::parse(filter)?.admits(item))
}

impl FromStr for Severity {
    type Err = SeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Severity::parse(s)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
