//! Turning document text into the domain model.

use anyhow::Context;
use camino::Utf8Path;
use speclint_domain::model::Document;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Pick a format from the file extension, if it names one.
    pub fn from_path(path: &Utf8Path) -> Option<Self> {
        match path.extension()?.to_ascii_lowercase().as_str() {
            "json" => Some(DocumentFormat::Json),
            "yaml" | "yml" => Some(DocumentFormat::Yaml),
            _ => None,
        }
    }

    /// JSON documents start with `{`; everything else is treated as YAML.
    pub fn sniff(text: &str) -> Self {
        if text.trim_start().starts_with('{') {
            DocumentFormat::Json
        } else {
            DocumentFormat::Yaml
        }
    }
}

/// Parse an OpenAPI document. Empty input and documents without an `openapi` version are errors.
pub fn parse_document(text: &str, format: Option<DocumentFormat>) -> anyhow::Result<Document> {
    if text.trim().is_empty() {
        anyhow::bail!("document is empty");
    }

    let format = format.unwrap_or_else(|| DocumentFormat::sniff(text));
    let doc: Document = match format {
        DocumentFormat::Json => serde_json::from_str(text).context("parse JSON document")?,
        DocumentFormat::Yaml => serde_yaml::from_str(text).context("parse YAML document")?,
    };

    if doc.openapi.trim().is_empty() {
        anyhow::bail!("document has no openapi version");
    }
    Ok(doc)
}
