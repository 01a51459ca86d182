//! Sidecar file formats.
//!
//! Album and image descriptors come in two flavors, both reduced to a flat
//! `key → value` map of strings:
//!
//! ## Line-oriented (`.yaml` / `.yml`)
//!
//! A deliberately tiny subset of YAML: one `key: value` pair per line.
//!
//! ```text
//! # Summer trip
//! title: Lake "Shore"
//! date: 2024-07-14          # trailing comments are dropped
//! description: "Day #3, the best one"
//! ```
//!
//! - Blank lines and lines starting with `#` are skipped.
//! - Lines without a `:` are ignored.
//! - Key and value are split on the first `:` and trimmed.
//! - An unquoted value is cut at the first `#`.
//! - A value wrapped in matching `"` or `'` loses exactly one layer of quotes;
//!   a `#` inside the quotes is kept.
//! - Later duplicates win. Nesting, lists, and multi-line values are not
//!   supported.
//!
//! ## Structured (`.json`)
//!
//! A JSON object parsed strictly with `serde_json`. Anything else (malformed
//! JSON, a top-level array) is a [`SidecarError`], which the metadata loader
//! treats as "this file is not usable".

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SidecarError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("JSON sidecar is not an object")]
    NotAnObject,
}

/// Flat key/value view of a sidecar file.
pub type Fields = BTreeMap<String, String>;

/// Sidecar format, picked by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    KeyValue,
}

impl Format {
    pub fn parse(self, content: &str) -> Result<Fields, SidecarError> {
        match self {
            Format::Json => parse_json(content),
            Format::KeyValue => Ok(parse_key_values(content)),
        }
    }
}

const COMMENT: char = '#';

/// Read and parse a sidecar file.
pub fn load(path: &Path, format: Format) -> Result<Fields, SidecarError> {
    let content = fs::read_to_string(path)?;
    format.parse(&content)
}

/// Parse line-oriented `key: value` text. Never fails.
pub fn parse_key_values(content: &str) -> Fields {
    let mut fields = Fields::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with(COMMENT) {
            continue;
        }
        let Some((key, raw)) = line.split_once(':') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            continue;
        }
        fields.insert(key.to_string(), clean_value(raw));
    }
    fields
}

fn clean_value(raw: &str) -> String {
    let mut value = raw.trim();
    if !value.starts_with(['"', '\'']) {
        if let Some(pos) = value.find(COMMENT) {
            value = value[..pos].trim_end();
        }
    }
    unquote(value).to_string()
}

/// Strip one layer of matching single or double quotes.
fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

/// Parse a JSON object, coercing every value to a string.
///
/// Strings are taken verbatim, `null` is dropped, and everything else keeps
/// its compact JSON text (`2024`, `true`, `["a","b"]`).
pub fn parse_json(content: &str) -> Result<Fields, SidecarError> {
    let value: serde_json::Value = serde_json::from_str(content)?;
    let serde_json::Value::Object(map) = value else {
        return Err(SidecarError::NotAnObject);
    };
    Ok(map
        .into_iter()
        .filter_map(|(key, value)| {
            let text = match value {
                serde_json::Value::Null => return None,
                serde_json::Value::String(s) => s,
                other => other.to_string(),
            };
            Some((key, text))
        })
        .collect())
}
