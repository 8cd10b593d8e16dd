//! Manifest loading — turns a file into raw animal records.
//!
//! Supported layouts, chosen by extension:
//! - `.json`: array of `{"diet": ..., "size": ...}` objects
//! - `.toml`: `[[animal]]` tables with `diet` and `size`
//! - anything else: one animal per line, `<diet> <size>` or `<diet>,<size>`
//!   in either order; `#` starts a comment
//!
//! No validation happens here. Lines that cannot be split into two tokens
//! still become records so the strict/lenient policy is applied in one place.

use anyhow::{Context, Result};
use packing::{AnimalRecord, Diet};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct TomlManifest {
    #[serde(default)]
    animal: Vec<AnimalRecord>,
}

/// Load records from `path`.
pub fn load_records(path: &Path) -> Result<Vec<AnimalRecord>> {
    let content =
        std::fs::read_to_string(path).context(format!("Failed to read {}", path.display()))?;

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    let records = match extension.as_deref() {
        Some("json") => parse_json(&content)
            .with_context(|| format!("Failed to parse JSON manifest {}", path.display()))?,
        Some("toml") => parse_toml(&content)
            .with_context(|| format!("Failed to parse TOML manifest {}", path.display()))?,
        _ => parse_lines(&content),
    };

    tracing::debug!(path = %path.display(), records = records.len(), "Loaded manifest");
    Ok(records)
}

pub fn parse_json(content: &str) -> Result<Vec<AnimalRecord>> {
    Ok(serde_json::from_str(content)?)
}

pub fn parse_toml(content: &str) -> Result<Vec<AnimalRecord>> {
    let manifest: TomlManifest = toml::from_str(content)?;
    Ok(manifest.animal)
}

/// Plain-text manifest, one animal per line.
pub fn parse_lines(content: &str) -> Vec<AnimalRecord> {
    content
        .lines()
        .map(|line| line.split('#').next().unwrap_or_default().trim())
        .filter(|line| !line.is_empty())
        .map(parse_line)
        .collect()
}

fn parse_line(line: &str) -> AnimalRecord {
    let tokens: Vec<&str> = line
        .split(|c: char| c == ',' || c == ';' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .collect();

    match tokens.as_slice() {
        [first, second] if first.parse::<Diet>().is_err() && second.parse::<Diet>().is_ok() => {
            AnimalRecord::new(*second, *first)
        }
        [first, second] => AnimalRecord::new(*first, *second),
        _ => AnimalRecord::new(line, ""),
    }
}
