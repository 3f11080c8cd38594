//! Datasets
//!
//! The built-in sample dataset and loading of record lists from JSON or YAML
//! files.

use crate::error::ApiError;
use crate::types::Record;
use std::path::Path;
use tracing::debug;

/// The eight-record sample tree, freshly allocated on every call.
pub fn sample_records() -> Vec<Record> {
    vec![
        Record::new(1, "root"),
        Record::new(2, 1).with_kind(Some("test")),
        Record::new(3, 1).with_kind(Some("test")),
        Record::new(4, 2).with_kind(Some("test")),
        Record::new(5, 2).with_kind(Some("test")),
        Record::new(6, 2).with_kind(Some("test")),
        Record::new(7, 4).with_kind(None),
        Record::new(8, 4).with_kind(None),
    ]
}

/// Load a record list from `path`; the format follows the file extension.
pub fn load_records(path: &Path) -> Result<Vec<Record>, ApiError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    let content = std::fs::read_to_string(path).map_err(|e| {
        ApiError::DatasetError(format!("Failed to read {}: {}", path.display(), e))
    })?;

    let records: Vec<Record> = match extension.as_deref() {
        Some("json") => serde_json::from_str(&content).map_err(|e| {
            ApiError::DatasetError(format!("Failed to parse {}: {}", path.display(), e))
        })?,
        Some("yaml") | Some("yml") => serde_yaml::from_str(&content).map_err(|e| {
            ApiError::DatasetError(format!("Failed to parse {}: {}", path.display(), e))
        })?,
        _ => {
            return Err(ApiError::DatasetError(format!(
                "Unsupported dataset format: {} (expected .json, .yaml or .yml)",
                path.display()
            )))
        }
    };

    debug!(path = %path.display(), record_count = records.len(), "Loaded dataset");
    Ok(records)
}
