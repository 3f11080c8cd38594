//! Rendering of query results as compact JSON or text tables.

use crate::config::OutputFormat;
use crate::error::ApiError;
use crate::types::Record;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;

/// Render a list of records.
pub fn format_records(records: &[&Record], format: OutputFormat) -> Result<String, ApiError> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(records)?),
        OutputFormat::Text => Ok(records_table(records)),
    }
}

/// Render a single lookup; an unknown id renders as `null` (json) or `(none)` (text).
pub fn format_item(record: Option<&Record>, format: OutputFormat) -> Result<String, ApiError> {
    match (format, record) {
        (OutputFormat::Json, record) => Ok(serde_json::to_string(&record)?),
        (OutputFormat::Text, Some(record)) => Ok(records_table(&[record])),
        (OutputFormat::Text, None) => Ok("(none)".to_string()),
    }
}

fn records_table(records: &[&Record]) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["id", "parent", "type"]);
    for record in records {
        table.add_row(vec![
            record.id.to_string(),
            record.parent.to_string(),
            kind_cell(record),
        ]);
    }
    table.to_string()
}

fn kind_cell(record: &Record) -> String {
    match &record.kind {
        None => String::new(),
        Some(None) => "null".to_string(),
        Some(Some(kind)) => kind.clone(),
    }
}
