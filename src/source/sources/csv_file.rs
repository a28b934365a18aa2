//! Delimited text file adapter.

use csv::ReaderBuilder;
use tracing::debug;

use crate::errors::RadarError;
use crate::sanitize::{keyed_row, RawRow};
use crate::source::{SheetPayload, SourceContext};
use crate::types::ColumnName;
use crate::utils::csv_display_title;

/// Fetch and parse a CSV file into keyed rows.
///
/// The display title is the decoded final path segment minus its `.csv`
/// suffix; CSV sources never have alternative tabs.
pub fn fetch(context: &SourceContext<'_>, location: &str) -> Result<SheetPayload, RadarError> {
    let text = context.files.fetch_text(location)?;
    let (column_names, raw_rows) = parse_csv_text(&text)?;
    let title = csv_display_title(location);
    debug!(%location, rows = raw_rows.len(), "parsed csv source");
    Ok(SheetPayload {
        resolved_sheet_name: title.clone(),
        alternative_sheet_names: Vec::new(),
        title,
        raw_rows,
        column_names,
    })
}

/// Parse delimited text into column headers and keyed rows.
pub fn parse_csv_text(text: &str) -> Result<(Vec<ColumnName>, Vec<RawRow>), RadarError> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.as_bytes());
    let column_names: Vec<ColumnName> = reader
        .headers()
        .map_err(invalid_csv)?
        .iter()
        .map(|name| name.trim().to_string())
        .collect();
    let mut raw_rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(invalid_csv)?;
        let values: Vec<String> = record.iter().map(|value| value.to_string()).collect();
        raw_rows.push(keyed_row(&column_names, &values));
    }
    Ok((column_names, raw_rows))
}

fn invalid_csv(err: csv::Error) -> RadarError {
    RadarError::malformed(format!("invalid delimited content: {err}"))
}
