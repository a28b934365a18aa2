//! Row normalization shared by keyed and header+values source shapes.
//!
//! Sanitization assumes content validation already ran: it never fails, and
//! it preserves row order, which later fixes entry order within quadrants.
//! Sources that deliver header+values rows are zipped into the keyed shape
//! here so both paths normalize identically.

use indexmap::IndexMap;

use crate::constants::schema;
use crate::types::{CellValue, ColumnName};

/// Ordered column→value mapping for one data row.
pub type RawRow = IndexMap<ColumnName, CellValue>;

/// Entry-construction record produced from exactly one raw row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntryRecord {
    /// Trimmed entry name.
    pub name: String,
    /// Trimmed ring label, resolved to an owned ring during assembly.
    pub ring: String,
    /// Trimmed quadrant label before capitalization.
    pub quadrant: String,
    /// Whether the novelty flag matched the accepted token.
    pub is_new: bool,
    /// Trimmed topic; empty when the column is absent.
    pub topic: String,
    /// Trimmed description; empty when the column is absent.
    pub description: String,
}

/// Normalize one keyed row into an entry-construction record.
pub fn sanitize_row(row: &RawRow) -> EntryRecord {
    EntryRecord {
        name: trimmed(row, schema::NAME_COLUMN),
        ring: trimmed(row, schema::RING_COLUMN),
        quadrant: trimmed(row, schema::QUADRANT_COLUMN),
        is_new: trimmed(row, schema::IS_NEW_COLUMN).eq_ignore_ascii_case(schema::IS_NEW_TOKEN),
        topic: trimmed(row, schema::TOPIC_COLUMN),
        description: trimmed(row, schema::DESCRIPTION_COLUMN),
    }
}

/// Reconstruct a keyed row from an ordered header and a positional value row.
pub fn keyed_row(header: &[ColumnName], values: &[CellValue]) -> RawRow {
    header.iter().cloned().zip(values.iter().cloned()).collect()
}

/// Convert header+values rows into keyed rows, preserving order.
pub fn rows_from_positional(header: &[ColumnName], rows: &[Vec<CellValue>]) -> Vec<RawRow> {
    rows.iter().map(|values| keyed_row(header, values)).collect()
}

fn trimmed(row: &RawRow, column: &str) -> String {
    row.get(column)
        .map(|value| value.trim().to_string())
        .unwrap_or_default()
}
