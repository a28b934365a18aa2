//! Public spreadsheet adapter: keyed rows, no credentials.

use tracing::debug;

use crate::errors::RadarError;
use crate::source::sources::resolve_sheet_name;
use crate::source::{SheetPayload, SourceContext};
use crate::types::{SheetId, SheetName};

/// Fetch one public sheet tab as keyed rows plus document metadata.
///
/// The tab defaults to the first discovered one; the alternatives list
/// carries every tab in the document.
pub fn fetch(
    context: &SourceContext<'_>,
    sheet_id: &SheetId,
    sheet_name: Option<&SheetName>,
) -> Result<SheetPayload, RadarError> {
    let meta = context.documents.document_meta(sheet_id)?;
    let resolved = resolve_sheet_name(&meta, sheet_name)?;
    debug!(%sheet_id, sheet = %resolved, "fetching public sheet");
    let page = context.documents.keyed_rows(sheet_id, &resolved)?;
    Ok(SheetPayload {
        title: meta.title,
        raw_rows: page.rows,
        column_names: page.column_names,
        resolved_sheet_name: resolved,
        alternative_sheet_names: meta.sheet_names,
    })
}
