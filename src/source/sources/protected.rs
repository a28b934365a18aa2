//! Access-controlled spreadsheet adapter.
//!
//! Rows arrive in header+values shape from the credentialed endpoint and are
//! zipped into keyed rows so the rest of the pipeline sees one shape.

use tracing::debug;

use crate::errors::RadarError;
use crate::sanitize::rows_from_positional;
use crate::source::sources::resolve_sheet_name;
use crate::source::{SheetPayload, SourceContext};
use crate::types::{SheetId, SheetName};

/// Fetch one protected sheet tab after the authorization handshake.
pub fn fetch(
    context: &SourceContext<'_>,
    sheet_id: &SheetId,
    sheet_name: Option<&SheetName>,
) -> Result<SheetPayload, RadarError> {
    let auth = context.auth.authorize(context.force_account_chooser)?;
    debug!(account = %auth.account, %sheet_id, "authorized for protected sheet");
    let meta = context.protected.document_meta(&auth, sheet_id)?;
    let resolved = resolve_sheet_name(&meta, sheet_name)?;
    let page = context.protected.header_rows(&auth, sheet_id, &resolved)?;
    Ok(SheetPayload {
        title: meta.title,
        raw_rows: rows_from_positional(&page.column_names, &page.rows),
        column_names: page.column_names,
        resolved_sheet_name: resolved,
        alternative_sheet_names: meta.sheet_names,
    })
}

#[cfg(test)]
mod tests {
    use crate::source::{SourceContext, SourceDescriptor};
    use crate::transport::fs::LocalFiles;
    use crate::transport::{
        InMemoryDocuments, InMemoryProtectedDocuments, PositionalPage, StaticAuthorization,
    };
    use crate::RadarError;

    fn sample_page() -> PositionalPage {
        PositionalPage {
            column_names: vec!["name".to_string(), "ring".to_string()],
            rows: vec![
                vec!["Tech A".to_string(), "Adopt".to_string()],
                vec!["Tech B".to_string(), "Trial".to_string()],
            ],
        }
    }

    #[test]
    fn header_and_values_are_zipped_into_keyed_rows() {
        let documents = InMemoryDocuments::new();
        let protected = InMemoryProtectedDocuments::new().with_document(
            "doc1",
            "Private Radar",
            vec![("Radar".to_string(), sample_page())],
        );
        let auth = StaticAuthorization::new("user@example.com", "token");
        let files = LocalFiles;
        let context = SourceContext::new(&documents, &protected, &auth, &files);

        let descriptor = SourceDescriptor::ProtectedSheet {
            sheet_id: "doc1".to_string(),
            sheet_name: None,
        };
        let payload = descriptor.fetch(&context).unwrap();
        assert_eq!(payload.title, "Private Radar");
        assert_eq!(payload.raw_rows.len(), 2);
        assert_eq!(
            payload.raw_rows[1].get("name").map(String::as_str),
            Some("Tech B")
        );
    }

    #[test]
    fn denial_surfaces_the_signed_in_account() {
        let documents = InMemoryDocuments::new();
        let protected = InMemoryProtectedDocuments::new().with_denied(403);
        let auth = StaticAuthorization::new("a@x.com", "token");
        let files = LocalFiles;
        let context = SourceContext::new(&documents, &protected, &auth, &files);

        let descriptor = SourceDescriptor::ProtectedSheet {
            sheet_id: "doc1".to_string(),
            sheet_name: None,
        };
        let err = descriptor.fetch(&context).unwrap_err();
        assert!(matches!(
            err,
            RadarError::Unauthorized { status: 403, account } if account == "a@x.com"
        ));
    }
}
