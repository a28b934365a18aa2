//! The three source adapters behind [`SourceDescriptor::fetch`].
//!
//! [`SourceDescriptor::fetch`]: crate::source::SourceDescriptor::fetch

/// Delimited text file adapter.
pub mod csv_file;
/// Access-controlled spreadsheet adapter.
pub mod protected;
/// Public spreadsheet adapter.
pub mod public;

use crate::errors::RadarError;
use crate::transport::DocumentMeta;
use crate::types::SheetName;

/// Resolve the requested tab against the document's tab list, defaulting to
/// the first discovered tab.
pub(crate) fn resolve_sheet_name(
    meta: &DocumentMeta,
    requested: Option<&SheetName>,
) -> Result<SheetName, RadarError> {
    match requested {
        Some(name) => {
            if meta.sheet_names.iter().any(|tab| tab == name) {
                Ok(name.clone())
            } else {
                Err(RadarError::not_found(format!(
                    "no sheet tab named '{name}'"
                )))
            }
        }
        None => meta
            .sheet_names
            .first()
            .cloned()
            .ok_or_else(|| RadarError::not_found("document has no sheet tabs")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(tabs: &[&str]) -> DocumentMeta {
        DocumentMeta {
            title: "Radar".to_string(),
            sheet_names: tabs.iter().map(|tab| tab.to_string()).collect(),
        }
    }

    #[test]
    fn defaults_to_the_first_discovered_tab() {
        let resolved = resolve_sheet_name(&meta(&["Vol 1", "Vol 2"]), None).unwrap();
        assert_eq!(resolved, "Vol 1");
    }

    #[test]
    fn requested_tab_must_exist() {
        let requested = "Vol 3".to_string();
        let err = resolve_sheet_name(&meta(&["Vol 1", "Vol 2"]), Some(&requested)).unwrap_err();
        assert!(matches!(err, RadarError::SheetNotFound { .. }));
    }

    #[test]
    fn documents_without_tabs_are_not_found() {
        let err = resolve_sheet_name(&meta(&[]), None).unwrap_err();
        assert!(matches!(err, RadarError::SheetNotFound { .. }));
    }
}
