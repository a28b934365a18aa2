//! Source descriptors and fetch adapters feeding the pipeline.
//!
//! Ownership model:
//! - `SourceDescriptor` names where the data lives and is the single
//!   dispatch point for fetching.
//! - `SourceContext` bundles the injected transport and authorization
//!   capabilities so adapters stay testable without a network.
//! - Every adapter produces a `SheetPayload`; nothing downstream knows which
//!   variant produced it.

use crate::constants::csv_source;
use crate::errors::RadarError;
use crate::sanitize::RawRow;
use crate::transport::{
    AuthorizationProvider, DocumentTransport, FileTransport, ProtectedTransport,
};
use crate::types::{ColumnName, SheetId, SheetName};

/// Source implementation modules.
pub mod sources;

/// Identifies where radar data comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SourceDescriptor {
    /// Published spreadsheet readable without credentials.
    PublicSheet {
        /// Document identifier.
        sheet_id: SheetId,
        /// Tab to read; defaults to the first discovered tab.
        sheet_name: Option<SheetName>,
    },
    /// Access-controlled spreadsheet behind the authorization handshake.
    ProtectedSheet {
        /// Document identifier.
        sheet_id: SheetId,
        /// Tab to read; defaults to the first discovered tab.
        sheet_name: Option<SheetName>,
    },
    /// Delimited text file at a local path or URL.
    CsvFile {
        /// File location.
        location: String,
    },
}

impl SourceDescriptor {
    /// Build a descriptor from already-parsed request parameters.
    ///
    /// A reference ending in `.csv` is a CSV file; anything else is a public
    /// sheet reference.
    pub fn from_query(sheet_id: impl Into<String>, sheet_name: Option<SheetName>) -> Self {
        let reference = sheet_id.into();
        if reference.ends_with(csv_source::CSV_SUFFIX) {
            Self::CsvFile {
                location: reference,
            }
        } else {
            Self::PublicSheet {
                sheet_id: reference,
                sheet_name,
            }
        }
    }

    /// Fetch raw rows, headers, and sheet metadata from this source.
    pub fn fetch(&self, context: &SourceContext<'_>) -> Result<SheetPayload, RadarError> {
        match self {
            Self::PublicSheet {
                sheet_id,
                sheet_name,
            } => sources::public::fetch(context, sheet_id, sheet_name.as_ref()),
            Self::ProtectedSheet {
                sheet_id,
                sheet_name,
            } => sources::protected::fetch(context, sheet_id, sheet_name.as_ref()),
            Self::CsvFile { location } => sources::csv_file::fetch(context, location),
        }
    }
}

/// Injected capabilities the adapters fetch through.
pub struct SourceContext<'a> {
    /// Public document access.
    pub documents: &'a dyn DocumentTransport,
    /// Protected document access.
    pub protected: &'a dyn ProtectedTransport,
    /// External sign-in handshake.
    pub auth: &'a dyn AuthorizationProvider,
    /// Delimited-text fetch.
    pub files: &'a dyn FileTransport,
    /// Force the account chooser on the next authorization; set by the
    /// user-initiated re-authorization path.
    pub force_account_chooser: bool,
}

impl<'a> SourceContext<'a> {
    /// Context with the account chooser not forced.
    pub fn new(
        documents: &'a dyn DocumentTransport,
        protected: &'a dyn ProtectedTransport,
        auth: &'a dyn AuthorizationProvider,
        files: &'a dyn FileTransport,
    ) -> Self {
        Self {
            documents,
            protected,
            auth,
            files,
            force_account_chooser: false,
        }
    }

    /// Same capabilities with the account chooser forced.
    pub fn with_forced_account_chooser(mut self) -> Self {
        self.force_account_chooser = true;
        self
    }
}

/// Common fetch result every adapter produces.
#[derive(Clone, Debug)]
pub struct SheetPayload {
    /// Resolved display title for the page.
    pub title: String,
    /// Data rows keyed by column name, in source order.
    pub raw_rows: Vec<RawRow>,
    /// Column headers as reported by the source.
    pub column_names: Vec<ColumnName>,
    /// Tab the rows came from (the display title for CSV sources).
    pub resolved_sheet_name: SheetName,
    /// Other tabs in the same document; always empty for CSV sources.
    pub alternative_sheet_names: Vec<SheetName>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_references_split_on_the_csv_suffix() {
        let csv = SourceDescriptor::from_query("https://host/2024-radar.csv", None);
        assert!(matches!(csv, SourceDescriptor::CsvFile { .. }));

        let sheet = SourceDescriptor::from_query("1YXkrgV7Y", Some("Vol 2".to_string()));
        assert_eq!(
            sheet,
            SourceDescriptor::PublicSheet {
                sheet_id: "1YXkrgV7Y".to_string(),
                sheet_name: Some("Vol 2".to_string()),
            }
        );
    }
}
