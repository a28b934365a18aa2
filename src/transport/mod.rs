//! Capability traits for reaching spreadsheet documents and files.
//!
//! Ownership model:
//! - `DocumentTransport` reads public documents without credentials.
//! - `AuthorizationProvider` runs the external sign-in handshake.
//! - `ProtectedTransport` reads access-controlled documents with a granted
//!   authorization.
//! - `FileTransport` fetches delimited text by location.
//!
//! The fetch and the handshake are the pipeline's only suspension points;
//! everything downstream runs synchronously against the returned pages.
//! In-memory implementations live here so tests and demos can exercise the
//! whole pipeline without a network.

use std::collections::HashMap;

use crate::errors::RadarError;
use crate::sanitize::RawRow;
use crate::types::{AccountId, CellValue, ColumnName, SheetId, SheetName};

/// Filesystem-backed file transport.
pub mod fs;
/// HTTP transports for spreadsheet documents and CSV downloads.
#[cfg(feature = "http")]
pub mod http;
#[cfg(feature = "http")]
pub use http::{HttpFileTransport, HttpSheetTransport};

/// Document title plus its ordered sheet tabs.
#[derive(Clone, Debug)]
pub struct DocumentMeta {
    /// Document title as reported by the origin.
    pub title: String,
    /// All sheet tab names, in document order.
    pub sheet_names: Vec<SheetName>,
}

/// Keyed rows for one sheet tab.
#[derive(Clone, Debug, Default)]
pub struct TabularPage {
    /// Column headers in sheet order.
    pub column_names: Vec<ColumnName>,
    /// Data rows keyed by column name.
    pub rows: Vec<RawRow>,
}

/// Header row plus positional value rows for one sheet tab.
#[derive(Clone, Debug, Default)]
pub struct PositionalPage {
    /// Header row, one name per column.
    pub column_names: Vec<ColumnName>,
    /// Data rows as ordered value sequences matching the header.
    pub rows: Vec<Vec<CellValue>>,
}

/// Granted result of the external authorization handshake.
#[derive(Clone, Debug)]
pub struct Authorization {
    /// Account the grant belongs to; surfaced when access is denied.
    pub account: AccountId,
    /// Opaque bearer token attached to protected requests.
    pub token: String,
}

/// Unauthenticated access to public spreadsheet documents.
pub trait DocumentTransport {
    /// Title and tab list; `SheetNotFound` when the document is missing.
    fn document_meta(&self, sheet_id: &SheetId) -> Result<DocumentMeta, RadarError>;

    /// Keyed rows for one tab; `SheetNotFound` when the tab is missing.
    fn keyed_rows(
        &self,
        sheet_id: &SheetId,
        sheet_name: &SheetName,
    ) -> Result<TabularPage, RadarError>;
}

/// External sign-in capability; popup and redirect mechanics live behind it.
pub trait AuthorizationProvider {
    /// Run the handshake, optionally forcing the account chooser.
    fn authorize(&self, force_account_chooser: bool) -> Result<Authorization, RadarError>;
}

/// Credentialed access to protected spreadsheet documents.
pub trait ProtectedTransport {
    /// Title and tab list; 403-equivalent responses become `Unauthorized`
    /// carrying the denied account.
    fn document_meta(
        &self,
        auth: &Authorization,
        sheet_id: &SheetId,
    ) -> Result<DocumentMeta, RadarError>;

    /// Header+values rows for one tab; 403 → `Unauthorized` with the account.
    fn header_rows(
        &self,
        auth: &Authorization,
        sheet_id: &SheetId,
        sheet_name: &SheetName,
    ) -> Result<PositionalPage, RadarError>;
}

/// Delimited-text fetch by location (local path or URL).
pub trait FileTransport {
    /// Full text at `location`.
    fn fetch_text(&self, location: &str) -> Result<String, RadarError>;
}

/// In-memory public document store for tests and demos.
#[derive(Default)]
pub struct InMemoryDocuments {
    documents: HashMap<SheetId, InMemoryDocument>,
}

/// One stored public document: title plus ordered tabs.
pub struct InMemoryDocument {
    /// Document title.
    pub title: String,
    /// Tabs in document order, each with its keyed page.
    pub tabs: Vec<(SheetName, TabularPage)>,
}

impl InMemoryDocuments {
    /// Empty store; every lookup fails with `SheetNotFound`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document under `sheet_id`.
    pub fn with_document(
        mut self,
        sheet_id: impl Into<SheetId>,
        title: impl Into<String>,
        tabs: Vec<(SheetName, TabularPage)>,
    ) -> Self {
        self.documents.insert(
            sheet_id.into(),
            InMemoryDocument {
                title: title.into(),
                tabs,
            },
        );
        self
    }

    fn document(&self, sheet_id: &SheetId) -> Result<&InMemoryDocument, RadarError> {
        self.documents
            .get(sheet_id)
            .ok_or_else(|| RadarError::not_found(format!("no spreadsheet '{sheet_id}'")))
    }
}

impl DocumentTransport for InMemoryDocuments {
    fn document_meta(&self, sheet_id: &SheetId) -> Result<DocumentMeta, RadarError> {
        let document = self.document(sheet_id)?;
        Ok(DocumentMeta {
            title: document.title.clone(),
            sheet_names: document.tabs.iter().map(|(name, _)| name.clone()).collect(),
        })
    }

    fn keyed_rows(
        &self,
        sheet_id: &SheetId,
        sheet_name: &SheetName,
    ) -> Result<TabularPage, RadarError> {
        let document = self.document(sheet_id)?;
        document
            .tabs
            .iter()
            .find(|(name, _)| name == sheet_name)
            .map(|(_, page)| page.clone())
            .ok_or_else(|| RadarError::not_found(format!("no sheet tab named '{sheet_name}'")))
    }
}

/// In-memory protected document store that can deny access.
#[derive(Default)]
pub struct InMemoryProtectedDocuments {
    documents: HashMap<SheetId, InMemoryProtectedDocument>,
    denied_status: Option<u16>,
}

/// One stored protected document: title plus ordered header+values tabs.
pub struct InMemoryProtectedDocument {
    /// Document title.
    pub title: String,
    /// Tabs in document order, each with its positional page.
    pub tabs: Vec<(SheetName, PositionalPage)>,
}

impl InMemoryProtectedDocuments {
    /// Empty store; every lookup fails with `SheetNotFound`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document under `sheet_id`.
    pub fn with_document(
        mut self,
        sheet_id: impl Into<SheetId>,
        title: impl Into<String>,
        tabs: Vec<(SheetName, PositionalPage)>,
    ) -> Self {
        self.documents.insert(
            sheet_id.into(),
            InMemoryProtectedDocument {
                title: title.into(),
                tabs,
            },
        );
        self
    }

    /// Deny every request with the given HTTP-style status.
    pub fn with_denied(mut self, status: u16) -> Self {
        self.denied_status = Some(status);
        self
    }

    fn check_denied(&self, auth: &Authorization) -> Result<(), RadarError> {
        match self.denied_status {
            Some(status) => Err(RadarError::Unauthorized {
                status,
                account: auth.account.clone(),
            }),
            None => Ok(()),
        }
    }

    fn document(&self, sheet_id: &SheetId) -> Result<&InMemoryProtectedDocument, RadarError> {
        self.documents
            .get(sheet_id)
            .ok_or_else(|| RadarError::not_found(format!("no spreadsheet '{sheet_id}'")))
    }
}

impl ProtectedTransport for InMemoryProtectedDocuments {
    fn document_meta(
        &self,
        auth: &Authorization,
        sheet_id: &SheetId,
    ) -> Result<DocumentMeta, RadarError> {
        self.check_denied(auth)?;
        let document = self.document(sheet_id)?;
        Ok(DocumentMeta {
            title: document.title.clone(),
            sheet_names: document.tabs.iter().map(|(name, _)| name.clone()).collect(),
        })
    }

    fn header_rows(
        &self,
        auth: &Authorization,
        sheet_id: &SheetId,
        sheet_name: &SheetName,
    ) -> Result<PositionalPage, RadarError> {
        self.check_denied(auth)?;
        let document = self.document(sheet_id)?;
        document
            .tabs
            .iter()
            .find(|(name, _)| name == sheet_name)
            .map(|(_, page)| page.clone())
            .ok_or_else(|| RadarError::not_found(format!("no sheet tab named '{sheet_name}'")))
    }
}

/// Authorization provider returning a pre-granted account and token.
#[derive(Clone, Debug)]
pub struct StaticAuthorization {
    account: AccountId,
    token: String,
}

impl StaticAuthorization {
    /// Provider that always grants `account` with `token`.
    pub fn new(account: impl Into<AccountId>, token: impl Into<String>) -> Self {
        Self {
            account: account.into(),
            token: token.into(),
        }
    }
}

impl AuthorizationProvider for StaticAuthorization {
    fn authorize(&self, _force_account_chooser: bool) -> Result<Authorization, RadarError> {
        Ok(Authorization {
            account: self.account.clone(),
            token: self.token.clone(),
        })
    }
}

/// In-memory file store mapping locations to delimited text.
#[derive(Default)]
pub struct InMemoryFiles {
    files: HashMap<String, String>,
}

impl InMemoryFiles {
    /// Empty store; every fetch fails with `SheetNotFound`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add text under `location`.
    pub fn with_file(mut self, location: impl Into<String>, text: impl Into<String>) -> Self {
        self.files.insert(location.into(), text.into());
        self
    }
}

impl FileTransport for InMemoryFiles {
    fn fetch_text(&self, location: &str) -> Result<String, RadarError> {
        self.files
            .get(location)
            .cloned()
            .ok_or_else(|| RadarError::not_found(format!("no file at '{location}'")))
    }
}
