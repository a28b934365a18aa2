//! HTTP transports for spreadsheet documents and CSV downloads.
//!
//! Speaks a spreadsheet-provider API in three requests: a metadata endpoint
//! for the document title and tab list, a per-tab CSV export for public rows,
//! and a JSON values endpoint for protected rows. Status codes are mapped at
//! this boundary: 404 → `SheetNotFound`, 403 on a credentialed request →
//! `Unauthorized` with the denied account, anything else non-2xx →
//! `Transport`.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::debug;

use crate::errors::RadarError;
use crate::source::sources::csv_file::parse_csv_text;
use crate::transport::{
    Authorization, DocumentMeta, DocumentTransport, FileTransport, PositionalPage,
    ProtectedTransport, TabularPage,
};
use crate::types::{SheetId, SheetName};

/// Default API root for spreadsheet requests.
pub const DEFAULT_BASE_URL: &str = "https://sheets.googleapis.com/v4";

/// Blocking HTTP transport for public and protected spreadsheet documents.
pub struct HttpSheetTransport {
    client: Client,
    base_url: String,
}

impl HttpSheetTransport {
    /// Transport against the default API root.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Transport against a custom API root (tests, mirrors).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    fn meta_url(&self, sheet_id: &SheetId) -> String {
        format!(
            "{}/spreadsheets/{}?fields=properties.title,sheets.properties.title",
            self.base_url, sheet_id
        )
    }

    fn export_url(&self, sheet_id: &SheetId, sheet_name: &SheetName) -> String {
        format!(
            "{}/spreadsheets/{}/export?format=csv&sheet={}",
            self.base_url,
            sheet_id,
            utf8_percent_encode(sheet_name, NON_ALPHANUMERIC)
        )
    }

    fn values_url(&self, sheet_id: &SheetId, sheet_name: &SheetName) -> String {
        format!(
            "{}/spreadsheets/{}/values/{}",
            self.base_url,
            sheet_id,
            utf8_percent_encode(sheet_name, NON_ALPHANUMERIC)
        )
    }

    fn get(&self, url: &str, auth: Option<&Authorization>) -> Result<Response, RadarError> {
        debug!(%url, credentialed = auth.is_some(), "spreadsheet request");
        let mut request = self.client.get(url);
        if let Some(auth) = auth {
            request = request.bearer_auth(&auth.token);
        }
        request
            .send()
            .map_err(|err| RadarError::Transport(err.to_string()))
    }

    fn fetch_meta(
        &self,
        sheet_id: &SheetId,
        auth: Option<&Authorization>,
    ) -> Result<DocumentMeta, RadarError> {
        let response = self.get(&self.meta_url(sheet_id), auth)?;
        let body = check_status(response, sheet_id, auth)?
            .text()
            .map_err(|err| RadarError::Transport(err.to_string()))?;
        let document: DocumentResponse = serde_json::from_str(&body)
            .map_err(|err| RadarError::Transport(format!("invalid metadata payload: {err}")))?;
        Ok(DocumentMeta {
            title: document.properties.title,
            sheet_names: document
                .sheets
                .into_iter()
                .map(|sheet| sheet.properties.title)
                .collect(),
        })
    }
}

impl Default for HttpSheetTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentTransport for HttpSheetTransport {
    fn document_meta(&self, sheet_id: &SheetId) -> Result<DocumentMeta, RadarError> {
        self.fetch_meta(sheet_id, None)
    }

    fn keyed_rows(
        &self,
        sheet_id: &SheetId,
        sheet_name: &SheetName,
    ) -> Result<TabularPage, RadarError> {
        let response = self.get(&self.export_url(sheet_id, sheet_name), None)?;
        let body = check_status(response, sheet_id, None)?
            .text()
            .map_err(|err| RadarError::Transport(err.to_string()))?;
        let (column_names, rows) = parse_csv_text(&body)?;
        Ok(TabularPage { column_names, rows })
    }
}

impl ProtectedTransport for HttpSheetTransport {
    fn document_meta(
        &self,
        auth: &Authorization,
        sheet_id: &SheetId,
    ) -> Result<DocumentMeta, RadarError> {
        self.fetch_meta(sheet_id, Some(auth))
    }

    fn header_rows(
        &self,
        auth: &Authorization,
        sheet_id: &SheetId,
        sheet_name: &SheetName,
    ) -> Result<PositionalPage, RadarError> {
        let response = self.get(&self.values_url(sheet_id, sheet_name), Some(auth))?;
        let body = check_status(response, sheet_id, Some(auth))?
            .text()
            .map_err(|err| RadarError::Transport(err.to_string()))?;
        let payload: ValuesResponse = serde_json::from_str(&body)
            .map_err(|err| RadarError::Transport(format!("invalid values payload: {err}")))?;
        let mut rows = payload.values;
        let column_names = if rows.is_empty() {
            Vec::new()
        } else {
            rows.remove(0)
        };
        Ok(PositionalPage { column_names, rows })
    }
}

fn check_status(
    response: Response,
    sheet_id: &SheetId,
    auth: Option<&Authorization>,
) -> Result<Response, RadarError> {
    match response.status() {
        StatusCode::NOT_FOUND => Err(RadarError::not_found(format!(
            "no spreadsheet '{sheet_id}'"
        ))),
        StatusCode::FORBIDDEN => match auth {
            Some(auth) => Err(RadarError::Unauthorized {
                status: 403,
                account: auth.account.clone(),
            }),
            None => Err(RadarError::Transport(format!(
                "request for '{sheet_id}' was refused"
            ))),
        },
        status if !status.is_success() => Err(RadarError::Transport(format!(
            "unexpected status {status} for '{sheet_id}'"
        ))),
        _ => Ok(response),
    }
}

/// Fetches CSV text from http(s) URLs, falling back to the local filesystem
/// for plain paths.
#[derive(Default)]
pub struct HttpFileTransport {
    client: Client,
}

impl HttpFileTransport {
    /// Transport with a fresh client.
    pub fn new() -> Self {
        Self::default()
    }
}

impl FileTransport for HttpFileTransport {
    fn fetch_text(&self, location: &str) -> Result<String, RadarError> {
        if location.starts_with("http://") || location.starts_with("https://") {
            let response = self
                .client
                .get(location)
                .send()
                .map_err(|err| RadarError::Transport(err.to_string()))?;
            match response.status() {
                StatusCode::NOT_FOUND => {
                    Err(RadarError::not_found(format!("no file at '{location}'")))
                }
                status if !status.is_success() => Err(RadarError::Transport(format!(
                    "unexpected status {status} for '{location}'"
                ))),
                _ => response
                    .text()
                    .map_err(|err| RadarError::Transport(err.to_string())),
            }
        } else {
            Ok(std::fs::read_to_string(location)?)
        }
    }
}

#[derive(Deserialize)]
struct DocumentResponse {
    properties: TitleProperties,
    #[serde(default)]
    sheets: Vec<SheetResponse>,
}

#[derive(Deserialize)]
struct SheetResponse {
    properties: TitleProperties,
}

#[derive(Deserialize)]
struct TitleProperties {
    title: String,
}

#[derive(Deserialize)]
struct ValuesResponse {
    #[serde(default)]
    values: Vec<Vec<String>>,
}
