#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Radar assembly from sanitized rows.
pub mod assemble;
/// Terminal failure states shown to the user.
pub mod classify;
/// Schema, sizing, and guidance constants.
pub mod constants;
/// Domain model consumed by the renderer.
pub mod data;
/// Build orchestration and renderer handoff.
pub mod pipeline;
/// Renderer and page collaborator contracts.
pub mod render;
/// Row normalization for both source shapes.
pub mod sanitize;
/// Source descriptors and fetch adapters.
pub mod source;
/// Transport and authorization capabilities.
pub mod transport;
/// Shared type aliases.
pub mod types;
/// Text helpers.
pub mod utils;
/// Schema validation for untrusted input.
pub mod validate;

mod errors;

pub use classify::FailureKind;
pub use data::{Entry, Quadrant, Radar, Ring, RingRef};
pub use errors::RadarError;
pub use pipeline::{build, rerun_with_account_chooser, run, BuildOutput};
pub use render::{size_hint, RadarPage, Renderer};
pub use sanitize::{sanitize_row, EntryRecord, RawRow};
pub use source::{SheetPayload, SourceContext, SourceDescriptor};
pub use transport::{
    Authorization, AuthorizationProvider, DocumentMeta, DocumentTransport, FileTransport,
    ProtectedTransport,
};
pub use types::{
    AccountId, CellValue, ColumnName, QuadrantName, RingName, SheetId, SheetName,
};
pub use validate::{validate_columns, validate_content};
