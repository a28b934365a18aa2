//! Build orchestration: fetch, validate, sanitize, assemble, hand off.
//!
//! Stages run synchronously between the two suspension points (the source
//! fetch and the authorization handshake). A failing stage short-circuits to
//! the classifier, so the renderer only ever observes a fully-built radar or
//! no radar at all. A new build supersedes whatever the previous one
//! displayed; nothing is merged across runs.

use tracing::debug;

use crate::assemble::assemble;
use crate::classify::FailureKind;
use crate::data::Radar;
use crate::errors::RadarError;
use crate::render::{size_hint, RadarPage, Renderer};
use crate::sanitize::{sanitize_row, EntryRecord};
use crate::source::{SourceContext, SourceDescriptor};
use crate::validate::{validate_columns, validate_content};

/// A successful build: the page title plus the finished aggregate.
#[derive(Clone, Debug)]
pub struct BuildOutput {
    /// Display title resolved by the source adapter.
    pub title: String,
    /// The radar handed to the renderer.
    pub radar: Radar,
}

/// Run the full ingestion pipeline for one source.
///
/// Validation completes (or fails) before any row is sanitized; sanitization
/// preserves row order end to end.
pub fn build(
    descriptor: &SourceDescriptor,
    context: &SourceContext<'_>,
) -> Result<BuildOutput, RadarError> {
    let payload = descriptor.fetch(context)?;
    validate_columns(&payload.column_names)?;
    validate_content(&payload.raw_rows)?;
    let records: Vec<EntryRecord> = payload.raw_rows.iter().map(sanitize_row).collect();
    debug!(rows = records.len(), sheet = %payload.resolved_sheet_name, "assembling radar");
    let radar = assemble(
        &records,
        payload.resolved_sheet_name,
        payload.alternative_sheet_names,
    )?;
    Ok(BuildOutput {
        title: payload.title,
        radar,
    })
}

/// Build and hand the result to the renderer, or classify the failure.
///
/// On success the page title is replaced and the renderer is called exactly
/// once with the viewport-derived size hint. On failure the renderer is never
/// touched and the caller receives the terminal state to present.
pub fn run(
    descriptor: &SourceDescriptor,
    context: &SourceContext<'_>,
    page: &mut dyn RadarPage,
    renderer: &mut dyn Renderer,
) -> Result<(), FailureKind> {
    match build(descriptor, context) {
        Ok(output) => {
            page.set_title(&output.title);
            renderer.render(size_hint(page.viewport_height()), &output.radar);
            Ok(())
        }
        Err(error) => Err(FailureKind::classify(&error)),
    }
}

/// User-initiated re-authorization: rebuild with the account chooser forced.
///
/// The fresh result supersedes whatever the previous attempt displayed.
pub fn rerun_with_account_chooser(
    descriptor: &SourceDescriptor,
    context: SourceContext<'_>,
    page: &mut dyn RadarPage,
    renderer: &mut dyn Renderer,
) -> Result<(), FailureKind> {
    run(
        descriptor,
        &context.with_forced_account_chooser(),
        page,
        renderer,
    )
}
