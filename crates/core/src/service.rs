//! Pitch website generation.
//!
//! Glues the datastore lookup to the document renderer: validate the identifier, read the pitch
//! and its idea, derive the effective idea, render.

use crate::error::{PitchError, PitchResult};
use crate::model::PitchRecord;
use crate::render::{render_document, RenderOptions};
use crate::store::PitchStore;
use pitch_types::PitchId;
use std::sync::Arc;

/// Renders a record the same way the HTTP endpoint does.
///
/// The effective idea (joined or synthesised) decides the document language.
pub fn render_record(record: &PitchRecord, options: RenderOptions) -> String {
    let idea = record.effective_idea();
    render_document(Some(&idea), &record.pitch.content(), options)
}

/// Pitch lookup and rendering, independent of any transport.
#[derive(Clone)]
pub struct PitchService {
    store: Arc<dyn PitchStore>,
    render_options: RenderOptions,
}

impl PitchService {
    pub fn new(store: Arc<dyn PitchStore>, render_options: RenderOptions) -> Self {
        Self {
            store,
            render_options,
        }
    }

    pub fn render_options(&self) -> RenderOptions {
        self.render_options
    }

    /// Reads a pitch and its related idea.
    ///
    /// # Errors
    ///
    /// - `PitchError::NotFound` if no pitch has this identifier.
    /// - `PitchError::Store` if the lookup itself fails.
    pub async fn fetch_record(&self, id: &PitchId) -> PitchResult<PitchRecord> {
        let record = self
            .store
            .find_pitch(id)
            .await?
            .ok_or_else(|| PitchError::NotFound(id.to_string()))?;

        if tracing::enabled!(tracing::Level::DEBUG) {
            match serde_json::to_string_pretty(&record) {
                Ok(json) => tracing::debug!("Pitch data: {}", json),
                Err(e) => tracing::debug!("Pitch data could not be serialised: {}", e),
            }
        }

        Ok(record)
    }

    /// Produces the landing page for the pitch named by `pitch_id`.
    ///
    /// # Errors
    ///
    /// - `PitchError::MissingPitchId` if the identifier is absent or the empty string.
    /// - Any error from [`PitchService::fetch_record`].
    pub async fn generate_website(&self, pitch_id: Option<&str>) -> PitchResult<String> {
        let id = pitch_id
            .and_then(|raw| PitchId::new(raw).ok())
            .ok_or(PitchError::MissingPitchId)?;

        let record = self.fetch_record(&id).await?;
        let idea = record.effective_idea();
        tracing::debug!(
            idea_name = %idea.idea_name,
            industry = %idea.industry,
            tone = idea.tone.as_str(),
            language = %idea.language,
            "Effective idea for pitch {}",
            id
        );

        Ok(render_document(
            Some(&idea),
            &record.pitch.content(),
            self.render_options,
        ))
    }
}
