//! Full extraction pipeline: runs every category extractor in a fixed
//! order and assembles the output record.

use chrono::{SecondsFormat, Utc};

use crate::document::DesignDocument;
use crate::error::TokenResult;
use crate::extract::{
    extract_colors, extract_components, extract_effects, extract_frames, extract_grids,
    extract_typography, extract_variables,
};
use crate::token::{StyleTokens, TokenDocument, TokenStats};

/// File name reported for unnamed documents.
const UNTITLED: &str = "untitled";

/// One stage of the extraction pipeline, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Color scan.
    Colors,
    /// Typography scan.
    Typography,
    /// Effect styles.
    Effects,
    /// Grid styles.
    Grids,
    /// Variables.
    Variables,
    /// Components and component sets.
    Components,
    /// Top-level frames.
    Frames,
}

impl Phase {
    /// Human-readable progress label for this phase.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Colors => "Extracting colors...",
            Self::Typography => "Extracting typography...",
            Self::Effects => "Extracting effects...",
            Self::Grids => "Extracting grid styles...",
            Self::Variables => "Extracting variables...",
            Self::Components => "Extracting components...",
            Self::Frames => "Extracting frames...",
        }
    }
}

/// Run the whole pipeline over a document, reporting each phase as it
/// starts.
///
/// Category order in the output is fixed regardless of document content,
/// and the stats block always mirrors the array lengths.
///
/// # Errors
///
/// Returns an error if variable resolution fails; all other extractors are
/// infallible.
pub fn extract_document(
    document: &DesignDocument,
    mut on_phase: impl FnMut(Phase),
) -> TokenResult<TokenDocument> {
    on_phase(Phase::Colors);
    tracing::debug!("extracting colors");
    let colors = extract_colors(document);

    on_phase(Phase::Typography);
    tracing::debug!("extracting typography");
    let typography = extract_typography(document);

    on_phase(Phase::Effects);
    tracing::debug!("extracting effects");
    let effects = extract_effects(document);

    on_phase(Phase::Grids);
    tracing::debug!("extracting grid styles");
    let grids = extract_grids(document);

    on_phase(Phase::Variables);
    tracing::debug!("extracting variables");
    let variables = extract_variables(document)?;

    on_phase(Phase::Components);
    tracing::debug!("extracting components");
    let components = extract_components(document);

    on_phase(Phase::Frames);
    tracing::debug!("extracting frames");
    let frames = extract_frames(document);

    let file_name = if document.name.is_empty() {
        UNTITLED.to_string()
    } else {
        document.name.clone()
    };

    let stats = TokenStats {
        colors: colors.len(),
        text_styles: typography.len(),
        components: components.len(),
        variables: variables.len(),
        effects: effects.len(),
        frames: frames.len(),
    };

    Ok(TokenDocument {
        file_name,
        extracted_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        stats,
        colors,
        typography,
        effects,
        styles: StyleTokens { grids },
        variables,
        components,
        frames,
    })
}
