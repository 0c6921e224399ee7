//! Grid-style extraction: registry only, pass-through.

use crate::document::DesignDocument;
use crate::token::GridStyleToken;

/// Collect one record per grid style, carrying its layout grids verbatim.
#[must_use]
pub fn extract_grids(document: &DesignDocument) -> Vec<GridStyleToken> {
    document
        .grid_styles
        .iter()
        .map(|style| GridStyleToken {
            name: style.name.clone(),
            grids: style.layout_grids.clone(),
        })
        .collect()
}
