//! Typography extraction: text-style registry first, then a bounded scan
//! over text nodes.

use std::collections::HashSet;

use crate::document::DesignDocument;
use crate::node::NodeKind;
use crate::normalize::{resolve_letter_spacing, resolve_line_height};
use crate::token::TypographyToken;
use crate::walk::walk_nodes;

/// Node limit for the typography scan.
pub const TYPOGRAPHY_WALK_LIMIT: usize = 300;

const DEFAULT_DECORATION: &str = "NONE";
const DEFAULT_CASE: &str = "ORIGINAL";

/// The dedup key is the (family, size, weight-name) triple only.
///
/// Styles differing solely in line-height, letter-spacing, decoration, or
/// case collapse to one record; the first occurrence wins.
fn dedup_key(family: &str, size: Option<f64>, weight: &str) -> String {
    match size {
        Some(size) => format!("{family}-{size}-{weight}"),
        None => format!("{family}-null-{weight}"),
    }
}

/// Collect deduplicated typography records from the text-style registry
/// and the node tree. Tree-phase text nodes with an indeterminate (mixed)
/// font are skipped.
#[must_use]
pub fn extract_typography(document: &DesignDocument) -> Vec<TypographyToken> {
    let mut styles = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for style in &document.text_styles {
        let key = dedup_key(
            &style.font_name.family,
            Some(style.font_size),
            &style.font_name.style,
        );
        if !seen.insert(key) {
            continue;
        }
        styles.push(TypographyToken {
            name: Some(style.name.clone()),
            font_family: style.font_name.family.clone(),
            font_weight: style.font_name.style.clone(),
            font_size: Some(style.font_size),
            line_height: resolve_line_height(style.line_height),
            letter_spacing: resolve_letter_spacing(style.letter_spacing),
            text_decoration: style
                .text_decoration
                .clone()
                .unwrap_or_else(|| DEFAULT_DECORATION.to_string()),
            text_case: style
                .text_case
                .clone()
                .unwrap_or_else(|| DEFAULT_CASE.to_string()),
        });
    }

    walk_nodes(&document.root, TYPOGRAPHY_WALK_LIMIT, |node| {
        let NodeKind::Text {
            font_name: Some(font),
            font_size,
            line_height,
            letter_spacing,
            text_decoration,
            text_case,
            ..
        } = &node.kind
        else {
            return;
        };

        let key = dedup_key(&font.family, *font_size, &font.style);
        if !seen.insert(key) {
            return;
        }
        styles.push(TypographyToken {
            name: None,
            font_family: font.family.clone(),
            font_weight: font.style.clone(),
            font_size: *font_size,
            line_height: resolve_line_height(*line_height),
            letter_spacing: resolve_letter_spacing(*letter_spacing),
            text_decoration: text_decoration
                .clone()
                .unwrap_or_else(|| DEFAULT_DECORATION.to_string()),
            text_case: text_case
                .clone()
                .unwrap_or_else(|| DEFAULT_CASE.to_string()),
        });
    });

    styles
}
