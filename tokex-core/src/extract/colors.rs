//! Color extraction: paint styles first, then a bounded tree scan.

use std::collections::HashSet;

use crate::document::DesignDocument;
use crate::node::{Paint, PaintKind};
use crate::normalize::{rgb_to_hex, round2};
use crate::token::{ColorToken, ColorTokenKind, RoundedRgba, StopToken};
use crate::walk::walk_nodes;

/// Node limit for the color scan.
pub const COLOR_WALK_LIMIT: usize = 500;

/// Fallback hex for gradients without stops.
const EMPTY_GRADIENT_HEX: &str = "#000000";

/// Collect deduplicated color records from the paint-style registry and
/// the node tree.
///
/// Registry paints are processed first so a style's name wins over a later
/// untagged occurrence of the same hex; the seen-set is shared across both
/// phases, and within the registry phase itself. The tree phase scans each
/// visited node's fills before its strokes.
#[must_use]
pub fn extract_colors(document: &DesignDocument) -> Vec<ColorToken> {
    let mut colors = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for style in &document.paint_styles {
        for paint in &style.paints {
            if let Some(token) = paint_to_color(paint, Some(style.name.clone())) {
                if seen.insert(token.hex.clone()) {
                    colors.push(token);
                }
            }
        }
    }

    walk_nodes(&document.root, COLOR_WALK_LIMIT, |node| {
        for paint in node.fills.iter().chain(node.strokes.iter()) {
            if let Some(token) = paint_to_color(paint, None) {
                if seen.insert(token.hex.clone()) {
                    colors.push(token);
                }
            }
        }
    });

    colors
}

/// Convert one paint to a color record.
///
/// Hidden paints and paints with no color content yield nothing.
fn paint_to_color(paint: &Paint, name: Option<String>) -> Option<ColorToken> {
    if !paint.is_visible() {
        return None;
    }

    match &paint.kind {
        PaintKind::Solid { color } => {
            let alpha = paint.opacity.unwrap_or(1.0);
            Some(ColorToken {
                name,
                hex: rgb_to_hex(color.r, color.g, color.b),
                kind: ColorTokenKind::Solid {
                    rgba: RoundedRgba {
                        r: round2(color.r),
                        g: round2(color.g),
                        b: round2(color.b),
                        a: round2(alpha),
                    },
                },
            })
        }
        PaintKind::GradientLinear { gradient_stops } => {
            let stops = stop_tokens(gradient_stops);
            Some(ColorToken {
                name,
                hex: representative_hex(&stops),
                kind: ColorTokenKind::GradientLinear { stops },
            })
        }
        PaintKind::GradientRadial { gradient_stops } => {
            let stops = stop_tokens(gradient_stops);
            Some(ColorToken {
                name,
                hex: representative_hex(&stops),
                kind: ColorTokenKind::GradientRadial { stops },
            })
        }
        _ => None,
    }
}

fn stop_tokens(stops: &[crate::node::GradientStop]) -> Vec<StopToken> {
    stops
        .iter()
        .map(|stop| StopToken {
            color: rgb_to_hex(stop.color.r, stop.color.g, stop.color.b),
            position: round2(stop.position),
        })
        .collect()
}

/// A gradient is represented by its first stop's color.
fn representative_hex(stops: &[StopToken]) -> String {
    stops
        .first()
        .map_or_else(|| EMPTY_GRADIENT_HEX.to_string(), |stop| stop.color.clone())
}
