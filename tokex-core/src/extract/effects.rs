//! Effect extraction: registry only, no tree walk.

use crate::document::DesignDocument;
use crate::node::{Effect, EffectKind, Rgba, Vector};
use crate::normalize::{rgb_to_hex, round2};
use crate::token::{EffectStyleToken, EffectToken, OffsetToken};

/// Fallback color for shadows missing one.
const DEFAULT_SHADOW_HEX: &str = "#000";

/// Collect one record per effect style, in registry order.
#[must_use]
pub fn extract_effects(document: &DesignDocument) -> Vec<EffectStyleToken> {
    document
        .effect_styles
        .iter()
        .map(|style| EffectStyleToken {
            name: style.name.clone(),
            effects: style.effects.iter().map(serialize_effect).collect(),
        })
        .collect()
}

/// Serialize one effect by its kind: shadows carry full geometry, blurs
/// only a radius, and anything else keeps just its tag and visibility.
fn serialize_effect(effect: &Effect) -> EffectToken {
    let mut token = EffectToken {
        effect_type: effect.kind.tag().to_string(),
        visible: effect.is_visible(),
        color: None,
        opacity: None,
        offset: None,
        radius: None,
        spread: None,
    };

    match &effect.kind {
        EffectKind::DropShadow {
            color,
            offset,
            radius,
            spread,
        }
        | EffectKind::InnerShadow {
            color,
            offset,
            radius,
            spread,
        } => {
            token.color = Some(shadow_hex(color.as_ref()));
            token.opacity = Some(color.as_ref().map_or(1.0, |c| round2(c.a)));
            let offset = offset.unwrap_or_default();
            token.offset = Some(OffsetToken {
                x: offset.x,
                y: offset.y,
            });
            token.radius = Some(radius.unwrap_or(0.0));
            token.spread = Some(spread.unwrap_or(0.0));
        }
        EffectKind::LayerBlur { radius } | EffectKind::BackgroundBlur { radius } => {
            token.radius = Some(radius.unwrap_or(0.0));
        }
        EffectKind::Noise | EffectKind::Texture | EffectKind::Other => {}
    }

    token
}

fn shadow_hex(color: Option<&Rgba>) -> String {
    color.map_or_else(
        || DEFAULT_SHADOW_HEX.to_string(),
        |c| rgb_to_hex(c.r, c.g, c.b),
    )
}
