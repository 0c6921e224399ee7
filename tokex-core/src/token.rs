//! Canonical output schema for one extraction run.
//!
//! The wire names here are the contract with the receiving server: the
//! serialized form of [`TokenDocument`] is exactly the JSON document the
//! receiver persists, so every field carries its camelCase wire name.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{TokenError, TokenResult};
use crate::node::{AutoLayout, CornerRadius, PaintKind, PropertyDefinition};
use crate::normalize::{ScalarOrText, VariantProperties};
use crate::registry::{LayoutGrid, VariableType};

/// An RGBA color with channels rounded to 2 decimals, still in 0..1 space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoundedRgba {
    /// Red channel (0..1, rounded).
    pub r: f64,
    /// Green channel (0..1, rounded).
    pub g: f64,
    /// Blue channel (0..1, rounded).
    pub b: f64,
    /// Alpha channel (0..1, rounded).
    pub a: f64,
}

/// One gradient stop of a color token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StopToken {
    /// Stop color as hex.
    pub color: String,
    /// Stop position rounded to 2 decimals.
    pub position: f64,
}

/// The per-kind payload of a color token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ColorTokenKind {
    /// A solid color with its rounded RGBA breakdown.
    Solid {
        /// Rounded channel values.
        rgba: RoundedRgba,
    },
    /// A linear gradient with its stop list.
    GradientLinear {
        /// Ordered stops.
        stops: Vec<StopToken>,
    },
    /// A radial gradient with its stop list.
    GradientRadial {
        /// Ordered stops.
        stops: Vec<StopToken>,
    },
}

/// A canonical color record.
///
/// `hex` is the representative color used for deduplication: the solid
/// color itself, or a gradient's first stop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorToken {
    /// Paint style name, or null for colors found on unstyled nodes.
    pub name: Option<String>,
    /// Representative hex value, lowercase `#rrggbb`.
    pub hex: String,
    /// Kind-specific payload.
    #[serde(flatten)]
    pub kind: ColorTokenKind,
}

/// A deduplicated text style record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographyToken {
    /// Text style name, or null for styles found on unstyled nodes.
    pub name: Option<String>,
    /// Font family.
    pub font_family: String,
    /// Weight/style name, e.g. "Regular".
    pub font_weight: String,
    /// Font size in pixels; null when the source range was mixed.
    pub font_size: Option<f64>,
    /// Resolved line height: pixels, `"<n>%"`, or `"auto"`.
    pub line_height: ScalarOrText,
    /// Resolved letter spacing: pixels or `"<n>%"`.
    pub letter_spacing: ScalarOrText,
    /// Text decoration, defaulting to "NONE".
    pub text_decoration: String,
    /// Case transform, defaulting to "ORIGINAL".
    pub text_case: String,
}

/// Shadow offset of an effect token.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OffsetToken {
    /// Horizontal offset.
    pub x: f64,
    /// Vertical offset.
    pub y: f64,
}

/// One serialized effect of an effect style.
///
/// Shadow effects carry color/opacity/offset/radius/spread, blur effects
/// carry radius only, and unrecognized effects keep just their tag and
/// visibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectToken {
    /// Host effect tag, e.g. "DROP_SHADOW".
    #[serde(rename = "type")]
    pub effect_type: String,
    /// Whether the effect is enabled.
    pub visible: bool,
    /// Shadow color as hex.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Shadow opacity from the color's alpha.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    /// Shadow offset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<OffsetToken>,
    /// Blur radius.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    /// Shadow spread.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spread: Option<f64>,
}

/// A named effect style with its serialized effects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectStyleToken {
    /// Style name.
    pub name: String,
    /// Serialized effects in style order.
    pub effects: Vec<EffectToken>,
}

/// A named grid style with its layout grids, passed through verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridStyleToken {
    /// Style name.
    pub name: String,
    /// Layout grids exactly as authored.
    pub grids: Vec<LayoutGrid>,
}

/// The grouped style section of the output record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleTokens {
    /// Grid style records.
    pub grids: Vec<GridStyleToken>,
}

/// One variable with its per-mode resolved values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableToken {
    /// Variable name.
    pub name: String,
    /// Owning collection name.
    pub collection: String,
    /// Resolved variable type.
    #[serde(rename = "type")]
    pub resolved_type: VariableType,
    /// Mode name (or raw mode id) to resolved value.
    pub modes: serde_json::Map<String, serde_json::Value>,
}

/// A shallow, depth-capped summary of one subtree child.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeSummary {
    /// Child node name.
    pub name: String,
    /// Child node tag.
    #[serde(rename = "type")]
    pub node_type: String,
    /// Visibility, defaulting to true.
    pub visible: bool,
    /// First 100 characters of text content (text nodes only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub characters: Option<String>,
    /// Auto-layout block, when the child uses auto-layout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<AutoLayout>,
    /// First visible solid fill as hex.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    /// Corner radius; omitted for zero, `"mixed"` when non-uniform.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<CornerRadius>,
    /// Summaries of this child's own children, one level deeper.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<NodeSummary>>,
}

/// One variant child of a component set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantToken {
    /// Raw variant node name.
    pub name: String,
    /// Properties parsed from the variant name, in authored order.
    pub properties: VariantProperties,
    /// Width rounded to 2 decimals.
    pub width: f64,
    /// Height rounded to 2 decimals.
    pub height: f64,
    /// Depth-2 structural snapshot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<NodeSummary>>,
}

/// A component or component-set record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentToken {
    /// Component name.
    pub name: String,
    /// Author-provided description.
    pub description: String,
    /// Node tag: "COMPONENT" or "COMPONENT_SET".
    #[serde(rename = "type")]
    pub node_type: String,
    /// Width rounded to 2 decimals.
    pub width: f64,
    /// Height rounded to 2 decimals.
    pub height: f64,
    /// Per-child variant records (component sets only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variants: Option<Vec<VariantToken>>,
    /// Declared property definitions (plain components only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<BTreeMap<String, PropertyDefinition>>,
    /// Depth-2 structural snapshot (plain components only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<NodeSummary>>,
    /// Auto-layout block, when the component uses auto-layout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<AutoLayout>,
}

/// A simplified fill of a frame: solids keep their color, everything else
/// reduces to a bare lowercase tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FrameFill {
    /// A solid fill with its hex color.
    Solid {
        /// Fill color as hex.
        color: String,
    },
    /// A linear gradient fill.
    GradientLinear,
    /// A radial gradient fill.
    GradientRadial,
    /// An angular gradient fill.
    GradientAngular,
    /// A diamond gradient fill.
    GradientDiamond,
    /// An image fill.
    Image,
    /// A video fill.
    Video,
    /// Any other fill kind.
    Other,
}

impl FrameFill {
    /// Reduce a paint to its simplified frame-fill form: solids convert to
    /// hex, everything else keeps only its tag.
    #[must_use]
    pub fn from_paint(kind: &PaintKind) -> Self {
        match kind {
            PaintKind::Solid { color } => Self::Solid {
                color: crate::normalize::rgb_to_hex(color.r, color.g, color.b),
            },
            PaintKind::GradientLinear { .. } => Self::GradientLinear,
            PaintKind::GradientRadial { .. } => Self::GradientRadial,
            PaintKind::GradientAngular => Self::GradientAngular,
            PaintKind::GradientDiamond => Self::GradientDiamond,
            PaintKind::Image => Self::Image,
            PaintKind::Video => Self::Video,
            PaintKind::Other => Self::Other,
        }
    }
}

/// A top-level frame record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameToken {
    /// Frame name.
    pub name: String,
    /// Owning page name.
    pub page: String,
    /// Width rounded to 2 decimals.
    pub width: f64,
    /// Height rounded to 2 decimals.
    pub height: f64,
    /// Auto-layout block, or null for absolutely positioned frames.
    pub layout: Option<AutoLayout>,
    /// Visible fills in simplified form.
    pub fills: Vec<FrameFill>,
    /// Corner radius, 0 when absent.
    pub corner_radius: CornerRadius,
    /// Depth-2 structural snapshot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<NodeSummary>>,
}

/// Per-category record counts; each count equals the length of the
/// corresponding output array.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenStats {
    /// Number of color records.
    pub colors: usize,
    /// Number of typography records.
    pub text_styles: usize,
    /// Number of component records.
    pub components: usize,
    /// Number of variable records.
    pub variables: usize,
    /// Number of effect style records.
    pub effects: usize,
    /// Number of frame records.
    pub frames: usize,
}

/// The final artifact of one extraction run.
///
/// Produced once per run and immutable afterwards; the caller owns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenDocument {
    /// Source file name, `"untitled"` when the document is unnamed.
    pub file_name: String,
    /// ISO-8601 timestamp of the run.
    pub extracted_at: String,
    /// Per-category counts.
    pub stats: TokenStats,
    /// Deduplicated color records.
    pub colors: Vec<ColorToken>,
    /// Deduplicated typography records.
    pub typography: Vec<TypographyToken>,
    /// Effect style records.
    pub effects: Vec<EffectStyleToken>,
    /// Grouped style records.
    pub styles: StyleTokens,
    /// Variable records.
    pub variables: Vec<VariableToken>,
    /// Component records.
    pub components: Vec<ComponentToken>,
    /// Frame records.
    pub frames: Vec<FrameToken>,
}

impl TokenDocument {
    /// Serialize the record to compact JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> TokenResult<String> {
        serde_json::to_string(self).map_err(TokenError::Serialization)
    }

    /// Serialize the record to pretty-printed JSON (2-space indent).
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json_pretty(&self) -> TokenResult<String> {
        serde_json::to_string_pretty(self).map_err(TokenError::Serialization)
    }
}
