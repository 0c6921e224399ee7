//! Scene nodes - the host document tree as closed tagged variants.
//!
//! The authoring tool exposes a polymorphic node tree where capabilities
//! ("has fills", "is a container") are discovered by probing properties.
//! Here every entity is a closed variant type: capability checks become
//! variant or field membership, never runtime probing.

use serde::{Deserialize, Serialize};

/// An RGB color with channels in the 0..1 range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel (0..1).
    pub r: f64,
    /// Green channel (0..1).
    pub g: f64,
    /// Blue channel (0..1).
    pub b: f64,
}

/// An RGBA color with channels in the 0..1 range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    /// Red channel (0..1).
    pub r: f64,
    /// Green channel (0..1).
    pub g: f64,
    /// Blue channel (0..1).
    pub b: f64,
    /// Alpha channel (0..1).
    #[serde(default = "Rgba::default_alpha")]
    pub a: f64,
}

impl Rgba {
    const fn default_alpha() -> f64 {
        1.0
    }
}

/// A single stop of a gradient paint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    /// Stop color.
    pub color: Rgb,
    /// Stop position along the gradient axis (0..1).
    pub position: f64,
}

/// A 2D offset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    /// Horizontal component.
    #[serde(default)]
    pub x: f64,
    /// Vertical component.
    #[serde(default)]
    pub y: f64,
}

/// The content of a paint, discriminated by the host's paint tag.
///
/// Only solids and linear/radial gradients carry structure the extractors
/// look into; the remaining tags are kept so a paint never loses its
/// identity, but they are opaque.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all_fields = "camelCase")]
pub enum PaintKind {
    /// A single flat color.
    Solid {
        /// The paint color.
        color: Rgb,
    },
    /// A linear gradient with ordered stops.
    GradientLinear {
        /// Ordered gradient stops.
        #[serde(default)]
        gradient_stops: Vec<GradientStop>,
    },
    /// A radial gradient with ordered stops.
    GradientRadial {
        /// Ordered gradient stops.
        #[serde(default)]
        gradient_stops: Vec<GradientStop>,
    },
    /// An angular (conic) gradient.
    GradientAngular,
    /// A diamond gradient.
    GradientDiamond,
    /// An image fill.
    Image,
    /// A video fill.
    Video,
    /// Any paint tag this model does not recognize.
    #[serde(other)]
    Other,
}

impl PaintKind {
    /// Lowercase tag for this paint, as used in simplified fill listings.
    #[must_use]
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Solid { .. } => "solid",
            Self::GradientLinear { .. } => "gradient_linear",
            Self::GradientRadial { .. } => "gradient_radial",
            Self::GradientAngular => "gradient_angular",
            Self::GradientDiamond => "gradient_diamond",
            Self::Image => "image",
            Self::Video => "video",
            Self::Other => "other",
        }
    }
}

/// A fill or stroke value on a node or paint style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paint {
    /// Paint content.
    #[serde(flatten)]
    pub kind: PaintKind,
    /// Visibility flag; absence implies visible.
    #[serde(default)]
    pub visible: Option<bool>,
    /// Opacity override (0..1); absence implies 1.
    #[serde(default)]
    pub opacity: Option<f64>,
}

impl Paint {
    /// A paint is visible unless the flag is explicitly false.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible != Some(false)
    }
}

/// The content of a visual effect, discriminated by the host's effect tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all_fields = "camelCase")]
pub enum EffectKind {
    /// An outer shadow.
    DropShadow {
        /// Shadow color with alpha.
        #[serde(default)]
        color: Option<Rgba>,
        /// Shadow offset.
        #[serde(default)]
        offset: Option<Vector>,
        /// Blur radius.
        #[serde(default)]
        radius: Option<f64>,
        /// Shadow spread.
        #[serde(default)]
        spread: Option<f64>,
    },
    /// An inner shadow.
    InnerShadow {
        /// Shadow color with alpha.
        #[serde(default)]
        color: Option<Rgba>,
        /// Shadow offset.
        #[serde(default)]
        offset: Option<Vector>,
        /// Blur radius.
        #[serde(default)]
        radius: Option<f64>,
        /// Shadow spread.
        #[serde(default)]
        spread: Option<f64>,
    },
    /// A blur applied to the layer itself.
    LayerBlur {
        /// Blur radius.
        #[serde(default)]
        radius: Option<f64>,
    },
    /// A blur applied to content behind the layer.
    BackgroundBlur {
        /// Blur radius.
        #[serde(default)]
        radius: Option<f64>,
    },
    /// A noise effect.
    Noise,
    /// A texture effect.
    Texture,
    /// Any effect tag this model does not recognize.
    #[serde(other)]
    Other,
}

impl EffectKind {
    /// The host-facing tag for this effect.
    #[must_use]
    pub fn tag(&self) -> &'static str {
        match self {
            Self::DropShadow { .. } => "DROP_SHADOW",
            Self::InnerShadow { .. } => "INNER_SHADOW",
            Self::LayerBlur { .. } => "LAYER_BLUR",
            Self::BackgroundBlur { .. } => "BACKGROUND_BLUR",
            Self::Noise => "NOISE",
            Self::Texture => "TEXTURE",
            Self::Other => "OTHER",
        }
    }
}

/// A visual effect on a node or effect style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Effect {
    /// Effect content.
    #[serde(flatten)]
    pub kind: EffectKind,
    /// Visibility flag; absence implies visible.
    #[serde(default)]
    pub visible: Option<bool>,
}

impl Effect {
    /// An effect is visible unless the flag is explicitly false.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible != Some(false)
    }
}

/// A font family/style pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontName {
    /// Font family, e.g. "Inter".
    pub family: String,
    /// Style name, e.g. "Regular" or "Bold".
    pub style: String,
}

/// A line-height value with its unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "unit", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all_fields = "camelCase")]
pub enum LineHeight {
    /// Automatic line height.
    Auto,
    /// Absolute pixel value.
    Pixels {
        /// Height in pixels.
        value: f64,
    },
    /// Percentage of the font size.
    Percent {
        /// Height as a percentage.
        value: f64,
    },
    /// Any unit this model does not recognize.
    #[serde(other)]
    Other,
}

/// A letter-spacing value with its unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "unit", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all_fields = "camelCase")]
pub enum LetterSpacing {
    /// Absolute pixel value.
    Pixels {
        /// Spacing in pixels.
        value: f64,
    },
    /// Percentage of the font size.
    Percent {
        /// Spacing as a percentage.
        value: f64,
    },
    /// Any unit this model does not recognize.
    #[serde(other)]
    Other,
}

/// A corner radius: a uniform number, or `"mixed"` when corners differ.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CornerRadius {
    /// All corners share this radius.
    Uniform(f64),
    /// Corners have differing radii.
    Mixed,
}

impl Serialize for CornerRadius {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Uniform(value) => serializer.serialize_f64(*value),
            Self::Mixed => serializer.serialize_str("mixed"),
        }
    }
}

impl<'de> Deserialize<'de> for CornerRadius {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(value) => Ok(Self::Uniform(value)),
            Raw::Text(text) if text == "mixed" => Ok(Self::Mixed),
            Raw::Text(other) => Err(serde::de::Error::custom(format!(
                "invalid corner radius: {other:?}"
            ))),
        }
    }
}

/// Auto-layout stacking direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutDirection {
    /// Children flow left to right.
    Horizontal,
    /// Children flow top to bottom.
    Vertical,
}

/// Auto-layout configuration of a container node.
///
/// Present only when the node actually uses auto-layout; a node laid out
/// absolutely carries no [`AutoLayout`] at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoLayout {
    /// Stacking direction.
    pub direction: LayoutDirection,
    /// Gap between children in pixels.
    #[serde(default)]
    pub spacing: f64,
    /// Top padding in pixels.
    #[serde(default)]
    pub padding_top: f64,
    /// Right padding in pixels.
    #[serde(default)]
    pub padding_right: f64,
    /// Bottom padding in pixels.
    #[serde(default)]
    pub padding_bottom: f64,
    /// Left padding in pixels.
    #[serde(default)]
    pub padding_left: f64,
    /// Alignment along the stacking axis.
    #[serde(default = "AutoLayout::default_align")]
    pub primary_align: String,
    /// Alignment across the stacking axis.
    #[serde(default = "AutoLayout::default_align")]
    pub counter_align: String,
    /// Wrapping behavior.
    #[serde(default = "AutoLayout::default_wrap")]
    pub wrap: String,
}

impl AutoLayout {
    fn default_align() -> String {
        "MIN".to_string()
    }

    fn default_wrap() -> String {
        "NO_WRAP".to_string()
    }
}

/// A named component property definition, carried verbatim into the output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDefinition {
    /// Property kind, e.g. "VARIANT" or "BOOLEAN".
    #[serde(rename = "type")]
    pub kind: String,
    /// Default value for the property.
    pub default_value: serde_json::Value,
    /// Allowed values for variant properties.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant_options: Option<Vec<String>>,
}

/// The closed tag set of scene nodes.
///
/// Only the kinds the extractors give meaning to are distinguished; every
/// other host tag collapses into [`NodeKind::Other`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all_fields = "camelCase")]
pub enum NodeKind {
    /// The document root; its children are pages.
    Document,
    /// A page; its children are top-level canvas nodes.
    Page,
    /// A frame container.
    Frame,
    /// A reusable component definition.
    Component {
        /// Author-provided description.
        #[serde(default)]
        description: String,
        /// Declared component properties, keyed by property name.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        property_definitions: Option<std::collections::BTreeMap<String, PropertyDefinition>>,
    },
    /// A set of component variants.
    ComponentSet {
        /// Author-provided description.
        #[serde(default)]
        description: String,
    },
    /// A text node.
    Text {
        /// Text content.
        #[serde(default)]
        characters: String,
        /// Font family and style; absent when the range is mixed.
        #[serde(default)]
        font_name: Option<FontName>,
        /// Font size in pixels; absent when the range is mixed.
        #[serde(default)]
        font_size: Option<f64>,
        /// Line height; absent when unset or mixed.
        #[serde(default)]
        line_height: Option<LineHeight>,
        /// Letter spacing; absent when unset or mixed.
        #[serde(default)]
        letter_spacing: Option<LetterSpacing>,
        /// Decoration, e.g. "UNDERLINE".
        #[serde(default)]
        text_decoration: Option<String>,
        /// Case transform, e.g. "UPPER".
        #[serde(default)]
        text_case: Option<String>,
    },
    /// Any node tag outside the closed set (shapes, groups, instances, ...).
    #[serde(other)]
    Other,
}

impl NodeKind {
    /// The host-facing tag for this node kind.
    #[must_use]
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Document => "DOCUMENT",
            Self::Page => "PAGE",
            Self::Frame => "FRAME",
            Self::Component { .. } => "COMPONENT",
            Self::ComponentSet { .. } => "COMPONENT_SET",
            Self::Text { .. } => "TEXT",
            Self::Other => "OTHER",
        }
    }
}

/// One element of the host's hierarchical document.
///
/// Nodes are a read-only snapshot for the duration of one extraction run:
/// children are exclusively owned by their parent and nothing here mutates
/// the tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneNode {
    /// Node name as authored.
    #[serde(default)]
    pub name: String,
    /// Node kind with kind-specific payload.
    #[serde(flatten)]
    pub kind: NodeKind,
    /// Visibility; defaults to visible.
    #[serde(default = "SceneNode::default_visible")]
    pub visible: bool,
    /// Ordered fill paints.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fills: Vec<Paint>,
    /// Ordered stroke paints.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub strokes: Vec<Paint>,
    /// Child nodes in z-order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SceneNode>,
    /// Width in pixels.
    #[serde(default)]
    pub width: f64,
    /// Height in pixels.
    #[serde(default)]
    pub height: f64,
    /// Corner radius, if the node has corners.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<CornerRadius>,
    /// Auto-layout configuration, if the node uses auto-layout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<AutoLayout>,
}

impl SceneNode {
    const fn default_visible() -> bool {
        true
    }

    /// Create a bare node of the given kind with an empty body.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            visible: true,
            fills: Vec::new(),
            strokes: Vec::new(),
            children: Vec::new(),
            width: 0.0,
            height: 0.0,
            corner_radius: None,
            layout: None,
        }
    }

    /// Attach children, returning the node.
    #[must_use]
    pub fn with_children(mut self, children: Vec<SceneNode>) -> Self {
        self.children = children;
        self
    }

    /// Attach fills, returning the node.
    #[must_use]
    pub fn with_fills(mut self, fills: Vec<Paint>) -> Self {
        self.fills = fills;
        self
    }

    /// The first visible solid fill color, if any.
    ///
    /// Gradients and image fills are skipped; this is the summary color
    /// used by structural snapshots, not the full paint model.
    #[must_use]
    pub fn first_solid_fill(&self) -> Option<Rgb> {
        self.fills.iter().find_map(|paint| match &paint.kind {
            PaintKind::Solid { color } if paint.is_visible() => Some(*color),
            _ => None,
        })
    }
}
