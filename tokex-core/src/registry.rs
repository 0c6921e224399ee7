//! Style registries and variable collections.
//!
//! These are the named, globally-defined records the host stores outside
//! the node tree: paint/text/effect/grid styles and multi-mode variables.
//! Each registry entry is visited once per run, independent of traversal.

use serde::{Deserialize, Serialize};

use crate::node::{Effect, FontName, LetterSpacing, LineHeight, Paint, Rgba};

/// A named, reusable set of paints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaintStyle {
    /// Style name as authored.
    pub name: String,
    /// Ordered paints of the style.
    #[serde(default)]
    pub paints: Vec<Paint>,
}

/// A named, reusable text style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    /// Style name as authored.
    pub name: String,
    /// Font family and style.
    pub font_name: FontName,
    /// Font size in pixels.
    pub font_size: f64,
    /// Line height; absent when unset.
    #[serde(default)]
    pub line_height: Option<LineHeight>,
    /// Letter spacing; absent when unset.
    #[serde(default)]
    pub letter_spacing: Option<LetterSpacing>,
    /// Decoration, e.g. "UNDERLINE".
    #[serde(default)]
    pub text_decoration: Option<String>,
    /// Case transform, e.g. "UPPER".
    #[serde(default)]
    pub text_case: Option<String>,
}

/// A named, reusable set of effects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectStyle {
    /// Style name as authored.
    pub name: String,
    /// Ordered effects of the style.
    #[serde(default)]
    pub effects: Vec<Effect>,
}

/// One layout grid of a grid style, carried verbatim into the output.
///
/// Which fields are present depends on the pattern; absent fields stay
/// absent in the output rather than being defaulted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutGrid {
    /// Grid pattern: "GRID", "COLUMNS" or "ROWS".
    pub pattern: String,
    /// Cell size for uniform grids, track size otherwise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_size: Option<f64>,
    /// Gap between tracks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gutter_size: Option<f64>,
    /// Track count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<f64>,
    /// Track alignment, e.g. "STRETCH".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment: Option<String>,
    /// Offset from the frame edge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<f64>,
}

/// A named, reusable set of layout grids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridStyle {
    /// Style name as authored.
    pub name: String,
    /// Ordered layout grids of the style.
    #[serde(default)]
    pub layout_grids: Vec<LayoutGrid>,
}

/// The resolved type of a variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VariableType {
    /// A color value.
    Color,
    /// A numeric value.
    Float,
    /// A string value.
    String,
    /// A boolean value.
    Boolean,
}

/// An alias reference to another variable.
///
/// Aliases are surfaced as references and never followed: variables may
/// alias each other, so flattening could cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableAlias {
    /// Alias discriminant, always `VARIABLE_ALIAS` on the wire.
    #[serde(rename = "type")]
    pub kind: String,
    /// Id of the referenced variable.
    pub id: String,
}

/// A raw per-mode variable value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VariableValue {
    /// A boolean scalar.
    Boolean(bool),
    /// A numeric scalar.
    Number(f64),
    /// A string scalar.
    Text(String),
    /// A reference to another variable.
    Alias(VariableAlias),
    /// A color value.
    Color(Rgba),
}

/// One mode's value of a variable, in host declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModeValue {
    /// Id of the mode this value belongs to.
    pub mode_id: String,
    /// The raw value; null stays null.
    pub value: Option<VariableValue>,
}

/// A named mode of a variable collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableMode {
    /// Mode id, collection-scoped.
    pub mode_id: String,
    /// Mode name, e.g. "Light" or "Dark".
    pub name: String,
}

/// A single design variable with one value per mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variable {
    /// Variable id.
    pub id: String,
    /// Variable name as authored.
    pub name: String,
    /// Resolved value type.
    pub resolved_type: VariableType,
    /// Per-mode values in declaration order.
    #[serde(default)]
    pub values_by_mode: Vec<ModeValue>,
}

/// A named group of variables with a shared set of modes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableCollection {
    /// Collection name as authored.
    pub name: String,
    /// Modes defined by this collection.
    #[serde(default)]
    pub modes: Vec<VariableMode>,
    /// Ids of member variables, in declaration order.
    #[serde(default)]
    pub variable_ids: Vec<String>,
}

impl VariableCollection {
    /// Resolve a mode id to its name, falling back to the raw id when the
    /// registry is inconsistent.
    #[must_use]
    pub fn mode_name<'a>(&'a self, mode_id: &'a str) -> &'a str {
        self.modes
            .iter()
            .find(|mode| mode.mode_id == mode_id)
            .map_or(mode_id, |mode| mode.name.as_str())
    }
}

/// The variable subsystem of a document.
///
/// This is an optional capability: hosts without variable support provide
/// no registry at all, and extraction yields an empty sequence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableRegistry {
    /// Variable collections in declaration order.
    #[serde(default)]
    pub collections: Vec<VariableCollection>,
    /// All variables, looked up by id.
    #[serde(default)]
    pub variables: Vec<Variable>,
}

impl VariableRegistry {
    /// Look up a variable by id.
    #[must_use]
    pub fn variable(&self, id: &str) -> Option<&Variable> {
        self.variables.iter().find(|variable| variable.id == id)
    }
}
