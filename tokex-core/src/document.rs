//! The host document snapshot handed to an extraction run.

use serde::{Deserialize, Serialize};

use crate::error::{TokenError, TokenResult};
use crate::node::SceneNode;
use crate::registry::{EffectStyle, GridStyle, PaintStyle, TextStyle, VariableRegistry};

/// A read-only snapshot of one design document.
///
/// Holds the node tree plus the registries the host stores alongside it.
/// The snapshot lives for the duration of one extraction run; nothing in
/// this crate creates, destroys, or mutates its nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignDocument {
    /// File name as shown by the authoring tool.
    #[serde(default)]
    pub name: String,
    /// The document root node; its children are pages.
    #[serde(default = "DesignDocument::default_root")]
    pub root: SceneNode,
    /// Local paint styles in registry order.
    #[serde(default)]
    pub paint_styles: Vec<PaintStyle>,
    /// Local text styles in registry order.
    #[serde(default)]
    pub text_styles: Vec<TextStyle>,
    /// Local effect styles in registry order.
    #[serde(default)]
    pub effect_styles: Vec<EffectStyle>,
    /// Local grid styles in registry order.
    #[serde(default)]
    pub grid_styles: Vec<GridStyle>,
    /// The variable subsystem; absent when the host does not support it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variables: Option<VariableRegistry>,
}

impl Default for DesignDocument {
    fn default() -> Self {
        Self {
            name: String::new(),
            root: Self::default_root(),
            paint_styles: Vec::new(),
            text_styles: Vec::new(),
            effect_styles: Vec::new(),
            grid_styles: Vec::new(),
            variables: None,
        }
    }
}

impl DesignDocument {
    fn default_root() -> SceneNode {
        SceneNode::new("", crate::node::NodeKind::Document)
    }

    /// Create an empty document with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            root: Self::default_root(),
            ..Self::default()
        }
    }

    /// Deserialize a document snapshot from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if deserialization fails.
    pub fn from_json(json: &str) -> TokenResult<Self> {
        serde_json::from_str(json).map_err(TokenError::Serialization)
    }

    /// Serialize the document snapshot to JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> TokenResult<String> {
        serde_json::to_string(self).map_err(TokenError::Serialization)
    }
}
