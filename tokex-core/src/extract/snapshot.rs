//! Depth-bounded structural snapshots shared by the component and frame
//! extractors.

use crate::node::{CornerRadius, NodeKind, SceneNode};
use crate::normalize::rgb_to_hex;
use crate::token::NodeSummary;

/// Starting depth for structural snapshots.
pub const SNAPSHOT_DEPTH: u32 = 2;

/// Per-level child cap; children beyond it are silently dropped.
const MAX_CHILDREN_PER_LEVEL: usize = 20;

/// Text content cap in characters.
const MAX_TEXT_CHARS: usize = 100;

/// Summarize a node's children down to `depth` levels.
///
/// Each level keeps at most 20 children with no indication that more
/// exist. Returns `None` at depth 0 or for childless nodes, so exhausted
/// levels disappear from the output rather than serializing as empty.
#[must_use]
pub fn summarize_children(node: &SceneNode, depth: u32) -> Option<Vec<NodeSummary>> {
    if depth == 0 || node.children.is_empty() {
        return None;
    }

    Some(
        node.children
            .iter()
            .take(MAX_CHILDREN_PER_LEVEL)
            .map(|child| summarize_node(child, depth))
            .collect(),
    )
}

fn summarize_node(child: &SceneNode, depth: u32) -> NodeSummary {
    let characters = match &child.kind {
        NodeKind::Text { characters, .. } => {
            Some(characters.chars().take(MAX_TEXT_CHARS).collect())
        }
        _ => None,
    };

    // A zero radius is omitted, matching how the host reports corners.
    let corner_radius = match child.corner_radius {
        Some(CornerRadius::Uniform(radius)) if radius != 0.0 => {
            Some(CornerRadius::Uniform(radius))
        }
        Some(CornerRadius::Mixed) => Some(CornerRadius::Mixed),
        _ => None,
    };

    NodeSummary {
        name: child.name.clone(),
        node_type: child.kind.tag().to_string(),
        visible: child.visible,
        characters,
        layout: child.layout.clone(),
        fill: child
            .first_solid_fill()
            .map(|color| rgb_to_hex(color.r, color.g, color.b)),
        corner_radius,
        children: summarize_children(child, depth - 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{Paint, PaintKind, Rgb};

    fn leaf(name: &str) -> SceneNode {
        SceneNode::new(name, NodeKind::Other)
    }

    #[test]
    fn test_depth_is_bounded() {
        let tree = SceneNode::new("root", NodeKind::Frame).with_children(vec![
            SceneNode::new("level1", NodeKind::Frame).with_children(vec![
                SceneNode::new("level2", NodeKind::Frame).with_children(vec![leaf("level3")]),
            ]),
        ]);

        let summary = summarize_children(&tree, SNAPSHOT_DEPTH).expect("has children");
        let level1 = &summary[0];
        let level2 = &level1.children.as_ref().expect("level 2 present")[0];
        // Depth 2 stops here: level3 is not summarized.
        assert!(level2.children.is_none());
    }

    #[test]
    fn test_child_cap_truncates_silently() {
        let children: Vec<SceneNode> = (0..30).map(|i| leaf(&format!("c{i}"))).collect();
        let tree = SceneNode::new("root", NodeKind::Frame).with_children(children);

        let summary = summarize_children(&tree, 1).expect("has children");
        assert_eq!(summary.len(), 20);
        assert_eq!(summary[0].name, "c0");
        assert_eq!(summary[19].name, "c19");
    }

    #[test]
    fn test_text_content_capped_at_100_chars() {
        let long = "x".repeat(250);
        let text = SceneNode::new(
            "caption",
            NodeKind::Text {
                characters: long,
                font_name: None,
                font_size: None,
                line_height: None,
                letter_spacing: None,
                text_decoration: None,
                text_case: None,
            },
        );
        let tree = SceneNode::new("root", NodeKind::Frame).with_children(vec![text]);

        let summary = summarize_children(&tree, 1).expect("has children");
        assert_eq!(summary[0].characters.as_ref().map(String::len), Some(100));
        assert_eq!(summary[0].node_type, "TEXT");
    }

    #[test]
    fn test_zero_radius_omitted_mixed_kept() {
        let mut rounded = leaf("rounded");
        rounded.corner_radius = Some(CornerRadius::Uniform(8.0));
        let mut square = leaf("square");
        square.corner_radius = Some(CornerRadius::Uniform(0.0));
        let mut mixed = leaf("mixed");
        mixed.corner_radius = Some(CornerRadius::Mixed);

        let tree =
            SceneNode::new("root", NodeKind::Frame).with_children(vec![rounded, square, mixed]);
        let summary = summarize_children(&tree, 1).expect("has children");

        assert_eq!(summary[0].corner_radius, Some(CornerRadius::Uniform(8.0)));
        assert_eq!(summary[1].corner_radius, None);
        assert_eq!(summary[2].corner_radius, Some(CornerRadius::Mixed));
    }

    #[test]
    fn test_first_visible_solid_fill_summarized() {
        let child = leaf("chip").with_fills(vec![Paint {
            kind: PaintKind::Solid {
                color: Rgb { r: 0.0, g: 1.0, b: 1.0 },
            },
            visible: None,
            opacity: None,
        }]);
        let tree = SceneNode::new("root", NodeKind::Frame).with_children(vec![child]);

        let summary = summarize_children(&tree, 1).expect("has children");
        assert_eq!(summary[0].fill.as_deref(), Some("#00ffff"));
    }
}
