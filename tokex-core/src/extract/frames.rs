//! Top-level frame extraction, one record per page-level frame.

use crate::document::DesignDocument;
use crate::extract::snapshot::{summarize_children, SNAPSHOT_DEPTH};
use crate::node::{CornerRadius, NodeKind};
use crate::normalize::round2;
use crate::token::{FrameFill, FrameToken};

/// Most frames collected across the whole document.
pub const FRAME_CAP: usize = 50;

/// Collect frames that sit directly on a page, in page order.
///
/// Only direct children of pages count; nested frames are reached through
/// snapshots, not as records of their own. Once 50 frames have been
/// collected the scan stops entirely, abandoning the current page and any
/// pages after it.
#[must_use]
pub fn extract_frames(document: &DesignDocument) -> Vec<FrameToken> {
    let mut frames = Vec::new();

    'pages: for page in &document.root.children {
        if !matches!(page.kind, NodeKind::Page) {
            continue;
        }
        for node in &page.children {
            if !matches!(node.kind, NodeKind::Frame) {
                continue;
            }

            let fills = node
                .fills
                .iter()
                .filter(|paint| paint.is_visible())
                .map(|paint| FrameFill::from_paint(&paint.kind))
                .collect();

            frames.push(FrameToken {
                name: node.name.clone(),
                page: page.name.clone(),
                width: round2(node.width),
                height: round2(node.height),
                layout: node.layout.clone(),
                fills,
                corner_radius: node.corner_radius.unwrap_or(CornerRadius::Uniform(0.0)),
                children: summarize_children(node, SNAPSHOT_DEPTH),
            });

            if frames.len() >= FRAME_CAP {
                break 'pages;
            }
        }
    }

    frames
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{Paint, PaintKind, Rgb, SceneNode};

    fn frame(name: &str) -> SceneNode {
        let mut node = SceneNode::new(name, NodeKind::Frame);
        node.width = 375.0;
        node.height = 812.0;
        node
    }

    fn page(name: &str, children: Vec<SceneNode>) -> SceneNode {
        SceneNode::new(name, NodeKind::Page).with_children(children)
    }

    fn document_with_pages(pages: Vec<SceneNode>) -> DesignDocument {
        let mut document = DesignDocument::new("doc");
        document.root = SceneNode::new("root", NodeKind::Document).with_children(pages);
        document
    }

    #[test]
    fn test_only_page_level_frames_are_recorded() {
        let nested = frame("Inner");
        let outer = frame("Outer").with_children(vec![nested]);
        let stray = SceneNode::new("Note", NodeKind::Other);

        let document = document_with_pages(vec![page("Home", vec![outer, stray])]);
        let frames = extract_frames(&document);

        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].name, "Outer");
        assert_eq!(frames[0].page, "Home");
        // The nested frame appears only inside the snapshot.
        let children = frames[0].children.as_ref().expect("snapshot present");
        assert_eq!(children[0].name, "Inner");
    }

    #[test]
    fn test_hidden_fills_filtered() {
        let mut node = frame("Hero");
        node.fills = vec![
            Paint {
                kind: PaintKind::Solid {
                    color: Rgb { r: 1.0, g: 0.0, b: 0.0 },
                },
                visible: Some(false),
                opacity: None,
            },
            Paint {
                kind: PaintKind::Solid {
                    color: Rgb { r: 0.0, g: 0.0, b: 1.0 },
                },
                visible: None,
                opacity: None,
            },
        ];

        let document = document_with_pages(vec![page("Home", vec![node])]);
        let frames = extract_frames(&document);

        assert_eq!(frames[0].fills.len(), 1);
        assert!(matches!(
            &frames[0].fills[0],
            FrameFill::Solid { color } if color == "#0000ff"
        ));
    }

    #[test]
    fn test_missing_radius_defaults_to_zero() {
        let document = document_with_pages(vec![page("Home", vec![frame("Flat")])]);
        let frames = extract_frames(&document);
        assert_eq!(frames[0].corner_radius, CornerRadius::Uniform(0.0));

        // A frame without auto-layout still carries an explicit null.
        let value = serde_json::to_value(&frames[0]).expect("serialize");
        assert!(value["layout"].is_null());
        assert_eq!(value["cornerRadius"], 0.0);
    }

    #[test]
    fn test_cap_abandons_remaining_pages() {
        let first: Vec<SceneNode> = (0..30).map(|i| frame(&format!("a{i}"))).collect();
        let second: Vec<SceneNode> = (0..30).map(|i| frame(&format!("b{i}"))).collect();
        let third: Vec<SceneNode> = (0..30).map(|i| frame(&format!("c{i}"))).collect();

        let document = document_with_pages(vec![
            page("P1", first),
            page("P2", second),
            page("P3", third),
        ]);
        let frames = extract_frames(&document);

        // The cap lands mid-way through the second page and nothing from
        // the third page is visited.
        assert_eq!(frames.len(), FRAME_CAP);
        assert_eq!(frames[29].name, "a29");
        assert_eq!(frames[30].name, "b0");
        assert_eq!(frames[49].name, "b19");
        assert!(frames.iter().all(|f| !f.name.starts_with('c')));
    }

    #[test]
    fn test_non_page_roots_are_ignored() {
        let document = document_with_pages(vec![
            SceneNode::new("loose", NodeKind::Frame),
            page("Home", vec![frame("Screen")]),
        ]);
        let frames = extract_frames(&document);
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].name, "Screen");
    }
}
