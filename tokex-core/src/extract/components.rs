//! Component and component-set extraction.

use crate::document::DesignDocument;
use crate::extract::snapshot::{summarize_children, SNAPSHOT_DEPTH};
use crate::node::{NodeKind, SceneNode};
use crate::normalize::{parse_variant_name, round2};
use crate::token::{ComponentToken, VariantToken};
use crate::walk::walk_nodes;

/// Node limit for the component scan.
pub const COMPONENT_WALK_LIMIT: usize = 200;

/// Collect component and component-set records from a bounded tree scan.
///
/// A component set emits one record whose variants are parsed from its
/// children's names; a plain component carries its declared property
/// definitions verbatim. Both get a depth-2 structural snapshot, and any
/// node using auto-layout also carries its layout block.
#[must_use]
pub fn extract_components(document: &DesignDocument) -> Vec<ComponentToken> {
    let mut components = Vec::new();

    walk_nodes(&document.root, COMPONENT_WALK_LIMIT, |node| match &node.kind {
        NodeKind::Component {
            description,
            property_definitions,
        } => {
            components.push(ComponentToken {
                name: node.name.clone(),
                description: description.clone(),
                node_type: node.kind.tag().to_string(),
                width: round2(node.width),
                height: round2(node.height),
                variants: None,
                properties: property_definitions.clone(),
                children: summarize_children(node, SNAPSHOT_DEPTH),
                layout: node.layout.clone(),
            });
        }
        NodeKind::ComponentSet { description } => {
            components.push(ComponentToken {
                name: node.name.clone(),
                description: description.clone(),
                node_type: node.kind.tag().to_string(),
                width: round2(node.width),
                height: round2(node.height),
                variants: Some(node.children.iter().map(variant_token).collect()),
                properties: None,
                children: None,
                layout: node.layout.clone(),
            });
        }
        _ => {}
    });

    components
}

fn variant_token(child: &SceneNode) -> VariantToken {
    VariantToken {
        name: child.name.clone(),
        properties: parse_variant_name(&child.name),
        width: round2(child.width),
        height: round2(child.height),
        children: summarize_children(child, SNAPSHOT_DEPTH),
    }
}
