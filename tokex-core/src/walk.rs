//! Bounded depth-first traversal over scene nodes.

use crate::node::SceneNode;

/// Visit up to `limit` nodes of the tree rooted at `root`, depth-first.
///
/// The traversal is stack-based: each popped node is passed to the visitor
/// exactly once before its children are explored, and children are pushed
/// in reverse index order so they are visited left to right. Once `limit`
/// nodes have been visited the walk stops silently, even if unvisited
/// nodes remain - there is no error and no completion flag. Leaf nodes
/// contribute no children to the stack.
///
/// The limit bounds worst-case latency on pathologically large documents;
/// each extractor picks its own limit to match its cost/benefit of deep
/// scanning.
pub fn walk_nodes<'a, F>(root: &'a SceneNode, limit: usize, mut visit: F)
where
    F: FnMut(&'a SceneNode),
{
    let mut count = 0;
    let mut stack = vec![root];

    while let Some(node) = stack.pop() {
        if count >= limit {
            break;
        }
        visit(node);
        count += 1;

        for child in node.children.iter().rev() {
            stack.push(child);
        }
    }
}
