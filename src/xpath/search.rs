//! Ancestor-chain search.
//!
//! The chain of a node is the list of selectable nodes on the way from the
//! document root (exclusive) down to the node itself (inclusive). It is found
//! with a single pre-order, depth-first walk in document order that stops at
//! the first match.

use crate::tree::{Document, NodeId};

/// Returns the chain from just below the root of `doc` down to `target`, or
/// `None` if `target` is not reachable from the root.
///
/// Only elements, text, and comments are visited; doctype and nested root
/// nodes are skipped together with anything beneath them. The document root
/// itself never matches.
///
/// The walk keeps an explicit stack of `(node, depth)` frames instead of
/// recursing, so arbitrarily deep trees are handled without growing the call
/// stack.
#[must_use]
pub fn find_chain(doc: &Document, target: NodeId) -> Option<Vec<NodeId>> {
    let mut stack: Vec<(NodeId, usize)> = Vec::new();
    push_children(doc, doc.root(), 0, &mut stack);

    let mut chain: Vec<NodeId> = Vec::new();
    while let Some((node, depth)) = stack.pop() {
        chain.truncate(depth);
        chain.push(node);
        if node == target {
            return Some(chain);
        }
        push_children(doc, node, depth + 1, &mut stack);
    }
    None
}

/// Pushes the selectable children of `parent` in reverse order, so the first
/// child is popped first.
fn push_children(doc: &Document, parent: NodeId, depth: usize, stack: &mut Vec<(NodeId, usize)>) {
    let mut child = doc.last_child(parent);
    while let Some(current) = child {
        if doc.kind(current).is_xpath_selectable() {
            stack.push((current, depth));
        }
        child = doc.prev_sibling(current);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_excludes_root_and_includes_target() {
        let mut doc = Document::new();
        let html = doc.create_element("html");
        let body = doc.create_element("body");
        let text = doc.create_text("hi");
        doc.append_child(doc.root(), html).unwrap();
        doc.append_child(html, body).unwrap();
        doc.append_child(body, text).unwrap();

        assert_eq!(find_chain(&doc, text), Some(vec![html, body, text]));
        assert_eq!(find_chain(&doc, html), Some(vec![html]));
    }

    #[test]
    fn test_root_itself_is_not_found() {
        let doc = Document::new();
        assert_eq!(find_chain(&doc, doc.root()), None);
    }

    #[test]
    fn test_siblings_do_not_leak_into_chain() {
        let mut doc = Document::new();
        let root = doc.root();
        let a = doc.create_element("a");
        let a_child = doc.create_element("x");
        let b = doc.create_element("b");
        let b_child = doc.create_element("y");
        doc.append_child(root, a).unwrap();
        doc.append_child(a, a_child).unwrap();
        doc.append_child(root, b).unwrap();
        doc.append_child(b, b_child).unwrap();

        assert_eq!(find_chain(&doc, b_child), Some(vec![b, b_child]));
        assert_eq!(find_chain(&doc, a_child), Some(vec![a, a_child]));
    }

    #[test]
    fn test_detached_subtree_is_not_found() {
        let mut doc = Document::new();
        let orphan = doc.create_element("div");
        let inner = doc.create_text("lost");
        doc.append_child(orphan, inner).unwrap();

        assert_eq!(find_chain(&doc, orphan), None);
        assert_eq!(find_chain(&doc, inner), None);
    }

    #[test]
    fn test_doctype_is_not_visited() {
        let mut doc = Document::new();
        let doctype = doc.create_doctype("html");
        doc.append_child(doc.root(), doctype).unwrap();
        assert_eq!(find_chain(&doc, doctype), None);
    }

    #[test]
    fn test_deep_tree() {
        let mut doc = Document::new();
        let mut parent = doc.root();
        for _ in 0..10_000 {
            let div = doc.create_element("div");
            doc.append_child(parent, div).unwrap();
            parent = div;
        }
        let chain = find_chain(&doc, parent).unwrap();
        assert_eq!(chain.len(), 10_000);
        assert_eq!(chain.last(), Some(&parent));
    }
}
