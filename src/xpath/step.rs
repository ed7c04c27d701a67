//! Location steps.
//!
//! Each node on a chain becomes one step of the absolute path. The index of a
//! step counts only siblings that the step's node test would also match:
//! same-tag elements for an element, text nodes for `text()`, comments for
//! `comment()`.

use std::fmt;

use crate::tree::{Document, NodeId, NodeKind};

/// One location step of a positional path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step<'a> {
    /// An element step, e.g., `div` or `div[2]`.
    Element {
        /// The tag name.
        name: &'a str,
        /// 1-based position among same-tag siblings.
        index: usize,
        /// True if no other sibling shares the tag name, in which case the
        /// index is omitted.
        unique: bool,
    },
    /// A `text()[n]` step.
    Text {
        /// 1-based position among text siblings.
        index: usize,
    },
    /// A `comment()[n]` step.
    Comment {
        /// 1-based position among comment siblings.
        index: usize,
    },
}

impl<'a> Step<'a> {
    /// Builds the step that selects `node` from `parent`.
    ///
    /// Returns `None` if `node` is not a child of `parent`, is not a
    /// selectable kind, or either id lies outside the document.
    #[must_use]
    pub fn locate(doc: &'a Document, parent: NodeId, node: NodeId) -> Option<Self> {
        doc.get(parent)?;
        match &doc.get(node)?.kind {
            NodeKind::Element { name, .. } => {
                let same_tag = |kind: &NodeKind| {
                    matches!(kind, NodeKind::Element { name: other, .. } if other == name)
                };
                let (index, has_following) = sibling_position(doc, parent, node, same_tag)?;
                Some(Self::Element {
                    name: name.as_str(),
                    index,
                    unique: index == 1 && !has_following,
                })
            }
            NodeKind::Text { .. } => {
                let is_text = |kind: &NodeKind| matches!(kind, NodeKind::Text { .. });
                let (index, _) = sibling_position(doc, parent, node, is_text)?;
                Some(Self::Text { index })
            }
            NodeKind::Comment { .. } => {
                let is_comment = |kind: &NodeKind| matches!(kind, NodeKind::Comment { .. });
                let (index, _) = sibling_position(doc, parent, node, is_comment)?;
                Some(Self::Comment { index })
            }
            NodeKind::Root | NodeKind::Doctype { .. } => None,
        }
    }
}

impl fmt::Display for Step<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Element {
                name, unique: true, ..
            } => f.write_str(name),
            Self::Element {
                name,
                index,
                unique: false,
            } => write!(f, "{name}[{index}]"),
            Self::Text { index } => write!(f, "text()[{index}]"),
            Self::Comment { index } => write!(f, "comment()[{index}]"),
        }
    }
}

/// Scans the children of `parent` once and returns the 1-based position of
/// `node` among the children matching `matches`, and whether a matching
/// child follows it.
///
/// Returns `None` if `node` is not a child of `parent`.
fn sibling_position(
    doc: &Document,
    parent: NodeId,
    node: NodeId,
    matches: impl Fn(&NodeKind) -> bool,
) -> Option<(usize, bool)> {
    let mut index = 1;
    let mut found = false;
    for child in doc.children(parent) {
        if found {
            if matches(doc.kind(child)) {
                return Some((index, true));
            }
        } else if child == node {
            found = true;
        } else if matches(doc.kind(child)) {
            index += 1;
        }
    }
    found.then_some((index, false))
}
