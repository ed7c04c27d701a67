//! Node type definitions.
//!
//! The `NodeKind` enum represents every node type the document tree can hold.
//! Each variant carries the node-type-specific payload (element name and
//! attributes, text content). Navigation links live in `NodeData`.

use crate::attribute::Attribute;

/// The kind of a document node and its associated data.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// The document root. Every `Document` owns exactly one at its root slot;
    /// additional root nodes may be allocated but are never traversed.
    Root,

    /// An element node, e.g., `<div class="x">`.
    Element {
        /// The element's tag name, compared case-sensitively.
        name: String,
        /// Attributes on this element, in insertion order.
        attributes: Vec<Attribute>,
    },

    /// A text node.
    Text {
        /// The character data.
        content: String,
    },

    /// A comment node, e.g., `<!-- ... -->`.
    Comment {
        /// The comment text (without the `<!--` and `-->` delimiters).
        content: String,
    },

    /// A document type declaration, e.g., `<!DOCTYPE html>`.
    Doctype {
        /// The root element name declared in the DOCTYPE.
        name: String,
    },
}

impl NodeKind {
    /// Returns `true` if an `XPath` location step can address this kind of
    /// node: elements, text, and comments.
    #[must_use]
    pub fn is_xpath_selectable(&self) -> bool {
        match self {
            Self::Element { .. } | Self::Text { .. } | Self::Comment { .. } => true,
            Self::Root | Self::Doctype { .. } => false,
        }
    }

    /// Returns `true` if nodes of this kind may own children.
    #[must_use]
    pub fn is_container(&self) -> bool {
        match self {
            Self::Root | Self::Element { .. } => true,
            Self::Text { .. } | Self::Comment { .. } | Self::Doctype { .. } => false,
        }
    }
}
