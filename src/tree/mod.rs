//! Arena-based document tree.
//!
//! All nodes live in a contiguous `Vec<NodeData>` owned by the `Document` and
//! are referenced by `NodeId`, a newtype over `NonZeroU32`. Node identity is
//! arena-slot identity: two structurally identical elements are still two
//! distinct nodes with distinct ids.
//!
//! # Architecture
//!
//! Navigation links (parent, first\_child, last\_child, next\_sibling,
//! prev\_sibling) are arena indices rather than pointers. This avoids borrow
//! checker issues, reference cycles, and per-node heap allocation, and lets
//! path resolution run over a plain `&Document`.
//!
//! Linking operations validate the tree shape: only root and element nodes
//! hold children, every node has at most one parent, and a node can never
//! become its own ancestor.

mod node;

pub use node::NodeKind;

use std::num::NonZeroU32;

use crate::attribute::{Attribute, AttributeValue};
use crate::error::TreeError;

/// A typed index into the document's node arena.
///
/// `NodeId` is a newtype over `NonZeroU32`, meaning it can never be zero
/// and `Option<NodeId>` has the same size as `NodeId` (niche optimization).
///
/// An id is only meaningful for the `Document` that allocated it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct NodeId(NonZeroU32);

impl NodeId {
    /// Creates a `NodeId` from a raw index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is 0.
    #[allow(clippy::expect_used, clippy::cast_possible_truncation)]
    fn from_index(index: usize) -> Self {
        Self(NonZeroU32::new(index as u32).expect("NodeId index must be non-zero"))
    }

    /// Returns the raw index as a `usize` for indexing into the arena.
    fn as_index(self) -> usize {
        self.0.get() as usize
    }

    /// Converts this `NodeId` to a raw `u32`.
    ///
    /// The returned value is always non-zero (valid `NodeId`s start at 1).
    #[must_use]
    pub fn into_raw(self) -> u32 {
        self.0.get()
    }

    /// Creates a `NodeId` from a raw `u32`, if non-zero.
    #[must_use]
    pub fn from_raw(raw: u32) -> Option<Self> {
        NonZeroU32::new(raw).map(Self)
    }
}

/// Storage for a single node in the document arena.
#[derive(Debug, Clone)]
pub struct NodeData {
    /// What kind of node this is and its payload.
    pub kind: NodeKind,
    /// Parent node, if any. The document root and detached nodes have none.
    pub parent: Option<NodeId>,
    /// First child node.
    pub first_child: Option<NodeId>,
    /// Last child node (for O(1) append).
    pub last_child: Option<NodeId>,
    /// Next sibling.
    pub next_sibling: Option<NodeId>,
    /// Previous sibling.
    pub prev_sibling: Option<NodeId>,
}

impl NodeData {
    fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            parent: None,
            first_child: None,
            last_child: None,
            next_sibling: None,
            prev_sibling: None,
        }
    }
}

/// An HTML/XML document tree.
///
/// The `Document` owns all nodes in an arena. Navigation goes through
/// `&Document`, construction through `&mut Document`.
///
/// # Examples
///
/// ```
/// use xpath_locator::Document;
///
/// let mut doc = Document::new();
/// let html = doc.create_element("html");
/// let body = doc.create_element("body");
/// doc.append_child(doc.root(), html).unwrap();
/// doc.append_child(html, body).unwrap();
///
/// assert_eq!(doc.root_element(), Some(html));
/// assert_eq!(doc.node_name(body), Some("body"));
/// ```
#[derive(Debug, Clone)]
pub struct Document {
    /// The node arena. Index 0 is unused (placeholder for `NonZeroU32`).
    nodes: Vec<NodeData>,
    /// The document root node id (the Root node, not the root element).
    root: NodeId,
}

impl Document {
    /// Creates a new empty document containing only its root node.
    #[must_use]
    pub fn new() -> Self {
        let mut nodes = Vec::with_capacity(64);
        // Index 0: placeholder (NodeId uses NonZeroU32)
        nodes.push(NodeData::new(NodeKind::Root));
        // Index 1: the document root node
        nodes.push(NodeData::new(NodeKind::Root));
        Self {
            nodes,
            root: NodeId::from_index(1),
        }
    }

    /// Returns the document root node id.
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Returns the first element child of the root, if any.
    #[must_use]
    pub fn root_element(&self) -> Option<NodeId> {
        self.children(self.root)
            .find(|&id| matches!(self.node(id).kind, NodeKind::Element { .. }))
    }

    /// Returns the `NodeData` for the given node, or `None` if `id` does not
    /// belong to this document's arena.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&NodeData> {
        // Slot 0 is the placeholder, which NonZeroU32 already excludes.
        self.nodes.get(id.as_index())
    }

    /// Returns a reference to the `NodeData` for the given node.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not refer to a node of this document.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.as_index()]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut NodeData {
        &mut self.nodes[id.as_index()]
    }

    /// Returns the kind of a node.
    #[must_use]
    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.node(id).kind
    }

    /// Returns the tag name of an element, or the declared name of a doctype.
    #[must_use]
    pub fn node_name(&self, id: NodeId) -> Option<&str> {
        match &self.node(id).kind {
            NodeKind::Element { name, .. } | NodeKind::Doctype { name } => Some(name),
            NodeKind::Root | NodeKind::Text { .. } | NodeKind::Comment { .. } => None,
        }
    }

    /// Returns the content of a text or comment node.
    #[must_use]
    pub fn node_text(&self, id: NodeId) -> Option<&str> {
        match &self.node(id).kind {
            NodeKind::Text { content } | NodeKind::Comment { content } => Some(content),
            NodeKind::Root | NodeKind::Element { .. } | NodeKind::Doctype { .. } => None,
        }
    }

    /// Returns the attributes of an element node.
    ///
    /// Returns an empty slice for non-element nodes and for ids outside this
    /// document.
    #[must_use]
    pub fn attributes(&self, id: NodeId) -> &[Attribute] {
        match self.get(id).map(|data| &data.kind) {
            Some(NodeKind::Element { attributes, .. }) => attributes,
            _ => &[],
        }
    }

    /// Returns the stored value of an attribute by name.
    ///
    /// Use [`read_attribute`](crate::attribute::read_attribute) to get the
    /// serialized string form instead.
    #[must_use]
    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&AttributeValue> {
        self.attributes(id)
            .iter()
            .find(|a| a.name == name)
            .map(|a| &a.value)
    }

    /// Sets an attribute on an element, replacing any previous value stored
    /// under the same name. Does nothing for non-element nodes.
    pub fn set_attribute(
        &mut self,
        id: NodeId,
        name: impl Into<String>,
        value: impl Into<AttributeValue>,
    ) {
        let NodeKind::Element { attributes, .. } = &mut self.node_mut(id).kind else {
            return;
        };
        let name = name.into();
        let value = value.into();
        match attributes.iter_mut().find(|a| a.name == name) {
            Some(existing) => existing.value = value,
            None => attributes.push(Attribute { name, value }),
        }
    }

    // --- Navigation ---

    /// Returns the parent of a node.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    /// Returns the first child of a node.
    #[must_use]
    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).first_child
    }

    /// Returns the last child of a node.
    #[must_use]
    pub fn last_child(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).last_child
    }

    /// Returns the next sibling of a node.
    #[must_use]
    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).next_sibling
    }

    /// Returns the previous sibling of a node.
    #[must_use]
    pub fn prev_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).prev_sibling
    }

    /// Returns an iterator over the children of a node.
    #[must_use]
    pub fn children(&self, id: NodeId) -> Children<'_> {
        Children {
            doc: self,
            next: self.node(id).first_child,
        }
    }

    /// Returns an iterator over all descendants of a node (depth-first,
    /// document order).
    #[must_use]
    pub fn descendants(&self, id: NodeId) -> Descendants<'_> {
        Descendants {
            doc: self,
            root: id,
            next: self.first_child(id),
        }
    }

    // --- Construction ---

    /// Allocates a new detached node in the arena and returns its `NodeId`.
    pub fn create_node(&mut self, kind: NodeKind) -> NodeId {
        let index = self.nodes.len();
        self.nodes.push(NodeData::new(kind));
        NodeId::from_index(index)
    }

    /// Allocates a detached element with no attributes.
    pub fn create_element(&mut self, name: impl Into<String>) -> NodeId {
        self.create_node(NodeKind::Element {
            name: name.into(),
            attributes: Vec::new(),
        })
    }

    /// Allocates a detached text node.
    pub fn create_text(&mut self, content: impl Into<String>) -> NodeId {
        self.create_node(NodeKind::Text {
            content: content.into(),
        })
    }

    /// Allocates a detached comment node.
    pub fn create_comment(&mut self, content: impl Into<String>) -> NodeId {
        self.create_node(NodeKind::Comment {
            content: content.into(),
        })
    }

    /// Allocates a detached doctype node.
    pub fn create_doctype(&mut self, name: impl Into<String>) -> NodeId {
        self.create_node(NodeKind::Doctype { name: name.into() })
    }

    /// Checks that `child` may be linked under `parent`.
    fn check_link(&self, parent: NodeId, child: NodeId) -> Result<(), TreeError> {
        if !self.node(parent).kind.is_container() {
            return Err(TreeError::NotAContainer { parent });
        }
        if self.node(child).parent.is_some() {
            return Err(TreeError::AlreadyAttached { child });
        }
        // The document root is never a child.
        if child == self.root {
            return Err(TreeError::Cycle { parent, child });
        }
        let mut cursor = Some(parent);
        while let Some(current) = cursor {
            if current == child {
                return Err(TreeError::Cycle { parent, child });
            }
            cursor = self.node(current).parent;
        }
        Ok(())
    }

    /// Appends a child node to the end of a parent's child list.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError`] if `parent` cannot hold children, `child` already
    /// has a parent, or the link would create a cycle.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), TreeError> {
        self.check_link(parent, child)?;

        self.node_mut(child).parent = Some(parent);

        if let Some(last) = self.node(parent).last_child {
            self.node_mut(last).next_sibling = Some(child);
            self.node_mut(child).prev_sibling = Some(last);
            self.node_mut(parent).last_child = Some(child);
        } else {
            self.node_mut(parent).first_child = Some(child);
            self.node_mut(parent).last_child = Some(child);
        }
        Ok(())
    }

    /// Inserts `new_child` before `reference` in the reference's parent.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::Detached`] if `reference` has no parent, or any
    /// error [`append_child`](Self::append_child) would return.
    pub fn insert_before(&mut self, reference: NodeId, new_child: NodeId) -> Result<(), TreeError> {
        let parent = self
            .node(reference)
            .parent
            .ok_or(TreeError::Detached { reference })?;
        self.check_link(parent, new_child)?;

        self.node_mut(new_child).parent = Some(parent);

        if let Some(prev) = self.node(reference).prev_sibling {
            self.node_mut(prev).next_sibling = Some(new_child);
            self.node_mut(new_child).prev_sibling = Some(prev);
        } else {
            self.node_mut(parent).first_child = Some(new_child);
        }

        self.node_mut(new_child).next_sibling = Some(reference);
        self.node_mut(reference).prev_sibling = Some(new_child);
        Ok(())
    }

    /// Prepends a child node as the first child of a parent.
    ///
    /// # Errors
    ///
    /// Same as [`append_child`](Self::append_child).
    pub fn prepend_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), TreeError> {
        match self.first_child(parent) {
            Some(first) => {
                self.check_link(parent, child)?;
                self.insert_before(first, child)
            }
            None => self.append_child(parent, child),
        }
    }

    /// Detaches a node from its parent. The node stays allocated in the arena
    /// together with its own subtree, but is no longer reachable from the
    /// root. Detaching a node without a parent is a no-op.
    pub fn detach(&mut self, id: NodeId) {
        let Some(parent) = self.node(id).parent else {
            return;
        };

        let prev = self.node(id).prev_sibling;
        let next = self.node(id).next_sibling;

        match prev {
            Some(p) => self.node_mut(p).next_sibling = next,
            None => self.node_mut(parent).first_child = next,
        }

        match next {
            Some(n) => self.node_mut(n).prev_sibling = prev,
            None => self.node_mut(parent).last_child = prev,
        }

        self.node_mut(id).parent = None;
        self.node_mut(id).prev_sibling = None;
        self.node_mut(id).next_sibling = None;
    }

    /// Returns the total number of nodes in the arena, attached or not.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len() - 1 // subtract placeholder at index 0
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

// --- Iterators ---

/// Iterator over the children of a node.
pub struct Children<'a> {
    doc: &'a Document,
    next: Option<NodeId>,
}

impl Iterator for Children<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self.doc.node(current).next_sibling;
        Some(current)
    }
}

/// Depth-first iterator over all descendants of a node.
pub struct Descendants<'a> {
    doc: &'a Document,
    root: NodeId,
    next: Option<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;

        if let Some(child) = self.doc.first_child(current) {
            self.next = Some(child);
            return Some(current);
        }

        if let Some(sibling) = self.doc.next_sibling(current) {
            self.next = Some(sibling);
            return Some(current);
        }

        // Walk up to find an ancestor with a next sibling
        let mut ancestor = self.doc.parent(current);
        while let Some(anc) = ancestor {
            if anc == self.root {
                self.next = None;
                return Some(current);
            }
            if let Some(sibling) = self.doc.next_sibling(anc) {
                self.next = Some(sibling);
                return Some(current);
            }
            ancestor = self.doc.parent(anc);
        }

        self.next = None;
        Some(current)
    }
}
