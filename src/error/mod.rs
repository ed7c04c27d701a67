//! Error types for document tree construction.
//!
//! Path resolution itself never fails loudly: a target that cannot be located
//! is reported as `None`. The only fallible operations in the crate are the
//! tree-linking methods on [`Document`](crate::Document), which refuse to build
//! a structure the resolver could not traverse (a leaf with children, a node
//! with two parents, or a cycle).

use std::fmt;

use crate::tree::NodeId;

/// The error type returned when a tree mutation would break the document's
/// structural invariants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TreeError {
    /// The parent is a text, comment, or doctype node and cannot hold children.
    NotAContainer {
        /// The node that was used as a parent.
        parent: NodeId,
    },

    /// The child is already linked into the tree. Detach it first.
    AlreadyAttached {
        /// The node that already has a parent.
        child: NodeId,
    },

    /// Linking would make a node its own ancestor.
    Cycle {
        /// The prospective parent.
        parent: NodeId,
        /// The prospective child, which is the parent itself or one of its
        /// ancestors.
        child: NodeId,
    },

    /// The reference node of an insertion has no parent to insert into.
    Detached {
        /// The reference node.
        reference: NodeId,
    },
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAContainer { parent } => {
                write!(f, "node {} cannot have children", parent.into_raw())
            }
            Self::AlreadyAttached { child } => {
                write!(f, "node {} already has a parent", child.into_raw())
            }
            Self::Cycle { parent, child } => write!(
                f,
                "appending node {} under node {} would create a cycle",
                child.into_raw(),
                parent.into_raw()
            ),
            Self::Detached { reference } => {
                write!(f, "reference node {} has no parent", reference.into_raw())
            }
        }
    }
}

impl std::error::Error for TreeError {}
