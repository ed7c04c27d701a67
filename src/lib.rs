//! # xpath-locator
//!
//! Computes canonical `XPath` expressions that locate nodes in an in-memory
//! HTML/XML document tree.
//!
//! The crate has two halves:
//!
//! - [`attribute`]: normalizes stored attribute values (booleans, numbers,
//!   token lists) to the string they serialize to.
//! - [`xpath`]: finds a node's ancestor chain and renders it as an absolute
//!   path, or as an `//*[@id="..."]` shortcut for elements with an id.
//!
//! The [`tree`] module provides the arena-backed [`Document`] both halves
//! read. Parsing markup into a tree is left to the caller.
//!
//! ## Quick Start
//!
//! ```
//! use xpath_locator::{get_xpath, Document};
//!
//! let mut doc = Document::new();
//! let html = doc.create_element("html");
//! let body = doc.create_element("body");
//! let first = doc.create_element("p");
//! let second = doc.create_element("p");
//! let text = doc.create_text("Hello");
//! doc.append_child(doc.root(), html).unwrap();
//! doc.append_child(html, body).unwrap();
//! doc.append_child(body, first).unwrap();
//! doc.append_child(body, second).unwrap();
//! doc.append_child(second, text).unwrap();
//!
//! assert_eq!(get_xpath(&doc, doc.root()).as_deref(), Some("/"));
//! assert_eq!(
//!     get_xpath(&doc, text).as_deref(),
//!     Some("/html/body/p[2]/text()[1]")
//! );
//! ```

pub mod attribute;
pub mod error;
pub mod tree;
pub mod xpath;

// Re-export primary types at the crate root for convenience.
pub use attribute::{read_attribute, AttributeValue};
pub use error::TreeError;
pub use tree::{Document, NodeId, NodeKind};
pub use xpath::{get_xpath, get_xpath_with_options, XPathOptions};
