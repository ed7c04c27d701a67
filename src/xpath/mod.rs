//! `XPath` generation for document nodes.
//!
//! Given a [`Document`] and a target node, [`get_xpath`] returns an absolute
//! `XPath` 1.0 expression that selects exactly that node:
//!
//! - `"/"` for the document root itself,
//! - `//*[@id="main"]` for an element carrying a non-empty `id`,
//! - a positional path such as `/html/body/div[2]/text()[1]` otherwise.
//!
//! Nodes that are not reachable from the root (detached nodes, or ids that
//! belong to another document) produce `None`.
//!
//! # Quick Start
//!
//! ```
//! use xpath_locator::xpath::{get_xpath, get_xpath_with_options, XPathOptions};
//! use xpath_locator::Document;
//!
//! let mut doc = Document::new();
//! let html = doc.create_element("html");
//! let body = doc.create_element("body");
//! let div = doc.create_element("div");
//! doc.append_child(doc.root(), html).unwrap();
//! doc.append_child(html, body).unwrap();
//! doc.append_child(body, div).unwrap();
//!
//! assert_eq!(get_xpath(&doc, div).as_deref(), Some("/html/body/div"));
//!
//! doc.set_attribute(div, "id", "main");
//! assert_eq!(get_xpath(&doc, div).as_deref(), Some(r#"//*[@id="main"]"#));
//!
//! let opts = XPathOptions::default().ignore_id(true);
//! assert_eq!(
//!     get_xpath_with_options(&doc, div, &opts).as_deref(),
//!     Some("/html/body/div")
//! );
//! ```
//!
//! # Submodules
//!
//! - [`search`]: locates the chain of nodes from the root to the target.
//! - [`step`]: renders one chain node as a location step.

pub mod search;
pub mod step;

pub use step::Step;

use crate::attribute::read_attribute;
use crate::tree::{Document, NodeId, NodeKind};

/// Options controlling the shape of generated expressions.
///
/// ```
/// use xpath_locator::xpath::XPathOptions;
///
/// let opts = XPathOptions::default().ignore_id(true);
/// assert!(opts.ignore_id);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct XPathOptions {
    /// If true, never use the `//*[@id="..."]` shortcut and always produce
    /// the full positional path.
    pub ignore_id: bool,
}

impl XPathOptions {
    /// Enables or disables the id shortcut.
    #[must_use]
    pub fn ignore_id(mut self, yes: bool) -> Self {
        self.ignore_id = yes;
        self
    }
}

/// Returns an `XPath` expression locating `target` within `doc`, using
/// default options.
///
/// See [`get_xpath_with_options`].
#[must_use]
pub fn get_xpath(doc: &Document, target: NodeId) -> Option<String> {
    get_xpath_with_options(doc, target, &XPathOptions::default())
}

/// Returns an `XPath` expression locating `target` within `doc`.
///
/// Returns `None` if `target` is not reachable from the document root. Only
/// element, text, and comment nodes can be located; doctype nodes and nested
/// root nodes are skipped during the search.
///
/// Element steps carry a `[n]` index whenever another sibling shares their
/// tag name; `text()` and `comment()` steps are always indexed, counting only
/// siblings of the same kind.
#[must_use]
pub fn get_xpath_with_options(
    doc: &Document,
    target: NodeId,
    options: &XPathOptions,
) -> Option<String> {
    if target == doc.root() {
        return Some("/".to_owned());
    }

    let Some(chain) = search::find_chain(doc, target) else {
        log::debug!(
            "node {} is not reachable from the document root",
            target.into_raw()
        );
        return None;
    };
    log::trace!("found node {} at depth {}", target.into_raw(), chain.len());

    if !options.ignore_id && matches!(doc.kind(target), NodeKind::Element { .. }) {
        if let Some(id) = read_attribute(doc, target, "id").filter(|id| !id.is_empty()) {
            return Some(format!("//*[@id={}]", string_literal(&id)));
        }
    }

    let mut parent = doc.root();
    let mut path = String::new();
    for &node in &chain {
        let step = Step::locate(doc, parent, node)?;
        path.push('/');
        path.push_str(&step.to_string());
        parent = node;
    }

    debug_assert!(!path.is_empty(), "non-empty chain rendered no steps");
    (!path.is_empty()).then_some(path)
}

/// Quotes `value` as an `XPath` 1.0 string literal.
///
/// Double quotes are used whenever possible. A value containing `"` but no
/// `'` is wrapped in single quotes instead, and a value containing both is
/// expressed as a `concat()` of double-quoted runs and `'"'` pieces.
fn string_literal(value: &str) -> String {
    if !value.contains('"') {
        return format!("\"{value}\"");
    }
    if !value.contains('\'') {
        return format!("'{value}'");
    }
    let parts: Vec<String> = value.split('"').map(|run| format!("\"{run}\"")).collect();
    format!("concat({})", parts.join(", '\"', "))
}
