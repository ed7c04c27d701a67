//! Attribute values and their rendered string form.
//!
//! HTML trees built by parsers and templating layers do not always store
//! attribute values as strings: presence-only attributes such as `hidden`
//! are booleans, token lists such as `class` are sequences, and numeric
//! attributes may be numbers. [`AttributeValue`] models those shapes as a
//! closed enum, and [`read_attribute`] normalizes a value to exactly the text
//! that would appear in serialized markup (or `None` when the attribute would
//! be omitted).
//!
//! # Examples
//!
//! ```
//! use xpath_locator::attribute::{read_attribute, AttributeValue, Primitive};
//! use xpath_locator::Document;
//!
//! let mut doc = Document::new();
//! let input = doc.create_element("input");
//! doc.set_attribute(input, "disabled", true);
//! doc.set_attribute(
//!     input,
//!     "class",
//!     AttributeValue::List(vec![Primitive::from("a"), Primitive::from("b")]),
//! );
//!
//! assert_eq!(read_attribute(&doc, input, "disabled").as_deref(), Some(""));
//! assert_eq!(read_attribute(&doc, input, "class").as_deref(), Some("a b"));
//! assert_eq!(read_attribute(&doc, input, "value"), None);
//! ```

use std::fmt;

use crate::tree::{Document, NodeId};

/// A named attribute on an element.
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    /// The attribute name, e.g., `"id"`.
    pub name: String,
    /// The attribute value in its stored representation.
    pub value: AttributeValue,
}

impl Attribute {
    /// Creates an attribute from a name and anything convertible to a value.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A single item of a multi-valued attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// A string token.
    String(String),
    /// A numeric token.
    Number(f64),
    /// A boolean token, rendered as `true` or `false`.
    Bool(bool),
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            Self::Number(n) => f.write_str(&format_number(*n)),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for Primitive {
    fn from(s: &str) -> Self {
        Self::String(s.to_owned())
    }
}

impl From<String> for Primitive {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<f64> for Primitive {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for Primitive {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<bool> for Primitive {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

/// The stored value of an attribute.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AttributeValue {
    /// Explicitly unset. Serializes as if the attribute were absent.
    #[default]
    Unset,
    /// A presence-only attribute: `true` renders as `""`, `false` is omitted.
    Bool(bool),
    /// A plain string value.
    String(String),
    /// A numeric value.
    Number(f64),
    /// A space-separated token list, e.g., `class`.
    List(Vec<Primitive>),
}

impl AttributeValue {
    /// Returns the string this value serializes to, or `None` if the
    /// attribute would be omitted from markup.
    #[must_use]
    pub fn to_attribute_string(&self) -> Option<String> {
        match self {
            Self::Unset | Self::Bool(false) => None,
            Self::Bool(true) => Some(String::new()),
            Self::String(s) => Some(s.clone()),
            Self::Number(n) => Some(format_number(*n)),
            Self::List(items) => Some(
                items
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(" "),
            ),
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_owned())
    }
}

impl From<String> for AttributeValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<bool> for AttributeValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<f64> for AttributeValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for AttributeValue {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<Vec<Primitive>> for AttributeValue {
    fn from(items: Vec<Primitive>) -> Self {
        Self::List(items)
    }
}

impl<T: Into<AttributeValue>> From<Option<T>> for AttributeValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Unset, Into::into)
    }
}

/// Reads an attribute of `node` as it would appear in serialized markup.
///
/// Returns `None` if `node` is not an element, does not exist in `doc`, has
/// no attribute called `name`, or holds a value that serializes to nothing
/// ([`AttributeValue::Unset`] or `false`).
#[must_use]
pub fn read_attribute(doc: &Document, node: NodeId, name: &str) -> Option<String> {
    doc.attribute(node, name)
        .and_then(AttributeValue::to_attribute_string)
}

/// Formats an `f64` in plain decimal notation.
///
/// - NaN produces `"NaN"`
/// - Infinities produce `"Infinity"` and `"-Infinity"`
/// - Negative zero produces `"0"`
/// - Integral values have no decimal point (`1.0` becomes `"1"`)
/// - Anything else uses the shortest representation that round-trips
#[must_use]
#[allow(clippy::float_cmp, clippy::cast_possible_truncation)]
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_owned();
    }
    if n.is_infinite() {
        return if n.is_sign_positive() {
            "Infinity".to_owned()
        } else {
            "-Infinity".to_owned()
        };
    }
    if n == 0.0 {
        return "0".to_owned();
    }
    if n.fract() == 0.0 && n.abs() < 1e18 {
        return format!("{}", n as i64);
    }
    format!("{n}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element_with(value: AttributeValue) -> (Document, NodeId) {
        let mut doc = Document::new();
        let div = doc.create_element("div");
        doc.set_attribute(div, "foo", value);
        (doc, div)
    }

    #[test]
    fn test_missing_attribute() {
        let mut doc = Document::new();
        let div = doc.create_element("div");
        assert_eq!(read_attribute(&doc, div, "foo"), None);
    }

    #[test]
    fn test_true_is_empty_string() {
        let (doc, div) = element_with(AttributeValue::Bool(true));
        assert_eq!(read_attribute(&doc, div, "foo").as_deref(), Some(""));
    }

    #[test]
    fn test_false_is_absent() {
        let (doc, div) = element_with(AttributeValue::Bool(false));
        assert_eq!(read_attribute(&doc, div, "foo"), None);
    }

    #[test]
    fn test_unset_is_absent() {
        let (doc, div) = element_with(AttributeValue::Unset);
        assert_eq!(read_attribute(&doc, div, "foo"), None);

        let (doc, div) = element_with(None::<&str>.into());
        assert_eq!(read_attribute(&doc, div, "foo"), None);
    }

    #[test]
    fn test_number() {
        let (doc, div) = element_with(AttributeValue::Number(42.0));
        assert_eq!(read_attribute(&doc, div, "foo").as_deref(), Some("42"));
    }

    #[test]
    fn test_strings() {
        let (doc, div) = element_with("bar".into());
        assert_eq!(read_attribute(&doc, div, "foo").as_deref(), Some("bar"));

        let (doc, div) = element_with("".into());
        assert_eq!(read_attribute(&doc, div, "foo").as_deref(), Some(""));
    }

    #[test]
    fn test_list_joined_with_spaces() {
        let (doc, div) = element_with(AttributeValue::List(vec![
            Primitive::Number(42.0),
            Primitive::from("bar"),
        ]));
        assert_eq!(read_attribute(&doc, div, "foo").as_deref(), Some("42 bar"));

        let (doc, div) = element_with(AttributeValue::List(vec![
            Primitive::Bool(true),
            Primitive::Number(1.5),
        ]));
        assert_eq!(
            read_attribute(&doc, div, "foo").as_deref(),
            Some("true 1.5")
        );

        let (doc, div) = element_with(AttributeValue::List(vec![]));
        assert_eq!(read_attribute(&doc, div, "foo").as_deref(), Some(""));
    }

    #[test]
    fn test_non_element_nodes() {
        let mut doc = Document::new();
        let text = doc.create_text("hello");
        let comment = doc.create_comment("c");
        assert_eq!(read_attribute(&doc, text, "id"), None);
        assert_eq!(read_attribute(&doc, comment, "id"), None);
        assert_eq!(read_attribute(&doc, doc.root(), "id"), None);
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(-7.0), "-7");
        assert_eq!(format_number(1.5), "1.5");
        assert_eq!(format_number(0.1), "0.1");
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    }
}
