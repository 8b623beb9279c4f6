//! Element records: the serialization-ready form of a drawn shape.
//!
//! Once a shape passes the bounds check, the [`Drawing`](crate::drawing::Drawing)
//! keeps only its [`ElementRecord`]. The original shape and style are not
//! retained, so a record is exactly what will be written: a tag and an
//! ordered attribute list.

use crate::shape::ShapeKind;

/// A tagged, ordered attribute list for one SVG element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementRecord {
    kind: ShapeKind,
    attributes: Vec<(&'static str, String)>,
}

impl ElementRecord {
    /// Creates a record with no attributes.
    pub fn new(kind: ShapeKind) -> Self {
        Self {
            kind,
            attributes: Vec::new(),
        }
    }

    /// Appends an attribute (builder style). Attributes are written in the
    /// order they are added.
    pub fn with_attribute(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attributes.push((name, value.into()));
        self
    }

    /// Returns the kind of shape this record was made from.
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Returns the SVG tag name.
    pub fn tag_name(&self) -> &'static str {
        self.kind.tag_name()
    }

    /// Returns all attributes in write order.
    pub fn attributes(&self) -> &[(&'static str, String)] {
        &self.attributes
    }

    /// Looks up an attribute value by name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }
}
