//! A lightweight XML element tree.
//!
//! The document assembler builds the whole section tree in memory so
//! empty sections can be pruned before anything is serialized. Writing
//! goes through `quick-xml` with two-space indentation and a UTF-8
//! declaration.

use std::io::{Cursor, Write};

use fabrica_types::{FabricaError, FabricaResult};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

/// One XML element: name, attributes, optional text, children.
#[derive(Debug, Clone, PartialEq)]
pub struct XmlElement {
    name: String,
    attrs: Vec<(String, String)>,
    text: Option<String>,
    children: Vec<XmlElement>,
}

impl XmlElement {
    /// Creates an element with no attributes, text, or children.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attrs: Vec::new(),
            text: None,
            children: Vec::new(),
        }
    }

    /// Builder-style attribute append.
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((key.into(), value.into()));
        self
    }

    /// Builder-style text content.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Builder-style child append.
    pub fn with_child(mut self, child: XmlElement) -> Self {
        self.children.push(child);
        self
    }

    /// Appends an attribute.
    pub fn set_attr(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attrs.push((key.into(), value.into()));
    }

    /// Appends a child element.
    pub fn push(&mut self, child: XmlElement) {
        self.children.push(child);
    }

    /// Appends a child only if it has children of its own; used for
    /// empty-section pruning.
    pub fn push_if_nonempty(&mut self, child: XmlElement) {
        if !child.children.is_empty() {
            self.children.push(child);
        }
    }

    /// Element name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attribute value by key.
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Text content, if any.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Child elements in document order.
    pub fn children(&self) -> &[XmlElement] {
        &self.children
    }

    /// True if the element has at least one child.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// First child with the given name.
    pub fn find(&self, name: &str) -> Option<&XmlElement> {
        self.children.iter().find(|c| c.name == name)
    }

    /// All children with the given name, in document order.
    pub fn find_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlElement> {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// Serializes the tree to `writer`, preceded by an XML
    /// declaration.
    pub fn write_document<W: Write>(&self, writer: W) -> FabricaResult<()> {
        let mut xml = Writer::new_with_indent(writer, b' ', 2);
        xml.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(|e| FabricaError::Xml(e.to_string()))?;
        self.write_element(&mut xml)
    }

    /// Serializes the tree to a string.
    pub fn to_document_string(&self) -> FabricaResult<String> {
        let mut buffer = Vec::new();
        self.write_document(Cursor::new(&mut buffer))?;
        String::from_utf8(buffer).map_err(|e| FabricaError::Xml(e.to_string()))
    }

    fn write_element<W: Write>(&self, xml: &mut Writer<W>) -> FabricaResult<()> {
        let mut start = BytesStart::new(self.name.as_str());
        for (key, value) in &self.attrs {
            start.push_attribute((key.as_str(), value.as_str()));
        }

        if self.children.is_empty() && self.text.is_none() {
            xml.write_event(Event::Empty(start))
                .map_err(|e| FabricaError::Xml(e.to_string()))?;
            return Ok(());
        }

        xml.write_event(Event::Start(start))
            .map_err(|e| FabricaError::Xml(e.to_string()))?;
        if let Some(text) = &self.text {
            xml.write_event(Event::Text(BytesText::new(text)))
                .map_err(|e| FabricaError::Xml(e.to_string()))?;
        }
        for child in &self.children {
            child.write_element(xml)?;
        }
        xml.write_event(Event::End(BytesEnd::new(self.name.as_str())))
            .map_err(|e| FabricaError::Xml(e.to_string()))
    }
}

/// Joins items with commas, the schema's list separator.
pub(crate) fn comma_join<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: ToString,
{
    items
        .into_iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_element_serializes_self_closing() {
        let el = XmlElement::new("fix").with_attr("bc", "x");
        let s = el.to_document_string().unwrap();
        assert!(s.contains("<fix bc=\"x\"/>"));
    }

    #[test]
    fn text_and_children_round_trip() {
        let el = XmlElement::new("root")
            .with_child(XmlElement::new("node").with_attr("id", "1").with_text("0,0,0"));
        let s = el.to_document_string().unwrap();
        assert!(s.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(s.contains("<node id=\"1\">0,0,0</node>"));
    }

    #[test]
    fn push_if_nonempty_drops_empty_sections() {
        let mut root = XmlElement::new("root");
        root.push_if_nonempty(XmlElement::new("Boundary"));
        assert!(!root.has_children());

        let mut boundary = XmlElement::new("Boundary");
        boundary.push(XmlElement::new("fix"));
        root.push_if_nonempty(boundary);
        assert!(root.find("Boundary").is_some());
    }

    #[test]
    fn comma_join_formats_decimals() {
        assert_eq!(comma_join([1.0f64, 2.5, 3.0]), "1,2.5,3");
        assert_eq!(comma_join([1u32, 2, 3]), "1,2,3");
    }
}
