//! The node tree the engine produces and converters consume.

use serde::Serialize;

use crate::attributes::ElementAttributes;

/// A parsed document: the ordered sequence of top-level block elements.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Document {
    pub elements: Vec<Element>,
}

/// An element of the document tree: a tag name, an ordered attribute
/// map, and either literal text or nested elements.
///
/// An element with an empty name is a raw text leaf; serializers emit
/// its text without any surrounding tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Element {
    pub name: String,
    #[serde(skip_serializing_if = "ElementAttributes::is_empty")]
    pub attributes: ElementAttributes,
    pub content: Content,
}

/// Element content. Text and Children are mutually exclusive: attribute
/// injection only ever rewrites the remaining text, it never fabricates
/// children from text or vice versa.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Content {
    Text(String),
    Children(Vec<Element>),
}

impl Element {
    /// A named element with literal text content.
    #[must_use]
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: ElementAttributes::new(),
            content: Content::Text(text.into()),
        }
    }

    /// A named element containing nested elements.
    #[must_use]
    pub fn container(name: impl Into<String>, children: Vec<Element>) -> Self {
        Self {
            name: name.into(),
            attributes: ElementAttributes::new(),
            content: Content::Children(children),
        }
    }

    /// A raw text leaf.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::new("", text)
    }

    #[must_use]
    pub fn is_text_leaf(&self) -> bool {
        self.name.is_empty()
    }

    /// The element's literal text, if its content is [`Content::Text`].
    #[must_use]
    pub fn text_content(&self) -> Option<&str> {
        match &self.content {
            Content::Text(text) => Some(text),
            Content::Children(_) => None,
        }
    }

    /// The element's nested elements, if its content is
    /// [`Content::Children`].
    #[must_use]
    pub fn children(&self) -> Option<&[Element]> {
        match &self.content {
            Content::Text(_) => None,
            Content::Children(children) => Some(children),
        }
    }
}
