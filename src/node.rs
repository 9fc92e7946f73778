mod container;
mod element;
mod text;

pub use self::{container::Container, element::Element, text::TextLeaf};
use crate::error::Result;

/// Anything that can produce a rendered string.
///
/// `render` computes and stores the output; `rendered` reads it back and is
/// `None` until the first successful `render`.
pub trait Render {
    fn rendered(&self) -> Option<&str>;
    fn render(&mut self) -> Result<()>;
}

/// A child of a tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Text(TextLeaf),
    Container(Container),
    Element(Element),
}

impl Node {
    /// Tag name, or `None` for text.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Text(_) => None,
            Self::Container(container) => Some(container.name()),
            Self::Element(element) => Some(element.name()),
        }
    }
}

impl Render for Node {
    fn rendered(&self) -> Option<&str> {
        match self {
            Self::Text(text) => text.rendered(),
            Self::Container(container) => container.rendered(),
            Self::Element(element) => element.rendered(),
        }
    }

    fn render(&mut self) -> Result<()> {
        match self {
            Self::Text(text) => text.render(),
            Self::Container(container) => container.render(),
            Self::Element(element) => element.render(),
        }
    }
}

impl From<TextLeaf> for Node {
    fn from(text: TextLeaf) -> Self {
        Self::Text(text)
    }
}

impl From<Container> for Node {
    fn from(container: Container) -> Self {
        Self::Container(container)
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Self::Text(TextLeaf::new(text))
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Self::Text(TextLeaf::new(text))
    }
}
