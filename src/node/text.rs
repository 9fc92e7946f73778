use super::Render;
use crate::error::Result;

/// Raw text placed between tags, emitted without escaping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextLeaf(String);

impl TextLeaf {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Render for TextLeaf {
    fn rendered(&self) -> Option<&str> {
        Some(&self.0)
    }

    // Text is its own output.
    fn render(&mut self) -> Result<()> {
        Ok(())
    }
}
