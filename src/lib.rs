//! tagscope: a small scoped builder for indented HTML markup
//!
//! This crate provides functionality to:
//! - Build a tree of tags inside nested closures
//! - Render each tag when its scope closes, indenting children four spaces
//! - Write the finished document to standard output or a file
//!
//! Attribute values and text are emitted verbatim. Nothing is escaped and tag
//! nesting is not validated.
//!
//! # Examples
//! ```
//! use tagscope::{Container, Document, Element, Render, Scoped};
//!
//! fn example() -> tagscope::Result<()> {
//!     let doc = Document::to_file("page.html").build(|doc| {
//!         *doc += Container::new("body").build(|body| {
//!             *body += Element::new("img")
//!                 .self_closing(true)
//!                 .attr("src", "/icon.png")
//!                 .build(|_| Ok(()))?;
//!             Ok(())
//!         })?;
//!         Ok(())
//!     })?;
//!     println!("{}", doc.rendered().unwrap_or_default());
//!     Ok(())
//! }
//! ```

use tracing::{debug, instrument};

pub mod attributes;
pub mod document;
pub mod error;
pub mod node;
pub mod render;
pub mod sample;
pub mod scope;
pub mod test_utils;
pub mod utils;

// Re-exports
pub use attributes::{format_attributes, AttrValue, Attributes};
pub use document::{Destination, Document};
pub use error::{HtmlError, HtmlErrorKind, IoError, RenderError, Result};
pub use node::{Container, Element, Node, Render, TextLeaf};
pub use render::RenderConfig;
pub use scope::Scoped;

/// Renders `node` and returns a copy of its markup.
#[instrument(skip(node))]
pub fn render_to_string<N: Render>(node: &mut N) -> Result<String> {
    node.render()?;
    let rendered = node.rendered().unwrap_or_default().to_string();
    debug!(bytes = rendered.len(), "Rendered to string");
    Ok(rendered)
}
