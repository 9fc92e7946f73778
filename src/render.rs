//! The rendering engine shared by every tag-like node.
//!
//! A tag never renders its children itself. Each child is expected to have
//! rendered already (normally when its own scope closed), and the parent only
//! joins those strings, indents them one level and wraps them in its open and
//! close tags.

use tracing::debug;

use crate::{
    attributes::{format_attributes, Attributes},
    error::{RenderError, Result},
    node::Render,
};

/// Configuration options for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    /// Number of spaces added in front of each child line
    pub indent_spaces: usize,
    /// Fail when a child has not been rendered instead of treating it as empty
    pub strict: bool,
}

/// Default configuration for rendering
impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            indent_spaces: 4,
            strict: true,
        }
    }
}

/// Prefixes every line of `text` with `spaces` spaces.
///
/// Lines made only of whitespace are left untouched and existing line endings
/// are preserved, so an empty string stays empty.
pub fn indent(text: &str, spaces: usize) -> String {
    let prefix = " ".repeat(spaces);
    let mut result = String::with_capacity(text.len());

    for line in text.split_inclusive('\n') {
        if !line.trim().is_empty() {
            result.push_str(&prefix);
        }
        result.push_str(line);
    }

    result
}

/// Self-closing form: `<name attrs/>`.
pub fn render_self_closing(name: &str, attributes: &Attributes) -> String {
    format!("<{}/>", format_attributes(name, attributes))
}

/// Renders a tag around its already-rendered children.
///
/// `children` is consumed in order; the caller decides what goes into it,
/// which lets an element put its text in front without touching its stored
/// child list.
pub fn render_tag<'a, I>(
    name: &str,
    attributes: &Attributes,
    children: I,
    config: &RenderConfig,
) -> Result<String>
where
    I: IntoIterator<Item = &'a dyn Render>,
{
    let open = format!("<{}>", format_attributes(name, attributes));
    let close = format!("</{}>", name);

    let mut parts = Vec::new();
    for (index, child) in children.into_iter().enumerate() {
        match child.rendered() {
            Some(rendered) => parts.push(rendered),
            None if config.strict => {
                return Err(RenderError::UnrenderedChild {
                    parent: name.to_string(),
                    index,
                }
                .into());
            }
            None => {
                debug!(tag = name, index, "Unrendered child treated as empty");
                parts.push("");
            }
        }
    }

    let inner = indent(&parts.join("\n"), config.indent_spaces);

    if inner.is_empty() {
        Ok(format!("{}{}", open, close))
    } else {
        Ok(format!("{}\n{}\n{}", open, inner, close))
    }
}
