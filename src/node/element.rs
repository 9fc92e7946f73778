use std::ops::AddAssign;
use tracing::{debug, instrument};

use super::{Container, Node, Render, TextLeaf};
use crate::{
    attributes::{AttrValue, Attributes},
    error::Result,
    render::{render_self_closing, RenderConfig},
};

/// A tag that may carry leading text or be self-closing.
///
/// Non-empty text is rendered as the first child line. A self-closing element
/// renders as `<name attrs/>` and ignores both its text and its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    inner: Container,
    self_closing: bool,
    text: String,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            inner: Container::new(name),
            self_closing: false,
            text: String::new(),
        }
    }

    pub fn attr(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.set_attr(key, value);
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.set_text(text);
        self
    }

    pub fn self_closing(mut self, self_closing: bool) -> Self {
        self.self_closing = self_closing;
        self
    }

    pub fn config(mut self, config: RenderConfig) -> Self {
        self.inner = self.inner.config(config);
        self
    }

    pub fn set_attr(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) {
        self.inner.set_attr(key, value);
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn set_self_closing(&mut self, self_closing: bool) {
        self.self_closing = self_closing;
    }

    pub fn append(&mut self, child: impl Into<Node>) -> &mut Self {
        self.inner.append(child);
        self
    }

    pub fn name(&self) -> &str {
        self.inner.name()
    }

    pub fn attributes(&self) -> &Attributes {
        self.inner.attributes()
    }

    pub fn children(&self) -> &[Node] {
        self.inner.children()
    }

    pub fn text_content(&self) -> &str {
        &self.text
    }

    pub fn is_self_closing(&self) -> bool {
        self.self_closing
    }
}

impl Render for Element {
    fn rendered(&self) -> Option<&str> {
        self.inner.rendered()
    }

    #[instrument(level = "trace", skip(self), fields(tag = %self.name()))]
    fn render(&mut self) -> Result<()> {
        if self.self_closing {
            let rendered = render_self_closing(self.inner.name(), self.inner.attributes());
            debug!(tag = %self.name(), "Rendered self-closing tag");
            self.inner.set_rendered(rendered);
            return Ok(());
        }

        if self.text.is_empty() {
            return self.inner.render_with_leading(None);
        }

        // The text leaf only lives for this render so repeated calls stay identical.
        let text = TextLeaf::new(self.text.as_str());
        self.inner.render_with_leading(Some(&text))
    }
}

impl<N: Into<Node>> AddAssign<N> for Element {
    fn add_assign(&mut self, child: N) {
        self.append(child);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_becomes_first_child_line() {
        let mut h1 = Element::new("h1").attr("class", ["main-text"]).text("Test");
        assert!(h1.render().is_ok());
        assert_eq!(
            h1.rendered(),
            Some("<h1 class=\"main-text\">\n    Test\n</h1>")
        );
    }

    #[test]
    fn text_precedes_children() {
        let mut strong = Element::new("strong").text("bold");
        assert!(strong.render().is_ok());

        let mut p = Element::new("p").text("lead");
        p += strong;
        assert!(p.render().is_ok());
        assert_eq!(
            p.rendered(),
            Some("<p>\n    lead\n    <strong>\n        bold\n    </strong>\n</p>")
        );
    }

    #[test]
    fn text_is_not_duplicated_by_a_second_render() {
        let mut title = Element::new("title").text("hello");
        assert!(title.render().is_ok());
        let first = title.rendered().map(str::to_string);
        assert!(title.render().is_ok());

        assert_eq!(title.rendered().map(str::to_string), first);
        assert!(title.children().is_empty());
    }

    #[test]
    fn self_closing_ignores_text_and_children() {
        let mut img = Element::new("img")
            .attr("src", "/icon.png")
            .text("ignored")
            .self_closing(true);
        img += "also ignored";

        assert!(img.render().is_ok());
        assert_eq!(img.rendered(), Some(r#"<img src="/icon.png"/>"#));
    }

    #[test]
    fn self_closing_without_attributes() {
        let mut br = Element::new("br").self_closing(true);
        assert!(br.render().is_ok());
        assert_eq!(br.rendered(), Some("<br/>"));
    }

    #[test]
    fn self_closing_ignores_unrendered_children() {
        let mut hr = Element::new("hr").self_closing(true);
        hr += Container::new("div");
        assert!(hr.render().is_ok());
    }

    #[test]
    fn setters_update_accessors() {
        let mut img = Element::new("img");
        assert!(!img.is_self_closing());
        assert_eq!(img.text_content(), "");

        img.set_self_closing(true);
        img.set_text("alt text");
        assert!(img.is_self_closing());
        assert_eq!(img.text_content(), "alt text");
    }

    #[test]
    fn empty_element_renders_on_one_line() {
        let mut p = Element::new("p");
        assert!(p.render().is_ok());
        assert_eq!(p.rendered(), Some("<p></p>"));
    }

    #[test]
    fn multiline_text_is_indented_line_by_line() {
        let mut pre = Element::new("pre").text("one\ntwo");
        assert!(pre.render().is_ok());
        assert_eq!(pre.rendered(), Some("<pre>\n    one\n    two\n</pre>"));
    }
}
