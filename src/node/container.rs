use std::ops::AddAssign;
use tracing::{debug, instrument};

use super::{Node, Render};
use crate::{
    attributes::{AttrValue, Attributes},
    error::Result,
    render::{render_tag, RenderConfig},
};

/// A generic tag holding attributes and an ordered list of children.
///
/// Children can only be appended. They are rendered in insertion order, each
/// one indented a level deeper than this tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    name: String,
    attributes: Attributes,
    children: Vec<Node>,
    rendered: Option<String>,
    config: RenderConfig,
}

impl Container {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Attributes::new(),
            children: Vec::new(),
            rendered: None,
            config: RenderConfig::default(),
        }
    }

    /// Adds an attribute; an existing key keeps its position.
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.set_attr(key, value);
        self
    }

    /// Renders with `config` instead of the defaults.
    pub fn config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    pub fn set_attr(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) {
        self.attributes.set(key, value);
    }

    /// Appends `child` after the existing children.
    pub fn append(&mut self, child: impl Into<Node>) -> &mut Self {
        self.children.push(child.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn render_config(&self) -> &RenderConfig {
        &self.config
    }

    /// Renders this tag with `leading` placed before the stored children.
    pub(crate) fn render_with_leading(&mut self, leading: Option<&dyn Render>) -> Result<()> {
        let children = leading
            .into_iter()
            .chain(self.children.iter().map(as_render));
        let rendered = render_tag(&self.name, &self.attributes, children, &self.config)?;
        debug!(tag = %self.name, bytes = rendered.len(), "Rendered tag");
        self.rendered = Some(rendered);
        Ok(())
    }

    pub(crate) fn set_rendered(&mut self, rendered: String) {
        self.rendered = Some(rendered);
    }
}

fn as_render(node: &Node) -> &dyn Render {
    node
}

impl Render for Container {
    fn rendered(&self) -> Option<&str> {
        self.rendered.as_deref()
    }

    #[instrument(level = "trace", skip(self), fields(tag = %self.name))]
    fn render(&mut self) -> Result<()> {
        self.render_with_leading(None)
    }
}

impl<N: Into<Node>> AddAssign<N> for Container {
    fn add_assign(&mut self, child: N) {
        self.append(child);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::{HtmlErrorKind, RenderError},
        node::{Element, TextLeaf},
    };

    #[test]
    fn renders_nothing_until_asked() {
        let head = Container::new("head");
        assert_eq!(head.rendered(), None);
    }

    #[test]
    fn childless_container_renders_on_one_line() {
        let mut body = Container::new("body").attr("class", "page");
        assert!(body.render().is_ok());
        assert_eq!(body.rendered(), Some(r#"<body class="page"></body>"#));
    }

    #[test]
    fn append_chains_and_keeps_order() {
        let mut list = Container::new("ul");
        list.append(TextLeaf::new("a"))
            .append(TextLeaf::new("b"))
            .append("c");
        assert!(list.render().is_ok());
        assert_eq!(list.rendered(), Some("<ul>\n    a\n    b\n    c\n</ul>"));
    }

    #[test]
    fn add_assign_appends() {
        let mut head = Container::new("head");
        let mut title = Element::new("title").text("hello");
        assert!(title.render().is_ok());
        head += title;
        assert_eq!(head.children().len(), 1);
    }

    #[test]
    fn nested_children_indent_per_level() {
        let mut inner = Container::new("section");
        inner += "deep";
        assert!(inner.render().is_ok());

        let mut outer = Container::new("main");
        outer += inner;
        assert!(outer.render().is_ok());

        assert_eq!(
            outer.rendered(),
            Some("<main>\n    <section>\n        deep\n    </section>\n</main>")
        );
    }

    #[test]
    fn strict_render_rejects_unrendered_child() {
        let mut body = Container::new("body");
        body += Container::new("div");

        let err = body.render().err();
        assert_eq!(
            err.as_ref().map(|e| e.kind()),
            Some(&HtmlErrorKind::Render(RenderError::UnrenderedChild {
                parent: "body".to_string(),
                index: 0,
            }))
        );
        assert_eq!(body.rendered(), None);
    }

    #[test]
    fn permissive_render_treats_unrendered_child_as_empty() {
        let config = RenderConfig {
            strict: false,
            ..RenderConfig::default()
        };
        let mut body = Container::new("body").config(config);
        body += Container::new("div");
        assert_eq!(body.render_config(), &config);

        assert!(body.render().is_ok());
        assert_eq!(body.rendered(), Some("<body></body>"));
    }

    #[test]
    fn render_twice_is_identical() {
        let mut div = Container::new("div").attr("id", "x");
        div += "text";
        assert!(div.render().is_ok());
        let first = div.rendered().map(str::to_string);
        assert!(div.render().is_ok());
        assert_eq!(div.rendered().map(str::to_string), first);
    }
}
