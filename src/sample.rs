//! A small reference page exercising every node kind.

use crate::{
    document::{Destination, Document},
    error::Result,
    node::{Container, Element},
    render::RenderConfig,
    scope::Scoped,
};

/// Builds the reference page and delivers it to `destination`.
///
/// Every node renders with `config`. The returned document has already been
/// written out.
pub fn sample_page(destination: impl Into<Destination>, config: RenderConfig) -> Result<Document> {
    Document::with_destination(destination)
        .config(config)
        .build(|doc| {
            *doc += Container::new("head").config(config).build(|head| {
                *head += Element::new("title").config(config).build(|title| {
                    title.set_text("hello");
                    Ok(())
                })?;
                Ok(())
            })?;

            *doc += Container::new("body").config(config).build(|body| {
                *body += Element::new("h1")
                    .config(config)
                    .attr("class", ["main-text"])
                    .build(|h1| {
                        h1.set_text("Test");
                        Ok(())
                    })?;

                *body += Element::new("div")
                    .config(config)
                    .attr("class", ["container", "container-fluid"])
                    .attr("id", "lead")
                    .build(|div| {
                        *div += Element::new("p").config(config).build(|paragraph| {
                            paragraph.set_text("another test");
                            Ok(())
                        })?;

                        *div += Element::new("img")
                            .config(config)
                            .self_closing(true)
                            .attr("src", "/icon.png")
                            .build(|_| Ok(()))?;
                        Ok(())
                    })?;
                Ok(())
            })?;
            Ok(())
        })
}
