//! The `html` root node and the delivery of its output

use std::{
    io::{self, Write},
    ops::AddAssign,
    path::{Path, PathBuf},
};
use tracing::{info, instrument};

use crate::{
    attributes::AttrValue,
    error::{HtmlError, RenderError, Result},
    node::{Container, Node, Render},
    render::RenderConfig,
    scope::Scoped,
    utils::{io_error, write_file},
};

/// Where a finished document is written
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Destination {
    /// Standard output, followed by a newline
    #[default]
    Stdout,
    /// A file that is created or truncated, holding exactly the markup
    File(PathBuf),
}

/// `None` and an empty path both mean standard output.
impl From<Option<PathBuf>> for Destination {
    fn from(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) if !path.as_os_str().is_empty() => Self::File(path),
            _ => Self::Stdout,
        }
    }
}

/// Root `html` tag that writes itself out when its scope closes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    root: Container,
    destination: Destination,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// A document printed to standard output.
    pub fn new() -> Self {
        Self::with_destination(Destination::Stdout)
    }

    /// A document written to `path`.
    pub fn to_file(path: impl Into<PathBuf>) -> Self {
        Self::with_destination(Destination::File(path.into()))
    }

    pub fn with_destination(destination: impl Into<Destination>) -> Self {
        Self {
            root: Container::new("html"),
            destination: destination.into(),
        }
    }

    pub fn attr(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.root.set_attr(key, value);
        self
    }

    pub fn config(mut self, config: RenderConfig) -> Self {
        self.root = self.root.config(config);
        self
    }

    pub fn append(&mut self, child: impl Into<Node>) -> &mut Self {
        self.root.append(child);
        self
    }

    pub fn root(&self) -> &Container {
        &self.root
    }

    pub fn destination(&self) -> &Destination {
        &self.destination
    }

    /// Writes the rendered markup to `writer`, without a trailing newline.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        let rendered = self.rendered_or_err()?;
        writer.write_all(rendered.as_bytes()).map_err(stream_error)
    }

    /// Delivers the rendered markup to the configured destination.
    #[instrument(skip(self))]
    pub fn flush(&self) -> Result<()> {
        match &self.destination {
            Destination::Stdout => {
                let stdout = io::stdout();
                let mut handle = stdout.lock();
                self.write_to(&mut handle)?;
                writeln!(handle).map_err(stream_error)?;
                handle.flush().map_err(stream_error)
            }
            Destination::File(path) => {
                info!("Writing document to {}", path.display());
                write_file(path, self.rendered_or_err()?)
            }
        }
    }

    fn rendered_or_err(&self) -> Result<&str> {
        self.rendered()
            .ok_or_else(|| RenderError::NotRendered(self.root.name().to_string()).into())
    }
}

fn stream_error(err: io::Error) -> HtmlError {
    io_error(Path::new("<stream>"), err)
}

impl Render for Document {
    fn rendered(&self) -> Option<&str> {
        self.root.rendered()
    }

    fn render(&mut self) -> Result<()> {
        self.root.render()
    }
}

impl Scoped for Document {
    fn close(&mut self) -> Result<()> {
        self.render()?;
        self.flush()
    }
}

impl<N: Into<Node>> AddAssign<N> for Document {
    fn add_assign(&mut self, child: N) {
        self.append(child);
    }
}
