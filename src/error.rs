//! Error handling types for building and writing documents
//!
//! Rendering itself is permissive about content (attribute values and text are
//! never rejected), so the only failures are structural render errors and the
//! I/O performed by a [`Document`](crate::Document) when it is flushed.

use std::{error::Error, fmt};
use thiserror::Error;

/// Main error type for render and output operations
#[derive(Debug)]
pub struct HtmlError {
    /// The specific kind of error
    kind: HtmlErrorKind,
    /// Source error that caused this error
    source: Option<Box<dyn Error + Send + Sync>>,
    /// Additional context for the error
    context: Option<String>,
}

/// Top-level error categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlErrorKind {
    Io(IoError),
    Render(RenderError),
}

/// Failures while assembling a node's markup
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// A child was appended but never rendered before its parent
    #[error("child #{index} of <{parent}> was never rendered")]
    UnrenderedChild { parent: String, index: usize },
    /// Output was requested from a node that has not been rendered yet
    #[error("<{0}> has not been rendered")]
    NotRendered(String),
}

/// Failures while delivering a rendered document
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IoError {
    /// Destination path (or its parent directory) does not exist
    #[error("file not found: {0}")]
    FileNotFound(String),
    /// Destination is not writable
    #[error("permission denied: {0}")]
    PermissionDenied(String),
    /// Any other write failure
    #[error("write error: {0}")]
    WriteError(String),
}

impl HtmlError {
    pub fn new(kind: HtmlErrorKind) -> Self {
        Self {
            kind,
            source: None,
            context: None,
        }
    }

    pub fn kind(&self) -> &HtmlErrorKind {
        &self.kind
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }
}

impl From<RenderError> for HtmlError {
    fn from(err: RenderError) -> Self {
        Self::new(HtmlErrorKind::Render(err))
    }
}

impl From<IoError> for HtmlError {
    fn from(err: IoError) -> Self {
        Self::new(HtmlErrorKind::Io(err))
    }
}

impl fmt::Display for HtmlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            HtmlErrorKind::Io(err) => write!(f, "Error: {}", err)?,
            HtmlErrorKind::Render(err) => write!(f, "Error: {}", err)?,
        }

        if let Some(ctx) = &self.context {
            write!(f, "\nContext: {}", ctx)?;
        }

        if let Some(source) = &self.source {
            write!(f, "\nCaused by: {}", source)?;
        }

        Ok(())
    }
}

impl Error for HtmlError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        let source: &(dyn Error + 'static) = self.source.as_deref()?;
        Some(source)
    }
}

pub type Result<T> = std::result::Result<T, HtmlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_context_and_source() {
        let io = std::io::Error::other("disk full");
        let err = HtmlError::from(IoError::WriteError("out.html".to_string()))
            .with_context("flushing document")
            .with_source(io);

        let text = err.to_string();
        assert!(text.starts_with("Error: write error: out.html"));
        assert!(text.contains("Context: flushing document"));
        assert!(text.contains("Caused by: disk full"));
        assert!(Error::source(&err).is_some());
    }

    #[test]
    fn render_error_converts_into_kind() {
        let err: HtmlError = RenderError::NotRendered("div".to_string()).into();
        assert_eq!(
            err.kind(),
            &HtmlErrorKind::Render(RenderError::NotRendered("div".to_string()))
        );
    }
}
