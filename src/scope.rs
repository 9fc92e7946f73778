//! Scoped construction: build a node inside a closure and render it on exit.
//!
//! ```
//! use tagscope::{Container, Element, Render, Scoped};
//!
//! let head = Container::new("head").build(|head| {
//!     *head += Element::new("title").build(|title| {
//!         title.set_text("hello");
//!         Ok(())
//!     })?;
//!     Ok(())
//! })?;
//!
//! assert_eq!(
//!     head.rendered(),
//!     Some("<head>\n    <title>\n        hello\n    </title>\n</head>")
//! );
//! # Ok::<(), tagscope::HtmlError>(())
//! ```

use tracing::warn;

use crate::{
    error::{HtmlError, Result},
    node::{Container, Element, Render},
};

/// A node that can be opened as a building scope.
pub trait Scoped: Sized {
    /// Runs once when the scope ends, however the body finished.
    fn close(&mut self) -> Result<()>;

    /// Hands the node to `body`, then closes it.
    ///
    /// `close` runs exactly once, also when `body` returns an error (but not
    /// when it panics, see [`try_build`](Self::try_build)). On success the
    /// closed node is returned so it can be appended to its parent.
    fn build<F>(self, body: F) -> Result<Self>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        self.try_build(body)
    }

    /// Like [`build`](Self::build), for bodies failing with their own error type.
    ///
    /// A body failure is returned in preference to a failure of `close`,
    /// which is then only logged.
    ///
    /// A panic in `body` unwinds past this call without running `close`, so a
    /// [`Document`](crate::Document) is neither rendered nor written in that
    /// case. Return an error from `body` to get the usual cleanup.
    fn try_build<F, E>(mut self, body: F) -> std::result::Result<Self, E>
    where
        F: FnOnce(&mut Self) -> std::result::Result<(), E>,
        E: From<HtmlError>,
    {
        let outcome = body(&mut self);
        let closed = self.close();

        match (outcome, closed) {
            (Ok(()), Ok(())) => Ok(self),
            (Ok(()), Err(err)) => Err(err.into()),
            (Err(err), Ok(())) => Err(err),
            (Err(err), Err(close_err)) => {
                warn!("Scope closed with an error after a failed body: {}", close_err);
                Err(err)
            }
        }
    }
}

impl Scoped for Container {
    fn close(&mut self) -> Result<()> {
        self.render()
    }
}

impl Scoped for Element {
    fn close(&mut self) -> Result<()> {
        self.render()
    }
}
