//! Error handling for ResizeKit.
//!
//! The controller has a deliberately small failure surface: most operations
//! invoked in the wrong state are no-ops rather than errors. What remains
//! are configuration mistakes (unresolvable module identifiers) and host
//! failures, which propagate synchronously to the event callback that
//! triggered them.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

use crate::host::ElementId;

/// Errors surfaced by the overlay controller and its host.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A configured module identifier did not resolve to a registered
    /// implementation.
    #[error("Unknown overlay module '{0}'")]
    UnknownModule(String),

    /// An operation referenced an element that is no longer part of the
    /// document.
    #[error("{0} is no longer part of the document")]
    StaleElement(ElementId),

    /// User-supplied options could not be parsed.
    #[error("Invalid options: {0}")]
    InvalidOptions(String),

    /// The host editing surface rejected an operation.
    #[error("Host operation failed: {0}")]
    Host(String),
}

/// Result type alias for ResizeKit operations.
pub type Result<T> = std::result::Result<T, Error>;
