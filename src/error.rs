// Error types for autopage

use thiserror::Error;

/// Result type alias for autopage operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when driving a page
#[derive(Debug, Error)]
pub enum Error {
    /// A native dialog (alert, confirm, prompt) is blocking the page
    ///
    /// Raised by the engine when an operation cannot proceed because an
    /// unexpected dialog is open. [`Page::open`](crate::Page::open) recovers
    /// from this once by dismissing the dialog and retrying; everywhere else
    /// it propagates.
    #[error("Unhandled dialog blocking the page: {message}")]
    UnhandledDialog { message: String },

    /// Navigation to a URL failed
    #[error("Navigation failed for '{url}': {message}")]
    Navigation { url: String, message: String },

    /// `open()` was called before a URL was configured
    #[error("Page has no URL configured; set one before calling open()")]
    MissingUrl,

    /// A window handle reported by the driver could not be focused
    ///
    /// The window may have been closed between enumeration and the switch.
    #[error("Window not found: handle '{0}'")]
    WindowNotFound(String),

    /// Target was closed (browser, window, or page)
    ///
    /// Occurs when attempting to perform an operation on a closed target.
    #[error("Target closed: Cannot perform operation on closed {target_type}. {context}")]
    TargetClosed {
        target_type: String,
        context: String,
    },

    /// Driver-level error reported by the engine
    #[error("Driver error: {0}")]
    Driver(String),

    /// Invalid argument provided to method
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error with additional context
    #[error("{0}: {1}")]
    Context(String, #[source] Box<Error>),
}

impl Error {
    /// Adds context to the error
    pub fn context(self, msg: impl Into<String>) -> Self {
        Error::Context(msg.into(), Box::new(self))
    }
}
