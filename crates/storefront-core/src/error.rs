//! Widget Errors
//!
//! Failures the widgets can observe. None of them is fatal to the page.

use thiserror::Error;

/// Common result type for widget operations
pub type WidgetResult<T> = Result<T, WidgetError>;

/// Widget-level errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WidgetError {
    /// Transport failure, or a response body that is not JSON at all
    #[error("network error: {0}")]
    Network(String),
    /// JSON that does not have the expected shape
    #[error("malformed response: {0}")]
    MalformedResponse(String),
    /// Client-side key-value storage refused a read or write
    #[error("storage error: {0}")]
    Storage(String),
    /// The credential check itself failed
    #[error("authentication error: {0}")]
    Auth(String),
}
