//! Result and error types for the suite.

use thiserror::Error;

/// Result type for suite operations
pub type SuiteResult<T> = Result<T, SuiteError>;

/// Errors that can occur while driving the sign-up flow
#[derive(Debug, Error)]
pub enum SuiteError {
    /// Browser executable not found
    #[error("Browser not found. Install Chromium or set CHROMIUM_PATH")]
    BrowserNotFound,

    /// Browser launch error
    #[error("Failed to launch browser: {message}")]
    BrowserLaunch {
        /// Error message
        message: String,
    },

    /// Page error
    #[error("Page error: {message}")]
    Page {
        /// Error message
        message: String,
    },

    /// Navigation error
    #[error("Navigation to {url} failed: {message}")]
    Navigation {
        /// URL that failed
        url: String,
        /// Error message
        message: String,
    },

    /// No element matched a locator
    #[error("No element matches {selector}")]
    ElementNotFound {
        /// Locator that matched nothing
        selector: String,
    },

    /// Input simulation error
    #[error("Input simulation failed: {message}")]
    Input {
        /// Error message
        message: String,
    },

    /// In-page script evaluation error
    #[error("Script evaluation failed: {message}")]
    Evaluation {
        /// Error message
        message: String,
    },

    /// A polled condition stayed false until its deadline
    #[error("Condition '{condition}' not met after {ms}ms")]
    Timeout {
        /// Description of what was being waited for
        condition: String,
        /// Deadline in milliseconds
        ms: u64,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
