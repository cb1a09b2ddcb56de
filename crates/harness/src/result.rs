//! Result and error types for the harness.

use thiserror::Error;

/// Result type for harness operations
pub type HarnessResult<T> = Result<T, HarnessError>;

/// Errors that can occur in the harness
#[derive(Debug, Error)]
pub enum HarnessError {
    /// Configuration file missing, unparseable, or the selected environment
    /// does not exist. Fatal at startup, never retried.
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// Browser kind not in the supported set
    #[error("Unsupported browser: {name} (expected chrome, firefox or edge)")]
    UnsupportedBrowser {
        /// The rejected browser name
        name: String,
    },

    /// Remote grid endpoint could not be parsed as a URL
    #[error("Invalid grid URL '{url}': {message}")]
    InvalidGridUrl {
        /// The rejected endpoint
        url: String,
        /// Parse error detail
        message: String,
    },

    /// Browser session could not be created. Aborts the test case;
    /// there is no automatic reconnection.
    #[error("Failed to create {mode} {browser} session: {message}")]
    SessionCreation {
        /// Browser kind
        browser: String,
        /// "local" or "remote"
        mode: String,
        /// Error message
        message: String,
    },

    /// A wait condition was not met within its bound
    #[error("Timed out after {ms}ms waiting for {condition}")]
    Timeout {
        /// Timeout in milliseconds
        ms: u64,
        /// Description of the condition that never became true
        condition: String,
    },

    /// Fixture file missing, malformed, or a scenario/key not found
    #[error("Fixture error: {message}")]
    Fixture {
        /// Error message
        message: String,
    },

    /// WebDriver protocol error
    #[error("WebDriver error: {0}")]
    WebDriver(#[from] thirtyfour::error::WebDriverError),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
