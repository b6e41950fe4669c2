//! Result and error types for the suite.

use thiserror::Error;

/// Result type for suite operations
pub type E2eResult<T> = Result<T, E2eError>;

/// Errors that can occur while driving the browser or asserting on it
#[derive(Debug, Error)]
pub enum E2eError {
    /// The application did not answer the reachability probe.
    ///
    /// Fatal: no scenario runs after this.
    #[error("Service unreachable at {url}: {reason}")]
    Unreachable {
        /// Probed URL
        url: String,
        /// Probe status or connection error
        reason: String,
    },

    /// Browser launch error
    #[error("Failed to launch browser: {message}")]
    BrowserLaunch {
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

    /// No element matched the selector within the wait budget
    #[error("Element not found: {role} ({selector}) after {waited_ms}ms")]
    ElementNotFound {
        /// Logical role of the element
        role: &'static str,
        /// Selector that never matched
        selector: &'static str,
        /// Wait budget that elapsed
        waited_ms: u64,
    },

    /// The page did not reach the expected state within the wait budget
    #[error("Timed out waiting for {condition} after {waited_ms}ms")]
    NavigationTimeout {
        /// Readiness condition that was polled
        condition: String,
        /// Wait budget that elapsed
        waited_ms: u64,
    },

    /// Observed text did not match the expected literal
    #[error("Assertion failed: {message}")]
    Assertion {
        /// Expected vs. observed description
        message: String,
    },

    /// Driver-level failure not tied to a lookup
    #[error("Page error: {message}")]
    Page {
        /// Error message
        message: String,
    },

    /// HTTP error from the reachability probe
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_not_found_names_role_and_budget() {
        let err = E2eError::ElementNotFound {
            role: "logout link",
            selector: "a#logout-link",
            waited_ms: 20_000,
        };
        let msg = err.to_string();
        assert!(msg.contains("logout link"));
        assert!(msg.contains("a#logout-link"));
        assert!(msg.contains("20000ms"));
    }

    #[test]
    fn unreachable_reports_probe_status() {
        let err = E2eError::Unreachable {
            url: "https://example.com/".to_string(),
            reason: "status 503 Service Unavailable".to_string(),
        };
        assert!(err.to_string().contains("503"));
    }
}
