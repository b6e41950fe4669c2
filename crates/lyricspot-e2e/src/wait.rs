//! Bounded-polling wait budget.
//!
//! Every element lookup and readiness check shares one explicit wait budget:
//! a maximum duration plus a polling interval. There are no per-call
//! overrides; exceeding the budget fails the lookup.

use std::time::Duration;

/// Default wait budget for element lookups (20 seconds)
pub const DEFAULT_WAIT_TIMEOUT_MS: u64 = 20_000;

/// Default polling interval (50ms)
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 50;

/// Options for bounded-polling waits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitOptions {
    /// Timeout in milliseconds
    pub timeout_ms: u64,
    /// Polling interval in milliseconds
    pub poll_interval_ms: u64,
}

impl Default for WaitOptions {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_WAIT_TIMEOUT_MS,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
        }
    }
}

impl WaitOptions {
    /// Create new wait options with defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set timeout in milliseconds
    #[must_use]
    pub const fn with_timeout(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Set polling interval in milliseconds
    #[must_use]
    pub const fn with_poll_interval(mut self, poll_interval_ms: u64) -> Self {
        self.poll_interval_ms = poll_interval_ms;
        self
    }

    /// Get timeout as Duration
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Get poll interval as Duration
    #[must_use]
    pub const fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_suite_budget() {
        let opts = WaitOptions::default();
        assert_eq!(opts.timeout_ms, 20_000);
        assert_eq!(opts.poll_interval_ms, 50);
    }

    #[test]
    fn builders_override_fields() {
        let opts = WaitOptions::new()
            .with_timeout(5_000)
            .with_poll_interval(100);
        assert_eq!(opts.timeout(), Duration::from_secs(5));
        assert_eq!(opts.poll_interval(), Duration::from_millis(100));
    }
}
