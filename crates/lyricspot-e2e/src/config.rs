//! Suite configuration.
//!
//! All knobs come from the environment with hard defaults; there is no
//! configuration file and no CLI surface beyond what the test runner provides.

use std::env;
use std::fmt;

use crate::wait::WaitOptions;

/// Home URL of the deployed Lyricspot app
pub const HOME_URL: &str = "https://lyricspot.herokuapp.com/";

/// Spotify test-account credentials for the provider's own login form.
///
/// The password never appears in `Debug` output.
#[derive(Clone)]
pub struct SpotifyCredentials {
    /// Account username or email
    pub username: String,
    /// Account password
    pub password: String,
}

impl fmt::Debug for SpotifyCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpotifyCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Fixed per-session configuration
#[derive(Debug, Clone)]
pub struct SuiteConfig {
    /// Home URL of the application under test
    pub home_url: String,
    /// Run the browser headless
    pub headless: bool,
    /// Wait budget applied uniformly to every lookup
    pub wait: WaitOptions,
    /// Credentials for the provider login surface
    pub credentials: SpotifyCredentials,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            home_url: HOME_URL.to_string(),
            headless: true,
            wait: WaitOptions::default(),
            credentials: SpotifyCredentials {
                username: String::new(),
                password: String::new(),
            },
        }
    }
}

impl SuiteConfig {
    /// Build a configuration from the environment.
    ///
    /// Recognised variables: `LYRICSPOT_URL`, `LYRICSPOT_HEADLESS`,
    /// `LYRICSPOT_WAIT_MS`, `SPOTIFY_USERNAME`, `SPOTIFY_PASSWORD`.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let wait = env::var("LYRICSPOT_WAIT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map_or(defaults.wait, |ms| defaults.wait.with_timeout(ms));

        Self {
            home_url: env::var("LYRICSPOT_URL").unwrap_or(defaults.home_url),
            headless: env::var("LYRICSPOT_HEADLESS")
                .map_or(true, |v| parse_flag(&v)),
            wait,
            credentials: SpotifyCredentials {
                username: env::var("SPOTIFY_USERNAME").unwrap_or_default(),
                password: env::var("SPOTIFY_PASSWORD").unwrap_or_default(),
            },
        }
    }

    /// Set the home URL
    #[must_use]
    pub fn with_home_url(mut self, url: impl Into<String>) -> Self {
        self.home_url = url.into();
        self
    }

    /// Set headless mode
    #[must_use]
    pub const fn with_headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    /// Set the wait budget
    #[must_use]
    pub const fn with_wait(mut self, wait: WaitOptions) -> Self {
        self.wait = wait;
        self
    }
}

/// Interpret an environment flag; anything but "0"/"false"/"no" is on.
fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_deployed_app() {
        let config = SuiteConfig::default();
        assert_eq!(config.home_url, HOME_URL);
        assert!(config.headless);
        assert_eq!(config.wait.timeout_ms, 20_000);
    }

    #[test]
    fn flag_parsing() {
        assert!(parse_flag("1"));
        assert!(parse_flag("true"));
        assert!(parse_flag("yes"));
        assert!(!parse_flag("0"));
        assert!(!parse_flag("FALSE"));
        assert!(!parse_flag(" no "));
    }

    #[test]
    fn debug_redacts_password() {
        let creds = SpotifyCredentials {
            username: "tester".to_string(),
            password: "hunter2".to_string(),
        };
        let dump = format!("{creds:?}");
        assert!(dump.contains("tester"));
        assert!(!dump.contains("hunter2"));
    }

    #[test]
    fn from_env_always_yields_a_home_url() {
        // Environment-independent: either the override or the default.
        let config = SuiteConfig::from_env();
        assert!(config.home_url.starts_with("http"));
    }
}
