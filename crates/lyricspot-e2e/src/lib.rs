//! End-to-end browser test suite for the Lyricspot web app.
//!
//! Lyricspot authenticates through Spotify OAuth, shows the logged-in user's
//! song data, and displays lyrics for the currently playing track. This crate
//! drives a real Chromium instance over the Chrome DevTools Protocol and
//! asserts on rendered DOM text.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  tests/scenarios.rs                                          │
//! │    reachability probe (once) ─► Session per scenario         │
//! │    scenario body ─► page objects ─► assertions               │
//! ├──────────────────────────────────────────────────────────────┤
//! │  page::{LoginPage, SpotifyLoginPage, SpotifyPlayerPage,      │
//! │         MainPage}      role accessors + composite actions    │
//! │  locator::*            typed role -> selector maps           │
//! │  session::Session      Chromium via CDP, bounded-poll waits  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Scenarios are independent: each gets a fresh [`Session`] and shares no
//! mutable state with any other. Running the full suite needs a deployed
//! Lyricspot instance, a Chromium binary, and a pre-authorized Spotify test
//! account (`SPOTIFY_USERNAME` / `SPOTIFY_PASSWORD`).

#![warn(missing_docs)]

pub mod assertion;
pub mod config;
pub mod locator;
pub mod page;
pub mod probe;
pub mod result;
pub mod session;
pub mod wait;

pub use config::{SpotifyCredentials, SuiteConfig, HOME_URL};
pub use locator::{LoginRole, MainRole, Role, SpotifyLoginRole, SpotifyPlayerRole};
pub use page::{LoginPage, MainPage, SpotifyLoginPage, SpotifyPlayerPage};
pub use result::{E2eError, E2eResult};
pub use session::{Element, Session};
pub use wait::WaitOptions;
