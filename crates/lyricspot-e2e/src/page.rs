//! Page objects for Lyricspot and the Spotify surfaces it depends on.
//!
//! Each page object borrows the [`Session`] it drives and is otherwise
//! stateless, so any page can be reconstructed from the session alone.
//! Accessors return fresh element handles; composite actions bundle the
//! multi-step interactions the scenarios are written in terms of.
//!
//! Composite actions mutate browser state and are not idempotent. Calling
//! `log_in` on an already-logged-in session is undefined, and scenarios are
//! ordered so it never happens.

use std::time::Instant;

use tokio::time::sleep;
use tracing::{debug, info};

use crate::locator::{LoginRole, MainRole, SpotifyLoginRole, SpotifyPlayerRole};
use crate::result::{E2eError, E2eResult};
use crate::session::{Element, Session};

/// Spotify's own login surface, distinct from the app's OAuth entry point
const SPOTIFY_LOGIN_URL: &str = "https://accounts.spotify.com/login";

/// The Lyricspot landing page with the "Login with Spotify" entry point.
#[derive(Debug)]
pub struct LoginPage<'a> {
    session: &'a Session,
}

impl<'a> LoginPage<'a> {
    /// Bind the page object to a session
    #[must_use]
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// The "Login with Spotify" entry point
    pub async fn login_button(&self) -> E2eResult<Element> {
        self.session.find(LoginRole::LoginButton).await
    }

    /// Navigate home and click the login entry point.
    ///
    /// This is the whole login flow when a Spotify session already exists:
    /// OAuth completes silently against the provider's cookie jar.
    pub async fn click_login_button(&self) -> E2eResult<()> {
        self.session.navigate(self.session.home_url()).await?;
        self.login_button().await?.click().await
    }

    /// Full login: click the entry point, complete provider authentication,
    /// and return once the main page is observably loaded, i.e. the logout
    /// link is present. No fixed sleeps.
    pub async fn log_in(&self) -> E2eResult<()> {
        info!("logging in through the Spotify OAuth flow");
        self.click_login_button().await?;
        SpotifyLoginPage::new(self.session).authorize().await?;
        let _ = self.session.find(MainRole::LogoutLink).await?;
        Ok(())
    }
}

/// Spotify's login form (accounts.spotify.com).
#[derive(Debug)]
pub struct SpotifyLoginPage<'a> {
    session: &'a Session,
}

impl<'a> SpotifyLoginPage<'a> {
    /// Bind the page object to a session
    #[must_use]
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Username/email input
    pub async fn username_field(&self) -> E2eResult<Element> {
        self.session.find(SpotifyLoginRole::Username).await
    }

    /// Password input
    pub async fn password_field(&self) -> E2eResult<Element> {
        self.session.find(SpotifyLoginRole::Password).await
    }

    /// Form submit button
    pub async fn submit_button(&self) -> E2eResult<Element> {
        self.session.find(SpotifyLoginRole::SubmitButton).await
    }

    /// Fill the configured test-account credentials and submit.
    ///
    /// Always expects the login form to be present; an already-authenticated
    /// provider session is handled by never reaching this form (scenarios use
    /// [`LoginPage::click_login_button`] instead).
    pub async fn authorize(&self) -> E2eResult<()> {
        let credentials = &self.session.config().credentials;
        debug!(username = %credentials.username, "authorizing at the provider");
        self.username_field()
            .await?
            .type_text(&credentials.username)
            .await?;
        self.password_field()
            .await?
            .type_text(&credentials.password)
            .await?;
        self.submit_button().await?.click().await
    }
}

/// Spotify's web player (open.spotify.com), used to prime external player
/// state before a scenario touches Lyricspot.
#[derive(Debug)]
pub struct SpotifyPlayerPage<'a> {
    session: &'a Session,
}

impl<'a> SpotifyPlayerPage<'a> {
    /// Bind the page object to a session
    #[must_use]
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Main play control for the opened album/track
    pub async fn play_button(&self) -> E2eResult<Element> {
        self.session.find(SpotifyPlayerRole::PlayButton).await
    }

    /// Authenticate on the provider's own login surface, open the given
    /// track URL in the web player, and start playback.
    pub async fn login_and_play_song(&self, track_url: &str) -> E2eResult<()> {
        info!(track_url, "priming playback on the Spotify web player");
        self.session.navigate(SPOTIFY_LOGIN_URL).await?;
        SpotifyLoginPage::new(self.session).authorize().await?;
        self.session.navigate(track_url).await?;
        self.play_button().await?.click().await
    }
}

/// The logged-in Lyricspot main page.
#[derive(Debug)]
pub struct MainPage<'a> {
    session: &'a Session,
}

impl<'a> MainPage<'a> {
    /// Bind the page object to a session
    #[must_use]
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// "Log out" link
    pub async fn logout_link(&self) -> E2eResult<Element> {
        self.session.find(MainRole::LogoutLink).await
    }

    /// Lyrics toggle ("Show Lyrics" / "Hide Lyrics")
    pub async fn lyrics_button(&self) -> E2eResult<Element> {
        self.session.find(MainRole::LyricsButton).await
    }

    /// Lyrics panel body
    pub async fn lyrics_content(&self) -> E2eResult<Element> {
        self.session.find(MainRole::LyricsContent).await
    }

    /// Name of the currently playing song
    pub async fn song_name(&self) -> E2eResult<Element> {
        self.session.find(MainRole::SongName).await
    }

    /// Heading of the current view
    pub async fn page_title(&self) -> E2eResult<Element> {
        self.session.find(MainRole::PageTitle).await
    }

    /// Link to the top-tracks view
    pub async fn top_tracks(&self) -> E2eResult<Element> {
        self.session.find(MainRole::TopTracksLink).await
    }

    /// Link to the recently-played view
    pub async fn recent_tracks(&self) -> E2eResult<Element> {
        self.session.find(MainRole::RecentTracksLink).await
    }

    /// Every song name in the current track listing
    pub async fn all_song_names(&self) -> E2eResult<Vec<Element>> {
        self.session.find_all(MainRole::SongNameItem).await
    }

    /// Every artist in the current track listing
    pub async fn all_song_artists(&self) -> E2eResult<Vec<Element>> {
        self.session.find_all(MainRole::SongArtistItem).await
    }

    /// Toggle the lyrics panel
    pub async fn click_show_lyrics(&self) -> E2eResult<()> {
        self.lyrics_button().await?.click().await
    }

    /// Block until the lyrics panel has non-empty text.
    ///
    /// The host application fetches lyrics asynchronously after the panel
    /// opens; the handle goes stale while it does, so each poll re-fetches.
    pub async fn wait_for_lyrics(&self) -> E2eResult<()> {
        let wait = self.session.wait();
        let deadline = Instant::now() + wait.timeout();
        loop {
            let text = self.lyrics_content().await?.text().await?;
            if !text.trim().is_empty() {
                return Ok(());
            }
            if Instant::now() >= deadline {
                return Err(E2eError::NavigationTimeout {
                    condition: "lyrics content to become non-empty".to_string(),
                    waited_ms: wait.timeout_ms,
                });
            }
            sleep(wait.poll_interval()).await;
        }
    }
}
