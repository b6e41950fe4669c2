//! Element locator maps.
//!
//! One enum per application screen maps logical UI roles to fixed CSS
//! selectors. Referencing an unknown role is a compile error rather than a
//! runtime lookup failure; the selectors themselves track the external DOM
//! contract of Lyricspot and of Spotify's login/player surfaces.

/// A logical UI role that resolves to a fixed selector.
///
/// The seam [`crate::session::Session`] accepts for lookups.
pub trait Role: Copy {
    /// Fixed CSS selector expression for this role
    fn selector(self) -> &'static str;

    /// Human-readable role name, used in error reports
    fn name(self) -> &'static str;
}

/// Roles on the Lyricspot login screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginRole {
    /// The "Login with Spotify" entry point
    LoginButton,
}

impl Role for LoginRole {
    fn selector(self) -> &'static str {
        match self {
            Self::LoginButton => "a#login-button",
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::LoginButton => "login button",
        }
    }
}

/// Roles on Spotify's own login form (accounts.spotify.com)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpotifyLoginRole {
    /// Username/email input
    Username,
    /// Password input
    Password,
    /// Form submit button
    SubmitButton,
}

impl Role for SpotifyLoginRole {
    fn selector(self) -> &'static str {
        match self {
            Self::Username => "input#login-username",
            Self::Password => "input#login-password",
            Self::SubmitButton => "button#login-button",
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Username => "spotify username field",
            Self::Password => "spotify password field",
            Self::SubmitButton => "spotify login button",
        }
    }
}

/// Roles on Spotify's web player (open.spotify.com)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpotifyPlayerRole {
    /// Main play control for the opened album/track
    PlayButton,
}

impl Role for SpotifyPlayerRole {
    fn selector(self) -> &'static str {
        match self {
            Self::PlayButton => "button[data-testid=\"play-button\"]",
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::PlayButton => "spotify play button",
        }
    }
}

/// Roles on the logged-in Lyricspot main page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainRole {
    /// "Log out" link in the header
    LogoutLink,
    /// "Show Lyrics" / "Hide Lyrics" toggle
    LyricsButton,
    /// Lyrics panel body
    LyricsContent,
    /// Name of the currently playing song
    SongName,
    /// View heading ("Your 50 Top Played Tracks", ...)
    PageTitle,
    /// Link to the top-tracks view
    TopTracksLink,
    /// Link to the recently-played view
    RecentTracksLink,
    /// Every song-name cell in a track listing
    SongNameItem,
    /// Every artist cell in a track listing
    SongArtistItem,
}

impl Role for MainRole {
    fn selector(self) -> &'static str {
        match self {
            Self::LogoutLink => "a#logout-link",
            Self::LyricsButton => "button#lyrics-button",
            Self::LyricsContent => "div#lyrics-content",
            Self::SongName => "span#song-name",
            Self::PageTitle => "h1#page-title",
            Self::TopTracksLink => "a#top-tracks",
            Self::RecentTracksLink => "a#recent-tracks",
            Self::SongNameItem => "td.song-name",
            Self::SongArtistItem => "td.song-artist",
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::LogoutLink => "logout link",
            Self::LyricsButton => "lyrics button",
            Self::LyricsContent => "lyrics content",
            Self::SongName => "song name",
            Self::PageTitle => "page title",
            Self::TopTracksLink => "top tracks link",
            Self::RecentTracksLink => "recent tracks link",
            Self::SongNameItem => "song name item",
            Self::SongArtistItem => "song artist item",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod main_role_tests {
        use super::*;

        const ALL: [MainRole; 9] = [
            MainRole::LogoutLink,
            MainRole::LyricsButton,
            MainRole::LyricsContent,
            MainRole::SongName,
            MainRole::PageTitle,
            MainRole::TopTracksLink,
            MainRole::RecentTracksLink,
            MainRole::SongNameItem,
            MainRole::SongArtistItem,
        ];

        #[test]
        fn every_role_has_a_selector_and_name() {
            for role in ALL {
                assert!(!role.selector().is_empty());
                assert!(!role.name().is_empty());
            }
        }

        #[test]
        fn selectors_are_distinct() {
            for (i, a) in ALL.iter().enumerate() {
                for b in &ALL[i + 1..] {
                    assert_ne!(a.selector(), b.selector(), "{a:?} vs {b:?}");
                }
            }
        }
    }

    mod spotify_role_tests {
        use super::*;

        #[test]
        fn login_form_roles_map_to_account_page_ids() {
            assert_eq!(SpotifyLoginRole::Username.selector(), "input#login-username");
            assert_eq!(SpotifyLoginRole::Password.selector(), "input#login-password");
            assert_eq!(SpotifyLoginRole::SubmitButton.selector(), "button#login-button");
        }

        #[test]
        fn play_button_uses_test_id() {
            assert!(SpotifyPlayerRole::PlayButton
                .selector()
                .contains("data-testid"));
        }
    }

    #[test]
    fn login_role_matches_entry_point() {
        assert_eq!(LoginRole::LoginButton.selector(), "a#login-button");
        assert_eq!(LoginRole::LoginButton.name(), "login button");
    }
}
