//! # Spotify Integration Module
//!
//! This module is the integration layer between the CLI and the Spotify Web
//! API. It obtains an application token and runs the two catalog lookups the
//! tool needs.
//!
//! ## Architecture
//!
//! ```text
//! CLI Layer
//!     ↓
//! SpotifyClient (token + resolved artist)
//!     ├── Authentication (client-credentials grant)
//!     └── Artist Operations (search, top tracks)
//!     ↓
//! HTTP Layer (reqwest blocking, JSON)
//!     ↓
//! Spotify Web API
//! ```
//!
//! ## Core Modules
//!
//! - [`auth`] - Exchanges the application credentials for a bearer token
//!   using HTTP Basic auth against the accounts service.
//! - [`artists`] - Artist search and the artist top-tracks lookup.
//!
//! ## Request Model
//!
//! All requests are blocking and issued one after another. There is no retry,
//! rate-limit handling or token refresh: a token is fetched once when the
//! client connects and used for the lifetime of the client.
//!
//! ## API Coverage
//!
//! - `POST /api/token` - Client-credentials grant
//! - `GET /search` - Artist search, first match only
//! - `GET /artists/{id}/top-tracks` - Top tracks for one market

pub mod artists;
pub mod auth;

use log::{debug, info};
use reqwest::blocking::Client;

use crate::{
    config::Config,
    error::Result,
    types::{Artist, ArtistId, Token, Track},
};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Authenticated Spotify client.
///
/// Starts without a resolved artist. A successful [`search_artist`] resolves
/// one, and only then does [`top_tracks`] reach out to the API.
///
/// [`search_artist`]: SpotifyClient::search_artist
/// [`top_tracks`]: SpotifyClient::top_tracks
#[derive(Debug)]
pub struct SpotifyClient {
    http: Client,
    config: Config,
    token: Token,
    artist_id: Option<ArtistId>,
}

impl SpotifyClient {
    /// Fetches an access token and returns a client ready for lookups.
    ///
    /// The token is requested once, here, and kept for the lifetime of the
    /// client. No artist is resolved yet.
    ///
    /// # Arguments
    ///
    /// * `config` - Credentials, endpoints and market for every request
    ///
    /// # Example
    ///
    /// ```
    /// let mut client = SpotifyClient::connect(Config::from_env())?;
    /// client.search_artist("Good Kid")?;
    /// let tracks = client.top_tracks()?;
    /// ```
    ///
    /// # Errors
    ///
    /// Network failures, malformed token responses and responses without an
    /// `access_token` (e.g. rejected credentials) are all returned as-is.
    pub fn connect(config: Config) -> Result<Self> {
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        let token = auth::request_token(&http, &config)?;

        Ok(SpotifyClient {
            http,
            config,
            token,
            artist_id: None,
        })
    }

    /// Searches for an artist and remembers the best match.
    ///
    /// Returns `Ok(None)` when the search has no results. After a search
    /// without results, or one that fails, no artist is resolved, even if an
    /// earlier search succeeded.
    ///
    /// # Arguments
    ///
    /// * `name` - Free-text artist name
    ///
    /// # Errors
    ///
    /// HTTP and decoding failures from the search request are returned as-is.
    pub fn search_artist(&mut self, name: &str) -> Result<Option<Artist>> {
        debug!("search_artist({:?}) called", name);
        self.artist_id = None;
        let artist = artists::search_artist(&self.http, &self.config, &self.token, name)?;

        self.artist_id = artist.as_ref().map(|a| a.id.clone());
        match &artist {
            Some(a) => info!("Resolved {:?} to artist {} ({})", name, a.name, a.id),
            None => info!("No artist found for {:?}", name),
        }

        debug!("search_artist({:?}) returned", name);
        Ok(artist)
    }

    /// Top tracks of the resolved artist, in the order Spotify ranks them.
    ///
    /// Without a resolved artist no request is sent and the result is empty.
    /// The market comes from the client's [`Config`].
    ///
    /// # Errors
    ///
    /// HTTP and decoding failures from the top-tracks request are returned
    /// as-is.
    pub fn top_tracks(&self) -> Result<Vec<Track>> {
        debug!("top_tracks() called");
        let Some(artist_id) = &self.artist_id else {
            debug!("top_tracks() skipped, no artist resolved");
            return Ok(Vec::new());
        };

        let tracks = artists::get_top_tracks(&self.http, &self.config, &self.token, artist_id)?;

        debug!("top_tracks() returned {} tracks", tracks.len());
        Ok(tracks)
    }

    /// ID of the artist resolved by the last search, if any.
    pub fn artist_id(&self) -> Option<&ArtistId> {
        self.artist_id.as_ref()
    }

    pub fn token(&self) -> &Token {
        &self.token
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
