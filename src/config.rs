//! Configuration management for the Spotify Top Tracks CLI.
//!
//! Configuration is read once at startup into a [`Config`] value which is then
//! handed to [`crate::spotify::SpotifyClient::connect`]. Values come from:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. `.env` file in the current working directory
//! 4. Application defaults for endpoints and market

use std::{env, fmt, path::PathBuf};

use log::{debug, warn};

/// Spotify accounts endpoint used for the client-credentials grant.
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

/// Base URL of the Spotify Web API.
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";

/// Country code sent with top-track lookups.
pub const DEFAULT_MARKET: &str = "US";

pub const CLIENT_ID_VAR: &str = "SPOTIFY_CLIENT_ID";
pub const CLIENT_SECRET_VAR: &str = "SPOTIFY_CLIENT_SECRET";
pub const TOKEN_URL_VAR: &str = "SPOTIFY_API_TOKEN_URL";
pub const API_URL_VAR: &str = "SPOTIFY_API_URL";
pub const MARKET_VAR: &str = "SPOTIFY_MARKET";

/// Loads environment variables from `.env` files.
///
/// Looks in the platform-specific local data directory under
/// `toptracks/.env` first, then in the current working directory. Variables
/// that are already set in the process environment are never overridden, and
/// a missing file is not an error.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/toptracks/.env`
/// - macOS: `~/Library/Application Support/toptracks/.env`
/// - Windows: `%LOCALAPPDATA%/toptracks/.env`
pub fn load_env() {
    let path = data_env_path();
    match dotenv::from_path(&path) {
        Ok(()) => debug!("Loaded environment from {}", path.display()),
        Err(e) => debug!("No environment file at {}: {}", path.display(), e),
    }

    if let Ok(path) = dotenv::dotenv() {
        debug!("Loaded environment from {}", path.display());
    }
}

fn data_env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("toptracks/.env");
    path
}

/// Runtime configuration for the Spotify client.
///
/// Holds the application credentials together with the endpoints and market
/// used for every request. The credentials are never validated locally: an
/// empty id or secret is sent as-is and rejected by the accounts service.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    client_id: String,
    client_secret: String,
    token_url: String,
    api_url: String,
    market: String,
}

impl Config {
    /// Creates a configuration with the given credentials and default
    /// endpoints.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Config {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            token_url: DEFAULT_TOKEN_URL.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            market: DEFAULT_MARKET.to_string(),
        }
    }

    /// Builds the configuration from the process environment.
    ///
    /// Call [`load_env`] first to pick up `.env` files. Missing credentials
    /// are logged and left empty.
    pub fn from_env() -> Self {
        let mut config = Config::new(
            required_var(CLIENT_ID_VAR),
            required_var(CLIENT_SECRET_VAR),
        );

        if let Ok(url) = env::var(TOKEN_URL_VAR) {
            config = config.with_token_url(url);
        }
        if let Ok(url) = env::var(API_URL_VAR) {
            config = config.with_api_url(url);
        }
        if let Ok(market) = env::var(MARKET_VAR) {
            config = config.with_market(market);
        }

        config
    }

    #[must_use]
    pub fn with_token_url(self, token_url: impl Into<String>) -> Self {
        Self {
            token_url: token_url.into(),
            ..self
        }
    }

    #[must_use]
    pub fn with_api_url(self, api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into().trim_end_matches('/').to_string(),
            ..self
        }
    }

    #[must_use]
    pub fn with_market(self, market: impl Into<String>) -> Self {
        Self {
            market: market.into(),
            ..self
        }
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }

    pub fn token_url(&self) -> &str {
        &self.token_url
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn market(&self) -> &str {
        &self.market
    }
}

// The secret must never end up in logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("token_url", &self.token_url)
            .field("api_url", &self.api_url)
            .field("market", &self.market)
            .finish()
    }
}

fn required_var(name: &str) -> String {
    env::var(name).unwrap_or_else(|_| {
        warn!("{} is not set, authentication will be rejected", name);
        String::new()
    })
}
