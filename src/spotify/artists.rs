use log::debug;
use reqwest::blocking::Client;

use crate::{
    config::Config,
    error::Result,
    types::{Artist, ArtistId, SearchArtistsResponse, Token, TopTracksResponse, Track},
};

/// Searches the Spotify catalog for an artist by name.
///
/// Sends `GET {api}/search` with `type=artist` and `limit=1`, so only the
/// single best match as ranked by Spotify is ever returned. There is no
/// disambiguation or pagination.
///
/// # Arguments
///
/// * `http` - HTTP client used for the request
/// * `config` - Configuration providing the API base URL
/// * `token` - Bearer token from the client-credentials grant
/// * `name` - Free-text artist name, sent as the `q` parameter
///
/// # Returns
///
/// `Ok(Some(artist))` with the first search result, or `Ok(None)` when the
/// search matched nothing.
///
/// # Errors
///
/// Returns [`SpotifyError::Http`] on network failures and non-success
/// statuses, and [`SpotifyError::Json`] when the body does not match the
/// search response shape.
///
/// # Example
///
/// ```
/// let artist = search_artist(&http, &config, &token, "Good Kid")?;
/// if let Some(artist) = artist {
///     println!("{} ({})", artist.name, artist.id);
/// }
/// ```
///
/// [`SpotifyError::Http`]: crate::error::SpotifyError::Http
/// [`SpotifyError::Json`]: crate::error::SpotifyError::Json
pub fn search_artist(
    http: &Client,
    config: &Config,
    token: &Token,
    name: &str,
) -> Result<Option<Artist>> {
    let api_url = format!("{uri}/search", uri = config.api_url());

    let response = http
        .get(&api_url)
        .bearer_auth(&token.access_token)
        .query(&[("q", name), ("type", "artist"), ("limit", "1")])
        .send()?
        .error_for_status()?;

    let res = response.json::<SearchArtistsResponse>()?;
    debug!(
        "Search for {:?} matched {} artists in total",
        name, res.artists.total
    );

    Ok(res.artists.items.into_iter().next())
}

/// Retrieves the top tracks of an artist.
///
/// Sends `GET {api}/artists/{id}/top-tracks` for the market configured in
/// [`Config::market`].
///
/// # Arguments
///
/// * `http` - HTTP client used for the request
/// * `config` - Configuration providing the API base URL and market
/// * `token` - Bearer token from the client-credentials grant
/// * `artist_id` - Spotify ID of the artist
///
/// # Returns
///
/// The tracks in the order Spotify ranks them. The list may be empty when the
/// artist has no tracks available in the market.
///
/// # Errors
///
/// Returns [`SpotifyError::Http`] on network failures and non-success
/// statuses (an unknown artist ID yields a 404), and [`SpotifyError::Json`]
/// on an unexpected body.
///
/// [`SpotifyError::Http`]: crate::error::SpotifyError::Http
/// [`SpotifyError::Json`]: crate::error::SpotifyError::Json
pub fn get_top_tracks(
    http: &Client,
    config: &Config,
    token: &Token,
    artist_id: &ArtistId,
) -> Result<Vec<Track>> {
    let api_url = format!(
        "{uri}/artists/{id}/top-tracks",
        uri = config.api_url(),
        id = artist_id
    );

    let response = http
        .get(&api_url)
        .bearer_auth(&token.access_token)
        .query(&[("market", config.market())])
        .send()?
        .error_for_status()?;

    let res = response.json::<TopTracksResponse>()?;
    Ok(res.tracks)
}
