use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// Bearer token returned by the client-credentials grant.
///
/// Never refreshed; `expires_in` is kept for diagnostics only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
    #[serde(default)]
    pub expires_in: u64,
}

/// Spotify ID of an artist, e.g. `0jIXR8ZrhKxOE5iMzkqfsU`.
///
/// Serialized as the bare string so it can be read straight out of search
/// results.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtistId(pub String);

impl ArtistId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ArtistId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Artist as returned by the search endpoint.
///
/// # Fields
///
/// * `id` - Spotify ID, used for the top-tracks lookup
/// * `name` - Display name
/// * `genres` - Genres Spotify associates with the artist, possibly empty
/// * `popularity` - Popularity score between 0 and 100
/// * `followers` - Follower count, when present
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artist {
    pub id: ArtistId,
    pub name: String,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub popularity: u32,
    #[serde(default)]
    pub followers: Option<Followers>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Followers {
    pub total: u64,
}

/// Response body of `GET /search?type=artist`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchArtistsResponse {
    pub artists: ArtistsPage,
}

/// One page of artist search results. `total` counts all matches, not just
/// the items on this page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistsPage {
    pub items: Vec<Artist>,
    #[serde(default)]
    pub total: u64,
}

/// Response body of `GET /artists/{id}/top-tracks`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopTracksResponse {
    pub tracks: Vec<Track>,
}

/// Track from an artist's top-tracks list.
///
/// Only `name` is required; the remaining metadata feeds the table view and
/// falls back to defaults when Spotify omits it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub album: Option<TrackAlbum>,
    #[serde(default)]
    pub popularity: u32,
    #[serde(default)]
    pub duration_ms: u64,
    #[serde(default)]
    pub explicit: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackAlbum {
    pub name: String,
}

/// Row of the `--table` view. `rank` starts at 1 and follows the order of the
/// top-tracks response.
#[derive(Tabled)]
pub struct TrackTableRow {
    #[tabled(rename = "#")]
    pub rank: usize,
    pub name: String,
    pub album: String,
    pub popularity: u32,
    pub duration: String,
}
