use base64::{Engine, engine::general_purpose::STANDARD};

use crate::types::{Track, TrackTableRow};

/// Value of the `Authorization` header for the client-credentials grant.
pub fn basic_auth_value(client_id: &str, client_secret: &str) -> String {
    let encoded = STANDARD.encode(format!("{client_id}:{client_secret}"));
    format!("Basic {encoded}")
}

/// Renders tracks as `N. Name` lines, numbered from 1 in the given order.
pub fn format_track_listing(tracks: &[Track]) -> String {
    tracks
        .iter()
        .enumerate()
        .map(|(i, track)| format!("{}. {}", i + 1, track.name))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_duration(duration_ms: u64) -> String {
    let total_secs = duration_ms / 1000;
    format!("{}:{:02}", total_secs / 60, total_secs % 60)
}

pub fn track_table_rows(tracks: &[Track]) -> Vec<TrackTableRow> {
    tracks
        .iter()
        .enumerate()
        .map(|(i, t)| TrackTableRow {
            rank: i + 1,
            name: if t.explicit {
                format!("{} (E)", t.name)
            } else {
                t.name.clone()
            },
            album: t.album.as_ref().map(|a| a.name.clone()).unwrap_or_default(),
            popularity: t.popularity,
            duration: format_duration(t.duration_ms),
        })
        .collect()
}
