//! # CLI Module
//!
//! Command implementations for the `toptracks` binary. Each command builds a
//! [`SpotifyClient`] from the given configuration, runs its lookups and
//! renders the result. Failures are fatal and reported with [`error!`].
//!
//! ## Commands
//!
//! - [`tracks`] - Resolves an artist and prints its top tracks
//! - [`artist`] - Resolves an artist and prints what Spotify matched
//!
//! ## Output
//!
//! Track listings are written to standard output as plain `N. Track Name`
//! lines so they can be piped. Spinners are drawn on standard error while
//! requests are in flight.
//!
//! [`SpotifyClient`]: crate::spotify::SpotifyClient
//! [`error!`]: crate::error!

mod artist;
mod tracks;

pub use artist::artist;
pub use tracks::tracks;

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{config::Config, error, spotify::SpotifyClient, types::Artist};

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}

fn connect(config: Config) -> SpotifyClient {
    let pb = spinner("Requesting access token...");
    let client = SpotifyClient::connect(config);
    pb.finish_and_clear();

    match client {
        Ok(c) => c,
        Err(e) => error!("Failed to authenticate with Spotify. Err: {}", e),
    }
}

fn resolve_artist(client: &mut SpotifyClient, name: &str) -> Option<Artist> {
    let pb = spinner(&format!("Searching for {}...", name));
    let result = client.search_artist(name);
    pb.finish_and_clear();

    match result {
        Ok(artist) => artist,
        Err(e) => error!("Failed to search for artist. Err: {}", e),
    }
}
