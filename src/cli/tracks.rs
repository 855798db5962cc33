use tabled::Table;

use crate::{config::Config, error, utils, warning};

use super::{connect, resolve_artist, spinner};

/// Prints the top tracks of the best match for `artist_name`.
///
/// A search without results is reported with `No such artist!` and leaves
/// the process successful; no track lookup is attempted in that case.
pub fn tracks(config: Config, artist_name: &str, table: bool) {
    let mut client = connect(config);

    if resolve_artist(&mut client, artist_name).is_none() {
        warning!("No such artist!");
        return;
    }

    let pb = spinner("Fetching top tracks...");
    let result = client.top_tracks();
    pb.finish_and_clear();

    let tracks = match result {
        Ok(t) => t,
        Err(e) => error!("Failed to fetch top tracks. Err: {}", e),
    };

    if tracks.is_empty() {
        warning!(
            "No top tracks for {} in market {}.",
            artist_name,
            client.config().market()
        );
        return;
    }

    if table {
        println!("{}", Table::new(utils::track_table_rows(&tracks)));
    } else {
        println!("{}", utils::format_track_listing(&tracks));
    }
}
