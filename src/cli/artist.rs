use crate::{config::Config, info, success, warning};

use super::{connect, resolve_artist};

pub fn artist(config: Config, artist_name: &str) {
    let mut client = connect(config);

    let Some(artist) = resolve_artist(&mut client, artist_name) else {
        warning!("No such artist!");
        return;
    };

    success!("{} ({})", artist.name, artist.id);
    if !artist.genres.is_empty() {
        info!("Genres: {}", artist.genres.join(", "));
    }
    if let Some(followers) = &artist.followers {
        info!("Followers: {}", followers.total);
    }
    info!("Popularity: {}", artist.popularity);
}
