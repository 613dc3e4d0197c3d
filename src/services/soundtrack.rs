use serde::Serialize;

use crate::models::{Item, Progress};

/// Songs included in the playlist and its search link
pub const PLAYLIST_TRACK_LIMIT: usize = 10;

const SPOTIFY_SEARCH_URL: &str = "https://open.spotify.com/search/";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaylistTrack {
    pub song: String,
    pub title: String,
    pub year: i32,
    pub rating: u8,
}

/// A soundtrack built from the songs of the user's rated movies
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Playlist {
    pub name: String,
    /// Highest rated first, at most `PLAYLIST_TRACK_LIMIT`
    pub tracks: Vec<PlaylistTrack>,
    /// Rated songs left out of `tracks`
    pub remaining: usize,
    pub search_query: String,
    pub search_url: String,
}

/// Builds the playlist, or `None` when nothing has been rated
pub fn build_playlist(catalog: &[Item], progress: &Progress) -> Option<Playlist> {
    let mut rated: Vec<(&Item, u8)> = catalog
        .iter()
        .map(|item| (item, progress.rating(item.id)))
        .filter(|(_, rating)| *rating > 0)
        .collect();

    if rated.is_empty() {
        return None;
    }

    rated.sort_by(|a, b| b.1.cmp(&a.1));

    let total = rated.len();
    let tracks: Vec<PlaylistTrack> = rated
        .into_iter()
        .take(PLAYLIST_TRACK_LIMIT)
        .map(|(item, rating)| PlaylistTrack {
            song: item.song.clone(),
            title: item.title.clone(),
            year: item.year,
            rating,
        })
        .collect();

    let search_query = tracks
        .iter()
        .map(|track| track.song.as_str())
        .collect::<Vec<_>>()
        .join(" OR ");
    let search_url = format!("{}{}", SPOTIFY_SEARCH_URL, urlencoding::encode(&search_query));

    Some(Playlist {
        name: format!("My Disney Soundtrack ({} songs)", total),
        remaining: total - tracks.len(),
        tracks,
        search_query,
        search_url,
    })
}
