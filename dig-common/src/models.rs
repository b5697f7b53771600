//! Catalog data returned by the discovery API

use serde::{Deserialize, Serialize};

/// A genre the crate can be filtered by
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Genre {
    pub id: u32,
    pub name: String,
}

/// An album with a playable preview clip
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Album {
    pub id: u64,
    pub title: String,
    pub artist: String,
    pub cover_url: String,
    pub preview_url: String,
    /// Release year, as the first four characters of the release date
    #[serde(default)]
    pub year: Option<String>,
    /// Primary genre name
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub genres: Option<Vec<String>>,
    pub deezer_id: u64,
    #[serde(default)]
    pub deezer_link: Option<String>,
    #[serde(default)]
    pub nb_tracks: Option<u32>,
}

impl Album {
    /// Link to the album on Deezer, if the provider sent a non-empty one
    pub fn deezer_url(&self) -> Option<&str> {
        self.deezer_link.as_deref().filter(|link| !link.is_empty())
    }

    /// Genre to show on the card: the primary genre, else the first listed one
    pub fn display_genre(&self) -> Option<&str> {
        self.genre
            .as_deref()
            .filter(|g| !g.is_empty())
            .or_else(|| self.genres.as_ref()?.first().map(String::as_str))
    }

    pub fn track_count_label(&self) -> Option<String> {
        match self.nb_tracks? {
            1 => Some("1 track".to_string()),
            n => Some(format!("{n} tracks")),
        }
    }
}

/// A batch of albums as returned by `/albums/random` and `/albums/chart`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AlbumCollection {
    pub albums: Vec<Album>,
    pub total: usize,
}
