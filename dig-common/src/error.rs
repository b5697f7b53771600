use thiserror::Error;

/// Failure talking to the album provider.
///
/// The display text is what the user sees; the payload keeps the underlying
/// cause for logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Failed to fetch genres")]
    Genres(String),
    #[error("Failed to fetch albums")]
    Albums(String),
    /// The provider answered 404 for a single-album lookup
    #[error("Album not found")]
    AlbumNotFound(u64),
}

impl FetchError {
    pub fn cause(&self) -> String {
        match self {
            FetchError::Genres(cause) | FetchError::Albums(cause) => cause.clone(),
            FetchError::AlbumNotFound(id) => format!("no album with id {id}"),
        }
    }
}

/// The output device refused to start playback (e.g. browser autoplay policy)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Playback rejected: {0}")]
pub struct PlaybackRejected(pub String);
