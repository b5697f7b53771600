//! Fixtures and fakes shared by the unit tests

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use crate::error::{FetchError, PlaybackRejected};
use crate::models::{Album, AlbumCollection, Genre};
use crate::playback::AudioOutput;
use crate::provider::AlbumProvider;

pub fn album(id: u64) -> Album {
    Album {
        id,
        title: format!("Album {id}"),
        artist: format!("Artist {id}"),
        cover_url: format!("https://cdn.example/{id}.jpg"),
        preview_url: format!("https://cdn.example/{id}.mp3"),
        year: Some("1999".to_string()),
        genre: None,
        genres: None,
        deezer_id: id,
        deezer_link: None,
        nb_tracks: Some(10),
    }
}

pub fn collection(n: usize) -> AlbumCollection {
    AlbumCollection {
        albums: (1..=n as u64).map(album).collect(),
        total: n,
    }
}

pub fn genres(n: usize) -> Vec<Genre> {
    [(132, "Pop"), (152, "Rock"), (129, "Jazz"), (116, "Hip-Hop")]
        .into_iter()
        .take(n)
        .map(|(id, name)| Genre {
            id,
            name: name.to_string(),
        })
        .collect()
}

/// Calls made against the fake output device, in order
#[derive(Debug, Clone, PartialEq)]
pub enum AudioCall {
    Bind(String),
    Volume(f64),
    Play,
    Pause,
    Rewind,
}

/// Output device that records every call. Clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct RecordingOutput {
    calls: Rc<RefCell<Vec<AudioCall>>>,
    reject_play: bool,
}

impl RecordingOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// A device that refuses to start, as a browser does under autoplay policy
    pub fn rejecting() -> Self {
        Self {
            reject_play: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<AudioCall> {
        self.calls.borrow().clone()
    }

    pub fn clear(&self) {
        self.calls.borrow_mut().clear();
    }

    fn record(&self, call: AudioCall) {
        self.calls.borrow_mut().push(call);
    }
}

impl AudioOutput for RecordingOutput {
    fn bind(&mut self, src: &str) {
        self.record(AudioCall::Bind(src.to_string()));
    }

    fn set_volume(&mut self, volume: f64) {
        self.record(AudioCall::Volume(volume));
    }

    fn play(&mut self) -> Result<(), PlaybackRejected> {
        self.record(AudioCall::Play);
        if self.reject_play {
            return Err(PlaybackRejected("NotAllowedError".to_string()));
        }
        Ok(())
    }

    fn pause(&mut self) {
        self.record(AudioCall::Pause);
    }

    fn rewind(&mut self) {
        self.record(AudioCall::Rewind);
    }
}

/// Provider serving canned responses and recording the URLs it was asked for
#[derive(Debug, Default)]
pub struct FakeProvider {
    pub genres: RefCell<Option<Result<Vec<Genre>, FetchError>>>,
    pub responses: RefCell<VecDeque<Result<AlbumCollection, FetchError>>>,
    /// Albums served by id; anything else is a 404
    pub albums: RefCell<HashMap<u64, Album>>,
    pub requests: RefCell<Vec<String>>,
}

impl FakeProvider {
    pub fn with_responses(
        responses: impl IntoIterator<Item = Result<AlbumCollection, FetchError>>,
    ) -> Self {
        Self {
            responses: RefCell::new(responses.into_iter().collect()),
            ..Self::default()
        }
    }

    fn next_response(&self) -> Result<AlbumCollection, FetchError> {
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(FetchError::Albums("no canned response".to_string())))
    }
}

impl AlbumProvider for FakeProvider {
    async fn fetch_genres(&self) -> Result<Vec<Genre>, FetchError> {
        self.requests.borrow_mut().push("/genres".to_string());
        self.genres
            .borrow_mut()
            .take()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn fetch_random_albums(
        &self,
        count: u32,
        genre_ids: &[u32],
        min_tracks: Option<u32>,
    ) -> Result<AlbumCollection, FetchError> {
        let query = crate::query::CrateQuery::random(count, genre_ids.iter().copied(), min_tracks);
        self.requests.borrow_mut().push(query.url(""));
        self.next_response()
    }

    async fn fetch_chart_albums(&self, count: u32) -> Result<AlbumCollection, FetchError> {
        self.requests
            .borrow_mut()
            .push(crate::query::CrateQuery::chart(count).url(""));
        self.next_response()
    }

    async fn fetch_search_albums(
        &self,
        q: &str,
        count: u32,
    ) -> Result<AlbumCollection, FetchError> {
        if let Some(query) = crate::query::CrateQuery::search(q, count) {
            self.requests.borrow_mut().push(query.url(""));
        }
        self.next_response()
    }

    async fn fetch_album(&self, id: u64) -> Result<Option<Album>, FetchError> {
        self.requests.borrow_mut().push(format!("/albums/{id}"));
        Ok(self.albums.borrow().get(&id).cloned())
    }
}
