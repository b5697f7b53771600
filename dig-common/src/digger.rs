//! The crate digging state machine.
//!
//! [`CrateDigger`] ties the carousel, playback, gesture, filters and autoplay
//! together and enforces their ordering rules: playback always stops before
//! the current card changes, and nothing deferred outlives the state it was
//! issued for. Callers do the I/O (HTTP, timers, DOM) and report back.

use std::time::Duration;

use crate::autoplay::{AutoplayScheduler, AutoplayTicket, DEFAULT_AUTOPLAY_DELAY};
use crate::carousel::{Carousel, Progress};
use crate::error::FetchError;
use crate::filters::FilterSelection;
use crate::gesture::{DragGesture, SwipeDirection, DEFAULT_SWIPE_THRESHOLD};
use crate::keyboard::KeyCommand;
use crate::models::{Album, AlbumCollection, Genre};
use crate::playback::{AudioOutput, PlaybackController, PlaybackState, DEFAULT_VOLUME};
use crate::query::{CrateQuery, CrateSource, DEFAULT_CRATE_SIZE};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq)]
pub struct DiggerConfig {
    /// Albums requested per crate
    pub crate_size: u32,
    /// Drag distance in pixels that turns into a swipe
    pub swipe_threshold: f64,
    pub autoplay_delay: Duration,
    pub volume: f64,
}

impl Default for DiggerConfig {
    fn default() -> Self {
        Self {
            crate_size: DEFAULT_CRATE_SIZE,
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            autoplay_delay: DEFAULT_AUTOPLAY_DELAY,
            volume: DEFAULT_VOLUME,
        }
    }
}

/// An album fetch the caller should perform, tagged so its result can be
/// matched back up with [`CrateDigger::finish_load`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    pub generation: u64,
    pub query: CrateQuery,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The crate was replaced
    Applied { count: usize },
    /// The fetch failed; whatever was on screen stays
    Failed(FetchError),
    /// A newer load was started in the meantime; the result was dropped
    Stale,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Moved {
        index: usize,
        /// Present once the user has played something by hand
        autoplay: Option<AutoplayTicket>,
    },
    /// Already at the edge of the crate
    Blocked,
}

impl Navigation {
    /// A move replaces whatever autoplay was pending; a blocked move leaves
    /// it untouched.
    pub fn supersedes_pending(&self) -> bool {
        matches!(self, Navigation::Moved { .. })
    }

    pub fn autoplay(&self) -> Option<AutoplayTicket> {
        match self {
            Navigation::Moved { autoplay, .. } => *autoplay,
            Navigation::Blocked => None,
        }
    }
}

/// Everything the view needs, copied out of the machine after a mutation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiggerSnapshot {
    pub albums: Vec<Album>,
    pub current_index: Option<usize>,
    pub progress: Option<Progress>,
    pub can_prev: bool,
    pub can_next: bool,
    pub playback: PlaybackState,
    pub dragging: bool,
    pub drag_offset: f64,
    pub genres: Vec<Genre>,
    pub selected_genre_ids: Vec<u32>,
    pub selected_genre_names: Vec<String>,
    pub albums_only: bool,
    pub source: CrateSource,
    pub search_text: String,
    /// False while Search is chosen with blank text
    pub can_apply: bool,
    pub filter_open: bool,
    pub loading: bool,
    /// User-facing message of the last failed load
    pub error: Option<String>,
    pub has_loaded: bool,
}

pub struct CrateDigger<O> {
    config: DiggerConfig,
    carousel: Carousel,
    playback: PlaybackController<O>,
    gesture: DragGesture,
    filters: FilterSelection,
    autoplay: AutoplayScheduler,
    genres: Vec<Genre>,
    /// Set by the first manual play; gates autoplay after navigation
    has_interacted: bool,
    filter_open: bool,
    load_generation: u64,
    loading: bool,
    error: Option<FetchError>,
    has_loaded: bool,
}

impl<O: AudioOutput> CrateDigger<O> {
    pub fn new(output: O, config: DiggerConfig) -> Self {
        let playback = PlaybackController::new(output, config.volume);
        Self {
            config,
            carousel: Carousel::new(),
            playback,
            gesture: DragGesture::default(),
            filters: FilterSelection::new(),
            autoplay: AutoplayScheduler::new(),
            genres: Vec::new(),
            has_interacted: false,
            filter_open: false,
            load_generation: 0,
            loading: false,
            error: None,
            has_loaded: false,
        }
    }

    // --- Loading ---

    /// Store the genre list. A failed fetch leaves the list empty.
    pub fn set_genres(&mut self, result: Result<Vec<Genre>, FetchError>) {
        match result {
            Ok(genres) => {
                debug!("Loaded {} genres", genres.len());
                self.genres = genres;
            }
            Err(e) => {
                warn!("{}: {}", e, e.cause());
                self.genres.clear();
            }
        }
    }

    /// Start a reload with the current filters.
    ///
    /// Playback stops immediately. Any load still in flight becomes stale.
    pub fn begin_load(&mut self) -> LoadRequest {
        let query = self.filters.to_query(self.config.crate_size);
        self.begin_query(query)
    }

    /// Start loading a single album as a crate of one. Not-found comes back
    /// through [`Self::finish_load`] as [`FetchError::AlbumNotFound`].
    pub fn open_album(&mut self, id: u64) -> LoadRequest {
        self.begin_query(CrateQuery::album(id))
    }

    fn begin_query(&mut self, query: CrateQuery) -> LoadRequest {
        self.stop_playback();
        self.load_generation += 1;
        self.loading = true;
        self.error = None;

        info!(
            "Loading crate (generation {}): {}",
            self.load_generation,
            query.url("")
        );
        LoadRequest {
            generation: self.load_generation,
            query,
        }
    }

    /// Same as [`Self::begin_load`]; the filters are not touched in between
    pub fn retry(&mut self) -> LoadRequest {
        self.begin_load()
    }

    pub fn finish_load(
        &mut self,
        generation: u64,
        result: Result<AlbumCollection, FetchError>,
    ) -> LoadOutcome {
        if generation != self.load_generation {
            debug!(
                "Discarding stale load {} (latest is {})",
                generation, self.load_generation
            );
            return LoadOutcome::Stale;
        }
        self.loading = false;

        match result {
            Ok(collection) => {
                self.stop_playback();
                self.gesture.cancel();
                self.carousel.replace(collection);
                self.error = None;
                self.has_loaded = true;
                let count = self.carousel.len();
                info!("Loaded crate with {} albums", count);
                LoadOutcome::Applied { count }
            }
            Err(e) => {
                warn!("{}: {}", e, e.cause());
                self.error = Some(e.clone());
                LoadOutcome::Failed(e)
            }
        }
    }

    // --- Navigation ---

    pub fn next(&mut self) -> Navigation {
        if !self.carousel.can_next() {
            return Navigation::Blocked;
        }
        self.stop_playback();
        match self.carousel.step_next() {
            Some(index) => self.moved_to(index),
            None => Navigation::Blocked,
        }
    }

    pub fn prev(&mut self) -> Navigation {
        if !self.carousel.can_prev() {
            return Navigation::Blocked;
        }
        self.stop_playback();
        match self.carousel.step_prev() {
            Some(index) => self.moved_to(index),
            None => Navigation::Blocked,
        }
    }

    fn moved_to(&mut self, index: usize) -> Navigation {
        let autoplay = match (self.has_interacted, self.carousel.current()) {
            (true, Some(album)) => {
                Some(self.autoplay.schedule(album.id, self.config.autoplay_delay))
            }
            _ => None,
        };
        Navigation::Moved { index, autoplay }
    }

    // --- Playback ---

    /// Stop the preview and revoke any pending autoplay
    pub fn stop_playback(&mut self) {
        self.autoplay.invalidate();
        self.playback.stop();
    }

    /// Play the current album by hand. Returns false when the crate is empty.
    pub fn play_current(&mut self) -> bool {
        self.autoplay.invalidate();
        let Some(album) = self.carousel.current() else {
            return false;
        };
        self.playback.play(album);
        self.has_interacted = true;
        true
    }

    pub fn toggle_playback(&mut self) {
        if self.playback.is_playing() {
            self.stop_playback();
        } else {
            self.play_current();
        }
    }

    /// Timer callback for a ticket from [`Navigation::Moved`]. Plays only if
    /// the ticket is still the latest one and its album is still on screen.
    pub fn fire_autoplay(&mut self, ticket: AutoplayTicket) -> bool {
        if !self.autoplay.is_current(&ticket) {
            debug!("Dropping stale autoplay for album {}", ticket.album_id());
            return false;
        }
        let Some(album) = self
            .carousel
            .current()
            .filter(|album| album.id == ticket.album_id())
        else {
            debug!("Autoplay target {} is no longer current", ticket.album_id());
            return false;
        };
        debug!("Autoplaying album {}", album.id);
        self.playback.play(album);
        true
    }

    /// The output device reached the end of the clip
    pub fn on_ended(&mut self) {
        self.playback.on_ended();
    }

    // --- Gestures and keys ---

    pub fn drag_start(&mut self, x: f64) {
        self.gesture.start(x);
    }

    pub fn drag_move(&mut self, x: f64) -> bool {
        self.gesture.update(x)
    }

    /// Release the pointer. Navigates when the drag went past the threshold.
    pub fn drag_end(&mut self) -> Option<Navigation> {
        match self.gesture.finish(self.config.swipe_threshold)? {
            SwipeDirection::Next => Some(self.next()),
            SwipeDirection::Prev => Some(self.prev()),
        }
    }

    pub fn drag_cancel(&mut self) {
        self.gesture.cancel();
    }

    /// Returns the navigation for arrow keys, None for everything else.
    /// Keys are ignored while the filter panel is open.
    pub fn handle_key(&mut self, command: KeyCommand) -> Option<Navigation> {
        if self.filter_open {
            return None;
        }
        match command {
            KeyCommand::Next => Some(self.next()),
            KeyCommand::Prev => Some(self.prev()),
            KeyCommand::TogglePlayback => {
                self.toggle_playback();
                None
            }
        }
    }

    // --- Filters ---

    pub fn toggle_genre(&mut self, genre_id: u32) -> bool {
        self.stop_playback();
        self.filters.toggle_genre(genre_id)
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear();
    }

    pub fn set_albums_only(&mut self, albums_only: bool) {
        self.filters.set_albums_only(albums_only);
    }

    pub fn set_source(&mut self, source: CrateSource) {
        self.filters.set_source(source);
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.filters.set_search_text(text);
    }

    pub fn open_filters(&mut self) {
        self.filter_open = true;
    }

    pub fn close_filters(&mut self) {
        self.filter_open = false;
    }

    pub fn toggle_filters(&mut self) {
        self.filter_open = !self.filter_open;
    }

    /// Close the panel and reload with the current selection
    pub fn apply_filters(&mut self) -> LoadRequest {
        self.close_filters();
        self.begin_load()
    }

    // --- Read side ---

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn current_album(&self) -> Option<&Album> {
        self.carousel.current()
    }

    pub fn playback_state(&self) -> PlaybackState {
        self.playback.state()
    }

    pub fn gesture(&self) -> &DragGesture {
        &self.gesture
    }

    pub fn filters(&self) -> &FilterSelection {
        &self.filters
    }

    pub fn genres(&self) -> &[Genre] {
        &self.genres
    }

    pub fn error(&self) -> Option<&FetchError> {
        self.error.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_filter_open(&self) -> bool {
        self.filter_open
    }

    pub fn output_mut(&mut self) -> &mut O {
        self.playback.output_mut()
    }

    pub fn snapshot(&self) -> DiggerSnapshot {
        DiggerSnapshot {
            albums: self.carousel.albums().to_vec(),
            current_index: self.carousel.current_index(),
            progress: self.carousel.progress(),
            can_prev: self.carousel.can_prev(),
            can_next: self.carousel.can_next(),
            playback: self.playback.state(),
            dragging: self.gesture.is_dragging(),
            drag_offset: self.gesture.offset(),
            genres: self.genres.clone(),
            selected_genre_ids: self.filters.genre_ids().collect(),
            selected_genre_names: self
                .filters
                .selected_names(&self.genres)
                .into_iter()
                .map(str::to_string)
                .collect(),
            albums_only: self.filters.albums_only(),
            source: self.filters.source(),
            search_text: self.filters.search_text().to_string(),
            can_apply: self.filters.is_complete(),
            filter_open: self.filter_open,
            loading: self.loading,
            error: self.error.as_ref().map(|e| e.to_string()),
            has_loaded: self.has_loaded,
        }
    }
}
