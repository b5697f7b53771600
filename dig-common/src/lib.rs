//! dig-common - crate digging state machine
//!
//! Everything here is pure: no network, no DOM, no timers. The web shell
//! performs the I/O and feeds results back in.

mod autoplay;
mod carousel;
mod digger;
mod error;
mod filters;
mod gesture;
mod keyboard;
mod models;
mod playback;
mod provider;
mod query;

pub use autoplay::{AutoplayScheduler, AutoplayTicket, DEFAULT_AUTOPLAY_DELAY};
pub use carousel::{Carousel, Progress};
pub use digger::{CrateDigger, DiggerConfig, DiggerSnapshot, LoadOutcome, LoadRequest, Navigation};
pub use error::{FetchError, PlaybackRejected};
pub use filters::FilterSelection;
pub use gesture::{DragGesture, SwipeDirection, DEFAULT_SWIPE_THRESHOLD};
pub use keyboard::KeyCommand;
pub use models::{Album, AlbumCollection, Genre};
pub use playback::{AudioOutput, PlaybackController, PlaybackState, DEFAULT_VOLUME};
pub use provider::AlbumProvider;
pub use query::{
    CrateQuery, CrateSource, ALBUMS_ONLY_MIN_TRACKS, CHART_COUNT_RANGE, DEFAULT_CRATE_SIZE,
    RANDOM_COUNT_RANGE, SEARCH_COUNT_RANGE,
};

#[cfg(test)]
pub(crate) mod test_support;
