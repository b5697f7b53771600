//! Preview playback over a single output device

use crate::error::PlaybackRejected;
use crate::models::Album;
use tracing::{debug, info};

/// Volume previews are played at
pub const DEFAULT_VOLUME: f64 = 0.5;

/// A single playable media endpoint (an `<audio>` element in the browser)
pub trait AudioOutput {
    /// Point the device at a new source
    fn bind(&mut self, src: &str);
    fn set_volume(&mut self, volume: f64);
    /// Ask the device to start. The environment may refuse.
    fn play(&mut self) -> Result<(), PlaybackRejected>;
    fn pause(&mut self);
    /// Seek back to the start of the bound source
    fn rewind(&mut self);
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PlaybackState {
    #[default]
    Stopped,
    Playing,
}

/// Owns the output device and guarantees at most one preview is active.
pub struct PlaybackController<O> {
    output: O,
    state: PlaybackState,
    volume: f64,
}

impl<O: AudioOutput> PlaybackController<O> {
    pub fn new(output: O, volume: f64) -> Self {
        Self {
            output,
            state: PlaybackState::Stopped,
            volume,
        }
    }

    /// Start the album's preview, stopping whatever was playing first.
    ///
    /// A refusal from the device is not an error: the state still reads
    /// `Playing`, matching what the play button shows.
    pub fn play(&mut self, album: &Album) {
        self.stop();

        self.output.bind(&album.preview_url);
        self.output.set_volume(self.volume);
        self.state = PlaybackState::Playing;

        match self.output.play() {
            Ok(()) => info!("Playing preview for album {}", album.id),
            Err(e) => debug!("Preview for album {} not started: {}", album.id, e),
        }
    }

    /// Pause and rewind. Safe to call repeatedly or before anything was bound.
    pub fn stop(&mut self) {
        self.output.pause();
        self.output.rewind();
        self.state = PlaybackState::Stopped;
    }

    /// The device finished the clip on its own; position is left where it is
    pub fn on_ended(&mut self) {
        self.state = PlaybackState::Stopped;
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }
}
