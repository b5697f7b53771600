//! `<audio>` element as the preview output device

use dig_common::{AudioOutput, PlaybackRejected};
use tracing::debug;

/// Wraps the page's single `<audio>` element.
///
/// Calls before the element is mounted are dropped; the machine's state is
/// unaffected either way.
#[derive(Default)]
pub struct WebAudioOutput {
    element: Option<web_sys_x::HtmlMediaElement>,
}

impl WebAudioOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the audio element reference (called from the page's onmounted)
    pub fn attach(&mut self, element: web_sys_x::HtmlMediaElement) {
        self.element = Some(element);
    }
}

impl AudioOutput for WebAudioOutput {
    fn bind(&mut self, src: &str) {
        if let Some(ref audio) = self.element {
            audio.set_src(src);
        }
    }

    fn set_volume(&mut self, volume: f64) {
        if let Some(ref audio) = self.element {
            audio.set_volume(volume.clamp(0.0, 1.0));
        }
    }

    fn play(&mut self) -> Result<(), PlaybackRejected> {
        let Some(ref audio) = self.element else {
            return Err(PlaybackRejected("audio element not mounted".to_string()));
        };
        let promise: js_sys_x::Promise = audio
            .play()
            .map_err(|e| PlaybackRejected(format!("{e:?}")))?;

        // Autoplay policy rejects asynchronously, after we've already
        // reported Playing. Nothing to do but note it.
        wasm_bindgen_futures_x::spawn_local(async move {
            if let Err(e) = wasm_bindgen_futures_x::JsFuture::from(promise).await {
                debug!("Preview playback rejected by the browser: {:?}", e);
            }
        });
        Ok(())
    }

    fn pause(&mut self) {
        if let Some(ref audio) = self.element {
            let _ = audio.pause();
        }
    }

    fn rewind(&mut self) {
        if let Some(ref audio) = self.element {
            audio.set_current_time(0.0);
        }
    }
}
