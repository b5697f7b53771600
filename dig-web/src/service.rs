//! DiggerService - owns the digging machine and keeps the UI store in sync
//!
//! Every action mutates the `CrateDigger` and then calls `sync_to_store()`,
//! which copies a snapshot into `Store<DiggerUiState>`. The service also
//! runs the side effects the machine asks for: album/genre fetches and the
//! delayed autoplay timer.
//!
//! Components get the service with `use_digger()`.

use crate::api::ApiClient;
use crate::audio::WebAudioOutput;
use dig_common::{
    AlbumProvider, AutoplayTicket, CrateDigger, CrateSource, DiggerConfig, KeyCommand, LoadRequest,
    Navigation,
};
use dig_ui::stores::{DiggerUiState, DiggerUiStateStoreExt, GestureState};
use dioxus::prelude::*;
use std::time::Duration;
use tracing::{debug, info};

#[derive(Clone, Copy)]
pub struct DiggerService {
    /// What the views read
    pub state: Store<DiggerUiState>,
    machine: Signal<CrateDigger<WebAudioOutput>>,
    /// Pending delayed autoplay, cancelled when superseded
    autoplay_task: Signal<Option<Task>>,
    api: Signal<ApiClient>,
}

impl DiggerService {
    /// Must be created inside the component tree (stores and signals are
    /// owned by the creating scope).
    pub fn new(api: ApiClient, config: DiggerConfig) -> Self {
        Self {
            state: Store::new(DiggerUiState::default()),
            machine: Signal::new(CrateDigger::new(WebAudioOutput::new(), config)),
            autoplay_task: Signal::new(None),
            api: Signal::new(api),
        }
    }

    /// Fetch the genre list and the first crate
    pub fn start(&self) {
        self.load_genres();
        self.load(|m| m.begin_load());
    }

    /// Fetch the genre list and show a single album (shared link)
    pub fn start_with_album(&self, id: u64) {
        self.load_genres();
        self.load(|m| m.open_album(id));
    }

    /// Set the audio element reference (called from the page's onmounted)
    pub fn attach_audio(&self, element: web_sys_x::HtmlMediaElement) {
        self.update(|m| m.output_mut().attach(element));
    }

    // =========================================================================
    // Navigation and playback
    // =========================================================================

    pub fn next(&self) {
        let navigation = self.update(|m| m.next());
        self.after_navigation(navigation);
    }

    pub fn prev(&self) {
        let navigation = self.update(|m| m.prev());
        self.after_navigation(navigation);
    }

    pub fn toggle_playback(&self) {
        self.cancel_autoplay();
        self.update(|m| m.toggle_playback());
    }

    /// The `<audio>` element fired `ended`
    pub fn on_ended(&self) {
        self.update(|m| m.on_ended());
    }

    pub fn drag_start(&self, x: f64) {
        self.update(|m| m.drag_start(x));
    }

    /// Only the gesture store changes while the pointer moves
    pub fn drag_move(&self, x: f64) {
        let mut machine = self.machine;
        if !machine.write().drag_move(x) {
            return;
        }
        let next = GestureState::from(self.machine.peek().gesture());
        let state = self.state;
        if *state.gesture().peek() != next {
            state.gesture().set(next);
        }
    }

    pub fn drag_end(&self) {
        let navigation = self.update(|m| m.drag_end());
        if let Some(navigation) = navigation {
            self.after_navigation(navigation);
        }
    }

    pub fn drag_cancel(&self) {
        self.update(|m| m.drag_cancel());
    }

    /// Returns false when the key was ignored, so the caller can leave the
    /// browser's default behaviour alone
    pub fn handle_key(&self, command: KeyCommand) -> bool {
        if self.machine.peek().is_filter_open() {
            return false;
        }
        if command == KeyCommand::TogglePlayback {
            self.cancel_autoplay();
        }
        if let Some(navigation) = self.update(|m| m.handle_key(command)) {
            self.after_navigation(navigation);
        }
        true
    }

    // =========================================================================
    // Filters
    // =========================================================================

    pub fn toggle_genre(&self, genre_id: u32) {
        self.cancel_autoplay();
        self.update(|m| m.toggle_genre(genre_id));
    }

    pub fn clear_genres(&self) {
        self.update(|m| m.clear_filters());
    }

    pub fn set_albums_only(&self, albums_only: bool) {
        self.update(|m| m.set_albums_only(albums_only));
    }

    pub fn set_source(&self, source: CrateSource) {
        self.update(|m| m.set_source(source));
    }

    pub fn set_search_text(&self, text: String) {
        self.update(|m| m.set_search_text(text));
    }

    pub fn toggle_filters(&self) {
        self.update(|m| m.toggle_filters());
    }

    pub fn close_filters(&self) {
        self.update(|m| m.close_filters());
    }

    pub fn apply_filters(&self) {
        self.load(|m| m.apply_filters());
    }

    // =========================================================================
    // Loading
    // =========================================================================

    pub fn retry(&self) {
        self.load(|m| m.retry());
    }

    /// Reload with the current filters
    pub fn dig_again(&self) {
        self.load(|m| m.begin_load());
    }

    fn load(&self, begin: impl FnOnce(&mut CrateDigger<WebAudioOutput>) -> LoadRequest) {
        self.cancel_autoplay();
        let request = self.update(begin);
        let api = self.api.peek().clone();
        let service = *self;

        spawn(async move {
            let result = api.fetch_crate(&request.query).await;
            let outcome = service.update(|m| m.finish_load(request.generation, result));
            debug!("Load {} finished: {:?}", request.generation, outcome);
        });
    }

    fn load_genres(&self) {
        let api = self.api.peek().clone();
        let service = *self;
        spawn(async move {
            let result = api.fetch_genres().await;
            service.update(|m| m.set_genres(result));
        });
    }

    // =========================================================================
    // Autoplay
    // =========================================================================

    /// Reschedule autoplay after a move. A blocked move keeps whatever
    /// timer is already pending.
    fn after_navigation(&self, navigation: Navigation) {
        if !navigation.supersedes_pending() {
            return;
        }
        self.cancel_autoplay();
        if let Some(ticket) = navigation.autoplay() {
            self.schedule_autoplay(ticket);
        }
    }

    fn schedule_autoplay(&self, ticket: AutoplayTicket) {
        let service = *self;
        let task = spawn(async move {
            sleep(ticket.delay()).await;
            if service.update(|m| m.fire_autoplay(ticket)) {
                info!("Autoplayed album {}", ticket.album_id());
            }
        });
        let mut autoplay_task = self.autoplay_task;
        autoplay_task.set(Some(task));
    }

    fn cancel_autoplay(&self) {
        let mut autoplay_task = self.autoplay_task;
        if let Some(task) = autoplay_task.write().take() {
            task.cancel();
        }
    }

    // =========================================================================
    // Store sync
    // =========================================================================

    /// Apply a mutation, then push the new state to the store
    fn update<R>(&self, f: impl FnOnce(&mut CrateDigger<WebAudioOutput>) -> R) -> R {
        let mut machine = self.machine;
        let result = f(&mut machine.write());
        self.sync_to_store();
        result
    }

    /// Copy the machine's snapshot into the store. Sub-stores that did not
    /// change are left untouched so their readers don't re-render.
    pub fn sync_to_store(&self) {
        let next = DiggerUiState::from(&self.machine.peek().snapshot());
        let state = self.state;

        if *state.carousel().peek() != next.carousel {
            state.carousel().set(next.carousel);
        }
        if *state.playback().peek() != next.playback {
            state.playback().set(next.playback);
        }
        if *state.gesture().peek() != next.gesture {
            state.gesture().set(next.gesture);
        }
        if *state.filters().peek() != next.filters {
            state.filters().set(next.filters);
        }
        if *state.load().peek() != next.load {
            state.load().set(next.load);
        }
    }
}

/// Get the DiggerService from context
pub fn use_digger() -> DiggerService {
    use_context::<DiggerService>()
}

#[cfg(target_arch = "wasm32")]
async fn sleep(duration: Duration) {
    gloo_timers::future::TimeoutFuture::new(duration.as_millis() as u32).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}
