//! Crate digging page view
//!
//! ## Reactive State Pattern
//! Takes the root `ReadStore<DiggerUiState>` and hands lensed sub-stores to
//! children, so a drag only re-renders the carousel and a filter toggle only
//! re-renders the panel.

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::carousel::CarouselView;
use crate::components::filter_panel::FilterPanelView;
use crate::components::helpers::{ErrorBanner, ErrorDisplay, LoadingSpinner};
use crate::components::icons::{DiscIcon, ShuffleIcon, SlidersIcon};
use crate::components::utils::{genre_summary, search_summary};
use crate::stores::{
    CarouselStateStoreExt, DiggerUiState, DiggerUiStateStoreExt, FilterStateStoreExt,
    LoadStateStoreExt, PlaybackUiStateStoreExt,
};
use dig_common::{CrateSource, PlaybackState};
use dioxus::prelude::*;

#[component]
pub fn CrateView(
    state: ReadStore<DiggerUiState>,
    // Carousel
    on_prev: EventHandler<()>,
    on_next: EventHandler<()>,
    on_toggle_play: EventHandler<()>,
    on_drag_start: EventHandler<f64>,
    on_drag_move: EventHandler<f64>,
    on_drag_end: EventHandler<()>,
    on_drag_cancel: EventHandler<()>,
    // Filters
    on_toggle_filters: EventHandler<()>,
    on_toggle_genre: EventHandler<u32>,
    on_clear_genres: EventHandler<()>,
    on_albums_only_change: EventHandler<bool>,
    on_source_change: EventHandler<CrateSource>,
    on_search_change: EventHandler<String>,
    on_apply_filters: EventHandler<()>,
    on_close_filters: EventHandler<()>,
    // Loading
    on_retry: EventHandler<()>,
    on_dig_again: EventHandler<()>,
) -> Element {
    let load = state.load();
    let loading = *load.loading().read();
    let error = load.error().read().clone();
    let has_loaded = *load.has_loaded().read();
    let filter_open = *state.filters().is_open().read();
    let is_playing = *state.playback().state().read() == PlaybackState::Playing;
    let is_empty = state.carousel().albums().read().is_empty();

    rsx! {
        div { class: "max-w-2xl mx-auto px-4 py-8",
            CrateHeader {
                state,
                loading,
                on_toggle_filters,
                on_dig_again,
            }

            if filter_open {
                FilterPanelView {
                    filters: state.filters(),
                    on_toggle_genre,
                    on_clear: on_clear_genres,
                    on_albums_only_change,
                    on_source_change,
                    on_search_change,
                    on_apply: on_apply_filters,
                    on_close: on_close_filters,
                }
            }

            if !has_loaded {
                if let Some(message) = error {
                    ErrorDisplay { message, on_retry }
                } else {
                    LoadingSpinner { message: "Digging through the crates...".to_string() }
                }
            } else {
                if let Some(message) = error {
                    ErrorBanner { message, on_retry }
                }
                if is_empty {
                    div { class: "flex flex-col items-center gap-3 py-24 text-gray-400",
                        DiscIcon { class: "w-12 h-12" }
                        p { "No albums in this crate. Try other filters." }
                    }
                } else {
                    CarouselView {
                        carousel: state.carousel(),
                        gesture: state.gesture(),
                        is_playing,
                        on_prev,
                        on_next,
                        on_toggle_play,
                        on_drag_start,
                        on_drag_move,
                        on_drag_end,
                        on_drag_cancel,
                    }
                }
                if loading {
                    p { class: "text-center text-sm text-gray-500 mt-4", "Digging..." }
                }
            }

            p { class: "text-center text-xs text-gray-600 mt-10",
                "← → to browse, space to play"
            }
        }
    }
}

#[component]
fn CrateHeader(
    state: ReadStore<DiggerUiState>,
    loading: bool,
    on_toggle_filters: EventHandler<()>,
    on_dig_again: EventHandler<()>,
) -> Element {
    let filters = state.filters();
    let source = *filters.source().read();
    let names = filters.selected_names().read().clone();
    let summary = match source {
        CrateSource::Random => genre_summary(&names),
        CrateSource::Chart => "Charts".to_string(),
        CrateSource::Search => search_summary(&filters.search_text().read()),
    };
    let count = names.len();

    rsx! {
        header { class: "flex items-center justify-between mb-6",
            h1 { class: "text-2xl font-bold text-white tracking-tight", "Crate Digger" }
            div { class: "flex items-center gap-2",
                Button {
                    variant: ButtonVariant::Secondary,
                    size: ButtonSize::Small,
                    title: Some("Filters".to_string()),
                    onclick: move |_| on_toggle_filters.call(()),
                    SlidersIcon {}
                    span { class: "max-w-40 truncate", "{summary}" }
                    if count > 0 && source == CrateSource::Random {
                        span { class: "bg-amber-500 text-gray-950 text-xs rounded-full px-1.5", "{count}" }
                    }
                }
                Button {
                    variant: ButtonVariant::Primary,
                    size: ButtonSize::Small,
                    disabled: loading,
                    onclick: move |_| on_dig_again.call(()),
                    ShuffleIcon {}
                    "Dig again"
                }
            }
        }
    }
}
