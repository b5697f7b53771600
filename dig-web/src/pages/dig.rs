//! The crate digging pages: wire `CrateView` to the `DiggerService`

use crate::keyboard::use_keyboard_shortcuts;
use crate::service::use_digger;
use dig_ui::CrateView;
use dioxus::prelude::*;
use tracing::warn;
use wasm_bindgen_x::JsCast;

const AUDIO_ELEMENT_ID: &str = "crate-preview-audio";

#[component]
pub fn Dig() -> Element {
    rsx! {
        DigBody { album_id: None }
    }
}

/// `/album/:id` opens a crate holding just that album
#[component]
pub fn SharedAlbum(id: u64) -> Element {
    rsx! {
        DigBody { album_id: Some(id) }
    }
}

#[component]
fn DigBody(album_id: Option<u64>) -> Element {
    let digger = use_digger();

    use_hook(move || match album_id {
        Some(id) => digger.start_with_album(id),
        None => digger.start(),
    });
    use_keyboard_shortcuts(digger);

    rsx! {
        audio {
            id: AUDIO_ELEMENT_ID,
            preload: "none",
            onmounted: move |_| {
                match find_audio_element() {
                    Some(element) => digger.attach_audio(element),
                    None => warn!("Preview audio element not found"),
                }
            },
            onended: move |_| digger.on_ended(),
        }

        CrateView {
            state: digger.state,
            on_prev: move |_| digger.prev(),
            on_next: move |_| digger.next(),
            on_toggle_play: move |_| digger.toggle_playback(),
            on_drag_start: move |x| digger.drag_start(x),
            on_drag_move: move |x| digger.drag_move(x),
            on_drag_end: move |_| digger.drag_end(),
            on_drag_cancel: move |_| digger.drag_cancel(),
            on_toggle_filters: move |_| digger.toggle_filters(),
            on_toggle_genre: move |id| digger.toggle_genre(id),
            on_clear_genres: move |_| digger.clear_genres(),
            on_albums_only_change: move |albums_only| digger.set_albums_only(albums_only),
            on_source_change: move |source| digger.set_source(source),
            on_search_change: move |text| digger.set_search_text(text),
            on_apply_filters: move |_| digger.apply_filters(),
            on_close_filters: move |_| digger.close_filters(),
            on_retry: move |_| digger.retry(),
            on_dig_again: move |_| digger.dig_again(),
        }
    }
}

fn find_audio_element() -> Option<web_sys_x::HtmlMediaElement> {
    web_sys_x::window()?
        .document()?
        .get_element_by_id(AUDIO_ELEMENT_ID)?
        .dyn_into::<web_sys_x::HtmlMediaElement>()
        .ok()
}
