//! Swipeable album carousel
//!
//! Reads `ReadStore<CarouselState>` and `ReadStore<GestureState>` via lenses.
//! Pointer input is forwarded raw; whether a drag becomes a swipe is decided
//! by the caller.

use crate::components::album_card::AlbumCard;
use crate::components::button::ChromelessButton;
use crate::components::icons::{ChevronLeftIcon, ChevronRightIcon};
use crate::components::progress::ProgressView;
use crate::components::utils::track_transform;
use crate::stores::{CarouselState, CarouselStateStoreExt, GestureState, GestureStateStoreExt};
use dioxus::prelude::*;

#[component]
pub fn CarouselView(
    carousel: ReadStore<CarouselState>,
    gesture: ReadStore<GestureState>,
    is_playing: bool,
    on_prev: EventHandler<()>,
    on_next: EventHandler<()>,
    on_toggle_play: EventHandler<()>,
    on_drag_start: EventHandler<f64>,
    on_drag_move: EventHandler<f64>,
    on_drag_end: EventHandler<()>,
    on_drag_cancel: EventHandler<()>,
) -> Element {
    let albums = carousel.albums().read().clone();
    let current_index = *carousel.current_index().read();
    let Some(index) = current_index else {
        return rsx! {};
    };

    let dragging = *gesture.dragging().read();
    let offset = *gesture.offset().read();
    let transform = track_transform(index, offset);
    // No easing while the card follows the pointer
    let transition = if dragging {
        "none"
    } else {
        "transform 300ms ease-out"
    };

    rsx! {
        div { class: "flex flex-col items-center gap-6",
            div {
                class: "relative w-full max-w-md overflow-hidden touch-pan-y",
                class: if dragging { "cursor-grabbing" } else { "cursor-grab" },
                "data-testid": "carousel",
                onpointerdown: move |evt: PointerEvent| {
                    on_drag_start.call(evt.client_coordinates().x);
                },
                onpointermove: move |evt: PointerEvent| {
                    if dragging {
                        on_drag_move.call(evt.client_coordinates().x);
                    }
                },
                onpointerup: move |_| on_drag_end.call(()),
                onpointercancel: move |_| on_drag_cancel.call(()),
                onpointerleave: move |_| {
                    if dragging {
                        on_drag_cancel.call(());
                    }
                },
                div {
                    class: "flex",
                    style: "transform: {transform}; transition: {transition};",
                    for (i , album) in albums.into_iter().enumerate() {
                        AlbumCard {
                            key: "{album.id}",
                            album,
                            is_current: i == index,
                            is_playing: is_playing && i == index,
                            on_toggle_play,
                        }
                    }
                }
            }

            div { class: "flex items-center gap-6",
                ChromelessButton {
                    class: Some(nav_button_class().to_string()),
                    aria_label: Some("Previous album".to_string()),
                    disabled: !*carousel.can_prev().read(),
                    onclick: move |_| on_prev.call(()),
                    ChevronLeftIcon { class: "w-6 h-6" }
                }
                ProgressView { carousel }
                ChromelessButton {
                    class: Some(nav_button_class().to_string()),
                    aria_label: Some("Next album".to_string()),
                    disabled: !*carousel.can_next().read(),
                    onclick: move |_| on_next.call(()),
                    ChevronRightIcon { class: "w-6 h-6" }
                }
            }
        }
    }
}

fn nav_button_class() -> &'static str {
    "w-11 h-11 rounded-full bg-gray-800 hover:bg-gray-700 text-white flex items-center justify-center transition-colors disabled:opacity-30 disabled:cursor-not-allowed"
}
