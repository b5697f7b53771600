//! Filter panel view
//!
//! Changing a filter here never reloads on its own; the crate is only dug
//! again through `on_apply`.

use crate::components::button::{Button, ButtonSize, ButtonVariant, ChromelessButton};
use crate::components::icons::XIcon;
use crate::components::segmented_control::{Segment, SegmentedControl};
use crate::stores::{FilterState, FilterStateStoreExt};
use dig_common::CrateSource;
use dioxus::prelude::*;

#[component]
pub fn FilterPanelView(
    filters: ReadStore<FilterState>,
    on_toggle_genre: EventHandler<u32>,
    on_clear: EventHandler<()>,
    on_albums_only_change: EventHandler<bool>,
    on_source_change: EventHandler<CrateSource>,
    on_search_change: EventHandler<String>,
    on_apply: EventHandler<()>,
    on_close: EventHandler<()>,
) -> Element {
    let source = *filters.source().read();
    let albums_only = *filters.albums_only().read();
    let has_selection = !filters.selected_ids().read().is_empty();
    let search_text = filters.search_text().read().clone();
    let can_apply = *filters.can_apply().read();

    rsx! {
        div {
            class: "bg-gray-900 border border-gray-800 rounded-xl p-5 mb-6 shadow-xl",
            "data-testid": "filter-panel",
            div { class: "flex items-center justify-between mb-4",
                h2 { class: "text-lg font-semibold text-white", "Filters" }
                ChromelessButton {
                    class: Some("text-gray-400 hover:text-white p-1 rounded".to_string()),
                    aria_label: Some("Close filters".to_string()),
                    onclick: move |_| on_close.call(()),
                    XIcon { class: "w-5 h-5" }
                }
            }

            SegmentedControl {
                segments: vec![
                    Segment::new("Random", CrateSource::Random),
                    Segment::new("Charts", CrateSource::Chart),
                    Segment::new("Search", CrateSource::Search),
                ],
                selected: source,
                on_select: move |s| on_source_change.call(s),
            }

            if source == CrateSource::Random {
                GenreChips { filters, on_toggle_genre }

                label { class: "flex items-center gap-2 mt-4 text-sm text-gray-300 cursor-pointer",
                    input {
                        r#type: "checkbox",
                        class: "accent-amber-500",
                        checked: albums_only,
                        onchange: move |evt: FormEvent| on_albums_only_change.call(evt.checked()),
                    }
                    "Albums only (no singles)"
                }
            } else if source == CrateSource::Search {
                input {
                    r#type: "search",
                    class: "mt-4 w-full rounded-lg bg-gray-800 border border-gray-700 px-3 py-2 text-white placeholder-gray-500 focus:outline-none focus:border-amber-500",
                    placeholder: "Artist or album",
                    aria_label: "Search albums",
                    value: "{search_text}",
                    oninput: move |evt: FormEvent| on_search_change.call(evt.value()),
                    onkeydown: move |evt: KeyboardEvent| {
                        if evt.key() == Key::Enter && can_apply {
                            on_apply.call(());
                        }
                    },
                }
            } else {
                p { class: "mt-4 text-sm text-gray-400",
                    "Current chart albums. Genre filters do not apply."
                }
            }

            div { class: "flex justify-end gap-2 mt-5",
                Button {
                    variant: ButtonVariant::Ghost,
                    size: ButtonSize::Small,
                    disabled: !has_selection,
                    onclick: move |_| on_clear.call(()),
                    "Clear"
                }
                Button {
                    variant: ButtonVariant::Primary,
                    size: ButtonSize::Small,
                    disabled: !can_apply,
                    onclick: move |_| on_apply.call(()),
                    "Dig"
                }
            }
        }
    }
}

#[component]
fn GenreChips(filters: ReadStore<FilterState>, on_toggle_genre: EventHandler<u32>) -> Element {
    let genres = filters.genres().read().clone();
    let selected = filters.selected_ids().read().clone();

    if genres.is_empty() {
        return rsx! {
            p { class: "mt-4 text-sm text-gray-500", "Genres are unavailable right now." }
        };
    }

    rsx! {
        div { class: "flex flex-wrap gap-2 mt-4",
            for genre in genres {
                {
                    let is_selected = selected.contains(&genre.id);
                    let id = genre.id;
                    rsx! {
                        ChromelessButton {
                            key: "{genre.id}",
                            class: Some(
                                if is_selected {
                                    "px-3 py-1 rounded-full text-sm bg-amber-500 text-gray-950"
                                } else {
                                    "px-3 py-1 rounded-full text-sm bg-gray-800 text-gray-300 hover:bg-gray-700"
                                }
                                    .to_string(),
                            ),
                            aria_pressed: Some(is_selected),
                            onclick: move |_| on_toggle_genre.call(id),
                            "{genre.name}"
                        }
                    }
                }
            }
        }
    }
}
