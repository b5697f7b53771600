//! Album card component - pure view with callbacks

use crate::components::button::ChromelessButton;
use crate::components::icons::{ExternalLinkIcon, ImageIcon, PauseIcon, PlayIcon};
use dig_common::Album;
use dioxus::prelude::*;

/// One card in the carousel.
///
/// Only the current card shows the play control; the others are inert so a
/// drag that ends over them does not start anything.
#[component]
pub fn AlbumCard(
    album: Album,
    is_current: bool,
    is_playing: bool,
    on_toggle_play: EventHandler<()>,
) -> Element {
    let details: Vec<String> = [
        album.year.clone().filter(|y| !y.is_empty()),
        album.display_genre().map(str::to_string),
        album.track_count_label(),
    ]
    .into_iter()
    .flatten()
    .collect();
    let details = details.join(" · ");
    let deezer_url = album.deezer_url().map(str::to_string);

    rsx! {
        div {
            class: "w-full flex-shrink-0 px-6 select-none",
            "data-testid": "album-card",
            aria_hidden: if is_current { "false" } else { "true" },
            div { class: "relative aspect-square max-w-sm mx-auto rounded-xl overflow-hidden shadow-2xl bg-gray-800",
                if album.cover_url.is_empty() {
                    div { class: "w-full h-full flex items-center justify-center",
                        ImageIcon { class: "w-16 h-16 text-gray-600" }
                    }
                } else {
                    img {
                        src: "{album.cover_url}",
                        alt: "Cover of {album.title} by {album.artist}",
                        draggable: "false",
                        class: "w-full h-full object-cover pointer-events-none",
                    }
                }
                if is_current {
                    div { class: "absolute inset-0 flex items-end justify-end p-4",
                        ChromelessButton {
                            class: Some(
                                "w-14 h-14 rounded-full bg-amber-500 hover:bg-amber-400 text-gray-950 shadow-lg flex items-center justify-center transition-colors"
                                    .to_string(),
                            ),
                            aria_label: Some(if is_playing { "Stop preview" } else { "Play preview" }.to_string()),
                            aria_pressed: Some(is_playing),
                            onclick: move |evt: MouseEvent| {
                                evt.stop_propagation();
                                on_toggle_play.call(());
                            },
                            if is_playing {
                                PauseIcon { class: "w-6 h-6" }
                            } else {
                                PlayIcon { class: "w-6 h-6 ml-0.5" }
                            }
                        }
                    }
                }
            }
            div { class: "max-w-sm mx-auto mt-5 text-center",
                h2 {
                    class: "text-xl font-bold text-white truncate",
                    title: "{album.title}",
                    "{album.title}"
                }
                p {
                    class: "text-gray-300 truncate",
                    title: "{album.artist}",
                    "{album.artist}"
                }
                if !details.is_empty() {
                    p { class: "text-gray-500 text-sm mt-1", "{details}" }
                }
                div { class: "flex justify-center gap-4 mt-2",
                    if let Some(url) = deezer_url {
                        a {
                            class: "inline-flex items-center gap-1 text-sm text-amber-400 hover:text-amber-300",
                            href: "{url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "Open on Deezer"
                            ExternalLinkIcon { class: "w-3.5 h-3.5" }
                        }
                    }
                    if is_current {
                        a {
                            class: "text-sm text-gray-400 hover:text-gray-200",
                            href: "/album/{album.id}",
                            title: "Link to this album",
                            "Share"
                        }
                    }
                }
            }
        }
    }
}
