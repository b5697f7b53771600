use crate::components::utils::progress_label;
use crate::stores::{CarouselState, CarouselStateStoreExt};
use dioxus::prelude::*;

/// Position in the crate: a counter plus one dot per album
#[component]
pub fn ProgressView(carousel: ReadStore<CarouselState>) -> Element {
    let Some(progress) = *carousel.progress().read() else {
        return rsx! {};
    };
    let label = progress_label(progress);

    rsx! {
        div {
            class: "flex flex-col items-center gap-2 min-w-24",
            aria_live: "polite",
            span { class: "text-sm text-gray-300 tabular-nums", "{label}" }
            div { class: "flex gap-1",
                for i in 0..progress.total {
                    span {
                        key: "{i}",
                        class: if i == progress.index { "w-2 h-2 rounded-full bg-amber-400" } else { "w-1.5 h-1.5 rounded-full bg-gray-600 self-center" },
                    }
                }
            }
        }
    }
}
