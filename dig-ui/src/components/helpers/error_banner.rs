use crate::components::icons::{AlertTriangleIcon, RefreshIcon};
use dioxus::prelude::*;

/// Inline error above a crate that is still on screen
#[component]
pub fn ErrorBanner(message: String, on_retry: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "flex items-center gap-3 bg-red-900/60 border border-red-700 text-red-100 px-4 py-2 rounded-lg mb-4",
            role: "alert",
            AlertTriangleIcon { class: "w-4 h-4 flex-shrink-0" }
            p { class: "flex-1 text-sm", "{message}" }
            button {
                class: "inline-flex items-center gap-1 text-sm text-red-100 hover:text-white",
                onclick: move |_| on_retry.call(()),
                RefreshIcon { class: "w-3.5 h-3.5" }
                "Retry"
            }
        }
    }
}
