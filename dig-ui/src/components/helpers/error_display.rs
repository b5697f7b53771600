//! Full-page error state

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::icons::{AlertTriangleIcon, RefreshIcon};
use dioxus::prelude::*;

/// Shown in place of the carousel when nothing could be loaded yet
#[component]
pub fn ErrorDisplay(message: String, on_retry: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "flex flex-col items-center justify-center gap-4 py-24 text-center",
            role: "alert",
            AlertTriangleIcon { class: "w-10 h-10 text-red-400" }
            p { class: "text-red-100", "{message}" }
            Button {
                variant: ButtonVariant::Primary,
                size: ButtonSize::Medium,
                onclick: move |_| on_retry.call(()),
                RefreshIcon {}
                "Try again"
            }
        }
    }
}
