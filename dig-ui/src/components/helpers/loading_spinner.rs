use dioxus::prelude::*;

/// Spinner with a message next to it
#[component]
pub fn LoadingSpinner(
    #[props(default = "Loading...".to_string())] message: String,
) -> Element {
    rsx! {
        div {
            class: "flex justify-center items-center py-24",
            role: "status",
            div { class: "animate-spin rounded-full h-10 w-10 border-b-2 border-amber-400" }
            p { class: "ml-4 text-gray-300", "{message}" }
        }
    }
}
