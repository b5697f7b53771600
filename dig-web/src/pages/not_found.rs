use crate::Route;
use dioxus::prelude::*;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        div { class: "flex flex-col items-center justify-center gap-4 py-24 text-gray-400",
            p { "Nothing to dig at /{path}" }
            Link { class: "text-amber-400 hover:text-amber-300", to: Route::Dig {}, "Back to the crates" }
        }
    }
}
