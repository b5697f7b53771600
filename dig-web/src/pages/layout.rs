use crate::Route;
use dioxus::prelude::*;

#[component]
pub fn AppLayout() -> Element {
    rsx! {
        main { class: "min-h-screen bg-gray-950 text-gray-100", Outlet::<Route> {} }
    }
}
