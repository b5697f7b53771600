pub mod api;
pub mod audio;
pub mod config;
pub mod keyboard;
pub mod pages;
pub mod service;

use api::ApiClient;
use config::AppConfig;
use dioxus::prelude::*;
use pages::{AppLayout, Dig, NotFound, SharedAlbum};
use service::DiggerService;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    Dig {},
    #[route("/album/:id")]
    SharedAlbum { id: u64 },
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    let config = use_hook(AppConfig::from_env);
    use_context_provider(|| DiggerService::new(ApiClient::new(&config), config.digger.clone()));

    rsx! {
        document::Title { "Crate Digger" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        div { class: "min-h-screen", Router::<Route> {} }
    }
}
