//! Document-level keyboard shortcuts for the carousel
//!
//! Registered on the document so arrows and space work wherever focus is
//! (focus usually sits on body). Keys typed into form controls, and chords
//! with a modifier held, are left to the browser.

use crate::service::DiggerService;
use dig_common::KeyCommand;
use dig_ui::wasm_utils::DocumentEventListener;
use dioxus::dioxus_core::{Runtime, RuntimeGuard};
use dioxus::prelude::*;
use wasm_bindgen_x::JsCast;

/// Attach the keydown listener for the lifetime of the calling component
pub fn use_keyboard_shortcuts(service: DiggerService) {
    let mut listener: Signal<Option<DocumentEventListener>> = use_signal(|| None);

    // use_effect so the DOM is queried after the first render
    use_effect(move || {
        let Some(document) = web_sys_x::window().and_then(|w| w.document()) else {
            return;
        };

        // The callback runs from wasm-bindgen, outside the Dioxus runtime
        let runtime = Runtime::current();

        listener.set(Some(DocumentEventListener::new(
            document,
            "keydown",
            move |event: wasm_bindgen_x::JsValue| {
                let _guard = RuntimeGuard::new(runtime.clone());
                let Ok(event) = event.dyn_into::<web_sys_x::KeyboardEvent>() else {
                    return;
                };
                if event.meta_key() || event.ctrl_key() || event.alt_key() {
                    return;
                }
                if is_typing_target(&event) {
                    return;
                }
                let Some(command) = KeyCommand::from_key(&event.key()) else {
                    return;
                };
                if service.handle_key(command) && command.suppresses_default() {
                    event.prevent_default();
                }
            },
        )));
    });
}

fn is_typing_target(event: &web_sys_x::KeyboardEvent) -> bool {
    event
        .target()
        .and_then(|t| t.dyn_into::<web_sys_x::Element>().ok())
        .map(|el| matches!(el.tag_name().as_str(), "INPUT" | "TEXTAREA" | "SELECT"))
        .unwrap_or(false)
}
