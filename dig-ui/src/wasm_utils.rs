//! Browser interop helpers
//!
//! A JS listener backed by a Rust `Closure` must keep the closure alive for as
//! long as it is attached. Rather than leaking it with `Closure::forget()`,
//! [`DocumentEventListener`] owns the closure and detaches it on drop, so a
//! listener's lifetime follows whatever holds it (typically a
//! `Signal<Option<DocumentEventListener>>` in the component that needs it).

use wasm_bindgen_x::prelude::*;

/// A document-level event listener, removed when dropped
pub struct DocumentEventListener {
    document: web_sys_x::Document,
    event_name: &'static str,
    callback: Closure<dyn FnMut(wasm_bindgen_x::JsValue)>,
}

impl DocumentEventListener {
    pub fn new(
        document: web_sys_x::Document,
        event_name: &'static str,
        callback: impl FnMut(wasm_bindgen_x::JsValue) + 'static,
    ) -> Self {
        let callback: Closure<dyn FnMut(wasm_bindgen_x::JsValue)> =
            Closure::wrap(Box::new(callback));

        if document
            .add_event_listener_with_callback(event_name, callback.as_ref().unchecked_ref())
            .is_err()
        {
            tracing::warn!("Could not attach document '{}' listener", event_name);
        }

        Self {
            document,
            event_name,
            callback,
        }
    }
}

impl Drop for DocumentEventListener {
    fn drop(&mut self) {
        let _ = self.document.remove_event_listener_with_callback(
            self.event_name,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}
