//! dig-ui - Stores and view components for the crate digger
//!
//! Views are pure: they read stores through lenses and report user input
//! through callbacks. Fetching, audio and timers live in dig-web.

pub mod components;
pub mod stores;
pub mod wasm_utils;

pub use components::*;
