//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Input events (pointer, keys, HUD buttons)
//! - Storage (LocalStorage on web, in-memory natively)
//! - Wall-clock timestamps for the leaderboard

pub mod input;
#[cfg(target_arch = "wasm32")]
pub mod storage;

pub use input::{Button, PointerInput, client_to_canvas, command_for_button, command_for_key, display_size};
#[cfg(target_arch = "wasm32")]
pub use storage::LocalStorage;

/// Current time as an ISO-8601 UTC string, e.g. `2026-10-19T14:03:07.512Z`
#[cfg(target_arch = "wasm32")]
pub fn now_iso8601() -> String {
    String::from(js_sys::Date::new_0().to_iso_string())
}

/// Current time as an ISO-8601 UTC string, e.g. `2026-10-19T14:03:07.512Z`
#[cfg(not(target_arch = "wasm32"))]
pub fn now_iso8601() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}
