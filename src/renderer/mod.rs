//! Canvas rendering module
//!
//! Draws a `RenderFrame` with the 2D canvas API. HUD text is built separately
//! so it can be checked without a browser.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod hud;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
pub use hud::Hud;
