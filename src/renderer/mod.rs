//! Field rendering module
//!
//! Layers paint through the `Surface` trait. The browser backend draws on a
//! canvas 2D context; the recorder captures calls for tests and headless runs.

#[cfg(target_arch = "wasm32")]
pub mod canvas2d;
pub mod layers;
pub mod recording;
pub mod surface;

#[cfg(target_arch = "wasm32")]
pub use canvas2d::CanvasSurface;
pub use layers::draw_frame;
pub use recording::{DrawCommand, DrawSummary, RecordingSurface};
pub use surface::{Fill, Glyph, LinearGradient, Paint, Rgba, Shadow, Stroke, Surface, colors};
