//! Platform abstraction layer
//!
//! Handles the browser side of the background:
//! - Canvas lookup and 2D context
//! - Animation frame scheduling and cancellation
//! - Resize/unload listeners
//! - Reduced-motion detection
//! - One running loop per canvas

pub mod registry;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use registry::LoopRegistry;

#[cfg(target_arch = "wasm32")]
pub use web::{BackgroundHandle, run, start_background};
