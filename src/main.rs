//! Neural Field entry point
//!
//! On the web this starts the background once the page is ready. Natively it
//! runs the field headless against a recording surface and prints a summary.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    neural_field::platform::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use neural_field::renderer::RecordingSurface;
    use neural_field::{ParticleField, Settings};

    env_logger::init();

    // Usage: neural-field [frames] [width] [height]
    let mut args = std::env::args().skip(1);
    let frames: u64 = args.next().and_then(|a| a.parse().ok()).unwrap_or(600);
    let width: f32 = args.next().and_then(|a| a.parse().ok()).unwrap_or(800.0);
    let height: f32 = args.next().and_then(|a| a.parse().ok()).unwrap_or(600.0);

    log::info!("Neural Field (native) running {} frames at {}x{}", frames, width, height);

    let mut field = ParticleField::new(width, height, 42, Settings::default());
    let mut surface = RecordingSurface::new();
    for _ in 0..frames {
        surface.reset();
        field.frame(&mut surface);
    }
    field.stop();

    let state = field.state();
    let summary = serde_json::json!({
        "frames": state.frame_count,
        "width": state.width,
        "height": state.height,
        "nodes": state.nodes.len(),
        "streams": state.streams.len(),
        "symbols": state.symbols.len(),
        "particles": state.particles.len(),
        "last_frame": surface.summary(),
    });
    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to encode summary: {}", e),
    }
}
