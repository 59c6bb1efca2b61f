//! Browser wiring for the background field
//!
//! Finds the canvas, drives the field from `requestAnimationFrame`, and hooks
//! the window `resize` and `beforeunload` events. The field is shared between
//! those callbacks through one `Rc<RefCell<_>>`, so a resize can never land in
//! the middle of a frame. Each canvas has at most one running loop; a second
//! start on the same canvas hands back the existing one.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, Window};

use super::registry::LoopRegistry;
use crate::field::ParticleField;
use crate::renderer::CanvasSurface;
use crate::settings::Settings;
use crate::timing::FrameStats;

/// Frames between FPS log lines
const FPS_LOG_INTERVAL: u64 = 600;

/// Everything one running background needs between frames
struct FieldLoop {
    field: ParticleField,
    surface: CanvasSurface,
    canvas: HtmlCanvasElement,
    /// Pending `requestAnimationFrame` id
    frame_id: Option<i32>,
    stats: FrameStats,
    animate: bool,
}

type SharedLoop = Rc<RefCell<FieldLoop>>;

thread_local! {
    static RUNNING: RefCell<LoopRegistry<SharedLoop>> = RefCell::new(LoopRegistry::new());
}

/// JS-visible handle to a running background
#[wasm_bindgen]
pub struct BackgroundHandle {
    inner: SharedLoop,
}

#[wasm_bindgen]
impl BackgroundHandle {
    /// Cancel the pending frame and stop the field. Safe to call twice.
    pub fn stop(&self) {
        stop_loop(&self.inner);
    }

    pub fn is_running(&self) -> bool {
        self.inner.borrow().field.is_running()
    }

    /// Frames drawn so far
    pub fn frame_count(&self) -> f64 {
        self.inner.borrow().field.state().frame_count as f64
    }
}

/// Start the background on the canvas with id `canvas_id`.
///
/// If the canvas already has a running background (for example the one
/// started on page load), returns a handle to that loop instead of starting
/// a second one. Returns `None` (and schedules nothing) if the canvas or its
/// 2D context is unavailable.
#[wasm_bindgen]
pub fn start_background(canvas_id: &str) -> Option<BackgroundHandle> {
    let settings = Settings {
        canvas_id: canvas_id.to_string(),
        ..Settings::load()
    };
    start(settings).map(|inner| BackgroundHandle { inner })
}

/// Page entry point: start once the DOM is ready
pub fn run() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("Logger already set: {}", e).into());
    }

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    if document.ready_state() == "loading" {
        let closure = Closure::once_into_js(move |_event: web_sys::Event| {
            start(Settings::load());
        });
        let _ = document
            .add_event_listener_with_callback("DOMContentLoaded", closure.unchecked_ref());
    } else {
        start(Settings::load());
    }
}

fn start(settings: Settings) -> Option<SharedLoop> {
    let existing = RUNNING.with(|running| {
        running
            .borrow_mut()
            .running(&settings.canvas_id, |lp| lp.borrow().field.is_running())
    });
    if let Some(shared) = existing {
        log::debug!("Canvas #{} already running - reusing its loop", settings.canvas_id);
        return Some(shared);
    }

    let window = web_sys::window()?;
    let document = window.document()?;

    let Some(canvas) = document
        .get_element_by_id(&settings.canvas_id)
        .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
    else {
        log::warn!("No canvas #{} - background disabled", settings.canvas_id);
        return None;
    };

    let (width, height) = viewport_size(&window)?;
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);

    let Some(surface) = CanvasSurface::from_canvas(&canvas) else {
        log::warn!("Canvas #{} has no 2D context - background disabled", settings.canvas_id);
        return None;
    };

    let animate = settings.animates() && !prefers_reduced_motion(&window);
    let layer_count = settings.layers.enabled_count();
    let canvas_id = settings.canvas_id.clone();
    let seed = js_sys::Date::now() as u64;
    let field = ParticleField::new(width, height, seed, settings);

    let shared = Rc::new(RefCell::new(FieldLoop {
        field,
        surface,
        canvas,
        frame_id: None,
        stats: FrameStats::new(),
        animate,
    }));

    RUNNING.with(|running| running.borrow_mut().register(&canvas_id, shared.clone()));
    setup_resize(&window, shared.clone());
    setup_unload(&window, shared.clone());

    if animate {
        request_frame(shared.clone());
        log::info!(
            "Background running at {}x{} ({} layers)",
            width,
            height,
            layer_count
        );
    } else {
        draw_static(&shared);
        log::info!("Reduced motion - drew a single static frame");
    }

    Some(shared)
}

fn viewport_size(window: &Window) -> Option<(f32, f32)> {
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some((width as f32, height as f32))
}

fn prefers_reduced_motion(window: &Window) -> bool {
    window
        .match_media("(prefers-reduced-motion: reduce)")
        .ok()
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false)
}

fn draw_static(shared: &SharedLoop) {
    let mut lp = shared.borrow_mut();
    let FieldLoop { field, surface, .. } = &mut *lp;
    field.draw(surface);
}

fn request_frame(shared: SharedLoop) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let next = shared.clone();
    let callback = Closure::once_into_js(move |time: f64| on_frame(next, time));
    match window.request_animation_frame(callback.unchecked_ref()) {
        Ok(id) => shared.borrow_mut().frame_id = Some(id),
        Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
    }
}

fn on_frame(shared: SharedLoop, time: f64) {
    {
        let mut lp = shared.borrow_mut();
        lp.frame_id = None;

        let FieldLoop {
            field,
            surface,
            stats,
            ..
        } = &mut *lp;
        if !field.frame(surface) {
            return;
        }

        stats.record(time);
        if field.settings().log_fps && stats.frames() % FPS_LOG_INTERVAL == 0 {
            log::info!("Background FPS: {}", stats.fps());
        }
    }

    request_frame(shared);
}

fn stop_loop(shared: &SharedLoop) {
    let mut lp = shared.borrow_mut();
    if let Some(id) = lp.frame_id.take() {
        if let Some(window) = web_sys::window() {
            let _ = window.cancel_animation_frame(id);
        }
    }
    lp.field.stop();
}

fn setup_resize(window: &Window, shared: SharedLoop) {
    let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
        let Some((width, height)) = web_sys::window().and_then(|w| viewport_size(&w)) else {
            return;
        };

        let mut lp = shared.borrow_mut();
        if !lp.field.is_running() {
            return;
        }
        lp.canvas.set_width(width as u32);
        lp.canvas.set_height(height as u32);
        lp.field.resize(width, height);

        // Resizing a canvas wipes it, so a static background must repaint
        if !lp.animate {
            let FieldLoop { field, surface, .. } = &mut *lp;
            field.draw(surface);
        }
    });
    let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn setup_unload(window: &Window, shared: SharedLoop) {
    let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
        stop_loop(&shared);
    });
    let _ = window
        .add_event_listener_with_callback("beforeunload", closure.as_ref().unchecked_ref());
    closure.forget();
}
