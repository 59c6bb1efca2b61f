//! Particle field context
//!
//! `ParticleField` owns one field's state and settings and is handed to
//! whoever drives the frame loop. Nothing here is global.

use crate::renderer::{Surface, draw_frame};
use crate::settings::Settings;
use crate::sim::{FieldState, tick};

/// A running (or stopped) particle field bound to one drawing surface
#[derive(Debug, Clone)]
pub struct ParticleField {
    state: FieldState,
    settings: Settings,
    running: bool,
}

impl ParticleField {
    /// Populate a field for a `width` x `height` surface
    pub fn new(width: f32, height: f32, seed: u64, settings: Settings) -> Self {
        log::debug!("Field created at {}x{} (seed {})", width, height, seed);
        Self {
            state: FieldState::new(width, height, seed),
            settings,
            running: true,
        }
    }

    /// Advance one frame and paint it.
    ///
    /// Returns `false` without touching state or surface once stopped.
    pub fn frame(&mut self, surface: &mut dyn Surface) -> bool {
        if !self.running {
            return false;
        }
        tick(&mut self.state);
        draw_frame(&self.state, &self.settings.layers, surface);
        true
    }

    /// Paint the current state without advancing it
    pub fn draw(&self, surface: &mut dyn Surface) {
        draw_frame(&self.state, &self.settings.layers, surface);
    }

    /// Rescale entities to a new surface size
    pub fn resize(&mut self, width: f32, height: f32) {
        if !self.running {
            return;
        }
        log::debug!(
            "Field resized {}x{} -> {}x{}",
            self.state.width,
            self.state.height,
            width,
            height
        );
        self.state.resize(width, height);
    }

    /// Stop the field. Idempotent.
    pub fn stop(&mut self) {
        if self.running {
            self.running = false;
            log::info!("Field stopped after {} frames", self.state.frame_count);
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn state(&self) -> &FieldState {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}
