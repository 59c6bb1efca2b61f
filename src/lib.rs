//! Neural Field - animated canvas background for a portfolio page
//!
//! Core modules:
//! - `sim`: Entity model and per-frame kinematics (seeded, platform-free)
//! - `renderer`: Drawing surface abstraction and the layered draw passes
//! - `field`: The particle field context object (update, draw, resize, stop)
//! - `platform`: Browser wiring (canvas lookup, animation loop, listeners)
//! - `settings`: Layer toggles and motion preferences

pub mod field;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod timing;

pub use field::ParticleField;
pub use settings::{Layers, Settings};

/// Field configuration constants
pub mod consts {
    /// Entity counts at initialization
    pub const NODE_COUNT: usize = 60;
    pub const STREAM_COUNT: usize = 30;
    pub const SYMBOL_COUNT: usize = 15;
    pub const PARTICLE_COUNT: usize = 20;

    /// Wrap margins (pixels past the viewport edge before teleporting)
    pub const NODE_MARGIN: f32 = 10.0;
    pub const SYMBOL_MARGIN: f32 = 100.0;
    pub const PARTICLE_MARGIN: f32 = 20.0;

    /// Node motion
    pub const NODE_DAMPING: f32 = 0.985;
    pub const NODE_SPEED_FACTOR: f32 = 0.8;
    pub const NODE_PULSE_FACTOR: f32 = 0.7;
    /// Half-width of the uniform velocity range for nodes and symbols
    pub const DRIFT_VELOCITY: f32 = 0.075;

    /// Pairs closer than this get a connection line
    pub const CONNECTION_DISTANCE: f32 = 150.0;
    pub const CONNECTION_MAX_OPACITY: f32 = 0.7;
    pub const CONNECTION_MIN_OPACITY: f32 = 0.25;

    /// Extra lead above the viewport for streams
    pub const STREAM_INIT_LEAD: f32 = 300.0;
    pub const STREAM_RESET_LEAD: f32 = 200.0;
    /// Dot offsets wrap at `length + STREAM_DOT_OVERRUN`
    pub const STREAM_DOT_OVERRUN: f32 = 30.0;

    /// Background grid
    pub const GRID_SPACING: f32 = 80.0;

    /// Glyphs drawn by floating symbols
    pub const SYMBOL_GLYPHS: [char; 10] = ['Σ', '∞', 'π', 'λ', '∫', '∂', 'α', 'β', 'θ', 'Δ'];
}

/// Uniform sample in `[-half_width, half_width)`
#[inline]
pub fn spread<R: rand::Rng + ?Sized>(rng: &mut R, half_width: f32) -> f32 {
    (rng.random::<f32>() - 0.5) * 2.0 * half_width
}

/// Wrap a coordinate that has left `[-margin, extent + margin]` to the opposite edge.
///
/// Returns the new value and whether a wrap happened.
#[inline]
pub fn wrap_coord(value: f32, extent: f32, margin: f32) -> (f32, bool) {
    if value < -margin {
        (extent + margin, true)
    } else if value > extent + margin {
        (-margin, true)
    } else {
        (value, false)
    }
}
