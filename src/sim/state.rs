//! Field state and entity records
//!
//! Every entity is a plain value with no identity beyond its index. All of it
//! is rebuilt on page load; serialization exists only for debug snapshots.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::spread;

/// A graph node in the neural network layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Radius before pulsing (2.5-4px)
    pub base_radius: f32,
    /// Pulse phase (radians)
    pub pulse: f32,
    pub pulse_speed: f32,
}

impl Node {
    pub fn random<R: Rng + ?Sized>(rng: &mut R, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(rng.random::<f32>() * width, rng.random::<f32>() * height),
            vel: Vec2::new(spread(rng, DRIFT_VELOCITY), spread(rng, DRIFT_VELOCITY)),
            base_radius: rng.random_range(2.5..4.0),
            pulse: rng.random::<f32>() * TAU,
            pulse_speed: rng.random_range(0.025..0.04),
        }
    }
}

/// A highlight dot travelling along a stream
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamDot {
    /// Distance below the stream top
    pub offset: f32,
    pub size: f32,
    pub pulse: f32,
}

/// A falling vertical data stream
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stream {
    pub x: f32,
    /// Top edge; the stream extends `length` pixels below it
    pub y: f32,
    /// Pixels per frame
    pub speed: f32,
    pub length: f32,
    pub base_opacity: f32,
    pub trail_opacity: f32,
    pub width: f32,
    pub dots: Vec<StreamDot>,
}

impl Stream {
    pub fn random<R: Rng + ?Sized>(rng: &mut R, width: f32) -> Self {
        let length = rng.random_range(60.0..140.0);
        let dot_count = rng.random_range(3..=5usize);
        let dots = (0..dot_count)
            .map(|j| StreamDot {
                offset: j as f32 * (length / dot_count as f32),
                size: rng.random_range(1.5..3.5),
                pulse: rng.random::<f32>() * TAU,
            })
            .collect();

        let mut stream = Self {
            x: 0.0,
            y: 0.0,
            speed: rng.random_range(0.4..1.2),
            length,
            base_opacity: rng.random_range(0.2..0.5),
            trail_opacity: rng.random_range(0.15..0.35),
            width: rng.random_range(1.5..2.5),
            dots,
        };
        stream.reset(rng, width, STREAM_INIT_LEAD);
        stream
    }

    /// Move the stream above the viewport with a fresh column
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R, width: f32, lead: f32) {
        self.y = -self.length - rng.random::<f32>() * lead;
        self.x = rng.random::<f32>() * width;
    }

    /// Bottom edge of the stream
    pub fn bottom(&self) -> f32 {
        self.y + self.length
    }
}

/// A floating mathematical glyph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Symbol {
    pub pos: Vec2,
    pub glyph: char,
    /// Font size in pixels
    pub size: f32,
    pub base_opacity: f32,
    pub vel: Vec2,
    pub rotation: f32,
    pub rotation_speed: f32,
    pub float_phase: f32,
    pub float_amplitude: f32,
}

impl Symbol {
    pub fn random<R: Rng + ?Sized>(rng: &mut R, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(rng.random::<f32>() * width, rng.random::<f32>() * height),
            glyph: SYMBOL_GLYPHS[rng.random_range(0..SYMBOL_GLYPHS.len())],
            size: rng.random_range(28.0..36.0),
            base_opacity: rng.random_range(0.15..0.40),
            vel: Vec2::new(spread(rng, DRIFT_VELOCITY), rng.random_range(0.2..0.5)),
            rotation: rng.random::<f32>() * TAU,
            rotation_speed: spread(rng, 0.0075),
            float_phase: rng.random::<f32>() * TAU,
            float_amplitude: rng.random_range(10.0..30.0),
        }
    }
}

/// An ambient particle following a sine path
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    /// Rendered position
    pub pos: Vec2,
    /// Unperturbed drift position
    pub base: Vec2,
    pub vx: f32,
    pub radius: f32,
    pub opacity: f32,
    pub phase: f32,
    pub phase_speed: f32,
    pub amplitude: f32,
    pub frequency: f32,
    /// Glow flicker for the current frame
    #[serde(default)]
    pub glowing: bool,
}

impl Particle {
    pub fn random<R: Rng + ?Sized>(rng: &mut R, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(rng.random::<f32>() * width, rng.random::<f32>() * height),
            base: Vec2::new(rng.random::<f32>() * width, rng.random::<f32>() * height),
            vx: spread(rng, 0.15),
            radius: rng.random_range(0.8..2.3),
            opacity: rng.random_range(0.25..0.65),
            phase: rng.random::<f32>() * TAU,
            phase_speed: rng.random_range(0.01..0.025),
            amplitude: rng.random_range(20.0..60.0),
            frequency: rng.random_range(0.01..0.03),
            glowing: false,
        }
    }
}

/// Complete field state for one drawing surface
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldState {
    /// Seed the field was built from
    pub seed: u64,
    pub width: f32,
    pub height: f32,
    /// Frames advanced since construction
    pub frame_count: u64,
    pub nodes: Vec<Node>,
    pub streams: Vec<Stream>,
    pub symbols: Vec<Symbol>,
    pub particles: Vec<Particle>,
    #[serde(skip, default = "FieldState::fallback_rng")]
    pub(crate) rng: Pcg32,
}

impl FieldState {
    /// Build a fully populated field sized to `width` x `height`
    pub fn new(width: f32, height: f32, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);

        let nodes = (0..NODE_COUNT)
            .map(|_| Node::random(&mut rng, width, height))
            .collect();
        let streams = (0..STREAM_COUNT)
            .map(|_| Stream::random(&mut rng, width))
            .collect();
        let symbols = (0..SYMBOL_COUNT)
            .map(|_| Symbol::random(&mut rng, width, height))
            .collect();
        let particles = (0..PARTICLE_COUNT)
            .map(|_| Particle::random(&mut rng, width, height))
            .collect();

        Self {
            seed,
            width,
            height,
            frame_count: 0,
            nodes,
            streams,
            symbols,
            particles,
            rng,
        }
    }

    fn fallback_rng() -> Pcg32 {
        Pcg32::seed_from_u64(0)
    }

    /// Rescale the field to a new surface size.
    ///
    /// Stored positions scale independently per axis; nothing is recreated
    /// except nodes, which are topped back up to `NODE_COUNT`.
    pub fn resize(&mut self, width: f32, height: f32) {
        if self.width > 0.0 && self.height > 0.0 {
            let scale = Vec2::new(width / self.width, height / self.height);

            for node in &mut self.nodes {
                node.pos *= scale;
            }
            for stream in &mut self.streams {
                stream.x *= scale.x;
                stream.y *= scale.y;
            }
            for symbol in &mut self.symbols {
                symbol.pos *= scale;
            }
            for particle in &mut self.particles {
                particle.pos *= scale;
                particle.base *= scale;
            }
        }

        self.width = width;
        self.height = height;

        // Streams, symbols and particles are never pruned or topped up
        while self.nodes.len() < NODE_COUNT {
            let node = Node::random(&mut self.rng, width, height);
            self.nodes.push(node);
        }
    }

    /// Total number of live entities across all four layers
    pub fn entity_count(&self) -> usize {
        self.nodes.len() + self.streams.len() + self.symbols.len() + self.particles.len()
    }
}
