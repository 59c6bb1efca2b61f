//! Field simulation module
//!
//! All entity motion lives here. This module must stay platform-free:
//! - One tick per animation frame, no wall-clock time
//! - Seeded RNG only
//! - No rendering or browser dependencies

pub mod connection;
pub mod state;
pub mod tick;

pub use connection::{Connection, connection_opacity, connections, distance_falloff};
pub use state::{FieldState, Node, Particle, Stream, StreamDot, Symbol};
pub use tick::{tick, update_nodes, update_particles, update_streams, update_symbols};
