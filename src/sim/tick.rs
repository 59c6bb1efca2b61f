//! Per-frame field update
//!
//! Advances every entity by one animation frame. Update always runs to
//! completion before anything is drawn.

use rand::Rng;

use super::state::FieldState;
use crate::consts::*;
use crate::{spread, wrap_coord};

/// Chance per frame that a particle draws its glow pass
const PARTICLE_GLOW_CHANCE: f64 = 0.3;

/// Advance the field by one frame
pub fn tick(state: &mut FieldState) {
    state.frame_count += 1;

    update_nodes(state);
    update_streams(state);
    update_symbols(state);
    update_particles(state);
}

/// Drift nodes with phase-diverse sinusoidal nudges and heavy damping
pub fn update_nodes(state: &mut FieldState) {
    let time = state.frame_count as f32 * 0.005;
    let (width, height) = (state.width, state.height);

    for (index, node) in state.nodes.iter_mut().enumerate() {
        let i = index as f32;
        node.vel.x += (time + i * 0.5).sin() * 0.03;
        node.vel.y += (time + i * 0.3).cos() * 0.03;

        node.vel *= NODE_DAMPING;
        node.pos += node.vel * NODE_SPEED_FACTOR;
        node.pulse += node.pulse_speed * NODE_PULSE_FACTOR;

        let (x, wrapped_x) = wrap_coord(node.pos.x, width, NODE_MARGIN);
        if wrapped_x {
            node.pos.x = x;
            node.vel.x = spread(&mut state.rng, DRIFT_VELOCITY);
        }
        let (y, wrapped_y) = wrap_coord(node.pos.y, height, NODE_MARGIN);
        if wrapped_y {
            node.pos.y = y;
            node.vel.y = spread(&mut state.rng, DRIFT_VELOCITY);
        }
    }
}

/// Let streams fall and recycle the ones that left the bottom edge
pub fn update_streams(state: &mut FieldState) {
    let (width, height) = (state.width, state.height);

    for stream in &mut state.streams {
        stream.y += stream.speed;

        if stream.y > height + stream.length {
            stream.reset(&mut state.rng, width, STREAM_RESET_LEAD);
        }

        let span = stream.length + STREAM_DOT_OVERRUN;
        for dot in &mut stream.dots {
            dot.offset = (dot.offset + stream.speed) % span;
            dot.pulse += 0.1;
        }
    }
}

/// Float symbols downward with a gentle bob and slow spin
pub fn update_symbols(state: &mut FieldState) {
    let (width, height) = (state.width, state.height);

    for symbol in &mut state.symbols {
        symbol.float_phase += 0.01;
        let float_offset = symbol.float_phase.sin() * symbol.float_amplitude * 0.01;

        symbol.pos.x += symbol.vel.x;
        symbol.pos.y += symbol.vel.y + float_offset;
        symbol.rotation += symbol.rotation_speed;

        symbol.pos.x = wrap_coord(symbol.pos.x, width, SYMBOL_MARGIN).0;

        let (y, wrapped) = wrap_coord(symbol.pos.y, height, SYMBOL_MARGIN);
        if wrapped {
            symbol.pos.y = y;
            symbol.vel.x = spread(&mut state.rng, DRIFT_VELOCITY);
            symbol.pos.x = state.rng.random::<f32>() * width;
        }
    }
}

/// Move particles along their sine paths
pub fn update_particles(state: &mut FieldState) {
    let (width, height) = (state.width, state.height);

    for particle in &mut state.particles {
        particle.phase += particle.phase_speed;
        particle.base.x += particle.vx;

        let sine_offset = (particle.phase * particle.frequency).sin() * particle.amplitude;
        particle.pos.y = particle.base.y + sine_offset;
        particle.pos.x = particle.base.x;

        particle.base.y += (particle.phase * 0.5).sin() * 0.1;

        let (x, wrapped_x) = wrap_coord(particle.pos.x, width, PARTICLE_MARGIN);
        if wrapped_x {
            particle.pos.x = x;
            particle.base.x = x;
        }
        let (y, wrapped_y) = wrap_coord(particle.pos.y, height, PARTICLE_MARGIN);
        if wrapped_y {
            particle.pos.y = y;
            particle.base.y = y;
        }

        particle.glowing = state.rng.random_bool(PARTICLE_GLOW_CHANCE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_tick_advances_frame_count() {
        let mut state = FieldState::new(800.0, 600.0, 1);
        tick(&mut state);
        tick(&mut state);
        assert_eq!(state.frame_count, 2);
    }

    #[test]
    fn test_nodes_stay_in_bounds() {
        let mut state = FieldState::new(800.0, 600.0, 2);
        for _ in 0..2000 {
            tick(&mut state);
            for node in &state.nodes {
                assert!(node.pos.x >= -NODE_MARGIN && node.pos.x <= 800.0 + NODE_MARGIN);
                assert!(node.pos.y >= -NODE_MARGIN && node.pos.y <= 600.0 + NODE_MARGIN);
            }
        }
    }

    #[test]
    fn test_node_wraps_to_opposite_edge() {
        let mut state = FieldState::new(800.0, 600.0, 3);
        state.nodes[0].pos = Vec2::new(-10.5, 300.0);
        state.nodes[0].vel = Vec2::new(-1.0, 0.0);
        update_nodes(&mut state);
        assert_eq!(state.nodes[0].pos.x, 800.0 + NODE_MARGIN);
        assert!(state.nodes[0].vel.x.abs() <= DRIFT_VELOCITY);

        state.nodes[1].pos = Vec2::new(400.0, 611.0);
        state.nodes[1].vel = Vec2::new(0.0, 1.0);
        update_nodes(&mut state);
        assert_eq!(state.nodes[1].pos.y, -NODE_MARGIN);
    }

    #[test]
    fn test_node_velocity_damped() {
        let mut state = FieldState::new(800.0, 600.0, 4);
        state.nodes[0].pos = Vec2::new(400.0, 300.0);
        state.nodes[0].vel = Vec2::new(1.0, 1.0);
        update_nodes(&mut state);
        // Nudge is at most 0.03 per axis before damping
        assert!(state.nodes[0].vel.x <= (1.0 + 0.03) * NODE_DAMPING);
        assert!(state.nodes[0].vel.x >= (1.0 - 0.03) * NODE_DAMPING);
    }

    #[test]
    fn test_node_nudge_exact() {
        let mut state = FieldState::new(800.0, 600.0, 12);
        // time = 100 * 0.005 = 0.5
        state.frame_count = 100;
        state.nodes[2].pos = Vec2::new(400.0, 300.0);
        state.nodes[2].vel = Vec2::ZERO;
        update_nodes(&mut state);

        // vel.x = sin(0.5 + 2 * 0.5) * 0.03 * 0.985, vel.y = cos(0.5 + 2 * 0.3) * 0.03 * 0.985
        let node = &state.nodes[2];
        assert!((node.vel.x - 0.029_475_977).abs() < 1e-6);
        assert!((node.vel.y - 0.013_403_765).abs() < 1e-6);
        assert!((node.pos.x - 400.023_58).abs() < 1e-4);
        assert!((node.pos.y - 300.010_72).abs() < 1e-4);
    }

    #[test]
    fn test_stream_resets_above_viewport() {
        let mut state = FieldState::new(800.0, 600.0, 5);
        let length = state.streams[0].length;
        state.streams[0].y = 600.0 + length;
        update_streams(&mut state);

        let stream = &state.streams[0];
        assert!(stream.y < 0.0);
        assert!(stream.y <= -length);
        assert!(stream.y >= -length - STREAM_RESET_LEAD);
        assert!((0.0..=800.0).contains(&stream.x));
    }

    #[test]
    fn test_stream_falls_by_speed() {
        let mut state = FieldState::new(800.0, 600.0, 6);
        state.streams[0].y = 100.0;
        let speed = state.streams[0].speed;
        update_streams(&mut state);
        assert!((state.streams[0].y - (100.0 + speed)).abs() < 1e-4);
    }

    #[test]
    fn test_stream_dot_offsets_wrap() {
        let mut state = FieldState::new(800.0, 600.0, 7);
        for _ in 0..500 {
            update_streams(&mut state);
            for stream in &state.streams {
                for dot in &stream.dots {
                    assert!(dot.offset >= 0.0);
                    assert!(dot.offset < stream.length + STREAM_DOT_OVERRUN);
                }
            }
        }
    }

    #[test]
    fn test_symbol_bottom_wrap_moves_to_top() {
        let mut state = FieldState::new(800.0, 600.0, 8);
        state.symbols[0].pos = Vec2::new(50.0, 600.0 + SYMBOL_MARGIN + 5.0);
        update_symbols(&mut state);
        let symbol = &state.symbols[0];
        assert_eq!(symbol.pos.y, -SYMBOL_MARGIN);
        assert!((0.0..=800.0).contains(&symbol.pos.x));
        assert!(symbol.vel.x.abs() <= DRIFT_VELOCITY);
    }

    #[test]
    fn test_symbol_top_wrap_moves_to_bottom() {
        let mut state = FieldState::new(800.0, 600.0, 13);
        let symbol = &mut state.symbols[0];
        symbol.pos = Vec2::new(-50.0, -SYMBOL_MARGIN - 5.0);
        symbol.vel = Vec2::new(0.07, 0.0);
        symbol.float_phase = 0.0;
        update_symbols(&mut state);

        let symbol = &state.symbols[0];
        assert_eq!(symbol.pos.y, 600.0 + SYMBOL_MARGIN);
        // Fresh x inside the viewport replaces the old off-screen one
        assert!((0.0..=800.0).contains(&symbol.pos.x));
        assert!(symbol.vel.x.abs() <= DRIFT_VELOCITY);
        assert_eq!(symbol.vel.y, 0.0);
    }

    #[test]
    fn test_symbol_horizontal_wrap() {
        let mut state = FieldState::new(800.0, 600.0, 9);
        state.symbols[0].pos = Vec2::new(800.0 + SYMBOL_MARGIN + 1.0, 300.0);
        state.symbols[0].vel.x = 0.05;
        update_symbols(&mut state);
        assert_eq!(state.symbols[0].pos.x, -SYMBOL_MARGIN);
    }

    #[test]
    fn test_particle_follows_sine_path() {
        let mut state = FieldState::new(800.0, 600.0, 10);
        let p = &mut state.particles[0];
        p.base = Vec2::new(400.0, 300.0);
        p.phase = 0.0;
        let (phase_speed, freq, amp, vx) = (p.phase_speed, p.frequency, p.amplitude, p.vx);

        update_particles(&mut state);
        let p = &state.particles[0];
        let expected_y = 300.0 + (phase_speed * freq).sin() * amp;
        assert!((p.pos.y - expected_y).abs() < 1e-3);
        assert!((p.pos.x - (400.0 + vx)).abs() < 1e-4);
    }

    #[test]
    fn test_particles_wrap_within_margin() {
        let mut state = FieldState::new(800.0, 600.0, 11);
        state.particles[0].base = Vec2::new(-25.0, 300.0);
        state.particles[0].vx = -0.1;
        update_particles(&mut state);
        assert_eq!(state.particles[0].pos.x, 800.0 + PARTICLE_MARGIN);
        assert_eq!(state.particles[0].base.x, 800.0 + PARTICLE_MARGIN);
    }
}
