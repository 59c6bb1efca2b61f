//! Draw passes, back to front
//!
//! grid -> streams -> connections -> particles -> symbols -> nodes

use glam::Vec2;

use super::surface::{Fill, Glyph, LinearGradient, Paint, Stroke, Surface, colors};
use crate::consts::GRID_SPACING;
use crate::settings::Layers;
use crate::sim::{FieldState, connections};

/// Clear the surface and paint every enabled layer
pub fn draw_frame(state: &FieldState, layers: &Layers, surface: &mut dyn Surface) {
    surface.clear(state.width, state.height);

    if layers.grid {
        draw_grid(state, surface);
    }
    if layers.streams {
        draw_streams(state, surface);
    }
    if layers.connections {
        draw_connections(state, surface);
    }
    if layers.particles {
        draw_particles(state, surface);
    }
    if layers.symbols {
        draw_symbols(state, surface);
    }
    if layers.nodes {
        draw_nodes(state, surface);
    }
}

/// Faint cyan grid
pub fn draw_grid(state: &FieldState, surface: &mut dyn Surface) {
    let stroke = Stroke {
        paint: Paint::Solid(colors::CYAN.with_alpha(0.08)),
        width: 0.5,
        round_cap: false,
    };

    let mut x = 0.0;
    while x <= state.width {
        surface.line(Vec2::new(x, 0.0), Vec2::new(x, state.height), &stroke);
        x += GRID_SPACING;
    }

    let mut y = 0.0;
    while y <= state.height {
        surface.line(Vec2::new(0.0, y), Vec2::new(state.width, y), &stroke);
        y += GRID_SPACING;
    }
}

pub fn draw_streams(state: &FieldState, surface: &mut dyn Surface) {
    for stream in &state.streams {
        let top = Vec2::new(stream.x, stream.y);
        let bottom = Vec2::new(stream.x, stream.bottom());

        let gradient = LinearGradient::new(top, bottom)
            .stop(0.0, colors::CYAN.with_alpha(stream.base_opacity))
            .stop(0.3, colors::SKY.with_alpha(stream.base_opacity * 0.9))
            .stop(0.5, colors::PURPLE.with_alpha(stream.trail_opacity))
            .stop(0.7, colors::VIOLET.with_alpha(stream.trail_opacity * 0.8))
            .stop(1.0, colors::CYAN.with_alpha(0.0));

        surface.line(
            top,
            bottom,
            &Stroke {
                paint: Paint::Linear(gradient),
                width: stream.width,
                round_cap: true,
            },
        );

        for dot in &stream.dots {
            let dot_y = stream.y + dot.offset;
            if dot_y <= -10.0 || dot_y >= state.height + 10.0 {
                continue;
            }
            let pulse = (dot.pulse.sin() + 1.0) * 0.5;
            let fill = Fill::glowing(
                colors::CYAN.with_alpha(0.6 + pulse * 0.4),
                10.0,
                colors::CYAN.with_alpha(0.8),
            );
            surface.circle(Vec2::new(stream.x, dot_y), dot.size + pulse * 0.5, &fill);
        }
    }
}

/// Gradient lines between nearby nodes
pub fn draw_connections(state: &FieldState, surface: &mut dyn Surface) {
    for c in connections(&state.nodes, state.frame_count) {
        let gradient = LinearGradient::new(c.from, c.to)
            .stop(0.0, colors::CYAN.with_alpha(c.opacity))
            .stop(0.5, colors::PURPLE.with_alpha(c.opacity * 0.75))
            .stop(1.0, colors::CYAN.with_alpha(c.opacity * 0.9));

        surface.line(
            c.from,
            c.to,
            &Stroke {
                paint: Paint::Linear(gradient),
                width: 1.2 + c.falloff * 0.8,
                round_cap: true,
            },
        );
    }
}

pub fn draw_particles(state: &FieldState, surface: &mut dyn Surface) {
    for particle in &state.particles {
        let color = colors::CYAN.with_alpha(particle.opacity + particle.phase.sin() * 0.1);
        surface.circle(particle.pos, particle.radius, &Fill::solid(color));

        if particle.glowing {
            let glow = Fill::glowing(color, 5.0, colors::CYAN.with_alpha(0.5));
            surface.circle(particle.pos, particle.radius, &glow);
        }
    }
}

pub fn draw_symbols(state: &FieldState, surface: &mut dyn Surface) {
    let frame = state.frame_count as f32;
    // Shared breathing for every glyph
    let opacity_wave = (frame * 0.01).sin() * 0.1;

    for symbol in &state.symbols {
        let glow = 0.6 + (frame * 0.02 + symbol.rotation).sin() * 0.2;
        surface.glyph(&Glyph {
            ch: symbol.glyph,
            pos: symbol.pos,
            rotation: symbol.rotation,
            size: symbol.size,
            fill: Fill::glowing(
                colors::PURPLE.with_alpha(symbol.base_opacity + opacity_wave),
                18.0,
                colors::PURPLE.with_alpha(glow),
            ),
        });
    }
}

/// Multi-layer glowing nodes, brightest layer last
pub fn draw_nodes(state: &FieldState, surface: &mut dyn Surface) {
    for node in &state.nodes {
        let pulse = node.pulse.sin();
        let radius = node.base_radius + pulse * 0.3;
        let glow_radius = radius + 3.0 + pulse;

        // Outer glow
        surface.circle(
            node.pos,
            glow_radius,
            &Fill::glowing(
                colors::CYAN.with_alpha(0.1),
                20.0,
                colors::CYAN.with_alpha(0.3),
            ),
        );
        // Middle glow
        surface.circle(
            node.pos,
            radius + 1.5,
            &Fill::glowing(
                colors::CYAN.with_alpha(0.3),
                15.0,
                colors::CYAN.with_alpha(0.5),
            ),
        );
        // Main body
        surface.circle(
            node.pos,
            radius,
            &Fill::glowing(colors::CYAN.with_alpha(0.7 + pulse * 0.3), 12.0, colors::CYAN),
        );
        // Core
        surface.circle(node.pos, radius * 0.6, &Fill::solid(colors::CORE));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::recording::{DrawCommand, RecordingSurface};

    /// Which layer produced a command, told apart by its paint
    fn layer_of(cmd: &DrawCommand) -> &'static str {
        match cmd {
            DrawCommand::Clear { .. } => "clear",
            DrawCommand::Line { stroke, .. } => match &stroke.paint {
                Paint::Solid(_) => "grid",
                // Streams carry five stops, connections three
                Paint::Linear(gradient) if gradient.stops.len() == 5 => "streams",
                Paint::Linear(_) => "connections",
            },
            DrawCommand::Circle { fill, .. } => match fill.shadow {
                Some(shadow) if shadow.blur == 10.0 => "streams",
                Some(shadow) if shadow.blur == 5.0 => "particles",
                Some(_) => "nodes",
                None if fill.color == colors::CORE => "nodes",
                None => "particles",
            },
            DrawCommand::Glyph(_) => "symbols",
        }
    }

    fn layer_order(commands: &[DrawCommand]) -> Vec<&'static str> {
        let mut order: Vec<&'static str> = Vec::new();
        for cmd in commands {
            let layer = layer_of(cmd);
            if order.last() != Some(&layer) {
                order.push(layer);
            }
        }
        order
    }

    #[test]
    fn test_frame_starts_with_clear() {
        let state = FieldState::new(800.0, 600.0, 1);
        let mut surface = RecordingSurface::default();
        draw_frame(&state, &Layers::default(), &mut surface);
        assert!(matches!(surface.commands[0], DrawCommand::Clear { .. }));
    }

    #[test]
    fn test_grid_line_count() {
        let state = FieldState::new(800.0, 600.0, 1);
        let mut surface = RecordingSurface::default();
        draw_grid(&state, &mut surface);
        // 0..=800 step 80 -> 11 vertical, 0..=600 step 80 -> 8 horizontal
        assert_eq!(surface.lines(), 19);
    }

    #[test]
    fn test_nodes_draw_four_layers_each() {
        let state = FieldState::new(800.0, 600.0, 2);
        let mut surface = RecordingSurface::default();
        draw_nodes(&state, &mut surface);
        assert_eq!(surface.circles(), state.nodes.len() * 4);
        // Last circle of each node is the unshadowed core
        match surface.commands.last() {
            Some(DrawCommand::Circle { fill, .. }) => {
                assert!(fill.shadow.is_none());
                assert_eq!(fill.color, colors::CORE);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_offscreen_stream_dots_skipped() {
        let mut state = FieldState::new(800.0, 600.0, 3);
        for stream in &mut state.streams {
            stream.y = -1000.0;
        }
        let mut surface = RecordingSurface::default();
        draw_streams(&state, &mut surface);
        assert_eq!(surface.lines(), state.streams.len());
        assert_eq!(surface.circles(), 0);
    }

    #[test]
    fn test_symbols_draw_glyphs() {
        let state = FieldState::new(800.0, 600.0, 4);
        let mut surface = RecordingSurface::default();
        draw_symbols(&state, &mut surface);
        assert_eq!(surface.glyphs(), state.symbols.len());
    }

    #[test]
    fn test_back_to_front_order() {
        let mut state = FieldState::new(800.0, 600.0, 5);
        // Pull two streams on screen and two nodes together so every layer draws
        state.streams[0].y = 100.0;
        state.nodes[0].pos = Vec2::new(100.0, 100.0);
        state.nodes[1].pos = Vec2::new(120.0, 100.0);

        let mut surface = RecordingSurface::default();
        draw_frame(&state, &Layers::default(), &mut surface);

        assert_eq!(
            layer_order(&surface.commands),
            [
                "clear",
                "grid",
                "streams",
                "connections",
                "particles",
                "symbols",
                "nodes"
            ]
        );
    }

    #[test]
    fn test_layer_signatures() {
        let mut state = FieldState::new(800.0, 600.0, 7);
        state.nodes[0].pos = Vec2::new(100.0, 100.0);
        state.nodes[1].pos = Vec2::new(100.0, 100.0);

        let mut surface = RecordingSurface::default();
        draw_grid(&state, &mut surface);
        assert!(surface.commands.iter().all(|c| layer_of(c) == "grid"));

        surface.reset();
        draw_connections(&state, &mut surface);
        assert!(!surface.is_empty());
        assert!(surface.commands.iter().all(|c| layer_of(c) == "connections"));

        surface.reset();
        draw_particles(&state, &mut surface);
        assert!(surface.commands.iter().all(|c| layer_of(c) == "particles"));

        surface.reset();
        draw_nodes(&state, &mut surface);
        assert!(surface.commands.iter().all(|c| layer_of(c) == "nodes"));
    }

    #[test]
    fn test_disabled_layers_are_skipped() {
        let state = FieldState::new(800.0, 600.0, 6);
        let layers = Layers {
            grid: false,
            streams: false,
            connections: false,
            particles: false,
            symbols: false,
            nodes: false,
        };
        let mut surface = RecordingSurface::default();
        draw_frame(&state, &layers, &mut surface);
        assert_eq!(surface.commands.len(), 1);
    }
}
