//! In-memory surface that records draw calls
//!
//! Used by tests and by the native headless runner in place of a canvas.

use glam::Vec2;
use serde::Serialize;

use super::surface::{Fill, Glyph, Stroke, Surface};

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear { width: f32, height: f32 },
    Line { from: Vec2, to: Vec2, stroke: Stroke },
    Circle { center: Vec2, radius: f32, fill: Fill },
    Glyph(Glyph),
}

impl DrawCommand {
    /// Short tag for the command kind
    pub fn kind(&self) -> &'static str {
        match self {
            DrawCommand::Clear { .. } => "clear",
            DrawCommand::Line { .. } => "line",
            DrawCommand::Circle { .. } => "circle",
            DrawCommand::Glyph(_) => "glyph",
        }
    }
}

/// Per-kind totals for a recorded frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DrawSummary {
    pub clears: usize,
    pub lines: usize,
    pub circles: usize,
    pub glyphs: usize,
}

#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop everything recorded so far
    pub fn reset(&mut self) {
        self.commands.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn lines(&self) -> usize {
        self.count("line")
    }

    pub fn circles(&self) -> usize {
        self.count("circle")
    }

    pub fn glyphs(&self) -> usize {
        self.count("glyph")
    }

    pub fn summary(&self) -> DrawSummary {
        DrawSummary {
            clears: self.count("clear"),
            lines: self.lines(),
            circles: self.circles(),
            glyphs: self.glyphs(),
        }
    }

    fn count(&self, kind: &str) -> usize {
        self.commands.iter().filter(|c| c.kind() == kind).count()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.commands.push(DrawCommand::Clear { width, height });
    }

    fn line(&mut self, from: Vec2, to: Vec2, stroke: &Stroke) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            stroke: stroke.clone(),
        });
    }

    fn circle(&mut self, center: Vec2, radius: f32, fill: &Fill) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            fill: *fill,
        });
    }

    fn glyph(&mut self, glyph: &Glyph) {
        self.commands.push(DrawCommand::Glyph(*glyph));
    }
}
