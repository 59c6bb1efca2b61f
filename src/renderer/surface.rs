//! Drawing surface abstraction
//!
//! Layers describe what to paint in terms of these primitives; a backend
//! (canvas 2D context, or an in-memory recorder) decides how.

use glam::Vec2;

/// Straight-alpha color with 8-bit channels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with a different alpha
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// CSS color string, e.g. `rgba(56, 189, 248, 0.3)`
    pub fn css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Colors for field elements
pub mod colors {
    use super::Rgba;

    pub const CYAN: Rgba = Rgba::new(56, 189, 248, 1.0);
    pub const SKY: Rgba = Rgba::new(96, 165, 250, 1.0);
    pub const PURPLE: Rgba = Rgba::new(147, 51, 234, 1.0);
    pub const VIOLET: Rgba = Rgba::new(168, 85, 247, 1.0);
    /// Bright node core (#7dd3fc)
    pub const CORE: Rgba = Rgba::new(125, 211, 252, 1.0);
}

/// A color stop along a linear gradient
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    /// Position along the gradient, 0-1
    pub offset: f32,
    pub color: Rgba,
}

/// Linear gradient between two points
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: Vec2,
    pub end: Vec2,
    pub stops: Vec<ColorStop>,
}

impl LinearGradient {
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self {
            start,
            end,
            stops: Vec::new(),
        }
    }

    pub fn stop(mut self, offset: f32, color: Rgba) -> Self {
        self.stops.push(ColorStop { offset, color });
        self
    }
}

/// How a stroke or fill is colored
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Rgba),
    Linear(LinearGradient),
}

/// Soft shadow drawn under a shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shadow {
    pub blur: f32,
    pub color: Rgba,
}

/// Line style
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub paint: Paint,
    pub width: f32,
    pub round_cap: bool,
}

/// Circle fill style
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fill {
    pub color: Rgba,
    pub shadow: Option<Shadow>,
}

impl Fill {
    pub const fn solid(color: Rgba) -> Self {
        Self {
            color,
            shadow: None,
        }
    }

    pub const fn glowing(color: Rgba, blur: f32, shadow_color: Rgba) -> Self {
        Self {
            color,
            shadow: Some(Shadow {
                blur,
                color: shadow_color,
            }),
        }
    }
}

/// A single glyph drawn centred on `pos`, rotated by `rotation` radians
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glyph {
    pub ch: char,
    pub pos: Vec2,
    pub rotation: f32,
    /// Font size in pixels
    pub size: f32,
    pub fill: Fill,
}

/// Something the field can be painted on.
///
/// Calls never fail from the caller's point of view; backends swallow their
/// own errors.
pub trait Surface {
    /// Erase the whole surface to transparent
    fn clear(&mut self, width: f32, height: f32);

    /// Stroke a straight line
    fn line(&mut self, from: Vec2, to: Vec2, stroke: &Stroke);

    /// Fill a circle
    fn circle(&mut self, center: Vec2, radius: f32, fill: &Fill);

    /// Draw a single text glyph
    fn glyph(&mut self, glyph: &Glyph);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_format() {
        assert_eq!(colors::CYAN.with_alpha(0.3).css(), "rgba(56, 189, 248, 0.3)");
        assert_eq!(colors::CORE.css(), "rgba(125, 211, 252, 1)");
    }

    #[test]
    fn test_gradient_builder() {
        let g = LinearGradient::new(Vec2::ZERO, Vec2::Y)
            .stop(0.0, colors::CYAN)
            .stop(1.0, colors::PURPLE);
        assert_eq!(g.stops.len(), 2);
        assert_eq!(g.stops[1].color, colors::PURPLE);
    }
}
