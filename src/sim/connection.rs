//! Node-to-node connection scan
//!
//! Every unordered node pair is checked each frame. With 60 nodes that is
//! 1770 distance checks, so no spatial partitioning is used.

use glam::Vec2;

use super::state::Node;
use crate::consts::{CONNECTION_DISTANCE, CONNECTION_MAX_OPACITY, CONNECTION_MIN_OPACITY};

/// A connection line between two nodes for the current frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connection {
    pub from: Vec2,
    pub to: Vec2,
    /// 1 at zero distance, 0 at the connection threshold
    pub falloff: f32,
    pub opacity: f32,
}

/// Linear distance falloff, 0 at or beyond the connection threshold
#[inline]
pub fn distance_falloff(distance: f32) -> f32 {
    if distance >= CONNECTION_DISTANCE {
        0.0
    } else {
        1.0 - distance / CONNECTION_DISTANCE
    }
}

/// Opacity of the line between nodes `i` and `j` at `frame`.
///
/// The pulse term is shared by every pair but phase-shifted by `i + j`, and
/// never drops a visible line below `CONNECTION_MIN_OPACITY * falloff`.
pub fn connection_opacity(distance: f32, frame: u64, i: usize, j: usize) -> f32 {
    let falloff = distance_falloff(distance);
    if falloff <= 0.0 {
        return 0.0;
    }

    let time = frame as f32 * 0.002;
    let base = falloff * CONNECTION_MAX_OPACITY;
    let pulse = ((time + (i + j) as f32 * 0.05).sin() + 1.0) * 0.5;
    let opacity = base * (0.7 + pulse * 0.3);

    opacity.max(CONNECTION_MIN_OPACITY * falloff)
}

/// Collect the connections to draw this frame, in pair-scan order
pub fn connections(nodes: &[Node], frame: u64) -> Vec<Connection> {
    let mut out = Vec::new();

    for i in 0..nodes.len() {
        for j in (i + 1)..nodes.len() {
            let (a, b) = (nodes[i].pos, nodes[j].pos);
            let distance = a.distance(b);
            if distance < CONNECTION_DISTANCE {
                out.push(Connection {
                    from: a,
                    to: b,
                    falloff: distance_falloff(distance),
                    opacity: connection_opacity(distance, frame, i, j),
                });
            }
        }
    }

    out
}
