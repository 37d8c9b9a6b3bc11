//! Score display model
//!
//! The score sink gets a plain value plus presentation hints: a color that
//! slides from green to red as the score climbs, and a transient pulse
//! scale after each hit. The actual DOM/text rendering belongs to the
//! collaborator.

use serde::Serialize;

use crate::sim::state::GameState;
/// Pulse scale while the score cue is active
const PULSE_SCALE: f32 = 1.5;

/// Hue for the score color: 120 (green) at zero, clamped at 0 (red)
pub fn score_hue(score: u32) -> f32 {
    (120.0 - score as f32 / 10.0).max(0.0)
}

/// Convert HSL to RGB, all components in [0, 1], hue in degrees
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> [f32; 3] {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let hp = (h.rem_euclid(360.0)) / 60.0;
    let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
    let (r, g, b) = match hp as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = l - c / 2.0;
    [r + m, g + m, b + m]
}

/// What the score sink displays this frame
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ScoreReadout {
    pub value: u32,
    /// Fully saturated HSL ramp, green at 0 through red at 1200+
    pub color: [f32; 3],
    /// 1.5 right after a hit, 1.0 at rest
    pub scale: f32,
}

impl ScoreReadout {
    pub fn from_state(state: &GameState) -> Self {
        Self {
            value: state.score,
            color: hsl_to_rgb(score_hue(state.score), 1.0, 0.5),
            scale: if state.pulse.is_active() {
                PULSE_SCALE
            } else {
                1.0
            },
        }
    }
}
