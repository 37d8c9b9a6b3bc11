//! Hand frames and velocity estimation
//!
//! The tracking collaborator delivers 21 normalized landmarks per frame at
//! its own cadence. This module maps them into world space and derives a
//! raw finite-difference velocity estimate for the punch detector.

use glam::Vec3;

/// Landmark indices (MediaPipe hand topology)
pub const WRIST: usize = 0;
pub const THUMB_CMC: usize = 1;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_DIP: usize = 7;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_DIP: usize = 11;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_PIP: usize = 14;
pub const RING_DIP: usize = 15;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_DIP: usize = 19;
pub const PINKY_TIP: usize = 20;

/// Number of tracked joints per hand
pub const NUM_JOINTS: usize = 21;

/// Hand skeleton connections for bone rendering
pub const HAND_SKELETON: [(usize, usize); 21] = [
    (WRIST, THUMB_CMC),
    (THUMB_CMC, THUMB_MCP),
    (THUMB_MCP, THUMB_IP),
    (THUMB_IP, THUMB_TIP),
    (WRIST, INDEX_MCP),
    (INDEX_MCP, INDEX_PIP),
    (INDEX_PIP, INDEX_DIP),
    (INDEX_DIP, INDEX_TIP),
    (WRIST, MIDDLE_MCP),
    (MIDDLE_MCP, MIDDLE_PIP),
    (MIDDLE_PIP, MIDDLE_DIP),
    (MIDDLE_DIP, MIDDLE_TIP),
    (WRIST, RING_MCP),
    (RING_MCP, RING_PIP),
    (RING_PIP, RING_DIP),
    (RING_DIP, RING_TIP),
    (WRIST, PINKY_MCP),
    (PINKY_MCP, PINKY_PIP),
    (PINKY_PIP, PINKY_DIP),
    (PINKY_DIP, PINKY_TIP),
    (INDEX_MCP, MIDDLE_MCP),
];

/// World-space mapping of normalized landmarks (mirror X, scale per axis,
/// pull depth toward the camera). Changing these changes the perceived hand
/// position and scale.
const WORLD_SCALE_X: f32 = 4.0;
const WORLD_SCALE_Y: f32 = 3.0;
const WORLD_SCALE_Z: f32 = 5.0;

/// Map one normalized landmark into world space
#[inline]
pub fn landmark_to_world(x: f32, y: f32, z: f32) -> Vec3 {
    Vec3::new(
        (0.5 - x) * WORLD_SCALE_X,
        (0.5 - y) * WORLD_SCALE_Y,
        -z * WORLD_SCALE_Z,
    )
}

/// One tracked hand frame in world space, tagged with its arrival time.
/// Ephemeral: consumed the tick it arrives, never retained.
#[derive(Debug, Clone, Copy)]
pub struct HandFrame {
    pub joints: [Vec3; NUM_JOINTS],
    /// Capture timestamp in seconds
    pub timestamp: f64,
}

impl HandFrame {
    /// Build a frame from a flat [x, y, z, ...] normalized landmark buffer
    /// as delivered across the tracking bridge. Returns None when the buffer
    /// doesn't hold a full hand.
    pub fn from_normalized(flat: &[f32], timestamp: f64) -> Option<Self> {
        if flat.len() < NUM_JOINTS * 3 {
            return None;
        }
        let mut joints = [Vec3::ZERO; NUM_JOINTS];
        for (i, joint) in joints.iter_mut().enumerate() {
            let base = i * 3;
            *joint = landmark_to_world(flat[base], flat[base + 1], flat[base + 2]);
        }
        Some(Self { joints, timestamp })
    }

    /// Canonical hand reference point: the middle-finger knuckle, a stable
    /// approximation of the palm center.
    pub fn center(&self) -> Vec3 {
        self.joints[MIDDLE_MCP]
    }
}

/// Finite-difference hand velocity estimator.
///
/// Deliberately unfiltered: the estimate is (curr - prev) / dt from the two
/// most recent frames, noise and all. Duplicate or out-of-order frames
/// (dt <= 0) are skipped and the prior estimate is kept.
#[derive(Debug, Clone, Copy, Default)]
pub struct VelocityTracker {
    last_center: Vec3,
    last_time: f64,
    velocity: Vec3,
    has_sample: bool,
}

impl VelocityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the next hand center sample; returns the current estimate.
    /// Zero until a second sample arrives.
    pub fn update(&mut self, center: Vec3, time: f64) -> Vec3 {
        if !self.has_sample {
            self.last_center = center;
            self.last_time = time;
            self.has_sample = true;
            return self.velocity;
        }

        let dt = (time - self.last_time) as f32;
        if dt > 0.0 {
            self.velocity = (center - self.last_center) / dt;
            self.last_center = center;
            self.last_time = time;
        }
        self.velocity
    }

    /// Current estimate without feeding a sample
    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    /// Forget history (hand lost or explicit reset)
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
