//! Punchbag - a webcam motion game
//!
//! A hand-tracking collaborator (MediaPipe in the browser) delivers 21
//! landmark positions per frame; the simulation renders them as a skeletal
//! hand that can punch a pendulum target.
//!
//! Core modules:
//! - `sim`: Deterministic simulation (pendulum physics, punch detection, scoring)
//! - `render`: Per-tick scene snapshot for the rendering collaborator
//! - `ui`: Score display model
//! - `tuning`: Data-driven game balance

pub mod render;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use tuning::Tuning;

/// Game loop constants
pub mod consts {
    /// Fixed simulation timestep. Physics advances at a constant 60 Hz dt,
    /// decoupled from rendering jitter.
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;
}
