//! Game state and core simulation types
//!
//! One explicitly owned state struct instead of scene-global mutables, so
//! multiple independent instances can exist and the core is unit-testable
//! without a rendering context.

use glam::Vec3;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::effects::{CameraShake, Particle, TimedCue};
use super::hand::{NUM_JOINTS, VelocityTracker};
use super::pendulum::PendulumState;

/// Events emitted by the simulation for the outer shell (logging, sound)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// A qualifying punch landed
    Hit { impact_speed: f32, score_delta: u32 },
}

/// RNG state wrapper for serialization
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }
}

fn placeholder_rng() -> Pcg32 {
    Pcg32::seed_from_u64(0)
}

/// Complete game state, owned by the core and mutated only from the single
/// tick/callback thread.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// RNG state (runtime rng is rebuilt from this on load)
    pub rng_state: RngState,
    /// Cosmetic RNG for shake offsets and particle directions
    #[serde(skip, default = "placeholder_rng")]
    pub rng: Pcg32,
    /// Pendulum target
    pub pendulum: PendulumState,
    /// Hand velocity estimator (ephemeral tracking history)
    #[serde(skip)]
    pub tracker: VelocityTracker,
    /// Latest tracked joint positions in world space
    #[serde(skip)]
    pub hand_joints: [Vec3; NUM_JOINTS],
    /// Whether a hand is currently tracked (drives skeleton visibility)
    pub hand_visible: bool,
    /// Session score
    pub score: u32,
    /// Camera shake effect
    pub shake: CameraShake,
    /// Camera offset produced by the shake this tick
    #[serde(skip)]
    pub camera_offset: Vec3,
    /// Target emissive flash cue
    pub flash: TimedCue,
    /// Score pulse cue
    pub pulse: TimedCue,
    /// Visual particles (not gameplay-affecting)
    #[serde(skip)]
    pub particles: Vec<Particle>,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64) -> Self {
        let rng_state = RngState::new(seed);
        Self {
            seed,
            rng_state,
            rng: rng_state.to_rng(),
            pendulum: PendulumState::default(),
            tracker: VelocityTracker::new(),
            hand_joints: [Vec3::ZERO; NUM_JOINTS],
            hand_visible: false,
            score: 0,
            shake: CameraShake::default(),
            camera_offset: Vec3::ZERO,
            flash: TimedCue::default(),
            pulse: TimedCue::default(),
            particles: Vec::new(),
            time_ticks: 0,
        }
    }

    /// Award points for a punch; monotonic within a session, clamped to the
    /// configured maximum.
    pub fn add_score(&mut self, delta: u32, max_score: u32) {
        self.score = (self.score + delta).min(max_score);
    }

    /// Explicit reset: zero the pendulum and score, clear every transient.
    pub fn reset(&mut self) {
        self.pendulum.reset();
        self.tracker.reset();
        self.score = 0;
        self.shake.reset();
        self.camera_offset = Vec3::ZERO;
        self.flash.reset();
        self.pulse.reset();
        self.particles.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_clamped_to_max() {
        let mut state = GameState::new(1);
        state.add_score(6000, 9999);
        state.add_score(6000, 9999);
        assert_eq!(state.score, 9999);
    }

    #[test]
    fn test_state_serde_roundtrip() {
        let mut state = GameState::new(77);
        state.score = 1234;
        state.pendulum.angle = 0.3;

        let json = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(back.score, 1234);
        assert_eq!(back.pendulum.angle, 0.3);
        assert_eq!(back.rng_state.seed, 77);
    }
}
