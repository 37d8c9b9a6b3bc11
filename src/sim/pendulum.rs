//! Pendulum target physics
//!
//! Simple-pendulum angular dynamics for the hanging target. The state is a
//! single degree of freedom (swing about the pivot's X axis), advanced with a
//! fixed nominal dt so the simulation stays deterministic regardless of
//! rendering jitter.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Angular state of the hanging target
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PendulumState {
    /// Angular displacement from vertical rest (radians)
    pub angle: f32,
    /// Angular velocity (radians/sec)
    pub angular_velocity: f32,
}

impl PendulumState {
    /// Advance one tick.
    ///
    /// Damping is applied once per tick rather than scaled by dt - an
    /// explicit trade: oscillation decay is bounded and independent of the
    /// tick rate instead of physically exact.
    pub fn step(&mut self, dt: f32, tuning: &Tuning) {
        let accel = -tuning.gravity * self.angle.sin() / tuning.rope_length;
        self.angular_velocity += accel * dt;
        self.angular_velocity *= tuning.damping;
        self.angle += self.angular_velocity * dt;
    }

    /// Kick the pendulum from a punch. The force is clamped before scaling
    /// so a single very fast swing can't send the target spinning.
    pub fn apply_impulse(&mut self, force: f32, tuning: &Tuning) {
        let effective = force.min(tuning.force_clamp);
        self.angular_velocity += effective * tuning.impulse_scale;
    }

    /// World position of the target sphere at the end of the rope.
    ///
    /// The rope hangs straight down from the pivot at rest; the swing
    /// rotates it about the pivot's X axis, so the bob moves in the Y/Z
    /// plane toward and away from the camera.
    pub fn bob_world_position(&self, tuning: &Tuning) -> Vec3 {
        let (sin, cos) = self.angle.sin_cos();
        let l = tuning.rope_length;
        tuning.pivot_position + Vec3::new(0.0, -l * cos, -l * sin)
    }

    /// Back to vertical rest
    pub fn reset(&mut self) {
        self.angle = 0.0;
        self.angular_velocity = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_step_converges_to_rest() {
        let tuning = Tuning::default();
        let mut state = PendulumState {
            angle: 0.8,
            angular_velocity: 2.0,
        };

        for _ in 0..2000 {
            state.step(crate::consts::SIM_DT, &tuning);
        }

        assert!(state.angle.abs() < 0.01, "angle={}", state.angle);
        assert!(state.angular_velocity.abs() < 0.01);
    }

    #[test]
    fn test_impulse_clamp_respected() {
        let tuning = Tuning::default();
        let mut state = PendulumState::default();

        // Absurd force from a tracking glitch
        state.apply_impulse(120.0, &tuning);
        let after_impulse = state.angular_velocity;
        assert!((after_impulse - tuning.force_clamp * tuning.impulse_scale).abs() < 1e-6);

        // One tick can only damp it (gravity is zero at rest angle)
        state.step(crate::consts::SIM_DT, &tuning);
        assert!(state.angular_velocity.abs() <= after_impulse.abs());
    }

    #[test]
    fn test_bob_position_at_rest() {
        let tuning = Tuning::default();
        let state = PendulumState::default();
        let pos = state.bob_world_position(&tuning);

        // Straight down from the pivot: (0, 3-3, -2)
        assert!((pos - Vec3::new(0.0, 0.0, -2.0)).length() < 1e-6);
    }

    #[test]
    fn test_bob_swings_toward_camera() {
        let tuning = Tuning::default();
        let state = PendulumState {
            angle: -0.5,
            angular_velocity: 0.0,
        };
        let pos = state.bob_world_position(&tuning);

        // Negative angle swings the bob toward +Z (the camera) and raises it
        assert!(pos.z > -2.0);
        assert!(pos.y > 0.0);
    }

    proptest! {
        #[test]
        fn prop_damping_dominates(angle in -1.2f32..1.2, vel in -3.0f32..3.0) {
            let tuning = Tuning::default();
            let mut state = PendulumState { angle, angular_velocity: vel };

            for _ in 0..4000 {
                state.step(crate::consts::SIM_DT, &tuning);
            }

            prop_assert!(state.angle.abs() < 0.05);
            prop_assert!(state.angular_velocity.abs() < 0.05);
        }
    }
}
