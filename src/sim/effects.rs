//! Transient visual-effect state
//!
//! Camera shake, particle bursts, and timed cues (emissive flash, score
//! pulse). All of it is cosmetic - nothing here feeds back into physics or
//! score - but the lifecycles are explicit state machines advanced by the
//! tick, not fire-and-forget timers, so they stay deterministic and
//! testable without wall-clock waits.

use glam::Vec3;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Camera shake: IDLE (intensity == 0) or DECAYING (intensity > 0)
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CameraShake {
    intensity: f32,
}

/// Below this the shake snaps to rest
const SHAKE_EPSILON: f32 = 0.01;

impl CameraShake {
    /// A new hit overrides any shake still decaying; magnitudes never stack.
    pub fn trigger(&mut self, intensity: f32) {
        self.intensity = intensity;
    }

    /// Advance one tick and return the camera offset to apply. Returns the
    /// neutral rest offset once the shake has decayed out.
    pub fn step(&mut self, rng: &mut Pcg32, tuning: &Tuning) -> Vec3 {
        if self.intensity <= 0.0 {
            return Vec3::ZERO;
        }

        let offset = Vec3::new(
            (rng.random::<f32>() - 0.5) * self.intensity,
            (rng.random::<f32>() - 0.5) * self.intensity,
            0.0,
        );

        self.intensity *= tuning.shake_decay;
        if self.intensity < SHAKE_EPSILON {
            self.intensity = 0.0;
        }

        offset
    }

    pub fn is_idle(&self) -> bool {
        self.intensity == 0.0
    }

    pub fn reset(&mut self) {
        self.intensity = 0.0;
    }
}

/// One short-lived burst emitter
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec3,
    pub vel: Vec3,
    /// 1.0 at spawn, retired at 0
    pub life: f32,
}

impl Particle {
    /// Advance one tick; returns false once the particle is spent
    pub fn update(&mut self, dt: f32, tuning: &Tuning) -> bool {
        self.pos += self.vel * dt;
        self.life -= tuning.particle_decay_rate * dt;
        self.life > 0.0
    }
}

/// Spawn a burst of emitters at the impact point, each with a random
/// spherical direction scaled by the clamped punch force.
pub fn spawn_burst(
    particles: &mut Vec<Particle>,
    rng: &mut Pcg32,
    origin: Vec3,
    clamped_force: f32,
    tuning: &Tuning,
) {
    let speed = clamped_force * tuning.particle_speed_scale;
    for _ in 0..tuning.particle_count {
        let theta = rng.random::<f32>() * std::f32::consts::TAU;
        let phi = rng.random::<f32>() * std::f32::consts::PI;
        let dir = Vec3::new(
            phi.sin() * theta.cos(),
            phi.sin() * theta.sin(),
            phi.cos(),
        );
        particles.push(Particle {
            pos: origin,
            vel: dir * speed,
            life: 1.0,
        });
    }
}

/// Elapsed-time countdown for one-shot cues (target flash, score pulse).
/// Counted in simulation time rather than reverted by a wall-clock timer,
/// so replays and pauses stay consistent.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TimedCue {
    remaining: f32,
}

impl TimedCue {
    pub fn trigger(&mut self, duration: f32) {
        self.remaining = duration;
    }

    /// Advance one tick; returns true while the cue is active
    pub fn step(&mut self, dt: f32) -> bool {
        if self.remaining > 0.0 {
            self.remaining = (self.remaining - dt).max(0.0);
        }
        self.is_active()
    }

    pub fn is_active(&self) -> bool {
        self.remaining > 0.0
    }

    pub fn reset(&mut self) {
        self.remaining = 0.0;
    }
}
