//! Data-driven game balance
//!
//! One explicit structure for every gameplay constant, persisted in
//! LocalStorage on web so tweaks survive a reload.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// All gameplay constants in one place
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tuning {
    // === Pendulum physics ===
    /// Gravitational acceleration acting on the pendulum
    pub gravity: f32,
    /// Rope length from pivot to target center
    pub rope_length: f32,
    /// Velocity multiplier applied once per tick (not time-scaled; trades
    /// physical accuracy for frame-rate-independent oscillation decay)
    pub damping: f32,
    /// Pivot point the target hangs from
    pub pivot_position: Vec3,

    // === Punch detection ===
    /// Minimum hand speed for a contact to count as a punch
    pub punch_threshold: f32,
    /// Target sphere radius
    pub target_radius: f32,
    /// Extra contact margin accounting for joint sphere size
    pub hit_margin: f32,

    // === Hit response ===
    /// Angular velocity added per unit of clamped punch force
    pub impulse_scale: f32,
    /// Ceiling on punch force; prevents runaway spin from a tracking glitch
    pub force_clamp: f32,

    // === Camera shake ===
    pub shake_scale: f32,
    pub shake_ceiling: f32,
    /// Per-tick shake intensity multiplier
    pub shake_decay: f32,

    // === Scoring ===
    pub score_scale: f32,
    pub max_score: u32,

    // === Particles ===
    /// Emitters spawned per hit
    pub particle_count: usize,
    /// Life lost per second (life starts at 1.0)
    pub particle_decay_rate: f32,
    /// Initial particle speed per unit of clamped punch force
    pub particle_speed_scale: f32,

    // === Timed cues ===
    /// Target emissive flash duration (seconds)
    pub flash_duration: f32,
    /// Score pulse duration (seconds)
    pub pulse_duration: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 15.0,
            rope_length: 3.0,
            damping: 0.96,
            pivot_position: Vec3::new(0.0, 3.0, -2.0),

            punch_threshold: 0.5,
            target_radius: 0.5,
            hit_margin: 0.05,

            impulse_scale: 0.8,
            force_clamp: 5.0,

            shake_scale: 0.1,
            shake_ceiling: 0.5,
            shake_decay: 0.9,

            score_scale: 100.0,
            max_score: 9999,

            particle_count: 20,
            particle_decay_rate: 2.0,
            particle_speed_scale: 0.5,

            flash_duration: 0.1,
            pulse_duration: 0.2,
        }
    }
}

impl Tuning {
    /// LocalStorage key
    const STORAGE_KEY: &'static str = "punchbag_tuning";

    /// Load tuning from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(tuning) = serde_json::from_str(&json) {
                    log::info!("Loaded tuning from LocalStorage");
                    return tuning;
                }
            }
        }

        log::info!("Using default tuning");
        Self::default()
    }

    /// Save tuning to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Tuning saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_balance_values() {
        let t = Tuning::default();
        assert_eq!(t.force_clamp, 5.0);
        assert_eq!(t.max_score, 9999);
        assert_eq!(t.particle_count, 20);
        assert!(t.damping < 1.0);
    }

    #[test]
    fn test_tuning_json_roundtrip() {
        let t = Tuning {
            gravity: 20.0,
            ..Default::default()
        };
        let json = serde_json::to_string(&t).unwrap();
        let back: Tuning = serde_json::from_str(&json).unwrap();
        assert_eq!(back.gravity, 20.0);
        assert_eq!(back.pivot_position, t.pivot_position);
    }
}
