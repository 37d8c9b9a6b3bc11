//! Frame driver
//!
//! Two entry points, both called from the same single-threaded event loop:
//! `tick` advances the simulation once per render callback at a fixed dt,
//! and `ingest_hand_frame` runs whenever the tracking collaborator delivers
//! a hand - at its own, irregular cadence. Gaps (no hand) and bursts are
//! tolerated; neither path can fault on its documented inputs.

use super::collision::{check_hit, resolve_hit};
use super::effects::spawn_burst;
use super::hand::HandFrame;
use super::state::{GameEvent, GameState};
use crate::tuning::Tuning;

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Explicit reset: zero pendulum and score, clear transients
    pub reset: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, tuning: &Tuning, dt: f32) {
    if input.reset {
        state.reset();
        log::info!("Game reset");
    }

    state.pendulum.step(dt, tuning);
    state.camera_offset = state.shake.step(&mut state.rng, tuning);
    state.flash.step(dt);
    state.pulse.step(dt);
    state.particles.retain_mut(|p| p.update(dt, tuning));

    state.time_ticks += 1;
}

/// Process one hand-tracking frame.
///
/// Updates the skeleton pose and velocity estimate, then tests every joint
/// against the target. On a qualifying punch the whole outcome - impulse,
/// score, shake, flash, particles - is applied together; there is no
/// partial application.
pub fn ingest_hand_frame(
    state: &mut GameState,
    frame: &HandFrame,
    tuning: &Tuning,
) -> Option<GameEvent> {
    state.hand_visible = true;
    state.hand_joints = frame.joints;

    let velocity = state.tracker.update(frame.center(), frame.timestamp);
    let target = state.pendulum.bob_world_position(tuning);

    let hit = check_hit(&frame.joints, target, velocity, tuning)?;
    let outcome = resolve_hit(hit.impact_speed, tuning);

    state.pendulum.apply_impulse(hit.impact_speed, tuning);
    state.shake.trigger(outcome.effect_intensity);
    state.flash.trigger(tuning.flash_duration);
    spawn_burst(
        &mut state.particles,
        &mut state.rng,
        target,
        outcome.clamped_force,
        tuning,
    );
    state.add_score(outcome.score_delta, tuning.max_score);
    state.pulse.trigger(tuning.pulse_duration);

    log::debug!(
        "Hit: speed {:.2} (clamped {:.2}), +{} points",
        hit.impact_speed,
        outcome.clamped_force,
        outcome.score_delta
    );

    Some(GameEvent::Hit {
        impact_speed: hit.impact_speed,
        score_delta: outcome.score_delta,
    })
}

/// The tracker reported no hand this frame. Not an error: hide the skeleton
/// and withhold velocity/collision updates until frames resume. The stored
/// velocity sample is kept, so a brief dropout doesn't spike the estimate.
pub fn hand_lost(state: &mut GameState) {
    state.hand_visible = false;
}
