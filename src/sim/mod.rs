//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies
//!
//! Two inputs drive it: the render tick (fixed cadence) and hand-tracking
//! frames (irregular cadence, may stop arriving entirely). Both run on the
//! same single-threaded event loop and never overlap.

pub mod collision;
pub mod effects;
pub mod hand;
pub mod pendulum;
pub mod state;
pub mod tick;

pub use collision::{HitEvent, HitOutcome, check_hit, resolve_hit};
pub use effects::{CameraShake, Particle, TimedCue};
pub use hand::{HAND_SKELETON, HandFrame, VelocityTracker};
pub use pendulum::PendulumState;
pub use state::{GameEvent, GameState};
pub use tick::{TickInput, hand_lost, ingest_hand_frame, tick};
