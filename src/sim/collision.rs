//! Punch detection and hit resolution
//!
//! Contact is tested against every joint, not just the palm center: finger
//! joints usually reach the target first, and the extra generosity reads as
//! better tracking to the player. A contact only scores when the hand is
//! both fast enough and moving toward the target along the depth axis.

use glam::Vec3;

use crate::tuning::Tuning;

/// A qualifying strike, consumed by physics, score, and effects together
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitEvent {
    /// Raw hand speed at impact (pre-clamp)
    pub impact_speed: f32,
    /// Velocity depth component was directed at the target
    pub forward: bool,
}

/// Everything a hit produces, computed in one place so application is
/// all-or-nothing: no score without physics, no physics without effects.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitOutcome {
    /// Impact speed after the force clamp
    pub clamped_force: f32,
    /// Angular velocity increment for the pendulum
    pub impulse: f32,
    /// Points awarded for this punch
    pub score_delta: u32,
    /// Drives camera shake magnitude and particle speed
    pub effect_intensity: f32,
}

/// Test the tracked hand against the target sphere.
///
/// Any joint within `target_radius + hit_margin` of the target counts as
/// contact. A slow touch or a contact while the hand retracts returns None.
/// There is no cooldown: a sustained overlap with qualifying velocity can
/// register again on consecutive frames.
pub fn check_hit(
    joints: &[Vec3],
    target_pos: Vec3,
    velocity: Vec3,
    tuning: &Tuning,
) -> Option<HitEvent> {
    let reach = tuning.target_radius + tuning.hit_margin;
    let contact = joints.iter().any(|j| j.distance(target_pos) < reach);
    if !contact {
        return None;
    }

    let speed = velocity.length();
    let forward = velocity.z < 0.0;
    if speed > tuning.punch_threshold && forward {
        Some(HitEvent {
            impact_speed: speed,
            forward,
        })
    } else {
        None
    }
}

/// Convert a raw impact speed into the full hit outcome.
///
/// The clamp is applied first; score, impulse, and effect intensity all
/// derive from the clamped value so a tracking glitch can't inflate any of
/// them.
pub fn resolve_hit(impact_speed: f32, tuning: &Tuning) -> HitOutcome {
    let clamped = impact_speed.min(tuning.force_clamp);
    HitOutcome {
        clamped_force: clamped,
        impulse: clamped * tuning.impulse_scale,
        score_delta: ((clamped * tuning.score_scale).floor() as u32).min(tuning.max_score),
        effect_intensity: (clamped * tuning.shake_scale).min(tuning.shake_ceiling),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn tuning() -> Tuning {
        Tuning::default()
    }

    fn joints_at(pos: Vec3) -> [Vec3; 21] {
        let mut joints = [Vec3::new(100.0, 100.0, 100.0); 21];
        joints[8] = pos; // index fingertip in range, rest far away
        joints
    }

    #[test]
    fn test_hit_at_contact_and_speed_boundary() {
        let t = tuning();
        let target = Vec3::new(0.0, 0.0, -2.0);

        // Joint just inside radius + margin, speed just over threshold, forward
        let joint = target + Vec3::new(t.target_radius + t.hit_margin - EPS, 0.0, 0.0);
        let vel = Vec3::new(0.0, 0.0, -(t.punch_threshold + EPS));

        let hit = check_hit(&joints_at(joint), target, vel, &t);
        assert!(hit.is_some());
        assert!(hit.unwrap().forward);
    }

    #[test]
    fn test_no_hit_below_threshold() {
        let t = tuning();
        let target = Vec3::new(0.0, 0.0, -2.0);
        let joint = target + Vec3::new(t.target_radius + t.hit_margin - EPS, 0.0, 0.0);
        let vel = Vec3::new(0.0, 0.0, -(t.punch_threshold - EPS));

        assert!(check_hit(&joints_at(joint), target, vel, &t).is_none());
    }

    #[test]
    fn test_no_hit_while_retracting() {
        let t = tuning();
        let target = Vec3::new(0.0, 0.0, -2.0);
        let joint = target;
        // Fast, but pulling back toward the camera
        let vel = Vec3::new(0.0, 0.0, 3.0);

        assert!(check_hit(&joints_at(joint), target, vel, &t).is_none());
    }

    #[test]
    fn test_no_hit_out_of_range() {
        let t = tuning();
        let target = Vec3::new(0.0, 0.0, -2.0);
        let joint = target + Vec3::new(t.target_radius + t.hit_margin + 0.01, 0.0, 0.0);
        let vel = Vec3::new(0.0, 0.0, -3.0);

        assert!(check_hit(&joints_at(joint), target, vel, &t).is_none());
    }

    #[test]
    fn test_any_joint_qualifies() {
        let t = tuning();
        let target = Vec3::new(0.0, 0.0, -2.0);
        let vel = Vec3::new(0.0, 0.0, -2.0);

        // Only the pinky tip touches
        let mut joints = [Vec3::new(50.0, 50.0, 50.0); 21];
        joints[20] = target;
        assert!(check_hit(&joints, target, vel, &t).is_some());
    }

    #[test]
    fn test_resolve_hit_scores_from_clamped_speed() {
        let t = tuning();

        // Raw 50 is absurd; clamp to 5.0 and score from that
        let outcome = resolve_hit(50.0, &t);
        assert_eq!(outcome.clamped_force, 5.0);
        assert_eq!(outcome.score_delta, 500);
        assert!((outcome.impulse - 4.0).abs() < 1e-6);
        assert_eq!(outcome.effect_intensity, t.shake_ceiling);
    }

    #[test]
    fn test_resolve_hit_unit_speed() {
        let t = tuning();
        let outcome = resolve_hit(1.0, &t);
        assert_eq!(outcome.score_delta, 100);
        assert!((outcome.impulse - t.impulse_scale).abs() < 1e-6);
        assert!((outcome.effect_intensity - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_score_delta_capped_at_max() {
        let t = Tuning {
            force_clamp: 1000.0,
            ..Tuning::default()
        };
        let outcome = resolve_hit(500.0, &t);
        assert_eq!(outcome.score_delta, t.max_score);
    }
}
