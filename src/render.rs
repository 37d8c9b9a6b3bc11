//! Per-tick scene snapshot for the rendering collaborator
//!
//! The crate does no drawing itself. Each tick it publishes a `SceneFrame`
//! describing exactly what the renderer should show: where the pendulum
//! points, how each hand bone is placed, which particles exist, and what
//! the score readout looks like. The renderer (three.js or similar on the
//! web side) applies it verbatim.

use glam::{Quat, Vec3};
use serde::Serialize;

use crate::sim::hand::HAND_SKELETON;
use crate::sim::state::GameState;
use crate::ui::ScoreReadout;

/// Placement for one cylinder bone between two joints
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BoneTransform {
    /// Segment midpoint
    pub midpoint: Vec3,
    /// Euclidean joint distance; the renderer scales a unit cylinder by this
    pub length: f32,
    /// Rotation aligning the cylinder's +Y reference axis to the segment
    pub rotation: Quat,
}

/// Compute the placement of a bone between two joint endpoints.
/// A degenerate (zero-length) segment keeps the identity rotation.
pub fn bone_transform(start: Vec3, end: Vec3) -> BoneTransform {
    let length = start.distance(end);
    let rotation = if length > 1e-6 {
        Quat::from_rotation_arc(Vec3::Y, (end - start) / length)
    } else {
        Quat::IDENTITY
    };
    BoneTransform {
        midpoint: (start + end) * 0.5,
        length,
        rotation,
    }
}

/// One particle as the renderer sees it: scale and opacity both follow the
/// remaining life so emitters shrink and fade out together.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ParticleVisual {
    pub position: Vec3,
    pub scale: f32,
    pub opacity: f32,
}

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, Serialize)]
pub struct SceneFrame {
    /// Pendulum pivot rotation about its X axis
    pub target_angle: f32,
    /// Offset from the camera's rest position (shake)
    pub camera_offset: Vec3,
    /// Whether the hand skeleton should be shown
    pub hand_visible: bool,
    /// World-space joint positions
    pub joints: Vec<Vec3>,
    /// Bone placements, one per skeleton connection
    pub bones: Vec<BoneTransform>,
    /// Live burst particles
    pub particles: Vec<ParticleVisual>,
    /// Target emissive flash active this frame
    pub flash: bool,
    /// Score value, color, and pulse scale
    pub score: ScoreReadout,
}

impl SceneFrame {
    /// Snapshot the state after a tick
    pub fn capture(state: &GameState) -> Self {
        let bones = if state.hand_visible {
            HAND_SKELETON
                .iter()
                .map(|&(a, b)| bone_transform(state.hand_joints[a], state.hand_joints[b]))
                .collect()
        } else {
            Vec::new()
        };

        Self {
            target_angle: state.pendulum.angle,
            camera_offset: state.camera_offset,
            hand_visible: state.hand_visible,
            joints: if state.hand_visible {
                state.hand_joints.to_vec()
            } else {
                Vec::new()
            },
            bones,
            particles: state
                .particles
                .iter()
                .map(|p| ParticleVisual {
                    position: p.pos,
                    scale: p.life,
                    opacity: p.life,
                })
                .collect(),
            flash: state.flash.is_active(),
            score: ScoreReadout::from_state(state),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bone_transform_basic() {
        let t = bone_transform(Vec3::ZERO, Vec3::new(0.0, 2.0, 0.0));
        assert!((t.length - 2.0).abs() < 1e-6);
        assert!((t.midpoint - Vec3::new(0.0, 1.0, 0.0)).length() < 1e-6);
        // Already aligned with +Y
        assert!(t.rotation.angle_between(Quat::IDENTITY) < 1e-4);
    }

    #[test]
    fn test_bone_transform_aligns_reference_axis() {
        let start = Vec3::new(1.0, -0.5, 0.2);
        let end = Vec3::new(-0.3, 0.8, -1.0);
        let t = bone_transform(start, end);

        let aligned = t.rotation * (Vec3::Y * t.length);
        assert!((aligned - (end - start)).length() < 1e-4);
    }

    #[test]
    fn test_bone_transform_degenerate_segment() {
        let p = Vec3::new(0.3, 0.3, 0.3);
        let t = bone_transform(p, p);
        assert_eq!(t.length, 0.0);
        assert_eq!(t.rotation, Quat::IDENTITY);
    }

    #[test]
    fn test_scene_frame_hides_lost_hand() {
        let mut state = GameState::new(1);
        state.hand_visible = false;

        let frame = SceneFrame::capture(&state);
        assert!(!frame.hand_visible);
        assert!(frame.joints.is_empty());
        assert!(frame.bones.is_empty());
    }

    #[test]
    fn test_scene_frame_bone_count() {
        let mut state = GameState::new(1);
        state.hand_visible = true;

        let frame = SceneFrame::capture(&state);
        assert_eq!(frame.bones.len(), HAND_SKELETON.len());
        assert_eq!(frame.joints.len(), 21);
    }
}
