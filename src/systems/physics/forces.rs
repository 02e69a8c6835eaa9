use crate::core::math::Vector3;
use crate::domain::TuningProfile;
use crate::systems::blocks::Block;
use crate::systems::hand::HandState;

/// Below this the block sits on the hand and we push straight up instead
const COINCIDENT_EPSILON: f32 = 1e-4;

/// Apply gravity to an awake block
#[inline(always)]
pub fn apply_gravity(block: &mut Block, gravity: f32, dt: f32) {
    if block.is_sleeping {
        return;
    }
    block.velocity.y += gravity * dt;
}

/// Velocity change the hand field imparts on a block at `block_pos`.
///
/// Magnitude is `(radius - dist) * hand_force * dt`, directed from the hand
/// to the block; `None` outside the radius.
#[inline]
pub fn hand_repulsion(block_pos: Vector3, hand_pos: Vector3, tuning: &TuningProfile, dt: f32) -> Option<Vector3> {
    let offset = block_pos - hand_pos;
    let dist_sq = offset.length_squared();
    if dist_sq >= tuning.hand_radius_sq() {
        return None;
    }

    let dist = dist_sq.sqrt();
    let dir = if dist > COINCIDENT_EPSILON {
        offset.normalize()
    } else {
        Vector3::UP
    };

    let force = (tuning.hand_radius - dist) * tuning.hand_force;
    Some(dir * (force * dt))
}

/// Push the block away from an active hand. Returns true if it was inside the field.
#[inline]
pub fn apply_hand_force(block: &mut Block, hand: &HandState, tuning: &TuningProfile, dt: f32) -> bool {
    if !hand.active {
        return false;
    }
    match hand_repulsion(block.position, hand.position, tuning, dt) {
        Some(delta) => {
            block.velocity += delta;
            block.wake();
            true
        }
        None => false,
    }
}
