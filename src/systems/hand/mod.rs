//! Hand cursor - tracked hand mapped into simulation space
//!
//! Input arrives as normalized camera coordinates (0..1, origin top-left,
//! un-mirrored camera frame). The mapping mirrors X so that moving the hand
//! to the right on the (mirrored) preview moves the cursor right in 3D.

use crate::core::math::Vector3;
use crate::domain::TuningProfile;

/// Parking spot for an untracked hand, well outside any force radius
pub const HAND_FAR_AWAY: Vector3 = Vector3::new(0.0, -1000.0, 0.0);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandState {
    pub position: Vector3,
    /// Open/engaged pose: gates the repulsion field
    pub active: bool,
}

impl Default for HandState {
    fn default() -> Self {
        Self {
            position: HAND_FAR_AWAY,
            active: false,
        }
    }
}

impl HandState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite from one tracking sample. Non-finite samples count as lost tracking.
    pub fn update(&mut self, norm_x: f32, norm_y: f32, active: bool, tuning: &TuningProfile) {
        if !norm_x.is_finite() || !norm_y.is_finite() {
            log::warn!("dropping non-finite hand sample ({}, {})", norm_x, norm_y);
            self.reset();
            return;
        }
        self.position = map_normalized(norm_x, norm_y, tuning);
        self.active = active;
    }

    /// Tracking lost
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Normalized camera coordinates to world space at the hand depth plane
#[inline]
pub fn map_normalized(norm_x: f32, norm_y: f32, tuning: &TuningProfile) -> Vector3 {
    Vector3::new(
        (1.0 - norm_x - 0.5) * tuning.hand_span_x,
        (1.0 - norm_y) * tuning.hand_span_y,
        tuning.hand_depth,
    )
}
