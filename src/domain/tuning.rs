//! Tuning profiles for the block integrator.
//!
//! Two variants exist: `classic` (blocks pass through each other, only the
//! floor collides) and `stacking` (heuristic block-on-block resolution with
//! its own force field constants). A world runs one profile at a time.

use serde::{Deserialize, Serialize};

use super::error::{WorldError, WorldResult};

pub const PROFILE_CLASSIC: &str = "classic";
pub const PROFILE_STACKING: &str = "stacking";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TuningProfile {
    pub name: String,

    // === Integrator ===
    /// Vertical acceleration (negative = down)
    pub gravity: f32,
    /// Edge length of a block; the floor keeps centers at `block_size / 2`
    pub block_size: f32,
    /// Upper bound for a single step's dt (seconds)
    pub max_dt: f32,

    // === Hand force field ===
    pub hand_radius: f32,
    pub hand_force: f32,

    // === Contact ===
    /// Vertical bounce factor on floor contact (0..1)
    pub restitution: f32,
    /// Horizontal velocity kept per floor contact (0..1)
    pub friction: f32,
    /// Below this speed a floor-resting block goes to sleep
    pub sleep_threshold: f32,
    pub block_collisions: bool,
    /// Share of the upper block's horizontal velocity handed to the lower one
    pub momentum_transfer: f32,

    // === Pushes ===
    /// Half-width of the uniform horizontal jitter, per unit intensity
    pub explode_jitter: f32,
    /// Upward kick per unit intensity
    pub explode_lift: f32,
    /// Fixed upward kick added to every explode
    pub explode_boost: f32,
    /// Fixed upward kick added to every directional push
    pub directional_lift: f32,
    pub default_push_intensity: f32,
    /// Largest intensity a single push may carry
    pub max_push_intensity: f32,

    // === Hand mapping ===
    pub hand_span_x: f32,
    pub hand_span_y: f32,
    pub hand_depth: f32,

    // === Input limits ===
    /// Spawn coordinates beyond +/- this are rejected
    pub coordinate_limit: f32,
    /// Height used when a gesture spawns a block above the cursor
    pub gesture_spawn_height: f32,
}

impl Default for TuningProfile {
    fn default() -> Self {
        Self::classic()
    }
}

impl TuningProfile {
    pub fn classic() -> Self {
        Self {
            name: PROFILE_CLASSIC.to_string(),
            gravity: -9.8,
            block_size: 1.0,
            max_dt: 0.1,
            hand_radius: 3.0,
            hand_force: 15.0,
            restitution: 0.5,
            friction: 0.95,
            sleep_threshold: 0.5,
            block_collisions: false,
            momentum_transfer: 0.0,
            explode_jitter: 0.5,
            explode_lift: 0.5,
            explode_boost: 5.0,
            directional_lift: 2.0,
            default_push_intensity: 10.0,
            max_push_intensity: 100.0,
            hand_span_x: 20.0,
            hand_span_y: 12.0,
            hand_depth: 0.0,
            coordinate_limit: 1000.0,
            gesture_spawn_height: 8.0,
        }
    }

    pub fn stacking() -> Self {
        Self {
            name: PROFILE_STACKING.to_string(),
            hand_radius: 4.0,
            hand_force: 25.0,
            restitution: 0.3,
            friction: 0.9,
            block_collisions: true,
            momentum_transfer: 0.3,
            ..Self::classic()
        }
    }

    pub fn by_name(name: &str) -> WorldResult<Self> {
        match name {
            PROFILE_CLASSIC => Ok(Self::classic()),
            PROFILE_STACKING => Ok(Self::stacking()),
            other => Err(WorldError::UnknownProfile(other.to_string())),
        }
    }

    /// Parse a profile from JSON. Missing fields fall back to `classic`.
    pub fn from_json(json: &str) -> WorldResult<Self> {
        let profile: TuningProfile =
            serde_json::from_str(json).map_err(|e| WorldError::InvalidTuning(e.to_string()))?;
        profile.validate()?;
        Ok(profile)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    #[inline]
    pub fn half_size(&self) -> f32 {
        self.block_size * 0.5
    }

    #[inline]
    pub fn hand_radius_sq(&self) -> f32 {
        self.hand_radius * self.hand_radius
    }

    pub fn validate(&self) -> WorldResult<()> {
        let fields = [
            ("gravity", self.gravity),
            ("block_size", self.block_size),
            ("max_dt", self.max_dt),
            ("hand_radius", self.hand_radius),
            ("hand_force", self.hand_force),
            ("restitution", self.restitution),
            ("friction", self.friction),
            ("sleep_threshold", self.sleep_threshold),
            ("momentum_transfer", self.momentum_transfer),
            ("explode_jitter", self.explode_jitter),
            ("explode_lift", self.explode_lift),
            ("explode_boost", self.explode_boost),
            ("directional_lift", self.directional_lift),
            ("default_push_intensity", self.default_push_intensity),
            ("max_push_intensity", self.max_push_intensity),
            ("hand_span_x", self.hand_span_x),
            ("hand_span_y", self.hand_span_y),
            ("hand_depth", self.hand_depth),
            ("coordinate_limit", self.coordinate_limit),
            ("gesture_spawn_height", self.gesture_spawn_height),
        ];
        if let Some((field, value)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(WorldError::InvalidTuning(format!("{} is not finite ({})", field, value)));
        }

        if self.block_size <= 0.0 {
            return Err(WorldError::InvalidTuning("block_size must be positive".into()));
        }
        if self.max_dt <= 0.0 {
            return Err(WorldError::InvalidTuning("max_dt must be positive".into()));
        }
        if self.hand_radius < 0.0 || self.hand_force < 0.0 {
            return Err(WorldError::InvalidTuning("hand field must be non-negative".into()));
        }
        for (field, value) in [
            ("restitution", self.restitution),
            ("friction", self.friction),
            ("momentum_transfer", self.momentum_transfer),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(WorldError::InvalidTuning(format!("{} must be within 0..1 ({})", field, value)));
            }
        }
        if self.max_push_intensity <= 0.0 {
            return Err(WorldError::InvalidTuning("max_push_intensity must be positive".into()));
        }
        if !(0.0..=self.max_push_intensity).contains(&self.default_push_intensity) {
            return Err(WorldError::InvalidTuning(format!(
                "default_push_intensity must be within 0..{} ({})",
                self.max_push_intensity, self.default_push_intensity
            )));
        }
        if self.coordinate_limit <= 0.0 {
            return Err(WorldError::InvalidTuning("coordinate_limit must be positive".into()));
        }
        Ok(())
    }
}
