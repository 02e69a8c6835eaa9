use serde::Serialize;

use crate::core::math::Vector3;
use crate::domain::BlockColor;

/// Stable block handle, unique for the lifetime of a world
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct BlockId(pub u32);

/// One simulated cube
#[derive(Clone, Debug)]
pub struct Block {
    pub id: BlockId,
    /// Center of the cube
    pub position: Vector3,
    /// Units per second
    pub velocity: Vector3,
    pub color: BlockColor,
    /// Sleeping blocks skip gravity until a push or the hand wakes them
    pub is_sleeping: bool,
}

impl Block {
    pub fn new(id: BlockId, color: BlockColor, position: Vector3) -> Self {
        Self {
            id,
            position,
            velocity: Vector3::zero(),
            color,
            is_sleeping: false,
        }
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    #[inline]
    pub fn wake(&mut self) {
        self.is_sleeping = false;
    }

    /// Stop the block and exclude it from gravity
    #[inline]
    pub fn sleep(&mut self) {
        self.is_sleeping = true;
        self.velocity = Vector3::zero();
    }
}
