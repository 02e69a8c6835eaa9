//! Cosmetic spin - tumbling derived from linear velocity
//!
//! There is no angular dynamics in the integrator. Blocks *look* like they
//! roll because their drawn rotation accumulates from horizontal velocity.
//! Nothing here feeds back into physics.

use crate::core::math::Vector3;
use crate::systems::blocks::{Block, BlockId};

#[derive(Clone, Copy, Debug)]
struct Spin {
    id: BlockId,
    rotation: Vector3,
}

/// Per-block Euler angles (radians) for drawing, parallel to the registry order
#[derive(Default)]
pub struct CosmeticSpin {
    spins: Vec<Spin>,
}

impl CosmeticSpin {
    pub fn new() -> Self {
        Self::default()
    }

    /// Follow the registry and advance each block's drawn rotation.
    pub fn sync(&mut self, blocks: &[Block], dt: f32) {
        // Registry only appends or clears wholesale, so a prefix match is enough.
        let keep = self
            .spins
            .iter()
            .zip(blocks.iter())
            .take_while(|(s, b)| s.id == b.id)
            .count();
        self.spins.truncate(keep);
        for b in &blocks[keep..] {
            self.spins.push(Spin { id: b.id, rotation: Vector3::zero() });
        }

        for (spin, block) in self.spins.iter_mut().zip(blocks.iter()) {
            if block.is_sleeping {
                continue;
            }
            spin.rotation.x += block.velocity.z * dt;
            spin.rotation.z -= block.velocity.x * dt;
        }
    }

    pub fn rotation(&self, index: usize) -> Vector3 {
        self.spins.get(index).map(|s| s.rotation).unwrap_or_default()
    }

    pub fn clear(&mut self) {
        self.spins.clear();
    }

    pub fn len(&self) -> usize {
        self.spins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spins.is_empty()
    }
}
