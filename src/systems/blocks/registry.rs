use rand::Rng;

use crate::core::math::Vector3;
use crate::domain::{BlockColor, TuningProfile};

use super::block::{Block, BlockId};

/// Fixed push directions. Forward points into the scene (-Z).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PushDirection {
    Forward,
    Back,
    Left,
    Right,
    Up,
    Down,
}

impl PushDirection {
    pub fn unit(&self) -> Vector3 {
        match self {
            PushDirection::Forward => Vector3::new(0.0, 0.0, -1.0),
            PushDirection::Back => Vector3::new(0.0, 0.0, 1.0),
            PushDirection::Left => Vector3::new(-1.0, 0.0, 0.0),
            PushDirection::Right => Vector3::new(1.0, 0.0, 0.0),
            PushDirection::Up => Vector3::new(0.0, 1.0, 0.0),
            PushDirection::Down => Vector3::new(0.0, -1.0, 0.0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PushMode {
    Explode,
    Directional(PushDirection),
}

impl PushMode {
    /// Parse the direction word the assistant sends
    pub fn parse(direction: &str) -> Option<Self> {
        let mode = match direction.trim().to_ascii_lowercase().as_str() {
            "explode" | "explosion" | "scatter" | "all" => PushMode::Explode,
            "forward" | "away" | "forwards" => PushMode::Directional(PushDirection::Forward),
            "back" | "backward" | "backwards" | "toward" | "towards" => {
                PushMode::Directional(PushDirection::Back)
            }
            "left" => PushMode::Directional(PushDirection::Left),
            "right" => PushMode::Directional(PushDirection::Right),
            "up" | "upward" | "upwards" => PushMode::Directional(PushDirection::Up),
            "down" | "downward" | "downwards" => PushMode::Directional(PushDirection::Down),
            _ => return None,
        };
        Some(mode)
    }

    pub fn name(&self) -> &'static str {
        match self {
            PushMode::Explode => "explode",
            PushMode::Directional(PushDirection::Forward) => "forward",
            PushMode::Directional(PushDirection::Back) => "back",
            PushMode::Directional(PushDirection::Left) => "left",
            PushMode::Directional(PushDirection::Right) => "right",
            PushMode::Directional(PushDirection::Up) => "up",
            PushMode::Directional(PushDirection::Down) => "down",
        }
    }
}

/// Insertion-ordered block storage. Blocks are only ever removed all at once.
pub struct BlockRegistry {
    blocks: Vec<Block>,
    next_id: u32,
}

impl BlockRegistry {
    pub fn new() -> Self {
        Self {
            blocks: Vec::new(),
            next_id: 1,
        }
    }

    /// Append a block at rest. Coordinates are taken as given.
    pub fn spawn(&mut self, color: BlockColor, x: f32, y: f32, z: f32) -> BlockId {
        let id = BlockId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1).max(1);
        self.blocks.push(Block::new(id, color, Vector3::new(x, y, z)));
        id
    }

    /// Remove every block. Ids are not reused afterwards.
    pub fn clear(&mut self) {
        self.blocks.clear();
    }

    /// Add a velocity kick to every block and wake it. Returns blocks affected.
    pub fn apply_impulse<R: Rng + ?Sized>(
        &mut self,
        mode: PushMode,
        intensity: f32,
        tuning: &TuningProfile,
        rng: &mut R,
    ) -> usize {
        match mode {
            PushMode::Explode => {
                let jitter = tuning.explode_jitter.abs();
                let lift = intensity * tuning.explode_lift + tuning.explode_boost;
                for block in self.blocks.iter_mut() {
                    let jx = rng.gen_range(-jitter..=jitter);
                    let jz = rng.gen_range(-jitter..=jitter);
                    block.velocity += Vector3::new(jx * intensity, lift, jz * intensity);
                    block.wake();
                }
            }
            PushMode::Directional(direction) => {
                let kick = direction.unit() * intensity + Vector3::new(0.0, tuning.directional_lift, 0.0);
                for block in self.blocks.iter_mut() {
                    block.velocity += kick;
                    block.wake();
                }
            }
        }
        self.blocks.len()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn blocks_mut(&mut self) -> &mut [Block] {
        &mut self.blocks
    }

    pub fn get(&self, id: BlockId) -> Option<&Block> {
        self.blocks.iter().find(|b| b.id == id)
    }

    pub fn sleeping_count(&self) -> usize {
        self.blocks.iter().filter(|b| b.is_sleeping).count()
    }
}

impl Default for BlockRegistry {
    fn default() -> Self {
        Self::new()
    }
}
