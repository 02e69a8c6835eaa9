use serde::Serialize;

use crate::core::math::Vector3;
use crate::systems::blocks::BlockId;

use super::WorldCore;

/// Floats per block in the transform buffer: position xyz, rotation xyz
pub const TRANSFORM_STRIDE: usize = 6;

#[derive(Clone, Debug, Serialize)]
pub struct BlockView {
    pub id: BlockId,
    pub position: Vector3,
    /// Cosmetic only, derived from velocity
    pub rotation: Vector3,
    pub color: String,
    pub sleeping: bool,
}

#[derive(Clone, Copy, Debug, Serialize, PartialEq)]
pub struct CursorView {
    pub position: Vector3,
    pub active: bool,
}

/// What the presentation layer draws for one frame
#[derive(Clone, Debug, Serialize)]
pub struct WorldSnapshot {
    pub frame: u64,
    pub blocks: Vec<BlockView>,
    pub cursor: CursorView,
}

/// Flat buffers JS reads straight out of linear memory
#[derive(Default)]
pub(crate) struct RenderBuffers {
    pub(crate) transforms: Vec<f32>,
    pub(crate) colors: Vec<u32>,
}

impl RenderBuffers {
    pub(crate) fn clear(&mut self) {
        self.transforms.clear();
        self.colors.clear();
    }
}

pub(super) fn snapshot(world: &WorldCore) -> WorldSnapshot {
    let blocks = world
        .blocks
        .blocks()
        .iter()
        .enumerate()
        .map(|(i, b)| BlockView {
            id: b.id,
            position: b.position,
            rotation: world.spin.rotation(i),
            color: b.color.hex(),
            sleeping: b.is_sleeping,
        })
        .collect();

    WorldSnapshot {
        frame: world.frame,
        blocks,
        cursor: cursor(world),
    }
}

pub(super) fn cursor(world: &WorldCore) -> CursorView {
    CursorView {
        position: world.hand.position,
        active: world.hand.active,
    }
}

pub(super) fn snapshot_json(world: &WorldCore) -> String {
    serde_json::to_string(&snapshot(world)).unwrap_or_else(|_| "{}".to_string())
}

/// Rewrite the flat buffers from the current registry
pub(super) fn refresh_render_buffers(world: &mut WorldCore) {
    let blocks = world.blocks.blocks();
    let render = &mut world.render;
    render.transforms.clear();
    render.colors.clear();
    render.transforms.reserve(blocks.len() * TRANSFORM_STRIDE);
    render.colors.reserve(blocks.len());

    for (i, b) in blocks.iter().enumerate() {
        let r = world.spin.rotation(i);
        render.transforms.extend_from_slice(&[
            b.position.x,
            b.position.y,
            b.position.z,
            r.x,
            r.y,
            r.z,
        ]);
        render.colors.push(b.color.0);
    }
}

pub(super) fn transforms_ptr(world: &WorldCore) -> *const f32 {
    world.render.transforms.as_ptr()
}

pub(super) fn transforms_len(world: &WorldCore) -> usize {
    world.render.transforms.len()
}

pub(super) fn colors_ptr(world: &WorldCore) -> *const u32 {
    world.render.colors.as_ptr()
}

pub(super) fn colors_len(world: &WorldCore) -> usize {
    world.render.colors.len()
}
