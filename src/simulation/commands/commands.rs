use crate::core::math::Vector3;
use crate::domain::{BlockColor, WorldError, WorldResult};
use crate::systems::blocks::{BlockId, PushMode};

use super::WorldCore;

/// A checked spawn: color resolved against the palette, position in range
#[derive(Clone, Debug, PartialEq)]
pub struct SpawnRequest {
    pub color_name: String,
    pub color: BlockColor,
    pub position: Vector3,
}

/// A validated mutation, ready to apply at the start of a frame
#[derive(Clone, Debug, PartialEq)]
pub enum WorldCommand {
    Spawn(SpawnRequest),
    Push {
        mode: PushMode,
        intensity: f32,
    },
    Clear,
    Hand {
        norm_x: f32,
        norm_y: f32,
        active: bool,
    },
    HandLost,
}

impl WorldCommand {
    /// Short acknowledgement for the caller that issued the command
    pub fn describe(&self) -> String {
        match self {
            WorldCommand::Spawn(SpawnRequest { color_name, position, .. }) => format!(
                "Spawned {} block at ({:.1}, {:.1}, {:.1})",
                color_name, position.x, position.y, position.z
            ),
            WorldCommand::Push { mode, intensity } => {
                format!("Pushed blocks {} with intensity {:.1}", mode.name(), intensity)
            }
            WorldCommand::Clear => "Scene cleared".to_string(),
            WorldCommand::Hand { active, .. } => {
                format!("Hand {}", if *active { "active" } else { "idle" })
            }
            WorldCommand::HandLost => "Hand lost".to_string(),
        }
    }
}

fn check_coordinate(axis: char, value: f32, limit: f32) -> WorldResult<f32> {
    if !value.is_finite() {
        return Err(WorldError::NonFiniteCoordinate { axis, value });
    }
    if value.abs() > limit {
        return Err(WorldError::CoordinateOutOfRange { axis, value, limit });
    }
    Ok(value)
}

pub(super) fn prepare_spawn(world: &WorldCore, color: &str, x: f32, y: f32, z: f32) -> WorldResult<SpawnRequest> {
    let limit = world.tuning.coordinate_limit;
    let position = Vector3::new(
        check_coordinate('x', x, limit)?,
        check_coordinate('y', y, limit)?,
        check_coordinate('z', z, limit)?,
    );

    let resolved = world.palette.resolve(color);
    let color_name = match world.palette.get(color) {
        Some(_) => color.trim().to_ascii_lowercase(),
        None if BlockColor::parse_hex(color.trim()).is_some() => resolved.hex(),
        None => world.palette.fallback().key.clone(),
    };

    Ok(SpawnRequest { color_name, color: resolved, position })
}

/// Intensity must be finite, non-negative and within the profile's cap, so a
/// single push can never carry a block's velocity out of f32 range.
pub(super) fn prepare_push(world: &WorldCore, direction: &str, intensity: f32) -> WorldResult<WorldCommand> {
    if !intensity.is_finite() || intensity < 0.0 {
        return Err(WorldError::InvalidIntensity(intensity));
    }
    let limit = world.tuning.max_push_intensity;
    if intensity > limit {
        return Err(WorldError::IntensityOutOfRange { value: intensity, limit });
    }
    let mode = PushMode::parse(direction).unwrap_or_else(|| {
        log::warn!("unknown push direction {:?}, exploding instead", direction);
        PushMode::Explode
    });
    Ok(WorldCommand::Push { mode, intensity })
}

fn note_applied(world: &mut WorldCore) {
    world.commands_since_step = world.commands_since_step.saturating_add(1);
}

/// Insert the block. Returns its id and the status line.
pub(super) fn spawn(world: &mut WorldCore, request: SpawnRequest) -> (BlockId, String) {
    note_applied(world);
    let SpawnRequest { color_name, color, position } = request;
    let id = world.blocks.spawn(color, position.x, position.y, position.z);
    log::debug!("spawn {:?} {} at {:?}", id, color_name, position);
    let status = format!(
        "Spawned {} block #{} at ({:.1}, {:.1}, {:.1})",
        color_name, id.0, position.x, position.y, position.z
    );
    (id, status)
}

/// Apply a validated command. Returns the status line for it.
pub(super) fn apply(world: &mut WorldCore, command: WorldCommand) -> String {
    match command {
        WorldCommand::Spawn(request) => spawn(world, request).1,
        WorldCommand::Push { mode, intensity } => {
            note_applied(world);
            let affected = world
                .blocks
                .apply_impulse(mode, intensity, &world.tuning, &mut world.rng);
            log::debug!("push {} x{} -> {} blocks", mode.name(), intensity, affected);
            format!("Pushed {} blocks {} with intensity {:.1}", affected, mode.name(), intensity)
        }
        WorldCommand::Clear => {
            note_applied(world);
            clear(world);
            "Scene cleared".to_string()
        }
        WorldCommand::Hand { norm_x, norm_y, active } => {
            note_applied(world);
            world.hand.update(norm_x, norm_y, active, &world.tuning);
            format!("Hand {}", if active { "active" } else { "idle" })
        }
        WorldCommand::HandLost => {
            note_applied(world);
            world.hand.reset();
            "Hand lost".to_string()
        }
    }
}

pub(super) fn clear(world: &mut WorldCore) {
    let removed = world.blocks.len();
    world.blocks.clear();
    world.spin.clear();
    world.render.clear();
    log::debug!("cleared {} blocks", removed);
}
