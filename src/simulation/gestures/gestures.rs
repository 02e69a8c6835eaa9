use crate::core::math::Vector3;
use crate::domain::GestureKind;
use crate::systems::blocks::{PushDirection, PushMode};
use crate::systems::hand::HAND_FAR_AWAY;

use super::commands::{SpawnRequest, WorldCommand};
use super::WorldCore;

/// Translate a discrete gesture into a world command.
///
/// - Victory: drop a random-colored block above the cursor
/// - Closed fist: explode
/// - Thumb up: launch everything upward
/// - Thumb down: clear the scene
///
/// Other poses only drive the continuous hand state and map to nothing here.
pub(super) fn gesture_command(world: &mut WorldCore, kind: GestureKind) -> Option<WorldCommand> {
    let intensity = world.tuning.default_push_intensity;
    match kind {
        GestureKind::Victory => {
            let x = if world.hand.position == HAND_FAR_AWAY {
                0.0
            } else {
                world.hand.position.x
            };
            let entry = world.palette.random(&mut world.rng).clone();
            Some(WorldCommand::Spawn(SpawnRequest {
                color_name: entry.key,
                color: entry.color,
                position: Vector3::new(x, world.tuning.gesture_spawn_height, world.tuning.hand_depth),
            }))
        }
        GestureKind::Fist => Some(WorldCommand::Push { mode: PushMode::Explode, intensity }),
        GestureKind::ThumbUp => Some(WorldCommand::Push {
            mode: PushMode::Directional(PushDirection::Up),
            intensity,
        }),
        GestureKind::ThumbDown => Some(WorldCommand::Clear),
        GestureKind::None
        | GestureKind::OpenPalm
        | GestureKind::PointingUp
        | GestureKind::ILoveYou => {
            log::debug!("gesture {} has no action", kind.label());
            None
        }
    }
}
