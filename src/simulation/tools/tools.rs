//! Tool calls from the voice session.
//!
//! The session sends a function name plus JSON arguments. Each maps onto one
//! world mutation and gets a short status line back.

use serde::Deserialize;

use crate::domain::{WorldError, WorldResult};

use super::commands::{prepare_push, prepare_spawn, WorldCommand};
use super::WorldCore;

pub const TOOL_SPAWN_BLOCK: &str = "spawn_block";
pub const TOOL_PUSH_BLOCKS: &str = "push_blocks";
pub const TOOL_CLEAR_SCENE: &str = "clear_scene";

const DEFAULT_SPAWN_X: f32 = 0.0;
const DEFAULT_SPAWN_Y: f32 = 5.0;
const DEFAULT_SPAWN_Z: f32 = 0.0;

#[derive(Debug, Default, Deserialize)]
struct SpawnArgs {
    #[serde(default)]
    color: Option<String>,
    #[serde(default)]
    x: Option<f32>,
    #[serde(default)]
    y: Option<f32>,
    #[serde(default)]
    z: Option<f32>,
}

#[derive(Debug, Default, Deserialize)]
struct PushArgs {
    #[serde(default)]
    direction: Option<String>,
    #[serde(default)]
    intensity: Option<f32>,
}

/// A decoded tool invocation
#[derive(Clone, Debug, PartialEq)]
pub enum ToolCall {
    SpawnBlock { color: String, x: f32, y: f32, z: f32 },
    PushBlocks { direction: String, intensity: Option<f32> },
    ClearScene,
}

fn parse_args<'a, T: Deserialize<'a> + Default>(tool: &str, args_json: &'a str) -> WorldResult<T> {
    if args_json.trim().is_empty() {
        return Ok(T::default());
    }
    serde_json::from_str(args_json).map_err(|e| WorldError::MalformedArguments {
        tool: tool.to_string(),
        reason: e.to_string(),
    })
}

pub fn parse_tool_call(name: &str, args_json: &str) -> WorldResult<ToolCall> {
    match name.trim() {
        TOOL_SPAWN_BLOCK => {
            let args: SpawnArgs = parse_args(TOOL_SPAWN_BLOCK, args_json)?;
            Ok(ToolCall::SpawnBlock {
                color: args.color.unwrap_or_default(),
                x: args.x.unwrap_or(DEFAULT_SPAWN_X),
                y: args.y.unwrap_or(DEFAULT_SPAWN_Y),
                z: args.z.unwrap_or(DEFAULT_SPAWN_Z),
            })
        }
        TOOL_PUSH_BLOCKS => {
            let args: PushArgs = parse_args(TOOL_PUSH_BLOCKS, args_json)?;
            Ok(ToolCall::PushBlocks {
                direction: args.direction.unwrap_or_else(|| "explode".to_string()),
                intensity: args.intensity,
            })
        }
        TOOL_CLEAR_SCENE => Ok(ToolCall::ClearScene),
        other => Err(WorldError::UnknownTool(other.to_string())),
    }
}

/// Validate a tool call against the world's palette and limits
pub(super) fn prepare_tool_call(world: &WorldCore, call: ToolCall) -> WorldResult<WorldCommand> {
    match call {
        ToolCall::SpawnBlock { color, x, y, z } => prepare_spawn(world, &color, x, y, z).map(WorldCommand::Spawn),
        ToolCall::PushBlocks { direction, intensity } => {
            let intensity = intensity.unwrap_or(world.tuning.default_push_intensity);
            prepare_push(world, &direction, intensity)
        }
        ToolCall::ClearScene => Ok(WorldCommand::Clear),
    }
}

pub(super) fn rejected(err: &WorldError) -> String {
    log::warn!("rejected: {}", err);
    format!("Rejected: {}", err)
}
