//! World - block playground state and the controller around it
//!
//! WorldCore owns the block registry and the hand cursor, and is the only
//! thing that mutates them. It delegates:
//! - validation and mutations to commands/
//! - voice tool calls to tools/
//! - discrete gestures to gestures/
//! - the per-frame integrator to systems::physics (via step/)
//! - presentation output to render/
//!
//! FrameLoop wraps a WorldCore with the per-frame ordering: queued
//! mutations, then one step, then the snapshot.

use rand::rngs::SmallRng;

use crate::domain::{GestureKind, Palette, TuningProfile, WorldResult};
use crate::systems::blocks::{Block, BlockId, BlockRegistry, PushMode};
use crate::systems::cosmetic::CosmeticSpin;
use crate::systems::hand::HandState;
use crate::systems::physics::StepReport;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "commands/commands.rs"]
mod commands;
#[path = "tools/tools.rs"]
mod tools;
#[path = "gestures/gestures.rs"]
mod gestures;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "step/step.rs"]
mod step;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "frame_loop/frame_loop.rs"]
mod frame_loop;
mod facade;

pub use commands::{SpawnRequest, WorldCommand};
pub use facade::{RenderLayout, World};
pub use frame_loop::FrameLoop;
pub use perf_stats::PerfStats;
pub use render_extract::{BlockView, CursorView, WorldSnapshot, TRANSFORM_STRIDE};
pub use tools::{parse_tool_call, ToolCall, TOOL_CLEAR_SCENE, TOOL_PUSH_BLOCKS, TOOL_SPAWN_BLOCK};

use perf_timer::PerfTimer;
use render_extract::RenderBuffers;

/// Seed used when nothing better is available (native builds, tests)
pub const DEFAULT_SEED: u64 = 12345;

/// The simulation world
pub struct WorldCore {
    tuning: TuningProfile,
    palette: Palette,
    blocks: BlockRegistry,
    hand: HandState,
    spin: CosmeticSpin,
    rng: SmallRng,

    // State
    frame: u64,
    commands_since_step: u32,
    last_report: StepReport,

    render: RenderBuffers,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: perf_stats::PerfStats,
}

impl WorldCore {
    /// Classic tuning, built-in palette, fixed seed
    pub fn new() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }

    pub fn with_seed(seed: u64) -> Self {
        init::create_world_core(TuningProfile::classic(), Palette::builtin(), seed)
    }

    pub fn with_tuning(tuning: TuningProfile, seed: u64) -> WorldResult<Self> {
        tuning.validate()?;
        Ok(init::create_world_core(tuning, Palette::builtin(), seed))
    }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn block_count(&self) -> usize { self.blocks.len() }

    pub fn blocks(&self) -> &[Block] { self.blocks.blocks() }

    pub fn block(&self, id: BlockId) -> Option<&Block> { self.blocks.get(id) }

    pub fn sleeping_count(&self) -> usize { self.blocks.sleeping_count() }

    pub fn hand(&self) -> &HandState { &self.hand }

    pub fn tuning(&self) -> &TuningProfile { &self.tuning }

    pub fn palette(&self) -> &Palette { &self.palette }

    pub fn last_report(&self) -> StepReport { self.last_report }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    pub fn set_tuning(&mut self, tuning: TuningProfile) -> WorldResult<()> {
        settings::set_tuning(self, tuning)
    }

    pub fn set_palette(&mut self, palette: Palette) {
        settings::set_palette(self, palette);
    }

    // === MUTATIONS ===

    /// Spawn a block. Unknown colors fall back; non-finite or far-out
    /// coordinates are refused and nothing is inserted.
    pub fn spawn_block(&mut self, color: &str, x: f32, y: f32, z: f32) -> WorldResult<BlockId> {
        let request = commands::prepare_spawn(self, color, x, y, z)?;
        let (id, _) = commands::spawn(self, request);
        Ok(id)
    }

    /// Kick every block. Unknown directions explode; intensity above the
    /// profile's `max_push_intensity` is refused. Returns blocks affected.
    pub fn push_blocks(&mut self, direction: &str, intensity: f32) -> WorldResult<usize> {
        let command = commands::prepare_push(self, direction, intensity)?;
        commands::apply(self, command);
        Ok(self.blocks.len())
    }

    /// Typed push for callers that already know the mode
    pub fn push(&mut self, mode: PushMode, intensity: f32) -> WorldResult<usize> {
        let command = commands::prepare_push(self, mode.name(), intensity)?;
        commands::apply(self, command);
        Ok(self.blocks.len())
    }

    /// Remove every block. The hand is untouched.
    pub fn clear(&mut self) {
        commands::clear(self)
    }

    /// Latest tracking sample, normalized camera coordinates
    pub fn update_hand_position(&mut self, norm_x: f32, norm_y: f32, active: bool) {
        self.hand.update(norm_x, norm_y, active, &self.tuning);
    }

    /// Tracking lost: park the cursor and disable the field
    pub fn clear_hand(&mut self) {
        self.hand.reset();
    }

    /// Run a discrete gesture. Returns a status line when the gesture did something.
    pub fn trigger_gesture(&mut self, kind: GestureKind) -> Option<String> {
        let command = gestures::gesture_command(self, kind)?;
        Some(commands::apply(self, command))
    }

    /// Run a voice tool call and report back in one line
    pub fn handle_tool_call(&mut self, name: &str, args_json: &str) -> String {
        let prepared = tools::parse_tool_call(name, args_json)
            .and_then(|call| tools::prepare_tool_call(self, call));
        match prepared {
            Ok(command) => commands::apply(self, command),
            Err(err) => tools::rejected(&err),
        }
    }

    /// Apply an already validated command
    pub fn apply_command(&mut self, command: WorldCommand) -> String {
        commands::apply(self, command)
    }

    // === STEP ===

    /// Advance the world by `dt` seconds (clamped by the profile)
    pub fn step(&mut self, dt: f32) -> StepReport {
        step::step(self, dt)
    }

    // === PRESENTATION ===

    pub fn snapshot(&self) -> WorldSnapshot {
        render_extract::snapshot(self)
    }

    pub fn snapshot_json(&self) -> String {
        render_extract::snapshot_json(self)
    }

    pub fn cursor(&self) -> CursorView {
        render_extract::cursor(self)
    }

    /// Pointer to `[x, y, z, rx, ry, rz]` per block (for JS rendering)
    pub fn transforms_ptr(&self) -> *const f32 {
        render_extract::transforms_ptr(self)
    }

    pub fn transforms_len(&self) -> usize {
        render_extract::transforms_len(self)
    }

    /// Pointer to 0xRRGGBB per block, same order as transforms
    pub fn colors_ptr(&self) -> *const u32 {
        render_extract::colors_ptr(self)
    }

    pub fn colors_len(&self) -> usize {
        render_extract::colors_len(self)
    }
}

impl Default for WorldCore {
    fn default() -> Self {
        Self::new()
    }
}

// Private helpers for the frame loop
impl WorldCore {
    fn prepare_spawn(&self, color: &str, x: f32, y: f32, z: f32) -> WorldResult<WorldCommand> {
        commands::prepare_spawn(self, color, x, y, z).map(WorldCommand::Spawn)
    }

    fn prepare_push(&self, direction: &str, intensity: Option<f32>) -> WorldResult<WorldCommand> {
        commands::prepare_push(self, direction, intensity.unwrap_or(self.tuning.default_push_intensity))
    }

    fn prepare_tool_call(&self, name: &str, args_json: &str) -> WorldResult<WorldCommand> {
        let call = tools::parse_tool_call(name, args_json)?;
        tools::prepare_tool_call(self, call)
    }

    fn prepare_gesture(&mut self, kind: GestureKind) -> Option<WorldCommand> {
        gestures::gesture_command(self, kind)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
