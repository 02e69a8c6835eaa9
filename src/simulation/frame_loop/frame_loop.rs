use std::collections::VecDeque;

use crate::domain::GestureKind;
use crate::systems::physics::StepReport;

use super::commands::WorldCommand;
use super::tools::rejected;
use super::WorldCore;

/// Drives a WorldCore once per display frame.
///
/// Hand samples, tool calls and gestures can arrive at any time from the
/// tracking and voice callbacks. They are validated immediately (so the
/// caller gets an answer) and queued; `tick` applies the whole queue before
/// stepping, so a step never sees half a mutation.
pub struct FrameLoop {
    world: WorldCore,
    pending: VecDeque<WorldCommand>,
    running: bool,
    last_tick_ms: Option<f64>,
}

impl FrameLoop {
    pub fn new(world: WorldCore) -> Self {
        Self {
            world,
            pending: VecDeque::new(),
            running: false,
            last_tick_ms: None,
        }
    }

    pub fn world(&self) -> &WorldCore {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut WorldCore {
        &mut self.world
    }

    pub fn start(&mut self) {
        if !self.running {
            log::info!("frame loop started");
        }
        self.running = true;
    }

    /// Stop stepping. Queued commands stay queued until the next tick.
    pub fn stop(&mut self) {
        if self.running {
            log::info!("frame loop stopped at frame {}", self.world.frame());
        }
        self.running = false;
        self.last_tick_ms = None;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn enqueue(&mut self, command: WorldCommand) {
        self.pending.push_back(command);
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    pub fn submit_spawn(&mut self, color: &str, x: f32, y: f32, z: f32) -> String {
        match self.world.prepare_spawn(color, x, y, z) {
            Ok(command) => self.accept(command),
            Err(err) => rejected(&err),
        }
    }

    pub fn submit_push(&mut self, direction: &str, intensity: Option<f32>) -> String {
        match self.world.prepare_push(direction, intensity) {
            Ok(command) => self.accept(command),
            Err(err) => rejected(&err),
        }
    }

    pub fn submit_clear(&mut self) -> String {
        self.accept(WorldCommand::Clear)
    }

    pub fn submit_tool_call(&mut self, name: &str, args_json: &str) -> String {
        match self.world.prepare_tool_call(name, args_json) {
            Ok(command) => self.accept(command),
            Err(err) => rejected(&err),
        }
    }

    /// Returns None when the gesture maps to no action
    pub fn submit_gesture(&mut self, kind: GestureKind) -> Option<String> {
        let command = self.world.prepare_gesture(kind)?;
        Some(self.accept(command))
    }

    pub fn submit_hand(&mut self, norm_x: f32, norm_y: f32, active: bool) {
        self.pending.push_back(WorldCommand::Hand { norm_x, norm_y, active });
    }

    pub fn submit_hand_lost(&mut self) {
        self.pending.push_back(WorldCommand::HandLost);
    }

    fn accept(&mut self, command: WorldCommand) -> String {
        let status = command.describe();
        self.pending.push_back(command);
        status
    }

    /// Apply everything queued, in arrival order
    pub fn flush(&mut self) -> usize {
        let mut applied = 0;
        while let Some(command) = self.pending.pop_front() {
            self.world.apply_command(command);
            applied += 1;
        }
        applied
    }

    /// One display frame at timestamp `now_ms`. Returns false when stopped.
    ///
    /// The first tick after `start` steps with dt = 0; later ticks use the
    /// timestamp delta, which the world clamps to its max step.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        if !self.running {
            return false;
        }
        let dt = match self.last_tick_ms {
            Some(prev) if now_ms.is_finite() && now_ms >= prev => ((now_ms - prev) / 1000.0) as f32,
            _ => 0.0,
        };
        if now_ms.is_finite() {
            self.last_tick_ms = Some(now_ms);
        }
        self.step_now(dt);
        true
    }

    /// Flush and step regardless of the running flag
    pub fn step_now(&mut self, dt: f32) -> StepReport {
        self.flush();
        self.world.step(dt)
    }
}
