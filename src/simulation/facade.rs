use wasm_bindgen::prelude::*;

use crate::domain::{GestureKind, Palette, TuningProfile, WorldError};

use super::frame_loop::FrameLoop;
use super::perf_stats::PerfStats;
use super::init::clock_seed;
use super::render_extract::TRANSFORM_STRIDE;
use super::WorldCore;

/// Where the render buffers live in linear memory after the last step
#[wasm_bindgen]
pub struct RenderLayout {
    transforms_ptr: u32,
    transforms_len_elements: u32,
    transforms_len_bytes: u32,
    colors_ptr: u32,
    colors_len_elements: u32,
    colors_len_bytes: u32,
    stride: u32,
}

#[wasm_bindgen]
impl RenderLayout {
    #[wasm_bindgen(getter)]
    pub fn transforms_ptr(&self) -> u32 { self.transforms_ptr }
    #[wasm_bindgen(getter)]
    pub fn transforms_len_elements(&self) -> u32 { self.transforms_len_elements }
    #[wasm_bindgen(getter)]
    pub fn transforms_len_bytes(&self) -> u32 { self.transforms_len_bytes }

    #[wasm_bindgen(getter)]
    pub fn colors_ptr(&self) -> u32 { self.colors_ptr }
    #[wasm_bindgen(getter)]
    pub fn colors_len_elements(&self) -> u32 { self.colors_len_elements }
    #[wasm_bindgen(getter)]
    pub fn colors_len_bytes(&self) -> u32 { self.colors_len_bytes }

    #[wasm_bindgen(getter)]
    pub fn stride(&self) -> u32 { self.stride }
}

fn to_js(err: WorldError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen]
pub struct World {
    frames: FrameLoop,
}

#[wasm_bindgen]
impl World {
    /// Create a world with the classic profile, seeded from the clock
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::from_core(WorldCore::with_seed(clock_seed()))
    }

    #[wasm_bindgen(js_name = newWithSeed)]
    pub fn new_with_seed(seed: u64) -> Self {
        Self::from_core(WorldCore::with_seed(seed))
    }

    /// Create a world with a named built-in profile ("classic" or "stacking")
    #[wasm_bindgen(js_name = withProfile)]
    pub fn with_profile(name: &str) -> Result<World, JsValue> {
        let tuning = TuningProfile::by_name(name).map_err(to_js)?;
        let core = WorldCore::with_tuning(tuning, clock_seed()).map_err(to_js)?;
        Ok(Self::from_core(core))
    }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.frames.world().frame() }

    #[wasm_bindgen(getter)]
    pub fn block_count(&self) -> u32 { self.frames.world().block_count() as u32 }

    #[wasm_bindgen(getter)]
    pub fn sleeping_count(&self) -> u32 { self.frames.world().sleeping_count() as u32 }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool { self.frames.is_running() }

    // === FRAME LOOP ===

    pub fn start(&mut self) {
        self.frames.start();
    }

    pub fn stop(&mut self) {
        self.frames.stop();
    }

    /// Call from requestAnimationFrame with its timestamp.
    /// Returns false (and does nothing) while stopped.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        self.frames.tick(now_ms)
    }

    /// Apply queued commands and step once with an explicit dt
    pub fn step(&mut self, dt: f32) {
        self.frames.step_now(dt);
    }

    // === COMMANDS ===
    // Queued; they take effect at the start of the next frame.

    pub fn spawn_block(&mut self, color: &str, x: f32, y: f32, z: f32) -> String {
        self.frames.submit_spawn(color, x, y, z)
    }

    pub fn push_blocks(&mut self, direction: &str, intensity: f32) -> String {
        self.frames.submit_push(direction, Some(intensity))
    }

    pub fn clear_scene(&mut self) -> String {
        self.frames.submit_clear()
    }

    /// Voice tool call: function name plus its JSON arguments
    pub fn handle_tool_call(&mut self, name: &str, args_json: &str) -> String {
        self.frames.submit_tool_call(name, args_json)
    }

    /// Latest hand sample in normalized camera coordinates
    pub fn update_hand_position(&mut self, norm_x: f32, norm_y: f32, active: bool) {
        self.frames.submit_hand(norm_x, norm_y, active);
    }

    pub fn hand_lost(&mut self) {
        self.frames.submit_hand_lost();
    }

    /// Recognizer label such as "Closed_Fist". Returns undefined when the
    /// gesture has no action.
    pub fn trigger_gesture(&mut self, label: &str) -> Option<String> {
        self.frames.submit_gesture(GestureKind::from_label(label))
    }

    // === CURSOR ===

    #[wasm_bindgen(getter)]
    pub fn cursor_x(&self) -> f32 { self.frames.world().hand().position.x }

    #[wasm_bindgen(getter)]
    pub fn cursor_y(&self) -> f32 { self.frames.world().hand().position.y }

    #[wasm_bindgen(getter)]
    pub fn cursor_z(&self) -> f32 { self.frames.world().hand().position.z }

    #[wasm_bindgen(getter)]
    pub fn cursor_active(&self) -> bool { self.frames.world().hand().active }

    // === RENDER ===

    /// Blocks plus cursor as JSON
    pub fn snapshot_json(&self) -> String {
        self.frames.world().snapshot_json()
    }

    pub fn transforms_ptr(&self) -> *const f32 {
        self.frames.world().transforms_ptr()
    }

    pub fn transforms_len(&self) -> usize {
        self.frames.world().transforms_len()
    }

    pub fn colors_ptr(&self) -> *const u32 {
        self.frames.world().colors_ptr()
    }

    pub fn colors_len(&self) -> usize {
        self.frames.world().colors_len()
    }

    pub fn render_layout(&self) -> RenderLayout {
        let core = self.frames.world();
        RenderLayout {
            transforms_ptr: core.transforms_ptr() as u32,
            transforms_len_elements: core.transforms_len() as u32,
            transforms_len_bytes: (core.transforms_len() * std::mem::size_of::<f32>()) as u32,
            colors_ptr: core.colors_ptr() as u32,
            colors_len_elements: core.colors_len() as u32,
            colors_len_bytes: (core.colors_len() * std::mem::size_of::<u32>()) as u32,
            stride: TRANSFORM_STRIDE as u32,
        }
    }

    // === CONFIG ===

    pub fn set_tuning_profile(&mut self, name: &str) -> Result<(), JsValue> {
        let tuning = TuningProfile::by_name(name).map_err(to_js)?;
        self.frames.world_mut().set_tuning(tuning).map_err(to_js)
    }

    pub fn load_tuning_json(&mut self, json: String) -> Result<(), JsValue> {
        let tuning = TuningProfile::from_json(&json).map_err(to_js)?;
        self.frames.world_mut().set_tuning(tuning).map_err(to_js)
    }

    pub fn tuning_json(&self) -> String {
        self.frames.world().tuning().to_json()
    }

    pub fn load_palette_json(&mut self, json: String) -> Result<(), JsValue> {
        let palette = Palette::from_json(&json).map_err(to_js)?;
        self.frames.world_mut().set_palette(palette);
        Ok(())
    }

    pub fn palette_manifest_json(&self) -> String {
        self.frames.world().palette().manifest_json()
    }

    // === PERF ===

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.frames.world_mut().enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.frames.world().get_perf_stats()
    }
}

impl World {
    fn from_core(core: WorldCore) -> Self {
        Self { frames: FrameLoop::new(core) }
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
