use wasm_bindgen::prelude::*;

#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) physics_ms: f64,
    pub(super) extract_ms: f64,
    pub(super) dt: f32,
    pub(super) block_count: u32,
    pub(super) sleeping_blocks: u32,
    pub(super) hand_touched: u32,
    pub(super) floor_contacts: u32,
    pub(super) fell_asleep: u32,
    pub(super) pair_checks: u32,
    pub(super) block_contacts: u32,
    pub(super) commands_applied: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn physics_ms(&self) -> f64 { self.physics_ms }
    #[wasm_bindgen(getter)]
    pub fn extract_ms(&self) -> f64 { self.extract_ms }
    #[wasm_bindgen(getter)]
    pub fn dt(&self) -> f32 { self.dt }
    #[wasm_bindgen(getter)]
    pub fn block_count(&self) -> u32 { self.block_count }
    #[wasm_bindgen(getter)]
    pub fn sleeping_blocks(&self) -> u32 { self.sleeping_blocks }
    #[wasm_bindgen(getter)]
    pub fn hand_touched(&self) -> u32 { self.hand_touched }
    #[wasm_bindgen(getter)]
    pub fn floor_contacts(&self) -> u32 { self.floor_contacts }
    #[wasm_bindgen(getter)]
    pub fn fell_asleep(&self) -> u32 { self.fell_asleep }
    #[wasm_bindgen(getter)]
    pub fn pair_checks(&self) -> u32 { self.pair_checks }
    #[wasm_bindgen(getter)]
    pub fn block_contacts(&self) -> u32 { self.block_contacts }
    #[wasm_bindgen(getter)]
    pub fn commands_applied(&self) -> u32 { self.commands_applied }
}
