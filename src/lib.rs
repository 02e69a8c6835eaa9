//! Handblocks Engine - hand and voice driven block playground in WASM
//!
//! Architecture:
//! - core/          - Math primitives
//! - domain/        - Tuning, palette, gestures, errors
//! - systems/       - Blocks, hand cursor, physics integrator
//! - simulation/    - World state, commands, frame loop, JS facade

pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;

pub use systems::blocks;
pub use systems::hand;
pub use systems::physics;

use wasm_bindgen::prelude::*;

// Re-export wasm-bindgen-rayon for thread pool initialization
#[cfg(feature = "parallel")]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    // A second init() keeps the first logger.
    #[cfg(target_arch = "wasm32")]
    let _ = console_log::init_with_level(log::Level::Info);

    log::info!("Handblocks engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::math::Vector3;
pub use domain::{BlockColor, GestureKind, Palette, TuningProfile, WorldError, WorldResult};
pub use simulation::{
    parse_tool_call, FrameLoop, PerfStats, ToolCall, World, WorldCommand, WorldCore, WorldSnapshot,
};
pub use systems::blocks::{Block, BlockId, PushDirection, PushMode};
pub use systems::physics::StepReport;
