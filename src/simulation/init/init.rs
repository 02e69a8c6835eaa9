use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::domain::{Palette, TuningProfile};
use crate::systems::blocks::BlockRegistry;
use crate::systems::cosmetic::CosmeticSpin;
use crate::systems::hand::HandState;
use crate::systems::physics::StepReport;

use super::perf_stats::PerfStats;
use super::render_extract::RenderBuffers;
use super::WorldCore;

pub(super) fn create_world_core(tuning: TuningProfile, palette: Palette, seed: u64) -> WorldCore {
    log::info!("world created (profile={}, seed={})", tuning.name, seed);
    WorldCore {
        tuning,
        palette,
        blocks: BlockRegistry::new(),
        hand: HandState::new(),
        spin: CosmeticSpin::new(),
        rng: SmallRng::seed_from_u64(seed),
        frame: 0,
        commands_since_step: 0,
        last_report: StepReport::default(),

        render: RenderBuffers::default(),
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}

/// Seed for a fresh world. Deterministic off-browser so native runs repeat.
pub(super) fn clock_seed() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now() as u64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        super::DEFAULT_SEED
    }
}
