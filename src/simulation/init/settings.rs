use crate::domain::{Palette, TuningProfile, WorldResult};

use super::perf_stats::PerfStats;
use super::WorldCore;

pub(super) fn enable_perf_metrics(world: &mut WorldCore, enabled: bool) {
    world.perf_enabled = enabled;
}

pub(super) fn get_perf_stats(world: &WorldCore) -> PerfStats {
    world.perf_stats.clone()
}

/// Swap the tuning profile. Blocks keep their state; the hand is re-parked
/// because its mapping depends on the profile.
pub(super) fn set_tuning(world: &mut WorldCore, tuning: TuningProfile) -> WorldResult<()> {
    tuning.validate()?;
    log::info!("tuning profile: {}", tuning.name);
    world.tuning = tuning;
    world.hand.reset();
    Ok(())
}

pub(super) fn set_palette(world: &mut WorldCore, palette: Palette) {
    log::info!("palette loaded ({} colors)", palette.len());
    world.palette = palette;
}
