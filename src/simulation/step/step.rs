use crate::systems::physics::{step_blocks, StepReport};

use super::render_extract::refresh_render_buffers;
use super::{PerfTimer, WorldCore};

/// One physics step followed by the render extract.
///
/// Mutations must already be applied; the snapshot taken afterwards sees
/// the whole step or none of it.
pub(super) fn step(world: &mut WorldCore, dt: f32) -> StepReport {
    let perf_on = world.perf_enabled;
    if perf_on {
        world.perf_stats.reset();
    }
    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };

    let report = if perf_on {
        let t0 = PerfTimer::start();
        let r = step_blocks(world.blocks.blocks_mut(), &world.hand, &world.tuning, dt);
        world.perf_stats.physics_ms = t0.elapsed_ms();
        r
    } else {
        step_blocks(world.blocks.blocks_mut(), &world.hand, &world.tuning, dt)
    };

    world.spin.sync(world.blocks.blocks(), report.dt);

    if perf_on {
        let t0 = PerfTimer::start();
        refresh_render_buffers(world);
        world.perf_stats.extract_ms = t0.elapsed_ms();
    } else {
        refresh_render_buffers(world);
    }

    if perf_on {
        world.perf_stats.dt = report.dt;
        world.perf_stats.block_count = report.blocks;
        world.perf_stats.sleeping_blocks = world.blocks.sleeping_count() as u32;
        world.perf_stats.hand_touched = report.hand_touched;
        world.perf_stats.floor_contacts = report.floor_contacts;
        world.perf_stats.fell_asleep = report.fell_asleep;
        world.perf_stats.pair_checks = report.pair_checks;
        world.perf_stats.block_contacts = report.block_contacts;
        world.perf_stats.commands_applied = world.commands_since_step;
        if let Some(start) = step_start {
            world.perf_stats.step_ms = start.elapsed_ms();
        }
    }

    world.commands_since_step = 0;
    world.last_report = report;
    world.frame += 1;
    report
}
