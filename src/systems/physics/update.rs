#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::domain::TuningProfile;
use crate::systems::blocks::Block;
use crate::systems::hand::HandState;

use super::collision::{resolve_block_pairs, resolve_floor};
use super::forces::{apply_gravity, apply_hand_force};
use super::types::{BlockOutcome, StepReport};

/// Clamp a frame delta into `0..=max_dt`. Non-finite or negative deltas
/// (clock jumps, paused tabs) advance nothing.
#[inline]
pub fn clamp_dt(dt: f32, max_dt: f32) -> f32 {
    if !dt.is_finite() || dt <= 0.0 {
        return 0.0;
    }
    dt.min(max_dt)
}

/// Stages 1-4 for a single block: gravity, hand field, integrate, floor.
#[inline]
pub fn advance_block(block: &mut Block, hand: &HandState, tuning: &TuningProfile, dt: f32) -> BlockOutcome {
    let mut outcome = BlockOutcome::default();

    apply_gravity(block, tuning.gravity, dt);

    if apply_hand_force(block, hand, tuning, dt) {
        outcome.hand_touched = 1;
    }

    block.position += block.velocity * dt;

    let contact = resolve_floor(block, tuning);
    if contact.touched {
        outcome.floor_contacts = 1;
    }
    if contact.fell_asleep {
        outcome.fell_asleep = 1;
    }

    outcome
}

/// Advance every block by one frame.
///
/// Per-block stages are independent; the pairwise pass runs only after all
/// of them have finished.
pub fn step_blocks(blocks: &mut [Block], hand: &HandState, tuning: &TuningProfile, dt: f32) -> StepReport {
    let dt = clamp_dt(dt, tuning.max_dt);

    #[cfg(feature = "parallel")]
    let outcome = blocks
        .par_iter_mut()
        .map(|b| advance_block(b, hand, tuning, dt))
        .reduce(BlockOutcome::default, BlockOutcome::merge);

    #[cfg(not(feature = "parallel"))]
    let outcome = blocks
        .iter_mut()
        .map(|b| advance_block(b, hand, tuning, dt))
        .fold(BlockOutcome::default(), BlockOutcome::merge);

    let pairs = if tuning.block_collisions {
        resolve_block_pairs(blocks, tuning)
    } else {
        Default::default()
    };

    StepReport {
        dt,
        blocks: blocks.len() as u32,
        hand_touched: outcome.hand_touched,
        floor_contacts: outcome.floor_contacts,
        fell_asleep: outcome.fell_asleep,
        pair_checks: pairs.checks,
        block_contacts: pairs.contacts,
    }
}
