use crate::domain::TuningProfile;
use crate::systems::blocks::Block;

/// Horizontal momentum smaller than this does not disturb a sleeping block
const WAKE_TRANSFER_EPSILON: f32 = 1e-4;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FloorContact {
    pub touched: bool,
    pub fell_asleep: bool,
}

/// Keep the block above the floor plane; bounce, damp, and settle it.
pub fn resolve_floor(block: &mut Block, tuning: &TuningProfile) -> FloorContact {
    let half = tuning.half_size();
    if block.position.y >= half {
        return FloorContact::default();
    }

    block.position.y = half;
    block.velocity.y *= -tuning.restitution;
    block.velocity.x *= tuning.friction;
    block.velocity.z *= tuning.friction;

    let fell_asleep = block.speed() < tuning.sleep_threshold;
    if fell_asleep {
        block.sleep();
    }

    FloorContact { touched: true, fell_asleep }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PairStats {
    pub checks: u32,
    pub contacts: u32,
}

#[inline]
fn overlaps(a: &Block, b: &Block, size: f32) -> bool {
    (a.position.x - b.position.x).abs() < size
        && (a.position.y - b.position.y).abs() < size
        && (a.position.z - b.position.z).abs() < size
}

/// Sit `upper` on top of `lower` and hand part of its sideways motion down.
fn stack(upper: &mut Block, lower: &mut Block, tuning: &TuningProfile) {
    upper.position.y = lower.position.y + tuning.block_size;
    if upper.velocity.y < 0.0 {
        upper.velocity.y = 0.0;
    }

    let moved_x = upper.velocity.x * tuning.momentum_transfer;
    let moved_z = upper.velocity.z * tuning.momentum_transfer;
    upper.velocity.x -= moved_x;
    upper.velocity.z -= moved_z;
    lower.velocity.x += moved_x;
    lower.velocity.z += moved_z;

    if moved_x.abs() + moved_z.abs() > WAKE_TRANSFER_EPSILON {
        lower.wake();
    }
}

/// Heuristic block-on-block resolution over every unordered pair, O(n²).
///
/// Not symmetric: the higher block of an overlapping pair is always the one
/// that moves. Ties go to the earlier block.
pub fn resolve_block_pairs(blocks: &mut [Block], tuning: &TuningProfile) -> PairStats {
    let mut stats = PairStats::default();
    let size = tuning.block_size;
    let n = blocks.len();

    for i in 0..n {
        for j in (i + 1)..n {
            stats.checks += 1;
            let (head, tail) = blocks.split_at_mut(j);
            let a = &mut head[i];
            let b = &mut tail[0];
            if !overlaps(a, b, size) {
                continue;
            }
            stats.contacts += 1;
            if a.position.y >= b.position.y {
                stack(a, b, tuning);
            } else {
                stack(b, a, tuning);
            }
        }
    }

    stats
}
