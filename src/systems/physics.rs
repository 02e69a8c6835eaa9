//! Physics System - per-frame block integrator
//!
//! Order per block: gravity, hand repulsion, integration, floor contact.
//! Afterwards (stacking profile only) a pairwise block-on-block pass.
//!
//! Key concepts:
//! - dt is clamped so frame hitches can't launch blocks through the floor
//! - The floor keeps every center at `block_size / 2` or above
//! - Sleeping blocks ignore gravity until a push or the hand wakes them
//! - Block stacking is a soft heuristic, not a rigid-body solver

mod collision;
mod forces;
mod types;
mod update;

pub use collision::{resolve_block_pairs, resolve_floor, FloorContact, PairStats};
pub use forces::{apply_gravity, apply_hand_force, hand_repulsion};
pub use types::{BlockOutcome, StepReport};
pub use update::{advance_block, clamp_dt, step_blocks};
