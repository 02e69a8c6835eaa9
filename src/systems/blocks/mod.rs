//! Blocks - the simulated cubes and their registry
//!
//! The registry is a dense Vec addressed by stable ids. Physics mutates the
//! records in place; nothing is removed except by a full clear.

mod block;
mod registry;

pub use block::{Block, BlockId};
pub use registry::{BlockRegistry, PushDirection, PushMode};
