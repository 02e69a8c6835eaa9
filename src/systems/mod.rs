//! Systems - everything that owns or advances world state

pub mod blocks;
pub mod cosmetic;
pub mod hand;
pub mod physics;
