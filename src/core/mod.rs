//! Core primitives shared by every system.

pub mod math;
