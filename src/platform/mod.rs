//! Platform abstraction layer
//!
//! Glue between a rendering/input host and the simulation:
//! - Input events to per-tick snapshots
//! - Wall-clock frame deltas to whole ticks

pub mod input;
pub mod time;

pub use input::{PointerEvent, PointerSampler};
pub use time::FixedStep;
