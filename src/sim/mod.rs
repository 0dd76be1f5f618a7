//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per call, no wall-clock time
//! - Input sampled once per tick
//! - Stable iteration order (layout order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod round;
pub mod state;
pub mod tick;

pub use collision::{Rect, overlaps};
pub use round::{FrameSnapshot, RoundController, RoundState, SpriteView};
pub use state::{Enemy, Entity, EntityState, Goal, Origin, Player};
pub use tick::{TickInput, check_invariants, tick};
