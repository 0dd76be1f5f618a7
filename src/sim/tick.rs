//! Per-tick movement
//!
//! Advances dragons along their patrol and walks the player while input is
//! held. Collision and round resets are handled by the round controller.

use serde::{Deserialize, Serialize};

use super::state::EntityState;
use crate::config::Config;
use crate::error::InvariantViolation;

/// Input sampled once per tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    /// Pointer or touch is held down
    pub pointer_down: bool,
}

impl TickInput {
    pub fn held() -> Self {
        Self { pointer_down: true }
    }
}

/// Advance all moving entities by one tick.
///
/// Dragons move first, then the player. Returns how many dragons reversed
/// direction this tick.
pub fn tick(state: &mut EntityState, input: &TickInput) -> usize {
    let mut reversals = 0;
    for (i, enemy) in state.enemies.iter_mut().enumerate() {
        if enemy.patrol() {
            reversals += 1;
            log::debug!(
                "Enemy {} reversed at y={} (speed now {})",
                i,
                enemy.entity.pos.y,
                enemy.current_speed
            );
        }
    }

    if input.pointer_down {
        state.player.entity.pos.x += state.player.speed;
    }

    reversals
}

/// Verify every dragon is within one step of its patrol range
pub fn check_invariants(state: &EntityState, config: &Config) -> Result<(), InvariantViolation> {
    let step = config.enemy_speed;
    for (index, enemy) in state.enemies.iter().enumerate() {
        let y = enemy.entity.pos.y;
        if y < enemy.min_y - step || y > enemy.max_y + step {
            return Err(InvariantViolation::EnemyOutOfBounds {
                index,
                y,
                min_y: enemy.min_y,
                max_y: enemy.max_y,
                step,
            });
        }
    }
    Ok(())
}
