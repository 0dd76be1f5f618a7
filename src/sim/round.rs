//! Round controller
//!
//! Owns the entity state and drives one tick at a time: move, test the player
//! against the treasure, and restart the round on contact.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::overlaps;
use super::state::{Entity, EntityState, Origin};
use super::tick::{TickInput, check_invariants, tick};
use crate::config::Config;
use crate::error::{ConfigError, InvariantViolation};

/// Round lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RoundState {
    /// Normal play
    #[default]
    Running,
    /// Entities are being restored; never outlives the tick that entered it
    Resetting,
}

/// Read-only view of a sprite for the renderer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpriteView {
    pub position: Vec2,
    pub scale: f32,
    pub size: Vec2,
    pub origin: Origin,
}

impl From<&Entity> for SpriteView {
    fn from(entity: &Entity) -> Self {
        Self {
            position: entity.pos,
            scale: entity.scale,
            size: entity.size,
            origin: entity.origin,
        }
    }
}

/// What the host sees after a tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub player: SpriteView,
    pub enemies: Vec<SpriteView>,
    pub goal: SpriteView,
    pub round_state: RoundState,
    /// 1-based round counter
    pub round: u32,
    /// Ticks since the controller was created
    pub time_ticks: u64,
    /// The round restarted during this tick
    pub reset: bool,
}

/// Drives rounds from a validated config
#[derive(Debug, Clone)]
pub struct RoundController {
    config: Config,
    entities: EntityState,
    state: RoundState,
    round: u32,
    round_ticks: u64,
    time_ticks: u64,
}

impl RoundController {
    /// Validate the config and lay out the first round
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        config.validate()?;
        let entities = EntityState::initialize(&config);
        log::info!(
            "Round initialized: {} enemies, goal at x={}",
            entities.enemies.len(),
            entities.goal.entity.pos.x
        );
        Ok(Self {
            config,
            entities,
            state: RoundState::Running,
            round: 1,
            round_ticks: 0,
            time_ticks: 0,
        })
    }

    /// Swap in a new config and start over. Leaves the controller untouched on error.
    pub fn reinitialize(&mut self, config: Config) -> Result<(), ConfigError> {
        *self = Self::new(config)?;
        Ok(())
    }

    /// Advance the round by one tick
    pub fn tick(&mut self, input: &TickInput) -> Result<FrameSnapshot, InvariantViolation> {
        self.time_ticks += 1;
        self.round_ticks += 1;

        tick(&mut self.entities, input);

        if let Err(violation) = check_invariants(&self.entities, &self.config) {
            log::error!("Simulation invariant violated: {}", violation);
            return Err(violation);
        }

        let mut reset = false;
        if overlaps(&self.entities.player.entity, &self.entities.goal.entity) {
            self.state = RoundState::Resetting;
            self.reset_round();
            reset = true;
        }

        Ok(self.snapshot_with(reset))
    }

    /// Restore the initial layout and resume play
    fn reset_round(&mut self) {
        log::info!(
            "Treasure reached in round {} after {} ticks, restarting",
            self.round,
            self.round_ticks
        );
        self.entities = EntityState::initialize(&self.config);
        self.round += 1;
        self.round_ticks = 0;
        self.state = RoundState::Running;
    }

    /// Current view without advancing
    pub fn snapshot(&self) -> FrameSnapshot {
        self.snapshot_with(false)
    }

    fn snapshot_with(&self, reset: bool) -> FrameSnapshot {
        FrameSnapshot {
            player: SpriteView::from(&self.entities.player.entity),
            enemies: self
                .entities
                .enemies
                .iter()
                .map(|e| SpriteView::from(&e.entity))
                .collect(),
            goal: SpriteView::from(&self.entities.goal.entity),
            round_state: self.state,
            round: self.round,
            time_ticks: self.time_ticks,
            reset,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn entities(&self) -> &EntityState {
        &self.entities
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    /// Ticks since the current round started
    pub fn round_ticks(&self) -> u64 {
        self.round_ticks
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }
}
