//! Entity state and initial layout
//!
//! Everything a round needs to be reproduced lives here. Built from a
//! [`Config`] at round start and rebuilt from scratch on every reset.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::config::Config;

/// Normalized sprite anchor; (0, 0) is the top-left corner, (1, 1) bottom-right
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Origin(pub Vec2);

impl Origin {
    /// Scene backgrounds are anchored at their top-left corner
    pub const TOP_LEFT: Self = Self(Vec2::ZERO);
    /// Default sprite anchor
    pub const CENTER: Self = Self(Vec2::splat(0.5));
}

impl Default for Origin {
    fn default() -> Self {
        Self::CENTER
    }
}

/// A positioned, scaled sprite-sized box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub pos: Vec2,
    pub scale: f32,
    /// Unscaled sprite size
    pub size: Vec2,
    pub origin: Origin,
}

impl Entity {
    pub fn new(pos: Vec2, size: Vec2, scale: f32) -> Self {
        Self {
            pos,
            scale,
            size,
            origin: Origin::CENTER,
        }
    }

    pub fn with_origin(mut self, origin: Origin) -> Self {
        self.origin = origin;
        self
    }

    /// Size after scaling
    #[inline]
    pub fn display_size(&self) -> Vec2 {
        self.size * self.scale
    }

    /// World-space bounding box honoring the entity's origin
    pub fn bounds(&self) -> Rect {
        let size = self.display_size();
        Rect::from_min_size(self.pos - self.origin.0 * size, size)
    }
}

/// The walking hero
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub entity: Entity,
    /// Horizontal px per tick while input is held
    pub speed: f32,
}

/// A patrolling dragon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub entity: Entity,
    /// Signed vertical px per tick; positive moves down
    pub current_speed: f32,
    pub min_y: f32,
    pub max_y: f32,
}

impl Enemy {
    /// Advance one patrol step, returning true if the direction reversed
    pub fn patrol(&mut self) -> bool {
        self.entity.pos.y += self.current_speed;
        let y = self.entity.pos.y;

        // Reverse only after reaching the edge; one step of overshoot is expected
        if (y >= self.max_y && self.current_speed > 0.0)
            || (y <= self.min_y && self.current_speed < 0.0)
        {
            self.current_speed = -self.current_speed;
            return true;
        }
        false
    }
}

/// The treasure chest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub entity: Entity,
}

/// Complete round entity state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityState {
    pub player: Player,
    /// Dragons in layout order
    pub enemies: Vec<Enemy>,
    pub goal: Goal,
}

impl EntityState {
    /// Lay out a fresh round. Pure: the same config always yields the same state.
    pub fn initialize(config: &Config) -> Self {
        let player = Player {
            entity: Entity::new(config.player_spawn(), config.player_size, config.player_scale),
            speed: config.player_speed,
        };

        let enemies = config
            .enemy_layout()
            .map(|pos| Enemy {
                entity: Entity::new(pos, config.enemy_size, config.enemy_scale),
                current_speed: config.enemy_speed,
                min_y: config.enemy_min_y,
                max_y: config.enemy_max_y,
            })
            .collect();

        let goal = Goal {
            entity: Entity::new(config.goal_spawn(), config.goal_size, config.goal_scale),
        };

        Self {
            player,
            enemies,
            goal,
        }
    }
}
