//! Round configuration
//!
//! Loaded once before the first tick and immutable afterwards. Every field has
//! a default matching the stock round, so partial JSON files are accepted.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Tuning and layout for a round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // === Motion (px per tick) ===
    pub player_speed: f32,
    pub enemy_speed: f32,

    // === Patrol bounds ===
    pub enemy_min_y: f32,
    pub enemy_max_y: f32,

    // === Viewport ===
    pub viewport_width: f32,
    pub viewport_height: f32,

    // === Dragon layout ===
    pub enemy_count: usize,
    /// Position of the first dragon
    pub enemy_origin: Vec2,
    /// Offset between consecutive dragons
    pub enemy_step: Vec2,

    // === Player / treasure placement ===
    pub player_initial_x: f32,
    /// Distance of the treasure from the right edge
    pub goal_margin_x: f32,

    // === Sprite geometry ===
    pub player_size: Vec2,
    pub player_scale: f32,
    pub enemy_size: Vec2,
    pub enemy_scale: f32,
    pub goal_size: Vec2,
    pub goal_scale: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            player_speed: PLAYER_SPEED,
            enemy_speed: ENEMY_SPEED,

            enemy_min_y: ENEMY_MIN_Y,
            enemy_max_y: ENEMY_MAX_Y,

            viewport_width: VIEWPORT_WIDTH,
            viewport_height: VIEWPORT_HEIGHT,

            enemy_count: ENEMY_COUNT,
            enemy_origin: Vec2::from(ENEMY_ORIGIN),
            enemy_step: Vec2::from(ENEMY_STEP),

            player_initial_x: PLAYER_INITIAL_X,
            goal_margin_x: GOAL_MARGIN_X,

            player_size: Vec2::from(PLAYER_SPRITE_SIZE),
            player_scale: PLAYER_SCALE,
            enemy_size: Vec2::from(ENEMY_SPRITE_SIZE),
            enemy_scale: ENEMY_SCALE,
            goal_size: Vec2::from(GOAL_SPRITE_SIZE),
            goal_scale: GOAL_SCALE,
        }
    }
}

impl Config {
    /// Parse a JSON config, filling missing fields with defaults
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Check every invariant the simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        let scalars = [
            ("player_speed", self.player_speed),
            ("enemy_speed", self.enemy_speed),
            ("enemy_min_y", self.enemy_min_y),
            ("enemy_max_y", self.enemy_max_y),
            ("viewport_width", self.viewport_width),
            ("viewport_height", self.viewport_height),
            ("player_initial_x", self.player_initial_x),
            ("goal_margin_x", self.goal_margin_x),
            ("player_scale", self.player_scale),
            ("enemy_scale", self.enemy_scale),
            ("goal_scale", self.goal_scale),
        ];
        for (name, value) in scalars {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { name });
            }
        }
        let vectors = [
            ("enemy_origin", self.enemy_origin),
            ("enemy_step", self.enemy_step),
            ("player_size", self.player_size),
            ("enemy_size", self.enemy_size),
            ("goal_size", self.goal_size),
        ];
        for (name, value) in vectors {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { name });
            }
        }

        if self.enemy_min_y >= self.enemy_max_y {
            return Err(ConfigError::InvertedEnemyBounds {
                min_y: self.enemy_min_y,
                max_y: self.enemy_max_y,
            });
        }

        for (name, value) in [
            ("player_speed", self.player_speed),
            ("enemy_speed", self.enemy_speed),
        ] {
            if value < 0.0 {
                return Err(ConfigError::NegativeSpeed { name, value });
            }
        }

        if self.viewport_width <= 0.0 || self.viewport_height <= 0.0 {
            return Err(ConfigError::InvalidViewport {
                width: self.viewport_width,
                height: self.viewport_height,
            });
        }

        for (name, value) in [
            ("player_scale", self.player_scale),
            ("enemy_scale", self.enemy_scale),
            ("goal_scale", self.goal_scale),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::InvalidScale { name, value });
            }
        }

        for (index, pos) in self.enemy_layout().enumerate() {
            let y = pos.y;
            if y < self.enemy_min_y || y > self.enemy_max_y {
                return Err(ConfigError::EnemyOutOfBounds { index, y });
            }
        }

        Ok(())
    }

    /// Dragon spawn positions in grid-fill order, each one step past the last
    pub fn enemy_layout(&self) -> impl Iterator<Item = Vec2> + '_ {
        std::iter::successors(Some(self.enemy_origin), move |pos| Some(*pos + self.enemy_step))
            .take(self.enemy_count)
    }

    pub fn player_spawn(&self) -> Vec2 {
        Vec2::new(self.player_initial_x, self.viewport_height / 2.0)
    }

    pub fn goal_spawn(&self) -> Vec2 {
        Vec2::new(
            self.viewport_width - self.goal_margin_x,
            self.viewport_height / 2.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.enemy_count, 6);
        assert_eq!(config.goal_spawn(), Vec2::new(560.0, 180.0));
        assert_eq!(config.player_spawn(), Vec2::new(40.0, 180.0));
    }

    #[test]
    fn test_enemy_layout_grid_fill() {
        let config = Config::default();
        let layout: Vec<Vec2> = config.enemy_layout().collect();
        assert_eq!(layout.len(), 6);
        assert_eq!(layout[0], Vec2::new(110.0, 100.0));
        assert_eq!(layout[1], Vec2::new(190.0, 120.0));
        assert_eq!(layout[5], Vec2::new(510.0, 200.0));
    }

    #[test]
    fn test_empty_enemy_layout() {
        let config = Config {
            enemy_count: 0,
            ..Default::default()
        };
        assert_eq!(config.enemy_layout().count(), 0);
    }

    #[test]
    fn test_large_enemy_layout_is_linear() {
        let config = Config {
            enemy_count: 200_000,
            enemy_step: Vec2::new(1.0, 0.0),
            ..Default::default()
        };
        let started = std::time::Instant::now();
        assert!(config.validate().is_ok());
        let last = config.enemy_layout().last().unwrap();
        assert_eq!(last, Vec2::new(110.0 + 199_999.0, 100.0));
        assert!(started.elapsed().as_secs() < 5, "layout took {:?}", started.elapsed());
    }

    #[test]
    fn test_rejects_inverted_bounds() {
        let config = Config {
            enemy_min_y: 300.0,
            enemy_max_y: 100.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvertedEnemyBounds { .. })
        ));

        // Equal bounds leave no room to patrol
        let config = Config {
            enemy_min_y: 100.0,
            enemy_max_y: 100.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvertedEnemyBounds { .. })
        ));
    }

    #[test]
    fn test_rejects_negative_speed() {
        let config = Config {
            enemy_speed: -2.0,
            ..Default::default()
        };
        match config.validate() {
            Err(ConfigError::NegativeSpeed { name, value }) => {
                assert_eq!(name, "enemy_speed");
                assert_eq!(value, -2.0);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_rejects_nan_and_bad_viewport() {
        let config = Config {
            player_speed: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonFinite { name: "player_speed" })
        ));

        let config = Config {
            viewport_height: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidViewport { .. })
        ));
    }

    #[test]
    fn test_rejects_enemy_spawned_outside_bounds() {
        // Tenth dragon would start at y = 100 + 9 * 20 = 280, eleventh at 300
        let config = Config {
            enemy_count: 11,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EnemyOutOfBounds { index: 10, .. })
        ));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config =
            Config::from_json_str(r#"{ "enemy_count": 0, "player_speed": 3.0 }"#).unwrap();
        assert_eq!(config.enemy_count, 0);
        assert_eq!(config.player_speed, 3.0);
        assert_eq!(config.enemy_speed, ENEMY_SPEED);
        assert_eq!(config.enemy_origin, Vec2::new(110.0, 100.0));
    }

    #[test]
    fn test_json_rejects_negative_count_and_bad_values() {
        assert!(matches!(
            Config::from_json_str(r#"{ "enemy_count": -1 }"#),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            Config::from_json_str(r#"{ "enemy_min_y": 300.0, "enemy_max_y": 100.0 }"#),
            Err(ConfigError::InvertedEnemyBounds { .. })
        ));
    }

    #[test]
    fn test_json_roundtrip_preserves_config() {
        let config = Config {
            enemy_count: 2,
            enemy_step: Vec2::new(40.0, 10.0),
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(Config::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        assert!(matches!(
            Config::load("/definitely/not/here/round.json"),
            Err(ConfigError::Io(_))
        ));
    }
}
