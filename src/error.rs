//! Error types
//!
//! Configuration problems surface when a round is (re)initialized. Invariant
//! violations flag a logic defect in the simulation and are never recovered.

use thiserror::Error;

/// Rejected round configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Patrol bounds are empty or inverted
    #[error("enemy bounds inverted: min_y {min_y} must be below max_y {max_y}")]
    InvertedEnemyBounds { min_y: f32, max_y: f32 },

    #[error("{name} must not be negative, got {value}")]
    NegativeSpeed { name: &'static str, value: f32 },

    #[error("{name} must be a finite number")]
    NonFinite { name: &'static str },

    #[error("viewport must have positive size, got {width}x{height}")]
    InvalidViewport { width: f32, height: f32 },

    #[error("{name} must be positive, got {value}")]
    InvalidScale { name: &'static str, value: f32 },

    /// The grid-fill layout places an enemy outside its patrol bounds
    #[error("enemy {index} starts at y={y}, outside its patrol bounds")]
    EnemyOutOfBounds { index: usize, y: f32 },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
}

/// A simulation invariant did not hold after a tick
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvariantViolation {
    /// An enemy drifted further than one step past its patrol bounds
    #[error(
        "enemy {index} at y={y} left its patrol range [{min_y}, {max_y}] by more than one step ({step})"
    )]
    EnemyOutOfBounds {
        index: usize,
        y: f32,
        min_y: f32,
        max_y: f32,
        step: f32,
    },
}
