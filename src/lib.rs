//! Treasure Dash - a tiny treasure-grab arcade round
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, patrol movement, collision, rounds)
//! - `config`: Data-driven round layout and tuning
//! - `error`: Configuration and invariant errors
//! - `platform`: Host-side input sampling and frame stepping

pub mod config;
pub mod error;
pub mod platform;
pub mod sim;

pub use config::Config;
pub use error::{ConfigError, InvariantViolation};
pub use sim::{FrameSnapshot, RoundController, RoundState, TickInput};

/// Game configuration constants
pub mod consts {
    /// Nominal tick rate the speeds are tuned for (ticks per second)
    pub const TICK_RATE: u32 = 60;
    /// Fixed tick duration used by frame accumulators
    pub const TICK_DT: f32 = 1.0 / TICK_RATE as f32;
    /// Longest wall-clock frame delta accepted before clamping (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;
    /// Maximum ticks per host frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Viewport defaults
    pub const VIEWPORT_WIDTH: f32 = 640.0;
    pub const VIEWPORT_HEIGHT: f32 = 360.0;

    /// Player defaults (px per tick)
    pub const PLAYER_SPEED: f32 = 1.5;
    pub const PLAYER_INITIAL_X: f32 = 40.0;
    pub const PLAYER_SCALE: f32 = 0.5;
    pub const PLAYER_SPRITE_SIZE: (f32, f32) = (64.0, 64.0);

    /// Dragon defaults
    pub const ENEMY_SPEED: f32 = 2.0;
    pub const ENEMY_MIN_Y: f32 = 80.0;
    pub const ENEMY_MAX_Y: f32 = 280.0;
    pub const ENEMY_COUNT: usize = 6;
    pub const ENEMY_ORIGIN: (f32, f32) = (110.0, 100.0);
    pub const ENEMY_STEP: (f32, f32) = (80.0, 20.0);
    /// Dragons are shrunk by half from their sprite size
    pub const ENEMY_SCALE: f32 = 0.5;
    pub const ENEMY_SPRITE_SIZE: (f32, f32) = (128.0, 96.0);

    /// Treasure defaults
    pub const GOAL_MARGIN_X: f32 = 80.0;
    pub const GOAL_SCALE: f32 = 0.6;
    pub const GOAL_SPRITE_SIZE: (f32, f32) = (64.0, 64.0);
}
