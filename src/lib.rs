//! Carrom Meta - A carrom-style disc flicking game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, session state)
//! - `renderer`: Canvas 2D drawing of a `RenderFrame`
//! - `platform`: Browser/native platform abstraction (input, storage, clock)
//! - `persistence`: Best score and leaderboard storage
//! - `highscores`: Leaderboard ordering and capping

pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use highscores::HighScores;
pub use persistence::Records;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Logical canvas resolution (CSS scaling happens outside the sim)
    pub const CANVAS_WIDTH: f32 = 960.0;
    pub const CANVAS_HEIGHT: f32 = 540.0;

    /// Board layout
    pub const BOARD_MARGIN: f32 = 50.0;
    pub const POCKET_RADIUS: f32 = 25.0;
    /// Radius of the decorative circle around the formation
    pub const CENTER_CIRCLE_RADIUS: f32 = 60.0;

    /// Disc sizes
    pub const STRIKER_RADIUS: f32 = 18.0;
    pub const COIN_RADIUS: f32 = 15.0;
    /// Striker baseline, measured up from the bottom edge of the board
    pub const STRIKER_BASELINE_OFFSET: f32 = 70.0;

    /// Coin formation: queen + RING_COUNT rings of COINS_PER_RING
    pub const RING_COUNT: usize = 2;
    pub const COINS_PER_RING: usize = 6;
    /// Ring spacing as a multiple of the coin radius
    pub const RING_SPACING: f32 = 2.2;
    pub const COIN_COUNT: usize = 1 + RING_COUNT * COINS_PER_RING;

    /// Velocity multiplier applied every step
    pub const FRICTION: f32 = 0.98;
    /// Velocity components below this snap to zero
    pub const VELOCITY_FLOOR: f32 = 0.1;
    /// Wall bounce: velocity component is multiplied by -WALL_RESTITUTION
    pub const WALL_RESTITUTION: f32 = 0.8;

    /// Shot power = aim length / POWER_DIVISOR, capped at MAX_POWER
    pub const POWER_DIVISOR: f32 = 10.0;
    pub const MAX_POWER: f32 = 20.0;

    /// Stored best score meaning "no recorded best"
    pub const NO_BEST_SCORE: u32 = 999;
}
