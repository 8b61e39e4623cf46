//! Brick Breaker - a fixed-timestep arcade brick breaker simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (collision, bricks, particles, tick, session)
//! - `platform`: Input mapping and frame/timer driver
//! - `persistence`: High-score storage backends
//! - `settings`: Data-driven game configuration

pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod settings;
pub mod sim;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use settings::{GameConfig, LossRule};
pub use sim::{GameSession, GameState, GameStatus};

/// Game configuration constants
pub mod consts {
    /// Canvas dimensions
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 15.0;
    /// Paddle top edge sits this far above the canvas bottom
    pub const PADDLE_BOTTOM_OFFSET: f32 = 100.0;
    /// Keyboard paddle movement per timer step (pixels)
    pub const PADDLE_KEY_STEP: f32 = 8.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 8.0;
    /// Per-tick ball speed (pixels/tick, no dt integration)
    pub const BALL_SPEED: f32 = 5.0;
    /// Horizontal share of BALL_SPEED at launch
    pub const LAUNCH_DX_FACTOR: f32 = 0.7;
    /// Resting ball center sits this far above the paddle top
    pub const BALL_REST_OFFSET: f32 = 20.0;

    /// Brick grid defaults
    pub const BRICK_ROWS: u32 = 6;
    pub const BRICK_COLS: u32 = 10;
    pub const MAX_BRICK_ROWS: u32 = 64;
    pub const MAX_BRICK_COLS: u32 = 64;
    pub const BRICK_WIDTH: f32 = 70.0;
    pub const BRICK_HEIGHT: f32 = 25.0;
    pub const BRICK_PADDING: f32 = 5.0;
    pub const BRICK_TOP_OFFSET: f32 = 80.0;
    /// Points per row step (top row worth the most)
    pub const BRICK_ROW_POINTS: u64 = 10;

    /// Lives at session start
    pub const STARTING_LIVES: u8 = 3;

    /// Particle burst
    pub const PARTICLES_PER_BURST: usize = 8;
    pub const PARTICLE_LIFE: u32 = 30;
    /// Max absolute velocity component of a fresh particle
    pub const PARTICLE_MAX_SPEED: f32 = 4.0;
    /// Per-tick velocity damping
    pub const PARTICLE_DAMPING: f32 = 0.98;

    /// Paddle keyboard-repeat timer rate (Hz)
    pub const PADDLE_TIMER_HZ: u32 = 60;
}
