//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed tick per frame, velocities in pixels per tick
//! - Injected RNG only
//! - Stable iteration order (bricks stay in row-major order)
//! - No rendering or platform dependencies

pub mod bricks;
pub mod collision;
pub mod commands;
pub mod particles;
pub mod rng;
pub mod session;
pub mod state;
pub mod tick;

pub use bricks::build_brick_grid;
pub use collision::{Rect, ball_brick_collision, circle_rect_overlap};
pub use commands::Direction;
pub use rng::{RandomSource, SequenceRandom};
pub use session::GameSession;
pub use state::{Ball, Brick, Color, GameEvent, GameState, GameStatus, Paddle, Particle};
pub use tick::{Step, step, tick};
