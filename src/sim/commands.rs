//! Player commands as pure state transitions
//!
//! Each command takes a snapshot and returns the next one. Commands that are
//! not valid in the current status return the snapshot unchanged.

use super::rng::RandomSource;
use super::state::{GameState, GameStatus};
use crate::settings::GameConfig;

/// Keyboard paddle direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub fn sign(&self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }
}

/// Give the resting ball its initial velocity and start playing.
///
/// Valid from `Start`, or whenever the ball is resting on the paddle after a
/// lost life. Ignored once the game has ended.
pub fn launch(state: &GameState, config: &GameConfig, rng: &mut dyn RandomSource) -> GameState {
    if state.status.is_terminal() {
        return state.clone();
    }
    if state.status != GameStatus::Start && state.ball.launched {
        return state.clone();
    }

    let mut next = state.clone();
    let speed = config.ball_speed;
    next.ball.vel.x = speed * rng.sign() * config.launch_dx_factor;
    next.ball.vel.y = -speed;
    next.ball.launched = true;
    next.status = GameStatus::Playing;
    next
}

/// `Playing` ↔ `Paused`; anything else is unchanged
pub fn toggle_pause(state: &GameState) -> GameState {
    let status = match state.status {
        GameStatus::Playing => GameStatus::Paused,
        GameStatus::Paused => GameStatus::Playing,
        other => other,
    };
    GameState {
        status,
        ..state.clone()
    }
}

/// Move the paddle one keyboard step
pub fn move_paddle(state: &GameState, config: &GameConfig, direction: Direction) -> GameState {
    shift_paddle(state, config, direction.sign() * config.paddle_key_step)
}

/// Move the paddle by `dx`, clamped to the canvas
pub fn shift_paddle(state: &GameState, config: &GameConfig, dx: f32) -> GameState {
    set_paddle_x(state, config, state.paddle.pos.x + dx)
}

/// Center the paddle on a pointer x in canvas space, clamped to the canvas
pub fn center_paddle_on(state: &GameState, config: &GameConfig, pointer_x: f32) -> GameState {
    set_paddle_x(state, config, pointer_x - state.paddle.width / 2.0)
}

fn set_paddle_x(state: &GameState, config: &GameConfig, x: f32) -> GameState {
    if state.status.is_terminal() || !x.is_finite() {
        return state.clone();
    }
    let mut next = state.clone();
    next.paddle.pos.x = x.clamp(0.0, config.paddle_max_x());
    next
}

/// Fresh session keeping the best score seen so far
pub fn reset(state: &GameState, config: &GameConfig) -> GameState {
    GameState::new(config, state.high_score)
}
