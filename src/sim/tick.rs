//! Fixed timestep simulation tick
//!
//! Core game loop that advances the simulation one frame. Velocities are
//! per-tick displacements, so there is no dt: a tick is a tick no matter how
//! long the host's frame took.

use std::sync::Arc;

use super::collision::{ball_brick_collision, ball_paddle_hit, ball_wall_contact};
use super::particles;
use super::rng::RandomSource;
use super::state::{Ball, GameEvent, GameState, GameStatus};
use crate::settings::{GameConfig, LossRule};

/// Result of one tick: the next state and what happened on the way
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub state: GameState,
    pub events: Vec<GameEvent>,
}

/// Advance the game state by one tick, returning only the new state
pub fn tick(state: &GameState, config: &GameConfig, rng: &mut dyn RandomSource) -> GameState {
    step(state, config, rng).state
}

/// Advance the game state by one tick.
///
/// Identity unless the status is `Playing`. The order of the phases below is
/// fixed; replays depend on it.
pub fn step(state: &GameState, config: &GameConfig, rng: &mut dyn RandomSource) -> Step {
    if state.status != GameStatus::Playing {
        return Step {
            state: state.clone(),
            events: Vec::new(),
        };
    }

    let mut next = state.clone();
    let mut events = Vec::new();

    next.particles = particles::advance(&state.particles);

    if next.ball.launched {
        move_ball(&mut next, config, rng, &mut events);
    } else {
        // Resting ball rides the paddle
        next.ball.pos.x = next.paddle.center_x();
    }

    // --- LOSS ---
    if ball_lost(&next, config) {
        next.lives = next.lives.saturating_sub(1);
        events.push(GameEvent::LifeLost {
            remaining: next.lives,
        });
        if next.lives == 0 {
            next.status = GameStatus::GameOver;
            events.push(GameEvent::GameOver);
            raise_high_score(&mut next, &mut events);
        } else {
            next.ball = Ball::resting_on(&next.paddle, next.ball.radius);
        }
    }

    // --- WIN (runs last, overrides game over) ---
    if next.visible_bricks() == 0 {
        next.status = GameStatus::Win;
        events.retain(|e| *e != GameEvent::GameOver);
        events.push(GameEvent::Win);
        raise_high_score(&mut next, &mut events);
    }

    Step {
        state: next,
        events,
    }
}

/// Integrate, bounce off walls and paddle, then break at most one brick
fn move_ball(
    next: &mut GameState,
    config: &GameConfig,
    rng: &mut dyn RandomSource,
    events: &mut Vec<GameEvent>,
) {
    let ball = &mut next.ball;
    ball.pos += ball.vel;

    let wall = ball_wall_contact(ball, config.canvas_width);
    if wall.side {
        ball.vel.x = -ball.vel.x;
    }
    if wall.top {
        ball.vel.y = -ball.vel.y;
    }

    if let Some(hit_pos) = ball_paddle_hit(ball, &next.paddle) {
        ball.vel.y = -ball.vel.y.abs();
        // Off-center hits steer: center goes straight up, edges go sharp
        ball.vel.x = config.ball_speed * (hit_pos - 0.5) * 2.0;
    }

    // First visible overlap in row-major order wins; one brick per tick
    let hit = next
        .bricks
        .iter()
        .position(|brick| brick.visible && ball_brick_collision(&next.ball, brick));

    if let Some(index) = hit {
        let bricks = Arc::make_mut(&mut next.bricks);
        let brick = &mut bricks[index];
        brick.visible = false;
        let (center, color, points) = (brick.center(), brick.color, brick.points);

        next.ball.vel.y = -next.ball.vel.y;
        next.score += points;
        next.particles.extend(particles::spawn_burst(center, color, rng));
        events.push(GameEvent::BrickDestroyed { index, points });
    }
}

/// Has the ball gone past the loss threshold for the configured rule
pub fn ball_lost(state: &GameState, config: &GameConfig) -> bool {
    let ball = &state.ball;
    match config.loss_rule {
        LossRule::BelowPaddle => ball.pos.y > state.paddle.pos.y + ball.radius * 2.0,
        LossRule::BelowCanvas => ball.pos.y > config.canvas_height,
    }
}

fn raise_high_score(state: &mut GameState, events: &mut Vec<GameEvent>) {
    if state.score > state.high_score {
        state.high_score = state.score;
        events.push(GameEvent::HighScoreRaised(state.score));
    }
}
