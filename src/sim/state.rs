//! Game state and core simulation types
//!
//! A `GameState` is a plain value: the tick and every command take one by
//! reference and hand back a new one.

use std::fmt;
use std::sync::Arc;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::bricks::build_brick_grid;
use crate::settings::GameConfig;

/// Current status of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameStatus {
    /// Fresh session, ball resting on the paddle
    Start,
    /// Active gameplay
    Playing,
    /// Game is paused
    Paused,
    /// Out of lives
    GameOver,
    /// Every brick destroyed
    Win,
}

impl GameStatus {
    /// GAME_OVER and WIN accept no ticks until reset
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameStatus::GameOver | GameStatus::Win)
    }
}

/// 24-bit RGB color, serialized as `"#rrggbb"`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(pub u32);

impl Color {
    /// Parse `#rrggbb` (leading `#` optional)
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        u32::from_str_radix(hex, 16).ok().map(Color)
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        (
            ((self.0 >> 16) & 0xff) as u8,
            ((self.0 >> 8) & 0xff) as u8,
            (self.0 & 0xff) as u8,
        )
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0 & 0xff_ffff)
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Color::from_hex(&s).ok_or_else(|| format!("invalid color {s:?}, expected #rrggbb"))
    }
}

impl From<Color> for String {
    fn from(c: Color) -> Self {
        c.to_string()
    }
}

/// The ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Center
    pub pos: Vec2,
    /// Per-tick displacement
    pub vel: Vec2,
    pub radius: f32,
    /// False while resting on the paddle
    pub launched: bool,
}

impl Ball {
    /// A ball resting above the paddle center with no velocity
    pub fn resting_on(paddle: &Paddle, radius: f32) -> Self {
        Self {
            pos: paddle.rest_point(),
            vel: Vec2::ZERO,
            radius,
            launched: false,
        }
    }
}

/// The player's paddle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    /// Centered horizontally at the configured height
    pub fn centered(config: &GameConfig) -> Self {
        Self {
            pos: Vec2::new(
                config.canvas_width / 2.0 - config.paddle_width / 2.0,
                config.paddle_y(),
            ),
            width: config.paddle_width,
            height: config.paddle_height,
        }
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.pos.x + self.width / 2.0
    }

    /// Where a resting ball sits
    pub fn rest_point(&self) -> Vec2 {
        Vec2::new(self.center_x(), self.pos.y - crate::consts::BALL_REST_OFFSET)
    }
}

/// A destructible brick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub color: Color,
    pub visible: bool,
    pub points: u64,
}

impl Brick {
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }
}

/// A particle for visual effects (no gameplay effect)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Ticks remaining
    pub life: u32,
    /// Starting life, for fade ratio
    pub max_life: u32,
    pub color: Color,
}

impl Particle {
    /// Remaining life in 0..=1 for alpha fading
    pub fn fade(&self) -> f32 {
        if self.max_life == 0 {
            0.0
        } else {
            self.life as f32 / self.max_life as f32
        }
    }
}

/// Something the host may want to react to (sound, persistence)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    BrickDestroyed { index: usize, points: u64 },
    LifeLost { remaining: u8 },
    GameOver,
    Win,
    /// High score raised to this value; persist it
    HighScoreRaised(u64),
}

/// Complete game state snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub ball: Ball,
    pub paddle: Paddle,
    /// Row-major, never shrinks. Shared until a brick changes.
    pub bricks: Arc<Vec<Brick>>,
    pub particles: Vec<Particle>,
    pub score: u64,
    pub lives: u8,
    pub high_score: u64,
    pub status: GameStatus,
}

impl GameState {
    /// Fresh session state carrying over `high_score`
    pub fn new(config: &GameConfig, high_score: u64) -> Self {
        let paddle = Paddle::centered(config);
        Self {
            ball: Ball::resting_on(&paddle, config.ball_radius),
            paddle,
            bricks: Arc::new(build_brick_grid(config.canvas_width, &config.bricks)),
            particles: Vec::new(),
            score: 0,
            lives: config.starting_lives,
            high_score,
            status: GameStatus::Start,
        }
    }

    pub fn visible_bricks(&self) -> usize {
        self.bricks.iter().filter(|b| b.visible).count()
    }
}
