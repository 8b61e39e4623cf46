//! Game configuration
//!
//! Geometry, speeds, brick layout and loss rule. Loaded from JSON; every
//! field falls back to the defaults in [`crate::consts`].

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::Color;

/// Neon palette, one color per brick row (top row first)
pub const DEFAULT_PALETTE: [Color; 6] = [
    Color(0xff0080), // pink
    Color(0x00ff80), // green
    Color(0x0080ff), // blue
    Color(0xff8000), // orange
    Color(0x8000ff), // purple
    Color(0xffff00), // yellow
];

/// When a free ball counts as lost
///
/// The two rules disagree on where the ball is "gone": just below the paddle
/// line, or below the bottom edge of the canvas. With the default layout the
/// paddle sits 100px above the bottom, so `BelowCanvas` lets the ball travel
/// visibly further before a life is taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LossRule {
    /// `ball.y > paddle.y + 2 * radius`
    #[default]
    BelowPaddle,
    /// `ball.y > canvas_height`
    BelowCanvas,
}

impl LossRule {
    pub fn as_str(&self) -> &'static str {
        match self {
            LossRule::BelowPaddle => "below-paddle",
            LossRule::BelowCanvas => "below-canvas",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "below-paddle" | "paddle" => Some(LossRule::BelowPaddle),
            "below-canvas" | "canvas" => Some(LossRule::BelowCanvas),
            _ => None,
        }
    }
}

/// Brick grid layout parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrickLayout {
    pub rows: u32,
    pub cols: u32,
    pub brick_width: f32,
    pub brick_height: f32,
    pub padding: f32,
    /// Y of the top row
    pub top_offset: f32,
    /// Row colors, indexed by row (cycled when shorter than `rows`)
    pub palette: Vec<Color>,
}

impl Default for BrickLayout {
    fn default() -> Self {
        Self {
            rows: BRICK_ROWS,
            cols: BRICK_COLS,
            brick_width: BRICK_WIDTH,
            brick_height: BRICK_HEIGHT,
            padding: BRICK_PADDING,
            top_offset: BRICK_TOP_OFFSET,
            palette: DEFAULT_PALETTE.to_vec(),
        }
    }
}

/// Full game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Canvas ===
    pub canvas_width: f32,
    pub canvas_height: f32,

    // === Paddle ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Paddle top edge distance from the canvas bottom
    pub paddle_bottom_offset: f32,
    /// Keyboard movement per timer step
    pub paddle_key_step: f32,

    // === Ball ===
    pub ball_radius: f32,
    /// Per-tick speed used for launch and paddle spin
    pub ball_speed: f32,
    pub launch_dx_factor: f32,

    // === Rules ===
    pub starting_lives: u8,
    pub loss_rule: LossRule,

    // === Bricks ===
    pub bricks: BrickLayout,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_bottom_offset: PADDLE_BOTTOM_OFFSET,
            paddle_key_step: PADDLE_KEY_STEP,

            ball_radius: BALL_RADIUS,
            ball_speed: BALL_SPEED,
            launch_dx_factor: LAUNCH_DX_FACTOR,

            starting_lives: STARTING_LIVES,
            loss_rule: LossRule::BelowPaddle,

            bricks: BrickLayout::default(),
        }
    }
}

/// Failure to read or parse a config file
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "failed to read config: {e}"),
            Self::Parse(e) => write!(f, "invalid config JSON: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}

impl GameConfig {
    /// Parse a (possibly partial) JSON config and sanitize it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        Ok(config.sanitized())
    }

    /// Load a config file from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Paddle top edge y for this canvas
    pub fn paddle_y(&self) -> f32 {
        self.canvas_height - self.paddle_bottom_offset
    }

    /// Rightmost legal paddle x
    pub fn paddle_max_x(&self) -> f32 {
        (self.canvas_width - self.paddle_width).max(0.0)
    }

    /// Replace non-finite or non-positive geometry with defaults.
    ///
    /// The simulation assumes finite inputs; this is the boundary that
    /// guarantees them.
    pub fn sanitized(mut self) -> Self {
        let defaults = GameConfig::default();

        fn fix(name: &str, value: &mut f32, fallback: f32, allow_zero: bool) {
            let ok = value.is_finite() && (*value > 0.0 || (allow_zero && *value == 0.0));
            if !ok {
                log::warn!("Config field {name} = {value} is invalid, using {fallback}");
                *value = fallback;
            }
        }

        fix("canvas_width", &mut self.canvas_width, defaults.canvas_width, false);
        fix("canvas_height", &mut self.canvas_height, defaults.canvas_height, false);
        fix("paddle_width", &mut self.paddle_width, defaults.paddle_width, false);
        fix("paddle_height", &mut self.paddle_height, defaults.paddle_height, false);
        fix(
            "paddle_bottom_offset",
            &mut self.paddle_bottom_offset,
            defaults.paddle_bottom_offset,
            true,
        );
        fix("paddle_key_step", &mut self.paddle_key_step, defaults.paddle_key_step, false);
        fix("ball_radius", &mut self.ball_radius, defaults.ball_radius, false);
        fix("ball_speed", &mut self.ball_speed, defaults.ball_speed, false);
        fix(
            "launch_dx_factor",
            &mut self.launch_dx_factor,
            defaults.launch_dx_factor,
            true,
        );

        let b = &mut self.bricks;
        let db = &defaults.bricks;
        fix("bricks.brick_width", &mut b.brick_width, db.brick_width, false);
        fix("bricks.brick_height", &mut b.brick_height, db.brick_height, false);
        fix("bricks.padding", &mut b.padding, db.padding, true);
        fix("bricks.top_offset", &mut b.top_offset, db.top_offset, true);
        if b.palette.is_empty() {
            log::warn!("Config bricks.palette is empty, using default palette");
            b.palette = db.palette.clone();
        }

        if b.rows > MAX_BRICK_ROWS || b.cols > MAX_BRICK_COLS {
            log::warn!(
                "Config brick grid {}x{} is too large, clamping to {MAX_BRICK_ROWS}x{MAX_BRICK_COLS}",
                b.rows,
                b.cols
            );
            b.rows = b.rows.min(MAX_BRICK_ROWS);
            b.cols = b.cols.min(MAX_BRICK_COLS);
        }

        if self.starting_lives == 0 || self.starting_lives > STARTING_LIVES {
            log::warn!(
                "Config starting_lives = {} is out of range, using {}",
                self.starting_lives,
                STARTING_LIVES
            );
            self.starting_lives = STARTING_LIVES;
        }

        self
    }
}
