//! Core types shared across the application.
//!
//! This crate contains pure data types, constants, and the game
//! configuration. It has no dependencies so every other crate can use it.

use std::fmt;

/// World dimensions (logical pixels, mapped to terminal cells by the view).
pub const WORLD_WIDTH: f32 = 820.0;
pub const WORLD_HEIGHT: f32 = 600.0;
pub const MARGIN_X: f32 = 100.0;
pub const MARGIN_Y: f32 = 50.0;
pub const NUM_LANES: usize = 5;

/// Game timing constants (in milliseconds).
pub const TICK_MS: u32 = 16;

/// Minimum interval between accepted lane changes.
pub const MOVE_COOLDOWN_MS: u32 = 300;
/// Interval imposed after catching a wrong fruit (or an apple while blocked).
pub const PENALTY_COOLDOWN_MS: u32 = 2000;

/// Fruit is eligible for catching once its y passes this line.
pub const CATCH_LINE_Y: f32 = WORLD_HEIGHT - MARGIN_Y - 100.0;

/// Apple (desirable fruit) inter-arrival delay: drawn uniformly from
/// `[APPLE_DELAY_MIN_MS, apple_max_delay_ms(level)]`.
pub const APPLE_DELAY_MIN_MS: u32 = 400;
pub const APPLE_DELAY_MAX_BASE_MS: u32 = 2000;
pub const APPLE_DELAY_MAX_STEP_MS: u32 = 150;
pub const APPLE_DELAY_MAX_FLOOR_MS: u32 = 600;

/// Wrong-fruit spawn window: shrinks linearly with level down to a floor.
pub const WRONG_DELAY_BASE_MS: u32 = 2500;
pub const WRONG_DELAY_STEP_MS: u32 = 200;
pub const WRONG_DELAY_FLOOR_MS: u32 = 800;

/// Wrong-fruit spawn chance per elapsed window, capped.
pub const WRONG_CHANCE_BASE: f32 = 0.35;
pub const WRONG_CHANCE_STEP: f32 = 0.05;
pub const WRONG_CHANCE_CAP: f32 = 0.85;
/// Above this level a failed draw forces the next attempt to spawn.
pub const WRONG_FORCE_LEVEL: u32 = 4;

/// Lane-occupancy window: lanes used in the window are off limits for new
/// spawns. Clears faster at higher levels.
pub const OCCUPANCY_WINDOW_BASE_MS: u32 = 1500;
pub const OCCUPANCY_WINDOW_STEP_MS: u32 = 100;
pub const OCCUPANCY_WINDOW_FLOOR_MS: u32 = 500;

/// Fruit fall speed curve (px/sec): `min(MAX, BASE + level * PER_LEVEL)`.
pub const FRUIT_BASE_SPEED: f32 = 200.0;
pub const FRUIT_SPEED_PER_LEVEL: f32 = 30.0;
pub const FRUIT_MAX_SPEED: f32 = 480.0;

/// Sprite dimensions (world pixels).
pub const PLAYER_WIDTH: f32 = 80.0;
pub const PLAYER_HEIGHT: f32 = 100.0;
pub const APPLE_SIZE: f32 = 60.0;
pub const BANANA_SIZE: f32 = 80.0;
pub const ORANGE_SIZE: f32 = 60.0;

/// Session defaults.
pub const TIMER_SECONDS: u32 = 30;
pub const POINTS_PER_CATCH: u32 = 10;
pub const LEVEL_SCORE_THRESHOLD: u32 = 100;
pub const START_LANE: usize = 2;

/// Fruit kinds. Only the apple rewards points; the others penalize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FruitKind {
    Apple,
    Banana,
    Orange,
}

impl FruitKind {
    /// Whether catching this fruit rewards points.
    pub fn is_apple(&self) -> bool {
        matches!(self, FruitKind::Apple)
    }

    /// Hitbox width/height (square sprites).
    pub fn size(&self) -> f32 {
        match self {
            FruitKind::Apple => APPLE_SIZE,
            FruitKind::Banana => BANANA_SIZE,
            FruitKind::Orange => ORANGE_SIZE,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FruitKind::Apple => "apple",
            FruitKind::Banana => "banana",
            FruitKind::Orange => "orange",
        }
    }
}

/// Session phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    MainMenu,
    Playing,
    Paused,
    GameOver,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::MainMenu => "main_menu",
            GamePhase::Playing => "playing",
            GamePhase::Paused => "paused",
            GamePhase::GameOver => "game_over",
        }
    }
}

/// Player-facing actions produced by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    Confirm,
    Pause,
    Restart,
    ToggleDiagnostics,
}

impl GameAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::Confirm => "confirm",
            GameAction::Pause => "pause",
            GameAction::Restart => "restart",
            GameAction::ToggleDiagnostics => "toggleDiagnostics",
        }
    }
}

/// Discrete events emitted by a session tick, consumed by observers
/// (cue playback, logging).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    AppleCaught { points: u32 },
    WrongCatch,
    LevelUp { level: u32 },
    TimesUp,
}

/// Audio cue signals. The core only decides *when*; presentation decides how.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Catch,
    Ouch,
    LevelUp,
    TimesUp,
}

impl GameEvent {
    pub fn cue(&self) -> Cue {
        match self {
            GameEvent::AppleCaught { .. } => Cue::Catch,
            GameEvent::WrongCatch => Cue::Ouch,
            GameEvent::LevelUp { .. } => Cue::LevelUp,
            GameEvent::TimesUp => Cue::TimesUp,
        }
    }
}

/// Static session configuration, validated once at setup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    pub width: f32,
    pub height: f32,
    pub margin_x: f32,
    pub margin_y: f32,
    pub lanes: usize,
    pub timer_seconds: u32,
    pub points_per_catch: u32,
    pub level_score_threshold: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: WORLD_WIDTH,
            height: WORLD_HEIGHT,
            margin_x: MARGIN_X,
            margin_y: MARGIN_Y,
            lanes: NUM_LANES,
            timer_seconds: TIMER_SECONDS,
            points_per_catch: POINTS_PER_CATCH,
            level_score_threshold: LEVEL_SCORE_THRESHOLD,
        }
    }
}

impl GameConfig {
    /// Fail fast on configurations the simulation is not defined for.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.lanes < 2 {
            return Err(ConfigError::InvalidConfiguration(
                "at least two lanes are required",
            ));
        }
        if self.lanes > 16 {
            // Lane occupancy is tracked in a 16-bit mask.
            return Err(ConfigError::InvalidConfiguration("too many lanes (max 16)"));
        }
        if !(self.width > 0.0) || !(self.height > 0.0) {
            return Err(ConfigError::InvalidConfiguration(
                "screen dimensions must be positive",
            ));
        }
        if !(self.margin_x >= 0.0) || self.width <= 2.0 * self.margin_x {
            return Err(ConfigError::InvalidConfiguration(
                "horizontal margins leave no usable width",
            ));
        }
        if !(self.margin_y >= 0.0) || self.height <= self.margin_y {
            return Err(ConfigError::InvalidConfiguration(
                "vertical margin leaves no play area",
            ));
        }
        if self.timer_seconds == 0 {
            return Err(ConfigError::InvalidConfiguration(
                "timer duration must be non-zero",
            ));
        }
        if self.level_score_threshold == 0 || self.points_per_catch == 0 {
            return Err(ConfigError::InvalidConfiguration(
                "scoring parameters must be non-zero",
            ));
        }
        Ok(())
    }
}

/// Construction-time configuration failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    InvalidConfiguration(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidConfiguration(reason) => {
                write!(f, "invalid configuration: {reason}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
