//! Game session: phases, scoring, cooldowns, and the per-tick pipeline.
//!
//! The session owns the whole in-memory object graph (player, fruit list,
//! timer, spawn controller) and mutates it synchronously between frames:
//! input -> spawn -> fall -> collide -> score/level -> render (elsewhere).
//! The loop feeds it real elapsed milliseconds, so nothing here depends on
//! the frame rate.

use arrayvec::ArrayVec;

use crate::entity::{Fruit, Player};
use crate::lanes::LaneGrid;
use crate::spawn::{fruit_speed, SpawnController};
use crate::timer::CountdownTimer;
use tui_eureka_types::{
    ConfigError, GameAction, GameConfig, GameEvent, GamePhase, CATCH_LINE_Y, MOVE_COOLDOWN_MS,
    PENALTY_COOLDOWN_MS,
};

/// Events emitted by one tick, in order of occurrence.
pub type TickEvents = ArrayVec<GameEvent, 8>;

/// Explicit diagnostics for the render step (replaces ambient debug state).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Diagnostics {
    pub frame_ms: u32,
    pub fruit_count: usize,
    pub occupied_lanes: u16,
    pub level_score: u32,
    pub move_cooldown_ms: u32,
}

/// Complete game session state.
#[derive(Debug, Clone)]
pub struct GameSession {
    config: GameConfig,
    phase: GamePhase,
    lanes: LaneGrid,
    player: Player,
    fruits: Vec<Fruit>,
    spawner: SpawnController,
    timer: CountdownTimer,
    level: u32,
    score: u32,
    level_score: u32,
    /// Required interval before the next accepted move.
    move_cooldown_ms: u32,
    /// Elapsed since the last accepted move (or penalty).
    since_move_ms: u32,
    /// Monotonic session id (increments on restart).
    episode_id: u32,
}

impl GameSession {
    /// Create a new session in the main menu. Fails fast on invalid config.
    pub fn new(config: GameConfig, seed: u32) -> Result<Self, ConfigError> {
        let lanes = LaneGrid::new(&config)?;
        let spawner = SpawnController::new(&config, seed)?;
        let player = Player::new(&lanes, config.points_per_catch);

        Ok(Self {
            phase: GamePhase::MainMenu,
            player,
            fruits: Vec::with_capacity(32),
            spawner,
            timer: CountdownTimer::new(config.timer_seconds),
            level: 1,
            score: 0,
            level_score: 0,
            move_cooldown_ms: MOVE_COOLDOWN_MS,
            since_move_ms: MOVE_COOLDOWN_MS,
            episode_id: 0,
            lanes,
            config,
        })
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn level_score(&self) -> u32 {
        self.level_score
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn timer(&self) -> &CountdownTimer {
        &self.timer
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn fruits(&self) -> &[Fruit] {
        &self.fruits
    }

    pub fn lanes(&self) -> &LaneGrid {
        &self.lanes
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Required wait between accepted moves (ms). 300 normally, 2000 while a
    /// penalty is pending.
    pub fn move_cooldown_ms(&self) -> u32 {
        self.move_cooldown_ms
    }

    /// Whether the move cooldown has elapsed since the last accepted move.
    pub fn can_move(&self) -> bool {
        self.since_move_ms >= self.move_cooldown_ms
    }

    /// Snapshot diagnostics for this frame.
    pub fn diagnostics(&self, frame_ms: u32) -> Diagnostics {
        Diagnostics {
            frame_ms,
            fruit_count: self.fruits.len(),
            occupied_lanes: self.spawner.occupied_mask(),
            level_score: self.level_score,
            move_cooldown_ms: self.move_cooldown_ms,
        }
    }

    /// Advance the session by elapsed wall-clock time. Only the Playing
    /// phase simulates; every other phase is inert.
    pub fn tick(&mut self, elapsed_ms: u32) -> TickEvents {
        let mut events = TickEvents::new();

        if self.phase != GamePhase::Playing {
            return events;
        }

        // Countdown first: a finished timer ends the session before any new
        // fruit or catches happen on this tick.
        self.timer.update(elapsed_ms);
        if self.timer.is_finished() {
            self.phase = GamePhase::GameOver;
            events.push(GameEvent::TimesUp);
            return events;
        }

        // Move cooldown bookkeeping. Once a penalty has fully elapsed the
        // required interval returns to the base value.
        self.since_move_ms = self.since_move_ms.saturating_add(elapsed_ms);
        if self.can_move() && self.move_cooldown_ms > MOVE_COOLDOWN_MS {
            self.move_cooldown_ms = MOVE_COOLDOWN_MS;
        }
        let movable = self.can_move();
        self.player.set_can_move(movable);

        // Spawn new fruit.
        let spawned = self.spawner.update(elapsed_ms, self.level, &self.lanes);
        self.fruits.extend(spawned);

        // Advance fruit and resolve catches. Swap-remove keeps the cleanup
        // pass O(n) without preserving order (order is irrelevant).
        let mut i = 0;
        while i < self.fruits.len() {
            self.fruits[i].update(elapsed_ms);
            let fruit = self.fruits[i];

            let catchable = fruit.body.y >= CATCH_LINE_Y && fruit.body.intersects(&self.player.body);
            if catchable {
                self.fruits.swap_remove(i);
                self.resolve_catch(fruit, &mut events);
                continue;
            }

            if fruit.body.y > self.config.height + self.config.margin_y {
                // Missed: out the bottom, no scoring.
                self.fruits.swap_remove(i);
                continue;
            }

            i += 1;
        }

        events
    }

    fn resolve_catch(&mut self, fruit: Fruit, events: &mut TickEvents) {
        if fruit.kind.is_apple() && self.player.can_move() {
            let points = self.player.points();
            self.score += points;
            self.level_score += points;
            // A good catch restores the base cooldown.
            self.move_cooldown_ms = MOVE_COOLDOWN_MS;
            push_event(events, GameEvent::AppleCaught { points });

            if self.level_score >= self.config.level_score_threshold {
                self.level += 1;
                self.level_score = 0;
                self.timer.reset();
                push_event(events, GameEvent::LevelUp { level: self.level });
            }
        } else {
            // Wrong fruit, or an apple caught while movement is disabled:
            // both count as a penalty. An already-pending equal-or-larger
            // cooldown is left untouched, so repeat hits cannot extend it.
            if self.move_cooldown_ms < PENALTY_COOLDOWN_MS {
                self.move_cooldown_ms = PENALTY_COOLDOWN_MS;
                self.since_move_ms = 0;
                self.player.set_can_move(false);
            }
            push_event(events, GameEvent::WrongCatch);
        }
    }

    /// Apply a player action. Returns whether the action had an effect.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match (self.phase, action) {
            (GamePhase::MainMenu, GameAction::Confirm) => {
                self.start_session();
                true
            }
            (GamePhase::Playing, GameAction::MoveLeft) => self.try_move(|p, lanes| {
                p.move_left(lanes);
            }),
            (GamePhase::Playing, GameAction::MoveRight) => self.try_move(|p, lanes| {
                p.move_right(lanes);
            }),
            (GamePhase::Playing, GameAction::Pause) => {
                self.phase = GamePhase::Paused;
                true
            }
            (GamePhase::Paused, GameAction::Pause) | (GamePhase::Paused, GameAction::Confirm) => {
                self.phase = GamePhase::Playing;
                true
            }
            (GamePhase::Playing, GameAction::Restart)
            | (GamePhase::GameOver, GameAction::Confirm)
            | (GamePhase::GameOver, GameAction::Restart) => {
                self.start_session();
                true
            }
            _ => false,
        }
    }

    /// Begin a fresh session: zeroed scores, full timer, recentered player,
    /// continued RNG stream so "play again" does not replay the last game.
    fn start_session(&mut self) {
        let seed = self.spawner.rng_state();
        // Constructor succeeded once with this config; it cannot fail now.
        self.spawner = SpawnController::new(&self.config, seed)
            .unwrap_or_else(|_| unreachable!("config validated at construction"));
        self.player = Player::new(&self.lanes, self.config.points_per_catch);
        self.fruits.clear();
        self.timer.reset();
        self.level = 1;
        self.score = 0;
        self.level_score = 0;
        self.move_cooldown_ms = MOVE_COOLDOWN_MS;
        self.since_move_ms = MOVE_COOLDOWN_MS;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.phase = GamePhase::Playing;
    }

    fn try_move(&mut self, mover: impl FnOnce(&mut Player, &LaneGrid)) -> bool {
        if !self.can_move() {
            return false;
        }
        mover(&mut self.player, &self.lanes);
        self.since_move_ms = 0;
        true
    }

    /// Fall speed fruit will spawn with at the current level.
    pub fn current_fruit_speed(&self) -> f32 {
        fruit_speed(self.level)
    }

    #[cfg(test)]
    pub(crate) fn push_fruit(&mut self, fruit: Fruit) {
        self.fruits.push(fruit);
    }

    #[cfg(test)]
    pub(crate) fn set_level_score(&mut self, score: u32) {
        self.level_score = score;
    }
}

fn push_event(events: &mut TickEvents, event: GameEvent) {
    // Event overflow in one tick would mean dozens of simultaneous catches;
    // dropping the excess is harmless for observers.
    let _ = events.try_push(event);
}
