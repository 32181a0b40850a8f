//! Spawn controller: the difficulty-curve core of the game.
//!
//! Once per tick it decides whether to emit zero, one, or two fruit (at most
//! one apple and one wrong fruit), parameterized by the current level:
//!
//! - apple inter-arrival delay is drawn uniformly from a window whose upper
//!   bound shrinks linearly with level down to a floor;
//! - the wrong-fruit window shrinks linearly with level, and each elapsed
//!   window rolls a Bernoulli draw whose success probability grows with
//!   level up to a cap, with a forced spawn at high levels when the
//!   previous draw failed;
//! - lanes used within the current occupancy window are off limits, and the
//!   window clears on a level-scaled cadence.
//!
//! All decisions are driven by accumulated elapsed milliseconds, never frame
//! counts. The controller mutates only its own state and returns new fruit
//! by value.

use arrayvec::ArrayVec;

use crate::entity::Fruit;
use crate::lanes::LaneGrid;
use crate::rng::SimpleRng;
use tui_eureka_types::{
    ConfigError, FruitKind, GameConfig, APPLE_DELAY_MAX_BASE_MS, APPLE_DELAY_MAX_FLOOR_MS,
    APPLE_DELAY_MAX_STEP_MS, APPLE_DELAY_MIN_MS, FRUIT_BASE_SPEED, FRUIT_MAX_SPEED,
    FRUIT_SPEED_PER_LEVEL, OCCUPANCY_WINDOW_BASE_MS, OCCUPANCY_WINDOW_FLOOR_MS,
    OCCUPANCY_WINDOW_STEP_MS, WRONG_CHANCE_BASE, WRONG_CHANCE_CAP, WRONG_CHANCE_STEP,
    WRONG_DELAY_BASE_MS, WRONG_DELAY_FLOOR_MS, WRONG_DELAY_STEP_MS, WRONG_FORCE_LEVEL,
};

/// Upper bound of the apple inter-arrival window for a level (ms).
/// Non-increasing in level, clamped to a floor.
pub fn apple_max_delay_ms(level: u32) -> u32 {
    let level = level.max(1);
    APPLE_DELAY_MAX_BASE_MS
        .saturating_sub((level - 1).saturating_mul(APPLE_DELAY_MAX_STEP_MS))
        .max(APPLE_DELAY_MAX_FLOOR_MS)
}

/// Wrong-fruit attempt window for a level (ms). Non-increasing, floored.
pub fn wrong_delay_ms(level: u32) -> u32 {
    let level = level.max(1);
    WRONG_DELAY_BASE_MS
        .saturating_sub((level - 1).saturating_mul(WRONG_DELAY_STEP_MS))
        .max(WRONG_DELAY_FLOOR_MS)
}

/// Probability that an elapsed wrong-fruit window actually spawns. Grows
/// linearly with level, capped.
pub fn wrong_chance(level: u32) -> f32 {
    let level = level.max(1);
    (WRONG_CHANCE_BASE + (level - 1) as f32 * WRONG_CHANCE_STEP).min(WRONG_CHANCE_CAP)
}

/// How long spawned lanes stay reserved (ms). Shorter at higher levels.
pub fn occupancy_window_ms(level: u32) -> u32 {
    let level = level.max(1);
    OCCUPANCY_WINDOW_BASE_MS
        .saturating_sub((level - 1).saturating_mul(OCCUPANCY_WINDOW_STEP_MS))
        .max(OCCUPANCY_WINDOW_FLOOR_MS)
}

/// Fall speed for a level (px/sec): `min(MAX, BASE + level * PER_LEVEL)`.
pub fn fruit_speed(level: u32) -> f32 {
    (FRUIT_BASE_SPEED + level as f32 * FRUIT_SPEED_PER_LEVEL).min(FRUIT_MAX_SPEED)
}

/// Level-parameterized spawn decision state.
#[derive(Debug, Clone)]
pub struct SpawnController {
    rng: SimpleRng,
    /// Elapsed since the last apple spawn.
    apple_elapsed_ms: u32,
    /// Randomized delay the current apple window must reach.
    apple_next_delay_ms: u32,
    /// Elapsed since the last wrong-fruit attempt.
    wrong_elapsed_ms: u32,
    /// Whether the previous wrong-fruit draw came up empty.
    wrong_last_draw_failed: bool,
    /// Bitmask of lanes used in the current occupancy window.
    occupied: u16,
    occupancy_elapsed_ms: u32,
}

impl SpawnController {
    pub fn new(config: &GameConfig, seed: u32) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = SimpleRng::new(seed);
        let apple_next_delay_ms =
            rng.next_range_inclusive(APPLE_DELAY_MIN_MS, apple_max_delay_ms(1));

        Ok(Self {
            rng,
            apple_elapsed_ms: 0,
            apple_next_delay_ms,
            wrong_elapsed_ms: 0,
            wrong_last_draw_failed: false,
            occupied: 0,
            occupancy_elapsed_ms: 0,
        })
    }

    /// Advance spawn timers and emit any fruit due this tick.
    pub fn update(&mut self, elapsed_ms: u32, level: u32, lanes: &LaneGrid) -> ArrayVec<Fruit, 2> {
        let mut spawned = ArrayVec::new();
        let level = level.max(1);

        // Occupancy window clears on a level-scaled cadence.
        self.occupancy_elapsed_ms = self.occupancy_elapsed_ms.saturating_add(elapsed_ms);
        if self.occupancy_elapsed_ms >= occupancy_window_ms(level) {
            self.occupied = 0;
            self.occupancy_elapsed_ms = 0;
        }

        let speed = fruit_speed(level);

        // Apple: fixed schedule with a randomized delay per window.
        self.apple_elapsed_ms = self.apple_elapsed_ms.saturating_add(elapsed_ms);
        if self.apple_elapsed_ms >= self.apple_next_delay_ms {
            if let Some(lane) = self.pick_free_lane(lanes.len()) {
                spawned.push(Fruit::new(FruitKind::Apple, lanes.x(lane), speed));
                self.occupied |= 1 << lane;
                self.apple_elapsed_ms = 0;
                self.apple_next_delay_ms = self
                    .rng
                    .next_range_inclusive(APPLE_DELAY_MIN_MS, apple_max_delay_ms(level));
            }
            // All lanes reserved: skip this tick, retry on the next one.
        }

        // Wrong fruit: each elapsed window is an attempt, not a guarantee.
        self.wrong_elapsed_ms = self.wrong_elapsed_ms.saturating_add(elapsed_ms);
        if self.wrong_elapsed_ms >= wrong_delay_ms(level) {
            let forced = self.wrong_last_draw_failed && level > WRONG_FORCE_LEVEL;
            if forced || self.rng.chance(wrong_chance(level)) {
                if let Some(lane) = self.pick_free_lane(lanes.len()) {
                    let kind = if self.rng.next_range(2) == 0 {
                        FruitKind::Banana
                    } else {
                        FruitKind::Orange
                    };
                    spawned.push(Fruit::new(kind, lanes.x(lane), speed));
                    self.occupied |= 1 << lane;
                    self.wrong_elapsed_ms = 0;
                    self.wrong_last_draw_failed = false;
                }
            } else {
                self.wrong_last_draw_failed = true;
                self.wrong_elapsed_ms = 0;
            }
        }

        spawned
    }

    /// Lanes reserved in the current window (diagnostics).
    pub fn occupied_mask(&self) -> u16 {
        self.occupied
    }

    /// Current RNG state, used to seed the next session on restart.
    pub fn rng_state(&self) -> u32 {
        self.rng.state()
    }

    fn pick_free_lane(&mut self, num_lanes: usize) -> Option<usize> {
        let mut free: ArrayVec<u8, 16> = ArrayVec::new();
        for lane in 0..num_lanes {
            if self.occupied & (1 << lane) == 0 {
                free.push(lane as u8);
            }
        }
        if free.is_empty() {
            return None;
        }
        let idx = self.rng.next_range(free.len() as u32) as usize;
        Some(free[idx] as usize)
    }

    #[cfg(test)]
    pub fn force_wrong_draw_failed(&mut self) {
        self.wrong_last_draw_failed = true;
    }

    #[cfg(test)]
    pub fn occupy_all_lanes(&mut self, num_lanes: usize) {
        for lane in 0..num_lanes {
            self.occupied |= 1 << lane;
        }
        self.occupancy_elapsed_ms = 0;
    }
}
