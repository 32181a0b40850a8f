//! Property tests over the simulation invariants.

use proptest::prelude::*;

use tui_eureka::core::spawn::{apple_max_delay_ms, occupancy_window_ms, wrong_chance};
use tui_eureka::core::{fruit_speed, CountdownTimer, GameSession, SimpleRng};
use tui_eureka::types::{
    GameAction, GameConfig, GamePhase, APPLE_DELAY_MAX_FLOOR_MS, FRUIT_MAX_SPEED, NUM_LANES,
    OCCUPANCY_WINDOW_FLOOR_MS, WRONG_CHANCE_CAP,
};

proptest! {
    #[test]
    fn curve_values_stay_in_band(level in 1u32..10_000) {
        prop_assert!(apple_max_delay_ms(level) >= APPLE_DELAY_MAX_FLOOR_MS);
        prop_assert!(occupancy_window_ms(level) >= OCCUPANCY_WINDOW_FLOOR_MS);
        prop_assert!(wrong_chance(level) <= WRONG_CHANCE_CAP);
        prop_assert!(fruit_speed(level) <= FRUIT_MAX_SPEED);
    }

    #[test]
    fn rng_range_is_bounded(seed in any::<u32>(), lo in 0u32..1_000, span in 0u32..1_000) {
        let mut rng = SimpleRng::new(seed);
        let hi = lo + span;
        for _ in 0..100 {
            let v = rng.next_range_inclusive(lo, hi);
            prop_assert!(v >= lo && v <= hi);
        }
    }

    #[test]
    fn timer_never_underflows(steps in proptest::collection::vec(0u32..5_000, 1..200)) {
        let mut timer = CountdownTimer::new(30);
        for step in steps {
            timer.update(step);
            prop_assert!(timer.remaining_seconds() <= 30);
        }
    }

    #[test]
    fn session_survives_arbitrary_input(
        seed in any::<u32>(),
        steps in proptest::collection::vec((0u32..200, 0u8..6), 1..400),
    ) {
        let config = GameConfig::default();
        let mut session = GameSession::new(config, seed).unwrap();
        session.apply_action(GameAction::Confirm);

        for (elapsed, key) in steps {
            let action = match key {
                0 => GameAction::MoveLeft,
                1 => GameAction::MoveRight,
                2 => GameAction::Confirm,
                3 => GameAction::Pause,
                4 => GameAction::Restart,
                _ => GameAction::ToggleDiagnostics,
            };
            session.apply_action(action);
            session.tick(elapsed);

            prop_assert!(session.player().lane() < NUM_LANES);
            prop_assert_eq!(session.score() % config.points_per_catch, 0);
            prop_assert!(session.level() >= 1);
            if session.phase() == GamePhase::GameOver {
                prop_assert!(session.timer().is_finished());
            }
        }
    }
}
