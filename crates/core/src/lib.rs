//! Core game logic - pure, deterministic, and testable.
//!
//! This crate contains the whole simulation: lane grid, countdown timer,
//! entities, spawn controller, and the session state machine. It has no
//! dependencies on UI or I/O, making it:
//!
//! - **Deterministic**: same seed produces the same spawn schedule
//! - **Frame-rate independent**: every timer consumes elapsed wall-clock
//!   milliseconds fed in by the loop, never frame counts
//! - **Portable**: runs in any environment (terminal, headless, tests)
//!
//! # Module structure
//!
//! - [`lanes`]: fixed horizontal anchors derived from the configuration
//! - [`timer`]: one-second-resolution countdown with millisecond carry
//! - [`entity`]: player and fruit with centered-AABB collision
//! - [`spawn`]: level-parameterized spawn-rate/difficulty-curve controller
//! - [`session`]: phase machine, scoring, cooldowns, per-tick pipeline
//! - [`rng`]: simple LCG behind all spawn randomness
//!
//! # Example
//!
//! ```
//! use tui_eureka_core::GameSession;
//! use tui_eureka_types::{GameAction, GameConfig, GamePhase};
//!
//! let mut session = GameSession::new(GameConfig::default(), 12345).unwrap();
//! session.apply_action(GameAction::Confirm);
//! assert_eq!(session.phase(), GamePhase::Playing);
//!
//! // Drive the simulation with elapsed milliseconds.
//! let _events = session.tick(16);
//! assert_eq!(session.level(), 1);
//! ```

pub mod entity;
pub mod lanes;
pub mod rng;
pub mod session;
pub mod spawn;
pub mod timer;

pub use tui_eureka_types as types;

// Re-export commonly used types for convenience
pub use entity::{Body, Fruit, Player};
pub use lanes::LaneGrid;
pub use rng::SimpleRng;
pub use session::{Diagnostics, GameSession, TickEvents};
pub use spawn::{fruit_speed, SpawnController};
pub use timer::CountdownTimer;
