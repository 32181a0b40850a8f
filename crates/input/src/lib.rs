//! Terminal input module.
//!
//! Maps `crossterm` key events into [`tui_eureka_types::GameAction`]. The
//! move-cooldown rule lives in the session, so the mapping here stays
//! stateless: one key-down, one action.

pub mod map;

pub use tui_eureka_types as types;

pub use map::{handle_key_event, should_quit};
