//! Terminal renderer for the orchard scene.
//!
//! Rendering is split into a pure stage and an I/O stage: `game_view` maps
//! the session into a styled framebuffer, and `renderer` diffs consecutive
//! framebuffers into the smallest ANSI byte stream that updates the screen.
//! Tests exercise the pure stage directly; only `TerminalRenderer` and the
//! cue sinks touch stdout.

pub mod cues;
pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_eureka_core as core;
pub use tui_eureka_types as types;

pub use cues::{CueSink, NullCueSink, TerminalBell};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
