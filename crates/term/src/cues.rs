//! Audio cue playback over the terminal.
//!
//! The terminal cannot play samples, so cues degrade to the BEL character
//! for the moments that matter. A `NullCueSink` is available for tests and
//! for running with the bell disabled.

use std::io::Write;

use anyhow::Result;
use tui_eureka_types::Cue;

/// Something that can play a gameplay cue.
pub trait CueSink {
    fn play(&mut self, cue: Cue) -> Result<()>;
}

/// Rings the terminal bell for the high-signal cues, stays quiet for the
/// rest so frequent catches do not spam the terminal.
#[derive(Debug, Default)]
pub struct TerminalBell;

impl CueSink for TerminalBell {
    fn play(&mut self, cue: Cue) -> Result<()> {
        match cue {
            Cue::Ouch | Cue::LevelUp | Cue::TimesUp => {
                let mut out = std::io::stdout();
                out.write_all(b"\x07")?;
                out.flush()?;
            }
            Cue::Catch => {}
        }
        Ok(())
    }
}

/// Discards every cue.
#[derive(Debug, Default)]
pub struct NullCueSink;

impl CueSink for NullCueSink {
    fn play(&mut self, _cue: Cue) -> Result<()> {
        Ok(())
    }
}
