//! Countdown timer with one-second resolution.
//!
//! Driven by elapsed milliseconds from the game loop rather than frame
//! counts, so it stays correct under variable frame rates. Sub-second
//! remainders carry over between updates; no drift accumulates.

/// Level countdown clock. RUNNING while seconds remain, FINISHED (terminal
/// until `reset`) once they reach zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownTimer {
    total_seconds: u32,
    remaining_seconds: u32,
    carry_ms: u32,
}

impl CountdownTimer {
    pub fn new(total_seconds: u32) -> Self {
        Self {
            total_seconds,
            remaining_seconds: total_seconds,
            carry_ms: 0,
        }
    }

    /// Consume elapsed wall-clock time, decrementing one second per
    /// accumulated 1000 ms. Remaining seconds never go negative.
    pub fn update(&mut self, elapsed_ms: u32) {
        if self.remaining_seconds == 0 {
            return;
        }

        self.carry_ms += elapsed_ms;
        while self.carry_ms >= 1000 && self.remaining_seconds > 0 {
            self.carry_ms -= 1000;
            self.remaining_seconds -= 1;
        }
        if self.remaining_seconds == 0 {
            self.carry_ms = 0;
        }
    }

    /// Return to RUNNING with the full duration.
    pub fn reset(&mut self) {
        self.remaining_seconds = self.total_seconds;
        self.carry_ms = 0;
    }

    pub fn is_finished(&self) -> bool {
        self.remaining_seconds == 0
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    pub fn total_seconds(&self) -> u32 {
        self.total_seconds
    }

    /// Two-digit display string for the HUD.
    pub fn time_string(&self) -> String {
        format!("{:02}", self.remaining_seconds % 60)
    }
}
