//! GameView: maps a `GameSession` into a terminal framebuffer.
//!
//! This module is pure (no I/O), so it can be unit-tested against the
//! framebuffer contents.

use crate::fb::{CellStyle, FrameBuffer, Rgb};
use tui_eureka_core::{Diagnostics, GameSession};
use tui_eureka_types::{FruitKind, GamePhase, CATCH_LINE_Y};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const HUD_FG: Rgb = Rgb::new(230, 230, 230);
const HUD_BG: Rgb = Rgb::new(25, 25, 25);
const GROUND_FG: Rgb = Rgb::new(90, 90, 90);
const PLAYER_FG: Rgb = Rgb::new(120, 220, 120);
const PLAYER_HIT_FG: Rgb = Rgb::new(230, 80, 80);
const APPLE_FG: Rgb = Rgb::new(220, 60, 60);
const BANANA_FG: Rgb = Rgb::new(230, 220, 80);
const ORANGE_FG: Rgb = Rgb::new(240, 150, 50);
const OVERLAY_FG: Rgb = Rgb::new(250, 250, 250);
const DEBUG_FG: Rgb = Rgb::new(130, 130, 160);

/// Renders the logical scene. Holds no per-frame state.
#[derive(Debug, Default, Clone, Copy)]
pub struct GameView;

impl GameView {
    /// Render the session into an existing framebuffer, resizing it to the
    /// viewport. Diagnostics, when given, occupy the bottom row.
    pub fn render_into(
        &self,
        session: &GameSession,
        viewport: Viewport,
        diagnostics: Option<&Diagnostics>,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();

        if viewport.width < 20 || viewport.height < 8 {
            fb.put_str(0, 0, "terminal too small", CellStyle::fg(HUD_FG));
            return;
        }

        self.draw_status_bar(session, fb);

        match session.phase() {
            GamePhase::MainMenu => self.draw_main_menu(fb),
            GamePhase::Playing | GamePhase::Paused => {
                self.draw_play_area(session, diagnostics.is_some(), fb);
                if session.phase() == GamePhase::Paused {
                    fb.put_str_centered(
                        viewport.height / 2,
                        "PAUSED",
                        CellStyle::fg(OVERLAY_FG).bold(),
                    );
                }
            }
            GamePhase::GameOver => self.draw_game_over(session, fb),
        }

        if let Some(diag) = diagnostics {
            self.draw_diagnostics(diag, fb);
        }
    }

    fn draw_status_bar(&self, session: &GameSession, fb: &mut FrameBuffer) {
        let style = CellStyle::fg(HUD_FG).on(HUD_BG);
        fb.fill_row(0, ' ', style);

        fb.put_str(1, 0, &format!("LEVEL {:02}", session.level()), style);
        fb.put_str_centered(0, &format!("TIME {}", session.timer().time_string()), style);

        let score = format!("SCORE {:04}", session.score());
        let x = fb.width().saturating_sub(score.chars().count() as u16 + 1);
        fb.put_str(x, 0, &score, style);
    }

    fn draw_play_area(&self, session: &GameSession, debug: bool, fb: &mut FrameBuffer) {
        let ground_y = self.cell_y(session, session.lanes().stand_y(), fb);

        // Lane markers on the ground line.
        for &lane_x in session.lanes().xs() {
            let x = self.cell_x(session, lane_x, fb);
            for dx in -1i32..=1 {
                let cx = x.saturating_add_signed(dx as i16);
                fb.put_char(cx, ground_y + 1, '=', CellStyle::fg(GROUND_FG));
            }
        }

        if debug {
            let y = self.cell_y(session, CATCH_LINE_Y, fb);
            fb.fill_row(y, '-', CellStyle::fg(DEBUG_FG));
        }

        // Fruit sprites.
        for fruit in session.fruits() {
            if fruit.body.y < 0.0 {
                continue;
            }
            let x = self.cell_x(session, fruit.body.x, fb);
            let y = self.cell_y(session, fruit.body.y, fb);
            let (ch, fg) = match fruit.kind {
                FruitKind::Apple => ('@', APPLE_FG),
                FruitKind::Banana => (')', BANANA_FG),
                FruitKind::Orange => ('o', ORANGE_FG),
            };
            fb.put_char(x, y, ch, CellStyle::fg(fg).bold());
        }

        // Player sprite, drawn last so it sits on top.
        let px = self.cell_x(session, session.player().body.x, fb);
        let (glyph, fg) = if session.player().can_move() {
            (r"\o/", PLAYER_FG)
        } else {
            (r"/x\", PLAYER_HIT_FG)
        };
        fb.put_str(px.saturating_sub(1), ground_y, glyph, CellStyle::fg(fg).bold());
    }

    fn draw_main_menu(&self, fb: &mut FrameBuffer) {
        let mid = fb.height() / 2;
        fb.put_str_centered(mid.saturating_sub(2), "E U R E K A !", CellStyle::fg(OVERLAY_FG).bold());
        fb.put_str_centered(mid, "PRESS ENTER TO START", CellStyle::fg(OVERLAY_FG));
        fb.put_str_centered(
            mid + 2,
            "arrows move . p pauses . q quits",
            CellStyle::fg(GROUND_FG),
        );
    }

    fn draw_game_over(&self, session: &GameSession, fb: &mut FrameBuffer) {
        let mid = fb.height() / 2;
        fb.put_str_centered(mid.saturating_sub(2), "TIME IS UP!", CellStyle::fg(OVERLAY_FG).bold());
        fb.put_str_centered(
            mid,
            &format!("FINAL SCORE {:04}", session.score()),
            CellStyle::fg(OVERLAY_FG),
        );
        fb.put_str_centered(mid + 2, "PRESS ENTER TO PLAY AGAIN", CellStyle::fg(OVERLAY_FG));
    }

    fn draw_diagnostics(&self, diag: &Diagnostics, fb: &mut FrameBuffer) {
        let line = format!(
            "frame {:>3}ms  fruit {:>2}  occ {:05b}  cooldown {}ms",
            diag.frame_ms, diag.fruit_count, diag.occupied_lanes, diag.move_cooldown_ms
        );
        let y = fb.height().saturating_sub(1);
        fb.put_str(1, y, &line, CellStyle::fg(DEBUG_FG));
    }

    /// World x -> terminal column.
    fn cell_x(&self, session: &GameSession, x: f32, fb: &FrameBuffer) -> u16 {
        let w = session.config().width;
        let cols = fb.width().saturating_sub(1) as f32;
        ((x / w).clamp(0.0, 1.0) * cols).round() as u16
    }

    /// World y -> terminal row (row 0 is the status bar).
    fn cell_y(&self, session: &GameSession, y: f32, fb: &FrameBuffer) -> u16 {
        let h = session.config().height;
        let rows = fb.height().saturating_sub(3) as f32;
        1 + ((y / h).clamp(0.0, 1.0) * rows).round() as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_eureka_types::{GameAction, GameConfig};

    fn render(session: &GameSession) -> FrameBuffer {
        let mut fb = FrameBuffer::new(80, 24);
        GameView.render_into(session, Viewport::new(80, 24), None, &mut fb);
        fb
    }

    fn screen_text(fb: &FrameBuffer) -> String {
        (0..fb.height()).map(|y| fb.row_text(y) + "\n").collect()
    }

    #[test]
    fn test_menu_overlay() {
        let session = GameSession::new(GameConfig::default(), 1).unwrap();
        let text = screen_text(&render(&session));
        assert!(text.contains("PRESS ENTER TO START"));
        assert!(text.contains("E U R E K A !"));
    }

    #[test]
    fn test_status_bar_contents() {
        let mut session = GameSession::new(GameConfig::default(), 1).unwrap();
        session.apply_action(GameAction::Confirm);

        let text = screen_text(&render(&session));
        assert!(text.contains("LEVEL 01"));
        assert!(text.contains("TIME 30"));
        assert!(text.contains("SCORE 0000"));
    }

    #[test]
    fn test_player_glyph_drawn_while_playing() {
        let mut session = GameSession::new(GameConfig::default(), 1).unwrap();
        session.apply_action(GameAction::Confirm);

        let text = screen_text(&render(&session));
        assert!(text.contains(r"\o/"));
    }

    #[test]
    fn test_pause_overlay() {
        let mut session = GameSession::new(GameConfig::default(), 1).unwrap();
        session.apply_action(GameAction::Confirm);
        session.apply_action(GameAction::Pause);

        let text = screen_text(&render(&session));
        assert!(text.contains("PAUSED"));
    }

    #[test]
    fn test_game_over_overlay() {
        let mut session = GameSession::new(GameConfig::default(), 1).unwrap();
        session.apply_action(GameAction::Confirm);
        session.tick(31_000);

        let text = screen_text(&render(&session));
        assert!(text.contains("TIME IS UP!"));
        assert!(text.contains("PRESS ENTER TO PLAY AGAIN"));
    }

    #[test]
    fn test_diagnostics_row() {
        let mut session = GameSession::new(GameConfig::default(), 1).unwrap();
        session.apply_action(GameAction::Confirm);
        let diag = session.diagnostics(16);

        let mut fb = FrameBuffer::new(80, 24);
        GameView.render_into(&session, Viewport::new(80, 24), Some(&diag), &mut fb);
        assert!(screen_text(&fb).contains("frame"));
    }

    #[test]
    fn test_tiny_viewport_degrades_gracefully() {
        let session = GameSession::new(GameConfig::default(), 1).unwrap();
        let mut fb = FrameBuffer::new(10, 3);
        GameView.render_into(&session, Viewport::new(10, 3), None, &mut fb);
        assert!(screen_text(&fb).contains("terminal"));
    }
}
