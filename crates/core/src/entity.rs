//! Positioned, sized actors with axis-aligned bounding-box collision.
//!
//! The original's shallow sprite hierarchy maps to composition here: a
//! shared `Body` rectangle plus entity-specific fields.

use crate::lanes::LaneGrid;
use tui_eureka_types::{FruitKind, PLAYER_HEIGHT, PLAYER_WIDTH, START_LANE};

/// A rectangle centered on (x, y).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Body {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// AABB overlap test between two centered rectangles.
    pub fn intersects(&self, other: &Body) -> bool {
        let (al, at) = (self.x - self.width / 2.0, self.y - self.height / 2.0);
        let (bl, bt) = (other.x - other.width / 2.0, other.y - other.height / 2.0);

        al < bl + other.width
            && al + self.width > bl
            && at < bt + other.height
            && at + self.height > bt
    }
}

/// The catcher. One per session; its lane index is always in `[0, N-1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub body: Body,
    lane: usize,
    points: u32,
    can_move: bool,
}

impl Player {
    pub fn new(lanes: &LaneGrid, points: u32) -> Self {
        let lane = START_LANE.min(lanes.len() - 1);
        Self {
            body: Body::new(lanes.x(lane), lanes.stand_y(), PLAYER_WIDTH, PLAYER_HEIGHT),
            lane,
            points,
            can_move: true,
        }
    }

    pub fn lane(&self) -> usize {
        self.lane
    }

    /// Points awarded per caught apple.
    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn can_move(&self) -> bool {
        self.can_move
    }

    pub fn set_can_move(&mut self, can_move: bool) {
        self.can_move = can_move;
    }

    pub fn move_left(&mut self, lanes: &LaneGrid) {
        self.lane = self.lane.saturating_sub(1);
        self.sync_position(lanes);
    }

    pub fn move_right(&mut self, lanes: &LaneGrid) {
        self.lane = (self.lane + 1).min(lanes.len() - 1);
        self.sync_position(lanes);
    }

    fn sync_position(&mut self, lanes: &LaneGrid) {
        self.body.x = lanes.x(self.lane);
        self.body.y = lanes.stand_y();
    }
}

/// A falling fruit. Spawned above the visible area, destroyed on catch or
/// when it leaves the bottom margin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fruit {
    pub body: Body,
    pub kind: FruitKind,
    /// Fall speed in world pixels per second.
    pub speed: f32,
}

impl Fruit {
    pub fn new(kind: FruitKind, x: f32, speed: f32) -> Self {
        let size = kind.size();
        Self {
            body: Body::new(x, -size / 2.0, size, size),
            kind,
            speed,
        }
    }

    /// Advance downward by elapsed wall-clock time.
    pub fn update(&mut self, elapsed_ms: u32) {
        self.body.y += self.speed * elapsed_ms as f32 / 1000.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_eureka_types::GameConfig;

    fn grid() -> LaneGrid {
        LaneGrid::new(&GameConfig::default()).unwrap()
    }

    #[test]
    fn test_body_overlap() {
        let a = Body::new(0.0, 0.0, 10.0, 10.0);
        let b = Body::new(8.0, 0.0, 10.0, 10.0);
        let c = Body::new(20.0, 0.0, 10.0, 10.0);

        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_body_touching_edges_do_not_overlap() {
        let a = Body::new(0.0, 0.0, 10.0, 10.0);
        let b = Body::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_player_starts_centered() {
        let lanes = grid();
        let player = Player::new(&lanes, 10);

        assert_eq!(player.lane(), START_LANE);
        assert_eq!(player.body.x, lanes.x(START_LANE));
        assert_eq!(player.body.y, lanes.stand_y());
        assert!(player.can_move());
    }

    #[test]
    fn test_player_moves_clamp_at_edges() {
        let lanes = grid();
        let mut player = Player::new(&lanes, 10);

        for _ in 0..10 {
            player.move_left(&lanes);
        }
        assert_eq!(player.lane(), 0);
        assert_eq!(player.body.x, lanes.x(0));

        for _ in 0..10 {
            player.move_right(&lanes);
        }
        assert_eq!(player.lane(), lanes.len() - 1);
        assert_eq!(player.body.x, lanes.x(lanes.len() - 1));
    }

    #[test]
    fn test_fruit_spawns_above_visible_area() {
        let fruit = Fruit::new(FruitKind::Apple, 100.0, 200.0);
        assert!(fruit.body.y < 0.0);
        assert_eq!(fruit.body.width, FruitKind::Apple.size());
    }

    #[test]
    fn test_fruit_falls_with_elapsed_time() {
        let mut fruit = Fruit::new(FruitKind::Banana, 100.0, 200.0);
        let y0 = fruit.body.y;

        fruit.update(500);
        assert!((fruit.body.y - (y0 + 100.0)).abs() < 1e-3);

        // Two 250 ms steps cover the same distance as one 500 ms step.
        let mut other = Fruit::new(FruitKind::Banana, 100.0, 200.0);
        other.update(250);
        other.update(250);
        assert!((other.body.y - fruit.body.y).abs() < 1e-3);
    }
}
