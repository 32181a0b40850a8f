//! Lane grid: the fixed horizontal positions the player and fruit occupy.
//!
//! Computed once from the validated configuration and immutable for the
//! session.

use tui_eureka_types::{ConfigError, GameConfig};

/// N evenly spaced x anchors spanning `[margin, width - margin]`, paired
/// with one stand y near the bottom of the play area.
#[derive(Debug, Clone, PartialEq)]
pub struct LaneGrid {
    xs: Vec<f32>,
    stand_y: f32,
}

impl LaneGrid {
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let usable_width = config.width - 2.0 * config.margin_x;
        let spacing = usable_width / (config.lanes - 1) as f32;
        let xs = (0..config.lanes)
            .map(|i| config.margin_x + i as f32 * spacing)
            .collect();

        Ok(Self {
            xs,
            stand_y: config.height - config.margin_y,
        })
    }

    /// Number of lanes.
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// X anchor of a lane. Out-of-range indices are clamped to the last lane.
    pub fn x(&self, lane: usize) -> f32 {
        self.xs[lane.min(self.xs.len() - 1)]
    }

    /// Y position where the player stands and fruit is caught.
    pub fn stand_y(&self) -> f32 {
        self.stand_y
    }

    pub fn xs(&self) -> &[f32] {
        &self.xs
    }
}
