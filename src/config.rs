//! Session configuration, read once at session start and immutable thereafter.

use anyhow::{bail, Result};

use crate::core::pieces::shape_cells;
use crate::types::ALL_SHAPES;

/// Immutable per-session configuration.
///
/// Coordinates are signed and y-up; the grid is centered on the origin, so a
/// 10x20 grid spans x in [-5, 5) and y in [-10, 10).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    pub grid_width: i32,
    pub grid_height: i32,
    /// Anchor cell where new pieces spawn, rotation 0
    pub spawn_x: i32,
    pub spawn_y: i32,
    /// Base gravity interval in seconds (the leveling curve overrides this
    /// once the first level-up fires, unless leveling is disabled)
    pub step_delay: f32,
    /// Grace period in seconds after the last successful move before a
    /// grounded piece locks
    pub lock_delay: f32,
    /// When false, the gravity interval stays at `step_delay` forever
    pub leveling_enabled: bool,
    /// Probability in [0, 1] that a spawned piece carries the bomb flag
    pub bomb_chance: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 10,
            grid_height: 20,
            spawn_x: -1,
            spawn_y: 8,
            step_delay: 1.0,
            lock_delay: 0.5,
            leveling_enabled: true,
            bomb_chance: 0.0,
        }
    }
}

impl GameConfig {
    /// Left edge of the grid (inclusive)
    pub fn x_min(&self) -> i32 {
        -(self.grid_width / 2)
    }

    /// Bottom edge of the grid (inclusive)
    pub fn y_min(&self) -> i32 {
        -(self.grid_height / 2)
    }

    /// Reject configurations that would make collision results undefined.
    ///
    /// Called once at session construction; a session is never built from an
    /// invalid configuration.
    pub fn validate(&self) -> Result<()> {
        if self.grid_width <= 0 || self.grid_height <= 0 {
            bail!(
                "grid must be non-empty, got {}x{}",
                self.grid_width,
                self.grid_height
            );
        }
        if !self.step_delay.is_finite() || self.step_delay <= 0.0 {
            bail!("step delay must be positive, got {}", self.step_delay);
        }
        if !self.lock_delay.is_finite() || self.lock_delay < 0.0 {
            bail!("lock delay must be non-negative, got {}", self.lock_delay);
        }
        if !self.bomb_chance.is_finite() || !(0.0..=1.0).contains(&self.bomb_chance) {
            bail!("bomb chance must be in [0, 1], got {}", self.bomb_chance);
        }

        // Every shape at rotation 0 must fit inside the bounds at the spawn
        // anchor, or the first spawn could query cells outside the grid.
        let x_max = self.x_min() + self.grid_width;
        let y_max = self.y_min() + self.grid_height;
        for shape in ALL_SHAPES {
            for &(dx, dy) in shape_cells(shape, 0) {
                let x = self.spawn_x + dx;
                let y = self.spawn_y + dy;
                if x < self.x_min() || x >= x_max || y < self.y_min() || y >= y_max {
                    bail!(
                        "spawn anchor ({}, {}) puts shape {:?} outside the {}x{} grid",
                        self.spawn_x,
                        self.spawn_y,
                        shape,
                        self.grid_width,
                        self.grid_height
                    );
                }
            }
        }

        Ok(())
    }
}
