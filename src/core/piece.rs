//! The active falling piece: movement, wall-kick rotation, and timers.
//!
//! A piece carries two timers, both fed by real elapsed time so behavior is
//! frame-rate independent: the step timer drives gravity at the current
//! level's interval, and the lock timer accumulates while the piece sits
//! grounded. Any successful move grants a fresh lock-delay window.

use crate::core::grid::Grid;
use crate::core::pieces::{kick_index, kick_table, shape_cells, wrap, ShapeCells, ROTATION_COUNT};
use crate::types::{GameEvent, Shape, Tile};

/// The active piece. Created at spawn, discarded after lock.
#[derive(Debug, Clone)]
pub struct Piece {
    shape: Shape,
    /// Rotation index 0..4
    rotation: i32,
    /// Anchor position
    x: i32,
    y: i32,
    /// Cell offsets for the current rotation, recomputed on rotate
    cells: ShapeCells,
    bomb: bool,
    locked: bool,
    /// Seconds since the last gravity step
    step_timer: f32,
    /// Seconds since the last successful move
    lock_timer: f32,
}

impl Piece {
    /// Plain factory: a fresh piece at the spawn anchor, rotation 0
    pub fn spawn(shape: Shape, x: i32, y: i32, bomb: bool) -> Self {
        Self {
            shape,
            rotation: 0,
            x,
            y,
            cells: *shape_cells(shape, 0),
            bomb,
            locked: false,
            step_timer: 0.0,
            lock_timer: 0.0,
        }
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn rotation(&self) -> i32 {
        self.rotation
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn cells(&self) -> &ShapeCells {
        &self.cells
    }

    pub fn is_bomb(&self) -> bool {
        self.bomb
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Tile this piece commits into the grid
    pub fn tile(&self) -> Tile {
        Tile {
            shape: self.shape,
            bomb: self.bomb,
        }
    }

    /// Accumulate lock time; called once per tick before input resolution
    pub fn accumulate_lock_time(&mut self, elapsed: f32) {
        self.lock_timer += elapsed;
    }

    /// Whether the lock-delay grace period has run out
    pub fn lock_expired(&self, lock_delay: f32) -> bool {
        self.lock_timer >= lock_delay
    }

    /// Attempt to translate the piece. On success the anchor moves and the
    /// lock timer resets; on failure nothing changes.
    pub fn try_move(&mut self, grid: &Grid, dx: i32, dy: i32, events: &mut Vec<GameEvent>) -> bool {
        debug_assert!(!self.locked);
        let valid = grid.is_valid_position(&self.cells, self.x + dx, self.y + dy);
        if valid {
            self.x += dx;
            self.y += dy;
            self.lock_timer = 0.0;
            events.push(GameEvent::Moved);
        }
        valid
    }

    /// Attempt a rotation with ordered wall-kick fallback.
    ///
    /// `direction` is +1 (clockwise) or -1 (counter-clockwise). The rotation
    /// is atomic: either the rotated shape lands at one of the kick offsets,
    /// or the rotation index and cells revert untouched.
    pub fn try_rotate(&mut self, grid: &Grid, direction: i32, events: &mut Vec<GameEvent>) -> bool {
        debug_assert!(!self.locked);
        self.rotation = wrap(self.rotation + direction, 0, ROTATION_COUNT);
        self.cells = *shape_cells(self.shape, self.rotation);

        let kicks = &kick_table(self.shape)[kick_index(self.rotation, direction)];
        for &(dx, dy) in kicks {
            // Kick offsets route through try_move, so a kicked rotation also
            // refreshes the lock window and emits a move event.
            if self.try_move(grid, dx, dy, events) {
                return true;
            }
        }

        self.rotation = wrap(self.rotation - direction, 0, ROTATION_COUNT);
        self.cells = *shape_cells(self.shape, self.rotation);
        false
    }

    /// Advance the step timer; when the gravity deadline passes, take a
    /// downward step. Returns true when the piece should lock: it has sat
    /// grounded long enough for the lock delay to expire at a step boundary.
    pub fn gravity(
        &mut self,
        grid: &Grid,
        elapsed: f32,
        step_delay: f32,
        lock_delay: f32,
        events: &mut Vec<GameEvent>,
    ) -> bool {
        self.step_timer += elapsed;
        if self.step_timer < step_delay {
            return false;
        }
        self.step_timer = 0.0;

        // A successful step resets the lock timer inside try_move; a failed
        // one leaves it accumulating toward the lock deadline.
        self.try_move(grid, 0, -1, events);
        if self.bomb {
            events.push(GameEvent::BombTick);
        }
        self.lock_expired(lock_delay)
    }

    /// Drop straight down to the lowest reachable position. The caller locks
    /// the piece immediately afterwards.
    pub fn hard_drop(&mut self, grid: &Grid, events: &mut Vec<GameEvent>) {
        while self.try_move(grid, 0, -1, events) {}
    }

    /// Mark the piece locked; no further moves or rotations are accepted
    pub fn mark_locked(&mut self) {
        self.locked = true;
    }
}
