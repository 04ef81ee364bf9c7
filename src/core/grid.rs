//! Grid module - bounded cell storage, collision queries, and line clears.
//!
//! Coordinates are signed and y-up; bounds are centered on the origin to
//! match the configured spawn anchor. Storage is a flat row-major Vec for
//! cache locality. Every cell write is journaled so the host's render sink
//! can consume incremental changes instead of rescanning the grid.

use crate::config::GameConfig;
use crate::core::pieces::ShapeCells;
use crate::types::{Cell, CellChange, Tile};

/// The playfield: a bounded rectangle of cells
#[derive(Debug, Clone)]
pub struct Grid {
    x_min: i32,
    y_min: i32,
    width: i32,
    height: i32,
    /// Flat row-major storage, index (y - y_min) * width + (x - x_min)
    cells: Vec<Cell>,
    /// Journal of writes since the last `take_changes`
    changes: Vec<CellChange>,
}

impl Grid {
    /// Create an empty grid with the configured bounds
    pub fn new(config: &GameConfig) -> Self {
        Self {
            x_min: config.x_min(),
            y_min: config.y_min(),
            width: config.grid_width,
            height: config.grid_height,
            cells: vec![None; (config.grid_width * config.grid_height) as usize],
            changes: Vec::new(),
        }
    }

    pub fn x_min(&self) -> i32 {
        self.x_min
    }

    /// Exclusive right edge
    pub fn x_max(&self) -> i32 {
        self.x_min + self.width
    }

    pub fn y_min(&self) -> i32 {
        self.y_min
    }

    /// Exclusive top edge
    pub fn y_max(&self) -> i32 {
        self.y_min + self.height
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < self.x_min || x >= self.x_max() || y < self.y_min || y >= self.y_max() {
            return None;
        }
        Some(((y - self.y_min) * self.width + (x - self.x_min)) as usize)
    }

    /// Cell at (x, y), or None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Write a cell, journaling the change. Returns false if out of bounds.
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                self.changes.push(CellChange { x, y, cell });
                true
            }
            None => false,
        }
    }

    /// True if (x, y) is in bounds and empty
    pub fn is_open(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// Pure collision query: true iff every cell offset added to the anchor
    /// lands on an in-bounds empty cell.
    pub fn is_valid_position(&self, cells: &ShapeCells, x: i32, y: i32) -> bool {
        cells.iter().all(|&(dx, dy)| self.is_open(x + dx, y + dy))
    }

    /// Write a tile into each of the four absolute cells.
    ///
    /// The caller must have validated the position; no re-check here.
    pub fn commit(&mut self, cells: &ShapeCells, x: i32, y: i32, tile: Tile) {
        for &(dx, dy) in cells {
            self.set(x + dx, y + dy, Some(tile));
        }
    }

    /// Clear each of the four absolute cells back to empty.
    ///
    /// Used to repaint a still-falling piece each tick (erase-then-redraw
    /// keeps the grid the single source of truth for drawn state).
    pub fn erase(&mut self, cells: &ShapeCells, x: i32, y: i32) {
        for &(dx, dy) in cells {
            self.set(x + dx, y + dy, None);
        }
    }

    /// True iff every column at row `y` is occupied
    pub fn is_row_full(&self, y: i32) -> bool {
        if y < self.y_min || y >= self.y_max() {
            return false;
        }
        (self.x_min..self.x_max()).all(|x| matches!(self.get(x, y), Some(Some(_))))
    }

    /// Clear all full rows, compacting the rows above downward.
    ///
    /// Scans bottom-up; after a row is cleared the same row index is
    /// re-tested, since compaction pulls the row above down into the slot.
    /// Correct for 1-4 simultaneous full rows, contiguous or not. Returns
    /// the number of rows cleared.
    pub fn clear_and_compact_rows(&mut self) -> u32 {
        let mut cleared = 0;
        let mut row = self.y_min;
        while row < self.y_max() {
            if self.is_row_full(row) {
                self.clear_row(row);
                cleared += 1;
            } else {
                row += 1;
            }
        }
        cleared
    }

    /// Empty row `y` and shift every row above it down by one
    fn clear_row(&mut self, y: i32) {
        for row in y..self.y_max() {
            for x in self.x_min..self.x_max() {
                let above = self.get(x, row + 1).flatten();
                self.set(x, row, above);
            }
        }
    }

    /// Drain the journal of cell writes since the last call
    pub fn take_changes(&mut self) -> Vec<CellChange> {
        std::mem::take(&mut self.changes)
    }
}
