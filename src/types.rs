//! Core types shared across the engine and host
//! This module contains pure data types with no external dependencies

/// Fixed tick duration for host loops (milliseconds)
pub const TICK_MS: u32 = 16;

/// The seven canonical piece shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    I,
    O,
    T,
    J,
    L,
    S,
    Z,
}

/// All shapes, in bag-refill order
pub const ALL_SHAPES: [Shape; 7] = [
    Shape::I,
    Shape::O,
    Shape::T,
    Shape::J,
    Shape::L,
    Shape::S,
    Shape::Z,
];

impl Shape {
    /// Parse shape from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(Shape::I),
            "o" => Some(Shape::O),
            "t" => Some(Shape::T),
            "j" => Some(Shape::J),
            "l" => Some(Shape::L),
            "s" => Some(Shape::S),
            "z" => Some(Shape::Z),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Shape::I => "i",
            Shape::O => "o",
            Shape::T => "t",
            Shape::J => "j",
            Shape::L => "l",
            Shape::S => "s",
            Shape::Z => "z",
        }
    }
}

/// A locked-in tile on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    pub shape: Shape,
    /// Spawn-time special-tile flag (probabilistic, see `GameConfig::bomb_chance`)
    pub bomb: bool,
}

impl Tile {
    pub fn new(shape: Shape) -> Self {
        Self { shape, bomb: false }
    }
}

/// Cell on the grid (None = empty, Some = filled with a tile)
pub type Cell = Option<Tile>;

/// Discrete input signals for one tick.
///
/// Each flag means "action asserted this tick". The host is responsible for
/// debouncing to at most one assertion per physical key-press edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputSnapshot {
    pub move_left: bool,
    pub move_right: bool,
    pub soft_drop: bool,
    pub hard_drop: bool,
    pub rotate_cw: bool,
    pub rotate_ccw: bool,
    pub hold: bool,
    pub pause: bool,
}

/// Fire-and-forget event notifications for the host (audio/feedback sinks)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A piece moved or was kicked into place by a rotation
    Moved,
    /// The active piece locked into the grid
    Locked,
    /// Rows were cleared as part of a lock
    LinesCleared(u32),
    /// A bomb piece took a gravity step (per-piece audio effect)
    BombTick,
}

/// A single grid cell mutation, journaled for the render sink
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellChange {
    pub x: i32,
    pub y: i32,
    pub cell: Cell,
}

/// Final session totals reported to the persistence sink at game over
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SessionReport {
    pub score: u32,
    /// Unpaused play time in seconds
    pub duration: f32,
}
