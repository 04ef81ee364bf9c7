//! Core module - the deterministic simulation, no I/O.
//!
//! Everything here behaves identically regardless of host platform or frame
//! rate as long as elapsed time is supplied correctly.

pub mod bag;
pub mod grid;
pub mod piece;
pub mod pieces;
pub mod scoring;
pub mod session;

pub use bag::{SevenBag, SimpleRng};
pub use grid::Grid;
pub use piece::Piece;
pub use scoring::compute_points;
pub use session::{Session, TickOutcome};
