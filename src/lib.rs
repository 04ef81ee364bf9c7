//! blockfall - a deterministic falling-block puzzle engine.
//!
//! The `core` module is the pure simulation: grid, pieces, bag, scoring,
//! and the session controller driven by `Session::tick`. The remaining
//! modules are the terminal host that embeds it.

pub mod config;
pub mod core;
pub mod input;
pub mod term;
pub mod types;
