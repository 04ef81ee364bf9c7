//! Key-to-action mapping for the terminal host.
//!
//! The engine consumes per-tick `InputSnapshot`s; this collector folds key
//! press events into the snapshot for the upcoming tick. Terminal key events
//! arrive as press edges, which matches the engine's "at most one assertion
//! per key-press edge" contract.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::InputSnapshot;

/// Accumulates key presses between ticks
#[derive(Debug, Clone, Copy, Default)]
pub struct InputCollector {
    pending: InputSnapshot,
}

impl InputCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a key press into the pending snapshot
    pub fn key_press(&mut self, code: KeyCode) {
        match code {
            KeyCode::Left | KeyCode::Char('a') => self.pending.move_left = true,
            KeyCode::Right | KeyCode::Char('d') => self.pending.move_right = true,
            KeyCode::Down | KeyCode::Char('s') => self.pending.soft_drop = true,
            KeyCode::Char(' ') => self.pending.hard_drop = true,
            KeyCode::Up | KeyCode::Char('x') => self.pending.rotate_cw = true,
            KeyCode::Char('z') => self.pending.rotate_ccw = true,
            KeyCode::Char('c') => self.pending.hold = true,
            KeyCode::Char('p') => self.pending.pause = true,
            _ => {}
        }
    }

    /// Hand the accumulated snapshot to the tick and reset for the next one
    pub fn take(&mut self) -> InputSnapshot {
        std::mem::take(&mut self.pending)
    }
}

/// Quit keys handled by the host, outside the engine's input contract
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
