//! Terminal view for the host binary: raw-mode guard and a full-redraw
//! renderer of the session state.
//!
//! The engine never calls into this module; it is one implementation of the
//! render sink, fed from session accessors each frame.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{Print, ResetColor},
    terminal, QueueableCommand,
};

use crate::core::Session;
use crate::types::{Shape, Tile};

/// Owns the terminal: raw mode on `enter`, restored on `exit`
pub struct TerminalView {
    stdout: io::Stdout,
}

impl TerminalView {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Redraw the whole playfield and status line
    pub fn draw(&mut self, session: &Session) -> Result<()> {
        let grid = session.grid();
        self.stdout.queue(cursor::MoveTo(0, 0))?;

        // Top border
        let width = grid.width() as usize;
        self.queue_line(0, &format!("+{}+", "-".repeat(width * 2)))?;

        // Rows, top of the grid first
        let mut screen_row = 1;
        for y in (grid.y_min()..grid.y_max()).rev() {
            let mut line = String::with_capacity(width * 2 + 2);
            line.push('|');
            for x in grid.x_min()..grid.x_max() {
                match grid.get(x, y).flatten() {
                    Some(tile) => line.push_str(tile_glyph(tile)),
                    None => line.push_str("  "),
                }
            }
            line.push('|');
            self.queue_line(screen_row, &line)?;
            screen_row += 1;
        }
        self.queue_line(screen_row, &format!("+{}+", "-".repeat(width * 2)))?;

        // Status line
        let hold = session
            .hold_shape()
            .map(|s| s.as_str().to_uppercase())
            .unwrap_or_else(|| "-".to_string());
        let status = if session.game_over() {
            let report = session.report();
            format!(
                "GAME OVER  score {}  time {:.0}s  (q to quit)",
                report.score, report.duration
            )
        } else if session.paused() {
            "PAUSED (p to resume)".to_string()
        } else {
            format!(
                "score {}  level {}  hold {}",
                session.score(),
                session.level(),
                hold
            )
        };
        self.queue_line(screen_row + 1, &status)?;

        self.stdout.flush()?;
        Ok(())
    }

    fn queue_line(&mut self, row: u16, text: &str) -> Result<()> {
        self.stdout.queue(cursor::MoveTo(0, row))?;
        self.stdout
            .queue(terminal::Clear(terminal::ClearType::CurrentLine))?;
        self.stdout.queue(Print(text))?;
        Ok(())
    }
}

impl Default for TerminalView {
    fn default() -> Self {
        Self::new()
    }
}

fn tile_glyph(tile: Tile) -> &'static str {
    if tile.bomb {
        return "@@";
    }
    match tile.shape {
        Shape::I => "II",
        Shape::O => "OO",
        Shape::T => "TT",
        Shape::J => "JJ",
        Shape::L => "LL",
        Shape::S => "SS",
        Shape::Z => "ZZ",
    }
}
