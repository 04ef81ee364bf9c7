//! Session controller - ties together grid, pieces, bag, and scoring.
//!
//! One `tick(elapsed, input)` runs a complete discrete update in the fixed
//! order: erase current draw, lock-time accumulation, hold, rotation
//! (counter-clockwise before clockwise), horizontal, soft drop, hard drop,
//! gravity step, redraw. Locking, line clears, scoring, and the next spawn
//! are one synchronous continuation inside the same tick; no input is
//! processed mid-lock. A failed spawn is terminal game over.

use anyhow::Result;

use crate::config::GameConfig;
use crate::core::bag::{SevenBag, SimpleRng};
use crate::core::grid::Grid;
use crate::core::piece::Piece;
use crate::core::scoring::ScoreState;
use crate::types::{CellChange, GameEvent, InputSnapshot, SessionReport, Shape};

/// What one tick produced, for the host's render/audio sinks
#[derive(Debug, Clone, Default)]
pub struct TickOutcome {
    /// Fire-and-forget event notifications, in occurrence order
    pub events: Vec<GameEvent>,
    /// Grid cell writes since the previous tick
    pub changes: Vec<CellChange>,
    /// Rows cleared by a lock this tick
    pub lines_cleared: u32,
    /// The session reached terminal game over this tick (or earlier)
    pub game_over: bool,
}

/// A complete game session: all state lives here, nothing is global
#[derive(Debug, Clone)]
pub struct Session {
    config: GameConfig,
    grid: Grid,
    rng: SimpleRng,
    bag: SevenBag,
    score: ScoreState,
    active: Option<Piece>,
    hold: Option<Shape>,
    /// One hold per falling piece; re-armed when a lock spawns the next piece
    can_hold: bool,
    /// Cleared only on a tick without a hard-drop assertion, so a held key
    /// cannot chain drops across consecutive pieces
    hard_dropped: bool,
    paused: bool,
    started: bool,
    game_over: bool,
    /// Unpaused play time in seconds
    duration: f32,
}

impl Session {
    /// Build a session from a validated configuration and an RNG seed.
    ///
    /// Fails only on configuration violations; the simulation itself has no
    /// I/O failures.
    pub fn new(config: GameConfig, seed: u32) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            grid: Grid::new(&config),
            rng: SimpleRng::new(seed),
            bag: SevenBag::new(),
            score: ScoreState::new(config.step_delay, config.leveling_enabled),
            active: None,
            hold: None,
            can_hold: true,
            hard_dropped: false,
            paused: false,
            started: false,
            game_over: false,
            duration: 0.0,
            config,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[cfg(test)]
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn active(&self) -> Option<&Piece> {
        self.active.as_ref()
    }

    pub fn hold_shape(&self) -> Option<Shape> {
        self.hold
    }

    pub fn can_hold(&self) -> bool {
        self.can_hold
    }

    pub fn score(&self) -> u32 {
        self.score.score()
    }

    pub fn level(&self) -> u32 {
        self.score.level()
    }

    /// Current gravity interval in seconds
    pub fn step_delay(&self) -> f32 {
        self.score.step_delay()
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Final totals for the persistence sink
    pub fn report(&self) -> SessionReport {
        SessionReport {
            score: self.score.score(),
            duration: self.duration,
        }
    }

    /// Spawn the first piece and begin accepting ticks
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.spawn_piece();
    }

    /// Run one discrete update. `elapsed` is wall-clock seconds since the
    /// previous tick; timers are elapsed-time based so behavior is
    /// frame-rate independent.
    pub fn tick(&mut self, elapsed: f32, input: InputSnapshot) -> TickOutcome {
        let mut outcome = TickOutcome::default();

        if input.pause && self.started && !self.game_over {
            self.paused = !self.paused;
        }
        if self.paused || self.game_over || !self.started {
            outcome.game_over = self.game_over;
            return outcome;
        }

        self.duration += elapsed;

        let Some(mut piece) = self.active.take() else {
            outcome.game_over = self.game_over;
            return outcome;
        };

        // Erase the piece's current draw so its own cells never collide with
        // the validity checks below.
        let (x, y) = piece.position();
        self.grid.erase(piece.cells(), x, y);

        piece.accumulate_lock_time(elapsed);

        // Hold request: stash the falling shape, bring in the stashed one
        // (or a bag draw the first time). The fresh piece starts next tick.
        if input.hold && self.can_hold {
            match self.hold_swap(piece) {
                Some(swapped) => {
                    let (x, y) = swapped.position();
                    self.grid.commit(swapped.cells(), x, y, swapped.tile());
                    self.active = Some(swapped);
                }
                None => {
                    self.game_over = true;
                }
            }
            outcome.changes = self.grid.take_changes();
            outcome.game_over = self.game_over;
            return outcome;
        }

        // Rotation intent, counter-clockwise before clockwise
        if input.rotate_ccw {
            piece.try_rotate(&self.grid, -1, &mut outcome.events);
        } else if input.rotate_cw {
            piece.try_rotate(&self.grid, 1, &mut outcome.events);
        }

        // Horizontal motion
        if input.move_left {
            piece.try_move(&self.grid, -1, 0, &mut outcome.events);
        } else if input.move_right {
            piece.try_move(&self.grid, 1, 0, &mut outcome.events);
        }

        // Soft drop: one extra downward step this tick
        if input.soft_drop {
            piece.try_move(&self.grid, 0, -1, &mut outcome.events);
        }

        // Hard drop, latched so a held key resolves at most once per piece
        let mut lock_now = false;
        if input.hard_drop && !self.hard_dropped {
            piece.hard_drop(&self.grid, &mut outcome.events);
            self.hard_dropped = true;
            lock_now = true;
        } else if !input.hard_drop {
            self.hard_dropped = false;
        }

        // Gravity step once the step deadline has passed
        if !lock_now {
            lock_now = piece.gravity(
                &self.grid,
                elapsed,
                self.score.step_delay(),
                self.config.lock_delay,
                &mut outcome.events,
            );
        }

        if lock_now {
            outcome.lines_cleared = self.lock(piece, &mut outcome.events);
        } else {
            let (x, y) = piece.position();
            self.grid.commit(piece.cells(), x, y, piece.tile());
            self.active = Some(piece);
        }

        outcome.changes = self.grid.take_changes();
        outcome.game_over = self.game_over;
        outcome
    }

    /// Commit the locked piece, clear lines, score, and spawn the successor.
    /// Returns the number of rows cleared.
    fn lock(&mut self, mut piece: Piece, events: &mut Vec<GameEvent>) -> u32 {
        piece.mark_locked();
        let (x, y) = piece.position();
        self.grid.commit(piece.cells(), x, y, piece.tile());
        events.push(GameEvent::Locked);

        let lines = self.grid.clear_and_compact_rows();
        if lines > 0 {
            events.push(GameEvent::LinesCleared(lines));
            self.score.apply_clear(lines);
        }

        self.spawn_piece();
        lines
    }

    /// Draw from the bag and place a new piece at the spawn anchor, or enter
    /// terminal game over if the spawn cells are already occupied.
    fn spawn_piece(&mut self) {
        let shape = self.bag.next(&mut self.rng);
        let piece = self.make_piece(shape);

        let (x, y) = piece.position();
        if self.grid.is_valid_position(piece.cells(), x, y) {
            self.grid.commit(piece.cells(), x, y, piece.tile());
            self.active = Some(piece);
            self.can_hold = true;
        } else {
            self.active = None;
            self.game_over = true;
        }
    }

    /// Swap the falling piece with the hold slot. Returns the replacement
    /// piece, or None when its spawn cells are blocked (game over).
    fn hold_swap(&mut self, falling: Piece) -> Option<Piece> {
        self.can_hold = false;
        let stashed = self.hold.replace(falling.shape());
        let shape = match stashed {
            Some(shape) => shape,
            None => self.bag.next(&mut self.rng),
        };

        let piece = self.make_piece(shape);
        let (x, y) = piece.position();
        if self.grid.is_valid_position(piece.cells(), x, y) {
            Some(piece)
        } else {
            None
        }
    }

    fn make_piece(&mut self, shape: Shape) -> Piece {
        let bomb = self.config.bomb_chance > 0.0 && self.rng.next_f32() < self.config.bomb_chance;
        Piece::spawn(shape, self.config.spawn_x, self.config.spawn_y, bomb)
    }
}
