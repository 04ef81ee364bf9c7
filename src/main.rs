//! Terminal runner: the reference embedder of the engine.
//!
//! Drives `Session::tick` on a fixed timestep, folds crossterm key presses
//! into per-tick input snapshots, and redraws after every tick. Audio events
//! are surfaced as a terminal bell.

use std::io::Write;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::config::GameConfig;
use blockfall::core::Session;
use blockfall::input::{should_quit, InputCollector};
use blockfall::term::TerminalView;
use blockfall::types::{GameEvent, TICK_MS};

fn main() -> Result<()> {
    let mut term = TerminalView::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();

    if let Ok(Some(report)) = &result {
        println!(
            "final score: {}  time: {:.0}s",
            report.score, report.duration
        );
    }
    result.map(|_| ())
}

fn run(term: &mut TerminalView) -> Result<Option<blockfall::types::SessionReport>> {
    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1);
    let mut session = Session::new(GameConfig::default(), seed)?;
    session.start();

    let mut collector = InputCollector::new();
    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        term.draw(&session)?;

        // Input with timeout until the next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(Some(session.report()));
                    }
                    collector.key_press(key.code);
                }
            }
        }

        if last_tick.elapsed() >= tick_duration {
            let elapsed = last_tick.elapsed().as_secs_f32();
            last_tick = Instant::now();

            let outcome = session.tick(elapsed, collector.take());
            for event in &outcome.events {
                // Fire-and-forget audio: a bell per notable event.
                if matches!(event, GameEvent::Locked | GameEvent::LinesCleared(_)) {
                    print!("\x07");
                    let _ = std::io::stdout().flush();
                }
            }

            if outcome.game_over {
                // Terminal state: keep displaying the final screen until quit.
                term.draw(&session)?;
            }
        }
    }
}
