//! The stdin → engine → stdout loop.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::warn;

use sm_core::{BotId, Tick};
use sm_engine::{Engine, EngineObserver, TickResponse};
use sm_world::WorldView;

/// Counts per-bot failures and undecodable lines over a run.
#[derive(Debug, Default)]
pub struct ErrorTally {
    pub bot_errors:    u64,
    pub skipped_lines: u64,
}

impl EngineObserver for ErrorTally {
    fn on_bot_error(&mut self, _tick: Tick, _bot: BotId, _error: &str) {
        self.bot_errors += 1;
    }
}

/// Drive `engine` until `input` ends.  Returns the number of ticks run.
///
/// Blank lines are ignored.  A line that does not decode as a snapshot is
/// answered with an empty response so the game engine stays in lockstep.
/// Engine errors end the run.
pub fn run<R: BufRead, W: Write>(
    engine:  &mut Engine,
    input:   R,
    mut out: W,
    tally:   &mut ErrorTally,
) -> Result<u64> {
    let mut ticks = 0;
    for (lineno, line) in input.lines().enumerate() {
        let line = line.context("reading snapshot")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let response = match WorldView::from_json(line) {
            Ok(view) => {
                ticks += 1;
                engine
                    .tick(&view, tally)
                    .with_context(|| format!("engine failed on tick {}", view.tick))?
            }
            Err(e) => {
                warn!(line = lineno + 1, error = %e, "undecodable snapshot; answering empty");
                tally.skipped_lines += 1;
                TickResponse::default()
            }
        };

        writeln!(out, "{}", response.to_json()?)?;
        out.flush()?;
    }
    Ok(ticks)
}
