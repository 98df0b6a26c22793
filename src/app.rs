//! Orchestration: cache probe, then credentials, then download.

use std::path::Path;

use chrono::{DateTime, Utc};
use log::{debug, info};

use crate::cache::InputCache;
use crate::cli::Cli;
use crate::error::AppError;
use crate::fetcher::{Fetch, UreqFetcher};
use crate::puzzle::Puzzle;
use crate::session::{Prompter, SessionStore, TerminalPrompter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    /// The input file was already on disk
    Cached,
    /// The input was fetched and written
    Downloaded { bytes: usize },
}

pub(crate) struct RunContext<'a> {
    pub(crate) input_file: &'a Path,
    pub(crate) session_file: &'a Path,
    pub(crate) prompter: &'a dyn Prompter,
    pub(crate) fetcher: &'a dyn Fetch,
    /// Clock for the unlock check
    pub(crate) now: DateTime<Utc>,
}

/// Make sure the puzzle input for `puzzle` is cached on disk.
///
/// An existing input file, whatever its contents, satisfies the request.
/// Otherwise the puzzle must be unlocked at `ctx.now`, the session key is
/// prompted for if missing, and the input is fetched and written.
pub(crate) fn ensure_day_input(ctx: &RunContext<'_>, puzzle: Puzzle) -> Result<Outcome, AppError> {
    let cache = InputCache::new(ctx.input_file);
    if cache.exists() {
        debug!("{} exists, skipping download", cache.path().display());
        return Ok(Outcome::Cached);
    }

    puzzle.ensure_unlocked(ctx.now)?;

    let store = SessionStore::new(ctx.session_file);
    store.ensure(ctx.prompter)?;
    let token = store.read()?;

    info!("Downloading {} day {} input", puzzle.year, puzzle.day);
    let body = ctx.fetcher.fetch(puzzle, &token)?;
    cache.store(&body)?;

    Ok(Outcome::Downloaded { bytes: body.len() })
}

pub(crate) fn run(cli: &Cli) -> Result<Outcome, AppError> {
    let puzzle = Puzzle::new(cli.year(), cli.day)?;
    let fetcher = UreqFetcher::new(cli.base_url());
    let ctx = RunContext {
        input_file: cli.input_file(),
        session_file: cli.session_file(),
        prompter: &TerminalPrompter,
        fetcher: &fetcher,
        now: Utc::now(),
    };

    ensure_day_input(&ctx, puzzle)
}
