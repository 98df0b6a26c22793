use std::io;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Failed to read session file {}: {source}", .path.display())]
    SessionRead { path: PathBuf, source: io::Error },

    #[error("Failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("Request to {url} failed: {source}")]
    Network { url: String, source: ureq::Error },

    #[error("Request to {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("user cancelled")]
    Cancelled,

    #[error("Prompt failed: {0}")]
    Prompt(#[source] io::Error),

    #[error("No puzzle for {year} day {day}")]
    InvalidPuzzle { year: u16, day: u8 },

    #[error("{year} day {day} is not unlocked until {unlocks_at}")]
    Locked {
        year: u16,
        day: u8,
        unlocks_at: DateTime<Utc>,
    },
}
