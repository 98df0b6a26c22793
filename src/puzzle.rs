//! Puzzle identity
//!
//! A puzzle is one day of one event. Validates the pair and knows where its
//! input lives on the remote site and when it unlocks.

use chrono::{DateTime, TimeZone, Utc};

use crate::consts::{FIRST_YEAR, LAST_DAY, SHORT_EVENT_LAST_DAY, SHORT_EVENT_YEAR};
use crate::error::AppError;

/// Puzzles unlock at midnight US Eastern (UTC-5) on their December day
const UNLOCK_HOUR_UTC: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Puzzle {
    pub(crate) year: u16,
    pub(crate) day: u8,
}

impl Puzzle {
    pub(crate) fn new(year: u16, day: u8) -> Result<Self, AppError> {
        if year < FIRST_YEAR || day == 0 || day > last_day(year) {
            return Err(AppError::InvalidPuzzle { year, day });
        }
        Ok(Self { year, day })
    }

    /// `<base>/<year>/day/<day>/input`, tolerating a trailing slash on the base
    pub(crate) fn input_url(&self, base_url: &str) -> String {
        format!(
            "{}/{}/day/{}/input",
            base_url.trim_end_matches('/'),
            self.year,
            self.day
        )
    }

    pub(crate) fn unlocks_at(&self) -> Option<DateTime<Utc>> {
        Utc.with_ymd_and_hms(
            i32::from(self.year),
            12,
            u32::from(self.day),
            UNLOCK_HOUR_UTC,
            0,
            0,
        )
        .single()
    }

    pub(crate) fn ensure_unlocked(&self, now: DateTime<Utc>) -> Result<(), AppError> {
        match self.unlocks_at() {
            Some(unlocks_at) if now < unlocks_at => Err(AppError::Locked {
                year: self.year,
                day: self.day,
                unlocks_at,
            }),
            _ => Ok(()),
        }
    }
}

/// Final puzzle day of the `year` event
pub(crate) fn last_day(year: u16) -> u8 {
    if year >= SHORT_EVENT_YEAR {
        SHORT_EVENT_LAST_DAY
    } else {
        LAST_DAY
    }
}
