/// Session token location, relative to a `<year>/<day>` working directory
pub(crate) const DEFAULT_SESSION_FILE: &str = "../../session.txt";

/// Cached puzzle input, relative to the working directory
pub(crate) const DEFAULT_INPUT_FILE: &str = "input.txt";

pub(crate) const DEFAULT_BASE_URL: &str = "https://adventofcode.com";

pub(crate) const DEFAULT_YEAR: u16 = 2022;

pub(crate) const DEFAULT_DAY: u8 = 1;

/// First year an event ran
pub(crate) const FIRST_YEAR: u16 = 2015;

/// Puzzles are published on December 1st through 25th
pub(crate) const LAST_DAY: u8 = 25;

/// From this year on an event runs for twelve days
pub(crate) const SHORT_EVENT_YEAR: u16 = 2025;

pub(crate) const SHORT_EVENT_LAST_DAY: u8 = 12;

pub(crate) const SESSION_PROMPT: &str = "Enter your session key";
