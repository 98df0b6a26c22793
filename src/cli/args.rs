//! CLI argument definitions
//!
//! Every option falls back to the config file, then to the built-in default.

use std::path::{Path, PathBuf};

use clap::Parser;
use log::LevelFilter;

use crate::config::Config;
use crate::consts::{
    DEFAULT_BASE_URL, DEFAULT_DAY, DEFAULT_INPUT_FILE, DEFAULT_SESSION_FILE, DEFAULT_YEAR,
    FIRST_YEAR, LAST_DAY,
};

#[derive(Debug, Parser)]
#[command(name = "aoc-input")]
#[command(about = "Download and cache an Advent of Code puzzle input", version)]
pub(crate) struct Cli {
    /// Puzzle day (1-25, or 1-12 from 2025)
    #[arg(
        default_value_t = DEFAULT_DAY,
        value_parser = clap::value_parser!(u8).range(1..=i64::from(LAST_DAY))
    )]
    pub(crate) day: u8,

    /// Event year [default: 2022]
    #[arg(short, long, value_parser = clap::value_parser!(u16).range(i64::from(FIRST_YEAR)..))]
    pub(crate) year: Option<u16>,

    /// Session key file [default: ../../session.txt]
    #[arg(short, long, value_name = "PATH")]
    pub(crate) session_file: Option<PathBuf>,

    /// Where to cache the input [default: input.txt]
    #[arg(short, long, value_name = "PATH")]
    pub(crate) input_file: Option<PathBuf>,

    /// Site to download from [default: https://adventofcode.com]
    #[arg(long, value_name = "URL")]
    pub(crate) base_url: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        if self.year.is_none() {
            self.year = config.year;
        }
        if self.session_file.is_none() {
            self.session_file = config.session_file.clone();
        }
        if self.input_file.is_none() {
            self.input_file = config.input_file.clone();
        }
        if self.base_url.is_none() {
            self.base_url = config.base_url.clone();
        }
        self
    }

    pub(crate) fn year(&self) -> u16 {
        self.year.unwrap_or(DEFAULT_YEAR)
    }

    pub(crate) fn session_file(&self) -> &Path {
        self.session_file
            .as_deref()
            .unwrap_or(Path::new(DEFAULT_SESSION_FILE))
    }

    pub(crate) fn input_file(&self) -> &Path {
        self.input_file
            .as_deref()
            .unwrap_or(Path::new(DEFAULT_INPUT_FILE))
    }

    pub(crate) fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    pub(crate) fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("aoc-input").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults_match_fixed_layout() {
        let cli = parse(&[]);
        assert_eq!(cli.day, 1);
        assert_eq!(cli.year(), 2022);
        assert_eq!(cli.session_file(), Path::new("../../session.txt"));
        assert_eq!(cli.input_file(), Path::new("input.txt"));
        assert_eq!(cli.base_url(), "https://adventofcode.com");
        assert_eq!(cli.log_level(), LevelFilter::Info);
    }

    #[test]
    fn day_is_positional() {
        assert_eq!(parse(&["14"]).day, 14);
    }

    #[test]
    fn day_out_of_range_is_rejected() {
        assert!(Cli::try_parse_from(["aoc-input", "0"]).is_err());
        assert!(Cli::try_parse_from(["aoc-input", "26"]).is_err());
    }

    #[test]
    fn year_before_first_event_is_rejected() {
        assert!(Cli::try_parse_from(["aoc-input", "--year", "2014"]).is_err());
    }

    #[test]
    fn config_fills_unset_options() {
        let config = Config {
            year: Some(2021),
            session_file: Some(PathBuf::from("/tmp/session.txt")),
            input_file: None,
            base_url: Some("http://localhost:1234".to_string()),
        };

        let cli = parse(&["3"]).with_config(&config);

        assert_eq!(cli.year(), 2021);
        assert_eq!(cli.session_file(), Path::new("/tmp/session.txt"));
        assert_eq!(cli.input_file(), Path::new("input.txt"));
        assert_eq!(cli.base_url(), "http://localhost:1234");
    }

    #[test]
    fn cli_takes_precedence_over_config() {
        let config = Config {
            year: Some(2021),
            session_file: Some(PathBuf::from("/tmp/session.txt")),
            input_file: Some(PathBuf::from("/tmp/input.txt")),
            base_url: Some("http://localhost:1234".to_string()),
        };

        let cli = parse(&[
            "-y",
            "2023",
            "-s",
            "token.txt",
            "-i",
            "day.txt",
            "--base-url",
            "http://example.test",
            "-v",
        ])
        .with_config(&config);

        assert_eq!(cli.year(), 2023);
        assert_eq!(cli.session_file(), Path::new("token.txt"));
        assert_eq!(cli.input_file(), Path::new("day.txt"));
        assert_eq!(cli.base_url(), "http://example.test");
        assert_eq!(cli.log_level(), LevelFilter::Debug);
    }
}
