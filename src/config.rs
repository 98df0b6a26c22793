use log::{debug, warn};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) year: Option<u16>,
    #[serde(default)]
    pub(crate) session_file: Option<PathBuf>,
    #[serde(default)]
    pub(crate) input_file: Option<PathBuf>,
    #[serde(default)]
    pub(crate) base_url: Option<String>,
}

impl Config {
    pub(crate) fn load() -> Self {
        // Try config locations in order of priority
        for path in Self::get_config_paths() {
            if path.exists()
                && let Ok(content) = fs::read_to_string(&path)
            {
                match Self::parse(&content) {
                    Ok(config) => {
                        debug!("Loaded config from {}", path.display());
                        return config;
                    }
                    Err(e) => {
                        warn!("Failed to parse {}: {}", path.display(), e);
                    }
                }
            }
        }

        Self::default()
    }

    pub(crate) fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/aoc-input/config.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("aoc-input").join("config.toml"));
        }

        // 2. Platform config dir (e.g. ~/Library/Application Support on macOS)
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("aoc-input").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.aoc-input.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".aoc-input.toml"));
        }

        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn config_paths_search_xdg_first_and_home_dotfile_last() {
        let Some(home) = dirs::home_dir() else {
            return;
        };
        let paths = Config::get_config_paths();

        assert_eq!(
            paths.first(),
            Some(&home.join(".config").join("aoc-input").join("config.toml"))
        );
        assert_eq!(paths.last(), Some(&home.join(".aoc-input.toml")));
        assert!(
            paths[..paths.len() - 1]
                .iter()
                .all(|p| p.ends_with(Path::new("aoc-input").join("config.toml")))
        );
    }

    #[test]
    fn config_paths_have_no_duplicates() {
        let paths = Config::get_config_paths();
        for (i, p) in paths.iter().enumerate() {
            assert!(!paths[i + 1..].contains(p), "{} listed twice", p.display());
        }
    }

    #[test]
    fn parse_all_keys() {
        let config = Config::parse(
            r#"
year = 2023
session_file = "/home/elf/.aoc/session.txt"
input_file = "data/input.txt"
base_url = "http://localhost:8080"
"#,
        )
        .unwrap();

        assert_eq!(config.year, Some(2023));
        assert_eq!(
            config.session_file,
            Some(PathBuf::from("/home/elf/.aoc/session.txt"))
        );
        assert_eq!(config.input_file, Some(PathBuf::from("data/input.txt")));
        assert_eq!(config.base_url.as_deref(), Some("http://localhost:8080"));
    }

    #[test]
    fn parse_empty_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert!(config.year.is_none());
        assert!(config.session_file.is_none());
        assert!(config.input_file.is_none());
        assert!(config.base_url.is_none());
    }

    #[test]
    fn parse_rejects_wrong_types() {
        assert!(Config::parse("year = \"twenty\"").is_err());
    }
}
