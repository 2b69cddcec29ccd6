use std::env;
use std::path::PathBuf;

use dotenvy::dotenv;
use log::LevelFilter;

/// # application settings
/// read from the environment, a `.env` file in the working directory is loaded first.
/// server settings (address, port, templates) are left to `Rocket.toml`.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// `LOGGING_LEVEL`
    pub logging_level: LevelFilter,
    /// `LOG_FILE`, `None` when set to an empty string
    pub log_file: Option<PathBuf>,
    /// `DATASET_PATH`, the bundled dataset is used when unset
    pub dataset_path: Option<PathBuf>,
    /// `STRICT_REFERENCES`
    pub strict_references: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            logging_level: LevelFilter::Info,
            log_file: Some(PathBuf::from("program.log")),
            dataset_path: None,
            strict_references: false,
        }
    }
}

impl Settings {
    pub fn from_env() -> Settings {
        dotenv().ok();
        Settings::from_lookup(|key| env::var(key).ok())
    }

    /// build the settings from any key lookup, missing keys keep their default
    pub fn from_lookup<F>(lookup: F) -> Settings
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Settings::default();

        let logging_level = lookup("LOGGING_LEVEL")
            .map(|level| parse_level(&level))
            .unwrap_or(defaults.logging_level);

        let log_file = match lookup("LOG_FILE") {
            Some(path) if path.trim().is_empty() => None,
            Some(path) => Some(PathBuf::from(path)),
            None => defaults.log_file,
        };

        let dataset_path = lookup("DATASET_PATH")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        let strict_references = lookup("STRICT_REFERENCES")
            .map(|value| parse_flag(&value))
            .unwrap_or(defaults.strict_references);

        Settings {
            logging_level,
            log_file,
            dataset_path,
            strict_references,
        }
    }
}

fn parse_level(level: &str) -> LevelFilter {
    match level.trim().to_uppercase().as_str() {
        "OFF" => LevelFilter::Off,
        "ERROR" => LevelFilter::Error,
        "WARN" => LevelFilter::Warn,
        "DEBUG" => LevelFilter::Debug,
        "TRACE" => LevelFilter::Trace,
        // default to info
        _ => LevelFilter::Info,
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "on")
}
