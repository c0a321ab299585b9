use std::fs;
use std::path::{Path, PathBuf};
use serde::Deserialize;

const CONFIG_FILE_NAME: &str = ".txlens.toml";

#[derive(Deserialize, Debug, Default)]
pub(crate) struct Config {
    /// Transactions file used when no path is given on the command line
    pub(crate) transactions_file: Option<String>,
}

impl Config {
    pub(crate) fn empty() -> Config {
        Config::default()
    }

    /// Load config from the user's home directory. A missing or unreadable
    /// file behaves as an empty config.
    pub(crate) fn load() -> Config {
        match dirs::home_dir() {
            Some(home) => Config::load_from_file(&home.join(CONFIG_FILE_NAME)),
            None => Config::empty(),
        }
    }

    pub(crate) fn load_from_file(file_path: &Path) -> Config {
        if file_path.exists() && file_path.is_file() {
            match fs::read_to_string(file_path) {
                Ok(content) => toml::from_str::<Config>(&content).unwrap_or_else(|_| Config::empty()),
                Err(_) => Config::empty(),
            }
        } else {
            Config::empty()
        }
    }

    pub(crate) fn history_file() -> PathBuf {
        let mut path = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(".txlens_history");
        path
    }
}
