use std::env;
use std::io::{self, IsTerminal};
use std::path::PathBuf;

use log::warn;

pub const PROMPT: &str = "$ ";
pub const DEFAULT_HISTORY_SIZE: usize = 1000;
const HISTORY_FILE_NAME: &str = ".minish_history";

/// Settings taken from the environment at startup. The shell has no flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    pub prompt: String,
    /// Use the line editor instead of plain line reads.
    pub interactive: bool,
    /// `None` disables history persistence.
    pub history_file: Option<PathBuf>,
    pub history_size: usize,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: PROMPT.to_string(),
            interactive: false,
            history_file: None,
            history_size: DEFAULT_HISTORY_SIZE,
        }
    }
}

impl ShellConfig {
    pub fn from_env() -> Self {
        let mut config = Self::from_vars(|name| env::var(name).ok(), dirs::home_dir());
        config.interactive = io::stdin().is_terminal();
        config
    }

    /// Reads `MINISH_HISTFILE` and `MINISH_HISTSIZE` through `var`.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>, home: Option<PathBuf>) -> Self {
        let history_file = match var("MINISH_HISTFILE") {
            Some(path) if path.is_empty() => None,
            Some(path) => Some(PathBuf::from(path)),
            None => home.map(|home| home.join(HISTORY_FILE_NAME)),
        };

        let history_size = match var("MINISH_HISTSIZE") {
            Some(size) => size.parse().unwrap_or_else(|_| {
                warn!(
                    "ignoring MINISH_HISTSIZE={:?}, using {}",
                    size, DEFAULT_HISTORY_SIZE
                );
                DEFAULT_HISTORY_SIZE
            }),
            None => DEFAULT_HISTORY_SIZE,
        };

        Self {
            history_file,
            history_size,
            ..Self::default()
        }
    }
}
