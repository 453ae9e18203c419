//! Shell configuration.
//!
//! Defaults cover normal interactive use. A few environment variables
//! override them:
//!
//! | Variable | Effect |
//! |----------|--------|
//! | `ARGOS_SEED` | u64 seed for the argument bot |
//! | `NO_COLOR`, `ARGOS_NO_COLOR` | any non-empty value disables ANSI colors |
//! | `ARGOS_HISTORY_LIMIT` | max history entries kept (0 disables history) |

use serde::{Deserialize, Serialize};

/// Prompt printed before each command line.
pub const DEFAULT_PROMPT: &str = "user@argos:~$ ";

/// Default cap on recorded command lines.
pub const DEFAULT_HISTORY_LIMIT: usize = 100;

/// Runtime settings for one shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellConfig {
    pub prompt: String,
    /// Emit ANSI color sequences.
    pub color: bool,
    /// Fixed RNG seed; `None` seeds from the OS.
    pub seed: Option<u64>,
    pub history_limit: usize,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            color: true,
            seed: None,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl ShellConfig {
    /// Defaults overridden by the process environment.
    pub fn from_env() -> Self {
        Self::default().apply_vars(|key| std::env::var(key).ok())
    }

    /// Applies overrides from `lookup`, which maps a variable name to its
    /// value. Unparseable values are logged and ignored.
    pub fn apply_vars<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup("ARGOS_SEED") {
            match raw.trim().parse::<u64>() {
                Ok(seed) => self.seed = Some(seed),
                Err(e) => log::warn!("ignoring ARGOS_SEED={raw:?}: {e}"),
            }
        }

        let no_color = ["NO_COLOR", "ARGOS_NO_COLOR"]
            .iter()
            .any(|key| lookup(key).is_some_and(|v| !v.is_empty()));
        if no_color {
            self.color = false;
        }

        if let Some(raw) = lookup("ARGOS_HISTORY_LIMIT") {
            match raw.trim().parse::<usize>() {
                Ok(limit) => self.history_limit = limit,
                Err(e) => log::warn!("ignoring ARGOS_HISTORY_LIMIT={raw:?}: {e}"),
            }
        }

        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }
}
