//! Command trait, session state, registry, and dispatch logic.
//!
//! Supports quoted arguments and backslash escapes, case-insensitive
//! command names, aliases, and per-session command history.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use super::style::Line;
use crate::config::ShellConfig;
use crate::error::{ArgosError, Result};

/// Output produced by a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    /// Colored text lines.
    Text(Vec<Line>),
    /// Command produced no visible output.
    None,
    /// Signal to clear the terminal.
    Clear,
    /// Signal to leave the read-eval loop.
    Exit,
}

/// Mutable state owned by one shell session and passed to every command.
///
/// Dropped together with the shell, so nothing outlives `exit`.
pub struct Session {
    history: VecDeque<String>,
    history_limit: usize,
    rng: Box<dyn RngCore>,
}

impl Session {
    /// Creates a session with an explicit random source.
    pub fn new(rng: Box<dyn RngCore>, history_limit: usize) -> Self {
        Self {
            history: VecDeque::new(),
            history_limit,
            rng,
        }
    }

    /// Creates a session from configuration: seeded when `config.seed` is
    /// set, OS-seeded otherwise.
    pub fn from_config(config: &ShellConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::new(Box::new(rng), config.history_limit)
    }

    /// Random source for commands that pick canned output.
    pub fn rng(&mut self) -> &mut dyn RngCore {
        self.rng.as_mut()
    }

    /// Command lines entered so far, oldest first.
    pub fn history(&self) -> &VecDeque<String> {
        &self.history
    }

    /// Records a command line, dropping the oldest entry past the limit.
    pub fn push_history(&mut self, line: &str) {
        if self.history_limit == 0 {
            return;
        }
        self.history.push_back(line.to_string());
        if self.history.len() > self.history_limit {
            self.history.pop_front();
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("history", &self.history)
            .field("history_limit", &self.history_limit)
            .finish_non_exhaustive()
    }
}

/// A single executable command.
pub trait Command {
    /// The command name (what the user types).
    fn name(&self) -> &str;

    /// Alternative names that dispatch to the same command.
    fn aliases(&self) -> &[&str] {
        &[]
    }

    /// One-line description for `help`.
    fn description(&self) -> &str;

    /// Usage string (e.g. "disk <algorithm>").
    fn usage(&self) -> &str;

    /// Execute the command with the given arguments and session.
    fn execute(&self, args: &[&str], session: &mut Session) -> Result<CommandOutput>;
}

/// Registry of available commands with dispatch.
///
/// Commands keep registration order, which is also the `help` order.
pub struct CommandRegistry {
    commands: Vec<Box<dyn Command>>,
}

impl CommandRegistry {
    /// Create an empty command registry.
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Register a command. Replaces any existing command with the same name.
    pub fn register(&mut self, cmd: Box<dyn Command>) {
        let name = cmd.name().to_string();
        match self.commands.iter().position(|c| c.name() == name) {
            Some(idx) => self.commands[idx] = cmd,
            None => self.commands.push(cmd),
        }
    }

    /// Looks up a command by name or alias, ignoring case.
    pub fn find(&self, name: &str) -> Option<&dyn Command> {
        self.commands
            .iter()
            .find(|c| {
                c.name().eq_ignore_ascii_case(name)
                    || c.aliases().iter().any(|a| a.eq_ignore_ascii_case(name))
            })
            .map(|c| c.as_ref())
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether no commands are registered.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// The `help` listing.
    pub fn help_lines(&self) -> Vec<Line> {
        let mut lines = vec![
            Line::info("Available commands:"),
            Line::plain(format!("  {:<10}Show this help message", "help")),
        ];
        for cmd in &self.commands {
            let mut text = format!("  {:<10}{}", cmd.name(), cmd.description());
            let mut notes = Vec::new();
            if cmd.usage() != cmd.name() {
                notes.push(format!("usage: {}", cmd.usage()));
            }
            if !cmd.aliases().is_empty() {
                notes.push(format!("alias: {}", cmd.aliases().join(", ")));
            }
            if !notes.is_empty() {
                text.push_str(&format!(" ({})", notes.join("; ")));
            }
            lines.push(Line::plain(text));
        }
        lines
    }

    /// Parse and execute a command line.
    ///
    /// Blank lines do nothing and are not recorded. Every other line is
    /// pushed to the session history before it runs.
    pub fn execute(&self, line: &str, session: &mut Session) -> Result<CommandOutput> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(CommandOutput::None);
        }
        session.push_history(trimmed);

        let tokens = tokenize(trimmed)?;
        let Some((name, rest)) = tokens.split_first() else {
            return Ok(CommandOutput::None);
        };
        let args: Vec<&str> = rest.iter().map(String::as_str).collect();

        if name.eq_ignore_ascii_case("help") {
            return Ok(CommandOutput::Text(self.help_lines()));
        }

        let cmd = self
            .find(name)
            .ok_or_else(|| ArgosError::CommandNotFound(name.clone()))?;
        log::debug!("dispatch {} with {} args", cmd.name(), args.len());
        cmd.execute(&args, session)
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tokenizer: handles single quotes, double quotes, and backslash escapes.
// ---------------------------------------------------------------------------

/// Tokenize a command line respecting quotes and backslash escapes.
///
/// - Single-quoted strings preserve all characters literally.
/// - Double-quoted strings allow `\"` and `\\` escapes.
/// - Backslash escapes the next character outside of quotes.
pub fn tokenize(input: &str) -> Result<Vec<String>> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut chars = input.chars().peekable();
    let mut in_single = false;
    let mut in_double = false;
    // Distinguishes `""` (an empty token) from no token at all.
    let mut quoted = false;

    while let Some(ch) = chars.next() {
        if in_single {
            if ch == '\'' {
                in_single = false;
            } else {
                current.push(ch);
            }
        } else if in_double {
            match ch {
                '"' => in_double = false,
                '\\' => match chars.peek() {
                    Some(&next @ ('"' | '\\')) => {
                        current.push(next);
                        chars.next();
                    }
                    _ => current.push('\\'),
                },
                _ => current.push(ch),
            }
        } else {
            match ch {
                '\'' => {
                    in_single = true;
                    quoted = true;
                }
                '"' => {
                    in_double = true;
                    quoted = true;
                }
                '\\' => {
                    if let Some(next) = chars.next() {
                        current.push(next);
                    }
                }
                c if c.is_whitespace() => {
                    if !current.is_empty() || quoted {
                        tokens.push(std::mem::take(&mut current));
                        quoted = false;
                    }
                }
                _ => current.push(ch),
            }
        }
    }

    if in_single {
        return Err(ArgosError::Parse("unterminated single quote".to_string()));
    }
    if in_double {
        return Err(ArgosError::Parse("unterminated double quote".to_string()));
    }

    if !current.is_empty() || quoted {
        tokens.push(current);
    }

    Ok(tokens)
}
