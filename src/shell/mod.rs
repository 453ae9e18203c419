//! Interactive command shell.
//!
//! [`Shell`] owns the command registry, the per-session state, and the
//! configuration. It reads one line at a time, dispatches it through the
//! [`CommandRegistry`], and renders the result before reading the next.
//! Command faults are printed in red and never end the loop; only `exit`,
//! end of input, or a console I/O failure do.

pub mod argue;
pub mod builtins;
pub mod interpreter;
pub mod math;
pub mod sched_commands;
pub mod style;

use std::io::{BufRead, Write};

pub use argue::{register_argument_commands, ArgumentAnalysis, ResponseTable, Style};
pub use builtins::{register_builtins, VERSION_BANNER};
pub use interpreter::{tokenize, Command, CommandOutput, CommandRegistry, Session};
pub use math::{register_math, MathError};
pub use sched_commands::register_scheduling_commands;
pub use style::{Color, Line, CLEAR_SCREEN};

use crate::config::ShellConfig;
use crate::error::Result;

pub const WELCOME: &str = "Welcome to ArgOS Shell. Type 'help' for commands.";
pub const CLEARED: &str = "Terminal cleared. Type 'help' for commands.";
pub const GOODBYE: &str = "Exiting ArgOS Shell. Goodbye!";

/// Whether the read-eval loop keeps going after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Registry with every shell command.
pub fn default_registry() -> CommandRegistry {
    let mut reg = CommandRegistry::new();
    register_builtins(&mut reg);
    register_argument_commands(&mut reg);
    register_math(&mut reg);
    register_scheduling_commands(&mut reg);
    reg
}

/// The ArgOS read-eval loop.
pub struct Shell {
    registry: CommandRegistry,
    session: Session,
    config: ShellConfig,
}

impl Shell {
    pub fn new(config: ShellConfig) -> Self {
        let session = Session::from_config(&config);
        Self::with_session(config, session)
    }

    /// Uses a caller-built session (e.g. with a fixed RNG).
    pub fn with_session(config: ShellConfig, session: Session) -> Self {
        Self {
            registry: default_registry(),
            session,
            config,
        }
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    /// Runs until `exit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, out: &mut W) -> Result<()> {
        self.clear_screen(out)?;
        self.write_line(out, &Line::info(WELCOME))?;

        let mut buf = String::new();
        loop {
            write!(out, "{}", Color::Green.paint(&self.config.prompt, self.config.color))?;
            out.flush()?;

            buf.clear();
            if input.read_line(&mut buf)? == 0 {
                log::debug!("end of input");
                writeln!(out)?;
                break;
            }
            if self.handle_line(&buf, out)? == Flow::Exit {
                break;
            }
        }
        out.flush()?;
        Ok(())
    }

    /// Executes one line and writes its output.
    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> Result<Flow> {
        let output = match self.registry.execute(line, &mut self.session) {
            Ok(output) => output,
            Err(e) => {
                log::warn!("command failed: {e}");
                self.write_line(out, &Line::error(e.to_string()))?;
                return Ok(Flow::Continue);
            }
        };

        match output {
            CommandOutput::Text(lines) => {
                for line in &lines {
                    self.write_line(out, line)?;
                }
            }
            CommandOutput::None => {}
            CommandOutput::Clear => {
                self.clear_screen(out)?;
                self.write_line(out, &Line::info(CLEARED))?;
            }
            CommandOutput::Exit => {
                self.write_line(out, &Line::info(GOODBYE))?;
                return Ok(Flow::Exit);
            }
        }
        Ok(Flow::Continue)
    }

    fn write_line<W: Write>(&self, out: &mut W, line: &Line) -> Result<()> {
        writeln!(out, "{}", line.render(self.config.color))?;
        Ok(())
    }

    /// Plain output carries no escape sequences at all.
    fn clear_screen<W: Write>(&self, out: &mut W) -> Result<()> {
        if self.config.color {
            write!(out, "{CLEAR_SCREEN}")?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for Shell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Shell")
            .field("commands", &self.registry.len())
            .field("session", &self.session)
            .field("config", &self.config)
            .finish()
    }
}
