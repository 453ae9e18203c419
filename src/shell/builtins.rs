//! Built-in commands: clear, echo, version, hello, history, exit.

use super::interpreter::{Command, CommandOutput, CommandRegistry, Session};
use super::style::Line;
use crate::error::Result;

/// Fixed version banner.
pub const VERSION_BANNER: &str = "ArgOS Shell v2.0 (build 2023.12)";

/// Register the built-in commands into a registry.
pub fn register_builtins(reg: &mut CommandRegistry) {
    reg.register(Box::new(ClearCmd));
    reg.register(Box::new(EchoCmd));
    reg.register(Box::new(VersionCmd));
    reg.register(Box::new(HistoryCmd));
    reg.register(Box::new(GreetCmd));
    reg.register(Box::new(ExitCmd));
}

// ---------------------------------------------------------------------------
// clear
// ---------------------------------------------------------------------------

struct ClearCmd;
impl Command for ClearCmd {
    fn name(&self) -> &str {
        "clear"
    }
    fn description(&self) -> &str {
        "Clear the terminal"
    }
    fn usage(&self) -> &str {
        "clear"
    }
    fn execute(&self, _args: &[&str], _session: &mut Session) -> Result<CommandOutput> {
        Ok(CommandOutput::Clear)
    }
}

// ---------------------------------------------------------------------------
// echo / print
// ---------------------------------------------------------------------------

struct EchoCmd;
impl Command for EchoCmd {
    fn name(&self) -> &str {
        "echo"
    }
    fn aliases(&self) -> &[&str] {
        &["print"]
    }
    fn description(&self) -> &str {
        "Echo the input"
    }
    fn usage(&self) -> &str {
        "echo <text>"
    }
    fn execute(&self, args: &[&str], _session: &mut Session) -> Result<CommandOutput> {
        Ok(CommandOutput::Text(vec![Line::plain(args.join(" "))]))
    }
}

// ---------------------------------------------------------------------------
// version
// ---------------------------------------------------------------------------

struct VersionCmd;
impl Command for VersionCmd {
    fn name(&self) -> &str {
        "version"
    }
    fn description(&self) -> &str {
        "Show system version"
    }
    fn usage(&self) -> &str {
        "version"
    }
    fn execute(&self, _args: &[&str], _session: &mut Session) -> Result<CommandOutput> {
        Ok(CommandOutput::Text(vec![Line::info(VERSION_BANNER)]))
    }
}

// ---------------------------------------------------------------------------
// history
// ---------------------------------------------------------------------------

struct HistoryCmd;
impl Command for HistoryCmd {
    fn name(&self) -> &str {
        "history"
    }
    fn description(&self) -> &str {
        "Show commands entered this session"
    }
    fn usage(&self) -> &str {
        "history"
    }
    fn execute(&self, _args: &[&str], session: &mut Session) -> Result<CommandOutput> {
        let lines = session
            .history()
            .iter()
            .enumerate()
            .map(|(i, entry)| Line::plain(format!("{:>4}  {entry}", i + 1)))
            .collect();
        Ok(CommandOutput::Text(lines))
    }
}

// ---------------------------------------------------------------------------
// hello / hi / hey
// ---------------------------------------------------------------------------

struct GreetCmd;
impl Command for GreetCmd {
    fn name(&self) -> &str {
        "hello"
    }
    fn aliases(&self) -> &[&str] {
        &["hi", "hey"]
    }
    fn description(&self) -> &str {
        "Say hello"
    }
    fn usage(&self) -> &str {
        "hello"
    }
    fn execute(&self, _args: &[&str], _session: &mut Session) -> Result<CommandOutput> {
        Ok(CommandOutput::Text(vec![Line::success(
            "Hi there! How are you?",
        )]))
    }
}

// ---------------------------------------------------------------------------
// exit
// ---------------------------------------------------------------------------

struct ExitCmd;
impl Command for ExitCmd {
    fn name(&self) -> &str {
        "exit"
    }
    fn description(&self) -> &str {
        "Exit the shell"
    }
    fn usage(&self) -> &str {
        "exit"
    }
    fn execute(&self, _args: &[&str], _session: &mut Session) -> Result<CommandOutput> {
        Ok(CommandOutput::Exit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn setup() -> (CommandRegistry, Session) {
        let mut reg = CommandRegistry::new();
        register_builtins(&mut reg);
        let session = Session::new(Box::new(SmallRng::seed_from_u64(1)), 100);
        (reg, session)
    }

    fn exec(reg: &CommandRegistry, session: &mut Session, line: &str) -> CommandOutput {
        reg.execute(line, session).unwrap()
    }

    fn texts(output: CommandOutput) -> Vec<String> {
        match output {
            CommandOutput::Text(lines) => lines.into_iter().map(|l| l.text).collect(),
            other => panic!("expected text, got {other:?}"),
        }
    }

    #[test]
    fn echo_and_print_join_args() {
        let (reg, mut s) = setup();
        assert_eq!(texts(exec(&reg, &mut s, "echo hello   world")), vec!["hello world"]);
        assert_eq!(
            texts(exec(&reg, &mut s, r#"print "two  spaces""#)),
            vec!["two  spaces"]
        );
        assert_eq!(texts(exec(&reg, &mut s, "echo")), vec![""]);
    }

    #[test]
    fn version_banner() {
        let (reg, mut s) = setup();
        assert_eq!(texts(exec(&reg, &mut s, "version")), vec![VERSION_BANNER]);
    }

    #[test]
    fn greetings() {
        let (reg, mut s) = setup();
        for word in ["hello", "hi", "hey"] {
            assert_eq!(
                texts(exec(&reg, &mut s, word)),
                vec!["Hi there! How are you?"]
            );
        }
    }

    #[test]
    fn clear_and_exit_signals() {
        let (reg, mut s) = setup();
        assert_eq!(exec(&reg, &mut s, "clear"), CommandOutput::Clear);
        assert_eq!(exec(&reg, &mut s, "exit"), CommandOutput::Exit);
    }

    #[test]
    fn history_numbers_entries() {
        let (reg, mut s) = setup();
        exec(&reg, &mut s, "echo a");
        exec(&reg, &mut s, "version");
        let lines = texts(exec(&reg, &mut s, "history"));
        assert_eq!(lines, vec!["   1  echo a", "   2  version", "   3  history"]);
    }
}
