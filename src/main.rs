//! `argos`: interactive ArgOS Shell over stdin/stdout.

use std::io;

use anyhow::Result;
use argos_shell::config::ShellConfig;
use argos_shell::shell::Shell;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = ShellConfig::from_env();
    log::debug!(
        "starting shell (color: {}, seed: {:?}, history limit: {})",
        config.color,
        config.seed,
        config.history_limit
    );

    let mut shell = Shell::new(config);
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    shell.run(stdin.lock(), &mut stdout)?;
    Ok(())
}
