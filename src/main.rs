use std::io;

use anyhow::Context;
use mastermind_digits::{GameConfig, RandomSecrets, Session};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(
        GameConfig::default(),
        RandomSecrets::new(None),
        stdin.lock(),
        stdout.lock(),
    )
    .context("invalid game configuration")?;

    session.run().context("game session failed")?;
    Ok(())
}
