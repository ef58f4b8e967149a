use std::io;

use anyhow::Context;
use driver::{terminal::TerminalDriver, Driver};
use log::info;

mod config;
mod driver;
mod game;
mod interrupt;
mod timer;

fn main() -> anyhow::Result<()> {
    env_logger::try_init().unwrap_or(());

    let settings = config::Settings::from_env().context("invalid settings")?;
    let game = game::Game::from_settings(&settings).context("could not set up the game")?;
    info!(
        "Dealing from {} letters and {} prompts",
        game.letters().len(),
        game.prompts().len()
    );
    let interrupt =
        interrupt::Interrupt::install().context("could not install the Ctrl-C handler")?;

    let stdin = io::stdin();
    let mut driver = TerminalDriver::new(
        game,
        stdin.lock(),
        io::stdout(),
        timer::SystemClock,
        timer::Countdown::new(settings.round_duration, settings.resolution),
        interrupt,
    );
    driver.play()?;

    Ok(())
}
