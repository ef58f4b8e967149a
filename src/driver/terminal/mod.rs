use std::io::{BufRead, Write};

use log::info;

use super::{Driver, DriverError};
use crate::{
    config::SEPARATOR,
    game::Game,
    interrupt::Interrupt,
    timer::{Clock, Countdown, CountdownOutcome},
};

#[cfg(test)]
mod tests;

const WELCOME: &str = "Welcome to Scattergories!";
const START_PROMPT: &str = "Press enter to start a round. Press Ctrl-C to end the round early.";

/// A driver that plays through a line-oriented terminal: rounds start when a line is read from
/// `input`, and everything is printed to `output`.
pub struct TerminalDriver<R, W, C> {
    game: Game,
    input: R,
    output: W,
    clock: C,
    countdown: Countdown,
    interrupt: Interrupt,
}

impl<R, W, C> TerminalDriver<R, W, C>
where
    R: BufRead,
    W: Write,
    C: Clock,
{
    pub fn new(
        game: Game,
        input: R,
        output: W,
        clock: C,
        countdown: Countdown,
        interrupt: Interrupt,
    ) -> Self {
        TerminalDriver {
            game,
            input,
            output,
            clock,
            countdown,
            interrupt,
        }
    }

    /// Wait for the players to be ready. Returns false if they're done playing, either because
    /// input has ended or they asked to quit.
    fn wait_for_start(&mut self) -> Result<bool, DriverError> {
        write!(self.output, "{}", START_PROMPT)?;
        self.output.flush()?;

        // Raw bytes, so a line that isn't valid UTF-8 still starts a round
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            // Leave the terminal on a fresh line after Ctrl-D
            writeln!(self.output)?;
            return Ok(false);
        }
        let line = String::from_utf8_lossy(&buf);
        let line = line.trim();
        Ok(!(line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit")))
    }

    /// Deal a round, show it, and count it down.
    fn play_round(&mut self) -> Result<CountdownOutcome, DriverError> {
        writeln!(self.output, "{}", SEPARATOR)?;
        let round = self.game.next_round();
        write!(self.output, "{}", round)?;
        writeln!(self.output)?;

        self.interrupt.begin_round();
        let outcome = self
            .countdown
            .run(&mut self.clock, &mut self.output, self.interrupt.cancelled());
        self.interrupt.end_round();
        let outcome = outcome?;
        info!("Round {} ({}) {:?}", round.number, round.letter, outcome);

        writeln!(self.output, "{}", SEPARATOR)?;
        Ok(outcome)
    }
}

impl<R, W, C> Driver for TerminalDriver<R, W, C>
where
    R: BufRead,
    W: Write,
    C: Clock,
{
    fn play(&mut self) -> Result<(), DriverError> {
        writeln!(self.output, "{}", WELCOME)?;
        while self.wait_for_start()? {
            self.play_round()?;
        }

        let rounds = self.game.rounds_played();
        writeln!(
            self.output,
            "Thanks for playing! {} round{} played.",
            rounds,
            if rounds == 1 { "" } else { "s" }
        )?;
        self.output.flush()?;
        info!(
            "Session over after {} rounds ({} letter and {} prompt reshuffles)",
            rounds,
            self.game.letters().reshuffles(),
            self.game.prompts().reshuffles()
        );
        Ok(())
    }
}
