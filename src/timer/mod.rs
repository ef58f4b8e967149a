use std::{
    io::{self, Write},
    sync::atomic::{AtomicBool, Ordering},
    thread,
    time::{Duration, Instant},
};

use log::debug;

#[cfg(test)]
pub mod testing;

/// A source of monotonic time that can also be slept on.
pub trait Clock {
    /// The current time.
    fn now(&self) -> Instant;

    /// Block for the given duration.
    fn sleep(&mut self, duration: Duration);
}

impl<C: Clock + ?Sized> Clock for &mut C {
    fn now(&self) -> Instant {
        (**self).now()
    }

    fn sleep(&mut self, duration: Duration) {
        (**self).sleep(duration);
    }
}

/// The real clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn sleep(&mut self, duration: Duration) {
        thread::sleep(duration);
    }
}

/// How a countdown finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownOutcome {
    /// Ran all the way down to zero.
    Expired,
    /// Stopped early by the player.
    Cancelled,
}

/// A countdown rendered to a single terminal line.
#[derive(Debug, Clone, Copy)]
pub struct Countdown {
    duration: Duration,
    /// How often the line is redrawn.
    resolution: Duration,
}

impl Countdown {
    pub fn new(duration: Duration, resolution: Duration) -> Self {
        Countdown {
            duration,
            resolution,
        }
    }

    /// Count down from `self.duration`, redrawing the remaining time every `self.resolution`
    /// until it hits zero or `cancelled` is set.
    ///
    /// The remaining time is recomputed from the clock after every sleep, so slow redraws
    /// don't make the round run long.
    pub fn run<C, W>(
        &self,
        clock: &mut C,
        out: &mut W,
        cancelled: &AtomicBool,
    ) -> io::Result<CountdownOutcome>
    where
        C: Clock,
        W: Write,
    {
        let start = clock.now();
        let target = start + self.duration;
        let mut current = start;
        let mut ticks = 0usize;
        loop {
            if cancelled.load(Ordering::Relaxed) {
                writeln!(out)?;
                writeln!(out, "Round canceled.")?;
                debug!("Countdown cancelled after {} ticks", ticks);
                return Ok(CountdownOutcome::Cancelled);
            }
            if current >= target {
                break;
            }

            let remaining = target - current;
            write!(out, "\rRemaining time: {:<6}", format_remaining(remaining))?;
            out.flush()?;
            ticks += 1;

            clock.sleep(self.resolution);
            current = clock.now();
        }
        writeln!(out)?;
        writeln!(out, "Time's up!")?;
        debug!("Countdown expired after {} ticks", ticks);
        Ok(CountdownOutcome::Expired)
    }
}

/// Format a duration as whole minutes and seconds, rounding down: `2m59s`.
pub fn format_remaining(remaining: Duration) -> String {
    let seconds = remaining.as_secs();
    format!("{}m{}s", seconds / 60, seconds % 60)
}
