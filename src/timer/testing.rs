use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::{Duration, Instant},
};

use super::Clock;

/// A clock that only moves when slept on. Optionally raises a flag after a number of sleeps.
pub struct FakeClock {
    start: Instant,
    pub elapsed: Duration,
    pub sleeps: usize,
    pub cancel_after: Option<(usize, Arc<AtomicBool>)>,
}

impl FakeClock {
    pub fn new() -> Self {
        FakeClock {
            start: Instant::now(),
            elapsed: Duration::ZERO,
            sleeps: 0,
            cancel_after: None,
        }
    }
}

impl Clock for FakeClock {
    fn now(&self) -> Instant {
        self.start + self.elapsed
    }

    fn sleep(&mut self, duration: Duration) {
        self.elapsed += duration;
        self.sleeps += 1;
        if let Some((after, flag)) = &self.cancel_after {
            if self.sleeps >= *after {
                flag.store(true, Ordering::Relaxed);
            }
        }
    }
}
