use std::{
    process,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
};

use log::info;

/// Exit status for a process ended by SIGINT.
const SIGINT_EXIT_CODE: i32 = 130;

/// Ctrl-C handling. During a countdown Ctrl-C ends the round early; otherwise it quits.
#[derive(Debug, Clone, Default)]
pub struct Interrupt {
    /// Set while a countdown is running.
    counting: Arc<AtomicBool>,
    /// Set when Ctrl-C is pressed during a countdown.
    cancelled: Arc<AtomicBool>,
}

impl Interrupt {
    /// Install the Ctrl-C handler for this process. Can only be called once.
    pub fn install() -> Result<Self, ctrlc::Error> {
        let interrupt = Interrupt::detached();
        let handler = interrupt.clone();
        ctrlc::set_handler(move || {
            if !handler.cancel() {
                info!("Interrupted, exiting");
                println!();
                process::exit(SIGINT_EXIT_CODE);
            }
        })?;
        Ok(interrupt)
    }

    /// Flags with no signal handler attached.
    pub fn detached() -> Self {
        Interrupt::default()
    }

    /// Mark the start of a countdown, clearing any earlier cancellation.
    pub fn begin_round(&self) {
        self.cancelled.store(false, Ordering::Relaxed);
        self.counting.store(true, Ordering::Relaxed);
    }

    pub fn end_round(&self) {
        self.counting.store(false, Ordering::Relaxed);
        self.cancelled.store(false, Ordering::Relaxed);
    }

    /// Cancel the running countdown, if any. Returns whether there was one.
    pub fn cancel(&self) -> bool {
        let counting = self.counting.load(Ordering::Relaxed);
        if counting {
            self.cancelled.store(true, Ordering::Relaxed);
        }
        counting
    }

    #[cfg(test)]
    pub fn is_counting(&self) -> bool {
        self.counting.load(Ordering::Relaxed)
    }

    /// The flag a countdown polls to see if it has been cancelled.
    pub fn cancelled(&self) -> &AtomicBool {
        &self.cancelled
    }

    #[cfg(test)]
    pub fn cancelled_flag(&self) -> Arc<AtomicBool> {
        self.cancelled.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancel_only_while_counting() {
        let interrupt = Interrupt::detached();
        assert!(!interrupt.cancel());
        assert!(!interrupt.cancelled().load(Ordering::Relaxed));

        interrupt.begin_round();
        assert!(interrupt.is_counting());
        assert!(interrupt.cancel());
        assert!(interrupt.cancelled().load(Ordering::Relaxed));

        interrupt.end_round();
        assert!(!interrupt.is_counting());
        assert!(!interrupt.cancelled().load(Ordering::Relaxed));
    }

    #[test]
    fn clones_share_flags() {
        let interrupt = Interrupt::detached();
        let other = interrupt.clone();
        interrupt.begin_round();
        assert!(other.cancel());
        assert!(interrupt.cancelled().load(Ordering::Relaxed));
    }
}
