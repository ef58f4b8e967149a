use std::io;

use thiserror::Error;

pub mod terminal;

/// Something that can run a session of the game.
pub trait Driver {
    /// Play rounds until the players are done.
    fn play(&mut self) -> Result<(), DriverError>;
}

/// Failure modes for drivers.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("terminal i/o failed")]
    Io(#[from] io::Error),
}
