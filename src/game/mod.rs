use std::{io, path::PathBuf};

use log::{debug, info};
use rand::{prelude::*, rngs::StdRng};
use thiserror::Error;

pub use deck::Deck;
pub use round::Round;

use crate::config::{Settings, LETTERS, PROMPTS_PER_ROUND};
use data::{load_prompts, BUILTIN_PROMPTS};

pub mod data;
mod deck;
mod round;

/// Failure modes when setting up a game.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("could not read prompts from {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("need at least {needed} prompts, found {found}")]
    NotEnoughPrompts { found: usize, needed: usize },
    #[error("no {0} to draw from")]
    EmptyDeck(&'static str),
}

/// An instance of Scattergories: shuffled letters and prompts, dealt out a round at a time.
#[derive(Debug)]
pub struct Game {
    letters: Deck<char>,
    prompts: Deck<String>,
    rounds_played: usize,
}

impl Game {
    /// Start a new game with the given prompts. Letters and prompts are shuffled independently,
    /// both derived from `seed`.
    pub fn new(prompts: Vec<String>, seed: u64) -> Result<Self, GameError> {
        if prompts.len() < PROMPTS_PER_ROUND {
            return Err(GameError::NotEnoughPrompts {
                found: prompts.len(),
                needed: PROMPTS_PER_ROUND,
            });
        }

        let mut rng = StdRng::seed_from_u64(seed);
        let letters_rng = StdRng::seed_from_u64(rng.gen());
        let prompts_rng = StdRng::seed_from_u64(rng.gen());

        Ok(Game {
            letters: Deck::new("letters", LETTERS.chars().collect(), letters_rng)?,
            prompts: Deck::new("prompts", prompts, prompts_rng)?,
            rounds_played: 0,
        })
    }

    /// Start a new game using the prompts file named in `settings`. If the default prompts file
    /// doesn't exist the built-in prompts are used instead.
    pub fn from_settings(settings: &Settings) -> Result<Self, GameError> {
        let prompts = if settings.prompts_path_explicit || settings.prompts_path.exists() {
            info!("Loading prompts from {}", settings.prompts_path.display());
            load_prompts(&settings.prompts_path)?
        } else {
            info!(
                "{} not found, using {} built-in prompts",
                settings.prompts_path.display(),
                BUILTIN_PROMPTS.len()
            );
            BUILTIN_PROMPTS.clone()
        };
        debug!("Shuffling with seed {}", settings.seed);
        Game::new(prompts, settings.seed)
    }

    /// Deal the next round.
    pub fn next_round(&mut self) -> Round {
        self.rounds_played += 1;
        let round = Round {
            number: self.rounds_played,
            letter: self.letters.draw(),
            prompts: self.prompts.draw_many(PROMPTS_PER_ROUND),
        };
        debug!(
            "Round {} letter {}, {} letters and {} prompts left",
            round.number,
            round.letter,
            self.letters.remaining(),
            self.prompts.remaining()
        );
        round
    }

    pub fn rounds_played(&self) -> usize {
        self.rounds_played
    }

    pub fn letters(&self) -> &Deck<char> {
        &self.letters
    }

    pub fn prompts(&self) -> &Deck<String> {
        &self.prompts
    }
}
