use log::info;
use rand::{rngs::StdRng, seq::SliceRandom, Rng};

use super::GameError;

/// A pool of items drawn without replacement. Once every item has been drawn the pool is
/// reshuffled and drawing starts over.
#[derive(Debug, Clone)]
pub struct Deck<T> {
    /// Every item in the deck, in its original order.
    pool: Vec<T>,
    /// Items not yet drawn. The next draw comes off the end.
    pile: Vec<T>,
    rng: StdRng,
    /// The most recently drawn item.
    last: Option<T>,
    /// Number of times the pile has been replenished.
    reshuffles: usize,
    /// Used in log messages.
    name: &'static str,
}

impl<T: Clone + PartialEq> Deck<T> {
    /// Construct a deck from the given items and shuffle it.
    pub fn new(name: &'static str, items: Vec<T>, rng: StdRng) -> Result<Self, GameError> {
        if items.is_empty() {
            return Err(GameError::EmptyDeck(name));
        }
        let mut deck = Deck {
            pool: items,
            pile: Vec::new(),
            rng,
            last: None,
            reshuffles: 0,
            name,
        };
        deck.shuffle_pile();
        Ok(deck)
    }

    /// Total number of items in the deck.
    pub fn len(&self) -> usize {
        self.pool.len()
    }

    /// Number of items left before the next reshuffle.
    pub fn remaining(&self) -> usize {
        self.pile.len()
    }

    pub fn reshuffles(&self) -> usize {
        self.reshuffles
    }

    /// Draw the next item, reshuffling the full pool first if the pile is empty.
    pub fn draw(&mut self) -> T {
        if self.pile.is_empty() {
            self.replenish();
        }
        match self.pile.pop() {
            Some(item) => {
                self.last = Some(item.clone());
                item
            }
            // The pool is never empty and a replenished pile holds every item
            None => unreachable!("deck {} replenished with no items", self.name),
        }
    }

    /// Draw `n` items. If fewer than `n` remain the pile is replenished first, so a single
    /// batch never repeats an item as long as `n <= self.len()`.
    pub fn draw_many(&mut self, n: usize) -> Vec<T> {
        if self.pile.len() < n {
            self.replenish();
        }
        (0..n).map(|_| self.draw()).collect()
    }

    fn replenish(&mut self) {
        self.reshuffles += 1;
        info!(
            "Out of {}, reshuffling all {} (reshuffle #{})",
            self.name,
            self.pool.len(),
            self.reshuffles
        );
        self.shuffle_pile();

        // Don't hand out the same item twice in a row across a reshuffle
        let len = self.pile.len();
        if len > 1 && self.pile.last() == self.last.as_ref() {
            let swap_with = self.rng.gen_range(0..len - 1);
            self.pile.swap(swap_with, len - 1);
        }
    }

    fn shuffle_pile(&mut self) {
        self.pile.clear();
        self.pile.extend(self.pool.iter().cloned());
        self.pile.shuffle(&mut self.rng);
    }
}
