use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};

/// A 52-card deck with its own seeded RNG stream. Drawing never replaces
/// cards; `shuffle` restores the full deck in a fresh random order.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
    rng: ChaCha20Rng,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep initial order until shuffle is called explicitly
        Self {
            cards: full_deck(),
            position: 0,
            rng,
        }
    }

    pub fn shuffle(&mut self) {
        self.cards = full_deck();
        self.cards.shuffle(&mut self.rng);
        self.position = 0;
    }

    pub fn draw_one(&mut self) -> Option<Card> {
        if self.position >= self.cards.len() {
            None
        } else {
            let c = self.cards[self.position];
            self.position += 1;
            Some(c)
        }
    }

    /// Draw up to `n` cards off the top.
    pub fn draw(&mut self, n: usize) -> Vec<Card> {
        (0..n).filter_map(|_| self.draw_one()).collect()
    }

    /// Cards not yet drawn, in order. The equity estimator samples from
    /// this view without disturbing the deck.
    pub fn remaining_cards(&self) -> &[Card] {
        &self.cards[self.position..]
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }
}
