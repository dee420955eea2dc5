use crate::cards::{Card, Rank, Suit};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("not enough cards in the deck: requested {requested}, remaining {remaining}")]
    InsufficientCards { requested: usize, remaining: usize },
}

/// A standard 52-card deck. Created once, shuffled once, then it only shrinks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// All 52 (rank, suit) combinations, suits in canonical deal order,
    /// ranks ascending within each suit. Deterministic.
    ///
    /// ```
    /// use draw_poker::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(52);
        for &s in &Suit::ALL {
            for &r in &Rank::ALL {
                cards.push(Card::new(r, s));
            }
        }
        Self { cards }
    }

    /// Build a deck with an exact card order, front card dealt first.
    /// Useful for scripting deals in tests.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.cards.shuffle(&mut rng);
    }

    /// Shuffle using the provided RNG implementing Rng.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Remove and return the first `n` cards from the front of the deck.
    ///
    /// ```
    /// use draw_poker::deck::{Deck, DeckError};
    ///
    /// let mut deck = Deck::standard();
    /// let hand = deck.draw(5).unwrap();
    /// assert_eq!(hand.len(), 5);
    /// assert_eq!(deck.len(), 47);
    /// assert!(matches!(deck.draw(48), Err(DeckError::InsufficientCards { .. })));
    /// ```
    pub fn draw(&mut self, n: usize) -> Result<Vec<Card>, DeckError> {
        if n > self.cards.len() {
            return Err(DeckError::InsufficientCards { requested: n, remaining: self.cards.len() });
        }
        Ok(self.cards.drain(..n).collect())
    }
}
