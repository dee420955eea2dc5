use crate::deck::{Deck, DeckError};
use crate::hand::HAND_SIZE;
use crate::round::{self, RoundError};
use std::io::{BufRead, Write};

/// Coins a fresh session starts with.
pub const STARTING_COINS: u64 = 100;

/// One sitting at the table: a shuffled deck, a coin balance, and the I/O
/// handles the prompts run over. The deck is never replenished or reshuffled;
/// discarded cards stay out of play for the rest of the session.
pub struct Session<R, W> {
    deck: Deck,
    coins: u64,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// A fresh session: full deck shuffled with `seed`, 100 coins.
    pub fn new(seed: u64, input: R, output: W) -> Self {
        let mut deck = Deck::standard();
        deck.shuffle_seeded(seed);
        Self::from_parts(deck, STARTING_COINS, input, output)
    }

    /// Assemble a session from explicit parts. Tests use this to script the
    /// deck order and starting balance.
    pub fn from_parts(deck: Deck, coins: u64, input: R, output: W) -> Self {
        Self { deck, coins, input, output }
    }

    pub fn coins(&self) -> u64 {
        self.coins
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Play rounds until the coins run out or the deck runs low. Both are
    /// normal endings, not errors: a deck too short to serve a round simply
    /// closes the session, and a round abandoned that way never touches the
    /// balance. I/O failures are the only errors that escape.
    pub fn run(&mut self) -> Result<(), RoundError> {
        while self.coins > 0 && self.deck.len() > HAND_SIZE {
            match round::play_round(&mut self.deck, self.coins, &mut self.input, &mut self.output)
            {
                Ok(outcome) => self.coins = outcome.balance_after,
                Err(RoundError::Deck(DeckError::InsufficientCards { .. })) => break,
                Err(err) => return Err(err),
            }
        }
        Ok(())
    }
}
