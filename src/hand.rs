use crate::cards::Card;
use std::collections::HashSet;
use std::fmt;

/// Cards held per round.
pub const HAND_SIZE: usize = 5;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("expected exactly 5 cards, got {0}")]
    CardCount(usize),
    #[error("duplicate cards in hand")]
    DuplicateCards,
    #[error("cannot keep {0} of 5 cards")]
    KeepCount(usize),
}

/// Exactly five unique cards, kept sorted ascending by rank at all times.
/// The only mutation is the once-per-round [`exchange`](Hand::exchange).
///
/// ```
/// use draw_poker::cards::parse_cards;
/// use draw_poker::hand::Hand;
///
/// let hand = Hand::try_new(parse_cards("K♠ 2♥ 9♣ A◆ 5♥").unwrap()).unwrap();
/// let ranks: Vec<u8> = hand.cards().iter().map(|c| c.rank().value()).collect();
/// assert_eq!(ranks, vec![2, 5, 9, 13, 14]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn try_new(mut cards: Vec<Card>) -> Result<Self, HandError> {
        if cards.len() != HAND_SIZE {
            return Err(HandError::CardCount(cards.len()));
        }
        let unique: HashSet<Card> = cards.iter().copied().collect();
        if unique.len() != cards.len() {
            return Err(HandError::DuplicateCards);
        }
        cards.sort_by_key(|c| c.rank());
        Ok(Self { cards })
    }

    /// The cards in ascending rank order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Keep the `keep` lowest-ranked cards and fill back up with `drawn`.
    /// The hand is re-sorted afterwards, so evaluation always sees ascending
    /// rank order.
    pub fn exchange(&mut self, keep: usize, drawn: Vec<Card>) -> Result<(), HandError> {
        if keep > HAND_SIZE {
            return Err(HandError::KeepCount(keep));
        }
        if drawn.len() != HAND_SIZE - keep {
            return Err(HandError::CardCount(keep + drawn.len()));
        }
        let mut next: Vec<Card> = self.cards[..keep].to_vec();
        next.extend(drawn);
        *self = Self::try_new(next)?;
        Ok(())
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.cards.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}
