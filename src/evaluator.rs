use crate::cards::Rank;
use crate::hand::Hand;
use std::fmt;

/// Hand categories from weakest to strongest. The derived `Ord` matches
/// hand strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum Category {
    NoPair = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalStraightFlush = 9,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::NoPair,
        Category::OnePair,
        Category::TwoPair,
        Category::ThreeOfAKind,
        Category::Straight,
        Category::Flush,
        Category::FullHouse,
        Category::FourOfAKind,
        Category::StraightFlush,
        Category::RoyalStraightFlush,
    ];

    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Payout factor applied to the wager.
    pub const fn multiplier(self) -> u64 {
        match self {
            Category::NoPair => 0,
            Category::OnePair => 1,
            Category::TwoPair => 2,
            Category::ThreeOfAKind => 3,
            Category::Straight => 4,
            Category::Flush => 5,
            Category::FullHouse => 7,
            Category::FourOfAKind => 20,
            Category::StraightFlush => 50,
            Category::RoyalStraightFlush => 100,
        }
    }

    /// Name announced at the table.
    pub const fn name(self) -> &'static str {
        match self {
            Category::NoPair => "役無し",
            Category::OnePair => "ワンペア",
            Category::TwoPair => "ツーペア",
            Category::ThreeOfAKind => "スリーカード",
            Category::Straight => "ストレート",
            Category::Flush => "フラッシュ",
            Category::FullHouse => "フルハウス",
            Category::FourOfAKind => "フォーカード",
            Category::StraightFlush => "ストレートフラッシュ",
            Category::RoyalStraightFlush => "ロイヤルストレートフラッシュ",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Classify a five-card hand. Pure and total: every hand maps to exactly one
/// category, stronger categories are checked first.
///
/// The hand's cards are already sorted ascending by rank, so one pass over
/// adjacent pairs decides both the straight (every gap exactly 1, ace high
/// only) and the flush (every suit equal to its predecessor). Rank
/// frequencies come from the same pass: `max_same` is the largest count for
/// any one rank, `distinct` the number of ranks present. With four of a kind
/// ruled out, a 3+2 split is the only five-card partition with exactly two
/// distinct ranks, so the full house test is `distinct == 2`.
///
/// ```
/// use draw_poker::cards::parse_cards;
/// use draw_poker::evaluator::{evaluate, Category};
/// use draw_poker::hand::Hand;
///
/// let hand = Hand::try_new(parse_cards("10♥ J♥ Q♥ K♥ A♥").unwrap()).unwrap();
/// assert_eq!(evaluate(&hand), Category::RoyalStraightFlush);
/// assert_eq!(evaluate(&hand).multiplier(), 100);
/// ```
pub fn evaluate(hand: &Hand) -> Category {
    let cards = hand.cards();

    let mut counts = [0u8; 15];
    let mut max_same = 0u8;
    let mut is_straight = true;
    let mut is_flush = true;
    for (i, card) in cards.iter().enumerate() {
        let v = card.rank().value() as usize;
        counts[v] += 1;
        max_same = max_same.max(counts[v]);
        if i > 0 {
            is_straight = is_straight && card.rank().value() - cards[i - 1].rank().value() == 1;
            is_flush = is_flush && card.suit() == cards[i - 1].suit();
        }
    }
    let distinct = counts.iter().filter(|&&c| c > 0).count();

    if is_straight && is_flush && cards[0].rank() == Rank::Ten {
        Category::RoyalStraightFlush
    } else if is_straight && is_flush {
        Category::StraightFlush
    } else if max_same == 4 {
        Category::FourOfAKind
    } else if distinct == 2 {
        Category::FullHouse
    } else if is_flush {
        Category::Flush
    } else if is_straight {
        Category::Straight
    } else if max_same == 3 {
        Category::ThreeOfAKind
    } else if distinct == 3 {
        Category::TwoPair
    } else if distinct == 4 {
        Category::OnePair
    } else {
        Category::NoPair
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strength_order_and_multipliers_agree() {
        for pair in Category::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
            assert!(pair[0].multiplier() < pair[1].multiplier());
        }
        assert_eq!(Category::NoPair.multiplier(), 0);
        assert_eq!(Category::RoyalStraightFlush.multiplier(), 100);
    }

    #[test]
    fn display_uses_the_table_name() {
        assert_eq!(Category::FullHouse.to_string(), "フルハウス");
        assert_eq!(Category::NoPair.to_string(), "役無し");
    }
}
