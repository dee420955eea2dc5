use draw_poker::cards::parse_cards;
use draw_poker::evaluator::{evaluate, Category};
use draw_poker::hand::Hand;

fn hand(s: &str) -> Hand {
    Hand::try_new(parse_cards(s).unwrap()).unwrap()
}

#[test]
fn royal_straight_flush_in_every_suit() {
    for s in ["h", "c", "d", "s"] {
        let h = hand(&format!("10{s} J{s} Q{s} K{s} A{s}"));
        assert_eq!(evaluate(&h), Category::RoyalStraightFlush);
        assert_eq!(evaluate(&h).multiplier(), 100);
    }
}

#[test]
fn straight_flush_when_the_low_card_is_not_ten() {
    let h = hand("9♣ 10♣ J♣ Q♣ K♣");
    assert_eq!(evaluate(&h), Category::StraightFlush);
    assert_eq!(evaluate(&h).multiplier(), 50);
}

#[test]
fn four_of_a_kind() {
    let h = hand("10♥ 10♣ 10◆ 10♠ 5♥");
    assert_eq!(evaluate(&h), Category::FourOfAKind);
    assert_eq!(evaluate(&h).multiplier(), 20);
}

#[test]
fn full_house_is_a_three_two_split() {
    assert_eq!(evaluate(&hand("10♣ 10◆ 10♥ 2♠ 2♥")), Category::FullHouse);
    assert_eq!(evaluate(&hand("2♠ 2♥ 2♣ A◆ A♥")), Category::FullHouse);
    assert_eq!(Category::FullHouse.multiplier(), 7);
}

#[test]
fn flush_needs_no_consecutive_ranks() {
    let h = hand("2♥ 5♥ 7♥ 9♥ K♥");
    assert_eq!(evaluate(&h), Category::Flush);
    assert_eq!(evaluate(&h).multiplier(), 5);
}

#[test]
fn gappy_same_suit_cards_are_a_flush_not_no_pair() {
    // 2-3-4-5-10 is no straight (10 != 6), but one suit still makes a flush.
    assert_eq!(evaluate(&hand("2♥ 3♥ 4♥ 5♥ 10♥")), Category::Flush);
}

#[test]
fn straight_with_mixed_suits() {
    let h = hand("5♣ 6◆ 7♥ 8♠ 9♣");
    assert_eq!(evaluate(&h), Category::Straight);
    assert_eq!(evaluate(&h).multiplier(), 4);
}

#[test]
fn ace_extends_the_top_but_never_the_bottom() {
    assert_eq!(evaluate(&hand("10♣ J◆ Q♥ K♠ A♣")), Category::Straight);
    // A-2-3-4-5 does not wrap; with mixed suits it is nothing at all.
    assert_eq!(evaluate(&hand("A♥ 2♣ 3◆ 4♠ 5♥")), Category::NoPair);
}

#[test]
fn three_of_a_kind() {
    let h = hand("Q♣ Q◆ Q♥ 9♠ 2♣");
    assert_eq!(evaluate(&h), Category::ThreeOfAKind);
    assert_eq!(evaluate(&h).multiplier(), 3);
}

#[test]
fn two_pair() {
    let h = hand("J♣ J◆ 9♣ 9♥ 2♠");
    assert_eq!(evaluate(&h), Category::TwoPair);
    assert_eq!(evaluate(&h).multiplier(), 2);
}

#[test]
fn one_pair() {
    let h = hand("A♥ A◆ 10♠ 9♣ 2◆");
    assert_eq!(evaluate(&h), Category::OnePair);
    assert_eq!(evaluate(&h).multiplier(), 1);
}

#[test]
fn no_pair_when_nothing_lines_up() {
    let h = hand("2♥ 3♣ 4◆ 5♠ 10♥");
    assert_eq!(evaluate(&h), Category::NoPair);
    assert_eq!(evaluate(&h).multiplier(), 0);
}

#[test]
fn evaluation_is_idempotent() {
    let h = hand("J♣ J◆ 9♣ 9♥ 2♠");
    assert_eq!(evaluate(&h), evaluate(&h));
}
