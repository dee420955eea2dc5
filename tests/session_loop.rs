use draw_poker::cards::parse_cards;
use draw_poker::deck::Deck;
use draw_poker::session::Session;
use std::io::Cursor;

fn scripted_deck(s: &str) -> Deck {
    Deck::from_cards(parse_cards(s).unwrap())
}

#[test]
fn session_ends_when_the_coins_run_out() {
    // Twelve cards so the entry check passes; the first five make nothing.
    let deck = scripted_deck("2♥ 4♣ 6◆ 8♠ J♥ 3♣ 5◆ 7♠ 9♥ Q♣ K◆ A♥");
    let mut session = Session::from_parts(deck, 1, Cursor::new("1\n5\n"), Vec::new());

    session.run().unwrap();

    assert_eq!(session.coins(), 0);
    // Seven cards remain (> 5): it was the empty purse that stopped play.
    assert_eq!(session.deck().len(), 7);
}

#[test]
fn session_ends_when_the_deck_cannot_serve_the_draw() {
    // Six cards pass the entry check, but redrawing five needs more than one.
    let deck = scripted_deck("2♥ 4♣ 6◆ 8♠ J♥ 3♣");
    let mut session = Session::from_parts(deck, 100, Cursor::new("10\n0\n"), Vec::new());

    session.run().unwrap();

    // The abandoned round never settles, so the wager stays in the purse.
    assert_eq!(session.coins(), 100);
    assert_eq!(session.deck().len(), 1);
}

#[test]
fn too_small_a_deck_never_starts_a_round() {
    let deck = scripted_deck("2♥ 4♣ 6◆ 8♠ J♥");
    let mut output = Vec::new();
    let mut session = Session::from_parts(deck, 100, Cursor::new(""), &mut output);

    session.run().unwrap();

    drop(session);
    assert!(output.is_empty());
}

#[test]
fn zero_coins_never_starts_a_round() {
    let deck = scripted_deck("2♥ 4♣ 6◆ 8♠ J♥ 3♣ 5◆ 7♠ 9♥ Q♣");
    let mut output = Vec::new();
    let mut session = Session::from_parts(deck, 0, Cursor::new(""), &mut output);

    session.run().unwrap();

    drop(session);
    assert!(output.is_empty());
}

#[test]
fn winnings_carry_into_the_next_round() {
    // Round one: flush on a kept hand. Round two: no pair, redraw everything.
    let deck = scripted_deck(
        "2♥ 5♥ 7♥ 9♥ K♥ 2♣ 4◆ 6♠ 8♥ J♣ 3♠ 5♣ 7◆ 9♠ Q♥ 2◆",
    );
    let mut session =
        Session::from_parts(deck, 100, Cursor::new("10\n5\n140\n5\n"), Vec::new());

    session.run().unwrap();

    // 100 -> 140 on the flush, then the all-in wager of 140 loses everything.
    assert_eq!(session.coins(), 0);
}

#[test]
fn closed_input_surfaces_as_an_error() {
    let mut session = Session::new(7, Cursor::new(""), Vec::new());
    assert!(session.run().is_err());
}
