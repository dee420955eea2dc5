//! One betting round: solicit a wager, deal five cards, let the player keep a
//! prefix of the sorted hand and redraw the rest, then settle the payout.
//!
//! All prompts go through the injected reader/writer pair so tests can script
//! input lines and assert on the exact output. Invalid input is never fatal;
//! the prompt repeats until a usable number arrives.

use crate::deck::{Deck, DeckError};
use crate::evaluator::{self, Category};
use crate::hand::{Hand, HandError, HAND_SIZE};
use std::io::{self, BufRead, Write};

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum RoundError {
    #[error(transparent)]
    Deck(#[from] DeckError),
    #[error(transparent)]
    Hand(#[from] HandError),
    #[error("prompt failed: {0}")]
    Io(#[from] io::Error),
}

/// A resolved round: what the hand made and how the balance moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundOutcome {
    pub category: Category,
    pub wager: u64,
    pub payout: u64,
    pub balance_after: u64,
}

/// Play a single round against `deck`, starting from `balance` coins.
///
/// The balance is only settled on success; any error leaves the caller's
/// balance exactly as passed in. A [`DeckError`] escaping from the exchange
/// draw means the deck could not serve the round, which the session loop
/// treats as the end of the game rather than a failure.
pub fn play_round<R: BufRead, W: Write>(
    deck: &mut Deck,
    balance: u64,
    input: &mut R,
    output: &mut W,
) -> Result<RoundOutcome, RoundError> {
    let wager = prompt_wager(input, output, balance)?;

    let mut hand = Hand::try_new(deck.draw(HAND_SIZE)?)?;
    show_hand(output, &hand)?;

    let keep = prompt_remains(input, output)?;
    let drawn = deck.draw(HAND_SIZE - keep)?;
    hand.exchange(keep, drawn)?;
    show_hand(output, &hand)?;

    let category = evaluator::evaluate(&hand);
    let payout = wager * category.multiplier();
    let balance_after = balance - wager + payout;
    writeln!(output, "{}", category.name())?;
    writeln!(output, "{} * {} = {}", wager, category.multiplier(), payout)?;
    writeln!(output, "手持ちコイン: {} -> {}", balance, balance_after)?;

    Ok(RoundOutcome { category, wager, payout, balance_after })
}

fn prompt_wager<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    balance: u64,
) -> Result<u64, RoundError> {
    loop {
        writeln!(output, "コインを何枚かけますか？（最大{}枚）", balance)?;
        write!(output, ">")?;
        output.flush()?;
        match read_number(input)? {
            Some(n) if n > 0 && n <= balance => return Ok(n),
            _ => writeln!(output, "正しいコイン枚数を入れてください")?,
        }
    }
}

fn prompt_remains<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<usize, RoundError> {
    loop {
        writeln!(output, "何枚残しますか？（最大{}枚）", HAND_SIZE)?;
        write!(output, ">")?;
        output.flush()?;
        match read_number(input)? {
            Some(n) if n <= HAND_SIZE as u64 => return Ok(n as usize),
            _ => writeln!(output, "0以上5以下です")?,
        }
    }
}

fn show_hand<W: Write>(output: &mut W, hand: &Hand) -> io::Result<()> {
    writeln!(output, "手札")?;
    for card in hand.cards() {
        writeln!(output, "{} {}", card.suit(), card.rank())?;
    }
    Ok(())
}

/// One line from the prompt: `Some` number if it parses, `None` to re-prompt.
/// A closed input stream is an error, not an endless re-prompt.
fn read_number<R: BufRead>(input: &mut R) -> io::Result<Option<u64>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed while awaiting a number",
        ));
    }
    Ok(line.trim().parse().ok())
}
