//! draw-poker: five-card draw poker mini-game
//!
//! Goals:
//! - Deterministic hand classification with fixed payout multipliers
//! - A single-exchange draw mechanic over a deck that only shrinks
//! - No panics for invalid input; use `Result` for recoverable errors
//! - Interactive prompts behind injectable reader/writer seams for testing
//!
//! ## Quick start: classify a hand
//! ```
//! use draw_poker::cards::parse_cards;
//! use draw_poker::evaluator::{evaluate, Category};
//! use draw_poker::hand::Hand;
//!
//! let hand = Hand::try_new(parse_cards("9♣ 10♣ J♣ Q♣ K♣").unwrap()).unwrap();
//! let category = evaluate(&hand);
//! assert_eq!(category, Category::StraightFlush);
//! assert_eq!(category.multiplier(), 50);
//! ```
//!
//! ## Play on a terminal
//! ```sh
//! cargo run --bin draw-poker
//! ```

pub mod cards;
pub mod deck;
pub mod evaluator;
pub mod hand;
pub mod round;
pub mod session;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
