// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use showdown_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let ad = Card::new(Rank::Ace, Suit::Diamonds);
//! assert!(ah > ad);
//! ```
//!
//! to read and write them using the two characters notation:
//!
//! ```
//! # use showdown_cards::{format_cards, parse_cards, Card, Rank, Suit};
//! let cards = parse_cards("2cAhTd")?;
//! assert_eq!(cards[0], Card::new(Rank::Ace, Suit::Hearts));
//! assert_eq!(format_cards(&cards), "AhTd2c");
//! # Ok::<(), showdown_cards::ParseError>(())
//! ```
//!
//! and a [Deck] type for iterating the k-cards hands in the deck.
//!
//! For example to iterate through all 5 cards hands:
//!
//! ```no_run
//! # use showdown_cards::Deck;
//! // Iterate through all 5 cards hands (2.6M hands).
//! let mut counter = 0;
//! Deck::default().for_each(5, |hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 2_598_960);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, Rank, Suit, canonicalize, is_canonical};

mod notation;
pub use notation::{
    Notation, ParseError, RANK_SYMBOLS, SUIT_SYMBOLS, format_cards, parse_cards,
};
