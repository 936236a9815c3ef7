// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker hand evaluator.
//!
//! Poker hand evaluator for 5 cards hands and 7 cards pools. Hands are
//! classified in one of the nine poker categories and compared by category
//! and then by kickers, the A-5-4-3-2 wheel counts as a five high straight.
//!
//! To use the evaluator create a hand and use [HandValue] to evaluate the hand
//! and get its rank:
//!
//! ```
//! # use showdown_eval::*;
//! let v1 = HandValue::from("7c6c5c4c3c".parse::<Hand>()?);
//! let v2 = HandValue::from("Ac5c4c3c2c".parse::<Hand>()?);
//! assert_eq!(v1.rank(), HandRank::StraightFlush);
//! assert_eq!(v2.rank(), HandRank::StraightFlush);
//! assert!(v1 > v2);
//! # Ok::<(), ParseError>(())
//! ```
//!
//! To get the best hand out of a player private cards and the shared cards
//! create a [Pool]:
//!
//! ```
//! # use showdown_eval::*;
//! let pool = "AsAhAdAcKc7h8d".parse::<Pool>()?;
//! let hand = pool.best_five();
//! assert_eq!(hand.to_string(), "AsAhAdAcKc");
//! # Ok::<(), PoolError>(())
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{
    Hand, HandRank, HandValue, InvalidHandError, Outcome, Pool, PoolError, best_five,
    best_five_of, compare, compare_cards,
};

// Reexport cards types.
pub use showdown_cards::{
    Card, Deck, Notation, ParseError, Rank, Suit, canonicalize, format_cards, is_canonical,
    parse_cards,
};
