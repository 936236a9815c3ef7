// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards hands.
use std::{fmt, str::FromStr};
use thiserror::Error;

use showdown_cards::{Card, Notation, ParseError, Rank, canonicalize};

/// Errors for hands and pools with the wrong cards.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidHandError {
    /// A hand without 5 cards.
    #[error("a hand must have 5 cards, found {0}")]
    HandSize(usize),
    /// A pool without 7 cards.
    #[error("a pool must have 7 cards, found {0}")]
    PoolSize(usize),
    /// A pool with the same card twice.
    #[error("duplicate card {0} in pool")]
    DuplicateCard(Card),
}

/// A five cards hand.
///
/// The hand cards are always in canonical order, rank descending and then suit
/// descending, whatever the order used to create the hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hand([Card; 5]);

impl Hand {
    /// The number of cards in a hand.
    pub const SIZE: usize = 5;

    /// Creates a hand from a slice of cards.
    pub fn new(cards: &[Card]) -> Result<Hand, InvalidHandError> {
        <[Card; Self::SIZE]>::try_from(cards)
            .map(Hand::from)
            .map_err(|_| InvalidHandError::HandSize(cards.len()))
    }

    /// Parses a hand with the given notation.
    pub fn parse_with(notation: &Notation, text: &str) -> Result<Hand, ParseError> {
        notation.parse_exact::<{ Self::SIZE }>(text).map(Hand)
    }

    /// The hand cards in canonical order.
    pub fn cards(&self) -> &[Card; Self::SIZE] {
        &self.0
    }

    /// The cards ranks, highest first.
    pub fn ranks(&self) -> [Rank; Self::SIZE] {
        self.0.map(|c| c.rank())
    }

    /// Checks if all cards have the same suit.
    pub fn is_suited(&self) -> bool {
        let suit = self.0[0].suit();
        self.0.iter().all(|c| c.suit() == suit)
    }

    /// Formats the hand with the given notation.
    pub fn format_with(&self, notation: &Notation) -> String {
        notation.format(&self.0)
    }
}

impl From<[Card; Hand::SIZE]> for Hand {
    fn from(mut cards: [Card; Hand::SIZE]) -> Self {
        canonicalize(&mut cards);
        Hand(cards)
    }
}

impl FromStr for Hand {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Hand::parse_with(&Notation::default(), s)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.0 {
            write!(f, "{c}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use showdown_cards::{Suit, is_canonical};

    #[test]
    fn hand_canonical_order() {
        let hand = "2c3d4h5s7c".parse::<Hand>().unwrap();
        assert!(is_canonical(hand.cards()));
        assert_eq!(hand.to_string(), "7c5s4h3d2c");

        let hand = Hand::from([
            Card::new(Rank::Deuce, Suit::Spades),
            Card::new(Rank::Ace, Suit::Clubs),
            Card::new(Rank::Ace, Suit::Hearts),
            Card::new(Rank::Deuce, Suit::Clubs),
            Card::new(Rank::Trey, Suit::Diamonds),
        ]);
        assert_eq!(hand.to_string(), "AhAc3d2s2c");
        assert_eq!(
            hand.ranks(),
            [Rank::Ace, Rank::Ace, Rank::Trey, Rank::Deuce, Rank::Deuce]
        );
    }

    #[test]
    fn hand_size() {
        let cards = showdown_cards::parse_cards("AcKcQcJc").unwrap();
        assert_eq!(Hand::new(&cards), Err(InvalidHandError::HandSize(4)));

        let cards = showdown_cards::parse_cards("AcKcQcJcTc9c").unwrap();
        assert_eq!(Hand::new(&cards), Err(InvalidHandError::HandSize(6)));

        let cards = showdown_cards::parse_cards("AcKcQcJcTc").unwrap();
        assert!(Hand::new(&cards).is_ok());
    }

    #[test]
    fn hand_parse_errors() {
        assert_eq!(
            "AcKcQcJc".parse::<Hand>(),
            Err(ParseError::CardCount {
                expected: 5,
                found: 4
            })
        );
        assert_eq!(
            "AcKcQcJcT".parse::<Hand>(),
            Err(ParseError::IncompleteToken("T".to_string()))
        );
        assert_eq!("AcKcQcJc1c".parse::<Hand>(), Err(ParseError::InvalidRank('1')));
    }

    #[test]
    fn hand_notation() {
        let notation = Notation::new("♣♦♥♠").unwrap();
        let hand = Hand::parse_with(&notation, "2♣A♠K♥Q♦J♣").unwrap();
        assert_eq!(hand.to_string(), "AsKhQdJc2c");
        assert_eq!(hand.format_with(&notation), "A♠K♥Q♦J♣2♣");
    }

    #[test]
    fn hand_suited() {
        assert!("AcTc5c4c3c".parse::<Hand>().unwrap().is_suited());
        assert!(!"AcTc5c4c3d".parse::<Hand>().unwrap().is_suited());
    }
}
