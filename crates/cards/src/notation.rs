// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Textual cards notation.
//!
//! A card is written with two characters, a rank symbol from
//! [`RANK_SYMBOLS`] followed by a suit symbol from a 4 symbols alphabet,
//! and a list of cards is the concatenation of its cards tokens:
//!
//! ```
//! # use showdown_cards::{Card, Notation, Rank, Suit};
//! let notation = Notation::default();
//! let cards = notation.parse("Kc2dAs")?;
//!
//! // Parsed cards are sorted in canonical order.
//! assert_eq!(cards[0], Card::new(Rank::Ace, Suit::Spades));
//! assert_eq!(notation.format(&cards), "AsKc2d");
//! # Ok::<(), showdown_cards::ParseError>(())
//! ```
use std::str::FromStr;
use thiserror::Error;

use crate::{Card, Rank, Suit, canonicalize};

/// The rank symbols, from deuce to ace.
pub const RANK_SYMBOLS: &str = "23456789TJQKA";

/// The default suit symbols for clubs, diamonds, hearts, and spades.
pub const SUIT_SYMBOLS: &str = "cdhs";

/// Cards notation parsing errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A card token with less than two characters.
    #[error("incomplete card token '{0}'")]
    IncompleteToken(String),
    /// A rank symbol that is not in the ranks alphabet.
    #[error("invalid rank symbol '{0}'")]
    InvalidRank(char),
    /// A suit symbol that is not in the suits alphabet.
    #[error("invalid suit symbol '{0}'")]
    InvalidSuit(char),
    /// The text has a different number of cards than expected.
    #[error("expected {expected} cards, found {found}")]
    CardCount {
        /// The expected number of cards.
        expected: usize,
        /// The number of cards in the text.
        found: usize,
    },
    /// A suits alphabet without 4 distinct symbols.
    #[error("suits alphabet '{0}' must have 4 distinct symbols")]
    InvalidAlphabet(String),
    /// A card id outside the deck range.
    #[error("invalid card id {0}")]
    InvalidId(u8),
}

/// The cards notation configuration.
///
/// Ranks are always written with [`RANK_SYMBOLS`], suits symbols are labels
/// configured with [`Notation::new`] and default to [`SUIT_SYMBOLS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notation {
    suits: [char; 4],
}

impl Notation {
    /// Creates a notation with the given suits symbols for clubs, diamonds,
    /// hearts, and spades.
    pub fn new(suits: &str) -> Result<Self, ParseError> {
        let symbols = suits.chars().collect::<Vec<_>>();
        let distinct = symbols
            .iter()
            .enumerate()
            .all(|(i, c)| !symbols[..i].contains(c));

        match <[char; 4]>::try_from(symbols) {
            Ok(alphabet) if distinct && !alphabet.iter().any(|c| RANK_SYMBOLS.contains(*c)) => {
                Ok(Self { suits: alphabet })
            }
            _ => Err(ParseError::InvalidAlphabet(suits.to_string())),
        }
    }

    /// The symbol used for a suit.
    pub fn suit_symbol(&self, suit: Suit) -> char {
        self.suits[suit as usize]
    }

    /// Parses a single two characters card token.
    pub fn parse_card(&self, token: &str) -> Result<Card, ParseError> {
        let mut chars = token.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(rank), Some(suit), None) => self.decode(rank, suit),
            (_, _, Some(_)) => Err(ParseError::CardCount {
                expected: 1,
                found: token.chars().count().div_ceil(2),
            }),
            _ => Err(ParseError::IncompleteToken(token.to_string())),
        }
    }

    /// Parses any number of cards, the returned cards are in canonical order.
    pub fn parse(&self, text: &str) -> Result<Vec<Card>, ParseError> {
        let symbols = text.chars().collect::<Vec<_>>();
        let mut cards = symbols
            .chunks(2)
            .map(|token| match token {
                &[rank, suit] => self.decode(rank, suit),
                _ => Err(ParseError::IncompleteToken(token.iter().collect())),
            })
            .collect::<Result<Vec<_>, _>>()?;

        canonicalize(&mut cards);
        Ok(cards)
    }

    /// Parses exactly `N` cards, the returned cards are in canonical order.
    pub fn parse_exact<const N: usize>(&self, text: &str) -> Result<[Card; N], ParseError> {
        let cards = self.parse(text)?;
        let found = cards.len();
        <[Card; N]>::try_from(cards).map_err(|_| ParseError::CardCount { expected: N, found })
    }

    /// Formats cards in the given order.
    pub fn format(&self, cards: &[Card]) -> String {
        cards
            .iter()
            .flat_map(|c| [c.rank().symbol(), self.suit_symbol(c.suit())])
            .collect()
    }

    fn decode(&self, rank: char, suit: char) -> Result<Card, ParseError> {
        let rank = RANK_SYMBOLS
            .chars()
            .position(|c| c == rank)
            .and_then(|idx| Rank::from_index(idx as u8))
            .ok_or(ParseError::InvalidRank(rank))?;

        let suit = self
            .suits
            .iter()
            .zip(Suit::suits())
            .find_map(|(&c, s)| (c == suit).then_some(s))
            .ok_or(ParseError::InvalidSuit(suit))?;

        Ok(Card::new(rank, suit))
    }
}

impl Default for Notation {
    fn default() -> Self {
        Self {
            suits: ['c', 'd', 'h', 's'],
        }
    }
}

/// Parses cards with the default notation.
pub fn parse_cards(text: &str) -> Result<Vec<Card>, ParseError> {
    Notation::default().parse(text)
}

/// Formats cards with the default notation.
pub fn format_cards(cards: &[Card]) -> String {
    Notation::default().format(cards)
}

impl FromStr for Card {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Notation::default().parse_card(s)
    }
}
