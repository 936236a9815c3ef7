// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Best five cards hand out of a seven cards pool.
use log::{debug, trace};
use std::{fmt, str::FromStr};
use thiserror::Error;

use super::{Hand, HandValue, InvalidHandError, Outcome};
use showdown_cards::{Card, Notation, ParseError};

/// Number of 5 cards subsets in a 7 cards pool.
const NUM_SUBSETS: usize = 21;

/// Creates the 5-subsets of the positions 0..7 in lexicographic order.
const fn make_subsets() -> [[usize; Hand::SIZE]; NUM_SUBSETS] {
    let mut t = [[0usize; Hand::SIZE]; NUM_SUBSETS];
    let mut c = [0, 1, 2, 3, 4];
    let mut n = 0;

    loop {
        t[n] = c;
        n += 1;

        if n == NUM_SUBSETS {
            break;
        }

        // Move the rightmost position that has room, then reset the ones after it.
        let mut i = Hand::SIZE - 1;
        while c[i] == Pool::SIZE - Hand::SIZE + i {
            i -= 1;
        }

        c[i] += 1;

        let mut j = i + 1;
        while j < Hand::SIZE {
            c[j] = c[j - 1] + 1;
            j += 1;
        }
    }

    t
}

const SUBSETS: [[usize; Hand::SIZE]; NUM_SUBSETS] = make_subsets();

/// Errors for reading a pool from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PoolError {
    /// The text is not valid cards notation.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The cards are not a valid pool.
    #[error(transparent)]
    InvalidHand(#[from] InvalidHandError),
}

/// A seven cards pool, two private cards and five shared cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pool([Card; 7]);

impl Pool {
    /// The number of cards in a pool.
    pub const SIZE: usize = 7;

    /// Creates a pool from the player private cards and the shared cards.
    pub fn new(private: [Card; 2], shared: [Card; 5]) -> Result<Pool, InvalidHandError> {
        let mut cards = [private[0]; Self::SIZE];
        cards[..2].copy_from_slice(&private);
        cards[2..].copy_from_slice(&shared);
        Self::from_cards(&cards)
    }

    /// Creates a pool from seven distinct cards.
    pub fn from_cards(cards: &[Card]) -> Result<Pool, InvalidHandError> {
        let cards = <[Card; Self::SIZE]>::try_from(cards)
            .map_err(|_| InvalidHandError::PoolSize(cards.len()))?;

        let mut seen = 0u64;
        for c in &cards {
            let bit = 1u64 << c.id();
            if seen & bit != 0 {
                return Err(InvalidHandError::DuplicateCard(*c));
            }

            seen |= bit;
        }

        Ok(Pool(cards))
    }

    /// Parses a pool with the given notation, the pool cards are in canonical
    /// order.
    pub fn parse_with(notation: &Notation, text: &str) -> Result<Pool, PoolError> {
        let cards = notation.parse_exact::<{ Self::SIZE }>(text)?;
        Ok(Self::from_cards(&cards)?)
    }

    /// The pool cards in the order they were given.
    pub fn cards(&self) -> &[Card; Self::SIZE] {
        &self.0
    }

    /// Returns the strongest five cards hand and its value.
    ///
    /// When more hands have the same value the first one in the lexicographic
    /// order of the cards positions in the pool wins.
    pub fn best_hand(&self) -> (Hand, HandValue) {
        let subset = |idx: &[usize; Hand::SIZE]| Hand::from(idx.map(|i| self.0[i]));

        let first = subset(&SUBSETS[0]);
        let mut best = (first, HandValue::from(first));
        trace!("Subset 0 {first} {}", best.1);

        for (n, idx) in SUBSETS.iter().enumerate().skip(1) {
            let hand = subset(idx);
            let value = HandValue::from(hand);
            trace!("Subset {n} {hand} {value}");

            if value.compare(&best.1) == Outcome::FirstWins {
                best = (hand, value);
            }
        }

        debug!("Best hand for pool {self} is {} {}", best.0, best.1);
        best
    }

    /// Returns the strongest five cards hand in canonical order.
    pub fn best_five(&self) -> Hand {
        self.best_hand().0
    }
}

impl FromStr for Pool {
    type Err = PoolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pool::parse_with(&Notation::default(), s)
    }
}

impl fmt::Display for Pool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.0 {
            write!(f, "{c}")?;
        }

        Ok(())
    }
}

/// Returns the strongest five cards hand out of seven distinct cards.
pub fn best_five(cards: &[Card]) -> Result<Hand, InvalidHandError> {
    Pool::from_cards(cards).map(|pool| pool.best_five())
}

/// Returns the strongest five cards hand for a player private cards and the
/// shared cards.
pub fn best_five_of(private: [Card; 2], shared: [Card; 5]) -> Result<Hand, InvalidHandError> {
    Pool::new(private, shared).map(|pool| pool.best_five())
}
