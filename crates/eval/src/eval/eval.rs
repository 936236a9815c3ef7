// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand ranking and comparison.
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

use super::{
    Hand, InvalidHandError,
    detect::{Counts, detect},
};
use showdown_cards::{Card, Rank};

/// The hand category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandRank {
    /// High card.
    HighCard = 0,
    /// One pair.
    OnePair,
    /// Two pair.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Straight.
    Straight,
    /// Flush.
    Flush,
    /// Full house.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// Straight flush.
    StraightFlush,
}

impl HandRank {
    /// The categories in detection order, highest first.
    pub const PRIORITY: [HandRank; 9] = [
        HandRank::StraightFlush,
        HandRank::FourOfAKind,
        HandRank::FullHouse,
        HandRank::Flush,
        HandRank::Straight,
        HandRank::ThreeOfAKind,
        HandRank::TwoPair,
        HandRank::OnePair,
        HandRank::HighCard,
    ];

    /// Checks if a hand matches this category on its own, without checking
    /// higher categories first, and returns the ranks that break ties.
    ///
    /// ```
    /// # use showdown_eval::*;
    /// let hand = "AdAc7d7h7s".parse::<Hand>()?;
    /// assert_eq!(HandRank::FullHouse.detect(&hand), Some(vec![Rank::Seven, Rank::Ace]));
    /// assert_eq!(HandRank::OnePair.detect(&hand), Some(vec![Rank::Ace]));
    /// assert_eq!(HandRank::Flush.detect(&hand), None);
    /// # Ok::<(), ParseError>(())
    /// ```
    pub fn detect(self, hand: &Hand) -> Option<Vec<Rank>> {
        detect(self, hand, &Counts::new(hand))
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "One Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
        };

        write!(f, "{name}")
    }
}

/// The value of a five cards hand.
///
/// Values compare by category first and then by the tie breaking ranks, a
/// higher value is a stronger hand and equal values split the pot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HandValue {
    rank: HandRank,
    ranks: [Rank; Hand::SIZE],
}

impl HandValue {
    /// Evaluates a five cards hand given in any order.
    pub fn eval(cards: &[Card]) -> Result<HandValue, InvalidHandError> {
        Hand::new(cards).map(|hand| Self::eval_hand(&hand))
    }

    /// Evaluates a hand.
    pub fn eval_hand(hand: &Hand) -> HandValue {
        let counts = Counts::new(hand);
        let (rank, key) = HandRank::PRIORITY
            .into_iter()
            .find_map(|rank| detect(rank, hand, &counts).map(|key| (rank, key)))
            .expect("High card matches any hand");

        HandValue {
            rank,
            ranks: pad_key(key, hand),
        }
    }

    /// The hand category.
    pub fn rank(&self) -> HandRank {
        self.rank
    }

    /// The tie breaking ranks, most significant first.
    pub fn ranks(&self) -> &[Rank; Hand::SIZE] {
        &self.ranks
    }

    /// Compares this value with another.
    pub fn compare(&self, other: &HandValue) -> Outcome {
        self.cmp(other).into()
    }
}

/// Fills a key with the hand ranks it doesn't use, highest first.
fn pad_key(key: Vec<Rank>, hand: &Hand) -> [Rank; Hand::SIZE] {
    let mut rest = hand.ranks().to_vec();
    for r in &key {
        if let Some(pos) = rest.iter().position(|x| x == r) {
            rest.remove(pos);
        }
    }

    let mut ranks = [Rank::Deuce; Hand::SIZE];
    for (dst, src) in ranks.iter_mut().zip(key.into_iter().chain(rest)) {
        *dst = src;
    }

    ranks
}

impl From<Hand> for HandValue {
    fn from(hand: Hand) -> Self {
        HandValue::eval_hand(&hand)
    }
}

impl From<&Hand> for HandValue {
    fn from(hand: &Hand) -> Self {
        HandValue::eval_hand(hand)
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rank)?;
        for r in &self.ranks {
            write!(f, " {r}")?;
        }

        Ok(())
    }
}

/// The result of comparing two hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The first hand is stronger.
    FirstWins,
    /// The second hand is stronger.
    SecondWins,
    /// The hands have the same value.
    Tie,
}

impl Outcome {
    /// The outcome with the hands swapped.
    pub fn reverse(self) -> Outcome {
        match self {
            Outcome::FirstWins => Outcome::SecondWins,
            Outcome::SecondWins => Outcome::FirstWins,
            Outcome::Tie => Outcome::Tie,
        }
    }
}

impl From<Ordering> for Outcome {
    fn from(ord: Ordering) -> Self {
        match ord {
            Ordering::Greater => Outcome::FirstWins,
            Ordering::Less => Outcome::SecondWins,
            Ordering::Equal => Outcome::Tie,
        }
    }
}

/// Compares two hands or hand values.
///
/// ```
/// # use showdown_eval::*;
/// let flush = "AcKcQcJc9c".parse::<Hand>()?;
/// let straight_flush = "7c6c5c4c3c".parse::<Hand>()?;
/// assert_eq!(compare(flush, straight_flush), Outcome::SecondWins);
/// assert_eq!(compare(HandValue::from(flush), flush), Outcome::Tie);
/// # Ok::<(), ParseError>(())
/// ```
pub fn compare(first: impl Into<HandValue>, second: impl Into<HandValue>) -> Outcome {
    first.into().compare(&second.into())
}

/// Compares two five cards hands given in any order.
pub fn compare_cards(first: &[Card], second: &[Card]) -> Result<Outcome, InvalidHandError> {
    Ok(HandValue::eval(first)?.compare(&HandValue::eval(second)?))
}
