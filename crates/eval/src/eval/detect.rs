// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand categories detectors.
//!
//! Each detector checks a canonical hand for a category and returns the ranks
//! that break ties between two hands of that category, most significant first.
use std::iter;

use super::{Hand, HandRank};
use showdown_cards::Rank;

/// Ranks multiplicity for a hand.
#[derive(Debug)]
pub(crate) struct Counts([u8; Rank::COUNT]);

impl Counts {
    pub fn new(hand: &Hand) -> Self {
        let mut counts = [0; Rank::COUNT];
        for c in hand.cards() {
            counts[c.rank() as usize] += 1;
        }

        Self(counts)
    }

    /// Ranks with exactly `n` cards, highest first.
    fn exactly(&self, n: u8) -> impl Iterator<Item = Rank> + '_ {
        Rank::ranks().rev().filter(move |r| self.0[*r as usize] == n)
    }

    /// Ranks with at least `n` cards, highest first.
    fn at_least(&self, n: u8) -> impl Iterator<Item = Rank> + '_ {
        Rank::ranks().rev().filter(move |r| self.0[*r as usize] >= n)
    }
}

/// Runs the detector for a category.
pub(crate) fn detect(rank: HandRank, hand: &Hand, counts: &Counts) -> Option<Vec<Rank>> {
    match rank {
        HandRank::StraightFlush => straight_flush(hand),
        HandRank::FourOfAKind => four_of_a_kind(counts),
        HandRank::FullHouse => full_house(counts),
        HandRank::Flush => flush(hand),
        HandRank::Straight => straight(hand),
        HandRank::ThreeOfAKind => three_of_a_kind(counts),
        HandRank::TwoPair => two_pair(counts),
        HandRank::OnePair => one_pair(counts),
        HandRank::HighCard => Some(high_card(hand)),
    }
}

fn straight_flush(hand: &Hand) -> Option<Vec<Rank>> {
    if hand.is_suited() {
        straight(hand)
    } else {
        None
    }
}

fn four_of_a_kind(counts: &Counts) -> Option<Vec<Rank>> {
    let quad = counts.exactly(4).next()?;
    let kicker = counts.exactly(1).next()?;
    Some(vec![quad, kicker])
}

fn full_house(counts: &Counts) -> Option<Vec<Rank>> {
    let trips = counts.at_least(3).next()?;
    let pair = counts.at_least(2).find(|&r| r != trips)?;
    Some(vec![trips, pair])
}

fn flush(hand: &Hand) -> Option<Vec<Rank>> {
    hand.is_suited().then(|| hand.ranks().to_vec())
}

/// The wheel A-5-4-3-2 ranks.
const WHEEL: [Rank; Hand::SIZE] = [Rank::Ace, Rank::Five, Rank::Four, Rank::Trey, Rank::Deuce];

/// A straight key is its top rank, the wheel counts as five high.
fn straight(hand: &Hand) -> Option<Vec<Rank>> {
    let ranks = hand.ranks();
    let distinct = ranks.windows(2).all(|w| w[0] > w[1]);

    if distinct && ranks[0] as u8 - ranks[4] as u8 == 4 {
        Some(vec![ranks[0]])
    } else if ranks == WHEEL {
        Some(vec![Rank::Five])
    } else {
        None
    }
}

fn three_of_a_kind(counts: &Counts) -> Option<Vec<Rank>> {
    let trips = counts.exactly(3).next()?;
    if counts.at_least(2).any(|r| r != trips) {
        return None;
    }

    Some(iter::once(trips).chain(counts.exactly(1)).collect())
}

fn two_pair(counts: &Counts) -> Option<Vec<Rank>> {
    let pairs = counts.exactly(2).collect::<Vec<_>>();
    if pairs.len() != 2 {
        return None;
    }

    Some(pairs.into_iter().chain(counts.exactly(1)).collect())
}

fn one_pair(counts: &Counts) -> Option<Vec<Rank>> {
    let mut pairs = counts.exactly(2);
    let pair = pairs.next()?;
    if pairs.next().is_some() {
        return None;
    }

    Some(iter::once(pair).chain(counts.exactly(1)).collect())
}

fn high_card(hand: &Hand) -> Vec<Rank> {
    hand.ranks().to_vec()
}
