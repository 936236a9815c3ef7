// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ParseError;

/// A Poker card.
///
/// A card packs its rank and suit in a single byte:
///
/// ```text
///   +--------+
///   |xxrrrrss|
///   +--------+
///   r = rank of card (deuce=0,trey=1,four=2,five=3,...,ace=12)
///   s = suit of card (clubs=0,diamonds=1,hearts=2,spades=3)
/// ```
///
/// so that comparing two ids compares rank first and suit second, cards sort
/// in canonical order by sorting their ids in descending order.
///
/// A card serializes as its id, deserializing an id outside `0..52` fails.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Card(u8);

/// A Poker card.
impl Card {
    /// Create a card given a suit and rank.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Self(((rank as u8) << 2) | suit as u8)
    }

    /// This card unique id in `0..52`.
    pub fn id(&self) -> u8 {
        self.0
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        match self.0 & 0x3 {
            0 => Suit::Clubs,
            1 => Suit::Diamonds,
            2 => Suit::Hearts,
            _ => Suit::Spades,
        }
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        Rank::from_index(self.0 >> 2)
            .unwrap_or_else(|| panic!("Invalid rank 0x{:x}", self.0))
    }
}

impl TryFrom<u8> for Card {
    type Error = ParseError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        if (id as usize) < Deck::SIZE {
            Ok(Card(id))
        } else {
            Err(ParseError::InvalidId(id))
        }
    }
}

impl From<Card> for u8 {
    fn from(card: Card) -> u8 {
        card.0
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank(), self.suit())
    }
}

/// Sorts cards in canonical order, rank descending and then suit descending.
pub fn canonicalize(cards: &mut [Card]) {
    cards.sort_unstable_by(|a, b| b.cmp(a));
}

/// Checks if cards are in canonical order without duplicates.
pub fn is_canonical(cards: &[Card]) -> bool {
    cards.windows(2).all(|w| w[0] > w[1])
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 0,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// The number of ranks.
    pub const COUNT: usize = 13;

    const ALL: [Rank; Rank::COUNT] = {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
    };

    /// Returns all ranks from deuce to ace.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        Self::ALL.into_iter()
    }

    /// Returns the rank with the given index, deuce is 0 and ace is 12.
    pub fn from_index(index: u8) -> Option<Rank> {
        Self::ALL.get(index as usize).copied()
    }

    /// The notation symbol for this rank.
    pub fn symbol(&self) -> char {
        match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Card suit.
///
/// Suits have an order only to sort cards deterministically, they never rank
/// a hand above another.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit.
    Clubs = 0,
    /// Diamonds suit.
    Diamonds = 1,
    /// Hearts suit.
    Hearts = 2,
    /// Spades suit.
    Spades = 3,
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
        };

        write!(f, "{suit}")
    }
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades].into_iter()
    }
}

/// A cards Deck
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Removes a card from the deck.
    pub fn remove(&mut self, card: Card) {
        self.cards.retain(|c| c != &card);
    }

    /// Calls the `f` closure for each k-cards hand.
    ///
    /// Hands are visited in lexicographic order of the cards positions in the
    /// deck. Panics if k is not 2 <= k <= 7.
    pub fn for_each<F>(&self, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        assert!((2..=7).contains(&k), "2 <= k <= 7");

        let n = self.cards.len();
        if k > n {
            return;
        }

        let mut idx = [0usize; 7];
        for (i, pos) in idx.iter_mut().enumerate().take(k) {
            *pos = i;
        }

        let mut h = [self.cards[0]; 7];
        loop {
            for (card, &pos) in h.iter_mut().zip(&idx[..k]) {
                *card = self.cards[pos];
            }

            f(&h[0..k]);

            // Move the rightmost index that has room, then reset the ones after it.
            let Some(i) = (0..k).rev().find(|&i| idx[i] < n - k + i) else {
                return;
            };

            idx[i] += 1;
            for j in (i + 1)..k {
                idx[j] = idx[j - 1] + 1;
            }
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;
    use rand::prelude::*;

    #[test]
    fn card_encoding() {
        let mut cards = HashSet::default();

        for card in Deck::default() {
            assert_eq!(card.id() >> 2, card.rank() as u8);
            assert_eq!(card.id() & 0x3, card.suit() as u8);
            assert_eq!(Card::new(card.rank(), card.suit()), card);
            cards.insert(card.id());
        }

        // Check uniquness.
        assert_eq!(cards.len(), Deck::SIZE);
        assert!(cards.iter().all(|&id| (id as usize) < Deck::SIZE));

        let kd = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(kd.id(), 45);

        let dc = Card::new(Rank::Deuce, Suit::Clubs);
        assert_eq!(dc.id(), 0);

        let as_ = Card::new(Rank::Ace, Suit::Spades);
        assert_eq!(as_.id(), 51);
    }

    #[test]
    fn card_from_id() {
        for card in Deck::default() {
            assert_eq!(Card::try_from(card.id()), Ok(card));
            assert_eq!(u8::from(card), card.id());
        }

        assert_eq!(Card::try_from(52), Err(ParseError::InvalidId(52)));
        assert_eq!(Card::try_from(255), Err(ParseError::InvalidId(255)));
    }

    #[test]
    fn card_serde() {
        for card in Deck::default() {
            let buf = bincode::serialize(&card).unwrap();
            assert_eq!(buf, [card.id()]);
            assert_eq!(bincode::deserialize::<Card>(&buf).unwrap(), card);
        }

        for id in [52, 60, 64, 255] {
            let err = bincode::deserialize::<Card>(&[id]).unwrap_err();
            assert_eq!(err.to_string(), format!("invalid card id {id}"));
        }
    }

    #[test]
    fn card_to_string() {
        let c = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(c.to_string(), "Kd");

        let c = Card::new(Rank::Five, Suit::Spades);
        assert_eq!(c.to_string(), "5s");

        let c = Card::new(Rank::Jack, Suit::Clubs);
        assert_eq!(c.to_string(), "Jc");

        let c = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!(c.to_string(), "Th");

        let c = Card::new(Rank::Ace, Suit::Hearts);
        assert_eq!(format!("{c:?}"), "Card(Ah)");
    }

    #[test]
    fn card_order() {
        let ah = Card::new(Rank::Ace, Suit::Hearts);
        let ac = Card::new(Rank::Ace, Suit::Clubs);
        let ks = Card::new(Rank::King, Suit::Spades);

        // Rank first, suit second.
        assert!(ah > ac);
        assert!(ac > ks);
    }

    #[test]
    fn canonical_order() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut cards = Deck::default().into_iter().collect::<Vec<_>>();

        for _ in 0..100 {
            cards.shuffle(&mut rng);
            let mut hand = cards[..7].to_vec();
            canonicalize(&mut hand);

            assert!(is_canonical(&hand));
            assert!(hand.windows(2).all(|w| w[0].rank() >= w[1].rank()));
            assert!(
                hand.windows(2)
                    .filter(|w| w[0].rank() == w[1].rank())
                    .all(|w| w[0].suit() > w[1].suit())
            );
        }

        let mut dups = [Card::new(Rank::Ace, Suit::Clubs); 2];
        canonicalize(&mut dups);
        assert!(!is_canonical(&dups));
    }

    #[test]
    fn rank_from_index() {
        for (idx, rank) in Rank::ranks().enumerate() {
            assert_eq!(Rank::from_index(idx as u8), Some(rank));
        }

        assert_eq!(Rank::from_index(13), None);
    }

    #[test]
    fn deck_for_each() {
        let deck = Deck::default();
        assert_eq!(deck.count(), Deck::SIZE);

        let mut hands = HashSet::default();
        deck.for_each(5, |cards| {
            assert_eq!(cards.len(), 5);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 2_598_960);

        hands.clear();
        deck.for_each(2, |cards| {
            assert_eq!(cards.len(), 2);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 1_326);

        hands.clear();
        deck.for_each(3, |cards| {
            assert_eq!(cards.len(), 3);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 22_100);
    }

    #[test]
    fn deck_for_each_order() {
        let mut deck = Deck::default();
        for card in Deck::default().into_iter().skip(4) {
            deck.remove(card);
        }
        assert_eq!(deck.count(), 4);

        let mut hands = Vec::new();
        deck.for_each(2, |cards| hands.push(cards.to_owned()));

        let cards = deck.into_iter().collect::<Vec<_>>();
        let expected = [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]
            .into_iter()
            .map(|(a, b)| vec![cards[a], cards[b]])
            .collect::<Vec<_>>();
        assert_eq!(hands, expected);
    }

    #[test]
    fn deck_for_each_remove() {
        let mut deck = Deck::default();

        // Keep 32 cards, from seven to ace.
        for card in Deck::default() {
            if card.rank() < Rank::Seven {
                deck.remove(card);
            }
        }
        assert_eq!(deck.count(), 32);

        let mut count = 0;
        deck.for_each(7, |cards| {
            assert_eq!(cards.len(), 7);
            count += 1;
        });
        assert_eq!(count, 3_365_856);
    }
}
