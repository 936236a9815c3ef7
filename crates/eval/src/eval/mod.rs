// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! A five cards [Hand] is evaluated by running the category detectors from the
//! strongest category to the weakest, the first matching detector sets the
//! hand [HandRank] and the ranks that break ties with other hands of the same
//! category, padded to five ranks with the hand cards not used by the
//! category. The resulting [HandValue] totally orders hands so that comparing
//! two hands is comparing their values.
//!
//! A [Pool] of seven cards is evaluated by checking all its 21 five cards
//! subsets, [Pool::best_five] returns the strongest hand and always returns
//! the same hand when more subsets have the same value.

pub mod eval;
pub use eval::{HandRank, HandValue, Outcome, compare, compare_cards};

mod hand;
pub use hand::{Hand, InvalidHandError};

mod best5;
pub use best5::{Pool, PoolError, best_five, best_five_of};

mod detect;
