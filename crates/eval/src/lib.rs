// Copyright (C) 2026 Showdown Developers
// SPDX-License-Identifier: Apache-2.0

//! Showdown poker hand evaluator.
//!
//! Ranks 5-card hands directly and finds the best 5-card hand in 7 cards,
//! either by direct evaluation or through precomputed lookup tables:
//!
//! ```
//! # use showdown_eval::{evaluate_five, Card, HandRanking, Rank, Suit};
//! let hand = [
//!     Card::new(Rank::Ace, Suit::Spades),
//!     Card::new(Rank::King, Suit::Spades),
//!     Card::new(Rank::Queen, Suit::Spades),
//!     Card::new(Rank::Jack, Suit::Spades),
//!     Card::new(Rank::Ten, Suit::Spades),
//! ];
//! assert_eq!(evaluate_five(&hand).ranking(), HandRanking::RoyalFlush);
//! ```
//!
//! Hands passed to the evaluators must be sorted in descending index order,
//! [combo::sort_five] and [combo::sort_seven] do that with a fixed
//! comparator network:
//!
//! ```
//! # use showdown_eval::{combo, evaluate_seven, Card, HandRanking, Rank, Suit};
//! let mut cards = [
//!     Card::new(Rank::Six, Suit::Clubs),
//!     Card::new(Rank::Eight, Suit::Hearts),
//!     Card::new(Rank::Eight, Suit::Diamonds),
//!     Card::new(Rank::Deuce, Suit::Spades),
//!     Card::new(Rank::Eight, Suit::Spades),
//!     Card::new(Rank::Six, Suit::Diamonds),
//!     Card::new(Rank::Eight, Suit::Clubs),
//! ];
//! combo::sort_seven(&mut cards);
//! assert_eq!(evaluate_seven(&cards).ranking(), HandRanking::FourOfAKind);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod combo;
pub mod eval;
pub mod hand;
pub mod lookup;

pub use eval::{Evaluator, evaluate_five, evaluate_seven};
pub use hand::{HandRanking, RankedHand};
pub use lookup::LookupEvaluator;
pub use showdown_cards::{Card, Deck, Rank, Suit};
