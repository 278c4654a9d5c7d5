// Copyright (C) 2026 Showdown Developers
// SPDX-License-Identifier: Apache-2.0

//! Ranked hand types.
use serde::{Deserialize, Serialize};
use showdown_cards::Card;
use std::{cmp::Ordering, fmt};

/// Hand ranking categories, from weakest to strongest.
///
/// The ordinal order is a contract: `HighCard` is the lowest category and
/// `RoyalFlush` the highest, and the derived `Ord` compares accordingly.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum HandRanking {
    /// No pair, ranked by the highest card.
    HighCard = 0,
    /// One pair.
    Pair,
    /// Two pairs.
    TwoPair,
    /// Three cards of the same rank.
    ThreeOfAKind,
    /// Five cards in rank sequence.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of a kind plus a pair.
    FullHouse,
    /// Four cards of the same rank.
    FourOfAKind,
    /// A straight in a single suit.
    StraightFlush,
    /// An ace-high straight flush.
    RoyalFlush,
}

impl HandRanking {
    /// Number of ranking categories.
    pub const COUNT: usize = 10;

    /// All categories in ascending strength order.
    pub const ALL: [HandRanking; Self::COUNT] = [
        HandRanking::HighCard,
        HandRanking::Pair,
        HandRanking::TwoPair,
        HandRanking::ThreeOfAKind,
        HandRanking::Straight,
        HandRanking::Flush,
        HandRanking::FullHouse,
        HandRanking::FourOfAKind,
        HandRanking::StraightFlush,
        HandRanking::RoyalFlush,
    ];
}

impl fmt::Display for HandRanking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandRanking::HighCard => "High Card",
            HandRanking::Pair => "Pair",
            HandRanking::TwoPair => "Two Pair",
            HandRanking::ThreeOfAKind => "Three of a Kind",
            HandRanking::Straight => "Straight",
            HandRanking::Flush => "Flush",
            HandRanking::FullHouse => "Full House",
            HandRanking::FourOfAKind => "Four of a Kind",
            HandRanking::StraightFlush => "Straight Flush",
            HandRanking::RoyalFlush => "Royal Flush",
        };

        f.pad(name)
    }
}

/// A ranked hand of up to 5 cards in significance order.
///
/// Cards are ordered by how much they matter to the ranking, the defining
/// group first and kickers last, so two hands compare by category and then
/// by rank left to right. Suits never break ties.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RankedHand {
    cards: [Card; Self::HAND_SIZE],
    len: u8,
    ranking: HandRanking,
}

impl RankedHand {
    /// Cards in a complete hand.
    pub const HAND_SIZE: usize = 5;

    /// Creates a ranked hand from significance-ordered cards.
    ///
    /// Panics if `cards` is empty or longer than [RankedHand::HAND_SIZE].
    pub fn new(cards: &[Card], ranking: HandRanking) -> RankedHand {
        assert!(
            !cards.is_empty() && cards.len() <= Self::HAND_SIZE,
            "a ranked hand has 1 to 5 cards"
        );

        let mut hand = [cards[0]; Self::HAND_SIZE];
        hand[..cards.len()].copy_from_slice(cards);

        RankedHand {
            cards: hand,
            len: cards.len() as u8,
            ranking,
        }
    }

    /// The hand cards in significance order.
    #[inline]
    pub fn cards(&self) -> &[Card] {
        &self.cards[..self.len as usize]
    }

    /// The card at the given significance position.
    #[inline]
    pub fn card(&self, pos: usize) -> Card {
        self.cards()[pos]
    }

    /// The hand ranking category.
    #[inline]
    pub fn ranking(&self) -> HandRanking {
        self.ranking
    }
}

impl PartialEq for RankedHand {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for RankedHand {}

impl PartialOrd for RankedHand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RankedHand {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ranking.cmp(&other.ranking).then_with(|| {
            let lhs = self.cards().iter().map(|c| c.rank());
            let rhs = other.cards().iter().map(|c| c.rank());
            lhs.cmp(rhs)
        })
    }
}

impl fmt::Display for RankedHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.ranking)?;
        for card in self.cards() {
            write!(f, " {card}")?;
        }

        Ok(())
    }
}
