// Copyright (C) 2026 Showdown Developers
// SPDX-License-Identifier: Apache-2.0

//! Direct hand evaluation.
use showdown_cards::{Card, Rank, Suit};
use std::cmp::Reverse;

use crate::combo;
use crate::hand::{HandRanking, RankedHand};
use crate::lookup::LookupEvaluator;

/// Evaluation strategy.
///
/// All variants rank the same hands the same way, they differ in input size
/// and cost: [Evaluator::FiveCard] ranks 1 to 5 cards directly,
/// [Evaluator::SevenCard] searches the best 5 cards out of 7, and
/// [Evaluator::Lookup] answers 7-card queries from precomputed tables.
pub enum Evaluator {
    /// Direct evaluation of 1 to 5 cards.
    FiveCard,
    /// Direct evaluation of 7 cards.
    SevenCard,
    /// Table-driven evaluation of 7 cards.
    Lookup(LookupEvaluator),
}

impl Evaluator {
    /// Ranks a hand of cards sorted in descending index order.
    pub fn evaluate(&self, cards: &[Card]) -> RankedHand {
        match self {
            Evaluator::FiveCard => evaluate_five(cards),
            Evaluator::SevenCard => evaluate_seven(cards),
            Evaluator::Lookup(lookup) => lookup.evaluate(cards),
        }
    }
}

/// Ranks a hand of 1 to 5 cards sorted in descending index order.
///
/// Straights and flushes only apply to complete 5-card hands, shorter hands
/// rank by their groups and kickers alone. The returned hand's cards are in
/// significance order.
///
/// Panics if `cards` is empty or longer than 5.
pub fn evaluate_five(cards: &[Card]) -> RankedHand {
    assert!(
        !cards.is_empty() && cards.len() <= RankedHand::HAND_SIZE,
        "evaluate_five takes 1 to 5 cards"
    );
    debug_assert!(combo::is_descending(cards), "cards must be descending");

    let mut hand = [cards[0]; RankedHand::HAND_SIZE];
    let hand = &mut hand[..cards.len()];
    hand.copy_from_slice(cards);

    // The number of same-rank card pairs identifies every paired category.
    let ranking = match count_pairs(hand) {
        0 => return rank_unpaired(hand),
        1 => HandRanking::Pair,
        2 => HandRanking::TwoPair,
        3 => HandRanking::ThreeOfAKind,
        4 => HandRanking::FullHouse,
        _ => HandRanking::FourOfAKind,
    };

    reorder(hand, ranking);
    RankedHand::new(hand, ranking)
}

/// Ranks the best 5-card hand in 7 cards sorted in descending index order.
///
/// Panics if `cards` is not 7 cards.
pub fn evaluate_seven(cards: &[Card]) -> RankedHand {
    assert_eq!(cards.len(), 7, "evaluate_seven takes 7 cards");
    debug_assert!(combo::is_descending(cards), "cards must be descending");

    let grouped = rank_groups(cards);

    // Straight flushes hide inside the flush suit, mixed-suit straights
    // only matter when there is no flush.
    let special = match rank_suited(cards) {
        Some(suited) => Some(suited),
        None => find_straight(cards).map(|run| RankedHand::new(&run, HandRanking::Straight)),
    };

    match special {
        Some(hand) if hand.ranking() >= grouped.ranking() => hand,
        _ => grouped,
    }
}

/// Counts the same-rank card pairs in a descending hand.
fn count_pairs(cards: &[Card]) -> usize {
    let mut count = 0;
    for i in 0..cards.len() {
        for j in (i + 1)..cards.len() {
            if cards[i].rank() == cards[j].rank() {
                count += 1;
            }
        }
    }

    count
}

/// Ranks a hand with no repeated ranks.
fn rank_unpaired(cards: &[Card]) -> RankedHand {
    if cards.len() == RankedHand::HAND_SIZE {
        let flush = cards.iter().all(|c| c.suit() == cards[0].suit());

        match (flush, find_straight(cards)) {
            (true, Some(run)) if run[4].rank() == Rank::Ten => {
                return RankedHand::new(&run, HandRanking::RoyalFlush);
            }
            (true, Some(run)) => return RankedHand::new(&run, HandRanking::StraightFlush),
            (false, Some(run)) => return RankedHand::new(&run, HandRanking::Straight),
            (true, None) => return RankedHand::new(cards, HandRanking::Flush),
            (false, None) => {}
        }
    }

    RankedHand::new(cards, HandRanking::HighCard)
}

/// Finds the highest 5-card rank sequence in descending cards.
///
/// Repeated ranks are skipped, so this works on 7-card hands too. The run
/// comes back in significance order: for the wheel that is 5 4 3 2 with the
/// ace last.
fn find_straight(cards: &[Card]) -> Option<[Card; 5]> {
    let mut run = [cards[0]; 5];
    let mut len = 1;

    for &c in &cards[1..] {
        let prev = run[len - 1].rank();
        if c.rank() == prev {
            continue;
        }

        if prev as u8 == c.rank() as u8 + 1 {
            run[len] = c;
            len += 1;
            if len == RankedHand::HAND_SIZE {
                return Some(run);
            }
        } else {
            run[0] = c;
            len = 1;
        }
    }

    // The wheel: 5 4 3 2 completed by an ace.
    if len == 4 && run[0].rank() == Rank::Five && cards[0].rank() == Rank::Ace {
        run[4] = cards[0];
        return Some(run);
    }

    None
}

/// Moves the defining group of a paired hand to the front.
///
/// Kickers keep their descending order after the group.
fn reorder(cards: &mut [Card], ranking: HandRanking) {
    match ranking {
        HandRanking::FourOfAKind => {
            if cards[0].rank() != cards[1].rank() {
                cards.rotate_left(1);
            }
        }
        HandRanking::FullHouse => {
            if cards[1].rank() != cards[2].rank() {
                cards.rotate_left(2);
            }
        }
        HandRanking::ThreeOfAKind => {
            let start = (0..cards.len() - 2)
                .find(|&i| cards[i].rank() == cards[i + 2].rank())
                .unwrap();
            cards[..start + 3].rotate_right(3);
        }
        HandRanking::TwoPair => {
            if cards[0].rank() != cards[1].rank() {
                cards.rotate_left(1);
            } else if cards.len() == 5 && cards[2].rank() != cards[3].rank() {
                cards[2..].rotate_left(1);
            }
        }
        HandRanking::Pair => {
            let start = (0..cards.len() - 1)
                .find(|&i| cards[i].rank() == cards[i + 1].rank())
                .unwrap();
            cards[..start + 2].rotate_right(2);
        }
        _ => {}
    }
}

/// Ranks 7 cards by their equal-rank groups, ignoring suits.
fn rank_groups(cards: &[Card]) -> RankedHand {
    // Descending cards keep equal ranks adjacent, collect the runs.
    let mut runs: Vec<(usize, usize)> = Vec::with_capacity(7);
    let mut start = 0;
    for i in 1..=cards.len() {
        if i == cards.len() || cards[i].rank() != cards[start].rank() {
            runs.push((start, i - start));
            start = i;
        }
    }

    // Stable sort keeps higher ranks first among runs of equal length.
    runs.sort_by_key(|&(_, len)| Reverse(len));

    let ranking = match (runs[0].1, runs[1].1) {
        (4, _) => HandRanking::FourOfAKind,
        (3, n) if n >= 2 => HandRanking::FullHouse,
        (3, _) => HandRanking::ThreeOfAKind,
        (2, 2) => HandRanking::TwoPair,
        (2, _) => HandRanking::Pair,
        _ => HandRanking::HighCard,
    };

    let defining: &[(usize, usize)] = match ranking {
        HandRanking::FourOfAKind | HandRanking::ThreeOfAKind | HandRanking::Pair => &runs[..1],
        HandRanking::FullHouse | HandRanking::TwoPair => &runs[..2],
        _ => &[],
    };

    let mut hand = [cards[0]; RankedHand::HAND_SIZE];
    let mut len = 0;
    let mut used = [false; 7];

    for &(start, run_len) in defining {
        // A second trips run only contributes the pair of a full house.
        let take = run_len.min(RankedHand::HAND_SIZE - len);
        for i in start..start + take {
            hand[len] = cards[i];
            used[i] = true;
            len += 1;
        }
    }

    // The highest remaining cards fill the kicker slots.
    for (i, &c) in cards.iter().enumerate() {
        if len == RankedHand::HAND_SIZE {
            break;
        }

        if !used[i] {
            hand[len] = c;
            len += 1;
        }
    }

    RankedHand::new(&hand, ranking)
}

/// Ranks the suited part of 7 cards when 5 or more share a suit.
fn rank_suited(cards: &[Card]) -> Option<RankedHand> {
    let mut counts = [0usize; 4];
    for c in cards {
        counts[c.suit() as usize] += 1;
    }

    let suit = Suit::suits().find(|&s| counts[s as usize] >= RankedHand::HAND_SIZE)?;

    let mut suited = [cards[0]; 7];
    let mut len = 0;
    for &c in cards {
        if c.suit() == suit {
            suited[len] = c;
            len += 1;
        }
    }
    let suited = &suited[..len];

    let hand = match find_straight(suited) {
        Some(run) if run[4].rank() == Rank::Ten => {
            RankedHand::new(&run, HandRanking::RoyalFlush)
        }
        Some(run) => RankedHand::new(&run, HandRanking::StraightFlush),
        None => RankedHand::new(&suited[..RankedHand::HAND_SIZE], HandRanking::Flush),
    };

    Some(hand)
}
