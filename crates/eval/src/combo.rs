// Copyright (C) 2026 Showdown Developers
// SPDX-License-Identifier: Apache-2.0

//! Combinatorial hand indexing.
//!
//! Maps k-card hands sorted in descending index order to a minimal perfect
//! hash over the combinatorial number system: a hand with card indices
//! `c0 > c1 > ... > c(k-1)` hashes to `C(c0, k) + C(c1, k-1) + ... +
//! C(c(k-1), 1)`, a bijection onto `0..C(52, k)` used to address the
//! lookup tables.
use showdown_cards::Card;

/// Number of distinct 5-card hands, C(52, 5).
pub const FIVE_CARD_COMBINATIONS: usize = 2_598_960;

/// Number of distinct 7-card hands, C(52, 7).
pub const SEVEN_CARD_COMBINATIONS: usize = 133_784_560;

/// Table of C(n, k) for card indices n in 0..52 and k in 0..8.
const fn make_choose() -> [[u32; 8]; 52] {
    let mut t = [[0u64; 8]; 52];
    t[0][0] = 1;

    let mut n = 1;
    while n < 52 {
        t[n][0] = 1;

        let mut k = 1;
        while k < 8 {
            // C(n, k) = C(n-1, k-1) + C(n-1, k)
            t[n][k] = t[n - 1][k - 1] + t[n - 1][k];
            k += 1;
        }

        n += 1;
    }

    let mut out = [[0u32; 8]; 52];
    let mut n = 0;
    while n < 52 {
        let mut k = 0;
        while k < 8 {
            assert!(t[n][k] <= u32::MAX as u64);
            out[n][k] = t[n][k] as u32;
            k += 1;
        }

        n += 1;
    }

    out
}

const CHOOSE: [[u32; 8]; 52] = make_choose();

/// Returns the binomial coefficient for n choose k.
#[inline]
pub fn choose(n: usize, k: usize) -> usize {
    assert!(n < 52, "n={n} must be 0 <= n < 52");
    assert!(k < 8, "k={k} must be 0 <= k < 8");

    CHOOSE[n][k] as usize
}

/// Hashes a 5-card hand sorted in descending index order.
///
/// The hash is a bijection onto `0..FIVE_CARD_COMBINATIONS`.
#[inline]
pub fn five_card_hash(cards: &[Card]) -> usize {
    assert_eq!(cards.len(), 5);
    debug_assert!(is_descending(cards), "cards must be strictly descending");

    let mut hash = 0;
    for (i, c) in cards.iter().enumerate() {
        hash += CHOOSE[c.index() as usize][5 - i] as usize;
    }

    hash
}

/// Hashes a 7-card hand sorted in descending index order.
///
/// The hash is a bijection onto `0..SEVEN_CARD_COMBINATIONS`.
#[inline]
pub fn seven_card_hash(cards: &[Card]) -> usize {
    assert_eq!(cards.len(), 7);
    debug_assert!(is_descending(cards), "cards must be strictly descending");

    let mut hash = 0;
    for (i, c) in cards.iter().enumerate() {
        hash += CHOOSE[c.index() as usize][7 - i] as usize;
    }

    hash
}

pub(crate) fn is_descending(cards: &[Card]) -> bool {
    cards.windows(2).all(|w| w[0].index() > w[1].index())
}

/// Compare and swap so that the card at `a` has the higher index.
#[inline]
fn cas(cards: &mut [Card], a: usize, b: usize) {
    if cards[b].index() > cards[a].index() {
        cards.swap(a, b);
    }
}

/// Sorts 5 cards in descending index order with a fixed comparator network.
pub fn sort_five(cards: &mut [Card]) {
    assert_eq!(cards.len(), 5);

    cas(cards, 0, 1);
    cas(cards, 3, 4);
    cas(cards, 2, 4);
    cas(cards, 2, 3);
    cas(cards, 0, 3);
    cas(cards, 0, 2);
    cas(cards, 1, 4);
    cas(cards, 1, 3);
    cas(cards, 1, 2);
}

/// Sorts 7 cards in descending index order with a fixed comparator network.
pub fn sort_seven(cards: &mut [Card]) {
    assert_eq!(cards.len(), 7);

    cas(cards, 1, 2);
    cas(cards, 0, 2);
    cas(cards, 0, 1);
    cas(cards, 3, 4);
    cas(cards, 5, 6);
    cas(cards, 3, 5);
    cas(cards, 4, 6);
    cas(cards, 4, 5);
    cas(cards, 0, 4);
    cas(cards, 0, 3);
    cas(cards, 1, 5);
    cas(cards, 2, 6);
    cas(cards, 2, 5);
    cas(cards, 1, 3);
    cas(cards, 2, 4);
    cas(cards, 2, 3);
}

#[cfg(test)]
mod tests {
    use super::*;
    use showdown_cards::{Deck, Rank, Suit};
    use std::cmp::Reverse;

    #[test]
    fn choose_values() {
        assert_eq!(choose(0, 0), 1);
        assert_eq!(choose(1, 2), 0);

        [1, 51, 1275, 20825, 249900, 2349060, 18009460, 115775100]
            .into_iter()
            .enumerate()
            .for_each(|(k, v)| assert_eq!(choose(51, k), v));

        [1, 5, 10, 10, 5, 1, 0, 0]
            .into_iter()
            .enumerate()
            .for_each(|(k, v)| assert_eq!(choose(5, k), v));
    }

    #[test]
    fn hash_endpoints() {
        // Lowest 5 indices hash to 0, highest to C(52, 5) - 1.
        let lo = [
            Card::new(Rank::Trey, Suit::Clubs),
            Card::new(Rank::Deuce, Suit::Spades),
            Card::new(Rank::Deuce, Suit::Hearts),
            Card::new(Rank::Deuce, Suit::Diamonds),
            Card::new(Rank::Deuce, Suit::Clubs),
        ];
        assert_eq!(five_card_hash(&lo), 0);

        let hi = [
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::Ace, Suit::Hearts),
            Card::new(Rank::Ace, Suit::Diamonds),
            Card::new(Rank::Ace, Suit::Clubs),
            Card::new(Rank::King, Suit::Spades),
        ];
        assert_eq!(five_card_hash(&hi), FIVE_CARD_COMBINATIONS - 1);

        let lo = [
            Card::new(Rank::Trey, Suit::Hearts),
            Card::new(Rank::Trey, Suit::Diamonds),
            Card::new(Rank::Trey, Suit::Clubs),
            Card::new(Rank::Deuce, Suit::Spades),
            Card::new(Rank::Deuce, Suit::Hearts),
            Card::new(Rank::Deuce, Suit::Diamonds),
            Card::new(Rank::Deuce, Suit::Clubs),
        ];
        assert_eq!(seven_card_hash(&lo), 0);

        let hi = [
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::Ace, Suit::Hearts),
            Card::new(Rank::Ace, Suit::Diamonds),
            Card::new(Rank::Ace, Suit::Clubs),
            Card::new(Rank::King, Suit::Spades),
            Card::new(Rank::King, Suit::Hearts),
            Card::new(Rank::King, Suit::Diamonds),
        ];
        assert_eq!(seven_card_hash(&hi), SEVEN_CARD_COMBINATIONS - 1);
    }

    #[test]
    fn five_card_hash_bijection() {
        let mut seen = vec![false; FIVE_CARD_COMBINATIONS];

        Deck::descending().for_each(5, |cards| {
            let hash = five_card_hash(cards);
            assert!(!seen[hash]);
            seen[hash] = true;
        });

        assert!(seen.into_iter().all(|s| s));
    }

    // This takes a while to run in debug mode as it goes through 133M hands.
    #[test]
    #[ignore]
    fn seven_card_hash_bijection() {
        let mut seen = vec![false; SEVEN_CARD_COMBINATIONS];

        Deck::descending().for_each(7, |cards| {
            let hash = seven_card_hash(cards);
            assert!(!seen[hash]);
            seen[hash] = true;
        });

        assert!(seen.into_iter().all(|s| s));
    }

    #[test]
    fn sorting_networks() {
        let deck = Deck::default();

        deck.sample(1_000, 5, |cards| {
            let mut network = cards.to_owned();
            sort_five(&mut network);

            let mut sorted = cards.to_owned();
            sorted.sort_by_key(|c| Reverse(c.index()));

            assert_eq!(network, sorted);
            assert!(is_descending(&network));
        });

        deck.sample(1_000, 7, |cards| {
            let mut network = cards.to_owned();
            sort_seven(&mut network);

            let mut sorted = cards.to_owned();
            sorted.sort_by_key(|c| Reverse(c.index()));

            assert_eq!(network, sorted);
            assert!(is_descending(&network));
        });
    }
}
