// Copyright (C) 2026 Showdown Developers
// SPDX-License-Identifier: Apache-2.0

//! Parallel hand iteration.
//!
//! Hands are indexed by the combinatorial number system, so the combination
//! space splits into contiguous slices that parallel tasks walk
//! independently: each task unranks its first combination and steps forward
//! from there.
use rand::prelude::*;
use std::thread;

use super::{Card, Deck};

/// Table of C(n, k) for n <= 52 and k <= 7, built with Pascal's rule.
const fn make_binomials() -> [[u32; 8]; 53] {
    let mut t = [[0u32; 8]; 53];
    t[0][0] = 1;

    let mut n = 1;
    while n < 53 {
        t[n][0] = 1;

        let mut k = 1;
        while k < 8 {
            // C(n, k) = C(n-1, k-1) + C(n-1, k)
            t[n][k] = t[n - 1][k - 1] + t[n - 1][k];
            k += 1;
        }

        n += 1;
    }

    t
}

const BINOMIALS: [[u32; 8]; 53] = make_binomials();

/// Returns the binomial coefficient for n choose k.
#[inline]
fn binomial(n: usize, k: usize) -> usize {
    assert!(n <= 52, "n={n} must be 0 <= n <= 52");
    assert!(k <= 7, "k={k} must be 0 <= k <= 7");

    BINOMIALS[n][k] as usize
}

/// Converts a combination index to the positions of its k-combination.
///
/// Inverse of the combinatorial number system rank (Knuth 4A, Theorem L):
/// each slot takes the largest position whose binomial fits in what is
/// left of the index.
fn unrank_combination(mut index: usize, k: usize) -> [usize; 7] {
    assert!(k <= 7);

    let mut positions = [0; 7];
    for slot in (1..=k).rev() {
        let mut pos = slot - 1;
        while binomial(pos + 1, slot) <= index {
            pos += 1;
        }

        positions[slot - 1] = pos;
        index -= binomial(pos, slot);
    }

    positions
}

/// Calls the closure for `count` k-combinations of n positions starting
/// from the combination ranked `first`.
fn visit_combinations<F>(n: usize, k: usize, first: usize, count: usize, mut f: F)
where
    F: FnMut(&[usize]),
{
    if count == 0 {
        return;
    }

    // Algorithm L from TAOCP 4A, with sentinels above the k slots.
    let mut c = vec![0usize; k + 3];
    c[1..=k].copy_from_slice(&unrank_combination(first, k)[..k]);
    c[k + 1] = n;

    let mut remaining = count;
    loop {
        f(&c[1..=k]);

        remaining -= 1;
        if remaining == 0 {
            return;
        }

        let mut j = 1;
        while c[j] + 1 == c[j + 1] {
            c[j] = j - 1;
            j += 1;
        }

        if j > k {
            return;
        }

        c[j] += 1;
    }
}

impl Deck {
    /// Parallel for each, calls the `f` closure for each k-cards hand.
    ///
    /// The combination space is split into `num_tasks` contiguous slices,
    /// one scoped thread per non-empty slice. The closure takes the task
    /// identifier (0..num_tasks) and a slice of cards of length k. Hands
    /// follow the deck order, so a [descending](Deck::descending) deck
    /// yields strictly descending hands.
    ///
    /// Panics if k is not 2 <= k <= 7.
    pub fn par_for_each<F>(&self, num_tasks: usize, k: usize, f: F)
    where
        F: Fn(usize, &[Card]) + Send + Sync,
    {
        assert!(2 <= k && k <= 7, "2 <= k <= 7");
        assert!(num_tasks > 0);

        let n = self.cards.len();
        if k > n {
            return;
        }

        let num_hands = binomial(n, k);
        let hands_per_task = num_hands.div_ceil(num_tasks);

        thread::scope(|s| {
            for task_id in 0..num_tasks {
                let first = task_id * hands_per_task;
                if first >= num_hands {
                    // More tasks than hands, earlier tasks covered them all.
                    break;
                }

                let count = hands_per_task.min(num_hands - first);
                let f = &f;
                s.spawn(move || {
                    let mut hand = vec![self.cards[0]; k];
                    visit_combinations(n, k, first, count, |positions| {
                        for (slot, &pos) in positions.iter().enumerate() {
                            hand[slot] = self.cards[pos];
                        }

                        f(task_id, &hand);
                    });
                });
            }
        });
    }

    /// Calls the given closure from `num_tasks` parallel tasks generating
    /// `samples_per_task` samples of size k.
    pub fn par_sample<F>(&self, num_tasks: usize, samples_per_task: usize, k: usize, f: F)
    where
        F: Fn(usize, &[Card]) + Send + Sync,
    {
        assert!(2 <= k && k <= 7, "2 <= k <= 7");
        assert!(num_tasks > 0);
        assert!(samples_per_task > 0);

        if k > self.cards.len() {
            return;
        }

        thread::scope(|s| {
            for task_id in 0..num_tasks {
                let f = &f;
                s.spawn(move || {
                    let mut rng = SmallRng::from_os_rng();
                    let mut hand = vec![self.cards[0]; k];

                    for _ in 0..samples_per_task {
                        for (slot, c) in self.cards.choose_multiple(&mut rng, k).enumerate() {
                            hand[slot] = *c;
                        }

                        f(task_id, &hand);
                    }
                });
            }
        });
    }
}
