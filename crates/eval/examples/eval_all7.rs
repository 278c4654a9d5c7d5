// Copyright (C) 2026 Showdown Developers
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example eval_all7
// ...
// Total hands      133784560
//
// High Card            23294460
// Pair                 58627800
// Two Pair             31433400
// Three of a Kind       6461620
// Straight              6180020
// Flush                 4047644
// Full House            3473184
// Four of a Kind         224848
// Straight Flush          37260
// Royal Flush              4324
// ```

use std::time::Instant;

use showdown_eval::{Deck, HandRanking, evaluate_seven};

fn main() {
    // Evaluate all 133M hands.
    let now = Instant::now();
    let mut counts = [0u64; HandRanking::COUNT];

    Deck::descending().for_each(7, |hand| {
        let ranking = evaluate_seven(hand).ranking();
        counts[ranking as usize] += 1;
    });

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<u64>();
    println!("Total hands      {total}");
    println!("Elapsed:         {elapsed:.3}s");
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    for ranking in HandRanking::ALL {
        println!("{ranking:<16} {:>12}", counts[ranking as usize]);
    }
}
