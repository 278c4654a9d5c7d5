// Copyright (C) 2026 Showdown Developers
// SPDX-License-Identifier: Apache-2.0
//
// ```bash
// $ cargo r --release --features=parallel --example par_eval_all7
// ```

use std::{
    sync::atomic::{AtomicU64, Ordering},
    time::Instant,
};

use showdown_eval::{Deck, HandRanking, evaluate_seven};

fn main() {
    // Evaluate all 133M hands with 4 parallel tasks.
    const NUM_TASKS: usize = 4;

    // Create per task counters to avoid contention.
    let task_counters = (0..NUM_TASKS)
        .map(|_| {
            (0..HandRanking::COUNT)
                .map(|_| AtomicU64::new(0))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    let now = Instant::now();

    Deck::descending().par_for_each(NUM_TASKS, 7, |task_id, hand| {
        let ranking = evaluate_seven(hand).ranking();
        let counters = &task_counters[task_id];
        counters[ranking as usize].fetch_add(1, Ordering::Relaxed);
    });

    let elapsed = now.elapsed().as_secs_f64();

    // Aggregate counters.
    let agg = (0..HandRanking::COUNT)
        .map(|r| {
            task_counters
                .iter()
                .map(|counts| counts[r].load(Ordering::Relaxed))
                .sum::<u64>()
        })
        .collect::<Vec<_>>();

    let total = agg.iter().sum::<u64>();
    println!("Total hands      {total}");
    println!("Elapsed:         {elapsed:.3}s");
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    for ranking in HandRanking::ALL {
        println!("{ranking:<16} {:>12}", agg[ranking as usize]);
    }
}
