// Copyright (C) 2026 Showdown Developers
// SPDX-License-Identifier: Apache-2.0
//
// Builds or loads the 7-card lookup tables and checks random hands against
// the direct evaluator:
//
// ```bash
// $ cargo r --release --example build_tables -- --path mappings.dat
// ```

use clap::Parser;
use log::LevelFilter;
use std::{path::PathBuf, process::ExitCode};

use showdown_eval::{Deck, LookupEvaluator, combo, evaluate_seven};

#[derive(Parser, Debug)]
#[command(version, about = "Builds the 7-card lookup tables")]
struct Cli {
    /// Path of the 7-card mapping file.
    #[arg(long, default_value = "mappings.dat")]
    path: PathBuf,
    /// Number of random hands checked against the direct evaluator.
    #[arg(long, default_value_t = 1_000_000)]
    samples: usize,
}

fn main() -> ExitCode {
    env_logger::builder()
        .filter_level(LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    let lookup = LookupEvaluator::load_or_build(&cli.path);

    log::info!("checking {} random hands", cli.samples);

    let mut mismatches = 0u64;
    Deck::default().sample(cli.samples, 7, |cards| {
        let mut hand = cards.to_owned();
        combo::sort_seven(&mut hand);

        let direct = evaluate_seven(&hand);
        let ranked = lookup.evaluate(&hand);
        if ranked != direct {
            log::error!("mismatch on {hand:?}: table {ranked} direct {direct}");
            mismatches += 1;
        }
    });

    if mismatches > 0 {
        log::error!("{mismatches} mismatched hands");
        return ExitCode::FAILURE;
    }

    log::info!("all {} sampled hands agree", cli.samples);
    ExitCode::SUCCESS
}
