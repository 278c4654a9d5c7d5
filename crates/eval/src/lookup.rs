// Copyright (C) 2026 Showdown Developers
// SPDX-License-Identifier: Apache-2.0

//! Precomputed lookup tables.
use anyhow::{Result, bail};
use showdown_cards::{Card, Deck, Rank, Suit};
use std::{
    fs::File,
    io::{BufReader, BufWriter, Read, Write},
    path::Path,
    time::Instant,
};

use crate::combo::{self, FIVE_CARD_COMBINATIONS, SEVEN_CARD_COMBINATIONS};
use crate::eval::{evaluate_five, evaluate_seven};
use crate::hand::{HandRanking, RankedHand};

/// Size in bytes of a persisted 7-card mapping.
const MAPPING_FILE_LEN: u64 = (SEVEN_CARD_COMBINATIONS * 4) as u64;

/// Table-driven 7-card evaluator.
///
/// Holds a table of all 2,598,960 ranked 5-card hands addressed by
/// [combo::five_card_hash], and a mapping from each of the 133,784,560
/// 7-card hashes to the 5-card hash of its best hand. A query is two
/// indexed reads.
///
/// The mapping takes minutes to compute, [LookupEvaluator::load_or_build]
/// persists it so later runs start in seconds. The 5-card table is cheap
/// and always regenerated.
pub struct LookupEvaluator {
    five: Vec<RankedHand>,
    seven: Vec<u32>,
}

impl LookupEvaluator {
    /// Builds both tables by enumerating every hand.
    pub fn build() -> LookupEvaluator {
        let five = Self::build_five();

        log::info!("building 7-card mapping");
        let start = Instant::now();

        const FIVE_PERCENT: usize = SEVEN_CARD_COMBINATIONS / 20;
        let mut seven = vec![0u32; SEVEN_CARD_COMBINATIONS];
        let mut done = 0usize;

        Deck::descending().for_each(7, |cards| {
            let best = evaluate_seven(cards);

            let mut hand = [best.card(0); RankedHand::HAND_SIZE];
            hand.copy_from_slice(best.cards());
            combo::sort_five(&mut hand);

            seven[combo::seven_card_hash(cards)] = combo::five_card_hash(&hand) as u32;

            done += 1;
            if done % FIVE_PERCENT == 0 {
                log::info!(
                    "7-card mapping {:>3}% {:.1?}",
                    done / FIVE_PERCENT * 5,
                    start.elapsed()
                );
            }
        });

        LookupEvaluator { five, seven }
    }

    /// Loads the 7-card mapping from a file and regenerates the 5-card table.
    ///
    /// Fails if the file cannot be read or its size does not match a
    /// complete mapping.
    pub fn load(path: &Path) -> Result<LookupEvaluator> {
        let file = File::open(path)?;

        let len = file.metadata()?.len();
        if len != MAPPING_FILE_LEN {
            bail!(
                "invalid mapping file {}: expected {MAPPING_FILE_LEN} bytes found {len}",
                path.display()
            );
        }

        log::info!("loading 7-card mapping from {}", path.display());

        let mut reader = BufReader::new(file);
        let mut seven = vec![0u32; SEVEN_CARD_COMBINATIONS];
        let mut buf = [0u8; 4096];
        let mut pos = 0;

        while pos < seven.len() {
            let n = (seven.len() - pos).min(buf.len() / 4);
            reader.read_exact(&mut buf[..n * 4])?;

            for (i, rec) in buf[..n * 4].chunks_exact(4).enumerate() {
                seven[pos + i] = u32::from_le_bytes([rec[0], rec[1], rec[2], rec[3]]);
            }

            pos += n;
        }

        Ok(LookupEvaluator {
            five: Self::build_five(),
            seven,
        })
    }

    /// Saves the 7-card mapping as flat little-endian records.
    pub fn save(&self, path: &Path) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        for &idx in &self.seven {
            writer.write_all(&idx.to_le_bytes())?;
        }

        writer.flush()?;
        Ok(())
    }

    /// Loads the mapping from `path`, building and persisting it if the
    /// file is missing or unusable.
    ///
    /// A failed save is logged and ignored, the in-memory tables are
    /// complete either way.
    pub fn load_or_build(path: &Path) -> LookupEvaluator {
        match Self::load(path) {
            Ok(eval) => eval,
            Err(err) => {
                if path.exists() {
                    log::warn!("cannot load {}: {err}", path.display());
                } else {
                    log::info!("mapping file {} not found", path.display());
                }

                let eval = Self::build();
                if let Err(err) = eval.save(path) {
                    log::warn!("cannot save mapping to {}: {err}", path.display());
                }

                eval
            }
        }
    }

    /// Ranks the best 5-card hand in 7 cards sorted in descending index
    /// order.
    ///
    /// Panics if `cards` is not 7 cards.
    #[inline]
    pub fn evaluate(&self, cards: &[Card]) -> RankedHand {
        self.five[self.seven[combo::seven_card_hash(cards)] as usize]
    }

    /// Ranks 5 cards sorted in descending index order from the 5-card table.
    #[inline]
    pub fn evaluate_five(&self, cards: &[Card]) -> RankedHand {
        self.five[combo::five_card_hash(cards)]
    }

    fn build_five() -> Vec<RankedHand> {
        log::info!("building 5-card table");
        let start = Instant::now();

        let filler = RankedHand::new(
            &[Card::new(Rank::Deuce, Suit::Clubs)],
            HandRanking::HighCard,
        );
        let mut table = vec![filler; FIVE_CARD_COMBINATIONS];

        Deck::descending().for_each(5, |cards| {
            table[combo::five_card_hash(cards)] = evaluate_five(cards);
        });

        log::info!("5-card table done in {:.1?}", start.elapsed());
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::Evaluator;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn temp_path(name: &str) -> std::path::PathBuf {
        static COUNTER: AtomicU32 = AtomicU32::new(0);
        let id = COUNTER.fetch_add(1, Ordering::Relaxed);
        std::env::temp_dir().join(format!("showdown-{}-{name}-{id}", std::process::id()))
    }

    #[test]
    fn load_rejects_bad_files() {
        let path = temp_path("missing");
        assert!(LookupEvaluator::load(&path).is_err());

        // A truncated mapping must be rejected before reading.
        let path = temp_path("truncated");
        std::fs::write(&path, [0u8; 1024]).unwrap();
        assert!(LookupEvaluator::load(&path).is_err());
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn five_table_agrees_with_direct() {
        let five = LookupEvaluator::build_five();

        Deck::default().sample(10_000, 5, |cards| {
            let mut hand = cards.to_owned();
            combo::sort_five(&mut hand);

            let ranked = five[combo::five_card_hash(&hand)];
            let direct = evaluate_five(&hand);

            assert_eq!(ranked.ranking(), direct.ranking());
            assert_eq!(ranked.cards(), direct.cards());
        });
    }

    // Builds the full tables, takes minutes even in release mode.
    #[test]
    #[ignore]
    fn build_save_load_conformance() {
        let eval = LookupEvaluator::build();

        let path = temp_path("mapping");
        eval.save(&path).unwrap();
        let loaded = LookupEvaluator::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(eval.seven, loaded.seven);

        // The tables answer through the strategy surface too.
        let strategy = Evaluator::Lookup(loaded);

        Deck::default().sample(1_000_000, 7, |cards| {
            let mut hand = cards.to_owned();
            combo::sort_seven(&mut hand);

            let direct = evaluate_seven(&hand);
            assert_eq!(eval.evaluate(&hand), direct);
            assert_eq!(strategy.evaluate(&hand), direct);
        });
    }
}
