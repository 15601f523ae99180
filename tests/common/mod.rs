#![allow(dead_code)]

use ffrstats::stats::{LevelResult, LevelResultParams, Threshold, TierThresholds};

/// Builder for LevelResult to keep tests short. Defaults to a flawless run.
pub struct LevelBuilder {
    params: LevelResultParams,
}

impl LevelBuilder {
    pub fn new(name: &str, rating: u32, notes: u32) -> Self {
        Self {
            params: LevelResultParams::builder()
                .level_name(name)
                .rating(rating)
                .perfect(notes)
                .max_combo(notes)
                .raw_score(50 * notes as u64)
                .full_combo(true)
                .note_total(notes)
                .build(),
        }
    }

    /// Sets the judgments and a matching score. A miss breaks the combo.
    pub fn judgements(mut self, perfect: u32, good: u32, average: u32, miss: u32) -> Self {
        self.params.perfect = perfect;
        self.params.good = good;
        self.params.average = average;
        self.params.miss = miss;
        self.params.full_combo = miss == 0;
        self.params.raw_score = (50 * perfect + 25 * good + 5 * average) as u64;
        self
    }

    pub fn boo(mut self, boo: u32) -> Self {
        self.params.boo = boo;
        self
    }

    pub fn score(mut self, score: u64) -> Self {
        self.params.raw_score = score;
        self
    }

    pub fn full_combo(mut self, fc: bool) -> Self {
        self.params.full_combo = fc;
        self
    }

    pub fn rank(mut self, rank: u32) -> Self {
        self.params.rank = rank;
        self
    }

    pub fn build(self) -> LevelResult {
        self.params.validate().expect("fixture level must be valid")
    }
}

pub fn perfect_run(name: &str, rating: u32) -> LevelResult {
    LevelBuilder::new(name, rating, 100).build()
}

/// 90 perfects and 10 goods: passed and full combo, but no AAA or SDG.
pub fn good_run(name: &str, rating: u32) -> LevelResult {
    LevelBuilder::new(name, rating, 100)
        .judgements(90, 10, 0, 0)
        .build()
}

/// Quit halfway: nothing earned.
pub fn failed_run(name: &str, rating: u32) -> LevelResult {
    LevelBuilder::new(name, rating, 100)
        .judgements(40, 5, 3, 2)
        .build()
}

pub fn tiers(cutoffs: &[&str]) -> TierThresholds {
    TierThresholds::new(
        cutoffs.iter()
            .map(|s| s.parse::<Threshold>().expect("fixture threshold must parse"))
            .collect(),
    )
}
