use crate::config::ScoringConstants;
use crate::difficulty::DifficultyTable;
use crate::error::{StatsError, StatsResult};
use crate::stats::evaluator::Achievements;
use crate::stats::level::LevelResult;
use crate::stats::tiers::{tier_bonus, tier_points, TierPoints, TierThresholds};
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};
use tracing::debug;

/// Running counts for one bucket (a difficulty tier, a rating, or everything).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub total: u32,
    pub achieved: u32,
    pub special_grade: u32,
    pub full_combo_count: u32,
    pub passed_count: u32,
    pub tier_points_earned: u32,
    pub tier_points_possible: u32,
}

impl Totals {
    pub fn add(&mut self, achievements: &Achievements, points: TierPoints) {
        self.total += 1;
        self.achieved += achievements.full_clear as u32;
        self.special_grade += achievements.near_perfect as u32;
        self.full_combo_count += achievements.full_combo as u32;
        self.passed_count += achievements.passed as u32;
        self.tier_points_earned += points.earned;
        self.tier_points_possible += points.possible;
    }

    pub fn merge(&mut self, other: &Totals) {
        self.total += other.total;
        self.achieved += other.achieved;
        self.special_grade += other.special_grade;
        self.full_combo_count += other.full_combo_count;
        self.passed_count += other.passed_count;
        self.tier_points_earned += other.tier_points_earned;
        self.tier_points_possible += other.tier_points_possible;
    }

    pub fn is_fully_achieved(&self) -> bool {
        self.achieved == self.total
    }

    pub fn tier_points(&self) -> TierPoints {
        TierPoints {
            earned: self.tier_points_earned,
            possible: self.tier_points_possible,
        }
    }
}

/// Folded totals of one result set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Aggregate {
    /// Keyed by index into the difficulty table (0 = hardest).
    pub by_tier: BTreeMap<usize, Totals>,
    pub by_rating: BTreeMap<u32, Totals>,
    /// Tier points keyed by the length of the level's tier list.
    pub by_list_size: BTreeMap<u32, TierPoints>,
    pub grand: Totals,
}

impl Aggregate {
    pub fn is_empty(&self) -> bool {
        self.grand.total == 0
    }

    pub fn tier_bonus(&self, constants: &ScoringConstants) -> TierPoints {
        tier_bonus(self.grand.achieved, self.grand.total, constants)
    }
}

/// Single-use fold over one result set. Consumed by [`Aggregator::finish`].
pub struct Aggregator<'a> {
    table: &'a DifficultyTable,
    constants: ScoringConstants,
    seen: HashSet<String>,
    acc: Aggregate,
}

impl<'a> Aggregator<'a> {
    pub fn new(table: &'a DifficultyTable, constants: ScoringConstants) -> Self {
        Self {
            table,
            constants,
            seen: HashSet::new(),
            acc: Aggregate::default(),
        }
    }

    pub fn fold(
        &mut self,
        result: &LevelResult,
        thresholds: Option<&TierThresholds>,
    ) -> StatsResult<()> {
        if !self.seen.insert(result.level_name().to_string()) {
            return Err(StatsError::DuplicateLevel(result.level_name().to_string()));
        }

        let achievements = Achievements::evaluate(result, &self.constants);
        let points = thresholds.map_or_else(TierPoints::default, |t| tier_points(result, t));
        let tier = self.table.classify(result.rating());

        debug!(
            "Fold '{}' (d={}, tier={}): {:?} tp={}/{}",
            result.level_name(),
            result.rating(),
            tier,
            achievements,
            points.earned,
            points.possible
        );

        self.acc
            .by_tier
            .entry(tier)
            .or_default()
            .add(&achievements, points);
        self.acc
            .by_rating
            .entry(result.rating())
            .or_default()
            .add(&achievements, points);
        if points.possible > 0 {
            *self.acc.by_list_size.entry(points.possible).or_default() += points;
        }
        self.acc.grand.add(&achievements, points);
        Ok(())
    }

    pub fn finish(self) -> Aggregate {
        self.acc
    }
}

/// Folds every `(result, thresholds)` pair into a fresh [`Aggregate`].
pub fn aggregate<'r, I>(
    pairs: I,
    table: &DifficultyTable,
    constants: &ScoringConstants,
) -> StatsResult<Aggregate>
where
    I: IntoIterator<Item = (&'r LevelResult, Option<&'r TierThresholds>)>,
{
    let mut aggregator = Aggregator::new(table, *constants);
    for (result, thresholds) in pairs {
        aggregator.fold(result, thresholds)?;
    }
    Ok(aggregator.finish())
}

/// Tier point standing across every section of a report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TierPointSummary {
    pub by_list_size: BTreeMap<u32, TierPoints>,
    pub bonus: TierPoints,
    /// Level tier points plus the bonus.
    pub overall: TierPoints,
}

impl TierPointSummary {
    pub fn from_aggregates(aggregates: &[&Aggregate], constants: &ScoringConstants) -> Self {
        let mut by_list_size: BTreeMap<u32, TierPoints> = BTreeMap::new();
        let mut grand = Totals::default();

        for agg in aggregates {
            for (&size, &points) in &agg.by_list_size {
                *by_list_size.entry(size).or_default() += points;
            }
            grand.merge(&agg.grand);
        }

        let bonus = tier_bonus(grand.achieved, grand.total, constants);
        let mut overall = grand.tier_points();
        overall += bonus;

        Self {
            by_list_size,
            bonus,
            overall,
        }
    }
}
