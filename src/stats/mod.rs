pub mod aggregate;
pub mod evaluator;
pub mod format;
pub mod level;
pub mod loader;
pub mod pending;
pub mod tiers;

pub use self::aggregate::{aggregate, Aggregate, Aggregator, TierPointSummary, Totals};
pub use self::evaluator::Achievements;
pub use self::level::{ingest, Ingestion, LevelResult, LevelResultParams, RawLevelRecord};
pub use self::tiers::{tier_points, Threshold, TierLookup, TierPoints, TierThresholds};

use crate::config::Config;
use crate::difficulty::DifficultyTable;
use crate::error::StatsResult;
use self::level::NoteCountLookup;

/// A difficulty table and configuration, fixed for one report run.
#[derive(Debug, Clone, Default)]
pub struct StatsEngine {
    pub table: DifficultyTable,
    pub config: Config,
}

impl StatsEngine {
    pub fn new(table: DifficultyTable, config: Config) -> Self {
        Self { table, config }
    }

    pub fn ingest<N: NoteCountLookup + ?Sized>(
        &self,
        records: &[RawLevelRecord],
        notes: &N,
    ) -> StatsResult<Ingestion> {
        ingest(records, notes)
    }

    /// Levels missing from `tiers` contribute no tier points.
    pub fn aggregate<T: TierLookup + ?Sized>(
        &self,
        results: &[LevelResult],
        tiers: &T,
    ) -> StatsResult<Aggregate> {
        aggregate(
            results
                .iter()
                .map(|r| (r, tiers.thresholds(r.level_name()))),
            &self.table,
            &self.config.scoring,
        )
    }

    pub fn render(&self, aggregate: &Aggregate) -> StatsResult<Vec<String>> {
        format::render(aggregate, &self.table, &self.config.display)
    }

    /// A titled section; `breakdown` toggles the per-rating lines.
    pub fn render_section(
        &self,
        title: &str,
        aggregate: &Aggregate,
        breakdown: bool,
    ) -> StatsResult<Vec<String>> {
        let mut options = self.config.display.clone();
        options.per_rating_breakdown &= breakdown;
        format::render_section(title, aggregate, &self.table, &options)
    }

    pub fn tier_point_summary(&self, aggregates: &[&Aggregate]) -> TierPointSummary {
        TierPointSummary::from_aggregates(aggregates, &self.config.scoring)
    }

    pub fn render_tier_point_summary(&self, aggregates: &[&Aggregate]) -> StatsResult<Vec<String>> {
        let summary = self.tier_point_summary(aggregates);
        format::render_tier_point_summary(&summary, self.config.display.markup)
    }
}
