use crate::error::{StatsError, StatsResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{info, warn};
use typed_builder::TypedBuilder;

/// One row of level rank data as it comes off the site, still untyped.
///
/// Field names follow the site's table headers (`d` is the difficulty
/// rating, `p/g/a/m/b` the judgments, `c` the max combo).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawLevelRecord {
    pub rank: Option<String>,
    #[serde(rename = "d")]
    pub rating: Option<String>,
    pub level: Option<String>,
    pub score: Option<String>,
    #[serde(rename = "p")]
    pub perfect: Option<String>,
    #[serde(rename = "g")]
    pub good: Option<String>,
    #[serde(rename = "a")]
    pub average: Option<String>,
    #[serde(rename = "m")]
    pub miss: Option<String>,
    #[serde(rename = "b")]
    pub boo: Option<String>,
    #[serde(rename = "c")]
    pub combo: Option<String>,
    pub played: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Judgements {
    pub perfect: u32,
    pub good: u32,
    pub average: u32,
    pub miss: u32,
    pub boo: u32,
}

impl Judgements {
    /// Notes that received a judgment. Boos are extra presses, not notes.
    pub fn judged(&self) -> u64 {
        self.perfect as u64 + self.good as u64 + self.average as u64 + self.miss as u64
    }
}

/// A validated play of one level. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LevelResult {
    rating: u32,
    level_name: String,
    judgements: Judgements,
    max_combo: u32,
    rank: u32,
    played_total: u32,
    raw_score: u64,
    full_combo: bool,
    note_total: u32,
}

impl LevelResult {
    pub fn rating(&self) -> u32 {
        self.rating
    }

    pub fn level_name(&self) -> &str {
        &self.level_name
    }

    pub fn judgements(&self) -> &Judgements {
        &self.judgements
    }

    pub fn max_combo(&self) -> u32 {
        self.max_combo
    }

    pub fn rank(&self) -> u32 {
        self.rank
    }

    pub fn played_total(&self) -> u32 {
        self.played_total
    }

    pub fn raw_score(&self) -> u64 {
        self.raw_score
    }

    pub fn full_combo(&self) -> bool {
        self.full_combo
    }

    pub fn note_total(&self) -> u32 {
        self.note_total
    }

    /// Parses and validates a raw row. The note total comes from `notes`.
    pub fn from_raw<N: NoteCountLookup + ?Sized>(
        raw: &RawLevelRecord,
        notes: &N,
    ) -> StatsResult<Self> {
        let level_name = match raw.level.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => {
                return Err(StatsError::MalformedRecord {
                    level: "<unnamed>".to_string(),
                    reason: "missing level name".to_string(),
                })
            }
        };

        let field = |value: &Option<String>, name: &str| parse_counter(value, name, &level_name);
        let rank = field(&raw.rank, "rank")?;
        let rating = field(&raw.rating, "d")?;
        let perfect = field(&raw.perfect, "p")?;
        let good = field(&raw.good, "g")?;
        let average = field(&raw.average, "a")?;
        let miss = field(&raw.miss, "m")?;
        let boo = field(&raw.boo, "b")?;
        let max_combo = field(&raw.combo, "c")?;
        let played_total = field(&raw.played, "played")?;
        let (raw_score, full_combo) = parse_score(&raw.score, &level_name)?;

        let note_total = notes
            .note_count(&level_name)
            .ok_or_else(|| StatsError::MissingNoteCount(level_name.clone()))?;

        LevelResultParams::builder()
            .level_name(level_name)
            .rating(rating)
            .perfect(perfect)
            .good(good)
            .average(average)
            .miss(miss)
            .boo(boo)
            .max_combo(max_combo)
            .rank(rank)
            .played_total(played_total)
            .raw_score(raw_score)
            .full_combo(full_combo)
            .note_total(note_total)
            .build()
            .validate()
    }
}

/// Typed inputs for a [`LevelResult`]; `validate` enforces the invariants.
#[derive(TypedBuilder, Debug, Clone)]
pub struct LevelResultParams {
    #[builder(setter(into))]
    pub level_name: String,
    pub rating: u32,
    #[builder(default)]
    pub perfect: u32,
    #[builder(default)]
    pub good: u32,
    #[builder(default)]
    pub average: u32,
    #[builder(default)]
    pub miss: u32,
    #[builder(default)]
    pub boo: u32,
    #[builder(default)]
    pub max_combo: u32,
    #[builder(default = 1)]
    pub rank: u32,
    #[builder(default)]
    pub played_total: u32,
    #[builder(default)]
    pub raw_score: u64,
    #[builder(default = false)]
    pub full_combo: bool,
    pub note_total: u32,
}

impl LevelResultParams {
    pub fn validate(self) -> StatsResult<LevelResult> {
        if self.level_name.trim().is_empty() {
            return Err(StatsError::MalformedRecord {
                level: "<unnamed>".to_string(),
                reason: "missing level name".to_string(),
            });
        }

        let judgements = Judgements {
            perfect: self.perfect,
            good: self.good,
            average: self.average,
            miss: self.miss,
            boo: self.boo,
        };

        if judgements.judged() > self.note_total as u64 {
            return Err(StatsError::MalformedRecord {
                reason: format!(
                    "{} judged notes exceed the level's {} notes",
                    judgements.judged(),
                    self.note_total
                ),
                level: self.level_name,
            });
        }

        Ok(LevelResult {
            rating: self.rating,
            level_name: self.level_name,
            judgements,
            max_combo: self.max_combo,
            rank: self.rank,
            played_total: self.played_total,
            raw_score: self.raw_score,
            full_combo: self.full_combo,
            note_total: self.note_total,
        })
    }
}

/// Level name to total note count.
pub trait NoteCountLookup {
    fn note_count(&self, level: &str) -> Option<u32>;
}

impl NoteCountLookup for HashMap<String, u32> {
    fn note_count(&self, level: &str) -> Option<u32> {
        self.get(level).copied()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    pub index: usize,
    pub level: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default)]
pub struct Ingestion {
    pub results: Vec<LevelResult>,
    pub skipped: Vec<SkippedRecord>,
}

/// Builds results from raw rows.
///
/// Malformed rows are skipped and reported in `skipped`. A level without a
/// note count aborts the whole ingestion.
pub fn ingest<N: NoteCountLookup + ?Sized>(
    records: &[RawLevelRecord],
    notes: &N,
) -> StatsResult<Ingestion> {
    let mut ingestion = Ingestion::default();

    for (index, raw) in records.iter().enumerate() {
        match LevelResult::from_raw(raw, notes) {
            Ok(result) => ingestion.results.push(result),
            Err(StatsError::MalformedRecord { level, reason }) => {
                warn!("Skipping record {} ('{}'): {}", index, level, reason);
                ingestion.skipped.push(SkippedRecord {
                    index,
                    level,
                    reason,
                });
            }
            Err(e) => return Err(e),
        }
    }

    info!(
        "Ingested {} level results ({} skipped)",
        ingestion.results.len(),
        ingestion.skipped.len()
    );
    Ok(ingestion)
}

fn strip_number(s: &str) -> String {
    s.chars().filter(|c| *c != ',' && !c.is_whitespace()).collect()
}

fn parse_counter(value: &Option<String>, field: &str, level: &str) -> StatsResult<u32> {
    let malformed = |reason: String| StatsError::MalformedRecord {
        level: level.to_string(),
        reason,
    };

    let cleaned = match value.as_deref().map(strip_number) {
        Some(s) if !s.is_empty() => s,
        _ => return Err(malformed(format!("missing '{}'", field))),
    };

    let n: i64 = cleaned
        .parse()
        .map_err(|_| malformed(format!("'{}' is not a number: {}", field, cleaned)))?;
    if n < 0 {
        return Err(malformed(format!("'{}' is negative: {}", field, n)));
    }
    u32::try_from(n).map_err(|_| malformed(format!("'{}' is out of range: {}", field, n)))
}

/// Score cell, e.g. `1,234,567*`. The asterisk marks a full combo.
fn parse_score(value: &Option<String>, level: &str) -> StatsResult<(u64, bool)> {
    let malformed = |reason: String| StatsError::MalformedRecord {
        level: level.to_string(),
        reason,
    };

    let text = match value.as_deref().map(str::trim) {
        Some(s) if !s.is_empty() => s,
        _ => return Err(malformed("missing 'score'".to_string())),
    };

    let full_combo = text.contains('*');
    let cleaned: String = strip_number(text).replace('*', "");
    let score: i64 = cleaned
        .parse()
        .map_err(|_| malformed(format!("'score' is not a number: {}", text)))?;
    if score < 0 {
        return Err(malformed(format!("'score' is negative: {}", score)));
    }
    Ok((score as u64, full_combo))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_strips_thousands_separators() {
        let v = Some(" 1,234 ".to_string());
        assert_eq!(parse_counter(&v, "p", "x").unwrap(), 1234);
    }

    #[test]
    fn score_marker_sets_full_combo() {
        let (score, fc) = parse_score(&Some("1,000,000*".to_string()), "x").unwrap();
        assert_eq!(score, 1_000_000);
        assert!(fc);

        let (_, fc) = parse_score(&Some("999".to_string()), "x").unwrap();
        assert!(!fc);
    }

    #[test]
    fn negative_counter_is_malformed() {
        let err = parse_counter(&Some("-3".to_string()), "m", "x").unwrap_err();
        assert!(matches!(err, StatsError::MalformedRecord { .. }));
    }
}
