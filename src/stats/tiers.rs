use crate::config::ScoringConstants;
use crate::error::StatsError;
use crate::stats::evaluator::is_passed;
use crate::stats::level::LevelResult;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::ops::AddAssign;
use tracing::warn;

/// A tier requirement: reach a score, or simply pass the level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawThreshold", into = "RawThreshold")]
pub enum Threshold {
    Score(u64),
    Passed,
}

impl Threshold {
    pub fn is_met_by(&self, result: &LevelResult) -> bool {
        match *self {
            Threshold::Score(cutoff) => result.raw_score() >= cutoff,
            Threshold::Passed => is_passed(result),
        }
    }
}

// Scraped tier data stores cutoffs as strings ("450,000", "Passed").
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RawThreshold {
    Number(u64),
    Text(String),
}

impl TryFrom<RawThreshold> for Threshold {
    type Error = StatsError;

    fn try_from(raw: RawThreshold) -> Result<Self, Self::Error> {
        match raw {
            RawThreshold::Number(n) => Ok(Threshold::Score(n)),
            RawThreshold::Text(s) => s.parse(),
        }
    }
}

impl From<Threshold> for RawThreshold {
    fn from(t: Threshold) -> Self {
        match t {
            Threshold::Score(n) => RawThreshold::Number(n),
            Threshold::Passed => RawThreshold::Text("Passed".to_string()),
        }
    }
}

impl std::str::FromStr for Threshold {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("passed") {
            return Ok(Threshold::Passed);
        }
        let digits: String = s.chars().filter(|c| *c != ',').collect();
        digits
            .parse()
            .map(Threshold::Score)
            .map_err(|_| StatsError::InvalidThreshold(s.to_string()))
    }
}

/// A level's tier requirements, hardest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TierThresholds(Vec<Threshold>);

impl TierThresholds {
    pub fn new(thresholds: Vec<Threshold>) -> Self {
        Self(thresholds)
    }

    pub fn as_slice(&self) -> &[Threshold] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Non-empty, score cutoffs strictly decreasing, `Passed` only last.
    pub fn is_well_formed(&self) -> bool {
        if self.0.is_empty() {
            return false;
        }
        let mut last_cutoff: Option<u64> = None;
        for (i, t) in self.0.iter().enumerate() {
            match *t {
                Threshold::Passed => {
                    if i != self.0.len() - 1 {
                        return false;
                    }
                }
                Threshold::Score(cutoff) => {
                    if last_cutoff.is_some_and(|prev| cutoff >= prev) {
                        return false;
                    }
                    last_cutoff = Some(cutoff);
                }
            }
        }
        true
    }
}

impl From<Vec<Threshold>> for TierThresholds {
    fn from(v: Vec<Threshold>) -> Self {
        Self(v)
    }
}

/// Level name to tier requirements. Levels without tiers yield `None`.
pub trait TierLookup {
    fn thresholds(&self, level: &str) -> Option<&TierThresholds>;
}

impl TierLookup for HashMap<String, TierThresholds> {
    fn thresholds(&self, level: &str) -> Option<&TierThresholds> {
        self.get(level)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TierPoints {
    pub earned: u32,
    pub possible: u32,
}

impl TierPoints {
    pub fn is_complete(&self) -> bool {
        self.earned == self.possible
    }
}

impl AddAssign for TierPoints {
    fn add_assign(&mut self, rhs: Self) {
        self.earned += rhs.earned;
        self.possible += rhs.possible;
    }
}

/// Tier points for one level.
///
/// Scans hardest first; every requirement passed over before the first one
/// met costs a point. Nothing met earns nothing. Malformed lists count as
/// `(0, 0)`.
pub fn tier_points(result: &LevelResult, thresholds: &TierThresholds) -> TierPoints {
    if thresholds.is_empty() {
        return TierPoints::default();
    }
    if !thresholds.is_well_formed() {
        warn!(
            "Ignoring malformed tier list for '{}': {:?}",
            result.level_name(),
            thresholds.as_slice()
        );
        return TierPoints::default();
    }

    let possible = thresholds.len() as u32;
    let earned = thresholds
        .as_slice()
        .iter()
        .position(|t| t.is_met_by(result))
        .map_or(0, |missed| possible - missed as u32);

    TierPoints { earned, possible }
}

/// Report-wide bonus for the share of levels that are full clears.
pub fn tier_bonus(full_clears: u32, levels: u32, constants: &ScoringConstants) -> TierPoints {
    let earned = if levels == 0 {
        0
    } else {
        let percent = (100 * full_clears as u64 / levels as u64) as u32;
        percent
            .saturating_sub(constants.tier_bonus_offset)
            .min(constants.tier_bonus_max)
    };
    TierPoints {
        earned,
        possible: constants.tier_bonus_max,
    }
}
