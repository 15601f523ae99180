use crate::error::{StatsError, StatsResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyTier {
    pub name: String,
    pub min_rating: u32,
}

impl DifficultyTier {
    pub fn new(name: impl Into<String>, min_rating: u32) -> Self {
        Self {
            name: name.into(),
            min_rating,
        }
    }
}

/// Named difficulty tiers, hardest first.
///
/// Minimums strictly decrease from index 0. The last tier is the catch-all:
/// any rating below its minimum still lands there, so every rating maps to
/// exactly one tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<DifficultyTier>", into = "Vec<DifficultyTier>")]
pub struct DifficultyTable {
    tiers: Vec<DifficultyTier>,
}

impl DifficultyTable {
    /// Builds a table from tiers in any order. Tiers are sorted hardest first.
    pub fn new(mut tiers: Vec<DifficultyTier>) -> StatsResult<Self> {
        if tiers.is_empty() {
            return Err(StatsError::InvalidDifficultyTable(
                "table has no tiers".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for tier in &tiers {
            if tier.name.trim().is_empty() {
                return Err(StatsError::InvalidDifficultyTable(format!(
                    "tier with minimum {} has no name",
                    tier.min_rating
                )));
            }
            if !seen.insert(tier.min_rating) {
                return Err(StatsError::InvalidDifficultyTable(format!(
                    "minimum rating {} is used by more than one tier",
                    tier.min_rating
                )));
            }
        }

        tiers.sort_by(|a, b| b.min_rating.cmp(&a.min_rating));
        Ok(Self { tiers })
    }

    /// The FFR site difficulty names.
    pub fn standard() -> Self {
        let tiers = [
            ("Brutal", 100),
            ("Guru", 85),
            ("Master", 70),
            ("Very Challenging", 60),
            ("Challenging", 50),
            ("Very Difficult", 42),
            ("Difficult", 34),
            ("Tricky", 26),
            ("Standard", 18),
            ("Easy", 11),
            ("Very Easy", 7),
            ("Beginner", 4),
            ("Easiest", 1),
            ("Zero", 0),
        ];
        Self {
            tiers: tiers
                .iter()
                .map(|&(name, min)| DifficultyTier::new(name, min))
                .collect(),
        }
    }

    pub fn from_reader<R: Read>(reader: R) -> StatsResult<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> StatsResult<Self> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// Index of the first tier (scanning hardest first) whose minimum is at
    /// most `rating`.
    pub fn classify(&self, rating: u32) -> usize {
        self.tiers
            .iter()
            .position(|t| t.min_rating <= rating)
            .unwrap_or(self.tiers.len() - 1)
    }

    pub fn tier(&self, index: usize) -> Option<&DifficultyTier> {
        self.tiers.get(index)
    }

    pub fn tiers(&self) -> &[DifficultyTier] {
        &self.tiers
    }

    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }

    /// True for the catch-all tier when it holds unrated (rating 0) levels.
    pub fn is_zero_tier(&self, index: usize) -> bool {
        index == self.tiers.len() - 1 && self.tiers[index].min_rating == 0
    }
}

impl Default for DifficultyTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl TryFrom<Vec<DifficultyTier>> for DifficultyTable {
    type Error = StatsError;

    fn try_from(tiers: Vec<DifficultyTier>) -> StatsResult<Self> {
        Self::new(tiers)
    }
}

impl From<DifficultyTable> for Vec<DifficultyTier> {
    fn from(table: DifficultyTable) -> Self {
        table.tiers
    }
}
