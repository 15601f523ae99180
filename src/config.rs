use crate::error::{StatsError, StatsResult};
use clap::{parser::ValueSource, ArgAction, ArgMatches, Args, ValueEnum};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use strum_macros::Display;

/// Keeps SDG bounds well inside `i64` for any note count.
pub const MAX_SCORING_CONSTANT: i64 = 1_000_000;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub scoring: ScoringConstants,
    #[command(flatten)]
    pub display: RenderOptions,
}

/// Fixed scoring values of the game plus the tier bonus curve.
#[derive(Args, Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ScoringConstants {
    #[arg(long, default_value_t = 50)]
    pub perfect_score: i64,
    #[arg(long, default_value_t = 25)]
    pub good_score: i64,

    // Judgments allowed to be "good" for a near-perfect (SDG) clear
    #[arg(long, default_value_t = 10)]
    pub near_perfect_allowance: i64,

    // === TIER BONUS ===
    #[arg(long, default_value_t = 49)]
    pub tier_bonus_offset: u32,
    #[arg(long, default_value_t = 50)]
    pub tier_bonus_max: u32,
}

impl Default for ScoringConstants {
    fn default() -> Self {
        Self {
            perfect_score: 50,
            good_score: 25,
            near_perfect_allowance: 10,
            tier_bonus_offset: 49,
            tier_bonus_max: 50,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Markup {
    Plain,
    Bbcode,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RenderOptions {
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub hide_fully_achieved: bool,
    #[arg(long, default_value_t = false, action = ArgAction::Set)]
    pub show_passed: bool,
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub per_rating_breakdown: bool,
    #[arg(long, default_value_t = 102)]
    pub max_rating_breakdown: u32,
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub hide_zero_difficulty: bool,
    #[arg(long, value_enum, default_value_t = Markup::Bbcode)]
    pub markup: Markup,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            hide_fully_achieved: true,
            show_passed: false,
            per_rating_breakdown: true,
            max_rating_breakdown: 102,
            hide_zero_difficulty: true,
            markup: Markup::Bbcode,
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> StatsResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            StatsError::Config(format!("Failed to read config '{}': {}", path.display(), e))
        })?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> StatsResult<()> {
        if self.scoring.perfect_score <= 0 {
            return Err(StatsError::Config(
                "perfect_score must be positive".to_string(),
            ));
        }
        if self.scoring.good_score > self.scoring.perfect_score {
            return Err(StatsError::Config(format!(
                "good_score ({}) exceeds perfect_score ({})",
                self.scoring.good_score, self.scoring.perfect_score
            )));
        }
        if self.scoring.near_perfect_allowance < 0 {
            return Err(StatsError::Config(
                "near_perfect_allowance cannot be negative".to_string(),
            ));
        }
        for (name, value) in [
            ("perfect_score", self.scoring.perfect_score),
            ("good_score", self.scoring.good_score),
            ("near_perfect_allowance", self.scoring.near_perfect_allowance),
        ] {
            if value.unsigned_abs() > MAX_SCORING_CONSTANT as u64 {
                return Err(StatsError::Config(format!(
                    "{} ({}) exceeds {}",
                    name, value, MAX_SCORING_CONSTANT
                )));
            }
        }
        Ok(())
    }

    /// Overlays only the flags the user typed on the command line.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($section:ident, $field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$section.$field = cli.$section.$field.clone();
                }
            };
        }

        update_if_present!(scoring, perfect_score);
        update_if_present!(scoring, good_score);
        update_if_present!(scoring, near_perfect_allowance);
        update_if_present!(scoring, tier_bonus_offset);
        update_if_present!(scoring, tier_bonus_max);

        update_if_present!(display, hide_fully_achieved);
        update_if_present!(display, show_passed);
        update_if_present!(display, per_rating_breakdown);
        update_if_present!(display, max_rating_breakdown);
        update_if_present!(display, hide_zero_difficulty);
        update_if_present!(display, markup);
    }
}
