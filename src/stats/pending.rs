use crate::stats::evaluator::holds_top_rank;
use crate::stats::level::LevelResult;
use itertools::Itertools;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PendingLevel {
    pub rating: u32,
    pub rank: u32,
    pub name: String,
}

/// Levels where the player is not rank 1, easiest first and, within a
/// rating, worst rank first.
pub fn pending_levels(results: &[LevelResult]) -> Vec<PendingLevel> {
    results
        .iter()
        .filter(|r| !holds_top_rank(r))
        .map(|r| PendingLevel {
            rating: r.rating(),
            rank: r.rank(),
            name: r.level_name().to_string(),
        })
        .sorted_by(|a, b| a.rating.cmp(&b.rating).then(b.rank.cmp(&a.rank)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::level::LevelResultParams;

    fn ranked(name: &str, rating: u32, rank: u32) -> LevelResult {
        LevelResultParams::builder()
            .level_name(name)
            .rating(rating)
            .rank(rank)
            .note_total(10)
            .build()
            .validate()
            .unwrap()
    }

    #[test]
    fn test_pending_order() {
        let results = vec![
            ranked("held", 5, 1),
            ranked("hard", 80, 2),
            ranked("close", 12, 2),
            ranked("far", 12, 40),
        ];
        let names: Vec<String> = pending_levels(&results).into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["far", "close", "hard"]);
    }

    #[test]
    fn test_pending_empty_when_all_held() {
        assert!(pending_levels(&[ranked("a", 1, 1)]).is_empty());
    }
}
