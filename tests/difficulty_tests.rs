use ffrstats::difficulty::{DifficultyTable, DifficultyTier};
use ffrstats::error::StatsError;
use rstest::rstest;
use std::io::Cursor;

fn get_table() -> DifficultyTable {
    DifficultyTable::standard()
}

#[rstest]
#[case(120, "Brutal")]
#[case(100, "Brutal")]
#[case(99, "Guru")]
#[case(85, "Guru")]
#[case(61, "Very Challenging")]
#[case(18, "Standard")]
#[case(17, "Easy")]
#[case(11, "Easy")]
#[case(4, "Beginner")]
#[case(1, "Easiest")]
#[case(0, "Zero")]
fn test_standard_classification(#[case] rating: u32, #[case] expected: &str) {
    let table = get_table();
    let index = table.classify(rating);
    assert_eq!(
        table.tier(index).unwrap().name,
        expected,
        "rating {} classified into the wrong tier",
        rating
    );
}

#[test]
fn test_unordered_table_is_sorted_hardest_first() {
    let table = DifficultyTable::new(vec![
        DifficultyTier::new("Easy", 11),
        DifficultyTier::new("Standard", 18),
        DifficultyTier::new("Zero", 0),
    ])
    .unwrap();

    let mins: Vec<u32> = table.tiers().iter().map(|t| t.min_rating).collect();
    assert_eq!(mins, vec![18, 11, 0]);

    let index = table.classify(15);
    assert_eq!(index, 1);
    assert_eq!(table.tier(index).unwrap().name, "Easy");
    assert_eq!(table.classify(18), 0);
    assert_eq!(table.classify(3), 2);
}

#[test]
fn test_rating_below_lowest_minimum_falls_into_catch_all() {
    let table = DifficultyTable::new(vec![
        DifficultyTier::new("Hard", 50),
        DifficultyTier::new("Rest", 10),
    ])
    .unwrap();
    assert_eq!(table.classify(3), 1);
    assert!(!table.is_zero_tier(1));
}

#[test]
fn test_zero_tier_detection() {
    let table = get_table();
    assert!(table.is_zero_tier(table.len() - 1));
    assert!(!table.is_zero_tier(0));
}

#[test]
fn test_empty_table_rejected() {
    let err = DifficultyTable::new(vec![]).unwrap_err();
    assert!(matches!(err, StatsError::InvalidDifficultyTable(_)));
}

#[test]
fn test_duplicate_minimum_rejected() {
    let err = DifficultyTable::new(vec![
        DifficultyTier::new("A", 10),
        DifficultyTier::new("B", 10),
    ])
    .unwrap_err();
    assert!(matches!(err, StatsError::InvalidDifficultyTable(_)));
}

#[test]
fn test_table_from_json() {
    let json = r#"[{"name":"Zero","min_rating":0},{"name":"Hard","min_rating":40}]"#;
    let table = DifficultyTable::from_reader(Cursor::new(json)).unwrap();
    assert_eq!(table.tiers()[0].name, "Hard");
    assert_eq!(table.classify(39), 1);
}

#[test]
fn test_invalid_json_table_rejected() {
    let err = DifficultyTable::from_reader(Cursor::new("[]")).unwrap_err();
    assert!(matches!(err, StatsError::Json(_)));
}
