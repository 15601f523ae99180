use ffrstats::error::StatsError;
use ffrstats::stats::loader::{
    load_level_records, load_level_records_from_path, load_note_counts, load_tier_lists,
    load_tier_lists_from_path,
};
use ffrstats::stats::{ingest, Threshold};
use std::collections::HashMap;
use std::io::{Cursor, Write};
use tempfile::NamedTempFile;

// --- LEVEL RANK CSV ---

#[test]
fn test_loader_parses_rank_table() {
    let csv = "\
Rank,D,Level,Score,P,G,A,M,B,C,Played
1,42,Daybreak,\"59,750*\",\"1,190\",10,0,0,0,\"1,200\",\"1,200\"
17,9,Flight,\"10,000\",200,0,0,5,1,180,205
";
    let records = load_level_records(Cursor::new(csv)).unwrap();
    assert_eq!(records.len(), 2);

    let first = &records[0];
    assert_eq!(first.level.as_deref(), Some("Daybreak"));
    assert_eq!(first.rating.as_deref(), Some("42"));
    assert_eq!(first.score.as_deref(), Some("59,750*"));
    assert_eq!(first.perfect.as_deref(), Some("1,190"));
    assert_eq!(records[1].boo.as_deref(), Some("1"));
}

#[test]
fn test_loader_headers_are_case_insensitive() {
    let csv = " RANK , d ,LEVEL,score,p,G,a,M,b,c,PLAYED\n1,3,Tiny,250*,5,0,0,0,0,5,5\n";
    let records = load_level_records(Cursor::new(csv)).unwrap();
    assert_eq!(records[0].level.as_deref(), Some("Tiny"));
    assert_eq!(records[0].rank.as_deref(), Some("1"));
    assert_eq!(records[0].played.as_deref(), Some("5"));
}

#[test]
fn test_loader_tolerates_missing_columns() {
    // No B column: the record loads, ingestion reports it.
    let csv = "Rank,D,Level,Score,P,G,A,M,C,Played\n1,3,Tiny,250*,5,0,0,0,5,5\n";
    let records = load_level_records(Cursor::new(csv)).unwrap();
    assert!(records[0].boo.is_none());

    let notes: HashMap<String, u32> = [("Tiny".to_string(), 5)].into_iter().collect();
    let ingestion = ingest(&records, &notes).unwrap();
    assert!(ingestion.results.is_empty());
    assert_eq!(ingestion.skipped.len(), 1);
    assert!(ingestion.skipped[0].reason.contains("'b'"));
}

#[test]
fn test_loader_reads_from_disk() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "Rank,D,Level,Score,P,G,A,M,B,C,Played").unwrap();
    writeln!(file, "2,15,Hilltop,900,18,0,0,0,0,18,18").unwrap();

    let records = load_level_records_from_path(file.path()).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].rank.as_deref(), Some("2"));
}

#[test]
fn test_loader_missing_file_is_io_error() {
    let err = load_level_records_from_path("does/not/exist.csv").unwrap_err();
    assert!(matches!(err, StatsError::Io(_)));
}

// --- JSON LOOKUPS ---

#[test]
fn test_note_counts_json() {
    let notes = load_note_counts(Cursor::new(r#"{"Daybreak": 1200, "Flight": 300}"#)).unwrap();
    assert_eq!(notes.len(), 2);
    assert_eq!(notes["Flight"], 300);
}

#[test]
fn test_note_counts_reject_negative() {
    let err = load_note_counts(Cursor::new(r#"{"Daybreak": -1}"#)).unwrap_err();
    assert!(matches!(err, StatsError::Json(_)));
}

#[test]
fn test_tier_lists_json() {
    let json = r#"{
        "Daybreak": ["59,000", "55000", "Passed"],
        "Flight": []
    }"#;
    let tiers = load_tier_lists(Cursor::new(json)).unwrap();
    assert_eq!(
        tiers["Daybreak"].as_slice(),
        &[Threshold::Score(59_000), Threshold::Score(55_000), Threshold::Passed]
    );
    assert!(tiers["Flight"].is_empty());
}

#[test]
fn test_tier_lists_reject_unknown_threshold() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{"Daybreak": ["AAA"]}}"#).unwrap();
    let err = load_tier_lists_from_path(file.path()).unwrap_err();
    assert!(matches!(err, StatsError::Json(_)));
}
