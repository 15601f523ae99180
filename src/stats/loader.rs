use crate::error::StatsResult;
use crate::stats::level::RawLevelRecord;
use crate::stats::tiers::TierThresholds;
use csv::StringRecord;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Reads the level rank table. Headers are matched case-insensitively.
pub fn load_level_records<R: Read>(reader: R) -> StatsResult<Vec<RawLevelRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers: StringRecord = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_ascii_lowercase())
        .collect();
    debug!("Level rank columns: {:?}", headers);
    rdr.set_headers(headers);

    let mut records = Vec::new();
    for row in rdr.deserialize() {
        let record: RawLevelRecord = row?;
        records.push(record);
    }
    info!("Loaded {} level rank rows", records.len());
    Ok(records)
}

pub fn load_level_records_from_path<P: AsRef<Path>>(path: P) -> StatsResult<Vec<RawLevelRecord>> {
    let file = File::open(path)?;
    load_level_records(file)
}

pub fn load_note_counts<R: Read>(reader: R) -> StatsResult<HashMap<String, u32>> {
    let counts: HashMap<String, u32> = serde_json::from_reader(reader)?;
    info!("Loaded note counts for {} levels", counts.len());
    Ok(counts)
}

pub fn load_note_counts_from_path<P: AsRef<Path>>(path: P) -> StatsResult<HashMap<String, u32>> {
    let file = File::open(path)?;
    load_note_counts(file)
}

pub fn load_tier_lists<R: Read>(reader: R) -> StatsResult<HashMap<String, TierThresholds>> {
    let tiers: HashMap<String, TierThresholds> = serde_json::from_reader(reader)?;
    info!("Loaded tier lists for {} levels", tiers.len());
    Ok(tiers)
}

pub fn load_tier_lists_from_path<P: AsRef<Path>>(
    path: P,
) -> StatsResult<HashMap<String, TierThresholds>> {
    let file = File::open(path)?;
    load_tier_lists(file)
}
