use crate::reports;
use clap::Args;
use ffrstats::error::StatsResult;
use ffrstats::stats::loader::load_level_records_from_path;
use ffrstats::stats::pending::pending_levels;
use ffrstats::stats::StatsEngine;
use std::collections::HashMap;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct PendingArgs {
    /// Level rank table (CSV)
    #[arg(short, long)]
    pub ranks: PathBuf,
}

pub fn run(args: &PendingArgs, engine: &StatsEngine, notes: &HashMap<String, u32>) -> StatsResult<()> {
    let records = load_level_records_from_path(&args.ranks)?;
    let ingestion = engine.ingest(&records, notes)?;
    reports::print_skipped("Level Ranks", &ingestion.skipped);

    let pending = pending_levels(&ingestion.results);
    reports::print_pending_table(&pending);
    Ok(())
}
