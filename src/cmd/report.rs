use crate::reports;
use clap::Args;
use ffrstats::config::Config;
use ffrstats::error::StatsResult;
use ffrstats::stats::loader::load_level_records_from_path;
use ffrstats::stats::{Aggregate, StatsEngine, TierThresholds};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct ReportArgs {
    #[command(flatten)]
    pub config: Config,

    /// Level rank table (CSV)
    #[arg(short, long)]
    pub ranks: PathBuf,

    /// Token level rank table (CSV)
    #[arg(long)]
    pub token_ranks: Option<PathBuf>,

    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(
    args: &ReportArgs,
    engine: &StatsEngine,
    notes: &HashMap<String, u32>,
    tiers: &HashMap<String, TierThresholds>,
) -> StatsResult<()> {
    let sections = [
        ("Public Level Stats", Some(&args.ranks), true),
        ("Token Level Stats", args.token_ranks.as_ref(), false),
    ];

    let mut lines = Vec::new();
    let mut aggregates: Vec<Aggregate> = Vec::new();

    for (title, path, breakdown) in sections {
        let Some(path) = path else { continue };

        info!("📂 Loading {}: {}", title, path.display());
        let records = load_level_records_from_path(path)?;
        let ingestion = engine.ingest(&records, notes)?;
        reports::print_skipped(title, &ingestion.skipped);

        let aggregate = engine.aggregate(&ingestion.results, tiers)?;
        lines.extend(engine.render_section(title, &aggregate, breakdown)?);
        aggregates.push(aggregate);
    }

    let refs: Vec<&Aggregate> = aggregates.iter().collect();
    lines.extend(engine.render_tier_point_summary(&refs)?);

    let body = lines.join("\n") + "\n";
    match &args.output {
        Some(path) => {
            fs::write(path, body)?;
            info!("📝 Stats written to {}", path.display());
        }
        None => print!("{}", body),
    }
    Ok(())
}
