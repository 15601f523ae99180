use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use ffrstats::config::Config;
use ffrstats::difficulty::DifficultyTable;
use ffrstats::error::StatsResult;
use ffrstats::stats::loader::{load_note_counts_from_path, load_tier_lists_from_path};
use ffrstats::stats::StatsEngine;
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, short, long, default_value = "data/levelarrows.json")]
    notes: String,

    #[arg(global = true, short, long, default_value = "data/leveltiers.json")]
    tiers: String,

    #[arg(global = true, long)]
    difficulties: Option<String>,

    #[arg(global = true, long)]
    config: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Report(cmd::report::ReportArgs),
    Pending(cmd::pending::PendingArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .init();

    if let Err(e) = run(&cli, &matches) {
        error!("❌ {}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli, matches: &clap::ArgMatches) -> StatsResult<()> {
    let table = match &cli.difficulties {
        Some(path) => {
            info!("📂 Loading Difficulty Table: {}", path);
            DifficultyTable::load_from_file(path)?
        }
        None => DifficultyTable::standard(),
    };

    info!("📂 Loading Note Counts: {}", cli.notes);
    let notes = load_note_counts_from_path(&cli.notes)?;

    match &cli.command {
        Commands::Report(args) => {
            info!("📂 Loading Tier Lists: {}", cli.tiers);
            let tiers = load_tier_lists_from_path(&cli.tiers)?;
            let config = resolve_config(cli, &args.config, matches.subcommand_matches("report"))?;
            let engine = StatsEngine::new(table, config);
            cmd::report::run(args, &engine, &notes, &tiers)
        }
        Commands::Pending(args) => {
            let engine = StatsEngine::new(table, Config::default());
            cmd::pending::run(args, &engine, &notes)
        }
    }
}

/// CLI flags win over the config file, which wins over the defaults.
fn resolve_config(
    cli: &Cli,
    cli_config: &Config,
    sub_matches: Option<&clap::ArgMatches>,
) -> StatsResult<Config> {
    let Some(path) = &cli.config else {
        cli_config.validate()?;
        return Ok(cli_config.clone());
    };

    info!("⚖️  Loading Config from: {}", path);
    let mut config = Config::load_from_file(path)?;
    if let Some(m) = sub_matches {
        config.merge_from_cli(cli_config, m);
    }
    config.validate()?;
    Ok(config)
}
