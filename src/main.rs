//! party-shuffle CLI
//!
//! Reads a JSON roster (`[{"name": "...", "rank": "S"}, ...]`), generates
//! the requested rounds and prints each round report plus a fairness
//! summary.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use party_shuffle::roster::{validate_roster, RosterEntry};
use party_shuffle::{generate_all_rounds, Options, Summary};

#[derive(Parser)]
#[command(name = "party-shuffle")]
#[command(about = "Balanced party assignment across rounds")]
struct Cli {
    /// JSON roster file
    #[arg(long)]
    roster: PathBuf,
    #[arg(long, default_value = "1")]
    rounds: usize,
    /// TOML file with generation options
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    candidates: Option<usize>,
    #[arg(long)]
    iterations: Option<usize>,
    /// Print rounds and summary as JSON instead of report text
    #[arg(long)]
    json: bool,
}

fn load_options(cli: &Cli) -> Result<Options> {
    let mut options = match &cli.config {
        Some(path) => {
            let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
            toml::from_str::<Options>(&text).with_context(|| format!("parsing {}", path.display()))?
        }
        None => Options::default(),
    };
    if let Some(seed) = cli.seed {
        options = options.with_seed(seed);
    }
    if let Some(candidates) = cli.candidates {
        options = options.with_candidates(candidates);
    }
    if let Some(iterations) = cli.iterations {
        options = options.with_iterations(iterations);
    }
    Ok(options)
}

fn print_summary(summary: &Summary) {
    println!("Summary:");
    println!("- Pair repeats: {} (max {})", summary.pair_duplicate_total, summary.max_pair_count);
    println!("- Repeated parties: {}", summary.duplicate_teams);
    for entry in &summary.leader_counts {
        println!("- {} led {} time(s)", entry.name, entry.count);
    }
    if summary.leader_warning {
        println!(
            "Warning: leader counts range from {} to {}",
            summary.min_leader_count, summary.max_leader_count
        );
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let options = load_options(&cli)?;

    let text = fs::read_to_string(&cli.roster).with_context(|| format!("reading {}", cli.roster.display()))?;
    let entries: Vec<RosterEntry> =
        serde_json::from_str(&text).with_context(|| format!("parsing {}", cli.roster.display()))?;
    let players = validate_roster(&entries)?;

    let (rounds, summary) = generate_all_rounds(&players, cli.rounds, &options);

    if cli.json {
        let output = serde_json::json!({ "rounds": rounds, "summary": summary });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        for round in &rounds {
            println!("{}\n", round.report);
        }
        print_summary(&summary);
    }
    Ok(())
}
