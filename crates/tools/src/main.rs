use std::fs;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use crawl_core::{GameConfig, InputJournal, ReplayResult, replay_to_end};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Replay a recorded input journal", long_about = None)]
struct Args {
    /// Path to the journal JSON file to replay
    #[arg(short, long)]
    journal: PathBuf,

    /// Rules TOML that replaces the config stored in the journal
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Fail unless the final snapshot hash equals this value (hex, `0x` optional)
    #[arg(long)]
    expect_hash: Option<String>,

    /// Print the result as JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
    let args = Args::parse();

    let journal_data = fs::read_to_string(&args.journal)
        .with_context(|| format!("Failed to read journal file: {}", args.journal.display()))?;
    let mut journal = InputJournal::from_json_str(&journal_data)
        .with_context(|| "Failed to deserialize journal JSON")?;

    if let Some(path) = &args.config {
        journal.config = GameConfig::load(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?;
    }

    let result: ReplayResult =
        replay_to_end(&journal).with_context(|| "Replay failed during execution")?;

    if args.json {
        let summary = serde_json::json!({
            "seed": journal.seed,
            "applied_inputs": result.applied_inputs,
            "final_phase": format!("{:?}", result.final_phase),
            "final_floor": result.final_floor,
            "final_snapshot_hash": format!("0x{:016x}", result.final_snapshot_hash),
        });
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("Replay complete.");
        println!("Inputs: {}", result.applied_inputs);
        println!("Phase: {:?}", result.final_phase);
        println!("Floor: {}", result.final_floor);
        println!("Snapshot Hash: 0x{:016x}", result.final_snapshot_hash);
    }

    if let Some(expected) = &args.expect_hash {
        let digits = expected.trim_start_matches("0x");
        let expected_hash = u64::from_str_radix(digits, 16)
            .with_context(|| format!("Invalid --expect-hash value: {expected}"))?;
        if expected_hash != result.final_snapshot_hash {
            bail!(
                "snapshot hash mismatch: expected 0x{expected_hash:016x}, got 0x{:016x}",
                result.final_snapshot_hash
            );
        }
    }

    Ok(())
}
