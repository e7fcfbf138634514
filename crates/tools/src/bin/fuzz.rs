use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use crawl_core::{
    ChestDecision, Direction, GameConfig, GamePhase, GameSession, InputCommand, InputJournal,
};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Random walker that checks session invariants
#[derive(Parser)]
#[command(author, version, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 5000)]
    inputs: u32,
    /// Where to write the journal of a failing walk
    #[arg(long, default_value = "fuzz_failure.json")]
    dump: PathBuf,
}

fn choose<T: Copy>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    slice[rng.next_u64() as usize % slice.len()]
}

fn next_command(session: &GameSession, rng: &mut ChaCha8Rng) -> InputCommand {
    if let Some(offer) = session.pending_chest() {
        let decision =
            choose(rng, &[ChestDecision::Accept, ChestDecision::Accept, ChestDecision::Decline]);
        return InputCommand::ChestDecision { prompt_id: offer.prompt_id, decision };
    }
    if !session.input_enabled() {
        return InputCommand::Restart;
    }
    match rng.next_u64() % 20 {
        0 => InputCommand::SwitchView,
        1 => {
            let held = occupied_slots(session);
            if held.is_empty() {
                InputCommand::Move(choose(rng, &Direction::ALL))
            } else {
                InputCommand::InspectSlot(choose(rng, &held))
            }
        }
        _ => InputCommand::Move(choose(rng, &Direction::ALL)),
    }
}

/// Inspecting an empty slot is a refusal, not a broken rule, so the walker only inspects held
/// relics.
fn occupied_slots(session: &GameSession) -> Vec<usize> {
    session
        .inventory()
        .slots()
        .iter()
        .filter(|slot| slot.is_occupied())
        .map(|slot| slot.index)
        .collect()
}

fn check_invariants(session: &GameSession) -> Result<()> {
    let player = session.player();
    let grid = session.grid();

    if player.stats.hp < 0 || player.stats.hp > player.stats.max_hp {
        bail!("hp {} outside 0..={}", player.stats.hp, player.stats.max_hp);
    }
    if session.phase() == GamePhase::Playing && player.is_dead() {
        bail!("dead player is still playing");
    }
    if !grid.kind_at(player.pos).is_reachable() {
        bail!("player stands on {:?} at {:?}", grid.kind_at(player.pos), player.pos);
    }
    if grid.tile(player.pos).is_some_and(|tile| tile.occupant.is_some()) {
        bail!("player shares {:?} with an occupant", player.pos);
    }
    for (kind, limit) in session.config().object_counts.ordered() {
        if grid.count_occupants(kind) > limit {
            bail!("more than {limit} {kind:?} on the floor");
        }
    }
    let inventory = session.inventory();
    let names: BTreeSet<&str> = inventory.relics().map(|relic| relic.name).collect();
    if names.len() != inventory.held_count() {
        bail!("inventory holds a duplicate relic");
    }
    Ok(())
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
    let args = Args::parse();

    info!(seed = args.seed, inputs = args.inputs, "starting fuzz walk");
    let config = GameConfig::default();
    let mut session = GameSession::new(args.seed, config.clone())?;
    let mut journal = InputJournal::new(args.seed, config);
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    journal.append(InputCommand::StartGame);
    session.handle_input(InputCommand::StartGame)?;

    let mut runs = 1u32;
    for _ in 0..args.inputs {
        let command = next_command(&session, &mut rng);
        if command == InputCommand::Restart {
            runs += 1;
        }
        journal.append(command.clone());

        let checked = session
            .handle_input(command)
            .map_err(Into::into)
            .and_then(|_| check_invariants(&session));
        if let Err(err) = checked {
            fs::write(&args.dump, journal.to_json_pretty()?)
                .with_context(|| format!("Failed to write {}", args.dump.display()))?;
            warn!(path = %args.dump.display(), "journal of failing walk written");
            let seq = journal.inputs.len() - 1;
            return Err(err.context(format!("invariant broken after input {seq}")));
        }
    }

    println!(
        "Fuzzing completed: {} inputs, {} runs, floor {}, phase {:?}",
        args.inputs,
        runs,
        session.progression().floor,
        session.phase()
    );
    Ok(())
}
