use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{Rng, SeedableRng};

use super::*;
use crate::config::GameConfig;
use crate::types::{ChestDecision, Direction, InputCommand, InputOutcome, MoveOutcome};

/// Drives a live session with seeded random commands while journaling each one.
fn record_walk(seed: u64, steps: usize) -> (GameSession, InputJournal) {
    let mut session = GameSession::new(seed, GameConfig::default()).expect("default catalog");
    let mut journal = InputJournal::new(seed, GameConfig::default());
    let mut driver = ChaCha8Rng::seed_from_u64(seed ^ 0xD1CE);

    issue(&mut session, &mut journal, InputCommand::StartGame);
    for _ in 0..steps {
        if let Some(offer) = session.pending_chest() {
            let decision = if driver.next_u64() % 2 == 0 {
                ChestDecision::Accept
            } else {
                ChestDecision::Decline
            };
            let command = InputCommand::ChestDecision { prompt_id: offer.prompt_id, decision };
            issue(&mut session, &mut journal, command);
            continue;
        }
        if !session.input_enabled() {
            issue(&mut session, &mut journal, InputCommand::Restart);
            continue;
        }
        let direction = Direction::ALL[(driver.next_u64() % 4) as usize];
        issue(&mut session, &mut journal, InputCommand::Move(direction));
    }
    (session, journal)
}

fn issue(session: &mut GameSession, journal: &mut InputJournal, command: InputCommand) {
    journal.append(command.clone());
    session.handle_input(command).expect("walker only issues valid commands");
}

#[test]
fn replay_reproduces_the_recorded_session() {
    let (session, journal) = record_walk(777, 400);
    let replayed = replay_to_end(&journal).expect("journal replays cleanly");

    assert_eq!(replayed.final_snapshot_hash, session.snapshot_hash());
    assert_eq!(replayed.final_phase, session.phase());
    assert_eq!(replayed.final_floor, session.progression().floor);
    assert_eq!(replayed.applied_inputs, journal.inputs.len());
}

#[test]
fn replay_survives_a_json_round_trip() {
    let (session, journal) = record_walk(31, 150);
    let json = journal.to_json_pretty().expect("serialize");
    let decoded = InputJournal::from_json_str(&json).expect("deserialize");

    let replayed = replay_to_end(&decoded).expect("journal replays cleanly");
    assert_eq!(replayed.final_snapshot_hash, session.snapshot_hash());
}

#[test]
fn rejected_command_reports_its_sequence_number() {
    let mut journal = InputJournal::new(1, GameConfig::default());
    journal.append(InputCommand::StartGame);
    journal.append(InputCommand::Move(Direction::Up));
    journal.append(InputCommand::StartGame);

    assert_eq!(
        replay_to_end(&journal),
        Err(ReplayError::Rejected { seq: 2, error: GameError::InvalidPhase(GamePhase::Playing) })
    );
}

#[test]
fn mismatched_grid_size_fails_setup() {
    let config = GameConfig { grid_size: 9, ..GameConfig::default() };
    let journal = InputJournal::new(1, config);
    assert!(matches!(replay_to_end(&journal), Err(ReplayError::Setup(GameError::Catalog(_)))));
}

#[test]
fn moves_in_main_menu_are_suppressed_not_rejected() {
    let mut session = GameSession::new(2, GameConfig::default()).expect("default catalog");
    assert_eq!(
        session.handle_input(InputCommand::Move(Direction::Down)),
        Ok(InputOutcome::Move(MoveOutcome::Suppressed))
    );
}

#[test]
fn invalid_journal_config_fails_setup() {
    let config = GameConfig { ambush_tie_percent: 500, ..GameConfig::default() };
    let mut journal = InputJournal::new(1, config);
    journal.append(InputCommand::StartGame);
    assert!(matches!(replay_to_end(&journal), Err(ReplayError::Setup(GameError::Config(_)))));
}
