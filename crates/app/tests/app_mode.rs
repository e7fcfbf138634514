use app::app_loop::AppState;
use crawl_core::{
    ChestResolution, Direction, GameConfig, GamePhase, GameSession, InputCommand, InputJournal,
    InputOutcome, ViewMode, replay_to_end,
};
use macroquad::prelude::KeyCode;

fn new_session() -> GameSession {
    GameSession::new(12345, GameConfig::default()).expect("default catalog")
}

#[test]
fn enter_starts_the_run_and_is_recorded() {
    let mut session = new_session();
    let mut app = AppState::new();

    app.tick(&mut session, &[KeyCode::Enter]);
    assert_eq!(session.phase(), GamePhase::Playing);
    assert_eq!(app.accepted_inputs, vec![InputCommand::StartGame]);
    assert_eq!(app.last_outcome, Some(InputOutcome::Started));

    app.tick(&mut session, &[]);
    assert!(app.accepted_inputs.is_empty(), "inputs are cleared every frame");
}

#[test]
fn tab_toggles_the_inventory_view() {
    let mut session = new_session();
    let mut app = AppState::new();
    app.tick(&mut session, &[KeyCode::Enter]);

    app.tick(&mut session, &[KeyCode::Tab]);
    assert_eq!(session.view_mode(), ViewMode::Inventory);
    app.tick(&mut session, &[KeyCode::I]);
    assert_eq!(session.view_mode(), ViewMode::Map);
}

#[test]
fn chest_prompt_blocks_moves_until_answered() {
    let mut session = new_session();
    let mut app = AppState::new();
    app.tick(&mut session, &[KeyCode::Enter]);

    let moves = [KeyCode::Up, KeyCode::Right, KeyCode::Down, KeyCode::Left];
    let mut walk = 0x2545_F491_4F6C_DD1D_u64;
    for _ in 0..4000 {
        if session.phase() != GamePhase::Playing {
            app.tick(&mut session, &[KeyCode::Enter]);
            continue;
        }
        if session.pending_chest().is_some() {
            let position = session.player().pos;
            app.tick(&mut session, &[KeyCode::Left]);
            assert!(app.accepted_inputs.is_empty(), "moves are not mapped during a prompt");
            assert_eq!(session.player().pos, position);

            app.tick(&mut session, &[KeyCode::Y]);
            assert!(matches!(
                app.last_outcome,
                Some(InputOutcome::Chest(
                    ChestResolution::Accepted { .. } | ChestResolution::Rejected(_)
                ))
            ));
            assert!(session.pending_chest().is_none());
            return;
        }
        walk ^= walk << 13;
        walk ^= walk >> 7;
        walk ^= walk << 17;
        app.tick(&mut session, &[moves[(walk % 4) as usize]]);
    }
    panic!("walk never reached a relic chest");
}

#[test]
fn accepted_inputs_replay_to_the_same_state() {
    let mut session = new_session();
    let mut app = AppState::new();
    let mut journal = InputJournal::new(session.seed(), session.config().clone());

    let script = [KeyCode::Enter, KeyCode::Right, KeyCode::Down, KeyCode::Key1, KeyCode::Tab];
    for step in 0..300 {
        let key = if session.pending_chest().is_some() {
            KeyCode::N
        } else if session.phase() != GamePhase::Playing {
            KeyCode::Enter
        } else {
            script[step % script.len()]
        };
        app.tick(&mut session, &[key]);
        for command in app.accepted_inputs.drain(..) {
            journal.append(command);
        }
    }

    let replayed = replay_to_end(&journal).expect("journal of accepted inputs replays");
    assert_eq!(replayed.final_snapshot_hash, session.snapshot_hash());
}

#[test]
fn no_key_ever_skips_a_floor() {
    let mut session = new_session();
    let mut app = AppState::new();
    app.tick(&mut session, &[KeyCode::Enter]);

    for key in [KeyCode::U, KeyCode::PageUp, KeyCode::PageDown, KeyCode::Space, KeyCode::E] {
        app.tick(&mut session, &[key]);
        assert_eq!(session.progression().floor, 1, "floor should not change on key {key:?}");
    }
    assert!(
        session.handle_input(InputCommand::Move(Direction::Up)).is_ok(),
        "session still accepts moves afterwards"
    );
}
