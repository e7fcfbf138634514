use crawl_core::{
    ChestDecision, Direction, GameError, GamePhase, GameSession, InputCommand, InputOutcome,
};
use macroquad::prelude::KeyCode;
use tracing::debug;

const SLOT_KEYS: [KeyCode; 10] = [
    KeyCode::Key1,
    KeyCode::Key2,
    KeyCode::Key3,
    KeyCode::Key4,
    KeyCode::Key5,
    KeyCode::Key6,
    KeyCode::Key7,
    KeyCode::Key8,
    KeyCode::Key9,
    KeyCode::Key0,
];

#[derive(Default)]
pub struct AppState {
    /// Commands the session accepted during the current frame's `tick()` call.
    /// Drained by the caller after each tick to extend the run journal.
    pub accepted_inputs: Vec<InputCommand>,
    pub last_outcome: Option<InputOutcome>,
    /// The most recent refusal, shown in the status line until the next accepted command.
    pub last_error: Option<GameError>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Translates this frame's key presses into at most one command and applies it.
    pub fn tick(&mut self, session: &mut GameSession, keys_pressed: &[KeyCode]) {
        self.accepted_inputs.clear();
        let Some(command) = command_for_keys(session, keys_pressed) else {
            return;
        };

        match session.handle_input(command.clone()) {
            Ok(outcome) => {
                debug!(?command, ?outcome, "input accepted");
                self.accepted_inputs.push(command);
                self.last_outcome = Some(outcome);
                self.last_error = None;
            }
            Err(error) => {
                debug!(?command, %error, "input refused");
                self.last_error = Some(error);
            }
        }
    }
}

/// Key bindings depend on what the session is waiting for: Enter starts or restarts, Y/N answer
/// an open chest prompt, arrows or WASD move, Tab/I toggles the inventory, digits inspect slots.
pub fn command_for_keys(session: &GameSession, keys_pressed: &[KeyCode]) -> Option<InputCommand> {
    let pressed = |key: KeyCode| keys_pressed.contains(&key);

    match session.phase() {
        GamePhase::MainMenu => return pressed(KeyCode::Enter).then_some(InputCommand::StartGame),
        GamePhase::GameOver | GamePhase::Ending => {
            return pressed(KeyCode::Enter).then_some(InputCommand::Restart);
        }
        GamePhase::Playing => {}
    }

    if let Some(offer) = session.pending_chest() {
        let decision = if pressed(KeyCode::Y) {
            ChestDecision::Accept
        } else if pressed(KeyCode::N) || pressed(KeyCode::Escape) {
            ChestDecision::Decline
        } else {
            return None;
        };
        return Some(InputCommand::ChestDecision { prompt_id: offer.prompt_id, decision });
    }

    if pressed(KeyCode::Tab) || pressed(KeyCode::I) {
        return Some(InputCommand::SwitchView);
    }
    if let Some(slot) = SLOT_KEYS.iter().position(|&key| pressed(key)) {
        return Some(InputCommand::InspectSlot(slot));
    }

    let direction = if pressed(KeyCode::Up) || pressed(KeyCode::W) {
        Direction::Up
    } else if pressed(KeyCode::Right) || pressed(KeyCode::D) {
        Direction::Right
    } else if pressed(KeyCode::Down) || pressed(KeyCode::S) {
        Direction::Down
    } else if pressed(KeyCode::Left) || pressed(KeyCode::A) {
        Direction::Left
    } else {
        return None;
    };
    Some(InputCommand::Move(direction))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crawl_core::GameConfig;

    fn session() -> GameSession {
        GameSession::new(12345, GameConfig::default()).expect("default catalog")
    }

    #[test]
    fn main_menu_only_listens_for_enter() {
        let session = session();
        assert_eq!(command_for_keys(&session, &[KeyCode::Up]), None);
        assert_eq!(command_for_keys(&session, &[KeyCode::Enter]), Some(InputCommand::StartGame));
    }

    #[test]
    fn wasd_and_arrows_map_to_the_same_moves() {
        let mut session = session();
        session.handle_input(InputCommand::StartGame).expect("start");
        for (arrow, letter, direction) in [
            (KeyCode::Up, KeyCode::W, Direction::Up),
            (KeyCode::Right, KeyCode::D, Direction::Right),
            (KeyCode::Down, KeyCode::S, Direction::Down),
            (KeyCode::Left, KeyCode::A, Direction::Left),
        ] {
            assert_eq!(command_for_keys(&session, &[arrow]), Some(InputCommand::Move(direction)));
            assert_eq!(command_for_keys(&session, &[letter]), Some(InputCommand::Move(direction)));
        }
    }

    #[test]
    fn digits_inspect_slots_in_keyboard_order() {
        let mut session = session();
        session.handle_input(InputCommand::StartGame).expect("start");
        let first = command_for_keys(&session, &[KeyCode::Key1]);
        let last = command_for_keys(&session, &[KeyCode::Key0]);
        assert_eq!(first, Some(InputCommand::InspectSlot(0)));
        assert_eq!(last, Some(InputCommand::InspectSlot(9)));
    }

    #[test]
    fn refused_commands_are_not_recorded() {
        let mut session = session();
        session.handle_input(InputCommand::StartGame).expect("start");
        let mut app = AppState::new();

        app.tick(&mut session, &[KeyCode::Key3]);
        assert!(app.accepted_inputs.is_empty());
        assert_eq!(app.last_error, Some(GameError::EmptySlot(2)));
    }
}
