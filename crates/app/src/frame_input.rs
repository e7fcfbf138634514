//! Keyboard input collection for one rendered frame.

use macroquad::prelude::{KeyCode, is_key_pressed};

const ACTION_KEYS: [KeyCode; 27] = [
    KeyCode::Up,
    KeyCode::Right,
    KeyCode::Down,
    KeyCode::Left,
    KeyCode::W,
    KeyCode::A,
    KeyCode::S,
    KeyCode::D,
    KeyCode::Enter,
    KeyCode::Y,
    KeyCode::N,
    KeyCode::Escape,
    KeyCode::Tab,
    KeyCode::I,
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
    KeyCode::KpEnter,
    KeyCode::Space,
    KeyCode::Q,
];

pub struct FrameInput {
    pub keys_pressed: Vec<KeyCode>,
    pub quit_requested: bool,
}

pub fn capture_frame_input() -> FrameInput {
    let mut keys_pressed: Vec<KeyCode> =
        ACTION_KEYS.into_iter().filter(|&key| is_key_pressed(key)).collect();

    // Keypad enter and space both confirm.
    if keys_pressed.iter().any(|key| matches!(key, KeyCode::KpEnter | KeyCode::Space)) {
        keys_pressed.push(KeyCode::Enter);
    }
    let quit_requested = keys_pressed.contains(&KeyCode::Q);

    FrameInput { keys_pressed, quit_requested }
}
