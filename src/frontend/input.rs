use raylib::prelude::{KeyboardKey, RaylibHandle};

use crate::config::GameConfig;
use crate::game::input::{InputState, Key};

/// Every key some action is bound to, so the collector only polls those.
pub(super) fn bound_keys(config: &GameConfig) -> Vec<Key> {
    let mut keys: Vec<Key> = config
        .players
        .iter()
        .flat_map(|player| player.controls.keys())
        .collect();
    keys.push(config.reset_key);
    keys.sort_by_key(|key| *key as u32);
    keys.dedup();
    keys
}

pub(super) fn sample_keyboard(rl: &RaylibHandle, keys: &[Key]) -> InputState {
    let mut input = InputState::new();
    for &key in keys {
        input.set(key, rl.is_key_down(keyboard_key(key)));
    }
    input
}

fn keyboard_key(key: Key) -> KeyboardKey {
    match key {
        Key::A => KeyboardKey::KEY_A,
        Key::B => KeyboardKey::KEY_B,
        Key::C => KeyboardKey::KEY_C,
        Key::D => KeyboardKey::KEY_D,
        Key::E => KeyboardKey::KEY_E,
        Key::F => KeyboardKey::KEY_F,
        Key::G => KeyboardKey::KEY_G,
        Key::H => KeyboardKey::KEY_H,
        Key::I => KeyboardKey::KEY_I,
        Key::J => KeyboardKey::KEY_J,
        Key::K => KeyboardKey::KEY_K,
        Key::L => KeyboardKey::KEY_L,
        Key::M => KeyboardKey::KEY_M,
        Key::N => KeyboardKey::KEY_N,
        Key::O => KeyboardKey::KEY_O,
        Key::P => KeyboardKey::KEY_P,
        Key::Q => KeyboardKey::KEY_Q,
        Key::R => KeyboardKey::KEY_R,
        Key::S => KeyboardKey::KEY_S,
        Key::T => KeyboardKey::KEY_T,
        Key::U => KeyboardKey::KEY_U,
        Key::V => KeyboardKey::KEY_V,
        Key::W => KeyboardKey::KEY_W,
        Key::X => KeyboardKey::KEY_X,
        Key::Y => KeyboardKey::KEY_Y,
        Key::Z => KeyboardKey::KEY_Z,
        Key::Num0 => KeyboardKey::KEY_ZERO,
        Key::Num1 => KeyboardKey::KEY_ONE,
        Key::Num2 => KeyboardKey::KEY_TWO,
        Key::Num3 => KeyboardKey::KEY_THREE,
        Key::Num4 => KeyboardKey::KEY_FOUR,
        Key::Num5 => KeyboardKey::KEY_FIVE,
        Key::Num6 => KeyboardKey::KEY_SIX,
        Key::Num7 => KeyboardKey::KEY_SEVEN,
        Key::Num8 => KeyboardKey::KEY_EIGHT,
        Key::Num9 => KeyboardKey::KEY_NINE,
        Key::Up => KeyboardKey::KEY_UP,
        Key::Down => KeyboardKey::KEY_DOWN,
        Key::Left => KeyboardKey::KEY_LEFT,
        Key::Right => KeyboardKey::KEY_RIGHT,
        Key::Space => KeyboardKey::KEY_SPACE,
        Key::Enter => KeyboardKey::KEY_ENTER,
        Key::Comma => KeyboardKey::KEY_COMMA,
        Key::Period => KeyboardKey::KEY_PERIOD,
        Key::Slash => KeyboardKey::KEY_SLASH,
        Key::Semicolon => KeyboardKey::KEY_SEMICOLON,
        Key::RightShift => KeyboardKey::KEY_RIGHT_SHIFT,
        Key::RightControl => KeyboardKey::KEY_RIGHT_CONTROL,
    }
}
