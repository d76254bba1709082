use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Logical keyboard keys the arena can bind actions to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
    Num0,
    Num1,
    Num2,
    Num3,
    Num4,
    Num5,
    Num6,
    Num7,
    Num8,
    Num9,
    Up,
    Down,
    Left,
    Right,
    Space,
    Enter,
    Comma,
    Period,
    Slash,
    Semicolon,
    RightShift,
    RightControl,
}

/// The keys one tank listens to. Turret rotation is optional; without it the
/// barrel stays aligned with the hull.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Controls {
    pub up: Key,
    pub down: Key,
    pub left: Key,
    pub right: Key,
    pub fire: Key,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotate_left: Option<Key>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotate_right: Option<Key>,
}

impl Controls {
    pub fn new(up: Key, down: Key, left: Key, right: Key, fire: Key) -> Self {
        Self {
            up,
            down,
            left,
            right,
            fire,
            rotate_left: None,
            rotate_right: None,
        }
    }

    pub fn with_turret(mut self, rotate_left: Key, rotate_right: Key) -> Self {
        self.rotate_left = Some(rotate_left);
        self.rotate_right = Some(rotate_right);
        self
    }

    pub fn keys(&self) -> impl Iterator<Item = Key> + '_ {
        [self.up, self.down, self.left, self.right, self.fire]
            .into_iter()
            .chain(self.rotate_left)
            .chain(self.rotate_right)
    }
}

/// Held state of every key the collector has reported. Unknown keys read as
/// released.
#[derive(Clone, Debug, Default)]
pub struct InputState {
    held: HashMap<Key, bool>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: Key, down: bool) {
        self.held.insert(key, down);
    }

    pub fn press(&mut self, key: Key) {
        self.set(key, true);
    }

    pub fn release(&mut self, key: Key) {
        self.set(key, false);
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.get(&key).copied().unwrap_or(false)
    }

    pub fn held_opt(&self, key: Option<Key>) -> bool {
        key.is_some_and(|key| self.is_held(key))
    }

    pub fn clear(&mut self) {
        self.held.clear();
    }
}

impl FromIterator<Key> for InputState {
    fn from_iter<T: IntoIterator<Item = Key>>(iter: T) -> Self {
        let mut state = InputState::new();
        for key in iter {
            state.press(key);
        }
        state
    }
}
