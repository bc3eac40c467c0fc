use crate::sim::Vec2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    A,
    S,
    D,
    M,
    C,
    L,
    Space,
    Escape,
    Digit1,
    Digit2,
    Digit3,
    Digit4,
    Digit5,
    Digit6,
    Digit7,
    Digit8,
    Digit9,
    Numpad0,
    Numpad1,
    Numpad2,
}

const KEY_COUNT: usize = 21;

impl Key {
    const DIGITS: [Key; 9] = [
        Key::Digit1,
        Key::Digit2,
        Key::Digit3,
        Key::Digit4,
        Key::Digit5,
        Key::Digit6,
        Key::Digit7,
        Key::Digit8,
        Key::Digit9,
    ];

    /// Top-row digit key for `1..=9`.
    pub fn digit(value: u8) -> Option<Key> {
        let index = usize::from(value).checked_sub(1)?;
        Self::DIGITS.get(index).copied()
    }

    const fn index(self) -> usize {
        match self {
            Key::W => 0,
            Key::A => 1,
            Key::S => 2,
            Key::D => 3,
            Key::M => 4,
            Key::C => 5,
            Key::L => 6,
            Key::Space => 7,
            Key::Escape => 8,
            Key::Digit1 => 9,
            Key::Digit2 => 10,
            Key::Digit3 => 11,
            Key::Digit4 => 12,
            Key::Digit5 => 13,
            Key::Digit6 => 14,
            Key::Digit7 => 15,
            Key::Digit8 => 16,
            Key::Digit9 => 17,
            Key::Numpad0 => 18,
            Key::Numpad1 => 19,
            Key::Numpad2 => 20,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
}

impl MouseButton {
    const fn index(self) -> usize {
        match self {
            MouseButton::Left => 0,
            MouseButton::Right => 1,
        }
    }
}

/// Level and edge state for every key the game reads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct KeyStates {
    down: [bool; KEY_COUNT],
    pressed: [bool; KEY_COUNT],
}

impl KeyStates {
    pub(crate) fn press(&mut self, key: Key) {
        let index = key.index();
        if !self.down[index] {
            self.pressed[index] = true;
        }
        self.down[index] = true;
    }

    pub(crate) fn release(&mut self, key: Key) {
        self.down[key.index()] = false;
    }

    pub(crate) fn clear_edges(&mut self) {
        self.pressed = [false; KEY_COUNT];
    }

    pub(crate) fn release_all(&mut self) {
        self.down = [false; KEY_COUNT];
    }

    fn is_down(&self, key: Key) -> bool {
        self.down[key.index()]
    }

    fn is_pressed(&self, key: Key) -> bool {
        self.pressed[key.index()]
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct MouseStates {
    down: [bool; 2],
    pressed: [bool; 2],
}

impl MouseStates {
    pub(crate) fn press(&mut self, button: MouseButton) {
        let index = button.index();
        if !self.down[index] {
            self.pressed[index] = true;
        }
        self.down[index] = true;
    }

    pub(crate) fn release(&mut self, button: MouseButton) {
        self.down[button.index()] = false;
    }

    pub(crate) fn clear_edges(&mut self) {
        self.pressed = [false; 2];
    }

    pub(crate) fn release_all(&mut self) {
        self.down = [false; 2];
    }
}

/// Input as seen by one simulation tick.
///
/// Edge state (`is_pressed`, `mouse_pressed`, `scroll_steps`) is true for
/// exactly one tick after the physical event.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSnapshot {
    keys: KeyStates,
    mouse: MouseStates,
    cursor_position_px: Option<Vec2>,
    scroll_steps: i32,
}

impl InputSnapshot {
    pub fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn new(
        keys: KeyStates,
        mouse: MouseStates,
        cursor_position_px: Option<Vec2>,
        scroll_steps: i32,
    ) -> Self {
        Self {
            keys,
            mouse,
            cursor_position_px,
            scroll_steps,
        }
    }

    pub fn is_down(&self, key: Key) -> bool {
        self.keys.is_down(key)
    }

    pub fn is_pressed(&self, key: Key) -> bool {
        self.keys.is_pressed(key)
    }

    pub fn mouse_down(&self, button: MouseButton) -> bool {
        self.mouse.down[button.index()]
    }

    pub fn mouse_pressed(&self, button: MouseButton) -> bool {
        self.mouse.pressed[button.index()]
    }

    /// Cursor in canvas pixels, origin top-left. `None` while outside the window.
    pub fn cursor_position_px(&self) -> Option<Vec2> {
        self.cursor_position_px
    }

    /// `1` for a wheel step away from the user, `-1` towards, `0` otherwise.
    pub fn scroll_steps(&self) -> i32 {
        self.scroll_steps
    }

    pub fn with_key_down(mut self, key: Key, is_down: bool) -> Self {
        self.keys.down[key.index()] = is_down;
        self
    }

    /// Marks the key as freshly pressed this tick (and held).
    pub fn with_key_pressed(mut self, key: Key) -> Self {
        self.keys.down[key.index()] = true;
        self.keys.pressed[key.index()] = true;
        self
    }

    pub fn with_mouse_down(mut self, button: MouseButton, is_down: bool) -> Self {
        self.mouse.down[button.index()] = is_down;
        self
    }

    pub fn with_mouse_pressed(mut self, button: MouseButton) -> Self {
        self.mouse.down[button.index()] = true;
        self.mouse.pressed[button.index()] = true;
        self
    }

    pub fn with_cursor_position_px(mut self, cursor_position_px: Option<Vec2>) -> Self {
        self.cursor_position_px = cursor_position_px;
        self
    }

    pub fn with_scroll_steps(mut self, scroll_steps: i32) -> Self {
        self.scroll_steps = scroll_steps.signum();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_lookup_covers_one_through_nine() {
        assert_eq!(Key::digit(1), Some(Key::Digit1));
        assert_eq!(Key::digit(9), Some(Key::Digit9));
        assert_eq!(Key::digit(0), None);
        assert_eq!(Key::digit(10), None);
    }

    #[test]
    fn held_key_only_produces_one_edge() {
        let mut keys = KeyStates::default();
        keys.press(Key::Space);
        assert!(keys.is_pressed(Key::Space));
        keys.clear_edges();
        keys.press(Key::Space);
        assert!(!keys.is_pressed(Key::Space));
        assert!(keys.is_down(Key::Space));
        keys.release(Key::Space);
        keys.press(Key::Space);
        assert!(keys.is_pressed(Key::Space));
    }

    #[test]
    fn builders_set_level_and_edge() {
        let snapshot = InputSnapshot::empty()
            .with_key_pressed(Key::L)
            .with_key_down(Key::W, true)
            .with_mouse_pressed(MouseButton::Right)
            .with_scroll_steps(-3);

        assert!(snapshot.is_pressed(Key::L));
        assert!(snapshot.is_down(Key::L));
        assert!(snapshot.is_down(Key::W));
        assert!(!snapshot.is_pressed(Key::W));
        assert!(snapshot.mouse_down(MouseButton::Right));
        assert!(snapshot.mouse_pressed(MouseButton::Right));
        assert!(!snapshot.mouse_down(MouseButton::Left));
        assert_eq!(snapshot.scroll_steps(), -1);
        assert_eq!(snapshot.cursor_position_px(), None);
    }
}
