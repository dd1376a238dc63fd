use macroquad::prelude::*;
use skyforge_core::{HeldKeys, InputEvent, InputSource, LogicalKey};

pub fn key_code(key: LogicalKey) -> KeyCode {
    match key {
        LogicalKey::Up => KeyCode::Up,
        LogicalKey::Down => KeyCode::Down,
        LogicalKey::Left => KeyCode::Left,
        LogicalKey::Right => KeyCode::Right,
        LogicalKey::Abort => KeyCode::Space,
    }
}

/// Reads the macroquad window state. Call `drain_events` once per display frame;
/// macroquad resets its pressed-this-frame flags in `next_frame`.
#[derive(Debug, Default)]
pub struct MacroquadInput;

impl MacroquadInput {
    pub fn new() -> Self {
        Self
    }
}

impl InputSource for MacroquadInput {
    fn drain_events(&mut self) -> Vec<InputEvent> {
        let mut events = Vec::new();

        if is_quit_requested() {
            events.push(InputEvent::Quit);
        }

        if is_mouse_button_pressed(MouseButton::Left) {
            let (x, y) = mouse_position();
            events.push(InputEvent::PointerDown { x, y });
        }

        events.extend(
            LogicalKey::ALL
                .into_iter()
                .filter(|key| is_key_pressed(key_code(*key)))
                .map(InputEvent::KeyEdge),
        );

        events
    }

    fn held_keys(&self) -> HeldKeys {
        HeldKeys::sample(|key| is_key_down(key_code(key)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_logical_key_has_its_own_key_code() {
        let codes: Vec<KeyCode> = LogicalKey::ALL.into_iter().map(key_code).collect();
        for (i, code) in codes.iter().enumerate() {
            assert!(!codes[i + 1..].contains(code), "{:?} mapped twice", code);
        }
    }

    #[test]
    fn abort_is_space() {
        assert_eq!(key_code(LogicalKey::Abort), KeyCode::Space);
        assert_eq!(key_code(LogicalKey::Up), KeyCode::Up);
    }
}
