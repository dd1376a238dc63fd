#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalKey {
    Up,
    Down,
    Left,
    Right,
    Abort,
}

impl LogicalKey {
    pub const ALL: [LogicalKey; 5] = [
        LogicalKey::Up,
        LogicalKey::Down,
        LogicalKey::Left,
        LogicalKey::Right,
        LogicalKey::Abort,
    ];

    /// Keys that act while held. Abort only acts on its press edge.
    pub const STEERING: [LogicalKey; 4] = [
        LogicalKey::Up,
        LogicalKey::Down,
        LogicalKey::Left,
        LogicalKey::Right,
    ];
}

/// Held state of the steering keys, sampled once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeldKeys {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl HeldKeys {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn only(key: LogicalKey) -> Self {
        let mut held = Self::default();
        held.set(key, true);
        held
    }

    /// Samples each steering key through `is_down`.
    pub fn sample<F>(mut is_down: F) -> Self
    where
        F: FnMut(LogicalKey) -> bool,
    {
        let mut held = Self::default();
        for key in LogicalKey::STEERING {
            held.set(key, is_down(key));
        }
        held
    }

    pub fn set(&mut self, key: LogicalKey, held: bool) {
        let slot = match key {
            LogicalKey::Up => &mut self.up,
            LogicalKey::Down => &mut self.down,
            LogicalKey::Left => &mut self.left,
            LogicalKey::Right => &mut self.right,
            LogicalKey::Abort => return,
        };
        *slot = held;
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Quit,
    PointerDown { x: f32, y: f32 },
    /// A key went down this frame. Edges fire once per press, not while held.
    KeyEdge(LogicalKey),
    FrameTick(HeldKeys),
}

/// Backend that feeds the session. The frontend implements it over the window;
/// tests script it.
pub trait InputSource {
    /// Takes every discrete event queued since the last call.
    fn drain_events(&mut self) -> Vec<InputEvent>;

    fn held_keys(&self) -> HeldKeys;
}

#[cfg(test)]
pub(crate) mod scripted {
    use super::*;
    use std::collections::VecDeque;

    /// One scripted frame: discrete events plus the keys held while it runs.
    #[derive(Debug, Clone, Default)]
    pub struct ScriptedFrame {
        pub events: Vec<InputEvent>,
        pub held: HeldKeys,
    }

    #[derive(Debug, Default)]
    pub struct ScriptedInput {
        frames: VecDeque<ScriptedFrame>,
        current_held: HeldKeys,
    }

    impl ScriptedInput {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn click(mut self, x: f32, y: f32) -> Self {
            self.frames.push_back(ScriptedFrame {
                events: vec![InputEvent::PointerDown { x, y }],
                held: HeldKeys::none(),
            });
            self
        }

        pub fn hold(mut self, held: HeldKeys, frames: usize) -> Self {
            for _ in 0..frames {
                self.frames.push_back(ScriptedFrame {
                    events: Vec::new(),
                    held,
                });
            }
            self
        }

        pub fn press(mut self, key: LogicalKey) -> Self {
            self.frames.push_back(ScriptedFrame {
                events: vec![InputEvent::KeyEdge(key)],
                held: HeldKeys::only(key),
            });
            self
        }

        pub fn frame(mut self, events: Vec<InputEvent>, held: HeldKeys) -> Self {
            self.frames.push_back(ScriptedFrame { events, held });
            self
        }

        pub fn quit(mut self) -> Self {
            self.frames.push_back(ScriptedFrame {
                events: vec![InputEvent::Quit],
                held: HeldKeys::none(),
            });
            self
        }

        pub fn remaining(&self) -> usize {
            self.frames.len()
        }
    }

    impl InputSource for ScriptedInput {
        fn drain_events(&mut self) -> Vec<InputEvent> {
            match self.frames.pop_front() {
                Some(frame) => {
                    self.current_held = frame.held;
                    frame.events
                }
                None => {
                    self.current_held = HeldKeys::none();
                    Vec::new()
                }
            }
        }

        fn held_keys(&self) -> HeldKeys {
            self.current_held
        }
    }
}
