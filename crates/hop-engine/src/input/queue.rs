use crate::input::state::Buttons;

/// Input events fed in by the host, already mapped from raw devices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// One or more buttons went down.
    ButtonDown(Buttons),
    /// One or more buttons were released.
    ButtonUp(Buttons),
    /// The horizontal analog axis moved; `x` is in -1.0..=1.0.
    StickMoved { x: f32 },
}

/// A queue of input events.
/// The host pushes events as they arrive; the level drains them once per frame.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
