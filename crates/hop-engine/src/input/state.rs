use bitflags::bitflags;

use crate::input::queue::InputEvent;

bitflags! {
    /// Digital controls a bipedal entity understands.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Buttons: u8 {
        const LEFT  = 1 << 0;
        const RIGHT = 1 << 1;
        const JUMP  = 1 << 2;
    }
}

/// Snapshot of the input devices for one frame, plus the previous frame's
/// buttons for edge detection. Controllers read this instead of polling
/// devices themselves.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputState {
    pub buttons: Buttons,
    pub previous: Buttons,
    /// Horizontal analog axis, -1.0..=1.0.
    pub stick_x: f32,
}

impl InputState {
    /// Start a new frame: the current buttons become the previous ones,
    /// then `events` are applied in order. The stick keeps its last value.
    pub fn advance(&mut self, events: impl IntoIterator<Item = InputEvent>) {
        self.previous = self.buttons;
        for event in events {
            match event {
                InputEvent::ButtonDown(b) => self.buttons.insert(b),
                InputEvent::ButtonUp(b) => self.buttons.remove(b),
                InputEvent::StickMoved { x } => self.stick_x = x.clamp(-1.0, 1.0),
            }
        }
    }

    pub fn is_down(&self, button: Buttons) -> bool {
        self.buttons.contains(button)
    }

    /// Down this frame but not the previous one.
    pub fn just_pressed(&self, button: Buttons) -> bool {
        self.buttons.contains(button) && !self.previous.contains(button)
    }

    pub fn just_released(&self, button: Buttons) -> bool {
        !self.buttons.contains(button) && self.previous.contains(button)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_edge_lasts_one_frame() {
        let mut input = InputState::default();
        input.advance([InputEvent::ButtonDown(Buttons::JUMP)]);
        assert!(input.just_pressed(Buttons::JUMP));

        input.advance([]);
        assert!(input.is_down(Buttons::JUMP));
        assert!(!input.just_pressed(Buttons::JUMP));

        input.advance([InputEvent::ButtonUp(Buttons::JUMP)]);
        assert!(input.just_released(Buttons::JUMP));
    }

    #[test]
    fn stick_is_clamped_and_sticky() {
        let mut input = InputState::default();
        input.advance([InputEvent::StickMoved { x: 3.0 }]);
        assert_eq!(input.stick_x, 1.0);
        input.advance([]);
        assert_eq!(input.stick_x, 1.0);
    }
}
