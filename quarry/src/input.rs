use quartz::{Interaction, Scene};
use serde::{Deserialize, Serialize};

use crate::math::Vec2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

/// Raw events as delivered by the windowing layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    MouseMotion { position: Vec2 },
    MouseButton { button: MouseButton, pressed: bool },
    /// The window lost focus or the system interrupted input.
    FocusLost,
}

/// A step of a single press, as controls understand it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerPhase {
    Begin(Vec2),
    Move(Vec2),
    End(Vec2),
    Cancel,
}

impl PointerPhase {
    pub fn dispatch(self, scene: &mut Scene) -> Interaction {
        match self {
            PointerPhase::Begin(position) => scene.pointer_down(position),
            PointerPhase::Move(position) => scene.pointer_move(position),
            PointerPhase::End(position) => scene.pointer_up(position),
            PointerPhase::Cancel => scene.pointer_cancel(),
        }
    }
}

/// Turns raw mouse events into press phases for the primary button.
pub struct PointerTracker {
    primary: MouseButton,
    position: Vec2,
    pressed: bool,
}

impl PointerTracker {
    pub fn new(primary: MouseButton) -> Self {
        PointerTracker {
            primary,
            position: Vec2::ZERO,
            pressed: false,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }
    pub fn pressed(&self) -> bool {
        self.pressed
    }

    pub fn handle_event(&mut self, event: &InputEvent) -> Option<PointerPhase> {
        match *event {
            InputEvent::MouseMotion { position } => {
                if position == self.position {
                    return None;
                }
                self.position = position;
                self.pressed.then_some(PointerPhase::Move(position))
            }
            InputEvent::MouseButton { button, pressed } => {
                if button != self.primary || pressed == self.pressed {
                    return None;
                }
                self.pressed = pressed;
                if pressed {
                    Some(PointerPhase::Begin(self.position))
                } else {
                    Some(PointerPhase::End(self.position))
                }
            }
            InputEvent::FocusLost => {
                if !self.pressed {
                    return None;
                }
                self.pressed = false;
                Some(PointerPhase::Cancel)
            }
        }
    }

    /// Translates the event and hands the resulting phase to the scene.
    pub fn apply(&mut self, scene: &mut Scene, event: &InputEvent) -> Interaction {
        match self.handle_event(event) {
            Some(phase) => phase.dispatch(scene),
            None => Interaction::Ignored,
        }
    }
}
