//! Pointer input tracking.
//!
//! Raw pointer events from the surface are folded into [`Gesture`]s, the
//! events the selection controller understands.

use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Raw pointer event as reported by the surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down { position: Point, button: MouseButton },
    Up { position: Point, button: MouseButton },
    Move { position: Point },
}

/// Editor-level pointer gestures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    PrimaryPress { position: Point },
    PrimaryDrag { position: Point },
    PrimaryRelease { position: Point },
    SecondaryPress { position: Point },
    /// Pointer moved with no button held.
    Hover { position: Point },
}

/// Tracks pressed buttons and the pointer position across events.
#[derive(Debug, Clone)]
pub struct InputState {
    /// Current pointer position.
    pub pointer_position: Point,
    /// Currently pressed mouse buttons.
    pressed_buttons: HashSet<MouseButton>,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            pointer_position: Point::ZERO,
            pressed_buttons: HashSet::new(),
        }
    }
}

impl InputState {
    /// Create a new input state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a pointer event, returning the gesture it produces (if any).
    ///
    /// Repeated downs of a held button and ups of a released one are
    /// swallowed. The middle button produces no gestures.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) -> Option<Gesture> {
        match event {
            PointerEvent::Down { position, button } => {
                self.pointer_position = position;
                if !self.pressed_buttons.insert(button) {
                    return None;
                }
                match button {
                    MouseButton::Left => Some(Gesture::PrimaryPress { position }),
                    MouseButton::Right => Some(Gesture::SecondaryPress { position }),
                    MouseButton::Middle => None,
                }
            }
            PointerEvent::Up { position, button } => {
                self.pointer_position = position;
                if !self.pressed_buttons.remove(&button) {
                    return None;
                }
                (button == MouseButton::Left).then_some(Gesture::PrimaryRelease { position })
            }
            PointerEvent::Move { position } => {
                self.pointer_position = position;
                if self.is_button_pressed(MouseButton::Left) {
                    Some(Gesture::PrimaryDrag { position })
                } else if self.pressed_buttons.is_empty() {
                    Some(Gesture::Hover { position })
                } else {
                    None
                }
            }
        }
    }

    /// Check if a button is currently pressed.
    pub fn is_button_pressed(&self, button: MouseButton) -> bool {
        self.pressed_buttons.contains(&button)
    }
}
