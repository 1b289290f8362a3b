// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Backend-agnostic input events and the state tracked from them.
//!
//! The windowing library delivers input as events; the window accessors
//! (`get_key`, `get_mouse_button`, `get_cursor_pos`) answer from the
//! [`InputState`] those events are folded into.

use std::collections::HashSet;

/// A Radium representation of a user input event.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// A keyboard key was pressed.
    KeyPressed {
        /// The name of the physical key code, e.g. `"KeyA"` or `"Space"`.
        key_code: String,
    },
    /// A keyboard key was released.
    KeyReleased {
        /// The name of the physical key code.
        key_code: String,
    },
    /// A mouse button was pressed.
    MouseButtonPressed {
        /// The mouse button that was pressed.
        button: MouseButton,
    },
    /// A mouse button was released.
    MouseButtonReleased {
        /// The mouse button that was released.
        button: MouseButton,
    },
    /// The mouse cursor moved.
    MouseMoved {
        /// The new x-coordinate of the cursor, relative to the content area.
        x: f64,
        /// The new y-coordinate of the cursor, relative to the content area.
        y: f64,
    },
    /// The mouse wheel was scrolled.
    MouseWheelScrolled {
        /// The horizontal scroll delta.
        delta_x: f32,
        /// The vertical scroll delta.
        delta_y: f32,
    },
}

/// A mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// The left mouse button.
    Left,
    /// The right mouse button.
    Right,
    /// The middle mouse button.
    Middle,
    /// The back mouse button (typically on the side).
    Back,
    /// The forward mouse button (typically on the side).
    Forward,
    /// Another mouse button, identified by a numeric code.
    Other(u16),
}

/// The last reported state of a key or button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// The key or button is up.
    Release,
    /// The key or button is down.
    Press,
}

/// Key, button and cursor state accumulated from [`InputEvent`]s.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    keys: HashSet<String>,
    buttons: HashSet<MouseButton>,
    cursor: (f64, f64),
}

impl InputState {
    /// Creates an empty state: nothing pressed, cursor at the origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one event into the state.
    pub fn apply(&mut self, event: &InputEvent) {
        match event {
            InputEvent::KeyPressed { key_code } => {
                self.keys.insert(key_code.clone());
            }
            InputEvent::KeyReleased { key_code } => {
                self.keys.remove(key_code);
            }
            InputEvent::MouseButtonPressed { button } => {
                self.buttons.insert(*button);
            }
            InputEvent::MouseButtonReleased { button } => {
                self.buttons.remove(button);
            }
            InputEvent::MouseMoved { x, y } => self.cursor = (*x, *y),
            InputEvent::MouseWheelScrolled { .. } => {}
        }
    }

    /// Returns the last reported state of a key.
    pub fn key(&self, key_code: &str) -> Action {
        if self.keys.contains(key_code) {
            Action::Press
        } else {
            Action::Release
        }
    }

    /// Returns the last reported state of a mouse button.
    pub fn mouse_button(&self, button: MouseButton) -> Action {
        if self.buttons.contains(&button) {
            Action::Press
        } else {
            Action::Release
        }
    }

    /// Returns the last reported cursor position.
    pub fn cursor(&self) -> (f64, f64) {
        self.cursor
    }

    /// Releases every key and button, e.g. when the window loses focus.
    pub fn release_all(&mut self) {
        self.keys.clear();
        self.buttons.clear();
    }
}
