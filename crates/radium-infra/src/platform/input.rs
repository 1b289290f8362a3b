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

//! Translation from `winit` window events to Radium's backend-agnostic events.

use radium_core::event::RaEvent;
use radium_core::platform::{InputEvent, MouseButton};
use winit::event::{ElementState, MouseButton as WinitMouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Translates a `winit::event::WindowEvent` into an [`InputEvent`].
///
/// Window management events (resize, focus, close) and key repeats are
/// filtered out.
///
/// # Arguments
///
/// * `event`: A reference to a `WindowEvent` from the `winit` library.
///
/// # Returns
///
/// Returns `Some(InputEvent)` if the event is a recognized input action, or `None` otherwise.
pub fn translate_winit_input(event: &WindowEvent) -> Option<InputEvent> {
    match event {
        WindowEvent::KeyboardInput {
            event: key_event, ..
        } => {
            let PhysicalKey::Code(keycode) = key_event.physical_key else {
                return None;
            };
            let key_code = map_keycode_to_string(keycode);
            match key_event.state {
                ElementState::Pressed if !key_event.repeat => {
                    Some(InputEvent::KeyPressed { key_code })
                }
                ElementState::Released => Some(InputEvent::KeyReleased { key_code }),
                _ => None,
            }
        }
        WindowEvent::CursorMoved { position, .. } => Some(InputEvent::MouseMoved {
            x: position.x,
            y: position.y,
        }),
        WindowEvent::MouseInput { state, button, .. } => {
            let button = map_mouse_button(*button);
            match state {
                ElementState::Pressed => Some(InputEvent::MouseButtonPressed { button }),
                ElementState::Released => Some(InputEvent::MouseButtonReleased { button }),
            }
        }
        WindowEvent::MouseWheel { delta, .. } => {
            let (dx, dy): (f32, f32) = match delta {
                MouseScrollDelta::LineDelta(x, y) => (*x, *y),
                MouseScrollDelta::PixelDelta(pos) => (pos.x as f32, pos.y as f32),
            };
            (dx != 0.0 || dy != 0.0).then_some(InputEvent::MouseWheelScrolled {
                delta_x: dx,
                delta_y: dy,
            })
        }
        _ => None,
    }
}

/// Translates any `winit::event::WindowEvent` Radium cares about into a [`RaEvent`].
pub fn translate_window_event(event: &WindowEvent) -> Option<RaEvent> {
    match event {
        WindowEvent::Resized(size) => Some(RaEvent::Resized {
            width: size.width,
            height: size.height,
        }),
        WindowEvent::CloseRequested => Some(RaEvent::CloseRequested),
        WindowEvent::Focused(focused) => Some(RaEvent::Focused(*focused)),
        WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
            Some(RaEvent::ScaleFactorChanged(*scale_factor))
        }
        WindowEvent::RedrawRequested => Some(RaEvent::RedrawRequested),
        other => translate_winit_input(other).map(RaEvent::Input),
    }
}

fn map_keycode_to_string(keycode: KeyCode) -> String {
    format!("{keycode:?}")
}

fn map_mouse_button(button: WinitMouseButton) -> MouseButton {
    match button {
        WinitMouseButton::Left => MouseButton::Left,
        WinitMouseButton::Right => MouseButton::Right,
        WinitMouseButton::Middle => MouseButton::Middle,
        WinitMouseButton::Back => MouseButton::Back,
        WinitMouseButton::Forward => MouseButton::Forward,
        WinitMouseButton::Other(id) => MouseButton::Other(id),
    }
}
