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

//! The application window.
//!
//! [`RaWindow`] forwards to the native window wherever the windowing library
//! offers a direct equivalent. Operations without one are stubs that fail with
//! [`ErrorCode::NotImplemented`](crate::error::ErrorCode::NotImplemented) and
//! leave the window untouched.

use crate::canvas::Canvas;
use crate::error::{RaError, RaResult};
use crate::event::RaEvent;
use crate::platform::{Action, InputState, MouseButton, NativeWindow, WindowAttrib};
use crate::renderer::DisplayDevice;
use std::sync::Arc;

/// A native window together with the display device that renders into it.
#[derive(Debug)]
pub struct RaWindow {
    // Declared first so the canvas releases its GPU resources before the
    // window and device go away.
    canvas: Option<Canvas>,
    native: Arc<dyn NativeWindow>,
    device: Arc<dyn DisplayDevice>,
    input: InputState,
    should_close: bool,
}

impl RaWindow {
    /// Wraps a native window and the display device bound to it.
    pub fn new(native: Arc<dyn NativeWindow>, device: Arc<dyn DisplayDevice>) -> Self {
        log::debug!("RaWindow wrapping native window {}", native.id());
        Self {
            canvas: None,
            native,
            device,
            input: InputState::new(),
            should_close: false,
        }
    }

    /// Returns the native window.
    pub fn native(&self) -> &Arc<dyn NativeWindow> {
        &self.native
    }

    /// Returns the display device.
    pub fn device(&self) -> &Arc<dyn DisplayDevice> {
        &self.device
    }

    /// Returns the attached canvas, if any.
    pub fn canvas(&self) -> Option<&Canvas> {
        self.canvas.as_ref()
    }

    /// Returns the attached canvas mutably, if any.
    pub fn canvas_mut(&mut self) -> Option<&mut Canvas> {
        self.canvas.as_mut()
    }

    /// Attaches `canvas`, dropping the previous one.
    pub fn attach_canvas(&mut self, canvas: Canvas) -> &mut Canvas {
        if self.canvas.is_some() {
            log::debug!("Replacing the canvas of window {}", self.native.id());
        }
        self.canvas.insert(canvas)
    }

    /// Detaches and returns the canvas.
    pub fn take_canvas(&mut self) -> Option<Canvas> {
        self.canvas.take()
    }

    /// Returns the tracked input state.
    pub fn input(&self) -> &InputState {
        &self.input
    }

    /// Folds an event from the event loop into the window state.
    pub fn handle_event(&mut self, event: &RaEvent) {
        match event {
            RaEvent::Input(input) => self.input.apply(input),
            RaEvent::CloseRequested => self.should_close = true,
            RaEvent::Focused(false) => self.input.release_all(),
            RaEvent::Resized { width, height } => {
                if let Err(e) = self.device.resize(*width, *height) {
                    log::warn!("Failed to resize the display to {width}x{height}: {e}");
                }
            }
            RaEvent::Focused(true) | RaEvent::ScaleFactorChanged(_) | RaEvent::RedrawRequested => {}
        }
    }

    /// Draws the attached canvas. Does nothing without one.
    pub fn draw(&self) -> RaResult<()> {
        match &self.canvas {
            Some(canvas) => canvas.draw(),
            None => Ok(()),
        }
    }

    // --- Pass-throughs ---

    /// Destroys the window: releases the canvas, hides the native window and
    /// flags it for closing. The native window itself is released when the
    /// owning application shuts down.
    pub fn destroy(&mut self) -> RaResult<()> {
        log::info!("Destroying window {}", self.native.id());
        self.canvas = None;
        self.native.set_visible(false);
        self.should_close = true;
        Ok(())
    }

    /// Whether the window has been asked to close.
    pub fn should_close(&self) -> RaResult<bool> {
        Ok(self.should_close)
    }

    /// Sets or clears the close flag.
    pub fn set_should_close(&mut self, value: bool) -> RaResult<()> {
        self.should_close = value;
        Ok(())
    }

    /// Sets the window title.
    pub fn set_title(&self, title: &str) -> RaResult<()> {
        self.native.set_title(title);
        Ok(())
    }

    /// Returns the position of the content area's top-left corner.
    pub fn get_pos(&self) -> RaResult<(i32, i32)> {
        self.native
            .position()
            .ok_or_else(|| RaError::fail("the platform does not report window positions"))
    }

    /// Moves the window.
    pub fn set_pos(&self, x: i32, y: i32) -> RaResult<()> {
        self.native.set_position(x, y);
        Ok(())
    }

    /// Returns the content area size in screen coordinates.
    pub fn get_size(&self) -> RaResult<(u32, u32)> {
        Ok(self.native.window_size())
    }

    /// Resizes the content area.
    pub fn set_size(&self, width: u32, height: u32) -> RaResult<()> {
        if width == 0 || height == 0 {
            return Err(RaError::invalid_argument(format!(
                "window size must be non-zero, got {width}x{height}"
            )));
        }
        self.native.set_window_size(width, height);
        Ok(())
    }

    /// Sets the size limits of the content area. `None` leaves a side unbounded.
    pub fn set_size_limits(
        &self,
        min: Option<(u32, u32)>,
        max: Option<(u32, u32)>,
    ) -> RaResult<()> {
        if let (Some(min), Some(max)) = (min, max) {
            if min.0 > max.0 || min.1 > max.1 {
                return Err(RaError::invalid_argument(format!(
                    "minimum size {min:?} exceeds maximum size {max:?}"
                )));
            }
        }
        self.native.set_size_limits(min, max);
        Ok(())
    }

    /// Returns the framebuffer size in pixels.
    pub fn get_framebuffer_size(&self) -> RaResult<(u32, u32)> {
        Ok(self.native.framebuffer_size())
    }

    /// Returns the content scale on both axes.
    pub fn get_content_scale(&self) -> RaResult<(f32, f32)> {
        let scale = self.native.scale_factor() as f32;
        Ok((scale, scale))
    }

    /// Minimizes the window.
    pub fn iconify(&self) -> RaResult<()> {
        self.native.set_minimized(true);
        Ok(())
    }

    /// Restores a minimized or maximized window.
    pub fn restore(&self) -> RaResult<()> {
        self.native.set_minimized(false);
        self.native.set_maximized(false);
        Ok(())
    }

    /// Maximizes the window.
    pub fn maximize(&self) -> RaResult<()> {
        self.native.set_maximized(true);
        Ok(())
    }

    /// Makes the window visible.
    pub fn show(&self) -> RaResult<()> {
        self.native.set_visible(true);
        Ok(())
    }

    /// Hides the window.
    pub fn hide(&self) -> RaResult<()> {
        self.native.set_visible(false);
        Ok(())
    }

    /// Brings the window to the front and focuses it.
    pub fn focus(&self) -> RaResult<()> {
        self.native.focus();
        Ok(())
    }

    /// Requests user attention.
    pub fn request_attention(&self) -> RaResult<()> {
        self.native.request_attention();
        Ok(())
    }

    /// Queries a window attribute.
    pub fn get_attrib(&self, attrib: WindowAttrib) -> RaResult<bool> {
        match attrib {
            WindowAttrib::Focused => Ok(self.native.is_focused()),
            WindowAttrib::Iconified => self
                .native
                .is_minimized()
                .ok_or_else(|| RaError::fail("the platform does not report the minimized state")),
            WindowAttrib::Maximized => Ok(self.native.is_maximized()),
            WindowAttrib::Visible => self
                .native
                .is_visible()
                .ok_or_else(|| RaError::fail("the platform does not report visibility")),
            WindowAttrib::Resizable => Ok(self.native.is_resizable()),
            WindowAttrib::Decorated => Ok(self.native.is_decorated()),
            WindowAttrib::Floating
            | WindowAttrib::TransparentFramebuffer
            | WindowAttrib::Hovered => Err(RaError::not_implemented("RaWindow::get_attrib")),
        }
    }

    /// Changes a window attribute.
    pub fn set_attrib(&self, attrib: WindowAttrib, value: bool) -> RaResult<()> {
        match attrib {
            WindowAttrib::Resizable => self.native.set_resizable(value),
            WindowAttrib::Decorated => self.native.set_decorated(value),
            WindowAttrib::Floating => self.native.set_always_on_top(value),
            _ => return Err(RaError::not_implemented("RaWindow::set_attrib")),
        }
        Ok(())
    }

    /// Returns the last reported state of a key, by physical key-code name.
    pub fn get_key(&self, key_code: &str) -> RaResult<Action> {
        Ok(self.input.key(key_code))
    }

    /// Returns the last reported state of a mouse button.
    pub fn get_mouse_button(&self, button: MouseButton) -> RaResult<Action> {
        Ok(self.input.mouse_button(button))
    }

    /// Returns the last reported cursor position relative to the content area.
    pub fn get_cursor_pos(&self) -> RaResult<(f64, f64)> {
        Ok(self.input.cursor())
    }

    /// Moves the cursor relative to the content area.
    pub fn set_cursor_pos(&self, x: f64, y: f64) -> RaResult<()> {
        if !x.is_finite() || !y.is_finite() {
            return Err(RaError::invalid_argument("cursor position must be finite"));
        }
        self.native.set_cursor_position(x, y)
    }

    /// Presents everything drawn since the previous swap.
    pub fn swap_buffers(&self) -> RaResult<()> {
        self.device.present()
    }

    // --- Not implemented ---

    /// Not implemented.
    pub fn set_aspect_ratio(&mut self, _numer: i32, _denom: i32) -> RaResult<()> {
        Err(RaError::not_implemented("RaWindow::set_aspect_ratio"))
    }

    /// Not implemented. Would return the frame edges (left, top, right, bottom).
    pub fn get_frame_size(&self) -> RaResult<(i32, i32, i32, i32)> {
        Err(RaError::not_implemented("RaWindow::get_frame_size"))
    }

    /// Not implemented.
    pub fn get_opacity(&self) -> RaResult<f32> {
        Err(RaError::not_implemented("RaWindow::get_opacity"))
    }

    /// Not implemented.
    pub fn set_opacity(&mut self, _opacity: f32) -> RaResult<()> {
        Err(RaError::not_implemented("RaWindow::set_opacity"))
    }

    /// Not implemented.
    pub fn get_input_mode(&self, _mode: i32) -> RaResult<i32> {
        Err(RaError::not_implemented("RaWindow::get_input_mode"))
    }

    /// Not implemented.
    pub fn set_input_mode(&mut self, _mode: i32, _value: i32) -> RaResult<()> {
        Err(RaError::not_implemented("RaWindow::set_input_mode"))
    }

    /// Not implemented.
    pub fn raw_mouse_motion_supported() -> RaResult<bool> {
        Err(RaError::not_implemented("RaWindow::raw_mouse_motion_supported"))
    }

    /// Not implemented.
    pub fn get_key_name(_key: i32, _scancode: i32) -> RaResult<String> {
        Err(RaError::not_implemented("RaWindow::get_key_name"))
    }

    /// Not implemented.
    pub fn get_key_scancode(_key: i32) -> RaResult<i32> {
        Err(RaError::not_implemented("RaWindow::get_key_scancode"))
    }

    /// Not implemented.
    pub fn set_clipboard_string(&mut self, _text: &str) -> RaResult<()> {
        Err(RaError::not_implemented("RaWindow::set_clipboard_string"))
    }

    /// Not implemented. The display device owns its context.
    pub fn make_context_current(&mut self) -> RaResult<()> {
        Err(RaError::not_implemented("RaWindow::make_context_current"))
    }

    /// Not implemented. Would return the id of the window whose context is current.
    pub fn get_current() -> RaResult<u64> {
        Err(RaError::not_implemented("RaWindow::get_current"))
    }

    /// Not implemented. Vsync is chosen once through the configuration.
    pub fn swap_interval(_interval: i32) -> RaResult<()> {
        Err(RaError::not_implemented("RaWindow::swap_interval"))
    }

    /// Not implemented.
    pub fn extension_supported(_extension: &str) -> RaResult<bool> {
        Err(RaError::not_implemented("RaWindow::extension_supported"))
    }
}
