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

use crate::error::RaResult;
use std::fmt::Debug;

/// A trait that abstracts the native window object.
///
/// Any windowing backend (Winit, SDL2, Glfw, etc.) can implement this trait
/// to be wrapped by a [`RaWindow`](crate::window::RaWindow). Methods map one to
/// one onto the backend's own calls; Radium adds no logic of its own here.
pub trait NativeWindow: Send + Sync + Debug {
    /// Returns a stable, unique identifier for the window.
    fn id(&self) -> u64;

    /// Returns the physical dimensions (width, height) of the framebuffer.
    fn framebuffer_size(&self) -> (u32, u32);

    /// Returns the dimensions of the content area in logical (screen) units.
    fn window_size(&self) -> (u32, u32);

    /// Requests a new content area size in logical units.
    fn set_window_size(&self, width: u32, height: u32);

    /// Sets the minimum and maximum content area size. `None` removes a limit.
    fn set_size_limits(&self, min: Option<(u32, u32)>, max: Option<(u32, u32)>);

    /// Returns the position of the window's top-left corner, if the platform reports it.
    fn position(&self) -> Option<(i32, i32)>;

    /// Moves the window's top-left corner.
    fn set_position(&self, x: i32, y: i32);

    /// Returns the display scale factor, used for HiDPI rendering.
    fn scale_factor(&self) -> f64;

    /// Sets the window title.
    fn set_title(&self, title: &str);

    /// Minimizes or restores the window.
    fn set_minimized(&self, minimized: bool);

    /// Maximizes or un-maximizes the window.
    fn set_maximized(&self, maximized: bool);

    /// Shows or hides the window.
    fn set_visible(&self, visible: bool);

    /// Brings the window to the front and gives it input focus.
    fn focus(&self);

    /// Asks the platform to draw the user's attention to the window.
    fn request_attention(&self);

    /// Whether the window has input focus.
    fn is_focused(&self) -> bool;

    /// Whether the window is minimized, if the platform reports it.
    fn is_minimized(&self) -> Option<bool>;

    /// Whether the window is maximized.
    fn is_maximized(&self) -> bool;

    /// Whether the window is visible, if the platform reports it.
    fn is_visible(&self) -> Option<bool>;

    /// Whether the user can resize the window.
    fn is_resizable(&self) -> bool;

    /// Whether the window has decorations.
    fn is_decorated(&self) -> bool;

    /// Enables or disables user resizing.
    fn set_resizable(&self, resizable: bool);

    /// Enables or disables decorations.
    fn set_decorated(&self, decorated: bool);

    /// Keeps the window above all others, or returns it to the normal level.
    fn set_always_on_top(&self, always_on_top: bool);

    /// Warps the cursor to a position relative to the content area.
    fn set_cursor_position(&self, x: f64, y: f64) -> RaResult<()>;

    /// Requests that the window be redrawn.
    fn request_redraw(&self);
}

/// The window attributes Radium can query or change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum WindowAttrib {
    /// The window has input focus.
    Focused = 0x0002_0001,
    /// The window is minimized.
    Iconified = 0x0002_0002,
    /// The user can resize the window.
    Resizable = 0x0002_0003,
    /// The window is visible.
    Visible = 0x0002_0004,
    /// The window has decorations.
    Decorated = 0x0002_0005,
    /// The window stays above other windows.
    Floating = 0x0002_0007,
    /// The window is maximized.
    Maximized = 0x0002_0008,
    /// The framebuffer is transparent.
    TransparentFramebuffer = 0x0002_000A,
    /// The cursor is over the content area.
    Hovered = 0x0002_000B,
}

impl WindowAttrib {
    /// Maps the windowing library's attribute value to a variant.
    pub fn from_raw(raw: i32) -> Option<Self> {
        Some(match raw {
            0x0002_0001 => WindowAttrib::Focused,
            0x0002_0002 => WindowAttrib::Iconified,
            0x0002_0003 => WindowAttrib::Resizable,
            0x0002_0004 => WindowAttrib::Visible,
            0x0002_0005 => WindowAttrib::Decorated,
            0x0002_0007 => WindowAttrib::Floating,
            0x0002_0008 => WindowAttrib::Maximized,
            0x0002_000A => WindowAttrib::TransparentFramebuffer,
            0x0002_000B => WindowAttrib::Hovered,
            _ => return None,
        })
    }
}
