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

//! `RaWindow_*`: the window surface, named after the native windowing calls.
//!
//! Every function taking a window rejects a null handle with `E_INVALIDARG`
//! before anything else. Boolean results are written as `0`/`1`, key and
//! button states as `RA_RELEASE`/`RA_PRESS`.

use crate::ffi::{c_str, dimension, guard, handle, to_c_int, write_out};
use crate::HRESULT;
use radium_core::error::{RaError, RaResult};
use radium_core::platform::{Action, MouseButton, WindowAttrib};
use radium_core::RaWindow;
use std::ffi::{c_char, c_int, c_void};

/// Value written for a released key or button.
pub const RA_RELEASE: c_int = 0;
/// Value written for a pressed key or button.
pub const RA_PRESS: c_int = 1;
/// Size-limit value leaving that side unbounded.
pub const RA_DONT_CARE: c_int = -1;

/// Window attribute: the window has input focus.
pub const RA_FOCUSED: c_int = WindowAttrib::Focused as c_int;
/// Window attribute: the window is minimized.
pub const RA_ICONIFIED: c_int = WindowAttrib::Iconified as c_int;
/// Window attribute: the user can resize the window.
pub const RA_RESIZABLE: c_int = WindowAttrib::Resizable as c_int;
/// Window attribute: the window is visible.
pub const RA_VISIBLE: c_int = WindowAttrib::Visible as c_int;
/// Window attribute: the window has decorations.
pub const RA_DECORATED: c_int = WindowAttrib::Decorated as c_int;
/// Window attribute: the window stays above the others.
pub const RA_FLOATING: c_int = WindowAttrib::Floating as c_int;
/// Window attribute: the window is maximized.
pub const RA_MAXIMIZED: c_int = WindowAttrib::Maximized as c_int;
/// Window attribute: the framebuffer is transparent.
pub const RA_TRANSPARENT_FRAMEBUFFER: c_int = WindowAttrib::TransparentFramebuffer as c_int;
/// Window attribute: the cursor is over the content area.
pub const RA_HOVERED: c_int = WindowAttrib::Hovered as c_int;

fn action_to_c(action: Action) -> c_int {
    match action {
        Action::Release => RA_RELEASE,
        Action::Press => RA_PRESS,
    }
}

fn mouse_button_from_c(button: c_int) -> RaResult<MouseButton> {
    Ok(match button {
        0 => MouseButton::Left,
        1 => MouseButton::Right,
        2 => MouseButton::Middle,
        3 => MouseButton::Back,
        4 => MouseButton::Forward,
        n => MouseButton::Other(u16::try_from(n).map_err(|_| {
            RaError::invalid_argument(format!("invalid mouse button {n}"))
        })?),
    })
}

fn attrib_from_c(attrib: c_int) -> RaResult<WindowAttrib> {
    WindowAttrib::from_raw(attrib)
        .ok_or_else(|| RaError::invalid_argument(format!("unknown window attribute {attrib:#x}")))
}

fn size_limit(width: c_int, height: c_int) -> RaResult<Option<(u32, u32)>> {
    if width == RA_DONT_CARE || height == RA_DONT_CARE {
        return Ok(None);
    }
    Ok(Some((
        dimension(width, "limit width")?,
        dimension(height, "limit height")?,
    )))
}

/// Borrows the window behind a handle.
///
/// # Safety
/// `window` must be null or a live window handle.
unsafe fn window<'a>(window: *mut RaWindow) -> RaResult<&'a mut RaWindow> {
    // SAFETY: forwarded from the caller.
    unsafe { handle(window, "window") }
}

/// Declares an exported function taking only a window handle.
macro_rules! window_op {
    ($(#[$meta:meta])* $name:ident => $method:ident) => {
        $(#[$meta])*
        ///
        /// # Safety
        /// `window` must be null or a live window handle.
        #[no_mangle]
        pub unsafe extern "C" fn $name(window: *mut RaWindow) -> HRESULT {
            // SAFETY: forwarded from the caller.
            guard(stringify!($name), || unsafe { self::window(window) }?.$method())
        }
    };
}

// ─── Lifetime ───────────────────────────────────────────────────────────────

window_op!(
    /// Releases the window's canvas, hides the window and flags it for closing.
    RaWindow_Destroy => destroy
);

/// Writes whether the window has been asked to close.
///
/// # Safety
/// `window` must be null or a live window handle; `out` must be valid for a write.
#[no_mangle]
pub unsafe extern "C" fn RaWindow_ShouldClose(window: *mut RaWindow, out: *mut c_int) -> HRESULT {
    guard("RaWindow_ShouldClose", || {
        // SAFETY: forwarded from the caller.
        let value = unsafe { self::window(window) }?.should_close()?;
        // SAFETY: forwarded from the caller.
        unsafe { write_out(out, c_int::from(value), "result") }
    })
}

/// Sets or clears the close flag.
///
/// # Safety
/// `window` must be null or a live window handle.
#[no_mangle]
pub unsafe extern "C" fn RaWindow_SetShouldClose(window: *mut RaWindow, value: c_int) -> HRESULT {
    guard("RaWindow_SetShouldClose", || {
        // SAFETY: forwarded from the caller.
        unsafe { self::window(window) }?.set_should_close(value != 0)
    })
}

// ─── Geometry ───────────────────────────────────────────────────────────────

/// Sets the window title from a UTF-8 string.
///
/// # Safety
/// `window` must be null or a live window handle; `title` must be null or NUL-terminated.
#[no_mangle]
pub unsafe extern "C" fn RaWindow_SetTitle(window: *mut RaWindow, title: *const c_char) -> HRESULT {
    guard("RaWindow_SetTitle", || {
        // SAFETY: forwarded from the caller.
        let window = unsafe { self::window(window) }?;
        // SAFETY: forwarded from the caller.
        window.set_title(unsafe { c_str(title, "title") }?)
    })
}

/// Writes the position of the content area's top-left corner.
///
/// # Safety
/// `window` must be null or a live window handle; `x` and `y` must be valid for writes.
#[no_mangle]
pub unsafe extern "C" fn RaWindow_GetPos(
    window: *mut RaWindow,
    x: *mut c_int,
    y: *mut c_int,
) -> HRESULT {
    guard("RaWindow_GetPos", || {
        // SAFETY: forwarded from the caller.
        let (px, py) = unsafe { self::window(window) }?.get_pos()?;
        // SAFETY: forwarded from the caller.
        unsafe {
            write_out(x, px, "x")?;
            write_out(y, py, "y")
        }
    })
}

/// Moves the content area's top-left corner.
///
/// # Safety
/// `window` must be null or a live window handle.
#[no_mangle]
pub unsafe extern "C" fn RaWindow_SetPos(window: *mut RaWindow, x: c_int, y: c_int) -> HRESULT {
    // SAFETY: forwarded from the caller.
    guard("RaWindow_SetPos", || unsafe { self::window(window) }?.set_pos(x, y))
}

/// Writes the content area size in screen coordinates.
///
/// # Safety
/// `window` must be null or a live window handle; `width` and `height` must be valid for writes.
#[no_mangle]
pub unsafe extern "C" fn RaWindow_GetSize(
    window: *mut RaWindow,
    width: *mut c_int,
    height: *mut c_int,
) -> HRESULT {
    guard("RaWindow_GetSize", || {
        // SAFETY: forwarded from the caller.
        let (w, h) = unsafe { self::window(window) }?.get_size()?;
        // SAFETY: forwarded from the caller.
        unsafe {
            write_out(width, to_c_int(w), "width")?;
            write_out(height, to_c_int(h), "height")
        }
    })
}

/// Resizes the content area.
///
/// # Safety
/// `window` must be null or a live window handle.
#[no_mangle]
pub unsafe extern "C" fn RaWindow_SetSize(
    window: *mut RaWindow,
    width: c_int,
    height: c_int,
) -> HRESULT {
    guard("RaWindow_SetSize", || {
        // SAFETY: forwarded from the caller.
        let window = unsafe { self::window(window) }?;
        window.set_size(dimension(width, "width")?, dimension(height, "height")?)
    })
}

/// Sets the minimum and maximum content area size. `RA_DONT_CARE` in either
/// value of a pair leaves that bound unset.
///
/// # Safety
/// `window` must be null or a live window handle.
#[no_mangle]
pub unsafe extern "C" fn RaWindow_SetSizeLimits(
    window: *mut RaWindow,
    min_width: c_int,
    min_height: c_int,
    max_width: c_int,
    max_height: c_int,
) -> HRESULT {
    guard("RaWindow_SetSizeLimits", || {
        // SAFETY: forwarded from the caller.
        let window = unsafe { self::window(window) }?;
        window.set_size_limits(
            size_limit(min_width, min_height)?,
            size_limit(max_width, max_height)?,
        )
    })
}

/// Writes the framebuffer size in pixels.
///
/// # Safety
/// `window` must be null or a live window handle; `width` and `height` must be valid for writes.
#[no_mangle]
pub unsafe extern "C" fn RaWindow_GetFramebufferSize(
    window: *mut RaWindow,
    width: *mut c_int,
    height: *mut c_int,
) -> HRESULT {
    guard("RaWindow_GetFramebufferSize", || {
        // SAFETY: forwarded from the caller.
        let (w, h) = unsafe { self::window(window) }?.get_framebuffer_size()?;
        // SAFETY: forwarded from the caller.
        unsafe {
            write_out(width, to_c_int(w), "width")?;
            write_out(height, to_c_int(h), "height")
        }
    })
}

/// Writes the content scale on both axes.
///
/// # Safety
/// `window` must be null or a live window handle; `x` and `y` must be valid for writes.
#[no_mangle]
pub unsafe extern "C" fn RaWindow_GetContentScale(
    window: *mut RaWindow,
    x: *mut f32,
    y: *mut f32,
) -> HRESULT {
    guard("RaWindow_GetContentScale", || {
        // SAFETY: forwarded from the caller.
        let (sx, sy) = unsafe { self::window(window) }?.get_content_scale()?;
        // SAFETY: forwarded from the caller.
        unsafe {
            write_out(x, sx, "x scale")?;
            write_out(y, sy, "y scale")
        }
    })
}

// ─── State ──────────────────────────────────────────────────────────────────

window_op!(
    /// Minimizes the window.
    RaWindow_Iconify => iconify
);
window_op!(
    /// Restores a minimized or maximized window.
    RaWindow_Restore => restore
);
window_op!(
    /// Maximizes the window.
    RaWindow_Maximize => maximize
);
window_op!(
    /// Makes the window visible.
    RaWindow_Show => show
);
window_op!(
    /// Hides the window.
    RaWindow_Hide => hide
);
window_op!(
    /// Brings the window to front and gives it input focus.
    RaWindow_Focus => focus
);
window_op!(
    /// Asks the user's attention for the window.
    RaWindow_RequestAttention => request_attention
);
window_op!(
    /// Presents the queued draws.
    RaWindow_SwapBuffers => swap_buffers
);

/// Writes the value of a `RA_*` window attribute as `0`/`1`.
///
/// # Safety
/// `window` must be null or a live window handle; `out` must be valid for a write.
#[no_mangle]
pub unsafe extern "C" fn RaWindow_GetAttrib(
    window: *mut RaWindow,
    attrib: c_int,
    out: *mut c_int,
) -> HRESULT {
    guard("RaWindow_GetAttrib", || {
        // SAFETY: forwarded from the caller.
        let window = unsafe { self::window(window) }?;
        let value = window.get_attrib(attrib_from_c(attrib)?)?;
        // SAFETY: forwarded from the caller.
        unsafe { write_out(out, c_int::from(value), "attribute value") }
    })
}

/// Sets a `RA_*` window attribute; any non-zero `value` enables it.
///
/// # Safety
/// `window` must be null or a live window handle.
#[no_mangle]
pub unsafe extern "C" fn RaWindow_SetAttrib(
    window: *mut RaWindow,
    attrib: c_int,
    value: c_int,
) -> HRESULT {
    guard("RaWindow_SetAttrib", || {
        // SAFETY: forwarded from the caller.
        let window = unsafe { self::window(window) }?;
        window.set_attrib(attrib_from_c(attrib)?, value != 0)
    })
}

// ─── Input ──────────────────────────────────────────────────────────────────

/// Writes the last state of a key, named by its physical key code (`"KeyA"`, `"Space"`, ...).
///
/// # Safety
/// `window` must be null or a live window handle; `key` must be null or
/// NUL-terminated; `out` must be valid for a write.
#[no_mangle]
pub unsafe extern "C" fn RaWindow_GetKey(
    window: *mut RaWindow,
    key: *const c_char,
    out: *mut c_int,
) -> HRESULT {
    guard("RaWindow_GetKey", || {
        // SAFETY: forwarded from the caller.
        let window = unsafe { self::window(window) }?;
        // SAFETY: forwarded from the caller.
        let action = window.get_key(unsafe { c_str(key, "key") }?)?;
        // SAFETY: forwarded from the caller.
        unsafe { write_out(out, action_to_c(action), "key state") }
    })
}

/// Writes the last state of a mouse button (`0` left, `1` right, `2` middle).
///
/// # Safety
/// `window` must be null or a live window handle; `out` must be valid for a write.
#[no_mangle]
pub unsafe extern "C" fn RaWindow_GetMouseButton(
    window: *mut RaWindow,
    button: c_int,
    out: *mut c_int,
) -> HRESULT {
    guard("RaWindow_GetMouseButton", || {
        // SAFETY: forwarded from the caller.
        let window = unsafe { self::window(window) }?;
        let action = window.get_mouse_button(mouse_button_from_c(button)?)?;
        // SAFETY: forwarded from the caller.
        unsafe { write_out(out, action_to_c(action), "button state") }
    })
}

/// Writes the last cursor position relative to the content area.
///
/// # Safety
/// `window` must be null or a live window handle; `x` and `y` must be valid for writes.
#[no_mangle]
pub unsafe extern "C" fn RaWindow_GetCursorPos(
    window: *mut RaWindow,
    x: *mut f64,
    y: *mut f64,
) -> HRESULT {
    guard("RaWindow_GetCursorPos", || {
        // SAFETY: forwarded from the caller.
        let (cx, cy) = unsafe { self::window(window) }?.get_cursor_pos()?;
        // SAFETY: forwarded from the caller.
        unsafe {
            write_out(x, cx, "x")?;
            write_out(y, cy, "y")
        }
    })
}

/// Warps the cursor to a position relative to the content area.
///
/// # Safety
/// `window` must be null or a live window handle.
#[no_mangle]
pub unsafe extern "C" fn RaWindow_SetCursorPos(window: *mut RaWindow, x: f64, y: f64) -> HRESULT {
    guard("RaWindow_SetCursorPos", || {
        // SAFETY: forwarded from the caller.
        unsafe { self::window(window) }?.set_cursor_pos(x, y)
    })
}

// ─── Not implemented ────────────────────────────────────────────────────────
// These always return E_NOTIMPL and leave their out-parameters untouched.

/// Not implemented.
///
/// # Safety
/// `window` must be null or a live window handle.
#[no_mangle]
pub unsafe extern "C" fn RaWindow_SetAspectRatio(
    window: *mut RaWindow,
    numer: c_int,
    denom: c_int,
) -> HRESULT {
    guard("RaWindow_SetAspectRatio", || {
        // SAFETY: forwarded from the caller.
        unsafe { self::window(window) }?.set_aspect_ratio(numer, denom)
    })
}

/// Not implemented.
///
/// # Safety
/// `window` must be null or a live window handle.
#[no_mangle]
pub unsafe extern "C" fn RaWindow_GetFrameSize(
    window: *mut RaWindow,
    left: *mut c_int,
    top: *mut c_int,
    right: *mut c_int,
    bottom: *mut c_int,
) -> HRESULT {
    guard("RaWindow_GetFrameSize", || {
        // SAFETY: forwarded from the caller.
        let (l, t, r, b) = unsafe { self::window(window) }?.get_frame_size()?;
        // SAFETY: forwarded from the caller.
        unsafe {
            write_out(left, l, "left")?;
            write_out(top, t, "top")?;
            write_out(right, r, "right")?;
            write_out(bottom, b, "bottom")
        }
    })
}

/// Not implemented.
///
/// # Safety
/// `window` must be null or a live window handle.
#[no_mangle]
pub unsafe extern "C" fn RaWindow_GetOpacity(window: *mut RaWindow, out: *mut f32) -> HRESULT {
    guard("RaWindow_GetOpacity", || {
        // SAFETY: forwarded from the caller.
        let opacity = unsafe { self::window(window) }?.get_opacity()?;
        // SAFETY: forwarded from the caller.
        unsafe { write_out(out, opacity, "opacity") }
    })
}

/// Not implemented.
///
/// # Safety
/// `window` must be null or a live window handle.
#[no_mangle]
pub unsafe extern "C" fn RaWindow_SetOpacity(window: *mut RaWindow, opacity: f32) -> HRESULT {
    guard("RaWindow_SetOpacity", || {
        // SAFETY: forwarded from the caller.
        unsafe { self::window(window) }?.set_opacity(opacity)
    })
}

/// Not implemented.
///
/// # Safety
/// `window` must be null or a live window handle.
#[no_mangle]
pub unsafe extern "C" fn RaWindow_GetInputMode(
    window: *mut RaWindow,
    mode: c_int,
    out: *mut c_int,
) -> HRESULT {
    guard("RaWindow_GetInputMode", || {
        // SAFETY: forwarded from the caller.
        let value = unsafe { self::window(window) }?.get_input_mode(mode)?;
        // SAFETY: forwarded from the caller.
        unsafe { write_out(out, value, "input mode") }
    })
}

/// Not implemented.
///
/// # Safety
/// `window` must be null or a live window handle.
#[no_mangle]
pub unsafe extern "C" fn RaWindow_SetInputMode(
    window: *mut RaWindow,
    mode: c_int,
    value: c_int,
) -> HRESULT {
    guard("RaWindow_SetInputMode", || {
        // SAFETY: forwarded from the caller.
        unsafe { self::window(window) }?.set_input_mode(mode, value)
    })
}

/// Not implemented.
///
/// # Safety
/// `out` must be valid for a write.
#[no_mangle]
pub unsafe extern "C" fn RaWindow_RawMouseMotionSupported(out: *mut c_int) -> HRESULT {
    guard("RaWindow_RawMouseMotionSupported", || {
        let supported = RaWindow::raw_mouse_motion_supported()?;
        // SAFETY: forwarded from the caller.
        unsafe { write_out(out, c_int::from(supported), "result") }
    })
}

/// Not implemented.
///
/// # Safety
/// `out` must be valid for a write.
#[no_mangle]
pub unsafe extern "C" fn RaWindow_GetKeyName(
    key: c_int,
    scancode: c_int,
    out: *mut *const c_char,
) -> HRESULT {
    guard("RaWindow_GetKeyName", || {
        let _name = RaWindow::get_key_name(key, scancode)?;
        // SAFETY: forwarded from the caller.
        unsafe { write_out(out, std::ptr::null(), "key name") }
    })
}

/// Not implemented.
///
/// # Safety
/// `out` must be valid for a write.
#[no_mangle]
pub unsafe extern "C" fn RaWindow_GetKeyScancode(key: c_int, out: *mut c_int) -> HRESULT {
    guard("RaWindow_GetKeyScancode", || {
        let scancode = RaWindow::get_key_scancode(key)?;
        // SAFETY: forwarded from the caller.
        unsafe { write_out(out, scancode, "scancode") }
    })
}

/// Not implemented.
///
/// # Safety
/// `window` must be null or a live window handle; `text` must be null or NUL-terminated.
#[no_mangle]
pub unsafe extern "C" fn RaWindow_SetClipboardString(
    window: *mut RaWindow,
    text: *const c_char,
) -> HRESULT {
    guard("RaWindow_SetClipboardString", || {
        // SAFETY: forwarded from the caller.
        let window = unsafe { self::window(window) }?;
        // SAFETY: forwarded from the caller.
        window.set_clipboard_string(unsafe { c_str(text, "clipboard text") }?)
    })
}

window_op!(
    /// Not implemented.
    RaWindow_MakeContextCurrent => make_context_current
);

/// Not implemented.
///
/// # Safety
/// `out` must be valid for a write.
#[no_mangle]
pub unsafe extern "C" fn RaWindow_GetCurrent(out: *mut *mut RaWindow) -> HRESULT {
    guard("RaWindow_GetCurrent", || {
        let _current = RaWindow::get_current()?;
        // SAFETY: forwarded from the caller.
        unsafe { write_out(out, std::ptr::null_mut(), "window") }
    })
}

/// Not implemented.
#[no_mangle]
pub extern "C" fn RaWindow_SwapInterval(interval: c_int) -> HRESULT {
    guard("RaWindow_SwapInterval", || RaWindow::swap_interval(interval))
}

/// Not implemented.
///
/// # Safety
/// `extension` must be null or NUL-terminated; `out` must be valid for a write.
#[no_mangle]
pub unsafe extern "C" fn RaWindow_ExtensionSupported(
    extension: *const c_char,
    out: *mut c_int,
) -> HRESULT {
    guard("RaWindow_ExtensionSupported", || {
        // SAFETY: forwarded from the caller.
        let extension = unsafe { c_str(extension, "extension") }?;
        let supported = RaWindow::extension_supported(extension)?;
        // SAFETY: forwarded from the caller.
        unsafe { write_out(out, c_int::from(supported), "result") }
    })
}

/// Not implemented.
///
/// # Safety
/// `window` must be null or a live window handle.
#[no_mangle]
pub unsafe extern "C" fn RaWindow_SetUserPointer(
    window: *mut RaWindow,
    _pointer: *mut c_void,
) -> HRESULT {
    guard("RaWindow_SetUserPointer", || {
        // SAFETY: forwarded from the caller.
        unsafe { self::window(window) }?;
        Err(RaError::not_implemented("RaWindow_SetUserPointer"))
    })
}

/// Not implemented.
///
/// # Safety
/// `window` must be null or a live window handle.
#[no_mangle]
pub unsafe extern "C" fn RaWindow_GetUserPointer(
    window: *mut RaWindow,
    _out: *mut *mut c_void,
) -> HRESULT {
    guard("RaWindow_GetUserPointer", || {
        // SAFETY: forwarded from the caller.
        unsafe { self::window(window) }?;
        Err(RaError::not_implemented("RaWindow_GetUserPointer"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use radium_core::error::{E_INVALIDARG, E_NOTIMPL};
    use std::ptr;

    #[test]
    fn test_mouse_button_mapping() {
        assert_eq!(mouse_button_from_c(0).unwrap(), MouseButton::Left);
        assert_eq!(mouse_button_from_c(2).unwrap(), MouseButton::Middle);
        assert_eq!(mouse_button_from_c(7).unwrap(), MouseButton::Other(7));
        assert!(mouse_button_from_c(-1).is_err());
    }

    #[test]
    fn test_size_limit_dont_care() {
        assert_eq!(size_limit(RA_DONT_CARE, 100).unwrap(), None);
        assert_eq!(size_limit(320, 240).unwrap(), Some((320, 240)));
        assert!(size_limit(-5, 240).is_err());
    }

    #[test]
    fn test_unknown_attribute_is_invalid() {
        assert_eq!(attrib_from_c(RA_RESIZABLE).unwrap(), WindowAttrib::Resizable);
        assert!(attrib_from_c(0x1234).is_err());
    }

    #[test]
    fn test_null_window_handles() {
        let w = ptr::null_mut();
        let mut i = 0;
        let mut f = 0.0_f32;
        let (mut x, mut y) = (0, 0);
        unsafe {
            assert_eq!(RaWindow_Destroy(w), E_INVALIDARG);
            assert_eq!(RaWindow_ShouldClose(w, &mut i), E_INVALIDARG);
            assert_eq!(RaWindow_SetShouldClose(w, 1), E_INVALIDARG);
            assert_eq!(RaWindow_GetPos(w, &mut x, &mut y), E_INVALIDARG);
            assert_eq!(RaWindow_SetSize(w, 10, 10), E_INVALIDARG);
            assert_eq!(RaWindow_Iconify(w), E_INVALIDARG);
            assert_eq!(RaWindow_SwapBuffers(w), E_INVALIDARG);
            assert_eq!(RaWindow_GetAttrib(w, RA_FOCUSED, &mut i), E_INVALIDARG);
            assert_eq!(RaWindow_GetOpacity(w, &mut f), E_INVALIDARG);
            assert_eq!(RaWindow_SetUserPointer(w, ptr::null_mut()), E_INVALIDARG);
            assert_eq!(RaWindow_MakeContextCurrent(w), E_INVALIDARG);
        }
    }

    #[test]
    fn test_windowless_stubs_are_not_implemented() {
        let mut value = 42;
        let mut name: *const c_char = ptr::null();
        let mut current: *mut RaWindow = ptr::null_mut();
        unsafe {
            assert_eq!(RaWindow_RawMouseMotionSupported(&mut value), E_NOTIMPL);
            assert_eq!(RaWindow_GetKeyScancode(65, &mut value), E_NOTIMPL);
            assert_eq!(RaWindow_GetKeyName(65, 0, &mut name), E_NOTIMPL);
            assert_eq!(RaWindow_GetCurrent(&mut current), E_NOTIMPL);
            assert_eq!(
                RaWindow_ExtensionSupported(c"GL_ARB_debug_output".as_ptr(), &mut value),
                E_NOTIMPL
            );
        }
        assert_eq!(RaWindow_SwapInterval(1), E_NOTIMPL);
        assert_eq!(value, 42);
    }
}
