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

//! `RaCanvas_*`: the drawing surface attached to a window.
//!
//! A canvas handle is owned by its window. It stays valid until the next
//! [`RaCanvas_CreateForWindow`] on the same window, `RaWindow_Destroy`, or the
//! destruction of the application.

use crate::ffi::{guard, handle, write_out};
use crate::HRESULT;
use radium_core::{Canvas, RaWindow};

/// Pixel memory of a canvas surface, as seen from C.
///
/// Pixels are top-down rows of premultiplied RGBA, four bytes each. The
/// memory belongs to the canvas.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct RaSurfaceInfo {
    /// First byte of the first row.
    pub data: *mut u8,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Bytes between the starts of two consecutive rows.
    pub stride: u32,
}

/// Creates a canvas sized to the window's framebuffer and stores its handle
/// in `out`. Any previous canvas of the window is released.
///
/// # Safety
/// `window` must be null or a live window handle; `out` must be valid for a write.
#[no_mangle]
pub unsafe extern "C" fn RaCanvas_CreateForWindow(
    window: *mut RaWindow,
    out: *mut *mut Canvas,
) -> HRESULT {
    guard("RaCanvas_CreateForWindow", || {
        if out.is_null() {
            return Err(radium_core::RaError::invalid_argument("null canvas pointer"));
        }
        // SAFETY: forwarded from the caller.
        let window = unsafe { handle(window, "window") }?;
        let canvas: *mut Canvas = Canvas::create_for_window(window)?;
        // SAFETY: forwarded from the caller.
        unsafe { write_out(out, canvas, "canvas") }
    })
}

/// Describes the canvas's pixel memory for direct drawing.
///
/// # Safety
/// `canvas` must be null or a live canvas handle; `out` must be valid for a write.
#[no_mangle]
pub unsafe extern "C" fn RaCanvas_Surface(canvas: *mut Canvas, out: *mut RaSurfaceInfo) -> HRESULT {
    guard("RaCanvas_Surface", || {
        // SAFETY: forwarded from the caller.
        let canvas = unsafe { handle(canvas, "canvas") }?;
        let (width, height) = canvas.size();
        let info = RaSurfaceInfo {
            data: canvas.surface_mut().data_mut().as_mut_ptr(),
            width,
            height,
            stride: width * 4,
        };
        // SAFETY: forwarded from the caller.
        unsafe { write_out(out, info, "surface info") }
    })
}

/// Uploads the whole surface to the canvas texture.
///
/// # Safety
/// `canvas` must be null or a live canvas handle.
#[no_mangle]
pub unsafe extern "C" fn RaCanvas_Flush(canvas: *mut Canvas) -> HRESULT {
    // SAFETY: forwarded from the caller.
    guard("RaCanvas_Flush", || unsafe { handle(canvas, "canvas") }?.flush())
}

/// Queues the canvas for the current frame. Does not swap buffers.
///
/// # Safety
/// `canvas` must be null or a live canvas handle.
#[no_mangle]
pub unsafe extern "C" fn RaCanvas_Draw(canvas: *mut Canvas) -> HRESULT {
    // SAFETY: forwarded from the caller.
    guard("RaCanvas_Draw", || unsafe { handle(canvas, "canvas") }?.draw())
}
