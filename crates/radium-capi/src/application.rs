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

//! `RaApplication_*`: lifetime and event loop of the application.

use crate::ffi::{guard, handle, write_out};
use crate::HRESULT;
use radium_core::error::RaError;
use radium_core::{PixelFormat, RaWindow};
use radium_sdk::RaApplication;
use std::ffi::{c_char, c_int, CStr};
use std::ptr;

/// Program name used when the caller passes no arguments.
const DEFAULT_PROGRAM_NAME: &str = "radium";

/// Creates an application from `argc`/`argv` and stores its handle in `out`.
///
/// # Safety
/// `argv` must hold `argc` NUL-terminated strings (or be null with `argc == 0`).
/// `out` must be valid for a write.
#[no_mangle]
pub unsafe extern "C" fn RaApplication_Create(
    argc: c_int,
    argv: *const *const c_char,
    out: *mut *mut RaApplication,
) -> HRESULT {
    guard("RaApplication_Create", || {
        if out.is_null() {
            return Err(RaError::invalid_argument("null application pointer"));
        }
        // SAFETY: `out` checked non-null above.
        unsafe { out.write(ptr::null_mut()) };

        // SAFETY: forwarded from the caller.
        let args = unsafe { collect_args(argc, argv) }?;
        let app = RaApplication::create(args)?;
        // SAFETY: `out` checked non-null above.
        unsafe { write_out(out, Box::into_raw(Box::new(app)), "application") }
    })
}

/// Destroys an application created by [`RaApplication_Create`], closing its window.
///
/// # Safety
/// `app` must come from [`RaApplication_Create`] and not be used afterwards.
#[no_mangle]
pub unsafe extern "C" fn RaApplication_Destroy(app: *mut RaApplication) -> HRESULT {
    guard("RaApplication_Destroy", || {
        if app.is_null() {
            return Err(RaError::invalid_argument("null application handle"));
        }
        // SAFETY: ownership handed back by the caller.
        drop(unsafe { Box::from_raw(app) });
        Ok(())
    })
}

/// Runs the event loop until the window should close.
///
/// # Safety
/// `app` must be null or a live application handle.
#[no_mangle]
pub unsafe extern "C" fn RaApplication_Run(app: *mut RaApplication) -> HRESULT {
    // SAFETY: forwarded from the caller.
    guard("RaApplication_Run", || unsafe { handle(app, "application") }?.run())
}

/// Processes pending events without blocking.
///
/// # Safety
/// `app` must be null or a live application handle.
#[no_mangle]
pub unsafe extern "C" fn RaApplication_PollEvents(app: *mut RaApplication) -> HRESULT {
    // SAFETY: forwarded from the caller.
    guard("RaApplication_PollEvents", || {
        unsafe { handle(app, "application") }?.poll_events()
    })
}

/// Blocks until an event arrives, then processes pending events.
///
/// # Safety
/// `app` must be null or a live application handle.
#[no_mangle]
pub unsafe extern "C" fn RaApplication_WaitEvents(app: *mut RaApplication) -> HRESULT {
    // SAFETY: forwarded from the caller.
    guard("RaApplication_WaitEvents", || {
        unsafe { handle(app, "application") }?.wait_events()
    })
}

/// Like [`RaApplication_WaitEvents`], returning after `timeout` seconds at the latest.
///
/// # Safety
/// `app` must be null or a live application handle.
#[no_mangle]
pub unsafe extern "C" fn RaApplication_WaitEventsTimeout(
    app: *mut RaApplication,
    timeout: f64,
) -> HRESULT {
    // SAFETY: forwarded from the caller.
    guard("RaApplication_WaitEventsTimeout", || {
        unsafe { handle(app, "application") }?.wait_events_timeout(timeout)
    })
}

/// Shows a raw pixel buffer of `len` bytes, bypassing the canvas.
///
/// `format` is one of the `RA_PIXEL_FORMAT_*` values.
///
/// # Safety
/// `app` must be null or a live application handle; `pixels` must be null or
/// valid for reads of `len` bytes.
#[no_mangle]
pub unsafe extern "C" fn RaApplication_SetImage(
    app: *mut RaApplication,
    width: u32,
    height: u32,
    format: u32,
    pixels: *const u8,
    len: usize,
) -> HRESULT {
    guard("RaApplication_SetImage", || {
        // SAFETY: forwarded from the caller.
        let app = unsafe { handle(app, "application") }?;
        let format = PixelFormat::from_raw(format)
            .ok_or_else(|| RaError::invalid_argument(format!("unknown pixel format {format}")))?;
        if pixels.is_null() {
            return Err(RaError::invalid_argument("null pixel buffer"));
        }
        // SAFETY: non-null and valid for `len` bytes per the caller.
        let pixels = unsafe { std::slice::from_raw_parts(pixels, len) };
        app.set_image(width, height, format, pixels)
    })
}

/// Stores the application window's handle in `out`. The handle lives as long
/// as the application.
///
/// # Safety
/// `app` must be null or a live application handle; `out` must be valid for a write.
#[no_mangle]
pub unsafe extern "C" fn RaApplication_GetWindow(
    app: *mut RaApplication,
    out: *mut *mut RaWindow,
) -> HRESULT {
    guard("RaApplication_GetWindow", || {
        // SAFETY: forwarded from the caller.
        let window: *mut RaWindow = unsafe { handle(app, "application") }?.window_mut()?;
        // SAFETY: forwarded from the caller.
        unsafe { write_out(out, window, "window") }
    })
}

/// Copies `argv` into owned strings, substituting a program name when empty.
///
/// # Safety
/// See [`RaApplication_Create`].
unsafe fn collect_args(argc: c_int, argv: *const *const c_char) -> Result<Vec<String>, RaError> {
    let count = usize::try_from(argc)
        .map_err(|_| RaError::invalid_argument(format!("negative argument count {argc}")))?;
    if count > 0 && argv.is_null() {
        return Err(RaError::invalid_argument("null argument vector"));
    }

    let mut args = Vec::with_capacity(count.max(1));
    for i in 0..count {
        // SAFETY: `argv` holds `argc` entries per the caller.
        let arg = unsafe { *argv.add(i) };
        if arg.is_null() {
            return Err(RaError::invalid_argument(format!("argument {i} is null")));
        }
        // SAFETY: NUL-terminated per the caller.
        args.push(unsafe { CStr::from_ptr(arg) }.to_string_lossy().into_owned());
    }
    if args.is_empty() {
        args.push(DEFAULT_PROGRAM_NAME.to_owned());
    }
    Ok(args)
}
