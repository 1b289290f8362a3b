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

mod common;

use common::headless_window;
use radium_capi::*;
use radium_core::Canvas;
use std::ffi::{c_char, c_int};
use std::ptr;
use std::sync::atomic::Ordering;

fn last_message() -> String {
    let mut buffer = [0 as c_char; 128];
    unsafe { Ra_GetLastError(buffer.as_mut_ptr(), buffer.len()) };
    unsafe { std::ffi::CStr::from_ptr(buffer.as_ptr()) }
        .to_string_lossy()
        .into_owned()
}

// ─── Window ─────────────────────────────────────────────────────────────────

#[test]
fn test_window_geometry_through_handles() {
    let (mut window, native, _display) = headless_window(640, 480);
    let w: *mut _ = &mut *window;

    let (mut width, mut height): (c_int, c_int) = (0, 0);
    unsafe {
        assert_eq!(RaWindow_GetFramebufferSize(w, &mut width, &mut height), S_OK);
        assert_eq!((width, height), (640, 480));

        assert_eq!(RaWindow_SetSize(w, 320, 200), S_OK);
        assert_eq!(RaWindow_GetSize(w, &mut width, &mut height), S_OK);
    }
    assert_eq!((width, height), (320, 200));
    assert_eq!(*native.size.lock().unwrap(), (320, 200));

    let (mut sx, mut sy) = (0.0_f32, 0.0_f32);
    assert_eq!(unsafe { RaWindow_GetContentScale(w, &mut sx, &mut sy) }, S_OK);
    assert_eq!((sx, sy), (2.0, 2.0));
}

#[test]
fn test_negative_size_is_invalid_argument() {
    let (mut window, native, _display) = headless_window(640, 480);
    let w: *mut _ = &mut *window;

    assert_eq!(unsafe { RaWindow_SetSize(w, -1, 100) }, E_INVALIDARG);
    assert_eq!(*native.size.lock().unwrap(), (640, 480));
    assert!(last_message().contains("width"));
}

#[test]
fn test_unreported_position_is_fail() {
    let (mut window, _native, _display) = headless_window(64, 64);
    let (mut x, mut y) = (-7, -7);
    assert_eq!(unsafe { RaWindow_GetPos(&mut *window, &mut x, &mut y) }, E_FAIL);
    assert_eq!((x, y), (-7, -7));
}

#[test]
fn test_title_and_visibility() {
    let (mut window, native, _display) = headless_window(64, 64);
    let w: *mut _ = &mut *window;

    let mut visible = -1;
    unsafe {
        assert_eq!(RaWindow_SetTitle(w, c"Viewer".as_ptr()), S_OK);
        assert_eq!(RaWindow_SetTitle(w, ptr::null()), E_INVALIDARG);
        assert_eq!(RaWindow_Hide(w), S_OK);
        assert_eq!(RaWindow_GetAttrib(w, RA_VISIBLE, &mut visible), S_OK);
    }
    assert_eq!(*native.title.lock().unwrap(), "Viewer");
    assert_eq!(visible, 0);
}

#[test]
fn test_attributes() {
    let (mut window, _native, _display) = headless_window(64, 64);
    let w: *mut _ = &mut *window;

    let mut value = -1;
    unsafe {
        assert_eq!(RaWindow_GetAttrib(w, RA_FOCUSED, &mut value), S_OK);
        assert_eq!(value, 1);
        assert_eq!(RaWindow_GetAttrib(w, RA_HOVERED, &mut value), E_NOTIMPL);
        assert_eq!(RaWindow_GetAttrib(w, 0x7fff, &mut value), E_INVALIDARG);
        assert_eq!(RaWindow_SetAttrib(w, RA_RESIZABLE, 0), S_OK);
        assert_eq!(RaWindow_SetAttrib(w, RA_MAXIMIZED, 1), E_NOTIMPL);
    }
    assert_eq!(value, 1);
}

#[test]
fn test_should_close_round_trip() {
    let (mut window, _native, _display) = headless_window(64, 64);
    let w: *mut _ = &mut *window;

    let mut flag = -1;
    unsafe {
        assert_eq!(RaWindow_ShouldClose(w, &mut flag), S_OK);
        assert_eq!(flag, 0);
        assert_eq!(RaWindow_SetShouldClose(w, 1), S_OK);
        assert_eq!(RaWindow_ShouldClose(w, &mut flag), S_OK);
    }
    assert_eq!(flag, 1);
}

#[test]
fn test_untracked_input_reads_as_released() {
    let (mut window, _native, _display) = headless_window(64, 64);
    let w: *mut _ = &mut *window;

    let (mut key, mut button) = (-1, -1);
    let (mut x, mut y) = (-1.0, -1.0);
    unsafe {
        assert_eq!(RaWindow_GetKey(w, c"KeyA".as_ptr(), &mut key), S_OK);
        assert_eq!(RaWindow_GetMouseButton(w, 0, &mut button), S_OK);
        assert_eq!(RaWindow_GetCursorPos(w, &mut x, &mut y), S_OK);
    }
    assert_eq!((key, button), (RA_RELEASE, RA_RELEASE));
    assert_eq!((x, y), (0.0, 0.0));
}

#[test]
fn test_window_stubs_are_not_implemented_and_leave_outputs() {
    let (mut window, native, _display) = headless_window(64, 64);
    let w: *mut _ = &mut *window;

    let mut opacity = 0.5_f32;
    let mut mode = 9;
    let (mut l, mut t, mut r, mut b) = (1, 2, 3, 4);
    unsafe {
        assert_eq!(RaWindow_SetAspectRatio(w, 16, 9), E_NOTIMPL);
        assert_eq!(RaWindow_GetFrameSize(w, &mut l, &mut t, &mut r, &mut b), E_NOTIMPL);
        assert_eq!(RaWindow_GetOpacity(w, &mut opacity), E_NOTIMPL);
        assert_eq!(RaWindow_SetOpacity(w, 0.25), E_NOTIMPL);
        assert_eq!(RaWindow_GetInputMode(w, 0x0003_3001, &mut mode), E_NOTIMPL);
        assert_eq!(RaWindow_SetInputMode(w, 0x0003_3001, 1), E_NOTIMPL);
        assert_eq!(RaWindow_SetClipboardString(w, c"copied".as_ptr()), E_NOTIMPL);
        assert_eq!(RaWindow_MakeContextCurrent(w), E_NOTIMPL);
        assert_eq!(RaWindow_SetUserPointer(w, ptr::null_mut()), E_NOTIMPL);
        let mut user = ptr::null_mut();
        assert_eq!(RaWindow_GetUserPointer(w, &mut user), E_NOTIMPL);
    }

    assert_eq!(opacity, 0.5);
    assert_eq!(mode, 9);
    assert_eq!((l, t, r, b), (1, 2, 3, 4));
    assert_eq!(*native.title.lock().unwrap(), "Radium");
    assert_eq!(Ra_GetLastErrorCode(), E_NOTIMPL);
    assert_eq!(last_message(), "not implemented");
}

// ─── Canvas ─────────────────────────────────────────────────────────────────

#[test]
fn test_canvas_draw_cycle_through_handles() {
    let (mut window, _native, display) = headless_window(4, 2);
    let w: *mut _ = &mut *window;

    let mut canvas: *mut Canvas = ptr::null_mut();
    assert_eq!(unsafe { RaCanvas_CreateForWindow(w, &mut canvas) }, S_OK);
    assert!(!canvas.is_null());

    let mut info = RaSurfaceInfo {
        data: ptr::null_mut(),
        width: 0,
        height: 0,
        stride: 0,
    };
    assert_eq!(unsafe { RaCanvas_Surface(canvas, &mut info) }, S_OK);
    assert_eq!((info.width, info.height, info.stride), (4, 2, 16));

    // Paint the first pixel opaque red straight through the surface memory.
    let pixels = unsafe { std::slice::from_raw_parts_mut(info.data, 32) };
    pixels[..4].copy_from_slice(&[255, 0, 0, 255]);

    unsafe {
        assert_eq!(RaCanvas_Flush(canvas), S_OK);
        assert_eq!(RaCanvas_Draw(canvas), S_OK);
        assert_eq!(RaWindow_SwapBuffers(w), S_OK);
    }

    let uploaded = display.only_texture_data();
    assert_eq!(&uploaded[..4], &[255, 0, 0, 255]);
    assert!(uploaded[4..].iter().all(|&byte| byte == 0));
    assert_eq!(display.draws.load(Ordering::Relaxed), 1);
    assert_eq!(display.presents.load(Ordering::Relaxed), 1);
}

#[test]
fn test_recreating_a_canvas_releases_the_previous_one() {
    let (mut window, _native, display) = headless_window(8, 8);
    let w: *mut _ = &mut *window;

    let mut canvas: *mut Canvas = ptr::null_mut();
    unsafe {
        assert_eq!(RaCanvas_CreateForWindow(w, &mut canvas), S_OK);
        assert_eq!(RaCanvas_CreateForWindow(w, &mut canvas), S_OK);
    }
    assert_eq!(display.live_textures(), 1);

    assert_eq!(unsafe { RaWindow_Destroy(w) }, S_OK);
    assert_eq!(display.live_textures(), 0);
}

#[test]
fn test_null_canvas_handles() {
    let mut info = RaSurfaceInfo {
        data: ptr::null_mut(),
        width: 0,
        height: 0,
        stride: 0,
    };
    unsafe {
        assert_eq!(RaCanvas_Surface(ptr::null_mut(), &mut info), E_INVALIDARG);
        assert_eq!(RaCanvas_Flush(ptr::null_mut()), E_INVALIDARG);
        assert_eq!(RaCanvas_Draw(ptr::null_mut()), E_INVALIDARG);
        let mut canvas = ptr::null_mut();
        assert_eq!(RaCanvas_CreateForWindow(ptr::null_mut(), &mut canvas), E_INVALIDARG);
    }
    assert_eq!(last_message(), "null window handle");
}
