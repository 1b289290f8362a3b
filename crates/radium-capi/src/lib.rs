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

//! # Radium C API
//!
//! `extern "C"` functions over the Radium SDK, named after the native
//! windowing calls they mirror. Every function returns an [`HRESULT`]:
//! [`S_OK`] on success, [`E_INVALIDARG`] for a null handle or rejected
//! argument, [`E_NOTIMPL`] for operations without a native equivalent and
//! [`E_FAIL`] for everything else. Values are returned through
//! out-parameters, and the message of the last failure on the calling thread
//! is available from [`Ra_GetLastError`].
//!
//! Handles are plain pointers to the Rust objects. Only the application
//! handle is owned by the caller; windows and canvases belong to it.

#![allow(non_snake_case)]

pub mod application;
pub mod canvas;
pub mod error;
mod ffi;
pub mod window;

pub use application::*;
pub use canvas::*;
pub use error::*;
pub use window::*;

pub use radium_core::error::{E_FAIL, E_INVALIDARG, E_NOTIMPL, S_OK};

/// The result code of every exported function.
#[allow(clippy::upper_case_acronyms)]
pub type HRESULT = i32;

/// `RaApplication_SetImage` format: four bytes per pixel, red first.
pub const RA_PIXEL_FORMAT_RGBA8: u32 = radium_core::PixelFormat::Rgba8 as u32;
/// `RaApplication_SetImage` format: four bytes per pixel, blue first.
pub const RA_PIXEL_FORMAT_BGRA8: u32 = radium_core::PixelFormat::Bgra8 as u32;
/// `RaApplication_SetImage` format: three bytes per pixel, red first.
pub const RA_PIXEL_FORMAT_RGB8: u32 = radium_core::PixelFormat::Rgb8 as u32;
/// `RaApplication_SetImage` format: three bytes per pixel, blue first.
pub const RA_PIXEL_FORMAT_BGR8: u32 = radium_core::PixelFormat::Bgr8 as u32;
/// `RaApplication_SetImage` format: one gray byte per pixel.
pub const RA_PIXEL_FORMAT_GRAY8: u32 = radium_core::PixelFormat::Gray8 as u32;
