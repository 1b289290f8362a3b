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

//! Pointer and result plumbing shared by every exported function.

use crate::HRESULT;
use radium_core::error::{set_last_error, to_hresult, RaError, RaResult};
use std::ffi::{c_char, CStr};
use std::panic::{self, AssertUnwindSafe};

/// Runs `body` and converts its outcome to an HRESULT.
///
/// Errors are recorded as the thread's last error. A panic is caught at the
/// boundary and reported as `E_FAIL`.
pub(crate) fn guard<F>(name: &'static str, body: F) -> HRESULT
where
    F: FnOnce() -> RaResult<()>,
{
    match panic::catch_unwind(AssertUnwindSafe(body)) {
        Ok(result) => to_hresult(result),
        Err(_) => {
            log::error!("{name}: panicked");
            let err = RaError::fail(format!("{name}: internal panic"));
            set_last_error(&err);
            err.hresult()
        }
    }
}

/// Borrows the object behind a handle.
///
/// # Safety
/// `ptr` must be null or point to a live `T` not aliased for `'a`.
pub(crate) unsafe fn handle<'a, T>(ptr: *mut T, what: &'static str) -> RaResult<&'a mut T> {
    // SAFETY: upheld by the caller.
    unsafe { ptr.as_mut() }.ok_or_else(|| RaError::invalid_argument(format!("null {what} handle")))
}

/// Writes `value` through an out-parameter.
///
/// # Safety
/// `ptr` must be null or valid for a write of `T`.
pub(crate) unsafe fn write_out<T>(ptr: *mut T, value: T, what: &'static str) -> RaResult<()> {
    if ptr.is_null() {
        return Err(RaError::invalid_argument(format!("null {what} pointer")));
    }
    // SAFETY: non-null and valid per the caller.
    unsafe { ptr.write(value) };
    Ok(())
}

/// Reads a NUL-terminated UTF-8 string.
///
/// # Safety
/// `ptr` must be null or point to a NUL-terminated string alive for `'a`.
pub(crate) unsafe fn c_str<'a>(ptr: *const c_char, what: &'static str) -> RaResult<&'a str> {
    if ptr.is_null() {
        return Err(RaError::invalid_argument(format!("null {what} string")));
    }
    // SAFETY: non-null and NUL-terminated per the caller.
    unsafe { CStr::from_ptr(ptr) }
        .to_str()
        .map_err(|e| RaError::invalid_argument(format!("{what} is not valid UTF-8: {e}")))
}

/// Converts a C `int` dimension, rejecting negative values.
pub(crate) fn dimension(value: i32, what: &'static str) -> RaResult<u32> {
    u32::try_from(value)
        .map_err(|_| RaError::invalid_argument(format!("{what} must not be negative, got {value}")))
}

/// Converts a native dimension back to a C `int`, saturating.
pub(crate) fn to_c_int(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}
