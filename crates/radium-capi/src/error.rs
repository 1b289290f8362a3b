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

//! `Ra_GetLastError*`: the error-query functions.

use crate::{HRESULT, S_OK};
use radium_core::error::{clear_last_error, last_error};
use std::ffi::c_char;

/// Returns the HRESULT of the last error reported on the calling thread, or
/// `S_OK` when none was.
#[no_mangle]
pub extern "C" fn Ra_GetLastErrorCode() -> HRESULT {
    last_error().map_or(S_OK, |err| err.hresult())
}

/// Copies the last error message of the calling thread into `buffer` as a
/// NUL-terminated string, truncated to `capacity` bytes.
///
/// Returns the full message length in bytes (without the terminator), so a
/// caller can retry with a larger buffer. An empty string is written when no
/// error was reported. A truncated copy never splits a UTF-8 character. A
/// null `buffer` or zero `capacity` only returns the length. This function
/// never changes the last error itself.
///
/// # Safety
/// `buffer` must be null or valid for writes of `capacity` bytes.
#[no_mangle]
pub unsafe extern "C" fn Ra_GetLastError(buffer: *mut c_char, capacity: usize) -> usize {
    let message = last_error()
        .map(|err| err.message().to_owned())
        .unwrap_or_default();
    if buffer.is_null() || capacity == 0 {
        return message.len();
    }

    let mut copied = message.len().min(capacity - 1);
    while !message.is_char_boundary(copied) {
        copied -= 1;
    }
    // SAFETY: `buffer` is valid for `capacity` bytes and `copied < capacity`.
    unsafe {
        std::ptr::copy_nonoverlapping(message.as_ptr(), buffer.cast::<u8>(), copied);
        buffer.add(copied).write(0);
    }
    message.len()
}

/// Forgets the last error of the calling thread.
#[no_mangle]
pub extern "C" fn Ra_ClearLastError() {
    clear_last_error();
}

#[cfg(test)]
mod tests {
    use super::*;
    use radium_core::error::{set_last_error, RaError, E_NOTIMPL};
    use std::ffi::CStr;

    #[test]
    fn test_no_error_reads_as_empty() {
        Ra_ClearLastError();
        assert_eq!(Ra_GetLastErrorCode(), S_OK);

        let mut buffer = [b'x' as c_char; 8];
        let len = unsafe { Ra_GetLastError(buffer.as_mut_ptr(), buffer.len()) };
        assert_eq!(len, 0);
        assert_eq!(buffer[0], 0);
    }

    #[test]
    fn test_message_is_copied_and_truncated() {
        set_last_error(&RaError::not_implemented("RaWindow_GetOpacity"));
        assert_eq!(Ra_GetLastErrorCode(), E_NOTIMPL);

        let mut buffer = [0 as c_char; 64];
        let len = unsafe { Ra_GetLastError(buffer.as_mut_ptr(), buffer.len()) };
        assert_eq!(len, "not implemented".len());
        let text = unsafe { CStr::from_ptr(buffer.as_ptr()) };
        assert_eq!(text.to_str().unwrap(), "not implemented");

        let mut small = [0 as c_char; 4];
        let len = unsafe { Ra_GetLastError(small.as_mut_ptr(), small.len()) };
        assert_eq!(len, "not implemented".len());
        let text = unsafe { CStr::from_ptr(small.as_ptr()) };
        assert_eq!(text.to_str().unwrap(), "not");
    }

    #[test]
    fn test_truncation_keeps_whole_characters() {
        set_last_error(&RaError::fail("héllo"));

        let mut buffer = [b'x' as c_char; 3];
        let len = unsafe { Ra_GetLastError(buffer.as_mut_ptr(), buffer.len()) };
        assert_eq!(len, "héllo".len());
        let text = unsafe { CStr::from_ptr(buffer.as_ptr()) };
        assert_eq!(text.to_str().unwrap(), "h");

        let mut buffer = [b'x' as c_char; 4];
        unsafe { Ra_GetLastError(buffer.as_mut_ptr(), buffer.len()) };
        let text = unsafe { CStr::from_ptr(buffer.as_ptr()) };
        assert_eq!(text.to_str().unwrap(), "hé");
    }

    #[test]
    fn test_length_query_with_null_buffer() {
        set_last_error(&RaError::fail("surface lost"));
        let len = unsafe { Ra_GetLastError(std::ptr::null_mut(), 0) };
        assert_eq!(len, "surface lost".len());
        assert_eq!(Ra_GetLastErrorCode(), RaError::fail("").hresult());
    }
}
