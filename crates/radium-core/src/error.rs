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

//! The flat error model shared by every Radium operation.
//!
//! Every failure collapses to one of a handful of [`ErrorCode`]s, carried by a
//! [`RaError`] together with a human-readable message. The most recent error
//! reported on the current thread can be queried with [`last_error`], which is
//! what the C surface exposes as its error-query function.

use std::borrow::Cow;
use std::cell::RefCell;
use std::fmt;

/// The HRESULT value for success.
pub const S_OK: i32 = 0;
/// The HRESULT value for an unspecified failure.
pub const E_FAIL: i32 = 0x8000_4005_u32 as i32;
/// The HRESULT value for an operation that is not implemented.
pub const E_NOTIMPL: i32 = 0x8000_4001_u32 as i32;
/// The HRESULT value for an invalid argument.
pub const E_INVALIDARG: i32 = 0x8007_0057_u32 as i32;

/// The generic result codes an operation can fail with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// The operation failed; the message carries the underlying library's reason.
    Fail,
    /// The operation has no native equivalent and always fails.
    NotImplemented,
    /// An argument (handle, size, buffer) was rejected before reaching the native library.
    InvalidArgument,
}

impl ErrorCode {
    /// Returns the HRESULT value used by the C surface for this code.
    pub const fn hresult(self) -> i32 {
        match self {
            ErrorCode::Fail => E_FAIL,
            ErrorCode::NotImplemented => E_NOTIMPL,
            ErrorCode::InvalidArgument => E_INVALIDARG,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCode::Fail => write!(f, "operation failed"),
            ErrorCode::NotImplemented => write!(f, "not implemented"),
            ErrorCode::InvalidArgument => write!(f, "invalid argument"),
        }
    }
}

/// An error returned by a Radium operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaError {
    code: ErrorCode,
    message: Cow<'static, str>,
}

impl RaError {
    /// Creates a new error with the given code and message.
    pub fn new(code: ErrorCode, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// A generic failure, annotated with the underlying library's message.
    pub fn fail(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorCode::Fail, message)
    }

    /// An argument was rejected.
    pub fn invalid_argument(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorCode::InvalidArgument, message)
    }

    /// The designated failure of a stub operation.
    ///
    /// The error is also recorded as the thread's last error and logged at
    /// debug level with the operation name.
    pub fn not_implemented(operation: &'static str) -> Self {
        log::debug!("{operation}: not implemented");
        let err = Self::new(ErrorCode::NotImplemented, "not implemented");
        set_last_error(&err);
        err
    }

    /// Returns the error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Returns the human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the HRESULT value for this error.
    pub fn hresult(&self) -> i32 {
        self.code.hresult()
    }
}

impl fmt::Display for RaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for RaError {}

impl From<std::io::Error> for RaError {
    fn from(err: std::io::Error) -> Self {
        RaError::fail(err.to_string())
    }
}

/// The result type of every Radium operation.
pub type RaResult<T> = Result<T, RaError>;

thread_local! {
    static LAST_ERROR: RefCell<Option<RaError>> = const { RefCell::new(None) };
}

/// Records `err` as the most recent error on the current thread.
pub fn set_last_error(err: &RaError) {
    LAST_ERROR.with(|slot| *slot.borrow_mut() = Some(err.clone()));
}

/// Returns the most recent error reported on the current thread, if any.
pub fn last_error() -> Option<RaError> {
    LAST_ERROR.with(|slot| slot.borrow().clone())
}

/// Clears the current thread's last error.
pub fn clear_last_error() {
    LAST_ERROR.with(|slot| *slot.borrow_mut() = None);
}

/// Records the error of a failed result as the thread's last error and passes
/// the result through unchanged.
pub fn track<T>(result: RaResult<T>) -> RaResult<T> {
    if let Err(err) = &result {
        set_last_error(err);
    }
    result
}

/// Converts a result into its HRESULT value, recording any error.
pub fn to_hresult<T>(result: RaResult<T>) -> i32 {
    match track(result) {
        Ok(_) => S_OK,
        Err(err) => err.hresult(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hresult_values_match_the_com_convention() {
        assert_eq!(ErrorCode::Fail.hresult(), -2147467259);
        assert_eq!(ErrorCode::NotImplemented.hresult(), -2147467263);
        assert_eq!(ErrorCode::InvalidArgument.hresult(), -2147024809);
        assert!(E_FAIL < 0 && E_NOTIMPL < 0 && E_INVALIDARG < 0);
    }

    #[test]
    fn test_display_includes_code_and_message() {
        let err = RaError::fail("surface lost");
        assert_eq!(err.to_string(), "operation failed: surface lost");
        assert_eq!(err.code(), ErrorCode::Fail);
        assert_eq!(err.message(), "surface lost");
    }

    #[test]
    fn test_not_implemented_records_last_error() {
        clear_last_error();
        let err = RaError::not_implemented("RaWindow::get_opacity");
        assert_eq!(err.code(), ErrorCode::NotImplemented);
        assert_eq!(err.message(), "not implemented");
        assert_eq!(last_error(), Some(err));
    }

    #[test]
    fn test_to_hresult_maps_ok_and_err() {
        clear_last_error();
        assert_eq!(to_hresult::<()>(Ok(())), S_OK);
        assert_eq!(last_error(), None);

        let code = to_hresult::<()>(Err(RaError::invalid_argument("null window")));
        assert_eq!(code, E_INVALIDARG);
        assert_eq!(
            last_error().map(|e| e.message().to_string()),
            Some("null window".to_string())
        );
    }

    #[test]
    fn test_last_error_is_thread_local() {
        clear_last_error();
        set_last_error(&RaError::fail("main thread"));
        let seen = std::thread::spawn(last_error).join().unwrap();
        assert_eq!(seen, None);
        assert!(last_error().is_some());
    }
}
