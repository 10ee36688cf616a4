//! Runtime Error Handling
//!
//! Two layers:
//!
//! - [`FsError`]: the typed error returned by the safe file-system API.
//!   Exactly one kind per failing operation family, always carrying the
//!   offending path.
//! - Thread-local last-error state for the C ABI. `rl_*` functions never
//!   unwind across the FFI boundary; they record the failure and return a
//!   neutral value instead.
//!
//! # Usage
//!
//! ```ignore
//! match file::read_file(path) {
//!     Ok(text) => into_c_string(text),
//!     Err(e) => {
//!         set_runtime_error(e.to_string());
//!         std::ptr::null_mut()
//!     }
//! }
//! ```
//!
//! Generated code checks for errors after a call:
//! ```ignore
//! if rl_has_error() {
//!     let error = rl_take_error();
//!     // Handle error...
//! }
//! ```

use std::cell::RefCell;
use std::ffi::{CString, c_char};
use std::io;
use std::ptr;
use thiserror::Error;

/// Failure of a file-system operation
#[derive(Debug, Error)]
pub enum FsError {
    /// The path could not be opened for reading or writing
    #[error("could not open file: {path}")]
    OpenFailed {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Deletion was attempted but refused by the OS
    #[error("could not remove: {path}")]
    RemoveFailed {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The path is missing or is not a directory
    #[error("path is not a valid directory: {path}")]
    NotADirectory { path: String },
}

/// Payload-free discriminant of [`FsError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsErrorKind {
    OpenFailed,
    RemoveFailed,
    NotADirectory,
}

impl FsError {
    pub(crate) fn open_failed(path: &str, source: io::Error) -> Self {
        FsError::OpenFailed {
            path: path.to_string(),
            source,
        }
    }

    pub(crate) fn remove_failed(path: &str, source: io::Error) -> Self {
        FsError::RemoveFailed {
            path: path.to_string(),
            source,
        }
    }

    pub(crate) fn not_a_directory(path: &str) -> Self {
        FsError::NotADirectory {
            path: path.to_string(),
        }
    }

    pub fn kind(&self) -> FsErrorKind {
        match self {
            FsError::OpenFailed { .. } => FsErrorKind::OpenFailed,
            FsError::RemoveFailed { .. } => FsErrorKind::RemoveFailed,
            FsError::NotADirectory { .. } => FsErrorKind::NotADirectory,
        }
    }

    /// The path the failing operation was called with
    pub fn path(&self) -> &str {
        match self {
            FsError::OpenFailed { path, .. }
            | FsError::RemoveFailed { path, .. }
            | FsError::NotADirectory { path } => path,
        }
    }
}

thread_local! {
    /// Thread-local storage for the last runtime error message
    static LAST_ERROR: RefCell<Option<String>> = const { RefCell::new(None) };

    /// Cached C string for FFI access (avoids allocation on every get)
    static ERROR_CSTRING: RefCell<Option<CString>> = const { RefCell::new(None) };
}

/// Set the last runtime error message
///
/// Note: This clears any cached CString to prevent stale pointer access.
pub fn set_runtime_error(msg: impl Into<String>) {
    ERROR_CSTRING.with(|cs| *cs.borrow_mut() = None);
    LAST_ERROR.with(|e| {
        *e.borrow_mut() = Some(msg.into());
    });
}

/// Take (and clear) the last runtime error message
pub fn take_runtime_error() -> Option<String> {
    LAST_ERROR.with(|e| e.borrow_mut().take())
}

/// Check if there's a pending runtime error
pub fn has_runtime_error() -> bool {
    LAST_ERROR.with(|e| e.borrow().is_some())
}

/// Clear any pending runtime error
pub fn clear_runtime_error() {
    LAST_ERROR.with(|e| *e.borrow_mut() = None);
    ERROR_CSTRING.with(|e| *e.borrow_mut() = None);
}

/// Cache `msg` as a C string and return a pointer into the cache
fn cache_error_cstring(msg: &str) -> *const c_char {
    ERROR_CSTRING.with(|cs| {
        // Replace null bytes with '?' to preserve error content
        let safe_msg: String = msg
            .chars()
            .map(|c| if c == '\0' { '?' } else { c })
            .collect();
        let cstring = CString::new(safe_msg).unwrap_or_default();
        let ptr = cstring.as_ptr();
        *cs.borrow_mut() = Some(cstring);
        ptr
    })
}

// FFI-safe error access functions

/// Check if there's a pending runtime error (FFI-safe)
#[unsafe(no_mangle)]
pub extern "C" fn rl_has_error() -> bool {
    has_runtime_error()
}

/// Get the last error message as a C string pointer (FFI-safe)
///
/// Returns null if no error is pending.
///
/// # WARNING: Pointer Lifetime
/// The returned pointer is only valid until the next call to `set_runtime_error`,
/// `get_error`, `take_error`, or `clear_error`. Callers must copy the string
/// immediately if they need to retain it.
#[unsafe(no_mangle)]
pub extern "C" fn rl_get_error() -> *const c_char {
    LAST_ERROR.with(|e| match &*e.borrow() {
        Some(msg) => cache_error_cstring(msg),
        None => ptr::null(),
    })
}

/// Take (and clear) the last error, returning it as a C string (FFI-safe)
///
/// Returns null if no error is pending. Same pointer lifetime rules as
/// [`rl_get_error`].
#[unsafe(no_mangle)]
pub extern "C" fn rl_take_error() -> *const c_char {
    match take_runtime_error() {
        Some(msg) => cache_error_cstring(&msg),
        None => ptr::null(),
    }
}

/// Clear any pending error (FFI-safe)
#[unsafe(no_mangle)]
pub extern "C" fn rl_clear_error() {
    clear_runtime_error();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CStr;

    #[test]
    fn test_set_and_take_error() {
        clear_runtime_error();
        assert!(!has_runtime_error());

        set_runtime_error("test error");
        assert!(has_runtime_error());

        let error = take_runtime_error();
        assert_eq!(error, Some("test error".to_string()));
        assert!(!has_runtime_error());
    }

    #[test]
    fn test_clear_error() {
        set_runtime_error("another error");
        assert!(has_runtime_error());

        clear_runtime_error();
        assert!(!has_runtime_error());
        assert!(take_runtime_error().is_none());
    }

    #[test]
    fn test_get_error_keeps_pending_error() {
        clear_runtime_error();
        set_runtime_error("still here");

        let ptr = rl_get_error();
        assert!(!ptr.is_null());
        let msg = unsafe { CStr::from_ptr(ptr) }.to_str().unwrap();
        assert_eq!(msg, "still here");
        assert!(rl_has_error());

        rl_clear_error();
        assert!(rl_get_error().is_null());
    }

    #[test]
    fn test_take_error_replaces_nul_bytes() {
        clear_runtime_error();
        set_runtime_error("bad\0byte");

        let ptr = rl_take_error();
        let msg = unsafe { CStr::from_ptr(ptr) }.to_str().unwrap().to_string();
        assert_eq!(msg, "bad?byte");
        assert!(!rl_has_error());
        assert!(rl_take_error().is_null());
    }

    #[test]
    fn test_fs_error_message_includes_path() {
        let err = FsError::open_failed(
            "/tmp/nope.txt",
            io::Error::new(io::ErrorKind::NotFound, "missing"),
        );
        assert_eq!(err.kind(), FsErrorKind::OpenFailed);
        assert_eq!(err.path(), "/tmp/nope.txt");
        assert!(err.to_string().contains("/tmp/nope.txt"));
        assert!(std::error::Error::source(&err).is_some());

        let err = FsError::not_a_directory("out.txt");
        assert_eq!(err.kind(), FsErrorKind::NotADirectory);
        assert_eq!(err.to_string(), "path is not a valid directory: out.txt");
        assert!(std::error::Error::source(&err).is_none());
    }
}
