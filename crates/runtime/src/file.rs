//! File I/O Operations for REDLINE
//!
//! The file layer is path-addressed: every call takes a path, opens, acts and
//! closes before returning. Nothing stays open between calls, so a program
//! that never "closes" anything cannot leak a handle.
//!
//! A path denotes nothing, a regular file or a directory, and each operation
//! checks which before acting. Failures come back as [`FsError`], always
//! naming the path:
//!
//! | Operation | Failure |
//! |-----------|---------|
//! | [`read_file`], [`write_file`], [`append_file`], [`file_size`] | `OpenFailed` |
//! | [`remove`] | `RemoveFailed` |
//! | [`list_dir`] | `NotADirectory` |
//!
//! [`exists`], [`is_dir`] and [`mkdir`] never fail.
//!
//! # Usage from REDLINE
//!
//! ```text
//! if not exists("out"):
//!     mkdir("out")
//! write("out/report.txt", "hello")
//! for name in list_dir("out"):
//!     print(name)
//! ```

use crate::cstring::{StringList, into_c_string, into_string_list, str_arg};
use crate::error::{FsError, set_runtime_error};
use std::ffi::{CStr, OsString, c_char};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::ptr;

/// Read entire file contents as a string
///
/// Fails with `OpenFailed` if the path is missing, unreadable, a directory,
/// or does not hold UTF-8 text. Never returns partial content.
pub fn read_file(path: &str) -> Result<String, FsError> {
    fs::read_to_string(path).map_err(|e| {
        tracing::debug!(path, error = %e, "read_file failed");
        FsError::open_failed(path, e)
    })
}

/// Write string to file (creates or truncates)
///
/// Returns `Ok(true)` once the whole text is written. Any failure, opening or
/// writing, is reported as `OpenFailed`.
pub fn write_file(path: &str, content: &str) -> Result<bool, FsError> {
    fs::write(path, content).map_err(|e| {
        tracing::debug!(path, error = %e, "write_file failed");
        FsError::open_failed(path, e)
    })?;
    Ok(true)
}

/// Append string to file (creates if doesn't exist)
pub fn append_file(path: &str, content: &str) -> Result<bool, FsError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .and_then(|mut file| file.write_all(content.as_bytes()))
        .map_err(|e| {
            tracing::debug!(path, error = %e, "append_file failed");
            FsError::open_failed(path, e)
        })?;
    Ok(true)
}

/// Size of a file in bytes
pub fn file_size(path: &str) -> Result<u64, FsError> {
    fs::metadata(path)
        .map(|metadata| metadata.len())
        .map_err(|e| FsError::open_failed(path, e))
}

/// True iff `path` currently resolves to a file or a directory
pub fn exists(path: &str) -> bool {
    !path.is_empty() && Path::new(path).exists()
}

/// True iff `path` currently resolves to a directory
pub fn is_dir(path: &str) -> bool {
    !path.is_empty() && Path::new(path).is_dir()
}

/// Create a single directory (parents are not created)
///
/// Surfaces no value: an existing path or an OS refusal is silent. Callers
/// that need certainty check with [`exists`] or [`is_dir`].
pub fn mkdir(path: &str) {
    if let Err(e) = fs::create_dir(path) {
        if e.kind() == io::ErrorKind::AlreadyExists {
            tracing::trace!(path, "mkdir: path already exists");
        } else {
            tracing::debug!(path, error = %e, "mkdir failed");
        }
    }
}

/// Delete a file or an empty directory
///
/// A path that [`exists`] reports as absent is a silent no-op, including a
/// path under a regular file and a dangling symbolic link. Fails with
/// `RemoveFailed` when deletion is attempted and refused (non-empty
/// directory, permissions). Symbolic links are removed themselves, never
/// their targets.
pub fn remove(path: &str) -> Result<(), FsError> {
    if let Err(e) = fs::metadata(path) {
        if is_absent(&e) {
            tracing::trace!(path, "remove: nothing to remove");
            return Ok(());
        }
        tracing::debug!(path, error = %e, "remove: metadata failed");
        return Err(FsError::remove_failed(path, e));
    }

    let result = fs::symlink_metadata(path).and_then(|metadata| {
        if metadata.is_dir() {
            fs::remove_dir(path)
        } else {
            fs::remove_file(path)
        }
    });

    result.map_err(|e| {
        tracing::debug!(path, error = %e, "remove failed");
        FsError::remove_failed(path, e)
    })
}

/// Errors meaning "there is nothing at this path"
fn is_absent(e: &io::Error) -> bool {
    matches!(e.kind(), io::ErrorKind::NotFound | io::ErrorKind::NotADirectory)
}

/// Names of the immediate entries of a directory
///
/// Fails with `NotADirectory` if the path is missing, is not a directory, or
/// cannot be listed. Not recursive. Names are sorted ascending so the result
/// does not depend on the platform's directory order; names that are not
/// valid UTF-8 are converted lossily.
pub fn list_dir(path: &str) -> Result<Vec<String>, FsError> {
    if !is_dir(path) {
        return Err(FsError::not_a_directory(path));
    }

    let entries = fs::read_dir(path).map_err(|e| {
        tracing::debug!(path, error = %e, "list_dir: read_dir failed");
        FsError::not_a_directory(path)
    })?;

    sorted_names(path, entries.map(|entry| entry.map(|e| e.file_name())))
}

/// Collect entry names, failing as a whole if any entry could not be read
fn sorted_names<I>(path: &str, entries: I) -> Result<Vec<String>, FsError>
where
    I: IntoIterator<Item = io::Result<OsString>>,
{
    let mut names = entries
        .into_iter()
        .map(|entry| entry.map(|name| name.to_string_lossy().into_owned()))
        .collect::<io::Result<Vec<String>>>()
        .map_err(|e| {
            tracing::debug!(path, error = %e, "list_dir: reading an entry failed");
            FsError::not_a_directory(path)
        })?;
    names.sort();
    Ok(names)
}

// =============================================================================
// C ABI
// =============================================================================

/// Borrow a path argument for a call that must never fail
unsafe fn quiet_path<'a>(path: *const c_char) -> Option<&'a str> {
    if path.is_null() {
        return None;
    }
    unsafe { CStr::from_ptr(path) }.to_str().ok()
}

/// Read entire file contents
///
/// Returns an owned string (free with `rl_string_free`), or null with the
/// runtime error set.
///
/// # Safety
/// `path` must be null or a valid NUL-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn rl_file_read(path: *const c_char) -> *mut c_char {
    let Some(path) = (unsafe { str_arg(path, "file.read") }) else {
        return ptr::null_mut();
    };
    match read_file(path) {
        Ok(contents) => into_c_string(contents),
        Err(e) => {
            set_runtime_error(format!("file.read: {}", e));
            ptr::null_mut()
        }
    }
}

/// Write string to file (creates or truncates)
///
/// Returns true on success, false with the runtime error set on failure.
///
/// # Safety
/// `path` and `content` must be null or valid NUL-terminated strings.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn rl_file_write(path: *const c_char, content: *const c_char) -> bool {
    let (Some(path), Some(content)) = (unsafe { str_arg(path, "file.write") }, unsafe {
        str_arg(content, "file.write")
    }) else {
        return false;
    };
    match write_file(path, content) {
        Ok(written) => written,
        Err(e) => {
            set_runtime_error(format!("file.write: {}", e));
            false
        }
    }
}

/// Append string to file (creates if doesn't exist)
///
/// # Safety
/// `path` and `content` must be null or valid NUL-terminated strings.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn rl_file_append(path: *const c_char, content: *const c_char) -> bool {
    let (Some(path), Some(content)) = (unsafe { str_arg(path, "file.append") }, unsafe {
        str_arg(content, "file.append")
    }) else {
        return false;
    };
    match append_file(path, content) {
        Ok(written) => written,
        Err(e) => {
            set_runtime_error(format!("file.append: {}", e));
            false
        }
    }
}

/// File size in bytes, or -1 with the runtime error set
///
/// # Safety
/// `path` must be null or a valid NUL-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn rl_file_size(path: *const c_char) -> i64 {
    let Some(path) = (unsafe { str_arg(path, "file.size") }) else {
        return -1;
    };
    match file_size(path) {
        Ok(size) => i64::try_from(size).unwrap_or(i64::MAX),
        Err(e) => {
            set_runtime_error(format!("file.size: {}", e));
            -1
        }
    }
}

/// Check if a file or directory exists
///
/// Never sets an error: null or non-UTF-8 paths simply do not exist.
///
/// # Safety
/// `path` must be null or a valid NUL-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn rl_file_exists(path: *const c_char) -> bool {
    unsafe { quiet_path(path) }.is_some_and(exists)
}

/// Check if a directory exists
///
/// # Safety
/// `path` must be null or a valid NUL-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn rl_dir_exists(path: *const c_char) -> bool {
    unsafe { quiet_path(path) }.is_some_and(is_dir)
}

/// Create a single directory; never reports an error
///
/// # Safety
/// `path` must be null or a valid NUL-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn rl_dir_make(path: *const c_char) {
    if let Some(path) = unsafe { quiet_path(path) } {
        mkdir(path);
    }
}

/// Delete a file or empty directory
///
/// Returns true on success (including a missing path), false with the
/// runtime error set when deletion was refused.
///
/// # Safety
/// `path` must be null or a valid NUL-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn rl_file_remove(path: *const c_char) -> bool {
    let Some(path) = (unsafe { str_arg(path, "file.remove") }) else {
        return false;
    };
    match remove(path) {
        Ok(()) => true,
        Err(e) => {
            set_runtime_error(format!("file.remove: {}", e));
            false
        }
    }
}

/// List directory contents
///
/// Returns a string-list handle (free with `rl_string_list_free`), or null
/// with the runtime error set.
///
/// # Safety
/// `path` must be null or a valid NUL-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn rl_dir_list(path: *const c_char) -> *mut StringList {
    let Some(path) = (unsafe { str_arg(path, "dir.list") }) else {
        return ptr::null_mut();
    };
    match list_dir(path) {
        Ok(names) => into_string_list(names),
        Err(e) => {
            set_runtime_error(format!("dir.list: {}", e));
            ptr::null_mut()
        }
    }
}
