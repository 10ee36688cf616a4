//! String plumbing for the C ABI
//!
//! Strings cross the boundary as NUL-terminated UTF-8.
//!
//! - Arguments are borrowed for the duration of the call only.
//! - Strings returned by the runtime are owned by the caller and must be
//!   released with [`rl_string_free`].
//! - Directory listings come back as an opaque [`StringList`] handle,
//!   released with [`rl_string_list_free`].

use crate::error::set_runtime_error;
use std::ffi::{CStr, CString, c_char};
use std::ptr;

/// Borrow a C string argument as `&str`
///
/// Records a runtime error tagged with `op` and returns `None` when the
/// pointer is null or the bytes are not UTF-8.
///
/// # Safety
/// `ptr` must be null or point to a NUL-terminated string that stays valid
/// for `'a`.
pub(crate) unsafe fn str_arg<'a>(ptr: *const c_char, op: &str) -> Option<&'a str> {
    if ptr.is_null() {
        set_runtime_error(format!("{}: null string argument", op));
        return None;
    }
    match unsafe { CStr::from_ptr(ptr) }.to_str() {
        Ok(s) => Some(s),
        Err(_) => {
            set_runtime_error(format!("{}: string argument is not valid UTF-8", op));
            None
        }
    }
}

/// Hand an owned string to the caller
///
/// Interior NUL bytes are replaced with '?' so the content survives.
pub(crate) fn into_c_string(s: String) -> *mut c_char {
    let cstring = match CString::new(s) {
        Ok(c) => c,
        Err(e) => {
            let bytes: Vec<u8> = e
                .into_vec()
                .into_iter()
                .map(|b| if b == 0 { b'?' } else { b })
                .collect();
            CString::new(bytes).unwrap_or_default()
        }
    };
    cstring.into_raw()
}

/// Release a string returned by any `rl_*` function
///
/// # Safety
/// `ptr` must be null or a pointer previously returned by the runtime that
/// has not been freed yet.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn rl_string_free(ptr: *mut c_char) {
    if !ptr.is_null() {
        drop(unsafe { CString::from_raw(ptr) });
    }
}

/// Owned list of strings handed across the C ABI
pub type StringList = Vec<String>;

pub(crate) fn into_string_list(list: StringList) -> *mut StringList {
    Box::into_raw(Box::new(list))
}

/// Number of entries in a string list (0 for null)
///
/// # Safety
/// `list` must be null or a live handle returned by the runtime.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn rl_string_list_len(list: *const StringList) -> i64 {
    if list.is_null() {
        return 0;
    }
    unsafe { &*list }.len() as i64
}

/// Copy of the entry at `index`, or null when out of range
///
/// The returned string must be released with [`rl_string_free`].
///
/// # Safety
/// `list` must be null or a live handle returned by the runtime.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn rl_string_list_get(list: *const StringList, index: i64) -> *mut c_char {
    if list.is_null() || index < 0 {
        return ptr::null_mut();
    }
    match unsafe { &*list }.get(index as usize) {
        Some(entry) => into_c_string(entry.clone()),
        None => ptr::null_mut(),
    }
}

/// Release a string list handle
///
/// # Safety
/// `list` must be null or a live handle returned by the runtime; it must not
/// be used afterwards.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn rl_string_list_free(list: *mut StringList) {
    if !list.is_null() {
        drop(unsafe { Box::from_raw(list) });
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Copy a runtime-owned C string into a `String` and free it
    pub(crate) unsafe fn take_c_string(ptr: *mut c_char) -> String {
        assert!(!ptr.is_null(), "expected a string, got null");
        let s = unsafe { CStr::from_ptr(ptr) }.to_str().unwrap().to_string();
        unsafe { rl_string_free(ptr) };
        s
    }
}
