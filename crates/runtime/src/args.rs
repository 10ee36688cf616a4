//! Command-line argument handling for REDLINE
//!
//! The argument list is stored once at start-up, before any generated code
//! runs, and is read-only afterwards. Index 0 is the program name.
//!
//! # Usage from REDLINE
//!
//! ```text
//! if arg_count() > 1:
//!     print(arg_at(1))
//! ```

use crate::config::RuntimeConfig;
use crate::logging::init_logging;
use std::ffi::{CStr, c_char};
use std::sync::OnceLock;

/// Global storage for command-line arguments
static ARGS: OnceLock<Vec<String>> = OnceLock::new();

/// Store the argument list
///
/// Only the first call wins; returns false if arguments were already set.
pub fn init_args<I, S>(args: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let args: Vec<String> = args.into_iter().map(Into::into).collect();
    let count = args.len();
    let stored = ARGS.set(args).is_ok();
    if stored {
        tracing::debug!(count, "args: initialized");
    } else {
        tracing::warn!("args: already initialized, ignoring second call");
    }
    stored
}

/// All arguments, empty before initialization
pub fn args() -> &'static [String] {
    ARGS.get().map(Vec::as_slice).unwrap_or(&[])
}

/// Number of arguments including the program name (0 before init)
pub fn arg_count() -> i64 {
    args().len() as i64
}

/// Argument at `index`, or an empty string when out of range or negative
pub fn arg_at(index: i64) -> String {
    usize::try_from(index)
        .ok()
        .and_then(|i| args().get(i))
        .cloned()
        .unwrap_or_default()
}

/// Collect C-style argc/argv into owned strings
///
/// Null entries and non-UTF-8 bytes become empty strings.
///
/// # Safety
/// - argc must accurately reflect the number of pointers in argv
/// - argv must contain argc valid, null-terminated C strings
unsafe fn collect_argv(argc: i32, argv: *const *const c_char) -> Vec<String> {
    if argv.is_null() || argc <= 0 {
        return Vec::new();
    }
    (0..argc)
        .map(|i| {
            let ptr = unsafe { *argv.offset(i as isize) };
            if ptr.is_null() {
                String::new()
            } else {
                unsafe { CStr::from_ptr(ptr).to_str().unwrap_or("").to_owned() }
            }
        })
        .collect()
}

/// Initialize command-line arguments from C-style argc/argv
///
/// # Safety
/// - argc must accurately reflect the number of pointers in argv
/// - argv must contain argc valid, null-terminated C strings
/// - argv pointers must remain valid for the duration of this call
#[unsafe(no_mangle)]
pub unsafe extern "C" fn rl_args_init(argc: i32, argv: *const *const c_char) {
    init_args(unsafe { collect_argv(argc, argv) });
}

/// Runtime start-up: store arguments and install logging
///
/// Called once from the generated program's `main` before any other
/// runtime call.
///
/// # Safety
/// Same requirements as [`rl_args_init`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn rl_runtime_init(argc: i32, argv: *const *const c_char) {
    let config = RuntimeConfig::from_env();
    init_logging(&config);
    unsafe { rl_args_init(argc, argv) };
}

/// Get the number of command-line arguments
#[unsafe(no_mangle)]
pub extern "C" fn rl_arg_count() -> i64 {
    arg_count()
}

/// Get command-line argument at index (free with `rl_string_free`)
#[unsafe(no_mangle)]
pub extern "C" fn rl_arg_at(index: i64) -> *mut c_char {
    crate::cstring::into_c_string(arg_at(index))
}
