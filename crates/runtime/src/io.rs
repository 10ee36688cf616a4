//! I/O Operations for REDLINE
//!
//! `print` writes a scalar's canonical text plus a newline to stdout; `input`
//! optionally shows a prompt and reads one line from stdin.
//!
//! Both are thin wrappers over generic reader/writer functions so the
//! behaviour can be exercised without touching the process streams.

use crate::convert::ScalarText;
use crate::cstring::into_c_string;
use std::ffi::{CStr, c_char};
use std::io::{self, BufRead, Write};

/// Write `value` followed by a newline
pub fn write_line_to<W, T>(out: &mut W, value: &T) -> io::Result<()>
where
    W: Write,
    T: ScalarText + ?Sized,
{
    out.write_all(value.to_text().as_bytes())?;
    out.write_all(b"\n")
}

/// Show `prompt` (if non-empty) on `out`, then read one line from `input`
///
/// The line ending (`\n` or `\r\n`) is stripped. Returns an empty string at
/// EOF.
pub fn read_line_from<R, W>(input: &mut R, out: &mut W, prompt: &str) -> io::Result<String>
where
    R: BufRead,
    W: Write,
{
    if !prompt.is_empty() {
        out.write_all(prompt.as_bytes())?;
        out.flush()?;
    }

    let mut line = String::new();
    input.read_line(&mut line)?;

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}

/// Print a scalar to stdout followed by a newline
///
/// Write failures (a closed pipe, say) are logged and otherwise ignored.
pub fn print<T: ScalarText + ?Sized>(value: &T) {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = write_line_to(&mut out, value) {
        tracing::debug!(error = %e, "print: write to stdout failed");
    }
}

/// Read a line from stdin after showing `prompt`
///
/// Read failures are logged and yield an empty string, same as EOF.
pub fn input(prompt: &str) -> String {
    let stdin = io::stdin();
    let mut stdin = stdin.lock();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    read_line_from(&mut stdin, &mut out, prompt).unwrap_or_else(|e| {
        tracing::debug!(error = %e, "input: read from stdin failed");
        String::new()
    })
}

/// Print a string followed by a newline
///
/// A null pointer prints an empty line.
///
/// # Safety
/// `msg` must be null or a valid NUL-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn rl_print_str(msg: *const c_char) {
    if msg.is_null() {
        print("");
        return;
    }
    let text = unsafe { CStr::from_ptr(msg) }.to_string_lossy();
    print(&*text);
}

#[unsafe(no_mangle)]
pub extern "C" fn rl_print_int(value: i64) {
    print(&value);
}

#[unsafe(no_mangle)]
pub extern "C" fn rl_print_float(value: f64) {
    print(&value);
}

#[unsafe(no_mangle)]
pub extern "C" fn rl_print_bool(value: bool) {
    print(&value);
}

/// Read a line from stdin (free with `rl_string_free`)
///
/// # Safety
/// `prompt` must be null or a valid NUL-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn rl_input(prompt: *const c_char) -> *mut c_char {
    let prompt = if prompt.is_null() {
        String::new()
    } else {
        unsafe { CStr::from_ptr(prompt) }
            .to_string_lossy()
            .into_owned()
    };
    into_c_string(input(&prompt))
}
