//! Time operations for REDLINE
//!
//! Wall-clock time and blocking sleep for generated code, plus the
//! high-resolution clock reading the random generator seeds from.
//!
//! # Usage from REDLINE
//!
//! ```text
//! let start: float = time()
//! sleep(0.5)
//! print(time() - start)
//! ```

use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Seconds since the Unix epoch, with sub-second precision
///
/// Returns 0.0 if the system clock is set before the epoch.
pub fn time() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or(0.0)
}

/// Block the calling thread for `seconds`
///
/// Zero, negative, NaN and infinite durations return immediately; there is
/// no early-wake mechanism.
pub fn sleep(seconds: f64) {
    if !seconds.is_finite() || seconds <= 0.0 {
        return;
    }
    match Duration::try_from_secs_f64(seconds) {
        Ok(duration) => std::thread::sleep(duration),
        Err(_) => tracing::debug!(seconds, "sleep: duration out of range, ignoring"),
    }
}

/// High-resolution clock reading in nanoseconds
///
/// Only meant as seed material: the value is not guaranteed to be monotonic.
#[inline]
#[cfg(unix)]
pub fn clock_nanos() -> u64 {
    let mut ts = libc::timespec {
        tv_sec: 0,
        tv_nsec: 0,
    };
    // SAFETY: ts is a valid pointer to a timespec struct
    let rc = unsafe { libc::clock_gettime(libc::CLOCK_REALTIME, &mut ts) };
    if rc != 0 {
        return system_nanos();
    }
    // Explicit casts for portability (tv_sec/tv_nsec types vary by platform)
    #[allow(clippy::unnecessary_cast)]
    let secs = (ts.tv_sec as u64).wrapping_mul(1_000_000_000);
    #[allow(clippy::unnecessary_cast)]
    secs.wrapping_add(ts.tv_nsec as u64)
}

/// Non-Unix fallback through `SystemTime`
#[inline]
#[cfg(not(unix))]
pub fn clock_nanos() -> u64 {
    system_nanos()
}

fn system_nanos() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

/// Current time in seconds since the Unix epoch
#[unsafe(no_mangle)]
pub extern "C" fn rl_time() -> f64 {
    time()
}

/// Sleep for a number of seconds
#[unsafe(no_mangle)]
pub extern "C" fn rl_sleep(seconds: f64) {
    sleep(seconds);
}
