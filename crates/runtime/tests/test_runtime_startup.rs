//! Start-up through the C ABI, as a generated `main` performs it
//!
//! Arguments live in a set-once global, so this binary initializes them
//! exactly once in a single test.

use redline_runtime::{arg_at, arg_count, args, rl_arg_at, rl_arg_count, rl_runtime_init};
use std::ffi::{CStr, CString, c_char};

#[test]
fn test_runtime_init_stores_args_once() {
    let owned: Vec<CString> = ["./game", "--seed", "42"]
        .iter()
        .map(|s| CString::new(*s).unwrap())
        .collect();
    let argv: Vec<*const c_char> = owned.iter().map(|s| s.as_ptr()).collect();

    unsafe { rl_runtime_init(argv.len() as i32, argv.as_ptr()) };

    assert_eq!(arg_count(), 3);
    assert_eq!(rl_arg_count(), 3);
    assert_eq!(args(), ["./game", "--seed", "42"]);
    assert_eq!(arg_at(0), "./game");
    assert_eq!(arg_at(2), "42");
    assert_eq!(arg_at(3), "");

    let ptr = rl_arg_at(1);
    let arg = unsafe { CStr::from_ptr(ptr) }.to_str().unwrap().to_string();
    unsafe { redline_runtime::rl_string_free(ptr) };
    assert_eq!(arg, "--seed");

    // Second initialization is ignored
    assert!(!redline_runtime::init_args(["other"]));
    assert_eq!(arg_count(), 3);
}
