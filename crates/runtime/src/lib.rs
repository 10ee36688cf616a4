//! REDLINE Runtime: primitive services for compiled REDLINE programs
//!
//! Generated code links against this library (as a staticlib through the
//! `rl_*` C ABI, or as an rlib through the Rust API) for:
//! - Random: lazily-seeded generator, bounded int and unit-interval float draws
//! - Lists: generic len/append/sort/reverse/find over `Vec<T>`
//! - Files: path-addressed read/write/exists/mkdir/remove/list_dir
//! - Conversion, print/input, math, time, command-line arguments

pub mod args;
pub mod config;
pub mod context;
pub mod convert;
pub mod cstring;
pub mod error;
pub mod file;
pub mod io;
pub mod list_ops;
pub mod logging;
pub mod math_ops;
pub mod random;
pub mod time_ops;

// Re-export key types
pub use config::RuntimeConfig;
pub use context::RuntimeContext;
pub use convert::{ScalarText, concat, to_text};
pub use error::{FsError, FsErrorKind};
pub use list_ops::Sequence;
pub use random::RandomGenerator;

// Runtime start-up and arguments (exported for linking)
pub use args::{
    arg_at, arg_count, args, init_args, rl_arg_at, rl_arg_count, rl_args_init, rl_runtime_init,
};

// Error state (exported for linking)
pub use error::{
    clear_runtime_error, has_runtime_error, rl_clear_error, rl_get_error, rl_has_error,
    rl_take_error, set_runtime_error, take_runtime_error,
};

// Random operations (exported for linking)
pub use random::{random_float, random_int, rl_random_float, rl_random_int};

// File operations (exported for linking)
pub use file::{
    append_file, exists, file_size, is_dir, list_dir, mkdir, read_file, remove,
    rl_dir_exists, rl_dir_list, rl_dir_make, rl_file_append, rl_file_exists, rl_file_read,
    rl_file_remove, rl_file_size, rl_file_write, write_file,
};

// String handles (exported for linking)
pub use cstring::{
    StringList, rl_string_free, rl_string_list_free, rl_string_list_get, rl_string_list_len,
};

// I/O and time (exported for linking)
pub use io::{input, print};
pub use time_ops::{rl_sleep, rl_time, sleep, time};
