//! End-to-end file-system scenarios
//!
//! These run with relative paths, the way generated programs call the
//! runtime, so each test switches into its own temporary working directory.
//! `#[serial]` keeps the process-wide current directory from being shared.

use redline_runtime::{FsErrorKind, exists, list_dir, mkdir, read_file, remove, write_file};
use serial_test::serial;
use std::path::PathBuf;
use tempfile::TempDir;

/// Enter a fresh temp dir; restores the previous cwd on drop
struct WorkDir {
    _temp: TempDir,
    previous: PathBuf,
}

impl WorkDir {
    fn enter() -> Self {
        let temp = tempfile::tempdir().unwrap();
        let previous = std::env::current_dir().unwrap();
        std::env::set_current_dir(temp.path()).unwrap();
        WorkDir {
            _temp: temp,
            previous,
        }
    }
}

impl Drop for WorkDir {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.previous);
    }
}

#[test]
#[serial]
fn test_write_then_read_relative_path() {
    let _wd = WorkDir::enter();

    assert!(write_file("out.txt", "hello").unwrap());
    assert_eq!(read_file("out.txt").unwrap(), "hello");
}

#[test]
#[serial]
fn test_missing_path_exists_and_remove() {
    let _wd = WorkDir::enter();

    assert!(!exists("missing.xyz"));
    remove("missing.xyz").unwrap();
    assert!(!exists("missing.xyz"));
}

#[test]
#[serial]
fn test_mkdir_list_write_list() {
    let _wd = WorkDir::enter();

    mkdir("d");
    assert!(list_dir("d").unwrap().is_empty());

    write_file("d/f.txt", "x").unwrap();
    assert_eq!(list_dir("d").unwrap(), vec!["f.txt".to_string()]);
}

#[test]
#[serial]
fn test_list_dir_on_file_fails() {
    let _wd = WorkDir::enter();

    write_file("out.txt", "hello").unwrap();
    let err = list_dir("out.txt").unwrap_err();
    assert_eq!(err.kind(), FsErrorKind::NotADirectory);
    assert!(err.to_string().contains("out.txt"));
}

#[test]
#[serial]
fn test_read_missing_fails() {
    let _wd = WorkDir::enter();

    let err = read_file("nope.txt").unwrap_err();
    assert_eq!(err.kind(), FsErrorKind::OpenFailed);
    assert!(err.to_string().contains("nope.txt"));
}

#[test]
#[serial]
fn test_remove_then_recreate_directory() {
    let _wd = WorkDir::enter();

    mkdir("cache");
    write_file("cache/entry", "1").unwrap();
    assert_eq!(remove("cache").unwrap_err().kind(), FsErrorKind::RemoveFailed);

    remove("cache/entry").unwrap();
    remove("cache").unwrap();
    assert!(!exists("cache"));

    mkdir("cache");
    assert!(exists("cache"));
}
