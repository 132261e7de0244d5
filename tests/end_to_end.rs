//! End-to-end test: jalankan binary dan cek output byte-for-byte
//!
//! Usage:
//!   cargo test --test end_to_end

use std::process::{Command, Output};

use xorhello::codec::{decode, MESSAGE_LEN, SECRET_BLOB};

const BIN: &str = env!("CARGO_BIN_EXE_xorhello");

fn run_once() -> Output {
    Command::new(BIN)
        .env_clear()
        .output()
        .expect("failed to spawn xorhello")
}

#[test]
fn test_prints_decoded_blob() {
    let out = run_once();

    assert_eq!(out.status.code(), Some(0));
    assert_eq!(out.stdout.len(), MESSAGE_LEN);
    assert_eq!(out.stdout, decode(&SECRET_BLOB, 0x5A));
    assert!(out.stderr.is_empty());
}

#[test]
fn test_repeated_runs_identical() {
    let first = run_once();
    for _ in 0..5 {
        let next = run_once();
        assert_eq!(next.status.code(), Some(0));
        assert_eq!(next.stdout, first.stdout);
    }
}

#[test]
fn test_arguments_ignored() {
    let out = Command::new(BIN)
        .args(["--verbose", "extra"])
        .output()
        .expect("failed to spawn xorhello");

    assert_eq!(out.status.code(), Some(0));
    assert_eq!(out.stdout, b"Hello, World!\n");
}

#[cfg(target_os = "linux")]
#[test]
fn test_full_device_exits_with_error() {
    use std::fs::OpenOptions;
    use std::process::Stdio;

    let full = OpenOptions::new()
        .write(true)
        .open("/dev/full")
        .expect("failed to open /dev/full");

    let out = Command::new(BIN)
        .stdout(Stdio::from(full))
        .output()
        .expect("failed to spawn xorhello");

    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.starts_with("xorhello: write to stdout failed"));
}
