//! xorhello - decode pesan dan tulis ke stdout
//!
//! Tidak ada argumen, tidak ada environment variable.
//! Output: tepat 14 byte ke stdout, exit code 0.

use std::io;

use xorhello::codec::message;
use xorhello::emit::emit_stdout;

fn run() -> io::Result<()> {
    emit_stdout(message())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("xorhello: write to stdout failed: {}", e);
        std::process::exit(1);
    }
}
