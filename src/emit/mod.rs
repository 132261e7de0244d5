//! Emitter: tulis buffer utuh ke output
//!
//! Prinsip desain:
//! - Write-All: Partial write di-loop sampai buffer habis
//! - Raw Syscall: Di unix langsung `write(2)` ke fd 1, tanpa line buffering

mod stdout;

pub use stdout::{emit_all, emit_stdout, RawStdout};
