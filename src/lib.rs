//! xorhello - XOR-masked message printer
//!
//! Arsitektur:
//! - Codec: Decode fixed blob dengan single-byte XOR key (compile time)
//! - Emit: Tulis buffer utuh ke stdout via raw `write(2)`

pub mod codec;
pub mod emit;
