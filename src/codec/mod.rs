//! Codec: XOR-masked message data
//!
//! Prinsip desain:
//! - Const: Pesan di-decode saat compile time
//! - No-Allocation: Decode langsung ke buffer tujuan
//! - Total: Tidak ada error path, input selalu fixed-size

mod xor;

pub use xor::{decode, decode_into, message, MESSAGE, MESSAGE_LEN, SECRET_BLOB, X_KEY};
