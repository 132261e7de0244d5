//! XOR Decoder
//!
//! Setiap byte blob di-XOR dengan satu key:
//! `out[i] = blob[i] ^ key`
//!
//! XOR dengan key yang sama adalah involution, jadi decode juga encode.

/// Panjang pesan dalam bytes (seluruh buffer di-emit)
pub const MESSAGE_LEN: usize = 14;

/// Masked message bytes
pub const SECRET_BLOB: [u8; MESSAGE_LEN] = [
    0x12, 0x3F, 0x36, 0x36, 0x35, 0x76, 0x7A, 0x0D, //
    0x35, 0x28, 0x36, 0x3E, 0x7B, 0x50,
];

/// Single-byte XOR key
pub const X_KEY: u8 = 0x5A;

/// Pesan hasil decode, dihitung saat compile time
pub const MESSAGE: [u8; MESSAGE_LEN] = decode(&SECRET_BLOB, X_KEY);

/// Decode fixed-size blob
///
/// `const fn` supaya [`MESSAGE`] bisa dihitung tanpa runtime cost.
#[inline(always)]
pub const fn decode<const N: usize>(blob: &[u8; N], key: u8) -> [u8; N] {
    let mut out = [0u8; N];
    let mut i = 0;
    while i < N {
        out[i] = blob[i] ^ key;
        i += 1;
    }
    out
}

/// Decode ke pre-allocated buffer
///
/// Returns jumlah byte yang ditulis: `min(src.len(), dst.len())`.
#[inline(always)]
pub fn decode_into(src: &[u8], dst: &mut [u8], key: u8) -> usize {
    let n = src.len().min(dst.len());
    for (d, s) in dst[..n].iter_mut().zip(&src[..n]) {
        *d = *s ^ key;
    }
    n
}

/// Decoded message sebagai slice
#[inline(always)]
pub fn message() -> &'static [u8] {
    &MESSAGE
}
